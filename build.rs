// Writes one table entry per signed/unsigned pair, so every width goes through
// the real typed shift instead of a generic u128 emulation.

pub fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    write_width_table();
}

fn write_shift_row(name: &str, ty: &str, value: &str, source: &mut String) {
    source.push_str(&format!(
        "
    {{
        let x: {ty} = {value};
        let res: {ty} = x >> 1;
        ShiftRow {{
            ty: \"{name}\",
            operand: x as u128 & mask,
            result: res as u128 & mask,
            bytes: std::mem::size_of::<{ty}>(),
        }}
    }},"
    ));
}

fn write_int_pair(bits: u32, source: &mut String) {
    let signed = format!("i{bits}");
    let unsigned = format!("u{bits}");

    source.push_str(&format!(
        "
    // {bits} bits
    {{
        let mask: u128 = u128::MAX >> (128 - {bits});"
    ));
    source.push_str("\n    [");
    write_shift_row(&format!("s{bits}"), &signed, "-1", source);
    write_shift_row(&format!("u{bits}"), &unsigned, &format!("{unsigned}::MAX"), source);
    source.push_str("\n    ]\n    },");
}

fn write_width_table() {
    let mut source = String::new();
    source.push_str("[");

    write_int_pair(8, &mut source);
    write_int_pair(16, &mut source);
    write_int_pair(32, &mut source);
    write_int_pair(64, &mut source);
    write_int_pair(128, &mut source);

    source.push_str("\n]");

    let out_dir = std::env::var("OUT_DIR").unwrap();
    std::fs::write(format!("{out_dir}/width_table.rs"), source).unwrap();
}

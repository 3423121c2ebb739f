use std::{fmt, io::Write};

/// One line of the report: a value of some integer type shifted right by one.
///
/// Operand and result are stored as bit patterns zero-extended into a u128,
/// so a signed -1 of any width shows up as all ones for that width only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRow {
    pub ty: &'static str,
    pub operand: u128,
    pub result: u128,
    pub bytes: usize,
}

impl ShiftRow {
    fn bits(&self) -> usize {
        self.bytes * 8
    }

    /// Formats operand and result as fixed-width binary, for verbose output.
    pub fn binary(&self) -> String {
        format!(
            "{:0w$b} >> 1 == {:0w$b}",
            self.operand,
            self.result,
            w = self.bits()
        )
    }
}

impl fmt::Display for ShiftRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(0x{:0w$x}) >> 1 == 0x{:0w$x}",
            self.ty,
            self.operand,
            self.result,
            w = self.bytes * 2
        )
    }
}

/// Shifts an all-ones byte right by one, once as `i8` and once as `u8`.
///
/// Rust defines `>>` on signed integers as an arithmetic shift, so the signed
/// result keeps its top bit. On unsigned integers it is a logical shift and the
/// top bit is cleared. Neither depends on the target.
pub fn byte_rows() -> [ShiftRow; 2] {
    let sbyte: i8 = -1; // 0xFF
    let ubyte: u8 = 0xFF;
    let sshifted = sbyte >> 1;
    let ushifted = ubyte >> 1;

    [
        ShiftRow {
            ty: "s8",
            operand: sbyte as u8 as u128,
            result: sshifted as u8 as u128,
            bytes: 1,
        },
        ShiftRow {
            ty: "u8",
            operand: ubyte as u128,
            result: ushifted as u128,
            bytes: 1,
        },
    ]
}

/// Signed/unsigned pairs for every integer width from 8 to 128 bits.
pub fn width_table() -> [[ShiftRow; 2]; 5] {
    include!(concat!(env!("OUT_DIR"), "/width_table.rs"))
}

/// Writes the byte report, followed by the wider types if requested.
pub fn report(out: &mut impl Write, all_widths: bool, verbose: bool) -> std::io::Result<()> {
    let mut rows: Vec<ShiftRow> = byte_rows().to_vec();

    if all_widths {
        // the 8 bit pair is already covered by byte_rows
        for pair in width_table().iter().skip(1) {
            rows.extend_from_slice(pair);
        }
    }

    for row in &rows {
        writeln!(out, "{}", row)?;
        if verbose {
            eprintln!("    {:5} {}", row.ty, row.binary());
        }
    }
    out.flush()
}

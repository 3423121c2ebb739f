use std::process::{Command, Output};

fn shiftnote(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shiftnote"))
        .args(args)
        .env_remove("CHECK_WORKERS")
        .output()
        .expect("failed to run shiftnote")
}

#[test]
fn no_args_prints_byte_report() {
    let out = shiftnote(&[]);
    assert!(out.status.success());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "s8(0xff) >> 1 == 0xff\nu8(0xff) >> 1 == 0x7f\n"
    );
    assert!(out.stderr.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let first = shiftnote(&[]).stdout;
    for _ in 0..3 {
        assert_eq!(shiftnote(&[]).stdout, first);
    }
}

#[test]
fn all_widths_appends_wider_types() {
    let out = shiftnote(&["--all-widths"]);
    assert!(out.status.success());

    let text = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[..2], ["s8(0xff) >> 1 == 0xff", "u8(0xff) >> 1 == 0x7f"]);
    assert_eq!(lines[4], "s32(0xffffffff) >> 1 == 0xffffffff");
    assert_eq!(lines[7], "u64(0xffffffffffffffff) >> 1 == 0x7fffffffffffffff");
}

#[test]
fn verbose_and_profile_leave_stdout_alone() {
    let out = shiftnote(&["-v", "--profile"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "s8(0xff) >> 1 == 0xff\nu8(0xff) >> 1 == 0x7f\n"
    );

    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("11111111 >> 1 == 01111111"));
    assert!(err.contains("PROFILE RESULTS:"));
}

#[test]
fn check_mode_passes() {
    let out = Command::new(env!("CARGO_BIN_EXE_shiftnote"))
        .args(["--check", "--runs", "3"])
        .env("CHECK_WORKERS", "2")
        .output()
        .expect("failed to run shiftnote");
    assert!(out.status.success());

    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("3 / 3 runs passed"), "{}", text);
    assert!(text.contains("using 2 workers"), "{}", text);
}

#[test]
fn unknown_flag_is_rejected() {
    let out = shiftnote(&["--bogus"]);
    assert!(!out.status.success());
}

#[test]
fn oversized_run_count_is_rejected() {
    let out = shiftnote(&["--check", "--runs", "18446744073709551615"]);
    assert_eq!(out.status.code(), Some(2));

    let err = String::from_utf8(out.stderr).unwrap();
    assert!(!err.contains("panicked"), "{}", err);
    assert!(err.contains("--runs"), "{}", err);
    assert!(out.stdout.is_empty());
}

#[test]
fn zero_run_count_is_rejected() {
    let out = shiftnote(&["--check", "--runs", "0"]);
    assert_eq!(out.status.code(), Some(2));
}

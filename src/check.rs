use std::{
    error::Error,
    path::Path,
    process::Command,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use crate::shift;

struct SharedCheckState {
    count_success: usize,
    time_total: Duration,
    next_run: usize,
}

/// Runs `program` with no arguments `run_count` times and checks each run
/// prints exactly the byte report. Returns true if every run passed.
pub fn check(program: &Path, run_count: usize) -> bool {
    use colored::Colorize;

    let worker_count = get_worker_count().min(run_count.max(1));
    println!();
    println!("checking {} with {} runs", program.display(), run_count);
    println!("using {} workers", worker_count);
    println!();

    let expected = expected_output();

    let state = Arc::new(Mutex::new(SharedCheckState {
        count_success: 0,
        time_total: Duration::ZERO,
        next_run: 0,
    }));

    let workers: Vec<_> = (0..worker_count)
        .map(|_| {
            let state = state.clone();
            let expected = expected.clone();
            let program = program.to_owned();

            std::thread::spawn(move || loop {
                let run_n = {
                    let mut state = state.lock().expect("check worker panicked");
                    if state.next_run < run_count {
                        state.next_run += 1;
                        Some(state.next_run - 1)
                    } else {
                        None
                    }
                };

                let Some(run_n) = run_n else {
                    break;
                };

                let res_str = match run_once(&program, &expected) {
                    Err(msg) => format!("{}", format!("FAIL: {}", msg).red()),
                    Ok(time) => {
                        {
                            let mut state = state.lock().expect("check worker panicked");
                            state.count_success += 1;
                            state.time_total += time;
                        }
                        format!("{} ({:?})", "GOOD:".green(), time)
                    }
                };

                println!("run {:<6} {}", run_n, res_str);
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("check worker panicked");
    }

    let state = state.lock().expect("check worker panicked");

    println!();
    println!("{} / {} runs passed", state.count_success, run_count);
    println!("runs took {:?} total", state.time_total);
    println!();

    state.count_success == run_count
}

/// What a run with no arguments must print.
pub fn expected_output() -> Vec<u8> {
    let mut out = Vec::new();
    shift::report(&mut out, false, false).expect("writing to a Vec cannot fail");
    out
}

const ERROR_CHARS: usize = 80;

fn run_once(program: &Path, expected: &[u8]) -> Result<Duration, String> {
    let res = time_command(program).map_err(|e| format!("spawn failed ( {} )", e))?;

    if !res.success {
        let err = String::from_utf8_lossy(&res.stderr);
        let first_line = err.lines().next().unwrap_or("");
        let first_line: String = first_line.chars().take(ERROR_CHARS).collect();
        return Err(format!("non-zero exit ( {} )", first_line));
    }

    compare_output(expected, &res.stdout)?;
    Ok(res.time)
}

fn compare_output(expected: &[u8], actual: &[u8]) -> Result<(), String> {
    if expected == actual {
        return Ok(());
    }
    let expected = String::from_utf8_lossy(expected);
    let actual = String::from_utf8_lossy(actual);
    for (n, (e, a)) in expected.lines().zip(actual.lines()).enumerate() {
        if e != a {
            return Err(format!("output mismatch on line {}: {:?}", n + 1, a));
        }
    }
    let (expected_count, actual_count) = (expected.lines().count(), actual.lines().count());
    if expected_count == actual_count {
        return Err("output mismatch: trailing newline differs".into());
    }
    Err(format!(
        "output mismatch: expected {} lines, got {}",
        expected_count, actual_count
    ))
}

struct TimeResult {
    success: bool,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    time: Duration,
}

fn time_command(cmd_name: &Path) -> Result<TimeResult, Box<dyn Error>> {
    let mut cmd = Command::new(cmd_name);
    cmd.env_remove("CHECK_WORKERS");

    let t = Instant::now();
    let output = cmd.output()?;
    let time = t.elapsed();

    Ok(TimeResult {
        success: output.status.success(),
        stdout: output.stdout,
        stderr: output.stderr,
        time,
    })
}

fn parse_worker_count(val: Option<&str>) -> Option<usize> {
    val?.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// NOTE: Many workers make per-run timings noisy. Set CHECK_WORKERS=1 for
/// steadier numbers.
fn get_worker_count() -> usize {
    let var = std::env::var("CHECK_WORKERS").ok();
    if let Some(n) = parse_worker_count(var.as_deref()) {
        return n;
    }

    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

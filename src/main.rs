mod check;
mod cli;
mod profiler;
mod shift;

use std::process;

use clap::Parser;

fn main() {
    set_panic_handler();

    let args = cli::CliArgs::parse();

    let ok = run(&args);

    if args.profile {
        profiler::profile_log();
    }

    if !ok {
        process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> bool {
    if args.check {
        let program = match std::env::current_exe() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("failed to get own path: {}", e);
                return false;
            }
        };
        let (ok, _) = profiler::profile("check", || check::check(&program, args.runs as usize));
        return ok;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let (res, _) = profiler::profile("report", || {
        shift::report(&mut out, args.all_widths, args.verbose)
    });

    if let Err(e) = res {
        eprintln!("failed to write report: {}", e);
        return false;
    }
    true
}

/// When any thread panics, close the process.
fn set_panic_handler() {
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        orig_hook(panic_info);
        process::exit(1);
    }));
}

use clap::Parser;

pub const MAX_RUNS: u64 = 10_000;

/// Prints arithmetic vs logical right-shift results for an all-ones byte.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Also report 16, 32, 64 and 128 bit integers.
    #[clap(long)]
    pub all_widths: bool,

    /// Run this program repeatedly and verify its output.
    #[clap(long)]
    pub check: bool,

    /// Number of runs for --check.
    #[clap(long, default_value_t = 8, value_parser = clap::value_parser!(u64).range(1..=MAX_RUNS))]
    pub runs: u64,

    /// Dump timing information after running.
    #[clap(long)]
    pub profile: bool,

    /// Print bit patterns to stderr.
    #[clap(long, short)]
    pub verbose: bool,
}

use ahash::AHashMap;

use std::{
    sync::LazyLock,
    sync::RwLock,
    time::{Duration, Instant},
};

static PROFILER_TABLE: LazyLock<RwLock<AHashMap<&'static str, Duration>>> =
    LazyLock::new(|| RwLock::new(AHashMap::new()));

/// Runs `f`, adding its wall time to the total for `tag`.
pub fn profile<T: FnOnce() -> X, X>(tag: &'static str, f: T) -> (X, Duration) {
    let start = Instant::now();
    let res = f();
    let time = start.elapsed();
    // a poisoned table only means another thread panicked mid-update
    let mut table = PROFILER_TABLE.write().unwrap_or_else(|e| e.into_inner());
    *table.entry(tag).or_default() += time;
    (res, time)
}

fn sorted_totals() -> Vec<(&'static str, Duration)> {
    let table = PROFILER_TABLE.read().unwrap_or_else(|e| e.into_inner());
    let mut pairs: Vec<_> = table.iter().map(|(k, v)| (*k, *v)).collect();
    pairs.sort_by(|(_, b), (_, a)| a.cmp(b));
    pairs
}

/// Goes to stderr so the report on stdout is unaffected.
pub fn profile_log() {
    eprintln!("PROFILE RESULTS:");
    for (name, t) in sorted_totals() {
        eprintln!("    {:20} {:?}", name, t);
    }
}

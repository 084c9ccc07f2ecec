// Lightweight instrumentation for counting hotspots in development.
// Thread-local cells keep the hot paths free of locking and make the
// counters safe under concurrent callers; reset and snapshot helpers
// let a small dev binary collect simple breakdowns.
use std::cell::Cell;

thread_local! {
    static FIND_CALLS: Cell<u64> = Cell::new(0);
    static WINDOWS_EXAMINED: Cell<u64> = Cell::new(0);
    static BYTES_COMPARED: Cell<u64> = Cell::new(0);
    static REPLACEMENTS: Cell<u64> = Cell::new(0);
}

pub fn reset_counters() {
    FIND_CALLS.with(|c| c.set(0));
    WINDOWS_EXAMINED.with(|c| c.set(0));
    BYTES_COMPARED.with(|c| c.set(0));
    REPLACEMENTS.with(|c| c.set(0));
}

/// (find calls, candidate windows examined, bytes compared, replacements)
pub fn counters_snapshot() -> (u64, u64, u64, u64) {
    let finds = FIND_CALLS.with(|c| c.get());
    let windows = WINDOWS_EXAMINED.with(|c| c.get());
    let bytes = BYTES_COMPARED.with(|c| c.get());
    let repl = REPLACEMENTS.with(|c| c.get());
    (finds, windows, bytes, repl)
}

pub fn add_finds(n: u64) {
    FIND_CALLS.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_windows(n: u64) {
    WINDOWS_EXAMINED.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_bytes(n: u64) {
    BYTES_COMPARED.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_replacements(n: u64) {
    REPLACEMENTS.with(|c| c.set(c.get().wrapping_add(n)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::Case;

    #[test]
    fn insensitive_find_counts_candidate_windows() {
        reset_counters();
        let _ = crate::search::find("xxdxDxdEr", "derp", Case::Insensitive);
        let (finds, windows, bytes, _) = counters_snapshot();
        assert_eq!(finds, 1);
        // three candidate 'd'/'D' starts fit a 4-byte window in a 9-byte haystack
        assert!(windows >= 1);
        assert_eq!(bytes, windows * 4);
        reset_counters();
        assert_eq!(counters_snapshot(), (0, 0, 0, 0));
    }
}

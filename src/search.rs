// Substring search under a runtime case mode.
//
// Sensitive search delegates to memchr::memmem, which is sublinear on
// average and never worse than a naive scan. Insensitive search is a
// linear candidate scan: the needle is folded to lowercase once, then
// memchr/memchr2 locates bytes matching either case variant of the
// first needle byte and each candidate window is verified pairwise.
// Worst case O(n*m) for the insensitive scan.
//
// All positions are byte offsets into the haystack. Folding is
// ASCII-only, so a reported match can neither start nor end inside a
// multi-byte UTF-8 sequence: continuation bytes never fold-equal an
// ASCII byte, and non-ASCII bytes must match exactly. Callers may
// therefore slice the haystack at any reported boundary.

use memchr::memmem;
use smallvec::SmallVec;

use crate::case::Case;
use crate::instrument;

// Inline storage for the folded needle; needles longer than this spill
// to the heap once per call, not per window.
type FoldedNeedle = SmallVec<[u8; 16]>;

fn fold_needle(needle: &[u8]) -> FoldedNeedle {
    needle.iter().map(|b| b.to_ascii_lowercase()).collect()
}

#[inline]
fn window_eq(window: &[u8], folded: &[u8]) -> bool {
    instrument::add_windows(1);
    instrument::add_bytes(folded.len() as u64);
    window
        .iter()
        .zip(folded)
        .all(|(b, f)| b.to_ascii_lowercase() == *f)
}

/// Finds the lowest index at which `needle` occurs in `haystack`.
///
/// Equivalent to [`find_at`] with a start position of zero.
pub fn find(haystack: &str, needle: &str, case: Case) -> Option<usize> {
    find_at(haystack, needle, case, 0)
}

/// Finds the lowest index >= `start` at which `needle` occurs in
/// `haystack`, or `None` if there is none or `start` exceeds the
/// haystack length. An empty needle matches at `start` itself.
pub fn find_at(haystack: &str, needle: &str, case: Case, start: usize) -> Option<usize> {
    instrument::add_finds(1);

    let hay = haystack.as_bytes();
    if start > hay.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(start);
    }
    if hay.len() - start < needle.len() {
        return None;
    }

    match case {
        Case::Sensitive => memmem::find(&hay[start..], needle.as_bytes()).map(|at| at + start),
        Case::Insensitive => {
            let folded = fold_needle(needle.as_bytes());
            let (lower, upper) = (folded[0], folded[0].to_ascii_uppercase());

            // Candidate starts live in pos..=last; scan for the first
            // byte of the needle in either case, then verify the window.
            let last = hay.len() - folded.len();
            let mut pos = start;
            while pos <= last {
                let candidate = if lower == upper {
                    memchr::memchr(lower, &hay[pos..=last])
                } else {
                    memchr::memchr2(lower, upper, &hay[pos..=last])
                };
                let offset = candidate?;

                let at = pos + offset;
                if window_eq(&hay[at..at + folded.len()], &folded) {
                    return Some(at);
                }
                pos = at + 1;
            }
            None
        }
    }
}

/// Finds the highest index at which `needle` occurs in `haystack`.
///
/// Equivalent to [`rfind_before`] with the haystack length as the end
/// position.
pub fn rfind(haystack: &str, needle: &str, case: Case) -> Option<usize> {
    rfind_before(haystack, needle, case, haystack.len())
}

/// Finds the highest index at which `needle` occurs in `haystack` with
/// the match ending at or before `end` (the index is <= end - needle
/// length). `end` is clamped to the haystack length. An empty needle
/// matches at `end` itself.
pub fn rfind_before(haystack: &str, needle: &str, case: Case, end: usize) -> Option<usize> {
    instrument::add_finds(1);

    let end = end.min(haystack.len());
    if needle.is_empty() {
        return Some(end);
    }
    if end < needle.len() {
        return None;
    }
    let hay = &haystack.as_bytes()[..end];

    match case {
        Case::Sensitive => memmem::rfind(hay, needle.as_bytes()),
        Case::Insensitive => {
            let folded = fold_needle(needle.as_bytes());
            let (lower, upper) = (folded[0], folded[0].to_ascii_uppercase());

            // Mirror of the forward scan: candidate starts live in
            // 0..limit, searched from the tail.
            let mut limit = hay.len() - folded.len() + 1;
            while limit > 0 {
                let candidate = if lower == upper {
                    memchr::memrchr(lower, &hay[..limit])
                } else {
                    memchr::memrchr2(lower, upper, &hay[..limit])
                };
                let at = candidate?;

                if window_eq(&hay[at..at + folded.len()], &folded) {
                    return Some(at);
                }
                limit = at;
            }
            None
        }
    }
}

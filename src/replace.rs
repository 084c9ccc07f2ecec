// In-place substitution: scan forward, splice each match, resume after
// the inserted text so freshly inserted content is never re-matched.
// The count bound is an Option; `None` means unbounded.

use crate::case::Case;
use crate::instrument;
use crate::search;

/// Replaces up to `count` occurrences of `from` with `to` within
/// `data`, in place, left to right. `None` replaces every occurrence.
/// Returns the number of occurrences replaced.
///
/// Under an insensitive mode the matched span's original casing is
/// removed and `to` is inserted exactly as given. An empty `from`
/// would match at every scan position without consuming input, so it
/// replaces nothing and returns 0.
pub fn replace(
    data: &mut String,
    from: &str,
    to: &str,
    case: Case,
    count: Option<usize>,
) -> usize {
    if count == Some(0) || from.is_empty() || data.is_empty() {
        return 0;
    }

    let mut replaced = 0;
    let mut pos = 0;
    while let Some(at) = search::find_at(data, from, case, pos) {
        data.replace_range(at..at + from.len(), to);

        // Resume scanning after the just-inserted replacement text.
        pos = at + to.len();
        replaced += 1;

        if Some(replaced) == count {
            break;
        }
    }

    instrument::add_replacements(replaced as u64);
    replaced
}

/// Non-mutating variant of [`replace`]: copies `data` into a fresh
/// owned buffer, applies the same algorithm, and returns the buffer
/// together with the number of occurrences replaced.
pub fn replace_copy(
    data: &str,
    from: &str,
    to: &str,
    case: Case,
    count: Option<usize>,
) -> (String, usize) {
    let mut copy = data.to_string();
    let replaced = replace(&mut copy, from, to, case, count);
    (copy, replaced)
}

// Trimming: strip whitespace or repeated patterns from either side of
// a string, returning borrowed sub-slices of the input. Nothing here
// allocates or mutates.
//
// Whitespace is the classic byte-wise set (space, \t, \n, \v, \f, \r),
// not Unicode whitespace. Pattern trims remove every repetition of the
// pattern; the `_any` variants loop over a set of patterns until none
// of them matches. Empty patterns are skipped, since removing a
// zero-length prefix would never terminate.

use crate::case::Case;
use crate::compare;

#[inline]
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Trims whitespace from the left side of `data`.
pub fn trim_left(data: &str) -> &str {
    let bytes = data.as_bytes();
    let mut index = 0;
    while index < bytes.len() && is_space(bytes[index]) {
        index += 1;
    }
    &data[index..]
}

/// Trims whitespace from the right side of `data`.
pub fn trim_right(data: &str) -> &str {
    let bytes = data.as_bytes();
    let mut end = bytes.len();
    while end > 0 && is_space(bytes[end - 1]) {
        end -= 1;
    }
    &data[..end]
}

/// Trims whitespace from both sides of `data`.
pub fn trim(data: &str) -> &str {
    trim_right(trim_left(data))
}

/// Removes every leading repetition of `to_remove` from `data` under
/// the given case mode.
pub fn trim_left_matches<'a>(data: &'a str, to_remove: &str, case: Case) -> &'a str {
    let mut data = data;
    if !to_remove.is_empty() {
        while compare::starts_with(data, to_remove, case) {
            data = &data[to_remove.len()..];
        }
    }
    data
}

/// Removes every trailing repetition of `to_remove` from `data` under
/// the given case mode.
pub fn trim_right_matches<'a>(data: &'a str, to_remove: &str, case: Case) -> &'a str {
    let mut data = data;
    if !to_remove.is_empty() {
        while compare::ends_with(data, to_remove, case) {
            data = &data[..data.len() - to_remove.len()];
        }
    }
    data
}

/// Removes every leading and trailing repetition of `to_remove`.
pub fn trim_matches<'a>(data: &'a str, to_remove: &str, case: Case) -> &'a str {
    trim_right_matches(trim_left_matches(data, to_remove, case), to_remove, case)
}

/// Removes leading repetitions of any pattern in `to_remove`, looping
/// until no listed pattern matches the start of the data.
pub fn trim_left_matches_any<'a>(data: &'a str, to_remove: &[&str], case: Case) -> &'a str {
    let mut data = data;
    loop {
        let mut had_removal = false;
        for remove in to_remove {
            if remove.is_empty() {
                continue;
            }
            while compare::starts_with(data, remove, case) {
                data = &data[remove.len()..];
                had_removal = true;
            }
        }
        if !had_removal {
            return data;
        }
    }
}

/// Removes trailing repetitions of any pattern in `to_remove`, looping
/// until no listed pattern matches the end of the data.
pub fn trim_right_matches_any<'a>(data: &'a str, to_remove: &[&str], case: Case) -> &'a str {
    let mut data = data;
    loop {
        let mut had_removal = false;
        for remove in to_remove {
            if remove.is_empty() {
                continue;
            }
            while compare::ends_with(data, remove, case) {
                data = &data[..data.len() - remove.len()];
                had_removal = true;
            }
        }
        if !had_removal {
            return data;
        }
    }
}

/// Removes leading and trailing repetitions of any pattern in
/// `to_remove`.
pub fn trim_matches_any<'a>(data: &'a str, to_remove: &[&str], case: Case) -> &'a str {
    trim_right_matches_any(trim_left_matches_any(data, to_remove, case), to_remove, case)
}

//! Single-shot structural comparisons: whole-string equality and
//! prefix/suffix checks. These compare exactly one window and never
//! search.

use crate::case::Case;

/// Compares two strings for equality under the given case mode.
///
/// Lengths are checked before any byte comparison.
pub fn equal(left: &str, right: &str, case: Case) -> bool {
    if left.len() != right.len() {
        return false;
    }
    match case {
        Case::Sensitive => left == right,
        Case::Insensitive => left.as_bytes().eq_ignore_ascii_case(right.as_bytes()),
    }
}

/// True if `data` starts with `prefix` under the given case mode.
/// Equal length strings match if fully equal.
pub fn starts_with(data: &str, prefix: &str, case: Case) -> bool {
    let (data, prefix) = (data.as_bytes(), prefix.as_bytes());
    if data.len() < prefix.len() {
        return false;
    }
    match case {
        Case::Sensitive => &data[..prefix.len()] == prefix,
        Case::Insensitive => data[..prefix.len()].eq_ignore_ascii_case(prefix),
    }
}

/// True if `data` ends with `suffix` under the given case mode.
/// Equal length strings match if fully equal.
pub fn ends_with(data: &str, suffix: &str, case: Case) -> bool {
    let (data, suffix) = (data.as_bytes(), suffix.as_bytes());
    if data.len() < suffix.len() {
        return false;
    }
    match case {
        Case::Sensitive => &data[data.len() - suffix.len()..] == suffix,
        Case::Insensitive => data[data.len() - suffix.len()..].eq_ignore_ascii_case(suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_modes() {
        assert!(equal("dErP", "dErP", Case::Sensitive));
        assert!(!equal("herp", "HERP", Case::Sensitive));
        assert!(equal("dErP", "DeRp", Case::Insensitive));
        assert!(equal("herp", "HERP", Case::Insensitive));
    }

    #[test]
    fn equal_length_mismatch_short_circuits() {
        assert!(!equal("abcd", "abc", Case::Sensitive));
        assert!(!equal("abcd", "abc", Case::Insensitive));
        assert!(equal("", "", Case::Sensitive));
    }

    #[test]
    fn starts_with_whole_string_is_a_prefix() {
        assert!(starts_with("abcdefg", "abcdefg", Case::Sensitive));
        assert!(starts_with("abcdefg", "ABCDEFG", Case::Insensitive));
        assert!(!starts_with("abcdefg", "ABCDEFG", Case::Sensitive));
    }

    #[test]
    fn starts_with_longer_prefix_is_false() {
        assert!(!starts_with("a", "ab", Case::Sensitive));
        assert!(!starts_with("a", "ab", Case::Insensitive));
    }

    #[test]
    fn ends_with_modes() {
        assert!(ends_with("abcdefg", "efg", Case::Sensitive));
        assert!(!ends_with("ABCDEFG", "abcdefg", Case::Sensitive));
        assert!(ends_with("aBcDeFg", "BcDeFg", Case::Insensitive));
        assert!(!ends_with("a", "Ab", Case::Insensitive));
    }

    #[test]
    fn empty_needles_always_match() {
        assert!(starts_with("abc", "", Case::Sensitive));
        assert!(ends_with("abc", "", Case::Sensitive));
        assert!(starts_with("", "", Case::Insensitive));
    }
}

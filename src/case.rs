/// Selects the comparison predicate used by every operation in this crate.
///
/// The mode is chosen per call and never stored; folding is ASCII-only
/// (`A`-`Z` map to `a`-`z`, every other byte value is compared as-is).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    /// Compare case sensitive. This is the default across all functions.
    #[default]
    Sensitive,
    /// Compare case insensitive.
    Insensitive,
}

/// Compares two bytes for equality under the given case mode.
#[inline]
pub fn eq_byte(left: u8, right: u8, case: Case) -> bool {
    match case {
        Case::Sensitive => left == right,
        Case::Insensitive => left.to_ascii_lowercase() == right.to_ascii_lowercase(),
    }
}

/// Lowercases `data` in place (ASCII letters only).
pub fn to_lower(data: &mut String) {
    data.make_ascii_lowercase();
}

/// Returns a lowercased copy of `data` (ASCII letters only).
pub fn to_lower_copy(data: &str) -> String {
    data.to_ascii_lowercase()
}

/// Uppercases `data` in place (ASCII letters only).
pub fn to_upper(data: &mut String) {
    data.make_ascii_uppercase();
}

/// Returns an uppercased copy of `data` (ASCII letters only).
pub fn to_upper_copy(data: &str) -> String {
    data.to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitive_is_bitwise() {
        assert!(eq_byte(b'a', b'a', Case::Sensitive));
        assert!(!eq_byte(b'a', b'A', Case::Sensitive));
    }

    #[test]
    fn insensitive_folds_ascii_letters_only() {
        assert!(eq_byte(b'a', b'A', Case::Insensitive));
        assert!(eq_byte(b'Z', b'z', Case::Insensitive));
        assert!(!eq_byte(b'a', b'b', Case::Insensitive));
        // non-ASCII bytes pass through as identity comparisons
        assert!(eq_byte(0xC3, 0xC3, Case::Insensitive));
        assert!(!eq_byte(0xC3, 0xA3, Case::Insensitive));
        // digits and punctuation are unaffected by folding
        assert!(eq_byte(b'1', b'1', Case::Insensitive));
        assert!(!eq_byte(b'[', b'{', Case::Insensitive));
    }

    #[test]
    fn casing_transforms() {
        let mut data = String::from("DERP");
        to_lower(&mut data);
        assert_eq!(data, "derp");
        assert_eq!(to_lower_copy("DERP"), "derp");

        let mut data = String::from("derp");
        to_upper(&mut data);
        assert_eq!(data, "DERP");
        assert_eq!(to_upper_copy("derp"), "DERP");

        // non-ASCII content is left alone
        assert_eq!(to_upper_copy("caf\u{e9}"), "CAF\u{e9}");
    }
}

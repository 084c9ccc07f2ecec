//! Joining: render a sequence of displayable values into one string
//! with a delimiter between parts. Each call formats into a fresh
//! buffer; there is no shared scratch stream.

use std::fmt::{Display, Write};

/// Joins `parts` into a single string separated by `delim`. The items
/// must implement [`Display`]. An empty sequence joins to the empty
/// string.
pub fn join<I>(parts: I, delim: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    let mut first = true;
    for part in parts {
        if first {
            first = false;
        } else {
            out.push_str(delim);
        }
        // fmt::Write into a String cannot fail
        let _ = write!(out, "{part}");
    }
    out
}

/// Maps each part and joins the results, separated by `delim`.
pub fn map_join<I, F, T>(parts: I, delim: &str, mut map: F) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item) -> T,
    T: Display,
{
    join(parts.into_iter().map(&mut map), delim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_csv() {
        let parts: Vec<i64> = vec![1, 2, 3];
        assert_eq!(join(parts, ","), "1,2,3");
    }

    #[test]
    fn join_multibyte_delim() {
        let parts: Vec<i64> = vec![1, 2, 3];
        assert_eq!(join(parts, ":-"), "1:-2:-3");
    }

    #[test]
    fn join_no_parts() {
        let parts: Vec<i64> = vec![];
        assert_eq!(join(parts, ","), "");
    }

    #[test]
    fn join_single_part_has_no_delim() {
        assert_eq!(join(["only"], ","), "only");
    }

    #[test]
    fn map_join_csv() {
        let parts: Vec<i64> = vec![1, 2, 3];
        assert_eq!(map_join(parts, ",", |x| x * x), "1,4,9");
    }

    #[test]
    fn map_join_no_parts() {
        let parts: Vec<i64> = vec![];
        assert_eq!(map_join(parts, ",", |x| x * x), "");
    }
}

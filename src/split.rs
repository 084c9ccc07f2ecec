// Tokenization: partition a haystack into zero-copy slices separated by
// a delimiter. Every variant below shares one partition loop; the
// closure decides whether to keep going after each slice.
//
// Adjacent, leading and trailing delimiters all produce empty slices,
// never coalesced. An input without the delimiter (including the empty
// input) yields exactly one slice. An empty delimiter would match at
// every position without advancing the cursor, so it is rejected up
// front instead of looping forever.

use thiserror::Error;

use crate::case::Case;
use crate::search;

/// The caller errors a split operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An empty delimiter never matches and can never advance a split.
    #[error("empty delimiter passed to a split operation")]
    EmptyDelimiter,
}

// Shared partition loop. `visit` returns false to stop early; the final
// slice (after the last delimiter) is always visited when reached.
fn for_each_part<'a, F>(data: &'a str, delim: &str, case: Case, mut visit: F) -> Result<(), Error>
where
    F: FnMut(&'a str) -> bool,
{
    if delim.is_empty() {
        return Err(Error::EmptyDelimiter);
    }

    let mut start = 0;
    loop {
        match search::find_at(data, delim, case, start) {
            None => {
                // The final slice runs to the end of the data. This is
                // also the sole slice when no delimiter is present.
                visit(&data[start..]);
                return Ok(());
            }
            Some(next) => {
                if !visit(&data[start..next]) {
                    return Ok(());
                }
                start = next + delim.len();
            }
        }
    }
}

/// Splits `data` by `delim`, returning zero-copy slices of the input.
pub fn split<'a>(data: &'a str, delim: &str, case: Case) -> Result<Vec<&'a str>, Error> {
    let mut out = Vec::new();
    split_into(data, delim, case, &mut out)?;
    Ok(out)
}

/// Splits `data` by `delim`, appending the slices into `out`. The
/// vector can be pre-allocated for the expected number of items.
pub fn split_into<'a>(
    data: &'a str,
    delim: &str,
    case: Case,
    out: &mut Vec<&'a str>,
) -> Result<(), Error> {
    for_each_part(data, delim, case, |part| {
        out.push(part);
        true
    })
}

/// Splits `data` by `delim`, passing each slice through `map` instead
/// of collecting it; no intermediate slice vector is materialized.
pub fn split_map<'a, T, F>(data: &'a str, delim: &str, case: Case, map: F) -> Result<Vec<T>, Error>
where
    F: FnMut(&'a str) -> T,
{
    let mut out = Vec::new();
    split_map_into(data, delim, case, map, &mut out)?;
    Ok(out)
}

/// Out-parameter variant of [`split_map`].
pub fn split_map_into<'a, T, F>(
    data: &'a str,
    delim: &str,
    case: Case,
    mut map: F,
    out: &mut Vec<T>,
) -> Result<(), Error>
where
    F: FnMut(&'a str) -> T,
{
    for_each_part(data, delim, case, |part| {
        out.push(map(part));
        true
    })
}

/// Splits `data` by `delim`, invoking `visit` for every slice in
/// left-to-right order.
pub fn split_for_each<'a, F>(data: &'a str, delim: &str, case: Case, mut visit: F) -> Result<(), Error>
where
    F: FnMut(&'a str),
{
    for_each_part(data, delim, case, |part| {
        visit(part);
        true
    })
}

/// Splits `data` by `delim`, invoking `visit` for each slice until it
/// returns `false`. The slice following the last delimiter is visited
/// unconditionally when reached.
pub fn split_while<'a, F>(data: &'a str, delim: &str, case: Case, visit: F) -> Result<(), Error>
where
    F: FnMut(&'a str) -> bool,
{
    for_each_part(data, delim, case, visit)
}

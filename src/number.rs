//! Numeric parsing: whole-string conversions that report failure
//! through `Option` instead of panicking.

use std::str::FromStr;

/// Converts `data` to a number. The entire string must parse; `None`
/// otherwise. A leading `+` is accepted, and a leading `-` fails for
/// unsigned targets.
pub fn to_number<T: FromStr>(data: &str) -> Option<T> {
    data.parse().ok()
}

/// Integer types that can parse from a string in an explicit radix.
pub trait FromStrRadix: Sized {
    fn from_str_radix(data: &str, radix: u32) -> Option<Self>;
}

macro_rules! impl_from_str_radix {
    ($($ty:ty),*) => {
        $(impl FromStrRadix for $ty {
            fn from_str_radix(data: &str, radix: u32) -> Option<Self> {
                <$ty>::from_str_radix(data, radix).ok()
            }
        })*
    };
}

impl_from_str_radix!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Converts an integer string in the given radix (2 to 36), `None` on
/// any parse failure.
pub fn to_number_radix<T: FromStrRadix>(data: &str, radix: u32) -> Option<T> {
    T::from_str_radix(data, radix)
}

/// True if `data` parses in its entirety as a signed integer.
pub fn is_int(data: &str) -> bool {
    to_number::<i64>(data).is_some()
}

/// True if `data` parses in its entirety as a floating point value.
pub fn is_float(data: &str) -> bool {
    to_number::<f64>(data).is_some()
}

/// True if `data` parses as either an integer or a float.
pub fn is_number(data: &str) -> bool {
    is_int(data) || is_float(data)
}

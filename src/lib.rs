//! Zero-copy string utilities: case-sensitive/insensitive search,
//! split, join, trim, replace and numeric parsing over borrowed string
//! data. Search and tokenization return positions and sub-slices of
//! the caller's buffer without copying; only the replace operations
//! touch owned storage.

pub mod case;
pub mod compare;
pub mod errno;
pub mod fixture;
pub mod instrument;
pub mod join;
pub mod number;
pub mod replace;
pub mod search;
pub mod split;
pub mod trim;

pub use case::{Case, eq_byte, to_lower, to_lower_copy, to_upper, to_upper_copy};
pub use compare::{ends_with, equal, starts_with};
pub use errno::strerror;
pub use join::{join, map_join};
pub use number::{is_float, is_int, is_number, to_number, to_number_radix};
pub use replace::{replace, replace_copy};
pub use search::{find, find_at, rfind, rfind_before};
pub use split::{
    Error, split, split_for_each, split_into, split_map, split_map_into, split_while,
};
pub use trim::{
    trim, trim_left, trim_left_matches, trim_left_matches_any, trim_matches, trim_matches_any,
    trim_right, trim_right_matches, trim_right_matches_any,
};

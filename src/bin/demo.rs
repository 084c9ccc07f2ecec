// Walkthrough of the main call surface; mirrors the README examples.

use strkit::{Case, join, map_join, replace_copy, split, split_into, split_map, to_number};

fn main() {
    // A simple csv split. split() only allocates space for the slices
    // it returns; the slices themselves borrow from the input data.
    let parts = split("1,2,3", ",", Case::Sensitive).unwrap();
    println!("{parts:?}");

    // A split mapped into integers.
    let numbers =
        split_map("1,2,3", ",", Case::Sensitive, |part| to_number::<i64>(part).unwrap_or(0))
            .unwrap();
    println!("{numbers:?}");

    // A pre-allocated split, for large inputs, to reduce allocations.
    let mut parts = Vec::with_capacity(128);
    split_into("1,2,3,4,5,6,7,8", ",", Case::Sensitive, &mut parts).unwrap();
    println!("{parts:?}");

    // A simple csv join.
    let joined = join([1i64, 2, 3], ",");
    println!("{joined}");

    // A map join which squares its parts first.
    let joined = map_join([1i64, 2, 3], ",", |x| x * x);
    println!("{joined}");

    // Case-insensitive, bounded replace; the replacement text is
    // inserted verbatim, whatever casing was matched.
    let (data, count) = replace_copy("herp DERP cherp derp", "derp", "ferp", Case::Insensitive, Some(2));
    println!("{data} ({count} replaced)");

    // A consistent to-number api; failure is an Option, not a panic.
    let value = to_number::<u64>("420").unwrap_or(0);
    println!("{value}");
}

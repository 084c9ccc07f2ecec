//! Deterministic corpus generation for tests, the instrument binary
//! and benches. Everything derives from the seed, so runs are
//! reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliett",
    "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo", "sierra", "tango",
];

/// Shape of a generated record corpus.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub records: usize,
    pub fields_per_record: usize,
    /// delimiter placed between fields
    pub delim: &'static str,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        CorpusConfig {
            records: 64,
            fields_per_record: 8,
            delim: ",",
        }
    }
}

/// Generates delimiter-separated records from a seed. Each record is
/// `fields_per_record` words joined by `delim`.
pub fn generate_records(seed: u64, config: &CorpusConfig) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..config.records)
        .map(|_| {
            let fields =
                (0..config.fields_per_record).map(|_| WORDS[rng.gen_range(0..WORDS.len())]);
            crate::join::join(fields, config.delim)
        })
        .collect()
}

/// Generates a single haystack of `words` random words separated by
/// spaces, with `needle` planted at roughly every `plant_every`-th
/// word. Useful for search and replace workloads.
pub fn generate_haystack(seed: u64, words: usize, needle: &str, plant_every: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let parts = (0..words).map(|i| {
        if plant_every > 0 && i % plant_every == plant_every - 1 {
            needle
        } else {
            WORDS[rng.gen_range(0..WORDS.len())]
        }
    });
    crate::join::join(parts, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_deterministic_for_a_seed() {
        let config = CorpusConfig::default();
        assert_eq!(generate_records(12345, &config), generate_records(12345, &config));
        assert_ne!(generate_records(12345, &config), generate_records(54321, &config));
    }

    #[test]
    fn records_have_the_requested_shape() {
        let config = CorpusConfig {
            records: 10,
            fields_per_record: 5,
            delim: "|",
        };
        let records = generate_records(7, &config);
        assert_eq!(records.len(), 10);
        for record in &records {
            let parts = crate::split::split(record, "|", crate::case::Case::Sensitive).unwrap();
            assert_eq!(parts.len(), 5);
        }
    }

    #[test]
    fn haystack_plants_the_needle() {
        let hay = generate_haystack(42, 100, "derp", 10);
        let parts = crate::split::split(&hay, " ", crate::case::Case::Sensitive).unwrap();
        assert_eq!(parts.len(), 100);
        assert_eq!(parts.iter().filter(|p| **p == "derp").count(), 10);
    }
}

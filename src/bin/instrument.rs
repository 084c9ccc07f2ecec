use std::time::Instant;

use strkit::fixture::{self, CorpusConfig};
use strkit::{Case, replace_copy, rfind, split_into};

fn run_split_case(records: &[String], delim: &str, case: Case) {
    strkit::instrument::reset_counters();
    let t0 = Instant::now();

    let mut parts: Vec<&str> = Vec::with_capacity(1024);
    let mut total_parts = 0usize;
    for record in records {
        parts.clear();
        if split_into(record, delim, case, &mut parts).is_ok() {
            total_parts += parts.len();
        }
    }

    let dur = t0.elapsed();
    let (finds, windows, bytes, _) = strkit::instrument::counters_snapshot();
    println!(
        "split({case:?}): time={dur:?} parts={total_parts} finds={finds} windows={windows} bytes_compared={bytes}"
    );
}

fn run_replace_case(haystack: &str, from: &str, to: &str, case: Case) {
    strkit::instrument::reset_counters();
    let t0 = Instant::now();

    let (_, count) = replace_copy(haystack, from, to, case, None);

    let dur = t0.elapsed();
    let (finds, windows, bytes, repl) = strkit::instrument::counters_snapshot();
    println!(
        "replace({case:?}): time={dur:?} replaced={count} finds={finds} windows={windows} bytes_compared={bytes} counted={repl}"
    );
}

fn run_rfind_case(haystack: &str, needle: &str, case: Case) {
    strkit::instrument::reset_counters();
    let t0 = Instant::now();

    let at = rfind(haystack, needle, case);

    let dur = t0.elapsed();
    let (_, windows, bytes, _) = strkit::instrument::counters_snapshot();
    println!("rfind({case:?}): time={dur:?} at={at:?} windows={windows} bytes_compared={bytes}");
}

fn main() {
    let config = CorpusConfig {
        records: 2000,
        fields_per_record: 32,
        delim: ",",
    };
    let records = fixture::generate_records(42, &config);
    run_split_case(&records, ",", Case::Sensitive);
    run_split_case(&records, ",", Case::Insensitive);

    let haystack = fixture::generate_haystack(42, 20_000, "derp", 10);
    run_replace_case(&haystack, "derp", "ferp", Case::Sensitive);
    run_replace_case(&haystack, "DERP", "ferp", Case::Insensitive);
    run_rfind_case(&haystack, "derp", Case::Sensitive);
    run_rfind_case(&haystack, "DERP", Case::Insensitive);
}

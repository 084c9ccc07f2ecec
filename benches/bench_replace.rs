use criterion::{Criterion, black_box, criterion_group, criterion_main};
use strkit::{Case, find, replace_copy, split_into};

fn bench_replace(c: &mut Criterion) {
    let input = "herp derp cherp merp derp derp";

    c.bench_function("replace_sensitive_bounded", |b| {
        b.iter(|| {
            replace_copy(
                black_box(input),
                black_box("derp"),
                black_box("ferp"),
                Case::Sensitive,
                Some(2),
            )
        })
    });

    c.bench_function("replace_insensitive_bounded", |b| {
        b.iter(|| {
            replace_copy(
                black_box(input),
                black_box("DERP"),
                black_box("ferp"),
                Case::Insensitive,
                Some(2),
            )
        })
    });
}

fn bench_find(c: &mut Criterion) {
    let haystack = strkit::fixture::generate_haystack(42, 5000, "derp", 500);

    c.bench_function("find_sensitive", |b| {
        b.iter(|| find(black_box(&haystack), black_box("derp"), Case::Sensitive))
    });

    c.bench_function("find_insensitive", |b| {
        b.iter(|| find(black_box(&haystack), black_box("DERP"), Case::Insensitive))
    });
}

fn bench_split(c: &mut Criterion) {
    let config = strkit::fixture::CorpusConfig {
        records: 1,
        fields_per_record: 512,
        delim: ",",
    };
    let record = strkit::fixture::generate_records(42, &config).remove(0);

    c.bench_function("split_preallocated", |b| {
        let mut parts: Vec<&str> = Vec::with_capacity(512);
        b.iter(|| {
            parts.clear();
            split_into(black_box(&record), black_box(","), Case::Sensitive, &mut parts)
        })
    });
}

criterion_group!(benches, bench_replace, bench_find, bench_split);
criterion_main!(benches);

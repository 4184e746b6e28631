use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pgrst_media::*;

// Benchmark media type decoding
fn bench_decode_media_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_media_type");

    let test_cases = vec![
        ("simple", "application/json"),
        ("other", "application/x-custom; charset=utf-8"),
        ("singular", "application/vnd.pgrst.object+json;nulls=stripped"),
        (
            "plan",
            "application/vnd.pgrst.plan+json; for=\"text/csv\"; options=analyze|verbose|buffers|wal",
        ),
    ];

    for (name, input) in test_cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, &input| {
            b.iter(|| decode_media_type(black_box(input)));
        });
    }

    group.finish();
}

// Benchmark media type encoding
fn bench_to_mime(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_mime");

    let plan = MediaType::plan(
        MediaType::TextCsv,
        PlanFormat::Json,
        PlanOption::ALL.into_iter().collect(),
    );

    group.bench_function("simple", |b| {
        b.iter(|| to_mime(black_box(&MediaType::GeoJson)));
    });

    group.bench_function("plan", |b| {
        b.iter(|| to_mime(black_box(&plan)));
    });

    group.bench_function("content_type", |b| {
        b.iter(|| to_content_type(black_box(&plan)));
    });

    group.finish();
}

criterion_group!(benches, bench_decode_media_type, bench_to_mime);

criterion_main!(benches);

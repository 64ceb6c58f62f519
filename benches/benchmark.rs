//! Benchmarks for Kamasutra cipher operations.
//!
//! Measures table construction time, transform throughput on a mixed
//! Cyrillic/ASCII line, and transform throughput scaling across input sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kamasutra::{KamasutraCipher, SubstitutionTable};

/// Pangram-style line used consistently across the transform benchmarks.
const BENCH_LINE: &str = "Съешь же ещё этих мягких французских булок, да выпей чаю! 0123456789";

/// Benchmarks `SubstitutionTable::new()` construction time.
///
/// Measures the full build path: mirrored pairing, fixed-point insertion,
/// and lowercase derivation.
fn bench_table_build(c: &mut Criterion) {
    c.bench_function("table_build", |b| {
        b.iter(|| black_box(SubstitutionTable::new()));
    });
}

/// Benchmarks transform throughput on a single mixed line.
///
/// The cipher is built once; each iteration transforms the same line,
/// reflecting the build-once-transform-many usage pattern.
fn bench_transform(c: &mut Criterion) {
    let cipher = KamasutraCipher::new();

    let mut group = c.benchmark_group("transform_line");
    group.throughput(Throughput::Bytes(BENCH_LINE.len() as u64));

    group.bench_function("mixed_line", |b| {
        b.iter(|| cipher.transform(black_box(BENCH_LINE)));
    });

    group.finish();
}

/// Benchmarks transform throughput across input sizes.
///
/// Repeats the benchmark line 1, 16, and 256 times to show the linear
/// single-pass scaling of the transform.
fn bench_transform_scaling(c: &mut Criterion) {
    let cipher = KamasutraCipher::new();
    let repeats: &[usize] = &[1, 16, 256];

    let mut group = c.benchmark_group("transform_scaling");

    for &n in repeats {
        let text = BENCH_LINE.repeat(n);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| cipher.transform(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_table_build,
    bench_transform,
    bench_transform_scaling,
);
criterion_main!(benches);

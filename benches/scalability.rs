use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use frame_bench::bench::runner;
use frame_bench::dataset::{self, DatasetSpec};

fn bench_read_scaling(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];

    let dir = tempfile::tempdir().unwrap();
    let mut group = c.benchmark_group("read_scaling");
    group.sample_size(10);

    for rows in sizes {
        let path = dir.path().join(format!("bench_data_{rows}.csv"));
        dataset::write_csv(&DatasetSpec::new(rows), &path).unwrap();

        group.bench_with_input(BenchmarkId::new("read", rows), &path, |b, path| {
            b.iter(|| black_box(runner::load_frame(path).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_read_scaling);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fixcap::{freeze, FixVec, FrozenSlice};

fn bench_fill_to_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_to_capacity");

    group.throughput(Throughput::Elements(64));
    group.bench_function(BenchmarkId::new("push", 64), |b| {
        b.iter(|| {
            let mut vec: FixVec<u64, 64> = FixVec::new();
            for i in 0..64 {
                black_box(vec.push(black_box(i)).unwrap());
            }
            black_box(vec.len())
        });
    });

    group.throughput(Throughput::Elements(1024));
    group.bench_function(BenchmarkId::new("push", 1024), |b| {
        b.iter(|| {
            let mut vec: FixVec<u64, 1024> = FixVec::new();
            for i in 0..1024 {
                black_box(vec.push(black_box(i)).unwrap());
            }
            black_box(vec.len())
        });
    });

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    group.throughput(Throughput::Elements(1024));
    group.bench_function(BenchmarkId::new("try_get", 1024), |b| {
        let vec: FixVec<u64, 1024> = FixVec::try_from_iter(0..1024).unwrap();

        b.iter(|| {
            for i in 0..1024 {
                black_box(vec.try_get(i).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    group.throughput(Throughput::Elements(1024));
    group.bench_function(BenchmarkId::new("sum_live_prefix", 1024), |b| {
        let vec: FixVec<u64, 1024> = FixVec::try_from_iter(0..1024).unwrap();

        b.iter(|| {
            let mut total = 0u64;
            for value in black_box(&vec) {
                total += *value;
            }
            black_box(total)
        });
    });

    group.finish();
}

fn bench_push_pop_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");

    group.throughput(Throughput::Elements(1024));
    group.bench_function(BenchmarkId::new("push_pop_cycle", 1024), |b| {
        b.iter(|| {
            let mut vec: FixVec<u64, 1024> = FixVec::new();

            for i in 0..1024 {
                black_box(vec.push(i).unwrap());
            }
            for _ in 0..1024 {
                vec.pop();
            }

            black_box(vec.len())
        });
    });

    group.finish();
}

fn bench_freeze_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("freeze");

    for size in [256usize, 4096].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("discover_and_freeze", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let frozen = freeze(|| (0..size as u64).map(|n| n * n)).unwrap();
                    black_box(frozen.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_frozen_view_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("frozen_view");

    static TABLE: FrozenSlice<u64> = FrozenSlice::new();
    let view = TABLE.view(|| (0..1024u64).map(|n| n * n)).unwrap();
    assert_eq!(view.len(), 1024);

    group.throughput(Throughput::Elements(1024));
    group.bench_function(BenchmarkId::new("read_through_cell", 1024), |b| {
        b.iter(|| {
            // The cell is frozen; this is the cached fast path.
            let view = TABLE.view(Vec::new).unwrap();
            black_box(view.iter().sum::<u64>())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fill_to_capacity,
    bench_random_access,
    bench_iteration,
    bench_push_pop_cycle,
    bench_freeze_pipeline,
    bench_frozen_view_access
);
criterion_main!(benches);

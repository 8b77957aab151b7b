// Benchmarks for appending and comparing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use generic_templates::{maximum, maximum_of, ElementList};

fn benchmark_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [100, 10_000] {
        group.bench_with_input(BenchmarkId::new("new", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = ElementList::new();
                for i in 0..size {
                    list.append(black_box(i));
                }
                list
            })
        });

        group.bench_with_input(BenchmarkId::new("with_capacity", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = ElementList::with_capacity(size);
                for i in 0..size {
                    list.append(black_box(i));
                }
                list
            })
        });
    }

    group.finish();
}

fn benchmark_maximum(c: &mut Criterion) {
    let data: Vec<i64> = (0..1000).map(|i| (i * 7919) % 1000).collect();

    c.bench_function("maximum_pairwise", |b| {
        b.iter(|| {
            data.iter()
                .fold(&data[0], |best, next| maximum(black_box(best), black_box(next)))
        })
    });

    c.bench_function("maximum_of", |b| b.iter(|| maximum_of(black_box(&data))));
}

criterion_group!(benches, benchmark_append, benchmark_maximum);
criterion_main!(benches);

//! Tree construction benchmarks

use bintree_gen::{gen_bin_tree, Levels, Shape};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_levels(c: &mut Criterion) {
    c.bench_function("levels_h=16", |b| {
        b.iter(|| Levels::generate(black_box(16), black_box(13), |r| r + 1, |r| r - 1));
    });
}

fn benchmark_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    for height in [4i64, 10, 14] {
        for shape in Shape::ALL {
            group.bench_with_input(BenchmarkId::new(shape.name(), height), &height, |b, &h| {
                b.iter(|| gen_bin_tree(black_box(h), 13, |r| r + 1, |r| r - 1, shape));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_levels, benchmark_shapes);
criterion_main!(benches);

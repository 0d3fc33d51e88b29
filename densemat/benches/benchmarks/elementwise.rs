/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use densemat::{Builder, Config, Matrix};
use rand::{rngs::StdRng, SeedableRng};

pub(crate) fn benchmark_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise-add");
    let mut rng = StdRng::seed_from_u64(0xc0ff33);

    let parallel = Builder::new_with(|b| {
        b.threads(4).min_parallel_len(1 << 14);
    })
    .build()
    .unwrap();

    for dim in [64, 512, 1024] {
        let a = Matrix::random(dim, dim, -1.0..1.0, &mut rng).unwrap();
        let b = Matrix::random(dim, dim, -1.0..1.0, &mut rng).unwrap();
        let mut dst = a.clone();

        for (name, config) in [("sequential", Config::default()), ("rayon-4", parallel)] {
            group.bench_with_input(BenchmarkId::new(name, dim), &dim, |f, _| {
                f.iter(|| dst.try_add_assign_with(black_box(&b), &config).unwrap());
            });
        }
    }
    group.finish();
}

pub(crate) fn benchmark_region_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("region-update");
    let mut rng = StdRng::seed_from_u64(0xc0ff33);

    for dim in [64, 512] {
        let mut m = Matrix::random(dim, dim, -1.0..1.0, &mut rng).unwrap();
        let (lo, hi) = (dim / 4, 3 * dim / 4);

        group.bench_with_input(BenchmarkId::new("mul-scalar", dim), &dim, |f, _| {
            f.iter(|| {
                m.update_region(lo..hi, lo..hi, |block| Ok(block * black_box(1.0001)))
                    .unwrap()
            });
        });
    }
    group.finish();
}

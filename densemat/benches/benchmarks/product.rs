/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use densemat::{Builder, Config, Matrix};
use rand::{rngs::StdRng, SeedableRng};

pub(crate) fn benchmark_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    let mut rng = StdRng::seed_from_u64(0xc0ff33);

    let parallel = Builder::new_with(|b| {
        b.threads(4);
    })
    .build()
    .unwrap();

    for dim in [16, 64, 256] {
        let a = Matrix::random(dim, dim, -1.0..1.0, &mut rng).unwrap();
        let b = Matrix::random(dim, dim, -1.0..1.0, &mut rng).unwrap();

        for (name, config) in [("sequential", Config::default()), ("rayon-4", parallel)] {
            group.bench_with_input(BenchmarkId::new(name, dim), &dim, |f, _| {
                f.iter(|| black_box(a.matmul_with(&b, &config).unwrap()));
            });
        }
    }
    group.finish();
}

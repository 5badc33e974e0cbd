// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fakerng::distributions::Uniform;
use fakerng::prelude::*;

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench
);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    c.bench_function("gen_range_i32", |b| {
        let mut rng = StdRng::seed_from_u64(123);
        b.iter(|| rng.gen_range(black_box(-100..100)))
    });

    c.bench_function("uniform_i32_distr", |b| {
        let mut rng = StdRng::seed_from_u64(123);
        let range = Uniform::new(-100i32, 100).unwrap();
        b.iter(|| rng.sample(range))
    });

    c.bench_function("seq_choose_1000", |b| {
        let mut rng = StdRng::seed_from_u64(123);
        let x: Vec<usize> = (0..1000).collect();
        b.iter(|| x.choose(&mut rng).copied())
    });

    for length in [1, 2, 3, 10, 100, 1000, 10000].map(black_box) {
        c.bench_function(format!("shuffle_{length}").as_str(), |b| {
            let mut rng = StdRng::seed_from_u64(123);
            let mut vec: Vec<usize> = (0..length).collect();
            b.iter(|| {
                vec.shuffle(&mut rng);
                vec[0]
            })
        });
    }
}

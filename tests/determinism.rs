// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use fakerng::prelude::*;
use fakerng::rngs::{SplitMix64, Xoroshiro128Plus};

fn assert_same_stream<R: RngCore + SeedableRng>(seed: u64) {
    let mut a = R::seed_from_u64(seed);
    let mut b = R::seed_from_u64(seed);
    for i in 0..10_000 {
        assert_eq!(a.next_u64(), b.next_u64(), "seed {} diverged at draw {}", seed, i);
    }
}

#[test]
fn same_seed_same_stream() {
    for &seed in &[0, 1, 42, 0xdead_beef, u64::MAX] {
        assert_same_stream::<SplitMix64>(seed);
        assert_same_stream::<Xoroshiro128Plus>(seed);
    }
}

#[test]
fn state_restores_stream() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        rng.next_u64();
    }
    let mut restored = StdRng::from_state(rng.state()).unwrap();
    for _ in 0..10_000 {
        assert_eq!(rng.next_u64(), restored.next_u64());
    }

    let mut rng = SmallRng::seed_from_u64(99);
    rng.next_u64();
    let mut restored = SmallRng::from_state(rng.state()).unwrap();
    for _ in 0..10_000 {
        assert_eq!(rng.next_u64(), restored.next_u64());
    }
}

#[test]
fn engine_selection_matches_concrete_types() {
    let mut any = "xoroshiro128plus".parse::<Engine>().unwrap().seed(7);
    let mut concrete = Xoroshiro128Plus::seed_from_u64(7);
    for _ in 0..10_000 {
        assert_eq!(any.next_u64(), concrete.next_u64());
    }

    let mut any = "SPLITMIX64".parse::<Engine>().unwrap().seed(7);
    let mut concrete = SplitMix64::seed_from_u64(7);
    for _ in 0..10_000 {
        assert_eq!(any.next_u64(), concrete.next_u64());
    }
}

#[test]
fn from_rng_derives_a_distinct_stream() {
    let mut parent = StdRng::seed_from_u64(5);
    let mut child = StdRng::from_rng(&mut parent);
    let mut differs = false;
    for _ in 0..16 {
        differs |= parent.next_u64() != child.next_u64();
    }
    assert!(differs);
}

#[test]
fn value_stability() {
    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(rng.next_u64(), 16629283624882167704);
    assert_eq!(rng.next_u64(), 14158568844310674298);
    assert_eq!(rng.next_u64(), 4169932037010132216);

    let mut rng = StdRng::seed_from_u64(42);
    let x: [f64; 3] = core::array::from_fn(|_| rng.gen_f64());
    assert_eq!(x, [0.9014752716487434, 0.7675375550143605, 0.22605246868216444]);

    let mut rng = StdRng::seed_from_u64(42);
    let x: [i32; 6] = core::array::from_fn(|_| rng.gen_range(-10..10).unwrap());
    assert_eq!(x, [8, 5, -6, -1, 3, -5]);

    let mut rng = StdRng::seed_from_u64(42);
    let x: [u8; 6] = core::array::from_fn(|_| rng.gen_range(1..=6).unwrap());
    assert_eq!(x, [6, 5, 2, 3, 5, 2]);

    let mut rng = StdRng::seed_from_u64(42);
    let x: [f64; 3] = core::array::from_fn(|_| rng.gen_range(-2.0..3.0).unwrap());
    assert_eq!(x, [2.507376358243717, 1.8376877750718026, -0.8697376565891779]);
}

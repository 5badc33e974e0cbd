// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Failed operations report an error and leave the generator untouched.

use fakerng::prelude::*;
use fakerng::distributions::Uniform;
use fakerng::ErrorKind;

#[test]
fn reversed_range_keeps_state() {
    let mut rng = StdRng::seed_from_u64(11);
    rng.next_u64();
    let before = rng.state();
    let err = rng.gen_range(5..=3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRange);
    assert_eq!(rng.state(), before);

    assert!(rng.gen_range(3..3).is_err());
    assert!(rng.gen_range(2.0..1.0).is_err());
    assert!(rng.gen_range(0.0..f64::NAN).is_err());
    assert!(rng.gen_bool(2.0).is_err());
    assert_eq!(rng.state(), before);
}

#[test]
fn empty_choose_keeps_state() {
    let mut rng = SmallRng::seed_from_u64(11);
    let before = rng.state();
    let empty: Vec<String> = Vec::new();
    let err = empty.choose(&mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRange);
    assert_eq!(rng.state(), before);

    let mut empty: [u8; 0] = [];
    assert!(empty.choose_mut(&mut rng).is_err());
    assert_eq!(rng.state(), before);
}

#[test]
fn degenerate_inputs_are_not_errors() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        assert_eq!(rng.gen_range(4..=4).unwrap(), 4);
    }

    let mut one = vec!["only"];
    let before = rng.state();
    one.shuffle(&mut rng);
    let mut none: Vec<&str> = vec![];
    none.shuffle(&mut rng);
    assert_eq!(one, ["only"]);
    assert!(none.is_empty());
    assert_eq!(rng.state(), before);
}

#[test]
fn zero_state_is_rejected() {
    let err = StdRng::from_state([0, 0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert!(StdRng::from_state([0, 1]).is_ok());
    // SplitMix64 accepts every state
    assert!(SmallRng::from_state(0).is_ok());
}

#[test]
fn bad_uniform_is_rejected() {
    assert_eq!(
        Uniform::new(10u32, 10).unwrap_err().kind(),
        ErrorKind::InvalidRange
    );
    assert!(Uniform::new_inclusive(1.0f64, f64::INFINITY).is_err());
}

#[test]
fn unknown_engine() {
    let err = "mersenne".parse::<Engine>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownEngine);
    assert!(err.to_string().contains("unknown engine"));
}

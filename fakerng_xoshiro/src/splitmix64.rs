// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use fakerng_core::{Error, RngCore, SeedableRng};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

const PHI: u64 = 0x9e3779b97f4a7c15;

/// A splitmix64 random number generator.
///
/// The splitmix algorithm is not suitable for cryptographic purposes, but is
/// very fast and has a 64 bit state. Every `u64` is a valid state.
///
/// The algorithm used here is translated from [the `splitmix64.c`
/// reference source code](http://xoshiro.di.unimi.it/splitmix64.c) by
/// Sebastiano Vigna. For `next_u32`, the upper half of one draw is returned.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct SplitMix64 {
    x: u64,
}

impl RngCore for SplitMix64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.x = self.x.wrapping_add(PHI);
        let mut z = self.x;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl SeedableRng for SplitMix64 {
    type State = u64;

    /// Seed a `SplitMix64` from a `u64`. The seed is used as the state as-is.
    #[inline]
    fn seed_from_u64(seed: u64) -> SplitMix64 {
        SplitMix64 { x: seed }
    }

    /// Any `u64` is a valid state, so this never fails.
    #[inline]
    fn from_state(state: u64) -> Result<SplitMix64, Error> {
        Ok(SplitMix64 { x: state })
    }

    #[inline]
    fn state(&self) -> u64 {
        self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference() {
        let mut rng = SplitMix64::seed_from_u64(0);
        // These values were produced with the reference implementation:
        // http://xoshiro.di.unimi.it/splitmix64.c
        let expected: [u64; 5] = [
            0xe220a8397b1dcdaf,
            0x6e789e6aa1b965f4,
            0x06c45d188009454f,
            0xf88bb8a8724c81ec,
            0x1b39896a51a8749b,
        ];
        for &e in &expected {
            assert_eq!(rng.next_u64(), e);
        }
    }

    #[test]
    fn next_u32() {
        let mut rng = SplitMix64::seed_from_u64(12345);
        assert_eq!(rng.next_u32(), 571572824);
        assert_eq!(rng.next_u32(), 879680741);
    }

    #[test]
    fn wraps_at_max_state() {
        let mut rng = SplitMix64::from_state(u64::MAX).unwrap();
        rng.next_u64();
        assert_eq!(rng.state(), PHI - 1);
    }

    #[test]
    fn state_round_trip() {
        let mut rng = SplitMix64::seed_from_u64(99);
        rng.next_u64();
        let mut copy = SplitMix64::from_state(rng.state()).unwrap();
        for _ in 0..8 {
            assert_eq!(rng.next_u64(), copy.next_u64());
        }
    }
}

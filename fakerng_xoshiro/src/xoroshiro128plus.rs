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

/// A xoroshiro128+ random number generator.
///
/// The xoroshiro128+ algorithm is not suitable for cryptographic purposes, but
/// is very fast and has good statistical properties, besides a low linear
/// complexity in the lowest bits.
///
/// The algorithm used here is the original 2016 parameterisation
/// (a = 55, b = 14, c = 36) of [the `xoroshiro128plus.c` reference source
/// code](http://xoroshiro.di.unimi.it/xoroshiro128plus.c) by David Blackman
/// and Sebastiano Vigna.
///
/// The state is a pair of words `[low, high]` which must not both be zero:
/// the all-zero state is a fixed point. [`SeedableRng::from_state`] rejects
/// it, and no sequence of `next_u64` calls can reach it from a valid state.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(try_from = "[u64; 2]", into = "[u64; 2]"))]
pub struct Xoroshiro128Plus {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128Plus {
    /// Jump forward, equivalently to 2^64 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^64 non-overlapping subsequences for
    /// parallel computations, one owned generator per thread.
    ///
    /// ```
    /// use fakerng_xoshiro::fakerng_core::SeedableRng;
    /// use fakerng_xoshiro::Xoroshiro128Plus;
    ///
    /// let rng1 = Xoroshiro128Plus::seed_from_u64(0);
    /// let mut rng2 = rng1.clone();
    /// rng2.jump();
    /// let mut rng3 = rng2.clone();
    /// rng3.jump();
    /// ```
    pub fn jump(&mut self) {
        impl_jump!(u64, self, [0xbeac0467eba5facb, 0xd86b048b86aa9922]);
    }
}

impl RngCore for Xoroshiro128Plus {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // The two lowest bits have some linear dependencies, so we use the
        // upper bits instead.
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let r = self.s0.wrapping_add(self.s1);
        impl_xoroshiro_u64!(self);
        r
    }
}

impl SeedableRng for Xoroshiro128Plus {
    type State = [u64; 2];

    /// Seed a `Xoroshiro128Plus` from a `u64` using `SplitMix64`.
    ///
    /// This is infallible. The two words are consecutive SplitMix64 outputs:
    /// their internal states differ by the non-zero increment and the output
    /// mix is a bijection, so the two words are never equal and in
    /// particular never both zero.
    fn seed_from_u64(seed: u64) -> Xoroshiro128Plus {
        let (s0, s1) = from_splitmix!(seed);
        debug_assert!(s0 != 0 || s1 != 0);
        Xoroshiro128Plus { s0, s1 }
    }

    /// Create a `Xoroshiro128Plus` from `[low, high]`.
    ///
    /// Fails with `InvalidState` if both words are zero.
    fn from_state(state: [u64; 2]) -> Result<Xoroshiro128Plus, Error> {
        if state == [0, 0] {
            return Err(Error::invalid_state("xoroshiro128+ state must not be all zero"));
        }
        Ok(Xoroshiro128Plus {
            s0: state[0],
            s1: state[1],
        })
    }

    #[inline]
    fn state(&self) -> [u64; 2] {
        [self.s0, self.s1]
    }
}

impl TryFrom<[u64; 2]> for Xoroshiro128Plus {
    type Error = Error;

    fn try_from(state: [u64; 2]) -> Result<Self, Error> {
        Xoroshiro128Plus::from_state(state)
    }
}

impl From<Xoroshiro128Plus> for [u64; 2] {
    fn from(rng: Xoroshiro128Plus) -> [u64; 2] {
        rng.state()
    }
}

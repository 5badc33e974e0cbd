// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Run-time selection between the available generators.

use core::fmt;
use core::str::FromStr;

use fakerng_core::{Error, ErrorKind, RngCore, SeedableRng};
use fakerng_xoshiro::{SplitMix64, Xoroshiro128Plus};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Names one of the generator algorithms.
///
/// Parsing is case-insensitive and accepts `"splitmix64"`,
/// `"xoroshiro128plus"` and `"xoroshiro128+"`. [`Display`](fmt::Display)
/// prints the canonical lowercase name, which parses back to the same
/// variant.
///
/// ```
/// use fakerng::rngs::Engine;
///
/// let e: Engine = "Xoroshiro128+".parse().unwrap();
/// assert_eq!(e, Engine::Xoroshiro128Plus);
/// assert_eq!(e.to_string(), "xoroshiro128plus");
/// assert!("mt19937".parse::<Engine>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "lowercase"))]
pub enum Engine {
    /// [`SplitMix64`]
    SplitMix64,
    /// [`Xoroshiro128Plus`], the primary generator
    #[default]
    Xoroshiro128Plus,
}

impl Engine {
    /// Every engine, in declaration order.
    pub const ALL: [Engine; 2] = [Engine::SplitMix64, Engine::Xoroshiro128Plus];

    /// The canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Engine::SplitMix64 => "splitmix64",
            Engine::Xoroshiro128Plus => "xoroshiro128plus",
        }
    }

    /// Build a generator of this kind from a `u64` seed.
    ///
    /// Equivalent to calling [`SeedableRng::seed_from_u64`] on the concrete
    /// type, so `Engine::SplitMix64.seed(s)` and `SplitMix64::seed_from_u64(s)`
    /// produce the same sequence.
    pub fn seed(self, seed: u64) -> AnyRng {
        match self {
            Engine::SplitMix64 => AnyRng::SplitMix64(SplitMix64::seed_from_u64(seed)),
            Engine::Xoroshiro128Plus => {
                AnyRng::Xoroshiro128Plus(Xoroshiro128Plus::seed_from_u64(seed))
            }
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let known = [
            ("splitmix64", Engine::SplitMix64),
            ("xoroshiro128plus", Engine::Xoroshiro128Plus),
            ("xoroshiro128+", Engine::Xoroshiro128Plus),
        ];
        let s = s.trim();
        for (name, engine) in known.iter() {
            if s.eq_ignore_ascii_case(name) {
                return Ok(*engine);
            }
        }
        debug!("unknown engine name {:?}", s);
        Err(Error::new(ErrorKind::UnknownEngine, "no generator by that name"))
    }
}

/// A generator whose algorithm is chosen at run time.
///
/// Each variant wraps the concrete generator; [`RngCore`] forwards to it, so
/// an `AnyRng` yields exactly the sequence of the generator it holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyRng {
    /// A [`SplitMix64`] generator
    SplitMix64(SplitMix64),
    /// A [`Xoroshiro128Plus`] generator
    Xoroshiro128Plus(Xoroshiro128Plus),
}

impl AnyRng {
    /// Which algorithm this generator runs.
    pub fn engine(&self) -> Engine {
        match self {
            AnyRng::SplitMix64(_) => Engine::SplitMix64,
            AnyRng::Xoroshiro128Plus(_) => Engine::Xoroshiro128Plus,
        }
    }

    /// Seed a generator of the given kind from the operating system.
    ///
    /// This is the run-time counterpart of
    /// [`FromEntropy::from_entropy`](crate::FromEntropy::from_entropy).
    #[cfg(feature = "getrandom")]
    pub fn from_entropy(engine: Engine) -> Result<AnyRng, Error> {
        let seed = super::entropy::entropy_seed()?;
        debug!("seeding {} from OS entropy", engine);
        Ok(engine.seed(seed))
    }
}

impl From<SplitMix64> for AnyRng {
    fn from(rng: SplitMix64) -> Self {
        AnyRng::SplitMix64(rng)
    }
}

impl From<Xoroshiro128Plus> for AnyRng {
    fn from(rng: Xoroshiro128Plus) -> Self {
        AnyRng::Xoroshiro128Plus(rng)
    }
}

impl RngCore for AnyRng {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            AnyRng::SplitMix64(rng) => rng.next_u64(),
            AnyRng::Xoroshiro128Plus(rng) => rng.next_u64(),
        }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            AnyRng::SplitMix64(rng) => rng.next_u32(),
            AnyRng::Xoroshiro128Plus(rng) => rng.next_u32(),
        }
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            AnyRng::SplitMix64(rng) => rng.fill_bytes(dest),
            AnyRng::Xoroshiro128Plus(rng) => rng.fill_bytes(dest),
        }
    }
}

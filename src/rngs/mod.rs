// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random number generators and adapters
//!
//! ## Generators
//!
//! This crate provides two deterministic generators, both defined in
//! `fakerng_xoshiro` and re-exported here:
//!
//! -   [`Xoroshiro128Plus`] is the primary generator: 128 bits of state,
//!     period 2<sup>128</sup> - 1, and a [`jump`] function to derive
//!     non-overlapping streams. [`StdRng`] names it.
//! -   [`SplitMix64`] is a fast 64-bit scrambler, also used to expand a
//!     `u64` seed into a `Xoroshiro128Plus` state. [`SmallRng`] names it.
//!
//! Both are portable: the same seed gives the same sequence on every
//! platform and in every release. Neither is cryptographically secure.
//!
//! When the generator must be picked at run time, for example from a
//! configuration value, parse an [`Engine`] and build an [`AnyRng`]:
//!
//! ```
//! use fakerng::Rng;
//! use fakerng::rngs::Engine;
//!
//! let engine: Engine = "splitmix64".parse().unwrap();
//! let mut rng = engine.seed(7);
//! let x: f64 = rng.random();
//! assert!(x < 1.0);
//! ```
//!
//! ## Seeding from the operating system
//!
//! With the `getrandom` feature, [`FromEntropy::from_entropy`] builds any
//! [`SeedableRng`] from one 8-byte read of [`OsRng`].
//!
//! [`jump`]: Xoroshiro128Plus::jump
//! [`SeedableRng`]: crate::SeedableRng
//! [`FromEntropy::from_entropy`]: crate::FromEntropy::from_entropy

mod engine;
#[cfg(feature = "getrandom")]
mod entropy;
pub mod mock;

pub use self::engine::{AnyRng, Engine};
#[cfg(feature = "getrandom")]
pub use self::entropy::FromEntropy;
#[cfg(feature = "getrandom")]
pub use fakerng_core::OsRng;
pub use fakerng_xoshiro::{SplitMix64, Xoroshiro128Plus};

/// The primary generator: [`Xoroshiro128Plus`].
///
/// Unlike rand's `StdRng` this is a fixed, portable algorithm. It is not a
/// cryptographic generator.
pub type StdRng = Xoroshiro128Plus;

/// The small fast generator: [`SplitMix64`].
pub type SmallRng = SplitMix64;

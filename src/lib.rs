// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deterministic, reproducible pseudo-random generation.
//!
//! `fakerng` turns a `u64` seed into a reproducible stream of integers,
//! floats, range samples and sequence permutations. It is meant for
//! generating test fixtures and fake data, where the same seed must give the
//! same output on every platform and in every release. None of its
//! generators are suitable for cryptography.
//!
//! # Quick start
//!
//! ```
//! // The prelude import enables methods we use below, specifically
//! // Rng::random, Rng::gen_range, IndexedRandom::choose and
//! // IndexedMutRandom::shuffle.
//! use fakerng::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//!
//! // A float in [0, 1)
//! let x: f64 = rng.random();
//! assert!((0.0..1.0).contains(&x));
//!
//! // An integer in a range; a reversed range is an error, not a panic
//! let die: u8 = rng.gen_range(1..=6)?;
//! assert!((1..=6).contains(&die));
//! assert!(rng.gen_range(6..=1).is_err());
//!
//! // Sequences
//! let mut nums: Vec<i32> = (1..100).collect();
//! let _ = nums.choose(&mut rng)?;
//! nums.shuffle(&mut rng);
//! # Ok::<(), fakerng::Error>(())
//! ```
//!
//! # The library
//!
//! The crate is split in layers:
//!
//! - The generator abstraction, [`RngCore`] and [`SeedableRng`], lives in
//!   `fakerng_core` together with [`Error`].
//! - The two generators live in `fakerng_xoshiro` and are re-exported from
//!   [`rngs`]: the primary [`rngs::Xoroshiro128Plus`] (alias
//!   [`rngs::StdRng`]) and the small [`rngs::SplitMix64`] (alias
//!   [`rngs::SmallRng`]).
//! - [`distributions`] converts raw 64-bit draws into typed values. Every
//!   conversion is also available as a pure function of a `u64`.
//! - [`Rng`] is the convenience trait over all of it, and [`seq`] adds
//!   uniform selection and Fisher-Yates shuffling to slices.
//!
//! A generator is plain owned state: it is `Send`, but never shared behind a
//! lock by this crate. Give each thread its own instance, for example derived
//! with [`SeedableRng::from_rng`] or [`rngs::Xoroshiro128Plus::jump`].
//!
//! # Crate features
//!
//! - `std` (default): `std::error::Error` for [`Error`], with a chained
//!   cause.
//! - `alloc` (implied by `std`): [`seq::IndexedRandom::shuffled`],
//!   [`seq::IndexedRandom::choose_multiple`] and `VecDeque` support.
//! - `getrandom` (default): [`FromEntropy`] and [`rngs::OsRng`].
//! - `log`: diagnostics through the `log` crate from entropy seeding and
//!   engine selection. The generators and conversions never log.
//! - `serde1`: `serde` support for the generators, [`rngs::Engine`] and the
//!   distributions.

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod log_macros;

// Re-exports from fakerng_core
pub use fakerng_core::{Error, ErrorKind, RngCore, SeedableRng};

// Public modules
pub mod distributions;
pub mod prelude;
mod rng;
pub mod rngs;
pub mod seq;

// Public exports
pub use crate::rng::Rng;
#[cfg(feature = "getrandom")]
pub use crate::rngs::FromEntropy;

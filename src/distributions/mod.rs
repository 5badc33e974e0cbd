// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generating random samples from raw generator output.
//!
//! This module is the conversion layer between the raw 64-bit patterns an
//! [`RngCore`] produces and typed values. Every conversion exists in two
//! forms:
//!
//! - a pure function of an already drawn `u64` ([`float::unit_f64`],
//!   [`float::unit_f32_pair`], [`Uniform::from_bits`]), which never touches a
//!   generator;
//! - a [`Distribution`], which draws one `u64` from a generator and applies
//!   the pure function.
//!
//! # The `Standard` distribution
//!
//! The [`Standard`] distribution is used by [`Rng::random()`] and represents
//! the "default" way to produce a value: `f64`, `f32` and `(f32, f32)` in
//! `[0, 1)`, raw `u64`/`u32`, and `bool`.
//!
//! # Distribution to sample from a `Uniform` range
//!
//! The [`Uniform`] distribution is more flexible than [`Standard`]: it allows
//! the sample space to be specified as an arbitrary range within its target
//! type. Values may be sampled using [`Rng::gen_range`] or by creating a
//! distribution object with [`Uniform::new`] or [`Uniform::new_inclusive`].
//!
//! [`RngCore`]: crate::RngCore
//! [`Rng::random()`]: crate::Rng::random
//! [`Rng::gen_range`]: crate::Rng::gen_range

pub mod float;
mod integer;
pub mod uniform;
mod utils;

pub use self::uniform::Uniform;

use crate::Rng;

/// Types (distributions) that can be used to create a random instance of `T`.
///
/// It is possible to sample from a distribution through both the
/// `Distribution` and [`Rng`] traits, via `distr.sample(&mut rng)` and
/// `rng.sample(distr)`.
pub trait Distribution<T> {
    /// Generate a random value of `T`, using `rng` as the source of randomness.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T;
}

impl<'a, T, D: Distribution<T> + ?Sized> Distribution<T> for &'a D {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        (*self).sample(rng)
    }
}

/// A generic random value distribution, implemented for many primitive types.
/// Usually generates values with a numerically uniform distribution, and with a
/// range appropriate to the type.
///
/// ## Provided implementations
///
/// * Raw integers (`u64`, `u32`): one draw, `u32` takes the upper half.
/// * `bool`: the most significant bit of one draw.
/// * Floating point types (`f32` and `f64`): uniformly distributed in the
///   half-open range `[0, 1)`. See [`float`] for the exact conversion.
/// * `(f32, f32)`: both halves of one draw, see [`float::unit_f32_pair`].
///
/// # Example
/// ```
/// use fakerng::{Rng, SeedableRng};
/// use fakerng::distributions::Standard;
/// use fakerng::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let val: f64 = rng.sample(Standard);
/// assert!((0.0..1.0).contains(&val));
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct Standard;

// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random number generation traits
//!
//! This crate is mainly of interest to crates publishing implementations of
//! [`RngCore`]. Other users are encouraged to use the `fakerng` crate instead.
//!
//! [`RngCore`] is the core trait implemented by the pseudo-random generators
//! of the `fakerng_xoshiro` crate. [`SeedableRng`] is the construction
//! contract they share: a total constructor from a `u64` seed and a fallible
//! constructor from an explicit state.
//!
//! [`Error`] is provided for error-handling. It is safe to use in `no_std`
//! environments.
//!
//! The [`le`] sub-module includes a few small functions to assist
//! implementation of [`RngCore`], all of them with an explicit little-endian
//! byte order.
//!
//! None of the generators built on these traits are cryptographically
//! secure, and none of them synchronise internally: a generator is owned by
//! one caller at a time.

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod blanket_impls;
mod error;
pub mod le;
pub mod mock;
#[cfg(feature = "getrandom")]
mod os;

pub use error::{Error, ErrorKind};
#[cfg(feature = "getrandom")]
pub use os::OsRng;

/// The core of a random number generator.
///
/// This trait encapsulates the low-level functionality common to all
/// generators. End users should normally use the `Rng` trait from the
/// `fakerng` crate, which is automatically implemented for every type
/// implementing `RngCore`.
///
/// Implementors are expected to be reproducible: a generator in a given state
/// must produce the same sequence of values on every platform. Where a `u64`
/// is converted to or from bytes, little-endian order is used (see [`le`]).
///
/// Generating values never fails. A generator may be called an unbounded
/// number of times; once its period is exhausted it simply cycles.
pub trait RngCore {
    /// Return the next random `u64`.
    ///
    /// This advances the internal state by exactly one step.
    fn next_u64(&mut self) -> u64;

    /// Return the next random `u32`.
    ///
    /// The default implementation takes the upper half of one
    /// [`next_u64`](RngCore::next_u64) draw. The lowest bits of the `+`
    /// scrambled generators have a low linear complexity, so the upper bits
    /// are the better half.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Fill `dest` with random data.
    ///
    /// The default implementation is [`le::fill_bytes_via_next`], which
    /// writes each draw as 8 little-endian bytes.
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        le::fill_bytes_via_next(self, dest)
    }
}

/// A random number generator that can be explicitly seeded.
///
/// This trait should only be implemented by reproducible generators, where
/// the algorithm is fixed and the output is the same across platforms.
///
/// Two entry points exist:
///
/// - [`seed_from_u64`](SeedableRng::seed_from_u64) is total and deterministic:
///   the same seed always yields the same initial state.
/// - [`from_state`](SeedableRng::from_state) takes a complete internal state
///   and checks it against the generator's validity predicate. An invalid
///   state is rejected with [`ErrorKind::InvalidState`].
pub trait SeedableRng: RngCore + Sized {
    /// The complete internal state of the generator.
    type State: Copy;

    /// Create a new generator from a `u64` seed.
    ///
    /// This never fails. Implementations whose state is larger than 64 bits
    /// expand the seed with a scrambler, so that nearby seeds produce
    /// unrelated streams.
    fn seed_from_u64(seed: u64) -> Self;

    /// Create a generator positioned exactly at `state`.
    ///
    /// Returns [`ErrorKind::InvalidState`] if `state` can not be reached by
    /// the generator (e.g. the all-zero state of a xorshift-type generator,
    /// which is a fixed point).
    fn from_state(state: Self::State) -> Result<Self, Error>;

    /// A snapshot of the current internal state.
    ///
    /// Feeding the snapshot back into [`from_state`](SeedableRng::from_state)
    /// yields a generator producing the same future output.
    fn state(&self) -> Self::State;

    /// Create a new generator seeded from another generator.
    ///
    /// This draws a single `u64` from `rng` and hands it to
    /// [`seed_from_u64`](SeedableRng::seed_from_u64).
    fn from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::seed_from_u64(rng.next_u64())
    }
}

// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This crate implements two small-state pseudorandom number generators
//! designed by Sebastiano Vigna and David Blackman. They are fast and
//! reproducible, but they are not cryptographically secure and their output
//! can be predicted by observing a few samples.
//!
//! - [`Xoroshiro128Plus`]: the primary generator. 128 bits of state, period
//!   2<sup>128</sup> - 1. Has a [low linear complexity] in the lowest bits,
//!   which are discarded when generating floats.
//! - [`SplitMix64`]: a very fast 64-bit generator. It is used on its own and
//!   to expand a `u64` seed into the state of [`Xoroshiro128Plus`].
//!
//! Both implement [`RngCore`] and [`SeedableRng`]:
//!
//! ```
//! use fakerng_xoshiro::fakerng_core::{RngCore, SeedableRng};
//! use fakerng_xoshiro::Xoroshiro128Plus;
//!
//! let mut a = Xoroshiro128Plus::seed_from_u64(42);
//! let mut b = Xoroshiro128Plus::seed_from_u64(42);
//! assert_eq!(a.next_u64(), b.next_u64());
//!
//! assert!(Xoroshiro128Plus::from_state([0, 0]).is_err());
//! ```
//!
//! [low linear complexity]: http://xoshiro.di.unimi.it/lowcomp.php
//! [`RngCore`]: fakerng_core::RngCore
//! [`SeedableRng`]: fakerng_core::SeedableRng

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::unreadable_literal)]
#![no_std]

#[macro_use]
mod common;
mod splitmix64;
mod xoroshiro128plus;

pub use fakerng_core;
pub use splitmix64::SplitMix64;
pub use xoroshiro128plus::Xoroshiro128Plus;

// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Seeding generators from the operating system.

use fakerng_core::{Error, OsRng, SeedableRng};

/// A convenience extension to [`SeedableRng`] allowing construction from
/// fresh operating system entropy.
///
/// Blanket-implemented for every [`SeedableRng`].
pub trait FromEntropy: SeedableRng {
    /// Creates a new instance, automatically seeded with 8 bytes from
    /// [`OsRng`].
    ///
    /// Each call performs one read and returns a new generator owned by the
    /// caller; there is no shared default instance.
    ///
    /// # Errors
    ///
    /// If the read fails the error is returned with
    /// [`ErrorKind::EntropySource`]; no fallback seed is substituted.
    ///
    /// ```
    /// use fakerng::{FromEntropy, Rng};
    /// use fakerng::rngs::StdRng;
    ///
    /// let mut rng = StdRng::from_entropy().unwrap();
    /// let x: f64 = rng.random();
    /// assert!(x < 1.0);
    /// ```
    ///
    /// [`ErrorKind::EntropySource`]: crate::ErrorKind::EntropySource
    fn from_entropy() -> Result<Self, Error>;
}

impl<R: SeedableRng> FromEntropy for R {
    fn from_entropy() -> Result<R, Error> {
        entropy_seed().map(R::seed_from_u64)
    }
}

pub(super) fn entropy_seed() -> Result<u64, Error> {
    trace!("reading 8 bytes of OS entropy");
    OsRng.try_next_u64().map_err(|err| {
        warn!("OS entropy read failed: {}", err);
        err
    })
}

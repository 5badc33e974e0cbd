// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interface to the random number generator of the operating system.

use crate::{le, Error};

/// A source of seeds that retrieves randomness from the operating system.
///
/// This is a zero-sized struct. It can be freely constructed with `OsRng`.
///
/// The implementation is provided by the [getrandom] crate. Each call
/// performs exactly one synchronous read; nothing is cached and failed reads
/// are not retried. `OsRng` is only meant for seeding one of the
/// deterministic generators, it is deliberately not an [`RngCore`].
///
/// # Blocking and error handling
///
/// It is possible that when used during early boot the first call to `OsRng`
/// will block until the system's RNG is initialised. It is also possible
/// (though highly unlikely) for `OsRng` to fail on some platforms, most
/// likely due to system mis-configuration. Failures are reported as
/// [`ErrorKind::EntropySource`].
///
/// # Usage example
/// ```
/// use fakerng_core::OsRng;
///
/// let seed: u64 = OsRng.try_next_u64().unwrap();
/// # let _ = seed;
/// ```
///
/// [getrandom]: https://crates.io/crates/getrandom
/// [`RngCore`]: crate::RngCore
/// [`ErrorKind::EntropySource`]: crate::ErrorKind::EntropySource
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRng;

impl OsRng {
    /// Read exactly 8 bytes of entropy and decode them as a little-endian
    /// `u64`.
    #[inline]
    pub fn try_next_u64(&mut self) -> Result<u64, Error> {
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf)?;
        Ok(le::u64_from_le_bytes(buf))
    }

    /// Fill `dest` entirely with entropy.
    #[inline]
    pub fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        getrandom::getrandom(dest)?;
        Ok(())
    }
}

#[test]
fn test_os_rng() {
    let x = OsRng.try_next_u64().unwrap();
    let y = OsRng.try_next_u64().unwrap();
    assert!(x != 0);
    assert!(x != y);
}

#[test]
fn test_fill() {
    let mut key = [0u8; 32];
    OsRng.try_fill_bytes(&mut key).unwrap();
    assert!(key.iter().any(|&b| b != 0));
}

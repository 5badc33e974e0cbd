// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Little-Endian utilities
//!
//! For cross-platform reproducibility, Little-Endian order (least-significant
//! part first) has been chosen as the standard for converting between a
//! `u64` and its constituent bytes or halves. For example, [`split_u64`]
//! takes `x` and returns `(x as u32, (x >> 32) as u32)`, and
//! [`fill_bytes_via_next`] writes `x.to_le_bytes()`.
//!
//! Reference vectors are endianness-sensitive, so nothing here relies on the
//! in-memory layout of the host.

use crate::RngCore;

/// Implement `fill_bytes` via `next_u64`, little-endian order.
///
/// Every full chunk of 8 bytes consumes one draw. A trailing partial chunk
/// consumes one further draw and keeps its least-significant bytes.
pub fn fill_bytes_via_next<R: RngCore + ?Sized>(rng: &mut R, dest: &mut [u8]) {
    let mut chunks = dest.chunks_exact_mut(8);
    for chunk in chunks.by_ref() {
        chunk.copy_from_slice(&rng.next_u64().to_le_bytes());
    }
    let rest = chunks.into_remainder();
    let n = rest.len();
    if n > 0 {
        rest.copy_from_slice(&rng.next_u64().to_le_bytes()[..n]);
    }
}

/// Split a `u64` into its `(low, high)` 32-bit halves.
#[inline]
pub fn split_u64(x: u64) -> (u32, u32) {
    (x as u32, (x >> 32) as u32)
}

/// Read a `u64` from exactly 8 bytes in little-endian order.
#[inline]
pub fn u64_from_le_bytes(bytes: [u8; 8]) -> u64 {
    u64::from_le_bytes(bytes)
}

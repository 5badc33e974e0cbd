// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion of raw bits into floating point numbers in `[0, 1)`

use crate::distributions::{Distribution, Standard};
use crate::Rng;
use core::mem;
use fakerng_core::le;

macro_rules! unit_float {
    ($name:ident, $ty:ty, $uty:ty, $fraction_bits:expr) => {
        /// Map raw bits to a float in the half-open interval `[0, 1)`.
        ///
        /// Multiply-based method: the most significant `fraction_bits + 1`
        /// bits of the input are scaled by 2<sup>-(fraction_bits + 1)</sup>.
        /// All-zero bits map to exactly `0.0`, all-one bits to the largest
        /// representable value below `1.0`, i.e. `1 - ε/2`.
        #[inline]
        pub fn $name(bits: $uty) -> $ty {
            // We use the most significant bits because for simple RNGs
            // those are usually more random.
            let float_size = mem::size_of::<$ty>() as u32 * 8;
            let precision = $fraction_bits + 1;
            let scale = 1.0 / ((1 as $uty << precision) as $ty);
            scale * (bits >> (float_size - precision)) as $ty
        }
    };
}

unit_float!(unit_f32, f32, u32, 23);
unit_float!(unit_f64, f64, u64, 52);

/// Split one raw draw into two floats in `[0, 1)`.
///
/// The first float is made from the low 32 bits, the second from the high
/// 32 bits, each via [`unit_f32`]. Both are views of the same draw: callers
/// that need two independent samples from the generator's period must draw
/// twice.
#[inline]
pub fn unit_f32_pair(bits: u64) -> (f32, f32) {
    let (low, high) = le::split_u64(bits);
    (unit_f32(low), unit_f32(high))
}

impl Distribution<f64> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        unit_f64(rng.next_u64())
    }
}

impl Distribution<f32> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        unit_f32(rng.next_u32())
    }
}

impl Distribution<(f32, f32)> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f32, f32) {
        unit_f32_pair(rng.next_u64())
    }
}

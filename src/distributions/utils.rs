// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Math helper functions

/// Round toward negative infinity.
///
/// `core` has no `f64::floor`, so this goes through a truncating cast: for a
/// negative non-integral `x` truncation lands one above the floor. `x` must
/// be finite and well inside the `i128` range.
#[inline]
pub(crate) fn floor_i128(x: f64) -> i128 {
    let t = x as i128;
    if (t as f64) > x {
        t - 1
    } else {
        t
    }
}

pub(crate) trait FloatUtils: Copy {
    /// The largest representable value strictly below `self`.
    fn next_below(self) -> Self;
}

macro_rules! float_utils_impl {
    ($ty:ty) => {
        impl FloatUtils for $ty {
            #[inline]
            fn next_below(self) -> $ty {
                if self > 0.0 {
                    <$ty>::from_bits(self.to_bits() - 1)
                } else if self < 0.0 {
                    <$ty>::from_bits(self.to_bits() + 1)
                } else {
                    // -0.0 and 0.0 both step to the smallest negative subnormal
                    -(<$ty>::from_bits(1))
                }
            }
        }
    };
}

float_utils_impl!(f32);
float_utils_impl!(f64);

// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A distribution uniformly sampling numbers within a given range.
//!
//! [`Uniform`] is the standard distribution to sample uniformly from a range;
//! e.g. `Uniform::new_inclusive(1, 6)?` can sample integers from 1 to 6, like
//! a standard die. [`Rng::gen_range`] supports any type supported by
//! [`Uniform`].
//!
//! All supported types are mapped through the same scheme: one raw `u64`
//! draw is turned into a double `u` in `[0, 1)` by [`unit_f64`], then scaled
//! as `low + u * (high - low)`. Integers are additionally floored (toward
//! negative infinity) and a closed range widens `high` by one first.
//!
//! Bounds are checked when the range is constructed, before any value is
//! drawn: a rejected range never advances the generator.
//!
//! # Example usage
//!
//! ```
//! use fakerng::{Rng, SeedableRng};
//! use fakerng::distributions::Uniform;
//! use fakerng::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(3);
//! let die = Uniform::new_inclusive(1, 6).unwrap();
//! let throw = rng.sample(&die);
//! assert!((1..=6).contains(&throw));
//!
//! assert!(Uniform::new(6, 1).is_err());
//! ```
//!
//! [`unit_f64`]: crate::distributions::float::unit_f64

use core::ops::{Range, RangeInclusive};

use crate::distributions::float::{unit_f32, unit_f64};
use crate::distributions::utils::{floor_i128, FloatUtils};
use crate::distributions::Distribution;
use crate::{Error, Rng};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Sample values uniformly between two bounds.
///
/// [`Uniform::new`] and [`Uniform::new_inclusive`] construct a uniform
/// distribution sampling from the given range; these functions return an
/// [`ErrorKind::InvalidRange`] error when the range is reversed or, for the
/// half-open form, empty. Floating point bounds must also be finite, and so
/// must their difference.
///
/// The descriptor itself holds no generator state: the same `Uniform` can be
/// used with any number of generators, and [`Uniform::from_bits`] maps an
/// already drawn `u64` without touching a generator at all.
///
/// # Example
///
/// ```
/// use fakerng::distributions::Uniform;
///
/// let range = Uniform::new(-10i32, 10).unwrap();
/// assert_eq!(range.from_bits(0), -10);
/// assert_eq!(range.from_bits(u64::MAX), 9);
/// ```
///
/// [`ErrorKind::InvalidRange`]: crate::ErrorKind::InvalidRange
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(bound(serialize = "X::Sampler: Serialize")))]
#[cfg_attr(
    feature = "serde1",
    serde(bound(deserialize = "X::Sampler: Deserialize<'de>"))
)]
pub struct Uniform<X: SampleUniform>(X::Sampler);

impl<X: SampleUniform> Uniform<X> {
    /// Create a new `Uniform` instance, which samples uniformly from the
    /// half-open range `[low, high)` (excluding `high`).
    ///
    /// Fails if `low >= high`, or if any bound is non-finite for floats.
    pub fn new(low: X, high: X) -> Result<Uniform<X>, Error> {
        X::Sampler::new(low, high).map(Uniform)
    }

    /// Create a new `Uniform` instance, which samples uniformly from the
    /// closed range `[low, high]` (inclusive).
    ///
    /// Fails if `low > high`, or if any bound is non-finite for floats.
    /// `[low, low]` is valid and always yields `low`.
    pub fn new_inclusive(low: X, high: X) -> Result<Uniform<X>, Error> {
        X::Sampler::new_inclusive(low, high).map(Uniform)
    }

    /// Map one raw `u64` to a value of the range.
    #[inline]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_bits(&self, bits: u64) -> X {
        self.0.from_bits(bits)
    }
}

impl<X: SampleUniform> Distribution<X> for Uniform<X> {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> X {
        self.0.sample(rng)
    }
}

/// Helper trait for creating objects using the correct implementation of
/// [`UniformSampler`] for the sampling type.
///
/// See the [module documentation] on how to implement [`Uniform`] range
/// sampling for a custom type.
///
/// [module documentation]: crate::distributions::uniform
pub trait SampleUniform: Sized {
    /// The `UniformSampler` implementation supporting type `X`.
    type Sampler: UniformSampler<X = Self>;
}

/// Helper trait handling actual uniform sampling.
///
/// Implementation of [`from_bits`] is the only required sampling method;
/// [`sample`] draws exactly one `u64` and feeds it through `from_bits`.
///
/// [`from_bits`]: UniformSampler::from_bits
/// [`sample`]: UniformSampler::sample
pub trait UniformSampler: Sized {
    /// The type sampled by this implementation.
    type X;

    /// Construct self, with inclusive lower bound and exclusive upper bound
    /// `[low, high)`.
    fn new(low: Self::X, high: Self::X) -> Result<Self, Error>;

    /// Construct self, with inclusive bounds `[low, high]`.
    fn new_inclusive(low: Self::X, high: Self::X) -> Result<Self, Error>;

    /// Map one raw `u64` to a value within the bounds.
    #[allow(clippy::wrong_self_convention)]
    fn from_bits(&self, bits: u64) -> Self::X;

    /// Sample a value.
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        self.from_bits(rng.next_u64())
    }
}

/// Range that supports generating a single sample efficiently.
///
/// Any type implementing this trait can be used to specify the sampled range
/// for `Rng::gen_range`.
pub trait SampleRange<T> {
    /// Generate a sample from the given range.
    ///
    /// The range is validated first; on error no value is drawn from `rng`.
    fn sample_single<R: Rng + ?Sized>(self, rng: &mut R) -> Result<T, Error>;

    /// Check whether the range is empty.
    fn is_empty(&self) -> bool;
}

impl<T: SampleUniform + PartialOrd> SampleRange<T> for Range<T> {
    #[inline]
    fn sample_single<R: Rng + ?Sized>(self, rng: &mut R) -> Result<T, Error> {
        let sampler = T::Sampler::new(self.start, self.end)?;
        Ok(sampler.sample(rng))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        !(self.start < self.end)
    }
}

impl<T: SampleUniform + PartialOrd> SampleRange<T> for RangeInclusive<T> {
    #[inline]
    fn sample_single<R: Rng + ?Sized>(self, rng: &mut R) -> Result<T, Error> {
        let (low, high) = self.into_inner();
        let sampler = T::Sampler::new_inclusive(low, high)?;
        Ok(sampler.sample(rng))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        !(self.start() <= self.end())
    }
}

/// The back-end implementing [`UniformSampler`] for integer types.
///
/// Unless you are implementing [`UniformSampler`] for your own type, this type
/// should not be used directly, use [`Uniform`] instead.
///
/// # Implementation notes
///
/// The arithmetic happens in `f64` with the bounds widened to `i128`, so no
/// supported range overflows. For spans wider than 2<sup>53</sup> the `f64`
/// product can round onto the exclusive end; such results are clamped back
/// into the range, and the resolution of the sample is limited to 53 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct UniformInt<X> {
    pub(crate) low: X,
    pub(crate) high: X,
    pub(crate) inclusive: bool,
}

impl<X: Copy + Into<i128>> UniformInt<X> {
    /// `[low, end)` in `i128`.
    #[inline]
    fn bounds(&self) -> (i128, i128) {
        let low: i128 = self.low.into();
        let high: i128 = self.high.into();
        let end = high + i128::from(self.inclusive);
        (low, end)
    }
}

macro_rules! uniform_int_impl {
    ($ty:ty) => {
        impl SampleUniform for $ty {
            type Sampler = UniformInt<$ty>;
        }

        impl UniformSampler for UniformInt<$ty> {
            type X = $ty;

            #[inline]
            fn new(low: $ty, high: $ty) -> Result<Self, Error> {
                if !(low < high) {
                    return Err(Error::invalid_range("Uniform::new called with `low >= high`"));
                }
                Ok(UniformInt { low, high, inclusive: false })
            }

            #[inline]
            fn new_inclusive(low: $ty, high: $ty) -> Result<Self, Error> {
                if !(low <= high) {
                    return Err(Error::invalid_range(
                        "Uniform::new_inclusive called with `low > high`",
                    ));
                }
                Ok(UniformInt { low, high, inclusive: true })
            }

            #[inline]
            fn from_bits(&self, bits: u64) -> $ty {
                let (low, end) = self.bounds();
                let x = low as f64 + unit_f64(bits) * (end as f64 - low as f64);
                let v = floor_i128(x);
                let v = if v >= end { end - 1 } else { v };
                let v = if v < low { low } else { v };
                v as $ty
            }
        }
    };
}

uniform_int_impl! { i8 }
uniform_int_impl! { i16 }
uniform_int_impl! { i32 }
uniform_int_impl! { i64 }
uniform_int_impl! { u8 }
uniform_int_impl! { u16 }
uniform_int_impl! { u32 }
uniform_int_impl! { u64 }

// `usize`/`isize` have no `Into<i128>`; go through the fixed-width type.
macro_rules! uniform_size_impl {
    ($ty:ty, $via:ty) => {
        impl SampleUniform for $ty {
            type Sampler = UniformInt<$ty>;
        }

        impl UniformSampler for UniformInt<$ty> {
            type X = $ty;

            #[inline]
            fn new(low: $ty, high: $ty) -> Result<Self, Error> {
                UniformInt::<$via>::new(low as $via, high as $via)?;
                Ok(UniformInt { low, high, inclusive: false })
            }

            #[inline]
            fn new_inclusive(low: $ty, high: $ty) -> Result<Self, Error> {
                UniformInt::<$via>::new_inclusive(low as $via, high as $via)?;
                Ok(UniformInt { low, high, inclusive: true })
            }

            #[inline]
            fn from_bits(&self, bits: u64) -> $ty {
                let inner = UniformInt::<$via> {
                    low: self.low as $via,
                    high: self.high as $via,
                    inclusive: self.inclusive,
                };
                inner.from_bits(bits) as $ty
            }
        }
    };
}

uniform_size_impl! { usize, u64 }
uniform_size_impl! { isize, i64 }

/// The back-end implementing [`UniformSampler`] for floating-point types.
///
/// Unless you are implementing [`UniformSampler`] for your own type, this type
/// should not be used directly, use [`Uniform`] instead.
///
/// # Implementation notes
///
/// Samples are `low + u * scale` with `u` in `[0, 1)` from the multiply-based
/// conversion: 53 random bits for an `f64`, 24 (the upper half of the draw)
/// for an `f32`. When rounding of a half-open range lands exactly on `high`,
/// the largest float below `high` is returned instead.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct UniformFloat<X> {
    low: X,
    high: X,
    scale: X,
    inclusive: bool,
}

#[inline]
fn unit_f32_upper(bits: u64) -> f32 {
    unit_f32((bits >> 32) as u32)
}

macro_rules! uniform_float_impl {
    ($ty:ty, $unit:ident) => {
        impl SampleUniform for $ty {
            type Sampler = UniformFloat<$ty>;
        }

        impl UniformFloat<$ty> {
            fn checked(low: $ty, high: $ty, inclusive: bool) -> Result<Self, Error> {
                if !(low.is_finite() && high.is_finite()) {
                    return Err(Error::invalid_range("Uniform: bounds must be finite"));
                }
                let ordered = if inclusive { low <= high } else { low < high };
                if !ordered {
                    return Err(Error::invalid_range("Uniform: `low` above `high` or range empty"));
                }
                let scale = high - low;
                if !scale.is_finite() {
                    return Err(Error::invalid_range("Uniform: range overflow"));
                }
                Ok(UniformFloat { low, high, scale, inclusive })
            }
        }

        impl UniformSampler for UniformFloat<$ty> {
            type X = $ty;

            #[inline]
            fn new(low: $ty, high: $ty) -> Result<Self, Error> {
                Self::checked(low, high, false)
            }

            #[inline]
            fn new_inclusive(low: $ty, high: $ty) -> Result<Self, Error> {
                Self::checked(low, high, true)
            }

            #[inline]
            fn from_bits(&self, bits: u64) -> $ty {
                let v = self.low + $unit(bits) * self.scale;
                if self.inclusive && v > self.high {
                    self.high
                } else if !self.inclusive && v >= self.high {
                    self.high.next_below()
                } else {
                    v
                }
            }
        }
    };
}

uniform_float_impl! { f32, unit_f32_upper }
uniform_float_impl! { f64, unit_f64 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rngs::mock::StepRng;
    use crate::{ErrorKind, RngCore};

    #[test]
    fn test_reversed_and_empty_ranges() {
        assert_eq!(Uniform::new(5, 3).unwrap_err().kind(), ErrorKind::InvalidRange);
        assert_eq!(Uniform::new(3, 3).unwrap_err().kind(), ErrorKind::InvalidRange);
        assert_eq!(
            Uniform::new_inclusive(5u8, 3).unwrap_err().kind(),
            ErrorKind::InvalidRange
        );
        assert!(Uniform::new_inclusive(3, 3).is_ok());
        assert!(Uniform::new(10usize, 5).is_err());
        assert!(Uniform::new_inclusive(-1isize, -2).is_err());
    }

    #[test]
    fn test_degenerate_inclusive() {
        let range = Uniform::new_inclusive(-7i64, -7).unwrap();
        for &bits in &[0, 1, 1 << 63, u64::MAX] {
            assert_eq!(range.from_bits(bits), -7);
        }
        let range = Uniform::new_inclusive(u64::MAX, u64::MAX).unwrap();
        assert_eq!(range.from_bits(u64::MAX), u64::MAX);
        assert_eq!(range.from_bits(0), u64::MAX);
    }

    #[test]
    fn test_integer_edges() {
        let range = Uniform::new(-10, 10).unwrap();
        assert_eq!(range.from_bits(0), -10);
        assert_eq!(range.from_bits(1 << 63), 0);
        assert_eq!(range.from_bits(u64::MAX), 9);

        let range = Uniform::new_inclusive(-3i8, 3).unwrap();
        assert_eq!(range.from_bits(0), -3);
        assert_eq!(range.from_bits(u64::MAX), 3);

        // -5 + 0.25 * 5 = -3.75 must floor to -4, not truncate to -3
        let range = Uniform::new(-5i32, 0).unwrap();
        assert_eq!(range.from_bits(1 << 62), -4);

        let range = Uniform::new(0usize, 10).unwrap();
        assert_eq!(range.from_bits(u64::MAX), 9);
    }

    #[test]
    fn test_full_width_ranges() {
        let range = Uniform::new_inclusive(i64::MIN, i64::MAX).unwrap();
        assert_eq!(range.from_bits(0), i64::MIN);
        assert_eq!(range.from_bits(u64::MAX), i64::MAX - 2047);

        let range = Uniform::new_inclusive(0, u64::MAX).unwrap();
        assert_eq!(range.from_bits(0), 0);
        assert_eq!(range.from_bits(u64::MAX), u64::MAX - 2047);

        let range = Uniform::new(i64::MIN, i64::MAX).unwrap();
        let mut x: u64 = 1;
        for _ in 0..1000 {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let v = range.from_bits(x);
            assert!(v < i64::MAX);
        }
    }

    #[test]
    fn test_floats() {
        let range = Uniform::new(-1.0f64, 1.0).unwrap();
        assert_eq!(range.from_bits(0), -1.0);
        assert_eq!(range.from_bits(1 << 63), 0.0);
        assert!(range.from_bits(u64::MAX) < 1.0);

        let range = Uniform::new(2.0f32, 4.0).unwrap();
        assert_eq!(range.from_bits(0), 2.0);
        assert_eq!(range.from_bits(1 << 63), 3.0);
        assert!(range.from_bits(u64::MAX) < 4.0);

        let range = Uniform::new_inclusive(1.5f64, 1.5).unwrap();
        assert_eq!(range.from_bits(u64::MAX), 1.5);
    }

    #[test]
    fn test_float_rounding_stays_below_high() {
        let high = 1.0 + f64::EPSILON;
        let range = Uniform::new(1.0f64, high).unwrap();
        assert_eq!(range.from_bits(u64::MAX), 1.0);
        assert!(range.from_bits(u64::MAX) < high);
    }

    #[test]
    fn test_float_inclusive_reaches_high() {
        let high = 1.0 + f64::EPSILON;
        let range = Uniform::new_inclusive(1.0f64, high).unwrap();
        assert_eq!(range.from_bits(u64::MAX), high);
        assert_eq!(range.from_bits(0), 1.0);

        let range = Uniform::new_inclusive(-2.0f32, 2.0).unwrap();
        assert!(range.from_bits(u64::MAX) <= 2.0);
    }

    #[test]
    fn test_float_rejects() {
        assert!(Uniform::new(1.0f64, 1.0).is_err());
        assert!(Uniform::new(2.0f64, 1.0).is_err());
        assert!(Uniform::new_inclusive(2.0f32, 1.0).is_err());
        assert!(Uniform::new(0.0f64, f64::INFINITY).is_err());
        assert!(Uniform::new(f64::NAN, 1.0).is_err());
        assert!(Uniform::new(-f64::MAX, f64::MAX).is_err());
    }

    #[test]
    fn test_sample_range_does_not_draw_on_error() {
        let mut rng = StepRng::new(0, 1);
        assert_eq!(
            (5..3).sample_single(&mut rng).unwrap_err().kind(),
            ErrorKind::InvalidRange
        );
        assert!(SampleRange::<i32>::is_empty(&(5..3)));
        assert!(!SampleRange::<i32>::is_empty(&(3..=3)));
        assert_eq!((3..=3).sample_single(&mut rng).unwrap(), 3);
        // exactly one value was drawn by the successful call
        assert_eq!(rng.next_u64(), 1);
    }

    #[test]
    fn test_distribution_sample() {
        let mut rng = StepRng::new(1 << 63, 0);
        let range = Uniform::new(10u32, 20).unwrap();
        assert_eq!(range.sample(&mut rng), 15);
        assert_eq!(rng.sample(range), 15);
    }
}

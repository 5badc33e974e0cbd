// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Rng`] trait

use crate::distributions::float::{unit_f32_pair, unit_f64};
use crate::distributions::uniform::{SampleRange, SampleUniform};
use crate::distributions::{Distribution, Standard};
use crate::Error;
use fakerng_core::RngCore;

/// An automatically-implemented extension trait on [`RngCore`] providing high-level
/// generic methods for sampling values and other convenience methods.
///
/// This is the primary trait to use when generating random values.
///
/// # Generic usage
///
/// The basic pattern is `fn foo<R: Rng + ?Sized>(rng: &mut R)`. Some
/// things are worth noting here:
///
/// - Since `Rng: RngCore` and every `RngCore` implements `Rng`, it makes no
///   difference whether we use `R: Rng` or `R: RngCore`.
/// - The `+ ?Sized` un-bounding allows functions to be called directly on
///   type-erased references; i.e. `foo(r)` where `r: &mut dyn RngCore`. Without
///   this it would be necessary to write `foo(&mut r)`.
///
/// Example:
///
/// ```
/// use fakerng::{Rng, SeedableRng};
/// use fakerng::rngs::StdRng;
///
/// fn foo<R: Rng + ?Sized>(rng: &mut R) -> f32 {
///     rng.random()
/// }
///
/// let v = foo(&mut StdRng::seed_from_u64(0));
/// assert!(v < 1.0);
/// ```
pub trait Rng: RngCore {
    /// Return a random value via the [`Standard`] distribution.
    ///
    /// # Example
    ///
    /// ```
    /// use fakerng::{Rng, SeedableRng};
    /// use fakerng::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(5);
    /// let x: u32 = rng.random();
    /// let (a, b): (f32, f32) = rng.random();
    /// # let _ = (x, a, b);
    /// ```
    #[inline]
    fn random<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        Standard.sample(self)
    }

    /// Generate a random value in the given range.
    ///
    /// This function is optimised for the case that only a single sample is
    /// made from the given range. See also the [`Uniform`] distribution
    /// type which may be faster if sampling from the same range repeatedly.
    ///
    /// Only `gen_range(low..high)` and `gen_range(low..=high)` are supported.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidRange`] if the range is empty or reversed,
    /// or if a float range is not finite. No value is drawn in that case, so
    /// the generator state is untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use fakerng::{Rng, SeedableRng};
    /// use fakerng::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(8);
    ///
    /// // Exclusive range
    /// let n: u32 = rng.gen_range(0..10).unwrap();
    /// assert!(n < 10);
    /// let m: f64 = rng.gen_range(-40.0..1.3e5).unwrap();
    /// assert!(m >= -40.0 && m < 1.3e5);
    ///
    /// // Inclusive range
    /// let n: i32 = rng.gen_range(-10..=10).unwrap();
    /// assert!(-10 <= n && n <= 10);
    ///
    /// // Reversed range
    /// assert!(rng.gen_range(5..=3).is_err());
    /// ```
    ///
    /// [`Uniform`]: crate::distributions::Uniform
    /// [`ErrorKind::InvalidRange`]: crate::ErrorKind::InvalidRange
    fn gen_range<T, R>(&mut self, range: R) -> Result<T, Error>
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        range.sample_single(self)
    }

    /// Sample a new value, using the given distribution.
    ///
    /// ### Example
    ///
    /// ```
    /// use fakerng::{Rng, SeedableRng};
    /// use fakerng::distributions::Uniform;
    /// use fakerng::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(13);
    /// let x = rng.sample(Uniform::new(10u32, 15).unwrap());
    /// assert!((10..15).contains(&x));
    /// ```
    fn sample<T, D: Distribution<T>>(&mut self, distr: D) -> T {
        distr.sample(self)
    }

    /// Return a double in `[0, 1)` from one draw.
    ///
    /// Shorthand for `rng.random::<f64>()`.
    #[inline]
    fn gen_f64(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }

    /// Return two floats in `[0, 1)` made from the two halves of one draw.
    ///
    /// The pair is a deterministic view of a single draw, not two independent
    /// samples; draw twice if independence matters.
    #[inline]
    fn gen_f32_pair(&mut self) -> (f32, f32) {
        unit_f32_pair(self.next_u64())
    }

    /// Return a bool with a probability `p` of being true.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidRange`] if `p < 0` or `p > 1` (or `p` is
    /// NaN), without drawing a value.
    ///
    /// # Example
    ///
    /// ```
    /// use fakerng::{Rng, SeedableRng};
    /// use fakerng::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(21);
    /// assert_eq!(rng.gen_bool(1.0).unwrap(), true);
    /// assert_eq!(rng.gen_bool(0.0).unwrap(), false);
    /// assert!(rng.gen_bool(1.5).is_err());
    /// ```
    ///
    /// [`ErrorKind::InvalidRange`]: crate::ErrorKind::InvalidRange
    #[inline]
    fn gen_bool(&mut self, p: f64) -> Result<bool, Error> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_range("gen_bool: probability outside [0, 1]"));
        }
        Ok(self.gen_f64() < p)
    }
}

impl<R: RngCore + ?Sized> Rng for R {}

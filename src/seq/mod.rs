// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sequence-related functionality
//!
//! This module provides:
//!
//! *   [`IndexedRandom`] for sampling slices and other indexable lists
//! *   [`IndexedMutRandom`] for shuffling slices and other mutably indexable
//!     lists
//!
//! Both traits need nothing beyond `O(1)` indexing and a length, so a
//! container type only has to supply [`IndexedRandom::len`] and
//! [`IndexedMutRandom::swap_at`].
//!
//! Indices are drawn through the same integer-in-range conversion as
//! [`Rng::gen_range`], so results are identical on 32 and 64 bit targets.
//!
//! [`Rng::gen_range`]: crate::Rng::gen_range

use core::ops::{Index, IndexMut};

#[cfg(feature = "alloc")]
use alloc::collections::VecDeque;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::distributions::uniform::{UniformInt, UniformSampler};
use crate::{Error, Rng};

/// Extension trait on indexable lists, providing random sampling methods.
///
/// This trait is implemented on `[T]` slice types and, with `alloc`, on
/// `VecDeque<T>`. Other types supporting [`core::ops::Index<usize>`] may
/// implement this (only [`Self::len`] must be specified).
pub trait IndexedRandom: Index<usize> {
    /// The length
    fn len(&self) -> usize;

    /// True when the length is zero
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Uniformly sample one element
    ///
    /// Returns a reference to one uniformly-sampled random element of
    /// the sequence. One value is drawn from `rng`.
    ///
    /// # Errors
    ///
    /// An empty sequence gives [`ErrorKind::InvalidRange`]; nothing is drawn.
    ///
    /// # Example
    ///
    /// ```
    /// use fakerng::{SeedableRng, seq::IndexedRandom};
    /// use fakerng::rngs::StdRng;
    ///
    /// let choices = [1, 2, 4, 8, 16, 32];
    /// let mut rng = StdRng::seed_from_u64(42);
    /// println!("{:?}", choices.choose(&mut rng).unwrap());
    /// assert!(choices[..0].choose(&mut rng).is_err());
    /// ```
    ///
    /// [`ErrorKind::InvalidRange`]: crate::ErrorKind::InvalidRange
    fn choose<R>(&self, rng: &mut R) -> Result<&Self::Output, Error>
    where
        R: Rng + ?Sized,
    {
        let index = gen_index(rng, self.len())?;
        Ok(&self[index])
    }

    /// Uniformly sample `amount` distinct elements
    ///
    /// Chooses `min(amount, len)` elements from the sequence at random,
    /// without repetition, and in random order. Exactly that many values are
    /// drawn from `rng`; the sequence itself is left untouched.
    ///
    /// # Example
    /// ```
    /// use fakerng::{SeedableRng, seq::IndexedRandom};
    /// use fakerng::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let sample = "Hello, audience!".as_bytes();
    ///
    /// let v: Vec<u8> = sample.choose_multiple(&mut rng, 3).into_iter().cloned().collect();
    /// assert_eq!(v.len(), 3);
    /// ```
    #[cfg(feature = "alloc")]
    fn choose_multiple<R>(&self, rng: &mut R, amount: usize) -> Vec<&Self::Output>
    where
        R: Rng + ?Sized,
    {
        let len = self.len();
        let amount = core::cmp::min(amount, len);
        let mut indices: Vec<usize> = (0..len).collect();
        for i in 0..amount {
            let j = i + index_inclusive(rng, len - 1 - i);
            indices.swap(i, j);
        }
        indices[..amount].iter().map(|&i| &self[i]).collect()
    }

    /// Return a shuffled copy, leaving `self` untouched
    ///
    /// The copy is shuffled with [`IndexedMutRandom::shuffle`], so
    /// `seq.shuffled(rng)` yields the same permutation as cloning `seq` and
    /// shuffling the clone with an identically seeded generator.
    ///
    /// # Example
    ///
    /// ```
    /// use fakerng::{SeedableRng, seq::IndexedRandom};
    /// use fakerng::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let y = [1, 2, 3, 4, 5];
    /// let mut z = y.shuffled(&mut rng);
    /// z.sort();
    /// assert_eq!(z, y);
    /// ```
    #[cfg(feature = "alloc")]
    fn shuffled<R>(&self, rng: &mut R) -> Vec<Self::Output>
    where
        Self::Output: Clone + Sized,
        R: Rng + ?Sized,
    {
        let mut copy: Vec<Self::Output> = (0..self.len()).map(|i| self[i].clone()).collect();
        copy.shuffle(rng);
        copy
    }
}

/// Extension trait on mutably indexable lists, providing shuffling methods.
///
/// Implementors supply [`Self::swap_at`]; the remaining methods are provided.
pub trait IndexedMutRandom: IndexedRandom + IndexMut<usize> {
    /// Swap the elements at positions `a` and `b`.
    ///
    /// Both indices are always in bounds when called from this trait.
    fn swap_at(&mut self, a: usize, b: usize);

    /// Uniformly sample one element (mut)
    ///
    /// Returns a mutable reference to one uniformly-sampled random element of
    /// the sequence, or [`ErrorKind::InvalidRange`] if it is empty.
    ///
    /// [`ErrorKind::InvalidRange`]: crate::ErrorKind::InvalidRange
    fn choose_mut<R>(&mut self, rng: &mut R) -> Result<&mut Self::Output, Error>
    where
        R: Rng + ?Sized,
    {
        let index = gen_index(rng, self.len())?;
        Ok(&mut self[index])
    }

    /// Shuffle in place.
    ///
    /// Fisher-Yates: for `i` from `len - 1` down to `1`, draw `j` uniformly
    /// from `[0, i]` and swap positions `i` and `j`. This draws `len - 1`
    /// values; sequences of length 0 or 1 are left alone and draw nothing.
    /// The resulting permutation is picked uniformly from the set of all
    /// possible permutations.
    ///
    /// # Example
    ///
    /// ```
    /// use fakerng::{SeedableRng, seq::IndexedMutRandom};
    /// use fakerng::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(2);
    /// let mut y = [1, 2, 3, 4, 5];
    /// println!("Unshuffled: {:?}", y);
    /// y.shuffle(&mut rng);
    /// println!("Shuffled:   {:?}", y);
    /// ```
    fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for i in (1..self.len()).rev() {
            let j = index_inclusive(rng, i);
            self.swap_at(i, j);
        }
    }
}

impl<T> IndexedRandom for [T] {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T> IndexedMutRandom for [T] {
    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b)
    }
}

#[cfg(feature = "alloc")]
impl<T> IndexedRandom for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "alloc")]
impl<T> IndexedMutRandom for VecDeque<T> {
    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b)
    }
}

// Sample a number uniformly in `[0, ubound)`. Fails on `ubound == 0`.
#[inline]
fn gen_index<R: Rng + ?Sized>(rng: &mut R, ubound: usize) -> Result<usize, Error> {
    if ubound == 0 {
        return Err(Error::invalid_range("cannot choose from an empty sequence"));
    }
    rng.gen_range(0..ubound)
}

// Sample a number uniformly in `[0, i]`; the range is never empty.
#[inline]
fn index_inclusive<R: Rng + ?Sized>(rng: &mut R, i: usize) -> usize {
    let range = UniformInt::<usize> {
        low: 0,
        high: i,
        inclusive: true,
    };
    range.sample(rng)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rngs::mock::StepRng;
    use crate::test::rng;
    use crate::{ErrorKind, RngCore, SeedableRng};
    #[cfg(feature = "alloc")]
    use alloc::vec;

    #[test]
    fn test_slice_choose() {
        let mut r = rng(107);
        let chars = [
            'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n',
        ];
        let mut chosen = [0i32; 14];
        // The below all use a binomial distribution with n=1000, p=1/14.
        // binocdf(40, 1000, 1/14) ~= 2e-5; 1-binocdf(106, ..) ~= 2e-5
        for _ in 0..1000 {
            let picked = *chars.choose(&mut r).unwrap();
            chosen[(picked as usize) - ('a' as usize)] += 1;
        }
        for count in chosen.iter() {
            assert!(40 < *count && *count < 106);
        }

        chosen.iter_mut().for_each(|x| *x = 0);
        for _ in 0..1000 {
            *chosen.choose_mut(&mut r).unwrap() += 1;
        }
        for count in chosen.iter() {
            assert!(40 < *count && *count < 106);
        }

        let mut v: [isize; 0] = [];
        assert_eq!(v.choose(&mut r).unwrap_err().kind(), ErrorKind::InvalidRange);
        assert!(v.choose_mut(&mut r).is_err());
    }

    #[test]
    fn test_choose_empty_keeps_state() {
        let mut r = rng(3);
        let before = r.clone();
        let empty: &[u8] = &[];
        assert!(empty.choose(&mut r).is_err());
        assert_eq!(r, before);
    }

    #[test]
    fn test_shuffle_draw_counts() {
        // a length n shuffle draws n - 1 values
        let mut r = StepRng::new(0, 1);
        let mut x = [1, 2, 3, 4, 5];
        x.shuffle(&mut r);
        assert_eq!(r.next_u64(), 4);

        let mut r = StepRng::new(0, 1);
        let mut empty: [i32; 0] = [];
        empty.shuffle(&mut r);
        assert_eq!(empty, []);
        let mut one = [7];
        one.shuffle(&mut r);
        assert_eq!(one, [7]);
        assert_eq!(r.next_u64(), 0);
    }

    #[test]
    fn test_shuffle_with_zero_draws() {
        // every draw maps to j = 0: each step swaps position i with the front
        let mut r = StepRng::new(0, 0);
        let mut x = [1, 2, 3, 4];
        x.shuffle(&mut r);
        assert_eq!(x, [2, 3, 4, 1]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut r = rng(108);
        for n in 0..20 {
            let mut x: [usize; 20] = core::array::from_fn(|i| i);
            x[..n].shuffle(&mut r);
            let mut sorted = x;
            sorted.sort_unstable();
            assert_eq!(sorted, core::array::from_fn::<usize, 20, _>(|i| i));
        }
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn test_shuffled_leaves_original() {
        let original = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let mut r1 = rng(5);
        let mut r2 = rng(5);
        let copy = original.shuffled(&mut r1);
        let mut expected = original.clone();
        expected.shuffle(&mut r2);
        assert_eq!(copy, expected);
        assert_eq!(original, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(r1, r2);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn test_choose_multiple() {
        let mut r = rng(401);
        let v: Vec<u32> = (0..20).collect();
        for amount in [0, 1, 5, 20, 25] {
            let picked = v.choose_multiple(&mut r, amount);
            assert_eq!(picked.len(), core::cmp::min(amount, 20));
            let mut seen = [false; 20];
            for &&x in &picked {
                assert!(!seen[x as usize]);
                seen[x as usize] = true;
            }
        }
        let empty: &[u32] = &[];
        assert!(empty.choose_multiple(&mut r, 3).is_empty());
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn test_vec_deque() {
        let mut r = rng(402);
        let mut d: VecDeque<u8> = (0..10).collect();
        assert!(d.choose(&mut r).unwrap() < &10);
        d.shuffle(&mut r);
        let mut sorted: Vec<u8> = d.iter().copied().collect();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<u8>>());
        assert!(VecDeque::<u8>::new().choose(&mut r).is_err());
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn value_stability() {
        let mut r = crate::rngs::StdRng::seed_from_u64(42);
        let v: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let chosen: Vec<u32> = (0..5).map(|_| *v.choose(&mut r).unwrap()).collect();
        assert_eq!(chosen, [9, 7, 3, 5, 7]);

        let mut r = crate::rngs::StdRng::seed_from_u64(42);
        let mut x: [u32; 10] = core::array::from_fn(|i| i as u32);
        x.shuffle(&mut r);
        assert_eq!(x, [2, 8, 0, 5, 7, 4, 3, 1, 6, 9]);

        let mut r = crate::rngs::StdRng::seed_from_u64(42);
        let x: [u32; 10] = core::array::from_fn(|i| i as u32);
        let picked: Vec<u32> = x.choose_multiple(&mut r, 4).into_iter().copied().collect();
        assert_eq!(picked, [9, 7, 3, 6]);

        let mut r = crate::rngs::SmallRng::seed_from_u64(42);
        let mut x = ['a', 'b', 'c', 'd', 'e', 'f'];
        x.shuffle(&mut r);
        assert_eq!(x, ['c', 'f', 'd', 'b', 'a', 'e']);
    }
}

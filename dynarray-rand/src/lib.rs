// Copyright 2026 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random constructors and fill operations for `DynArray`.
//!
//! The core container treats randomness as an external collaborator; this
//! crate is that collaborator. It extends [`DynArray`] with constructors and
//! append-style fills that draw elements from any `rand` distribution.
//!
//! `rand` and `rand_distr` are re-exported so downstream code uses the same
//! versions this crate was built against:
//!
//! ```rust
//! use dynarray::DynArray;
//! use dynarray_rand::rand::distr::Uniform;
//! use dynarray_rand::RandomExt;
//!
//! let a = DynArray::random(10, Uniform::new_inclusive(10, 1000).unwrap());
//! assert_eq!(a.len(), 10);
//! ```

pub use rand;
pub use rand_distr;

use rand::distr::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use dynarray::{ArrayError, DynArray};

/// Constructors and fill operations drawing elements from a `rand`
/// distribution.
///
/// This trait extends `DynArray` and is not meant to be implemented for
/// other types.
///
/// The default rng is a fast automatically seeded rng (currently
/// [`SmallRng`] seeded from the thread rng).
pub trait RandomExt
{
    /// Create an array of `n` elements drawn from `distribution`, using the
    /// default rng.
    fn random<D>(n: usize, distribution: D) -> DynArray
    where D: Distribution<i32>;

    /// Create an array of `n` elements drawn from `distribution`, using a
    /// specific rng.
    fn random_using<D, R>(n: usize, distribution: D, rng: &mut R) -> DynArray
    where
        D: Distribution<i32>,
        R: Rng + ?Sized;

    /// Append `n` elements drawn from `distribution`, using the default
    /// rng.
    ///
    /// This is repeated [`DynArray::push`]: the buffer grows by the array's
    /// usual policy and allocation failure is reported the same way.
    fn fill_random<D>(&mut self, n: usize, distribution: D) -> Result<(), ArrayError>
    where D: Distribution<i32>;

    /// Append `n` elements drawn from `distribution`, using a specific rng.
    fn fill_random_using<D, R>(&mut self, n: usize, distribution: D, rng: &mut R) -> Result<(), ArrayError>
    where
        D: Distribution<i32>,
        R: Rng + ?Sized;
}

impl RandomExt for DynArray
{
    fn random<D>(n: usize, distribution: D) -> DynArray
    where D: Distribution<i32>
    {
        Self::random_using(n, distribution, &mut get_rng())
    }

    fn random_using<D, R>(n: usize, distribution: D, rng: &mut R) -> DynArray
    where
        D: Distribution<i32>,
        R: Rng + ?Sized,
    {
        DynArray::from_iter(distribution.sample_iter(rng).take(n))
    }

    fn fill_random<D>(&mut self, n: usize, distribution: D) -> Result<(), ArrayError>
    where D: Distribution<i32>
    {
        self.fill_random_using(n, distribution, &mut get_rng())
    }

    fn fill_random_using<D, R>(&mut self, n: usize, distribution: D, rng: &mut R) -> Result<(), ArrayError>
    where
        D: Distribution<i32>,
        R: Rng + ?Sized,
    {
        for _ in 0..n {
            self.push(distribution.sample(rng))?;
        }
        Ok(())
    }
}

/// A fast rng, freshly seeded per call.
fn get_rng() -> SmallRng
{
    SmallRng::from_rng(&mut rand::rng())
}

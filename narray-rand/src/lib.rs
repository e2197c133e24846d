// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructors for randomized arrays: `rand` integration for `narray`.
//!
//! See [**`RandomExt`**](trait.RandomExt.html) for usage examples.
//!
//! ## Note
//!
//! `narray-rand` depends on [`rand`](https://docs.rs/rand/).
//!
//! [`rand`](https://docs.rs/rand/) and
//! [`rand_distr`](https://docs.rs/rand_distr/)
//! are re-exported as sub-modules, [`narray_rand::rand`](rand/index.html)
//! and [`narray_rand::rand_distr`](rand_distr/index.html) respectively.
//! You can use these submodules for guaranteed version compatibility or
//! convenience.
//!
//! Every constructor that draws from a random number generator takes it as
//! an explicit `&mut` argument, except [`RandomExt::random`], which uses
//! the thread local generator.

use narray::error::{from_kind, ErrorKind};
use narray::{NArray, Shape};

use crate::rand::distr::uniform::SampleUniform;
use crate::rand::distr::{Distribution, StandardUniform, Uniform};
use crate::rand::Rng;
use crate::rand_distr::StandardNormal;

/// [`rand`](https://docs.rs/rand/), re-exported for convenience and version-compatibility.
pub mod rand {
    pub use rand::*;
}

/// [`rand-distr`](https://docs.rs/rand_distr/), re-exported for convenience and version-compatibility.
pub mod rand_distr {
    pub use rand_distr::*;
}

/// Constructors for n-dimensional arrays with random elements.
///
/// This trait extends narray's `NArray` and can not be implemented
/// for other types.
pub trait RandomExt<T> {
    /// Create an array with shape `shape` with elements drawn from
    /// `distribution` using the thread local random number generator.
    ///
    /// ```
    /// use narray::NArray;
    /// use narray_rand::RandomExt;
    /// use narray_rand::rand_distr::Uniform;
    ///
    /// let a = NArray::random([2, 5], Uniform::new(0., 10.).unwrap());
    /// assert_eq!(a.shape().dims(), &[2, 5]);
    /// assert!(a.iter().all(|x| (0. ..10.).contains(&x)));
    /// ```
    fn random<Sh, D>(shape: Sh, distribution: D) -> NArray<T>
    where
        Sh: Into<Shape>,
        D: Distribution<T>;

    /// Create an array with shape `shape` with elements drawn from
    /// `distribution`, using a specific Rng `rng`.
    ///
    /// ```
    /// use narray::NArray;
    /// use narray_rand::RandomExt;
    /// use narray_rand::rand::SeedableRng;
    /// use narray_rand::rand_distr::Uniform;
    /// use rand_isaac::isaac64::Isaac64Rng;
    ///
    /// // Get a seeded random number generator for reproducibility (Isaac64 algorithm)
    /// let seed = 42;
    /// let mut rng = Isaac64Rng::seed_from_u64(seed);
    ///
    /// // Generate a random array using `rng`
    /// let a = NArray::random_using([2, 5], Uniform::new(0., 10.).unwrap(), &mut rng);
    /// let b = NArray::random_using([2, 5], Uniform::new(0., 10.).unwrap(),
    ///                              &mut Isaac64Rng::seed_from_u64(seed));
    /// assert_eq!(a, b);
    /// ```
    fn random_using<Sh, D, R>(shape: Sh, distribution: D, rng: &mut R) -> NArray<T>
    where
        Sh: Into<Shape>,
        D: Distribution<T>,
        R: Rng + ?Sized;
}

impl<T: Copy> RandomExt<T> for NArray<T> {
    fn random<Sh, D>(shape: Sh, distribution: D) -> NArray<T>
    where
        Sh: Into<Shape>,
        D: Distribution<T>,
    {
        Self::random_using(shape, distribution, &mut rand::rng())
    }

    fn random_using<Sh, D, R>(shape: Sh, distribution: D, rng: &mut R) -> NArray<T>
    where
        Sh: Into<Shape>,
        D: Distribution<T>,
        R: Rng + ?Sized,
    {
        let shape = shape.into();
        let elements = distribution.sample_iter(rng).take(shape.total_size()).collect();
        match NArray::from_shape_vec(shape, elements) {
            Ok(array) => array,
            // sample_iter never ends, so exactly total_size elements were taken
            Err(_) => unreachable!(),
        }
    }
}

/// Create an array of samples drawn uniformly from `[0, 1)`.
pub fn rand<Sh, R>(shape: Sh, rng: &mut R) -> NArray<f64>
where
    Sh: Into<Shape>,
    R: Rng + ?Sized,
{
    NArray::random_using(shape, StandardUniform, rng)
}

/// Create an array of samples from the standard normal distribution.
pub fn randn<Sh, R>(shape: Sh, rng: &mut R) -> NArray<f64>
where
    Sh: Into<Shape>,
    R: Rng + ?Sized,
{
    NArray::random_using(shape, StandardNormal, rng)
}

/// Create an array of integers drawn uniformly from `low..=high`.
///
/// The bounds may be given in either order.
///
/// ```
/// use narray_rand::randint;
/// use narray_rand::rand::SeedableRng;
/// use rand_isaac::isaac64::Isaac64Rng;
///
/// let mut rng = Isaac64Rng::seed_from_u64(7);
/// let dice = randint([100], 6, 1, &mut rng).unwrap();
/// assert!(dice.iter().all(|x| (1..=6).contains(&x)));
/// ```
///
/// **Errors** with a value error if the range cannot be sampled.
pub fn randint<T, Sh, R>(shape: Sh, low: T, high: T, rng: &mut R) -> narray::Result<NArray<T>>
where
    T: Copy + PartialOrd + SampleUniform,
    Sh: Into<Shape>,
    R: Rng + ?Sized,
{
    let (low, high) = if high < low { (high, low) } else { (low, high) };
    let distribution = Uniform::new_inclusive(low, high)
        .map_err(|e| from_kind(ErrorKind::Value, format!("cannot sample integers: {}", e)))?;
    Ok(NArray::random_using(shape, distribution, rng))
}

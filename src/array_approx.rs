// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::complex::Complex;
use crate::NArray;

impl<T: Copy> NArray<T> {
    /// A test for equality that uses the elementwise absolute difference to compute the
    /// approximate equality of two arrays.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn abs_diff_eq<U>(&self, other: &NArray<U>, epsilon: T::Epsilon) -> bool
    where
        T: AbsDiffEq<U>,
        T::Epsilon: Clone,
        U: Copy,
    {
        <Self as AbsDiffEq<NArray<U>>>::abs_diff_eq(self, other, epsilon)
    }

    /// A test for equality that uses an elementwise relative comparison if the values are far
    /// apart; and the absolute difference otherwise.
    ///
    /// **Requires crate feature `"approx"`**
    pub fn relative_eq<U>(&self, other: &NArray<U>, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool
    where
        T: RelativeEq<U>,
        T::Epsilon: Clone,
        U: Copy,
    {
        <Self as RelativeEq<NArray<U>>>::relative_eq(self, other, epsilon, max_relative)
    }
}

/// **Requires crate feature `"approx"`.**
impl<T, U> AbsDiffEq<NArray<U>> for NArray<T>
where
    T: Copy + AbsDiffEq<U>,
    T::Epsilon: Clone,
    U: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &NArray<U>, epsilon: T::Epsilon) -> bool {
        if self.shape() != other.shape() {
            return false;
        }

        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| T::abs_diff_eq(&a, &b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<T, U> RelativeEq<NArray<U>> for NArray<T>
where
    T: Copy + RelativeEq<U>,
    T::Epsilon: Clone,
    U: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &NArray<U>, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        if self.shape() != other.shape() {
            return false;
        }

        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| T::relative_eq(&a, &b, epsilon.clone(), max_relative.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<T, U> UlpsEq<NArray<U>> for NArray<T>
where
    T: Copy + UlpsEq<U>,
    T::Epsilon: Clone,
    U: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &NArray<U>, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        if self.shape() != other.shape() {
            return false;
        }

        self.iter()
            .zip(other.iter())
            .all(move |(a, b)| T::ulps_eq(&a, &b, epsilon.clone(), max_ulps))
    }
}

/// Both components compared with the same tolerance.
///
/// **Requires crate feature `"approx"`.**
impl<T> AbsDiffEq for Complex<T>
where
    T: Copy + AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        T::abs_diff_eq(&self.real(), &other.real(), epsilon.clone())
            && T::abs_diff_eq(&self.imag(), &other.imag(), epsilon)
    }
}

/// **Requires crate feature `"approx"`.**
impl<T> RelativeEq for Complex<T>
where
    T: Copy + RelativeEq,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        T::relative_eq(&self.real(), &other.real(), epsilon.clone(), max_relative.clone())
            && T::relative_eq(&self.imag(), &other.imag(), epsilon, max_relative)
    }
}

/// **Requires crate feature `"approx"`.**
impl<T> UlpsEq for Complex<T>
where
    T: Copy + UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        T::ulps_eq(&self.real(), &other.real(), epsilon.clone(), max_ulps)
            && T::ulps_eq(&self.imag(), &other.imag(), epsilon, max_ulps)
    }
}

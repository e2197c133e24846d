// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::convert::TryFrom;
use std::hash;
use std::iter::FromIterator;

use num_traits::{NumCast, ToPrimitive};

use crate::error;
use crate::{ArrayError, Element, NArray};

/// Return `true` if the shapes are equal and all elements of `self` and
/// `other` are equal. Arrays of different shapes compare unequal.
impl<T, U> PartialEq<NArray<U>> for NArray<T>
where
    T: Copy + PartialEq<U>,
    U: Copy,
{
    fn eq(&self, other: &NArray<U>) -> bool {
        self.shape() == other.shape() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Copy + Eq> Eq for NArray<T> {}

/// `clone()` is a view: the new array shares the buffer.
impl<T> Clone for NArray<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: Copy + hash::Hash> hash::Hash for NArray<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

impl<T> From<Vec<T>> for NArray<T> {
    /// Create a one-dimensional array from a vector (no copying needed).
    fn from(v: Vec<T>) -> Self {
        NArray::from_vec(v)
    }
}

impl<'a, T: Copy> From<&'a [T]> for NArray<T> {
    /// Create a one-dimensional array from a slice (copying the elements).
    fn from(xs: &'a [T]) -> Self {
        NArray::from_slice(xs)
    }
}

impl<T> FromIterator<T> for NArray<T> {
    /// Create a one-dimensional array from an iterator.
    ///
    /// ```
    /// use narray::{arr1, NArray};
    ///
    /// let a: NArray<i32> = (1..4).collect();
    /// assert_eq!(a, arr1(&[1, 2, 3]));
    /// ```
    fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        NArray::from_vec(iterable.into_iter().collect())
    }
}

impl<'a, T: Copy> IntoIterator for &'a NArray<T> {
    type Item = T;
    type IntoIter = crate::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

macro_rules! impl_scalar_try_from {
    ($($t:ident)*) => {$(
        /// Convert a one-element array to a scalar.
        ///
        /// **Errors** with a conversion error if the array does not hold
        /// exactly one element, or if the element is not representable.
        impl<'a, T> TryFrom<&'a NArray<T>> for $t
        where
            T: Element + ToPrimitive,
        {
            type Error = ArrayError;

            fn try_from(array: &'a NArray<T>) -> Result<$t, ArrayError> {
                let x = array.into_scalar()?;
                <$t as NumCast>::from(x).ok_or_else(|| {
                    error::from_kind(
                        error::ErrorKind::Conversion,
                        format!("element {:?} is not representable as {}", x, stringify!($t)),
                    )
                })
            }
        }
    )*};
}

impl_scalar_try_from!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize f32 f64);

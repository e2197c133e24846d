// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{from_kind, ErrorKind};
use crate::{NArray, Result, Shape};

/// Create an [**`NArray`**](struct.NArray.html) with one, two or
/// three dimensions.
///
/// ```
/// use narray::narray;
/// let a1 = narray![1, 2, 3, 4];
///
/// let a2 = narray![[1, 2],
///                  [3, 4]];
///
/// let a3 = narray![[[1, 2], [3, 4]],
///                  [[5, 6], [7, 8]]];
///
/// assert_eq!(a1.shape().dims(), &[4]);
/// assert_eq!(a2.shape().dims(), &[2, 2]);
/// assert_eq!(a3.shape().dims(), &[2, 2, 2]);
/// ```
///
/// Rows of unequal length do not compile; use [`Nested`] for data whose
/// structure is only known at run time.
#[macro_export]
macro_rules! narray {
    ($([$([$($x:expr),* $(,)*]),+ $(,)*]),+ $(,)*) => {{
        $crate::arr3(&[$([$([$($x,)*],)*],)*])
    }};
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::arr2(&[$([$($x,)*],)*])
    }};
    ($($x:expr),* $(,)*) => {{
        $crate::NArray::from_vec(vec![$($x,)*])
    }};
}

/// Create a one-dimensional array with elements from `xs`.
pub fn arr1<T: Copy>(xs: &[T]) -> NArray<T> {
    NArray::from_slice(xs)
}

/// Create a two-dimensional array with elements from `xs`.
///
/// ```
/// use narray::arr2;
///
/// let a = arr2(&[[1, 2, 3],
///                [4, 5, 6]]);
/// assert_eq!(a.shape().dims(), &[2, 3]);
/// ```
pub fn arr2<T: Copy, const N: usize>(xs: &[[T; N]]) -> NArray<T> {
    let v: Vec<T> = xs.iter().flat_map(|row| row.iter().copied()).collect();
    NArray::from_parts(v.into(), 0, Shape::from([xs.len(), N]))
}

/// Create a three-dimensional array with elements from `xs`.
///
/// ```
/// use narray::arr3;
///
/// let a = arr3(&[[[1, 2],
///                 [3, 4]],
///                [[5, 6],
///                 [7, 8]],
///                [[9, 0],
///                 [1, 2]]]);
/// assert_eq!(a.shape().dims(), &[3, 2, 2]);
/// ```
pub fn arr3<T: Copy, const N: usize, const M: usize>(xs: &[[[T; M]; N]]) -> NArray<T> {
    let v: Vec<T> = xs
        .iter()
        .flat_map(|plane| plane.iter().flat_map(|row| row.iter().copied()))
        .collect();
    NArray::from_parts(v.into(), 0, Shape::from([xs.len(), N, M]))
}

/// Nested input for array construction, with the structure decided at run
/// time.
///
/// Every list at one nesting level must have the same sub-shape; the
/// check happens before any element is copied.
///
/// ```
/// use narray::{Nested, NArray};
///
/// let rows = Nested::list(vec![
///     Nested::from(vec![1, 2, 3]),
///     Nested::from(vec![4, 5, 6]),
/// ]);
/// let a = NArray::from_nested(&rows).unwrap();
/// assert_eq!(a.shape().dims(), &[2, 3]);
///
/// let jagged = Nested::list(vec![Nested::from(vec![1, 2]), Nested::from(vec![3])]);
/// assert!(NArray::from_nested(&jagged).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Nested<T> {
    Scalar(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn scalar(x: T) -> Self {
        Nested::Scalar(x)
    }

    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Nested<T>>,
    {
        Nested::List(items.into_iter().collect())
    }

    /// Return the shape of this value, or an error if sibling lists
    /// disagree.
    fn shape(&self) -> Result<Shape> {
        match self {
            Nested::Scalar(_) => Ok(Shape::scalar()),
            Nested::List(items) => {
                let first = match items.first() {
                    None => {
                        return Err(from_kind(ErrorKind::Value, "cannot build an array from an empty list"))
                    }
                    Some(first) => first.shape()?,
                };
                for item in &items[1..] {
                    let sub = item.shape()?;
                    if sub != first {
                        return Err(from_kind(
                            ErrorKind::Value,
                            format!("jagged nested input: sub-shapes {} and {} differ", first, sub),
                        ));
                    }
                }
                let mut dims = Vec::with_capacity(first.ndim() + 1);
                dims.push(items.len());
                dims.extend_from_slice(first.dims());
                Ok(Shape::from(dims))
            }
        }
    }
}

impl<T: Copy> Nested<T> {
    fn flatten_into(&self, out: &mut Vec<T>) {
        match self {
            Nested::Scalar(x) => out.push(*x),
            Nested::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(v: Vec<T>) -> Self {
        Nested::List(v.into_iter().map(Nested::Scalar).collect())
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(v: Vec<Nested<T>>) -> Self {
        Nested::List(v)
    }
}

impl<T: Copy> NArray<T> {
    /// Create an array from nested lists.
    ///
    /// **Errors** with a value error if the input is empty or jagged.
    pub fn from_nested(nested: &Nested<T>) -> Result<Self> {
        let shape = nested.shape()?;
        let mut v = Vec::with_capacity(shape.total_size());
        nested.flatten_into(&mut v);
        Ok(NArray::from_parts(v.into(), 0, shape))
    }
}

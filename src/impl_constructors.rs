// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for narray
//!
use num_traits::Float;

use crate::error::{self, from_kind, ErrorKind};
use crate::{Buffer, Element, NArray, Result, Shape};

impl<T> NArray<T> {
    /// Assemble an array without checking that the buffer is large enough.
    #[inline]
    pub(crate) fn from_parts(data: Buffer<T>, offset: usize, shape: Shape) -> Self {
        debug_assert!(offset + shape.total_size() <= data.len());
        NArray { data, offset, shape }
    }

    /// Create a one-dimensional array from a vector (no copying needed).
    ///
    /// ```rust
    /// use narray::NArray;
    ///
    /// let array = NArray::from_vec(vec![1., 2., 3., 4.]);
    /// assert_eq!(array.shape().dims(), &[4]);
    /// ```
    pub fn from_vec(v: Vec<T>) -> Self {
        let shape = Shape::from(v.len());
        NArray::from_parts(Buffer::from_vec(v), 0, shape)
    }

    /// Create an array with the given shape that takes ownership of `v`.
    ///
    /// **Errors** with a value error if `v` does not hold exactly
    /// `shape.total_size()` elements.
    ///
    /// ```rust
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(a.shape().dims(), &[2, 3]);
    /// assert!(NArray::from_shape_vec([2, 2], vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<T>) -> Result<Self>
    where
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        let size = shape
            .checked_total_size()
            .ok_or_else(|| error::size_overflow(&shape))?;
        if size != v.len() {
            return Err(error::size_mismatch(size, v.len()));
        }
        Ok(NArray::from_parts(Buffer::from_vec(v), 0, shape))
    }

    /// Create an array of the given shape that shares `buffer`, starting at
    /// element `offset`.
    ///
    /// The new array is a view: writes through it are visible through every
    /// other array that uses the buffer.
    ///
    /// **Errors** with a value error if fewer than `shape.total_size()`
    /// elements of the buffer are reachable from `offset`.
    pub fn from_shape_buffer<Sh>(shape: Sh, buffer: &Buffer<T>, offset: usize) -> Result<Self>
    where
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        let size = shape
            .checked_total_size()
            .ok_or_else(|| error::size_overflow(&shape))?;
        let available = buffer.len().saturating_sub(offset);
        if offset > buffer.len() || size > available {
            return Err(from_kind(
                ErrorKind::Value,
                format!(
                    "buffer of {} elements cannot hold shape {} at offset {}",
                    buffer.len(),
                    shape,
                    offset
                ),
            ));
        }
        Ok(NArray::from_parts(buffer.clone(), offset, shape))
    }
}

impl<T: Copy> NArray<T> {
    /// Create a zero-dimensional array holding `x`.
    pub fn scalar(x: T) -> Self {
        NArray::from_parts(Buffer::from_vec(vec![x]), 0, Shape::scalar())
    }

    /// Create a one-dimensional array with copies of the elements of `xs`.
    pub fn from_slice(xs: &[T]) -> Self {
        NArray::from_vec(xs.to_vec())
    }

    /// Create an array with copies of `elem`.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_elem([2, 2], 1.5);
    /// assert_eq!(a.to_vec(), vec![1.5; 4]);
    /// ```
    ///
    /// **Panics** if the number of elements overflows `usize`.
    pub fn from_elem<Sh>(shape: Sh, elem: T) -> Self
    where
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        let size = shape.checked_total_size().unwrap_or_else(|| {
            panic!("narray: shape {} is too large, the number of elements overflows usize", shape)
        });
        NArray::from_parts(Buffer::from_elem(size, elem), 0, shape)
    }
}

impl<T: Element> NArray<T> {
    /// Create an array of zeros.
    pub fn zeros<Sh>(shape: Sh) -> Self
    where
        Sh: Into<Shape>,
    {
        NArray::from_elem(shape, T::zero())
    }

    /// Create an array of ones.
    pub fn ones<Sh>(shape: Sh) -> Self
    where
        Sh: Into<Shape>,
    {
        NArray::from_elem(shape, T::one())
    }

    /// Create an identity matrix of size `n` (square 2D array).
    ///
    /// ```
    /// use narray::{narray, NArray};
    ///
    /// assert_eq!(NArray::<i32>::eye(2), narray![[1, 0], [0, 1]]);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut v = vec![T::zero(); n * n];
        for i in 0..n {
            v[i * n + i] = T::one();
        }
        NArray::from_parts(Buffer::from_vec(v), 0, Shape::from([n, n]))
    }

    /// Alias of [`eye`](NArray::eye).
    pub fn identity(n: usize) -> Self {
        NArray::eye(n)
    }
}

impl<T: Element + Float> NArray<T> {
    /// Create a one-dimensional array of `num` evenly spaced elements from
    /// `start` to `stop`.
    ///
    /// With `endpoint` the last element is `stop`, otherwise the interval
    /// is half-open.
    ///
    /// ```rust
    /// use narray::{arr1, NArray};
    ///
    /// let array = NArray::linspace(0., 1., 5, true);
    /// assert_eq!(array, arr1(&[0.0, 0.25, 0.5, 0.75, 1.0]));
    /// let array = NArray::linspace(0., 1., 4, false);
    /// assert_eq!(array, arr1(&[0.0, 0.25, 0.5, 0.75]));
    /// ```
    pub fn linspace(start: T, stop: T, num: usize, endpoint: bool) -> Self {
        let intervals = if endpoint { num.saturating_sub(1) } else { num };
        let step = match num_traits::cast::<usize, T>(intervals) {
            Some(n) if intervals > 0 => (stop - start) / n,
            _ => T::zero(),
        };
        NArray::from_vec(Self::steps(start, step, num))
    }

    /// Create a one-dimensional array from `start` in increments of `step`,
    /// with `1 + (stop - start) / step` elements (rounded down), so `stop`
    /// itself is included when a step lands on it.
    ///
    /// **Errors** with a value error if `step` is zero or not finite, or if
    /// the number of elements is not representable as `usize`.
    ///
    /// ```rust
    /// use narray::{arr1, NArray};
    ///
    /// let array = NArray::arange(0., 2., 0.5).unwrap();
    /// assert_eq!(array, arr1(&[0., 0.5, 1., 1.5, 2.]));
    /// assert_eq!(NArray::arange(1., 0., 1.).unwrap().len(), 0);
    /// ```
    pub fn arange(start: T, stop: T, step: T) -> Result<Self> {
        if step.is_zero() || !step.is_finite() {
            return Err(from_kind(ErrorKind::Value, "arange step must be finite and non-zero"));
        }
        let count = (T::one() + (stop - start) / step).floor();
        let num = if count > T::zero() {
            count.to_usize().ok_or_else(|| {
                from_kind(
                    ErrorKind::Value,
                    format!(
                        "arange from {:?} to {:?} by {:?} has too many elements",
                        start, stop, step
                    ),
                )
            })?
        } else {
            0
        };
        Ok(NArray::from_vec(Self::steps(start, step, num)))
    }

    fn steps(start: T, step: T, num: usize) -> Vec<T> {
        (0..num)
            .map(|i| match num_traits::cast::<usize, T>(i) {
                Some(i) => start + step * i,
                None => T::nan(),
            })
            .collect()
    }
}

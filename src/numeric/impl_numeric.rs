// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::FromPrimitive;

use crate::error::{from_kind, ErrorKind};
use crate::{wrap_index, Element, NArray, Result, Shape};

/// Extents of the axes before `axis`, of `axis` itself and after it.
fn split_at_axis(shape: &Shape, axis: usize) -> (usize, usize, usize) {
    let dims = shape.dims();
    let outer = dims[..axis].iter().product();
    let inner = dims[axis + 1..].iter().product();
    (outer, dims[axis], inner)
}

/// Numerical methods for arrays.
impl<T: Element> NArray<T> {
    /// Return the sum of all elements in the array.
    ///
    /// ```
    /// use narray::arr2;
    ///
    /// let a = arr2(&[[1., 2.],
    ///                [3., 4.]]);
    /// assert_eq!(a.sum(), 10.);
    /// ```
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, x| acc + x)
    }

    /// Return sum along `axis`; negative axes count from the end.
    ///
    /// ```
    /// use narray::{arr1, arr2, NArray};
    ///
    /// let a = arr2(&[[1., 2.],
    ///                [3., 4.]]);
    /// assert_eq!(a.sum_axis(0).unwrap(), arr1(&[4., 6.]));
    /// assert_eq!(a.sum_axis(-1).unwrap(), arr1(&[3., 7.]));
    /// assert_eq!(a.sum_axis(0).unwrap().sum_axis(0).unwrap(), NArray::scalar(10.));
    /// ```
    ///
    /// **Errors** with an index error if `axis` is out of bounds.
    pub fn sum_axis(&self, axis: isize) -> Result<NArray<T>> {
        let axis = wrap_index(axis, self.ndim())?;
        let (outer, len, inner) = split_at_axis(self.shape(), axis);
        let v = self.to_vec();
        let mut out = vec![T::zero(); outer * inner];
        for o in 0..outer {
            for k in 0..len {
                let lane = &v[(o * len + k) * inner..(o * len + k + 1) * inner];
                for (acc, &x) in out[o * inner..(o + 1) * inner].iter_mut().zip(lane) {
                    *acc = *acc + x;
                }
            }
        }
        let mut dims = self.shape().dims().to_vec();
        dims.remove(axis);
        NArray::from_shape_vec(dims, out)
    }

    /// Return the `n`-th discrete difference along `axis`:
    /// `out[.., i, ..] = a[.., i + 1, ..] - a[.., i, ..]`, applied `n` times.
    ///
    /// The result has `n` fewer elements along `axis`, or none when `n` is
    /// at least the extent. `n == 0` returns a copy.
    ///
    /// ```
    /// use narray::{arr1, arr2};
    ///
    /// let a = arr1(&[1, 2, 4, 7, 0]);
    /// assert_eq!(a.diff(1, 0).unwrap(), arr1(&[1, 2, 3, -7]));
    /// assert_eq!(a.diff(2, 0).unwrap(), arr1(&[1, 1, -10]));
    ///
    /// let m = arr2(&[[1, 3, 6], [0, 5, 6]]);
    /// assert_eq!(m.diff(1, 1).unwrap(), arr2(&[[2, 3], [5, 1]]));
    /// ```
    ///
    /// **Errors** with an index error if `axis` is out of bounds.
    pub fn diff(&self, n: usize, axis: isize) -> Result<NArray<T>> {
        let axis = wrap_index(axis, self.ndim())?;
        let (outer, len, inner) = split_at_axis(self.shape(), axis);
        let mut v = self.to_vec();
        let mut len = len;
        for _ in 0..n.min(len) {
            let new_len = len - 1;
            let mut next = Vec::with_capacity(outer * new_len * inner);
            for o in 0..outer {
                let block = &v[o * len * inner..(o + 1) * len * inner];
                next.extend(
                    block[inner..]
                        .iter()
                        .zip(&block[..new_len * inner])
                        .map(|(&hi, &lo)| hi - lo),
                );
            }
            v = next;
            len = new_len;
        }
        let mut dims = self.shape().dims().to_vec();
        dims[axis] = len;
        NArray::from_shape_vec(dims, v)
    }
}

impl<T> NArray<T>
where
    T: Element + FromPrimitive,
{
    /// Return the arithmetic mean of all elements in the array.
    ///
    /// ```
    /// use narray::arr2;
    ///
    /// let a = arr2(&[[1., 2.],
    ///                [3., 4.]]);
    /// assert_eq!(a.mean().unwrap(), 2.5);
    /// ```
    ///
    /// **Errors** with a value error if the array is empty.
    pub fn mean(&self) -> Result<T> {
        let n = self.count_as(self.len())?;
        Ok(self.sum() / n)
    }

    /// Return mean along `axis`; negative axes count from the end.
    ///
    /// ```
    /// use narray::{arr1, arr2};
    ///
    /// let a = arr2(&[[1., 2.],
    ///                [3., 4.]]);
    /// assert_eq!(a.mean_axis(0).unwrap(), arr1(&[2.0, 3.0]));
    /// assert_eq!(a.mean_axis(1).unwrap(), arr1(&[1.5, 3.5]));
    /// ```
    ///
    /// **Errors** with an index error if `axis` is out of bounds and with a
    /// value error if the axis has length zero.
    pub fn mean_axis(&self, axis: isize) -> Result<NArray<T>> {
        let ax = wrap_index(axis, self.ndim())?;
        let n = self.count_as(self.shape().dims()[ax])?;
        let sum = self.sum_axis(axis)?;
        Ok(sum.mapv(|x| x / n))
    }

    fn count_as(&self, n: usize) -> Result<T> {
        match T::from_usize(n) {
            Some(n) if !n.is_zero() => Ok(n),
            _ => Err(from_kind(
                ErrorKind::Value,
                format!("cannot take the mean of {} elements", n),
            )),
        }
    }
}

// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cell::Cell;

use crate::error::{self, from_kind, ErrorKind};
use crate::iterators::Iter;
use crate::shape::wrap_index;
use crate::{Buffer, NArray, Result, Shape};

/// # Methods For All Array Types
impl<T> NArray<T> {
    /// Return the shape of the array.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Return the number of dimensions (axes) in the array
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Return the total number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.shape.total_size()
    }

    /// Return whether the array has any elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the buffer the array's elements live in.
    ///
    /// The buffer may be larger than the array when the array is a view.
    #[inline]
    pub fn buffer(&self) -> &Buffer<T> {
        &self.data
    }

    /// Return the position of the first element inside the buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return `true` if `self` and `other` share a buffer, so that writes
    /// through one are visible through the other.
    pub fn is_view_of(&self, other: &NArray<T>) -> bool {
        self.data.ptr_eq(&other.data)
    }

    #[inline]
    pub(crate) fn cells(&self) -> &[Cell<T>] {
        &self.data.cells()[self.offset..self.offset + self.len()]
    }

    /// Return a new handle to the same elements; the buffer is shared.
    ///
    /// This is the same as `clone()`. Use [`deepcopy`](NArray::deepcopy)
    /// for an independent copy.
    pub fn copy(&self) -> Self {
        NArray::from_parts(self.data.clone(), self.offset, self.shape.clone())
    }

    /// Return a one-dimensional view of all elements.
    ///
    /// ```
    /// use narray::narray;
    ///
    /// let a = narray![[1, 2], [3, 4]];
    /// let flat = a.ravel();
    /// flat.set(3, 40).unwrap();
    /// assert_eq!(a.to_vec(), vec![1, 2, 3, 40]);
    /// ```
    pub fn ravel(&self) -> Self {
        NArray::from_parts(self.data.clone(), self.offset, self.shape.flatten())
    }

    /// Return a view of the same elements with a different shape.
    ///
    /// **Errors** with a value error if the new shape does not hold the
    /// same number of elements.
    pub fn reshape<Sh>(&self, shape: Sh) -> Result<Self>
    where
        Sh: Into<Shape>,
    {
        let shape = shape.into();
        if shape.checked_total_size() != Some(self.len()) {
            return Err(from_kind(
                ErrorKind::Value,
                format!("cannot reshape array of shape {} into shape {}", self.shape, shape),
            ));
        }
        Ok(NArray::from_parts(self.data.clone(), self.offset, shape))
    }

    /// Return a view of the sub-array at `index` along the first axis.
    ///
    /// For a one-dimensional array this is a zero-dimensional view of one
    /// element; otherwise the view has one dimension less. Negative indices
    /// count from the end.
    ///
    /// **Errors** with an index error if `index` is out of range or the
    /// array is zero-dimensional.
    ///
    /// ```
    /// use narray::narray;
    ///
    /// let a = narray![[1, 2, 3], [4, 5, 6]];
    /// let last = a.view_at(-1).unwrap();
    /// assert_eq!(last, narray![4, 5, 6]);
    /// assert!(a.view_at(2).is_err());
    /// ```
    pub fn view_at(&self, index: isize) -> Result<Self> {
        let dims = self.shape.dims();
        let (&rows, rest) = match dims.split_first() {
            Some(split) => split,
            None => {
                return Err(from_kind(
                    ErrorKind::Index,
                    "cannot index into a zero-dimensional array",
                ))
            }
        };
        let i = wrap_index(index, rows)?;
        let sub = Shape::from(rest);
        let offset = self.offset + i * sub.total_size();
        Ok(NArray::from_parts(self.data.clone(), offset, sub))
    }
}

impl<T: Copy> NArray<T> {
    /// Return the element at flat (row-major) position `index`; negative
    /// indices count from the end.
    pub fn get(&self, index: isize) -> Result<T> {
        let i = wrap_index(index, self.len())?;
        Ok(self.cells()[i].get())
    }

    /// Overwrite the element at flat position `index`; negative indices
    /// count from the end. The write is visible through all views.
    pub fn set(&self, index: isize, value: T) -> Result<()> {
        let i = wrap_index(index, self.len())?;
        self.cells()[i].set(value);
        Ok(())
    }

    /// Return an iterator of the elements, in row-major order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.cells())
    }

    /// Copy the elements into a vector, in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Return a copy of the array with its own buffer.
    pub fn deepcopy(&self) -> Self {
        NArray::from_parts(Buffer::from_vec(self.to_vec()), 0, self.shape.clone())
    }

    /// Return a one-dimensional copy of the elements.
    pub fn flatten(&self) -> Self {
        NArray::from_vec(self.to_vec())
    }

    /// Return the transposed array as a new array.
    ///
    /// A one-dimensional array of length `n` becomes a `1 × n` row.
    ///
    /// **Errors** with a shape error for arrays of more than two dimensions.
    ///
    /// ```
    /// use narray::narray;
    ///
    /// let a = narray![[1, 2, 3], [4, 5, 6]];
    /// assert_eq!(a.transpose().unwrap(), narray![[1, 4], [2, 5], [3, 6]]);
    /// ```
    pub fn transpose(&self) -> Result<Self> {
        let shape = self.shape.transpose()?;
        let v = match *self.shape.dims() {
            [rows, cols] => {
                let cells = self.cells();
                let mut v = Vec::with_capacity(self.len());
                for j in 0..cols {
                    for i in 0..rows {
                        v.push(cells[i * cols + j].get());
                    }
                }
                v
            }
            _ => self.to_vec(),
        };
        Ok(NArray::from_parts(Buffer::from_vec(v), 0, shape))
    }

    /// Overwrite the elements with those of `other`, in row-major order.
    ///
    /// Only the element count has to agree, not the shape. `other` may be a
    /// view of the same buffer.
    ///
    /// **Errors** with a value error if the element counts differ.
    pub fn assign(&self, other: &NArray<T>) -> Result<()> {
        if self.len() != other.len() {
            return Err(error::size_mismatch(self.len(), other.len()));
        }
        if self.is_view_of(other) {
            let v = other.to_vec();
            return self.assign_slice(&v);
        }
        for (dst, src) in self.cells().iter().zip(other.iter()) {
            dst.set(src);
        }
        Ok(())
    }

    /// Overwrite the elements with those of `values`.
    ///
    /// **Errors** with a value error if the element counts differ.
    pub fn assign_slice(&self, values: &[T]) -> Result<()> {
        if self.len() != values.len() {
            return Err(error::size_mismatch(self.len(), values.len()));
        }
        for (dst, &src) in self.cells().iter().zip(values) {
            dst.set(src);
        }
        Ok(())
    }

    /// Overwrite the single element of a one-element array.
    ///
    /// **Errors** with a value error if the array does not hold exactly one
    /// element.
    pub fn assign_scalar(&self, value: T) -> Result<()> {
        self.assign_slice(&[value])
    }

    /// Set every element to `value`.
    pub fn fill(&self, value: T) {
        for c in self.cells() {
            c.set(value);
        }
    }

    /// Return the single element of a one-element array.
    ///
    /// **Errors** with a conversion error if the array holds more or fewer
    /// than one element.
    pub fn into_scalar(&self) -> Result<T> {
        match self.cells() {
            [c] => Ok(c.get()),
            _ => Err(error::not_a_scalar(&self.shape, "a scalar")),
        }
    }

    /// Call `f` by reference on each element and create a new array with
    /// the new values.
    pub fn map<U, F>(&self, mut f: F) -> NArray<U>
    where
        F: FnMut(&T) -> U,
    {
        let v = self.iter().map(|x| f(&x)).collect();
        NArray::from_parts(Buffer::from_vec(v), 0, self.shape.clone())
    }

    /// Call `f` by value on each element and create a new array with the
    /// new values.
    pub fn mapv<U, F>(&self, f: F) -> NArray<U>
    where
        F: FnMut(T) -> U,
    {
        let v = self.iter().map(f).collect();
        NArray::from_parts(Buffer::from_vec(v), 0, self.shape.clone())
    }

    /// Modify the array in place by calling `f` by value on each element.
    /// The changes are visible through all views.
    pub fn mapv_inplace<F>(&self, mut f: F)
    where
        F: FnMut(T) -> T,
    {
        for c in self.cells() {
            c.set(f(c.get()));
        }
    }

    /// Combine two same-shaped arrays elementwise into a new array.
    pub(crate) fn zip_map<U, V, F>(&self, rhs: &NArray<U>, operation: &str, mut f: F) -> Result<NArray<V>>
    where
        U: Copy,
        F: FnMut(T, U) -> V,
    {
        if !self.shape.same_shape(&rhs.shape) {
            return Err(error::incompatible_shapes(&self.shape, &rhs.shape, operation));
        }
        let v = self.iter().zip(rhs.iter()).map(|(a, b)| f(a, b)).collect();
        Ok(NArray::from_parts(Buffer::from_vec(v), 0, self.shape.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arr1, narray};

    #[test]
    fn view_at_ranks() {
        let v = arr1(&[10, 20, 30]);
        let e = v.view_at(-1).unwrap();
        assert_eq!(e.ndim(), 0);
        assert_eq!(e.into_scalar().unwrap(), 30);
        assert_eq!(v.view_at(3).unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(v.view_at(-4).unwrap_err().kind(), ErrorKind::Index);

        let cube = NArray::from_shape_vec([2, 2, 3], (0..12).collect()).unwrap();
        let plane = cube.view_at(1).unwrap();
        assert_eq!(plane.shape().dims(), &[2, 3]);
        assert_eq!(plane.to_vec(), vec![6, 7, 8, 9, 10, 11]);
        let row = plane.view_at(-2).unwrap();
        assert_eq!(row.to_vec(), vec![6, 7, 8]);

        assert_eq!(NArray::scalar(1).view_at(0).unwrap_err().kind(), ErrorKind::Index);
    }

    #[test]
    fn writes_through_views_are_shared() {
        let a = narray![[1, 2], [3, 4]];
        let row = a.view_at(1).unwrap();
        row.set(-1, 40).unwrap();
        assert_eq!(a.to_vec(), vec![1, 2, 3, 40]);

        let b = a.copy();
        b.fill(0);
        assert_eq!(a.to_vec(), vec![0; 4]);
        assert!(b.is_view_of(&a));

        let c = a.deepcopy();
        c.fill(7);
        assert_eq!(a.to_vec(), vec![0; 4]);
        assert!(!c.is_view_of(&a));
    }

    #[test]
    fn reshape_is_a_view() {
        let a = NArray::from_vec((0..6).collect::<Vec<i64>>());
        let m = a.reshape([2, 3]).unwrap();
        m.view_at(0).unwrap().set(0, 100).unwrap();
        assert_eq!(a.get(0).unwrap(), 100);
        assert_eq!(a.reshape([4, 2]).unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn flat_get_and_set_wrap() {
        let a = narray![[1., 2.], [3., 4.]];
        assert_eq!(a.get(-1).unwrap(), 4.);
        assert_eq!(a.get(2).unwrap(), 3.);
        assert_eq!(a.get(4).unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(a.set(-5, 0.).unwrap_err().kind(), ErrorKind::Index);
    }

    #[test]
    fn transpose_geometry() {
        let a = narray![[1, 2, 3], [4, 5, 6]];
        let t = a.transpose().unwrap();
        assert_eq!(t.shape().dims(), &[3, 2]);
        assert_eq!(t.to_vec(), vec![1, 4, 2, 5, 3, 6]);
        assert!(!t.is_view_of(&a));
        assert_eq!(t.transpose().unwrap(), a);

        let v = arr1(&[1, 2, 3]).transpose().unwrap();
        assert_eq!(v.shape().dims(), &[1, 3]);

        let cube = NArray::<f64>::zeros([2, 2, 2]);
        assert_eq!(cube.transpose().unwrap_err().kind(), ErrorKind::Shape);
    }

    #[test]
    fn assignment() {
        let a = narray![[1, 2], [3, 4]];
        a.assign(&arr1(&[5, 6, 7, 8])).unwrap();
        assert_eq!(a.to_vec(), vec![5, 6, 7, 8]);
        assert_eq!(a.assign(&arr1(&[1, 2, 3])).unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(a.assign_scalar(1).unwrap_err().kind(), ErrorKind::Value);

        // overlapping source and destination in one buffer
        let flat = NArray::from_vec(vec![1, 2, 3, 4, 5]);
        let head = NArray::from_shape_buffer([4], flat.buffer(), 0).unwrap();
        let tail = NArray::from_shape_buffer([4], flat.buffer(), 1).unwrap();
        tail.assign(&head).unwrap();
        assert_eq!(flat.to_vec(), vec![1, 1, 2, 3, 4]);

        let one = flat.view_at(0).unwrap();
        one.assign_scalar(9).unwrap();
        assert_eq!(flat.get(0).unwrap(), 9);
    }

    #[test]
    fn scalar_conversion() {
        assert_eq!(narray![[2.5]].into_scalar().unwrap(), 2.5);
        let err = narray![1, 2].into_scalar().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conversion);
    }

    #[test]
    fn ravel_and_flatten() {
        let a = narray![[1, 2], [3, 4]];
        let r = a.ravel();
        let f = a.flatten();
        assert_eq!(r.shape().dims(), &[4]);
        assert!(r.is_view_of(&a));
        assert!(!f.is_view_of(&a));
        f.set(0, 10).unwrap();
        assert_eq!(a.get(0).unwrap(), 1);
    }

    #[test]
    fn maps() {
        let a = narray![1, 2, 3];
        assert_eq!(a.map(|&x| x as f64 / 2.), narray![0.5, 1., 1.5]);
        assert_eq!(a.mapv(|x| x > 1), NArray::from_vec(vec![false, true, true]));
        let v = a.ravel();
        v.mapv_inplace(|x| x * 10);
        assert_eq!(a.to_vec(), vec![10, 20, 30]);
    }
}

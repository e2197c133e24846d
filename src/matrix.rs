// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Deref, Mul, Sub};

use crate::error::{from_kind, op_failed, ErrorKind};
use crate::{linalg, stack, Element, NArray, Promote, Promoted, Result, ScalarOperand, Shape};

/// A two dimensional array for which `*` is the matrix product.
///
/// `Matrix` wraps an [`NArray`] of shape `(rows, cols)` and dereferences to
/// it, so every read-only array method is available. Arithmetic differs in
/// one place only: `&a * &b` on arrays multiplies elementwise, while on
/// matrices it is the matrix product.
///
/// ```
/// use narray::{narray, Matrix};
///
/// let a = Matrix::from_array(narray![[1, 2], [3, 4]]).unwrap();
/// let id = Matrix::<i32>::eye(2);
/// assert_eq!(&a * &id, a);
///
/// // the same operands as plain arrays multiply elementwise
/// assert_eq!(&*a * &*id, narray![[1, 0], [0, 4]]);
/// ```
pub struct Matrix<T> {
    array: NArray<T>,
}

impl<T> Matrix<T> {
    /// Wrap `array` as a matrix.
    ///
    /// A one dimensional array of length `n` becomes the row `(1, n)` and a
    /// zero dimensional array becomes `(1, 1)`; both are views of `array`.
    ///
    /// **Errors** with a shape error if `array` has more than two dimensions.
    pub fn from_array(array: NArray<T>) -> Result<Self> {
        let dims = array.shape().dims().to_vec();
        let array = match dims[..] {
            [] => array.reshape([1, 1])?,
            [n] => array.reshape([1, n])?,
            [_, _] => array,
            _ => {
                return Err(from_kind(
                    ErrorKind::Shape,
                    format!("cannot make a matrix from an array of shape {}", array.shape()),
                ))
            }
        };
        Ok(Matrix { array })
    }

    /// Return the underlying array.
    pub fn into_array(self) -> NArray<T> {
        self.array
    }

    pub fn as_array(&self) -> &NArray<T> {
        &self.array
    }

    pub fn rows(&self) -> usize {
        self.array.shape().dims()[0]
    }

    pub fn cols(&self) -> usize {
        self.array.shape().dims()[1]
    }

    /// Return `true` if `self` and `rhs` can be matrix multiplied, with
    /// `rhs` read as a matrix (rank two) or a column vector (rank one).
    pub fn are_multipliable<U>(&self, rhs: &NArray<U>) -> bool {
        Shape::matmul_type(self.array.shape(), rhs.shape()).is_valid()
    }
}

impl<T: Copy> Matrix<T> {
    /// Stack one dimensional arrays of equal length as the rows of a new
    /// matrix.
    ///
    /// **Errors** if `rows` is empty, if the rows differ in length or if a
    /// row is not one dimensional.
    ///
    /// ```
    /// use narray::{arr1, Matrix};
    ///
    /// let m = Matrix::from_rows(&[arr1(&[1, 2, 3]), arr1(&[4, 5, 6])]).unwrap();
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// ```
    pub fn from_rows(rows: &[NArray<T>]) -> Result<Self> {
        if let Some(row) = rows.iter().find(|row| row.ndim() != 1) {
            return Err(from_kind(
                ErrorKind::Shape,
                format!("matrix rows must be one dimensional, got shape {}", row.shape()),
            ));
        }
        Ok(Matrix { array: stack(rows)? })
    }

    /// Return the transposed matrix, with its own buffer.
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = (self.rows(), self.cols());
        let v = self.array.to_vec();
        let t: Vec<T> = (0..cols)
            .flat_map(|j| v.iter().skip(j).step_by(cols.max(1)).take(rows).copied())
            .collect();
        Matrix {
            array: NArray::from_parts(t.into(), 0, Shape::from([cols, rows])),
        }
    }

    /// Return a matrix with its own copy of the elements.
    pub fn deepcopy(&self) -> Matrix<T> {
        Matrix {
            array: self.array.deepcopy(),
        }
    }
}

impl<T: Element> Matrix<T> {
    /// Create an identity matrix of size `n`.
    pub fn eye(n: usize) -> Self {
        Matrix { array: NArray::eye(n) }
    }

    /// Create a matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            array: NArray::zeros([rows, cols]),
        }
    }

    /// Matrix product of `self` and `rhs`.
    ///
    /// **Errors** with a shape error if `self.cols() != rhs.rows()`.
    pub fn matmul<U>(&self, rhs: &Matrix<U>) -> Result<Matrix<<T as Promote<U>>::Output>>
    where
        T: Promote<U>,
        U: Element,
    {
        let array = linalg::matmul(&self.array, &rhs.array)?;
        Ok(Matrix { array })
    }

    /// Matrix product of `self` and a plain array.
    ///
    /// `rhs` is read as a matrix if it has two dimensions and as a column
    /// vector if it has one; the result is the array given by
    /// [`matmul`](crate::matmul).
    ///
    /// **Errors** with a shape error if `rhs` has more than two dimensions
    /// or the extents do not match.
    pub fn mul_array<U>(&self, rhs: &NArray<U>) -> Result<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Element,
    {
        linalg::matmul(&self.array, rhs)
    }

    /// Determinant of the matrix; see [`det`](crate::det).
    pub fn det(&self) -> Result<T> {
        linalg::det(&self.array)
    }
}

impl<T> Deref for Matrix<T> {
    type Target = NArray<T>;

    fn deref(&self) -> &NArray<T> {
        &self.array
    }
}

/// `clone()` is a view: the new matrix shares the buffer.
impl<T> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Matrix {
            array: self.array.copy(),
        }
    }
}

impl<T: Copy + PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<T: Copy + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.array, f)
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.array, f)
    }
}

impl<T> TryFrom<NArray<T>> for Matrix<T> {
    type Error = crate::ArrayError;

    fn try_from(array: NArray<T>) -> Result<Self> {
        Matrix::from_array(array)
    }
}

impl<T> From<Matrix<T>> for NArray<T> {
    fn from(m: Matrix<T>) -> NArray<T> {
        m.array
    }
}

/// Matrix product.
///
/// **Panics** if the inner extents differ.
impl<'a, 'b, T, U> Mul<&'b Matrix<U>> for &'a Matrix<T>
where
    T: Promote<U>,
    U: Element,
{
    type Output = Matrix<<T as Promote<U>>::Output>;

    fn mul(self, rhs: &'b Matrix<U>) -> Self::Output {
        match self.matmul(rhs) {
            Ok(m) => m,
            Err(e) => op_failed(e),
        }
    }
}

/// Matrix product with a plain array, see
/// [`Matrix::mul_array`](Matrix::mul_array).
///
/// **Panics** if the operands cannot be multiplied.
impl<'a, 'b, T, U> Mul<&'b NArray<U>> for &'a Matrix<T>
where
    T: Promote<U>,
    U: Element,
{
    type Output = Promoted<T, U>;

    fn mul(self, rhs: &'b NArray<U>) -> Self::Output {
        match self.mul_array(rhs) {
            Ok(m) => m,
            Err(e) => op_failed(e),
        }
    }
}

/// Multiply every element by a scalar.
impl<'a, T: ScalarOperand> Mul<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        Matrix {
            array: self.array.mapv(|x| x * rhs),
        }
    }
}

macro_rules! impl_elementwise_op {
    ($trt:ident, $mth:ident, $try_mth:ident) => {
        /// Elementwise operation between matrices of identical shape.
        ///
        /// **Panics** if the shapes differ.
        impl<'a, 'b, T, U> $trt<&'b Matrix<U>> for &'a Matrix<T>
        where
            T: Promote<U>,
            U: Element,
        {
            type Output = Matrix<<T as Promote<U>>::Output>;

            fn $mth(self, rhs: &'b Matrix<U>) -> Self::Output {
                match self.array.$try_mth(&rhs.array) {
                    Ok(array) => Matrix { array },
                    Err(e) => op_failed(e),
                }
            }
        }
    };
}

impl_elementwise_op!(Add, add, try_add);
impl_elementwise_op!(Sub, sub, try_sub);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arr1, arr2, narray};

    #[test]
    fn construction_adjusts_rank() {
        let row = Matrix::from_array(arr1(&[1, 2, 3])).unwrap();
        assert_eq!(row.shape().dims(), &[1, 3]);
        let one = Matrix::from_array(NArray::scalar(5)).unwrap();
        assert_eq!(one.shape().dims(), &[1, 1]);
        let cube = NArray::<f32>::zeros([2, 2, 2]);
        assert_eq!(Matrix::from_array(cube).unwrap_err().kind(), ErrorKind::Shape);
        assert!(Matrix::try_from(NArray::<f32>::zeros([3, 1])).is_ok());
    }

    #[test]
    fn from_rows_checks_rows() {
        assert!(Matrix::from_rows(&[arr1(&[1, 2]), arr1(&[3])]).is_err());
        assert!(Matrix::from_rows(&[narray![[1, 2]]]).is_err());
        let empty: [NArray<i32>; 0] = [];
        assert_eq!(Matrix::from_rows(&empty).unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn product_semantics() {
        let a = Matrix::from_array(arr2(&[[1, 2], [3, 4]])).unwrap();
        let b = Matrix::from_array(arr2(&[[0, 1], [1, 0]])).unwrap();
        assert_eq!(&a * &b, Matrix::from_array(arr2(&[[2, 1], [4, 3]])).unwrap());
        assert_eq!(a.as_array() * b.as_array(), arr2(&[[0, 2], [3, 0]]));

        let v = arr1(&[1.0f64, -1.0]);
        assert_eq!(&a * &v, arr1(&[-1.0, -1.0]));
        assert!(a.are_multipliable(&v));
        assert!(!a.are_multipliable(&arr1(&[1, 2, 3])));
    }

    #[test]
    #[should_panic]
    fn mismatched_product_panics() {
        let a = Matrix::<f64>::zeros(2, 3);
        let _ = &a * &a;
    }

    #[test]
    fn mismatched_product_errors() {
        let a = Matrix::<f64>::zeros(2, 3);
        assert_eq!(a.matmul(&a).unwrap_err().kind(), ErrorKind::Shape);
        let cube = NArray::<f64>::zeros([3, 1, 1]);
        assert_eq!(a.mul_array(&cube).unwrap_err().kind(), ErrorKind::Shape);
    }

    #[test]
    fn elementwise_and_scalar() {
        let a = Matrix::from_array(arr2(&[[1, 2], [3, 4]])).unwrap();
        let id = Matrix::<i32>::eye(2);
        assert_eq!((&a + &id).into_array(), arr2(&[[2, 2], [3, 5]]));
        assert_eq!((&a - &id).into_array(), arr2(&[[0, 2], [3, 3]]));
        assert_eq!((&a * 3).into_array(), arr2(&[[3, 6], [9, 12]]));
        assert_eq!(a.det().unwrap(), -2);
    }

    #[test]
    fn transpose_is_a_matrix() {
        let m = Matrix::from_array(arr2(&[[1, 2, 3], [4, 5, 6]])).unwrap();
        let t = m.transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.into_array(), arr2(&[[1, 4], [2, 5], [3, 6]]));
        let row = Matrix::from_array(arr1(&[1, 2])).unwrap();
        assert_eq!(row.transpose().shape().dims(), &[2, 1]);
        assert_eq!(Matrix::<i8>::zeros(0, 2).transpose().shape().dims(), &[2, 0]);
    }

    #[test]
    fn views_share_data() {
        let base = arr1(&[1, 2, 3, 4]);
        let m = Matrix::from_array(base.clone()).unwrap();
        base.set(0, 10).unwrap();
        assert_eq!(m.get(0).unwrap(), 10);
        let copy = m.deepcopy();
        base.set(1, 20).unwrap();
        assert_eq!(copy.get(1).unwrap(), 2);
    }
}

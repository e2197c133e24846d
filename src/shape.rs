// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Array shapes and the matrix-product classification.

use std::fmt;
use std::ops::Deref;

use crate::error::{self, from_kind, ArrayError, ErrorKind};
use crate::Ix;

/// Which product two operand shapes support.
///
/// Produced by [`Shape::matmul_type`]; `Invalid` when the shapes cannot be
/// multiplied at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatmulType {
    Invalid,
    /// vector · vector of equal length
    Dot,
    /// row vector × matrix
    RowMat,
    /// matrix × column vector
    MatCol,
    /// matrix × matrix
    MatMat,
}

impl MatmulType {
    #[inline]
    pub fn is_valid(self) -> bool {
        self != MatmulType::Invalid
    }
}

/// The extents of an array, outermost first.
///
/// A rank 0 shape describes a single element: the empty product is 1.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<Ix>,
}

/// Map `index` into `0..len`, letting `-len..0` wrap around from the end.
pub fn wrap_index(index: isize, len: usize) -> Result<usize, ArrayError> {
    if index >= 0 {
        let i = index as usize;
        if i < len {
            return Ok(i);
        }
    } else if index.unsigned_abs() <= len {
        return Ok(len - index.unsigned_abs());
    }
    Err(error::index_out_of_range(index, len))
}

impl Shape {
    /// The rank 0 shape.
    pub fn scalar() -> Self {
        Shape { dims: Vec::new() }
    }

    pub fn new(dims: Vec<Ix>) -> Self {
        Shape { dims }
    }

    /// Return the number of dimensions (the rank).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Return the number of elements an array of this shape holds.
    #[inline]
    pub fn total_size(&self) -> usize {
        self.dims.iter().product()
    }

    /// Return the number of elements, or `None` if it overflows `usize`.
    pub fn checked_total_size(&self) -> Option<usize> {
        if self.dims.contains(&0) {
            return Some(0);
        }
        self.dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    #[inline]
    pub fn dims(&self) -> &[Ix] {
        &self.dims
    }

    /// Return the extent of axis `index`; negative indices count from the
    /// last axis.
    pub fn get(&self, index: isize) -> Result<Ix, ArrayError> {
        let i = wrap_index(index, self.ndim())?;
        Ok(self.dims[i])
    }

    #[inline]
    pub fn same_shape(&self, other: &Shape) -> bool {
        self.dims == other.dims
    }

    /// A one or two dimensional shape with an equal number of rows and
    /// columns. A single element is trivially square.
    pub fn is_square(&self) -> bool {
        match self.ndim() {
            0 | 1 => self.total_size() == 1,
            2 => self.dims[0] == self.dims[1] || self.total_size() == 1,
            _ => false,
        }
    }

    /// Replace the extents.
    pub fn reshape(&mut self, dims: Vec<Ix>) {
        self.dims = dims;
    }

    /// Insert a new axis of extent `size` before axis `position`.
    ///
    /// `position` wraps like an index; `position == ndim` appends.
    pub fn insert_dimension(&mut self, size: Ix, position: isize) -> Result<(), ArrayError> {
        let at = if position == self.ndim() as isize {
            self.ndim()
        } else {
            wrap_index(position, self.ndim())?
        };
        self.dims.insert(at, size);
        Ok(())
    }

    /// Return the one dimensional shape with the same number of elements.
    pub fn flatten(&self) -> Shape {
        Shape::from(vec![self.total_size()])
    }

    /// Return the transposed shape: `(n,)` becomes the row `(1, n)` and
    /// `(r, c)` becomes `(c, r)`. A rank 0 shape is its own transpose.
    pub fn transpose(&self) -> Result<Shape, ArrayError> {
        match *self.dims {
            [] => Ok(Shape::scalar()),
            [n] => Ok(Shape::from(vec![1, n])),
            [r, c] => Ok(Shape::from(vec![c, r])),
            _ => Err(from_kind(
                ErrorKind::Shape,
                format!("cannot transpose an array of shape {}, at most 2 dimensions are supported", self),
            )),
        }
    }

    /// Classify the product of operands shaped `a` and `b`.
    pub fn matmul_type(a: &Shape, b: &Shape) -> MatmulType {
        match (a.dims(), b.dims()) {
            (&[n], &[m]) if n == m => MatmulType::Dot,
            (&[n], &[rows, _]) if n == rows => MatmulType::RowMat,
            (&[_, cols], &[n]) if cols == n => MatmulType::MatCol,
            (&[_, cols], &[rows, _]) if cols == rows => MatmulType::MatMat,
            _ => MatmulType::Invalid,
        }
    }

    /// Return the shape of the product of operands shaped `a` and `b`.
    pub fn product_shape(a: &Shape, b: &Shape) -> Result<Shape, ArrayError> {
        let dims = match Shape::matmul_type(a, b) {
            MatmulType::Invalid => return Err(error::incompatible_shapes(a, b, "multiply")),
            MatmulType::Dot => vec![1],
            MatmulType::RowMat => vec![b.dims[1]],
            MatmulType::MatCol => vec![a.dims[0]],
            MatmulType::MatMat => vec![a.dims[0], b.dims[1]],
        };
        Ok(Shape::from(dims))
    }

    /// Return the GEMM extents `(m, k, n)` of the product of `a` and `b`:
    /// an `m × k` left operand times a `k × n` right operand.
    pub fn gemm_dims(a: &Shape, b: &Shape) -> Result<(usize, usize, usize), ArrayError> {
        Ok(match Shape::matmul_type(a, b) {
            MatmulType::Invalid => return Err(error::incompatible_shapes(a, b, "multiply")),
            MatmulType::Dot => (1, a.dims[0], 1),
            MatmulType::RowMat => (1, a.dims[0], b.dims[1]),
            MatmulType::MatCol => (a.dims[0], a.dims[1], 1),
            MatmulType::MatMat => (a.dims[0], a.dims[1], b.dims[1]),
        })
    }
}

impl Deref for Shape {
    type Target = [Ix];
    fn deref(&self) -> &[Ix] {
        &self.dims
    }
}

impl From<Vec<Ix>> for Shape {
    fn from(dims: Vec<Ix>) -> Self {
        Shape { dims }
    }
}

impl From<&[Ix]> for Shape {
    fn from(dims: &[Ix]) -> Self {
        Shape { dims: dims.to_vec() }
    }
}

impl<const N: usize> From<[Ix; N]> for Shape {
    fn from(dims: [Ix; N]) -> Self {
        Shape { dims: dims.to_vec() }
    }
}

impl From<Ix> for Shape {
    fn from(n: Ix) -> Self {
        Shape { dims: vec![n] }
    }
}

impl FromIterator<Ix> for Shape {
    fn from_iter<I: IntoIterator<Item = Ix>>(iter: I) -> Self {
        Shape { dims: iter.into_iter().collect() }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        if self.ndim() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

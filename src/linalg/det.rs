// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{self, from_kind, ErrorKind};
use crate::{Element, NArray, Result};

/// Determinant of a square matrix.
///
/// A single element (of any rank up to two) is its own determinant, a
/// `0 × 0` matrix has determinant one. Larger matrices use the cofactor
/// expansion along the first row, which takes `O(n!)` operations: use it
/// for small matrices only.
///
/// **Errors** with a shape error if `m` is not square.
///
/// ```
/// use narray::{det, narray};
///
/// assert_eq!(det(&narray![[1, 2], [3, 4]]).unwrap(), -2);
/// assert!(det(&narray![[1, 2, 3], [4, 5, 6]]).is_err());
/// ```
pub fn det<T: Element>(m: &NArray<T>) -> Result<T> {
    if !m.shape().is_square() {
        return Err(from_kind(
            ErrorKind::Shape,
            format!("determinant needs a square matrix, got shape {}", m.shape()),
        ));
    }
    if m.len() == 1 {
        return m.into_scalar();
    }
    let n = m.shape().dims()[0];
    Ok(cofactor_det(&m.to_vec(), n))
}

/// Determinant of the row-major `n × n` matrix `a`.
fn cofactor_det<T: Element>(a: &[T], n: usize) -> T {
    match n {
        0 => T::one(),
        1 => a[0],
        2 => a[0] * a[3] - a[1] * a[2],
        _ => {
            let mut sum = T::zero();
            let mut minor = Vec::with_capacity((n - 1) * (n - 1));
            for col in 0..n {
                minor.clear();
                for row in 1..n {
                    minor.extend((0..n).filter(|&j| j != col).map(|j| a[row * n + j]));
                }
                let term = a[col] * cofactor_det(&minor, n - 1);
                sum = if col % 2 == 0 { sum + term } else { sum - term };
            }
            sum
        }
    }
}

/// Return the matrix `m` without row `i` and column `j`.
///
/// **Errors** with a shape error if `m` is not two dimensional, and with an
/// index error if `i` or `j` is out of bounds.
///
/// ```
/// use narray::{minor_matrix, narray};
///
/// let m = narray![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
/// assert_eq!(minor_matrix(&m, 1, 0).unwrap(), narray![[2, 3], [8, 9]]);
/// ```
pub fn minor_matrix<T: Copy>(m: &NArray<T>, i: usize, j: usize) -> Result<NArray<T>> {
    let (rows, cols) = match m.shape().dims() {
        &[rows, cols] => (rows, cols),
        _ => {
            return Err(from_kind(
                ErrorKind::Shape,
                format!("minor matrix needs a two dimensional array, got shape {}", m.shape()),
            ))
        }
    };
    if i >= rows {
        return Err(error::index_out_of_range(i as isize, rows));
    }
    if j >= cols {
        return Err(error::index_out_of_range(j as isize, cols));
    }
    let v: Vec<T> = m
        .iter()
        .enumerate()
        .filter(|&(ix, _)| ix / cols != i && ix % cols != j)
        .map(|(_, x)| x)
        .collect();
    NArray::from_shape_vec([rows - 1, cols - 1], v)
}

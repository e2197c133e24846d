// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{self, from_kind, ErrorKind};
use crate::{NArray, Result};

/// Stack arrays of identical shape along a new leading axis.
///
/// The result has shape `(arrays.len(), ...shape)` and its own buffer.
///
/// **Errors** if `arrays` is empty (value error) or if the shapes differ
/// (shape error).
///
/// ```
/// use narray::{arr1, narray, stack};
///
/// let a = arr1(&[1, 2]);
/// let b = arr1(&[3, 4]);
/// assert_eq!(stack(&[a, b]).unwrap(), narray![[1, 2], [3, 4]]);
/// ```
pub fn stack<T: Copy>(arrays: &[NArray<T>]) -> Result<NArray<T>> {
    let first = match arrays.first() {
        Some(first) => first,
        None => return Err(from_kind(ErrorKind::Value, "need at least one array to stack")),
    };
    let mut res_shape = first.shape().clone();
    for array in &arrays[1..] {
        if !array.shape().same_shape(&res_shape) {
            return Err(error::incompatible_shapes(&res_shape, array.shape(), "stack"));
        }
    }
    res_shape.insert_dimension(arrays.len(), 0)?;

    let mut v = Vec::with_capacity(res_shape.total_size());
    for array in arrays {
        v.extend(array.iter());
    }
    NArray::from_shape_vec(res_shape, v)
}

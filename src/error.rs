// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

use crate::Shape;

/// An error produced by an array operation.
///
/// Every fallible operation of the crate reports its failure through this
/// type; the [`ErrorKind`] tells which class of problem occurred and the
/// display message carries the offending shapes or indices.
#[derive(Clone, Debug)]
pub struct ArrayError {
    // we want to be able to change this representation later
    repr: ErrorKind,
    msg: String,
}

impl ArrayError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create an error of kind `kind` with a context message.
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        ArrayError {
            repr: kind,
            msg: msg.into(),
        }
    }
}

/// Error code for an [`ArrayError`].
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// incompatible shapes for an elementwise or matrix operation
    Shape,
    /// invalid value, e.g. jagged input or mismatched element count
    Value,
    /// index outside the valid wrap-around range
    Index,
    /// scalar conversion of an array with more than one element
    Conversion,
    /// an external resource could not be opened, read or written
    Argument,
}

impl ErrorKind {
    fn label(self) -> &'static str {
        match self {
            ErrorKind::Shape => "ShapeError",
            ErrorKind::Value => "ValueError",
            ErrorKind::Index => "IndexError",
            ErrorKind::Conversion => "ConversionError",
            ErrorKind::Argument => "ArgumentError",
        }
    }
}

#[inline(always)]
pub fn from_kind(k: ErrorKind, msg: impl Into<String>) -> ArrayError {
    ArrayError::new(k, msg)
}

impl PartialEq for ArrayError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.repr.label(), self.msg)
    }
}

/// Shapes `a` and `b` cannot be combined by `operation`.
pub fn incompatible_shapes(a: &Shape, b: &Shape, operation: &str) -> ArrayError {
    from_kind(
        ErrorKind::Shape,
        format!("unable to {op} arrays, cannot {op} shapes {} and {}", a, b, op = operation),
    )
}

pub fn index_out_of_range(index: isize, len: usize) -> ArrayError {
    from_kind(
        ErrorKind::Index,
        format!("index {} is out of range for length {}", index, len),
    )
}

pub fn size_mismatch(expected: usize, found: usize) -> ArrayError {
    from_kind(
        ErrorKind::Value,
        format!("expected {} elements, found {}", expected, found),
    )
}

pub fn size_overflow(shape: &Shape) -> ArrayError {
    from_kind(
        ErrorKind::Value,
        format!("the number of elements of shape {} overflows usize", shape),
    )
}

pub fn not_a_scalar(shape: &Shape, target: &str) -> ArrayError {
    from_kind(
        ErrorKind::Conversion,
        format!("unable to convert array of shape {} to {}", shape, target),
    )
}

/// Panic with the error's message; used by the std operator impls.
#[cold]
#[inline(never)]
pub(crate) fn op_failed(err: ArrayError) -> ! {
    panic!("narray: {}", err)
}

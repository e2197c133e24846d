// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "narray"]
#![doc(html_root_url = "https://docs.rs/narray/0.3/")]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::float_cmp,
    clippy::len_without_is_empty
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `narray` crate provides an *n*-dimensional container for numerical
//! elements, in the spirit of NumPy's `ndarray`, with shared-buffer views,
//! type promotion and a few linear algebra kernels.
//!
//! - [`NArray`]: the array type. Elements are stored contiguously in
//!   row-major order inside a reference counted [`Buffer`].
//! - Views: [`NArray::view_at`], [`NArray::ravel`], [`NArray::reshape`] and
//!   [`NArray::copy`] (or `Clone`) share the buffer of the source array;
//!   writes through any of them are visible through all of them.
//!   [`NArray::deepcopy`] makes an independent copy.
//! - Arithmetic: `+ - * /` between arrays of *identical* shape (there is no
//!   broadcasting) and between arrays and scalars on either side. Mixed
//!   element types promote through [`Promote`], e.g. `i32` and `f64` give
//!   `f64`, `f64` and `Complex<f32>` give `Complex<f64>`.
//! - [`Matrix`]: a rank ≤ 2 array for which `*` is the matrix product.
//! - [`linalg`]: [`matmul`], [`dot`], [`vdot`], [`hadamard`], [`cross`],
//!   [`det`] and [`minor_matrix`].
//! - [`Complex`]: a complex number type that mixes with the real scalars.
//! - [`numeric`]: elementwise mathematical functions and reductions.
//! - [`io`]: the array file format and delimited text files.
//!
//! ## Crate Feature Flags
//!
//! - `serde`
//!   - Enables serialization support for serde 1.x
//! - `approx`
//!   - Implementations of traits from the [`approx`] crate.
//!
//! ## Threads
//!
//! Buffers are shared with `Rc` and written through `Cell`s, so arrays are
//! neither `Send` nor `Sync`. Use [`NArray::to_vec`] to move data between
//! threads.
//!
//! ```
//! use narray::{narray, NArray};
//!
//! let a = narray![[1, 2], [3, 4]];
//! let b = &a * 0.5f64;
//! assert_eq!(b, narray![[0.5, 1.0], [1.5, 2.0]]);
//!
//! let row = a.view_at(-1).unwrap();
//! row.set(0, 30).unwrap();
//! assert_eq!(a.to_vec(), vec![1, 2, 30, 4]);
//! ```

#[cfg(feature = "serde")]
mod array_serde;
#[cfg(feature = "approx")]
mod array_approx;
mod arrayformat;
mod arraytraits;
pub mod complex;
mod data_repr;
pub mod error;
mod free_functions;
mod impl_constructors;
mod impl_methods;
mod impl_ops;
pub mod io;
mod iterators;
pub mod linalg;
mod linalg_traits;
mod matrix;
pub mod numeric;
mod promote;
mod shape;
mod stacking;

pub mod prelude;

pub use crate::complex::{Complex, C32, C64};
pub use crate::data_repr::Buffer;
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::free_functions::{arr1, arr2, arr3, Nested};
pub use crate::impl_ops::Promoted;
pub use crate::iterators::Iter;
pub use crate::linalg::{cross, det, dot, hadamard, matmul, minor_matrix, vdot};
pub use crate::linalg_traits::{Element, ScalarOperand};
pub use crate::matrix::Matrix;
pub use crate::promote::Promote;
pub use crate::shape::{wrap_index, MatmulType, Shape};
pub use crate::stacking::stack;

/// Array index type
pub type Ix = usize;

/// Result type of the fallible array operations.
pub type Result<T> = std::result::Result<T, ArrayError>;

/// An *n*-dimensional array.
///
/// The array is a shape, a handle to a shared [`Buffer`] and the offset of
/// its first element inside that buffer. Its elements are the
/// `shape.total_size()` consecutive buffer cells starting at the offset,
/// in row-major order.
///
/// Several arrays can use the same buffer: an array created by
/// [`.view_at()`](NArray::view_at), [`.ravel()`](NArray::ravel),
/// [`.reshape()`](NArray::reshape), [`.copy()`](NArray::copy) or `clone()`
/// is a *view* of its source. Element writes made with
/// [`.set()`](NArray::set), the `assign` methods or the compound assignment
/// operators go to the buffer and are seen by every array that shares it.
///
/// ## Arithmetic
///
/// Binary operators take their array operands by reference and produce a
/// new array. Both arrays must have the same shape; the operator **panics**
/// otherwise, while the methods [`.try_add()`](NArray::try_add) and friends
/// return an error instead.
///
/// ```
/// use narray::{narray, NArray};
///
/// let a = narray![1i32, 2, 3];
/// let b = narray![0.5f64, 0.5, 0.5];
/// let c: NArray<f64> = &a + &b;
/// assert_eq!(c, narray![1.5, 2.5, 3.5]);
/// assert_eq!(&a * 2i32, narray![2, 4, 6]);
/// assert_eq!(10i32 - &a, narray![9, 8, 7]);
/// assert!(a.try_add(&narray![1, 2]).is_err());
/// ```
pub struct NArray<T> {
    data: Buffer<T>,
    offset: usize,
    shape: Shape,
}

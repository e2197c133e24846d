// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! narray prelude.
//!
//! This module contains the most used types, traits, functions, and macros
//! that you can import easily as a group.
//!
//! ```
//! use narray::prelude::*;
//!
//! let m = Matrix::from_array(narray![[1., 2.], [3., 4.]]).unwrap();
//! assert_eq!(det(&m).unwrap(), -2.);
//! ```

#[doc(no_inline)]
pub use crate::{Complex, Matrix, NArray, Nested, Shape, C32, C64};

#[doc(no_inline)]
pub use crate::{Element, Promote, ScalarOperand};

#[doc(no_inline)]
pub use crate::{arr1, arr2, arr3, cross, det, dot, hadamard, matmul, stack, vdot};

#[doc(no_inline)]
pub use crate::numeric::Maths;

#[doc(no_inline)]
pub use crate::narray;

// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Linear algebra: matrix products and the determinant.
//!
//! All kernels promote their operands with [`Promote`](crate::Promote) and
//! validate shapes with [`Shape::matmul_type`](crate::Shape::matmul_type)
//! before touching any data.

pub use self::det::{det, minor_matrix};
pub use self::impl_linalg::{cross, dot, hadamard, matmul, vdot};

mod det;
mod impl_linalg;

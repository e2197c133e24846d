// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementwise mathematical functions and reductions.
//!
//! The functions of [`Maths`] are available as array methods for arrays of
//! `f32`, `f64`, `Complex<f32>` and `Complex<f64>`; the reductions
//! ([`sum`](crate::NArray::sum), [`sum_axis`](crate::NArray::sum_axis),
//! [`mean`](crate::NArray::mean), [`mean_axis`](crate::NArray::mean_axis)
//! and [`diff`](crate::NArray::diff)) for every element type.

pub use self::impl_float_maths::Maths;

mod impl_float_maths;
mod impl_numeric;

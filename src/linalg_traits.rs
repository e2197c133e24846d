// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::{One, Zero};

use crate::complex::Complex;

/// Elements that support arithmetic and the linear algebra kernels.
///
/// `'static` for type-based specialization, `Copy` so that they can live in
/// `Cell`s, and the rest are numerical traits.
pub trait Element:
    'static
    + Copy
    + fmt::Debug
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Return the complex conjugate; real numbers are their own conjugate.
    #[inline(always)]
    fn conj(self) -> Self {
        self
    }
}

macro_rules! impl_real_element {
    ($($t:ty),*) => {$(
        impl Element for $t {}
    )*};
}

impl_real_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Element for Complex<f32> {
    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}

impl Element for Complex<f64> {
    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array `a`,
/// arithmetic like `&a + 1.0`, `&a * 2.` and `a += 3.` is allowed.
///
/// `ScalarOperand` determines for which scalars `K` the operations `&A @ K`,
/// `A @ K` and `A @= K` are defined, as ***right hand side operands***.
/// ***Left hand side*** scalar operands need one `impl` per concrete scalar
/// type; they are implemented for the same types, allowing `K @ &A`.
pub trait ScalarOperand: Element {}

impl ScalarOperand for i8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for isize {}
impl ScalarOperand for u8 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}
impl ScalarOperand for Complex<f32> {}
impl ScalarOperand for Complex<f64> {}

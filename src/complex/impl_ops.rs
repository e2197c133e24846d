// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Num;

use super::{Complex, C32, C64};
use crate::Promote;

impl<T: Copy + Num> Add for Complex<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Copy + Num> Sub for Complex<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Copy + Num> Mul for Complex<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// `self * conj(rhs) / |rhs|²`
impl<T: Copy + Num> Div for Complex<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let den = rhs.norm_sqr();
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / den,
            (self.im * rhs.re - self.re * rhs.im) / den,
        )
    }
}

impl<T: Copy + Num> Add<T> for Complex<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: T) -> Self {
        Complex::new(self.re + rhs, self.im)
    }
}

impl<T: Copy + Num> Sub<T> for Complex<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: T) -> Self {
        Complex::new(self.re - rhs, self.im)
    }
}

impl<T: Copy + Num> Mul<T> for Complex<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Complex::new(self.re * rhs, self.im * rhs)
    }
}

impl<T: Copy + Num> Div<T> for Complex<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Complex::new(self.re / rhs, self.im / rhs)
    }
}

impl<T: Copy + Num + Neg<Output = T>> Neg for Complex<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Complex::new(-self.re, -self.im)
    }
}

macro_rules! impl_assign_op {
    ($trt:ident, $mth:ident, $op:tt) => {
        impl<T: Copy + Num> $trt for Complex<T> {
            #[inline]
            fn $mth(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<T: Copy + Num> $trt<T> for Complex<T> {
            #[inline]
            fn $mth(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);

// Mixed operands go through the promotion table: both sides are widened to
// the common type before the same-type operator runs.
macro_rules! impl_promoted_ops {
    (@op $lhs:ty, $rhs:ty, $trt:ident, $mth:ident, $op:tt) => {
        impl $trt<$rhs> for $lhs {
            type Output = <$lhs as Promote<$rhs>>::Output;
            #[inline]
            fn $mth(self, rhs: $rhs) -> Self::Output {
                <$lhs as Promote<$rhs>>::promote_lhs(self)
                    $op <$lhs as Promote<$rhs>>::promote_rhs(rhs)
            }
        }
    };
    ($($lhs:ty, $rhs:ty;)*) => {$(
        impl_promoted_ops!(@op $lhs, $rhs, Add, add, +);
        impl_promoted_ops!(@op $lhs, $rhs, Sub, sub, -);
        impl_promoted_ops!(@op $lhs, $rhs, Mul, mul, *);
        impl_promoted_ops!(@op $lhs, $rhs, Div, div, /);
    )*};
}

impl_promoted_ops! {
    C32, C64;
    C64, C32;
    C32, f64;
    f64, C32;
    C32, i32;
    i32, C32;
    C32, i64;
    i64, C32;
    C64, f32;
    f32, C64;
    C64, i32;
    i32, C64;
    C64, i64;
    i64, C64;
    f32, C32;
    f64, C64;
}

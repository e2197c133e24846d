// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element type promotion for mixed-type arithmetic.

use crate::complex::{C32, C64};
use crate::Element;

/// The common type of a binary operation between `Self` and `Rhs`.
///
/// Every element type promotes with itself. Between the types `i32`, `i64`,
/// `f32`, `f64`, `Complex<f32>` and `Complex<f64>` the usual arithmetic
/// conversions apply:
///
/// - integer with float gives the float
/// - narrow with wide gives the wide type
/// - real with complex gives the complex type of the promoted real type
///
/// | lhs \ rhs | i32   | i64   | f32   | f64   | C32   | C64   |
/// |-----------|-------|-------|-------|-------|-------|-------|
/// | i32       | i32   | i64   | f32   | f64   | C32   | C64   |
/// | i64       | i64   | i64   | f32   | f64   | C32   | C64   |
/// | f32       | f32   | f32   | f32   | f64   | C32   | C64   |
/// | f64       | f64   | f64   | f64   | f64   | C64   | C64   |
/// | C32       | C32   | C32   | C32   | C64   | C32   | C64   |
/// | C64       | C64   | C64   | C64   | C64   | C64   | C64   |
pub trait Promote<Rhs: Element = Self>: Element {
    type Output: Element;

    /// Convert the left operand to the common type.
    fn promote_lhs(self) -> <Self as Promote<Rhs>>::Output;

    /// Convert the right operand to the common type.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

impl<T: Element> Promote<T> for T {
    type Output = T;

    #[inline(always)]
    fn promote_lhs(self) -> T {
        self
    }

    #[inline(always)]
    fn promote_rhs(rhs: T) -> T {
        rhs
    }
}

/// Conversion of an operand to the common type. `i64` to `f32` may round.
trait Widen<O> {
    fn widen(self) -> O;
}

macro_rules! widen_cast {
    ($($from:ty => $to:ty),*) => {$(
        impl Widen<$to> for $from {
            #[inline(always)]
            fn widen(self) -> $to {
                self as $to
            }
        }
    )*};
}

widen_cast!(i32 => i64, i32 => f32, i32 => f64, i64 => f32, i64 => f64, f32 => f64);

macro_rules! widen_complex {
    ($($from:ty => $to:ident, $real:ty);*) => {$(
        impl Widen<$to> for $from {
            #[inline(always)]
            fn widen(self) -> $to {
                $to::new(self as $real, 0.)
            }
        }
    )*};
}

widen_complex!(
    i32 => C32, f32;
    i64 => C32, f32;
    f32 => C32, f32;
    i32 => C64, f64;
    i64 => C64, f64;
    f32 => C64, f64;
    f64 => C64, f64
);

impl Widen<C64> for C32 {
    #[inline(always)]
    fn widen(self) -> C64 {
        C64::new(self.real() as f64, self.imag() as f64)
    }
}

macro_rules! promote_pairs {
    ($($a:ty, $b:ty => $out:ty;)*) => {$(
        impl Promote<$b> for $a {
            type Output = $out;

            #[inline(always)]
            fn promote_lhs(self) -> $out {
                Widen::<$out>::widen(self)
            }

            #[inline(always)]
            fn promote_rhs(rhs: $b) -> $out {
                Widen::<$out>::widen(rhs)
            }
        }

        impl Promote<$a> for $b {
            type Output = $out;

            #[inline(always)]
            fn promote_lhs(self) -> $out {
                Widen::<$out>::widen(self)
            }

            #[inline(always)]
            fn promote_rhs(rhs: $a) -> $out {
                Widen::<$out>::widen(rhs)
            }
        }
    )*};
}

// identity widening for the operand that already has the common type
impl<T: Element> Widen<T> for T {
    #[inline(always)]
    fn widen(self) -> T {
        self
    }
}

promote_pairs! {
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;
    i64, f32 => f32;
    i64, f64 => f64;
    f32, f64 => f64;
    i32, C32 => C32;
    i64, C32 => C32;
    f32, C32 => C32;
    f64, C32 => C64;
    i32, C64 => C64;
    i64, C64 => C64;
    f32, C64 => C64;
    f64, C64 => C64;
    C32, C64 => C64;
}

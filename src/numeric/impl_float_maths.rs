// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Element-wise methods for narray

use num_traits::Float;

use crate::complex::Complex;
use crate::{Element, NArray};

/// Mathematical functions of real and complex floating point elements.
pub trait Maths: Element {
    /// The real type: `Self` for reals, the component type for complex
    /// numbers.
    type Real: Element + Float;

    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn log10(self) -> Self;
    fn sqrt(self) -> Self;
    fn powi(self, n: i32) -> Self;
    fn powf(self, n: Self::Real) -> Self;
    /// Absolute value, or magnitude of a complex number.
    fn abs(self) -> Self::Real;
}

macro_rules! forward {
    ($path:ty; $($id:ident)*) => {$(
        #[inline]
        fn $id(self) -> Self {
            <$path>::$id(self)
        }
    )*};
}

macro_rules! impl_maths {
    ($($t:ident)*) => {$(
        impl Maths for $t {
            type Real = $t;

            forward!($t; sin cos tan asin acos atan sinh cosh tanh asinh acosh atanh exp ln log10 sqrt);

            #[inline]
            fn powi(self, n: i32) -> Self {
                <$t>::powi(self, n)
            }

            #[inline]
            fn powf(self, n: $t) -> Self {
                <$t>::powf(self, n)
            }

            #[inline]
            fn abs(self) -> $t {
                <$t>::abs(self)
            }
        }

        impl Maths for Complex<$t> {
            type Real = $t;

            forward!(Complex<$t>; sin cos tan asin acos atan sinh cosh tanh asinh acosh atanh exp ln log10 sqrt);

            #[inline]
            fn powi(self, n: i32) -> Self {
                Complex::<$t>::powi(self, n)
            }

            #[inline]
            fn powf(self, n: $t) -> Self {
                Complex::<$t>::powf(self, n)
            }

            #[inline]
            fn abs(self) -> $t {
                Complex::<$t>::abs(&self)
            }
        }
    )*};
}

impl_maths!(f32 f64);

macro_rules! unary_ops {
    ($($(#[$meta:meta])* fn $id:ident)+) => {
        $($(#[$meta])*
        #[must_use = "method returns a new array and does not mutate the original value"]
        pub fn $id(&self) -> NArray<T> {
            self.mapv(T::$id)
        })+
    };
}

/// # Element-wise methods for float arrays
///
/// Element-wise math functions for arrays of real or complex floats.
///
/// ```
/// use narray::{narray, Complex};
///
/// let a = narray![0.0f64, 1.0];
/// assert_eq!(a.exp().get(0).unwrap(), 1.0);
///
/// let z = narray![Complex::new(3.0f64, 4.0)];
/// assert_eq!(z.abs(), narray![5.0]);
/// ```
impl<T: Maths> NArray<T> {
    unary_ops! {
        /// Sine of each element (in radians).
        fn sin
        /// Cosine of each element (in radians).
        fn cos
        /// Tangent of each element (in radians).
        fn tan
        /// Inverse sine of each element.
        fn asin
        /// Inverse cosine of each element.
        fn acos
        /// Inverse tangent of each element.
        fn atan
        /// Hyperbolic sine of each element.
        fn sinh
        /// Hyperbolic cosine of each element.
        fn cosh
        /// Hyperbolic tangent of each element.
        fn tanh
        /// Inverse hyperbolic sine of each element.
        fn asinh
        /// Inverse hyperbolic cosine of each element.
        fn acosh
        /// Inverse hyperbolic tangent of each element.
        fn atanh
        /// `e^x` of each element (exponential function).
        fn exp
        /// Natural logarithm of each element.
        fn ln
        /// Base 10 logarithm of each element.
        fn log10
        /// Square root of each element; the principal root for complex
        /// elements.
        fn sqrt
    }

    /// Integer power of each element.
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn powi(&self, n: i32) -> NArray<T> {
        self.mapv(|v| v.powi(n))
    }

    /// Real power of each element.
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn powf(&self, n: T::Real) -> NArray<T> {
        self.mapv(|v| v.powf(n))
    }

    /// Absolute value (magnitude) of each element.
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn abs(&self) -> NArray<T::Real> {
        self.mapv(T::abs)
    }
}

impl<T: Element> NArray<T> {
    /// Complex conjugate of each element; a copy for real arrays.
    #[must_use = "method returns a new array and does not mutate the original value"]
    pub fn conj(&self) -> NArray<T> {
        self.mapv(Element::conj)
    }
}

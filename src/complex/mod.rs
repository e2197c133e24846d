// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A complex number type that mixes with real scalars.
//!
//! [`Complex<T>`] participates in the element promotion table: arithmetic
//! between `Complex<f32>`, `Complex<f64>` and the real scalar types yields
//! the promoted complex type, both as plain values and inside arrays.
//!
//! ```
//! use narray::{Complex, C64};
//!
//! let z = Complex::new(3.0f32, 4.0);
//! let w: C64 = z + 1.0f64;
//! assert_eq!(w, Complex::new(4.0, 4.0));
//! assert_eq!(z.abs(), 5.0);
//! assert!(z > 4.5f32);
//! ```

mod impl_maths;
mod impl_ops;

use std::cmp::Ordering;
use std::fmt;

use num_traits::{Float, FromPrimitive, Num, One, Zero};

/// A complex number in cartesian form.
///
/// Equality is component-wise. Ordering compares magnitudes, so two
/// distinct numbers on the same circle are neither less nor greater than
/// each other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Complex<T> {
    re: T,
    im: T,
}

/// `Complex<f32>`
pub type C32 = Complex<f32>;
/// `Complex<f64>`
pub type C64 = Complex<f64>;

impl<T> Complex<T> {
    /// Create a new `Complex`
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }
}

impl<T: Copy> Complex<T> {
    /// Real part.
    #[inline]
    pub fn real(&self) -> T {
        self.re
    }

    /// Imaginary part.
    #[inline]
    pub fn imag(&self) -> T {
        self.im
    }
}

impl<T: Copy + Num> Complex<T> {
    /// The imaginary unit.
    #[inline]
    pub fn i() -> Self {
        Complex::new(T::zero(), T::one())
    }

    /// Return the squared magnitude, `re² + im²`.
    #[inline]
    pub fn norm_sqr(&self) -> T {
        self.re * self.re + self.im * self.im
    }
}

impl<T: Copy + Num + std::ops::Neg<Output = T>> Complex<T> {
    /// Return the complex conjugate.
    #[inline]
    pub fn conj(&self) -> Self {
        Complex::new(self.re, -self.im)
    }
}

impl<T: Float> Complex<T> {
    /// Return the magnitude, computed with `hypot`.
    #[inline]
    pub fn abs(&self) -> T {
        self.re.hypot(self.im)
    }

    /// Return the phase angle in radians, in `(-π, π]`.
    #[inline]
    pub fn arg(&self) -> T {
        self.im.atan2(self.re)
    }

    /// Create a complex number from magnitude `rho` and phase `theta`.
    pub fn polar(rho: T, theta: T) -> Self {
        if rho.is_zero() {
            return Complex::zero();
        }
        Complex::new(rho * theta.cos(), rho * theta.sin())
    }

    /// Return `(abs, arg)`.
    pub fn to_polar(&self) -> (T, T) {
        (self.abs(), self.arg())
    }
}

impl<T: Copy + Num> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Complex::new(re, T::zero())
    }
}

impl<T> From<num_complex::Complex<T>> for Complex<T> {
    fn from(z: num_complex::Complex<T>) -> Self {
        Complex::new(z.re, z.im)
    }
}

impl<T> From<Complex<T>> for num_complex::Complex<T> {
    fn from(z: Complex<T>) -> Self {
        num_complex::Complex::new(z.re, z.im)
    }
}

impl<T: Copy + Num> Zero for Complex<T> {
    #[inline]
    fn zero() -> Self {
        Complex::new(T::zero(), T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<T: Copy + Num> One for Complex<T> {
    #[inline]
    fn one() -> Self {
        Complex::new(T::one(), T::zero())
    }
}

impl<T: Copy + Num + FromPrimitive> FromPrimitive for Complex<T> {
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Complex::from)
    }

    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Complex::from)
    }

    fn from_f64(n: f64) -> Option<Self> {
        T::from_f64(n).map(Complex::from)
    }
}

/// Orders complex numbers by magnitude.
///
/// This ordering is coarser than `==`: distinct values of equal magnitude,
/// such as `1` and `i`, compare as `Some(Equal)` while `==` reports them
/// unequal.
impl<T: Float> PartialOrd for Complex<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.abs().partial_cmp(&other.abs())
    }
}

macro_rules! impl_real_comparisons {
    ($($real:ty),*) => {$(
        impl PartialEq<$real> for Complex<$real> {
            fn eq(&self, other: &$real) -> bool {
                self.im == 0. && self.re == *other
            }
        }

        impl PartialEq<Complex<$real>> for $real {
            fn eq(&self, other: &Complex<$real>) -> bool {
                other == self
            }
        }

        impl PartialOrd<$real> for Complex<$real> {
            fn partial_cmp(&self, other: &$real) -> Option<Ordering> {
                self.abs().partial_cmp(&other.abs())
            }
        }

        impl PartialOrd<Complex<$real>> for $real {
            fn partial_cmp(&self, other: &Complex<$real>) -> Option<Ordering> {
                self.abs().partial_cmp(&other.abs())
            }
        }
    )*};
}

impl_real_comparisons!(f32, f64);

/// Formats as `a + bj` or `a - bj`; the precision, if any, applies to both
/// parts.
impl<T: Float + fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, im) = if self.im.is_sign_negative() && !self.im.is_nan() {
            ('-', -self.im)
        } else {
            ('+', self.im)
        };
        match f.precision() {
            Some(p) => write!(f, "{:.*} {} {:.*}j", p, self.re, sign, p, im),
            None => write!(f, "{} {} {}j", self.re, sign, im),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let z = Complex::new(3.0, -4.0);
        assert_eq!(z.real(), 3.0);
        assert_eq!(z.imag(), -4.0);
        assert_eq!(z.abs(), 5.0);
        assert_eq!(z.norm_sqr(), 25.0);
        assert_eq!(z.conj(), Complex::new(3.0, 4.0));
        assert_eq!(Complex::<f64>::i(), Complex::new(0.0, 1.0));
    }

    #[test]
    fn arg_is_atan2_of_imag_over_real() {
        let z = Complex::new(0.0f64, 2.0);
        assert_eq!(z.arg(), std::f64::consts::FRAC_PI_2);
        let w = Complex::new(-1.0f64, 0.0);
        assert_eq!(w.arg(), std::f64::consts::PI);
    }

    #[test]
    fn polar_with_zero_radius_is_exact_zero() {
        assert_eq!(Complex::polar(0.0f64, 1.3), Complex::zero());
        let z = Complex::polar(2.0f64, 0.0);
        assert_eq!(z, Complex::new(2.0, 0.0));
    }

    #[test]
    fn magnitude_ordering() {
        let a = Complex::new(3.0f64, 4.0);
        let b = Complex::new(0.0f64, 6.0);
        assert!(a < b);
        assert!(b > a);
        assert!(a <= Complex::new(5.0, 0.0));
        assert!(a >= Complex::new(-4.0, 3.0));
        assert!(a > 4.9f64);
        assert!(a < -5.1f64);
        assert!(a >= -5.0f64);
        assert!(6.0f64 > a);
    }

    #[test]
    fn equal_magnitudes_compare_equal_but_differ() {
        let one = Complex::new(1.0f64, 0.0);
        let i = Complex::new(0.0f64, 1.0);
        assert_eq!(one.partial_cmp(&i), Some(Ordering::Equal));
        assert!(one != i);
        assert!(one <= i && i <= one);
    }

    #[test]
    fn equality_with_reals() {
        assert_eq!(Complex::new(2.0f32, 0.0), 2.0f32);
        assert_ne!(Complex::new(2.0f32, 1.0), 2.0f32);
        assert_eq!(2.0f64, Complex::new(2.0f64, 0.0));
    }

    #[test]
    fn display() {
        assert_eq!(Complex::new(1.5, 2.0).to_string(), "1.5 + 2j");
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1 - 2j");
        assert_eq!(format!("{:.2}", Complex::new(1.0f32, -0.5)), "1.00 - 0.50j");
    }

    #[test]
    fn num_complex_round_trip() {
        let z = num_complex::Complex::new(1.0, 2.0);
        let ours: Complex<f64> = z.into();
        assert_eq!(ours, Complex::new(1.0, 2.0));
        let back: num_complex::Complex<f64> = ours.into();
        assert_eq!(back, z);
    }
}

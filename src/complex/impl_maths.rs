// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num_traits::{Float, FloatConst, Zero};

use super::Complex;

/// Complex analytic functions, on the principal branch.
impl<T: Float + FloatConst> Complex<T> {
    /// `e^z = polar(e^re, im)`
    pub fn exp(self) -> Self {
        Complex::polar(self.re.exp(), self.im)
    }

    /// Natural logarithm, `ln|z| + i arg z`.
    pub fn ln(self) -> Self {
        Complex::new(self.abs().ln(), self.arg())
    }

    /// Base 10 logarithm.
    pub fn log10(self) -> Self {
        self.ln() / T::LN_10()
    }

    /// Raise to a real power.
    ///
    /// Zero stays zero and a positive real base uses the real power.
    pub fn powf(self, n: T) -> Self {
        if self.is_zero() {
            return Complex::zero();
        }
        if self.im.is_zero() && self.re > T::zero() {
            return Complex::new(self.re.powf(n), T::zero());
        }
        let l = self.ln();
        Complex::polar((n * l.re).exp(), n * l.im)
    }

    /// Raise to a complex power, `e^(w ln z)`.
    ///
    /// Anything to the power zero is one; zero to any other power is zero.
    pub fn powc(self, w: Self) -> Self {
        if w.is_zero() {
            return Complex::new(T::one(), T::zero());
        }
        if self.is_zero() {
            return Complex::zero();
        }
        (w * self.ln()).exp()
    }

    /// Raise to an integer power.
    pub fn powi(self, n: i32) -> Self {
        match num_traits::cast::<i32, T>(n) {
            Some(n) => self.powf(n),
            None => Complex::new(T::nan(), T::nan()),
        }
    }

    /// Principal square root; the result has a non-negative real part.
    pub fn sqrt(self) -> Self {
        let (x, y) = (self.re, self.im);
        let two = T::one() + T::one();
        if x.is_zero() {
            let t = (y.abs() / two).sqrt();
            return Complex::new(t, if y < T::zero() { -t } else { t });
        }
        let t = (two * (self.abs() + x.abs())).sqrt();
        let u = t / two;
        if x > T::zero() {
            Complex::new(u, y / t)
        } else {
            Complex::new(y.abs() / t, if y < T::zero() { -u } else { u })
        }
    }

    pub fn sin(self) -> Self {
        let (x, y) = (self.re, self.im);
        Complex::new(x.sin() * y.cosh(), x.cos() * y.sinh())
    }

    pub fn cos(self) -> Self {
        let (x, y) = (self.re, self.im);
        Complex::new(x.cos() * y.cosh(), -(x.sin() * y.sinh()))
    }

    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    pub fn sinh(self) -> Self {
        let (x, y) = (self.re, self.im);
        Complex::new(x.sinh() * y.cos(), x.cosh() * y.sin())
    }

    pub fn cosh(self) -> Self {
        let (x, y) = (self.re, self.im);
        Complex::new(x.cosh() * y.cos(), x.sinh() * y.sin())
    }

    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    /// `ln(z + sqrt(z² + 1))`
    pub fn asinh(self) -> Self {
        let (x, y) = (self.re, self.im);
        let two = T::one() + T::one();
        let root = Complex::new((x - y) * (x + y) + T::one(), two * x * y).sqrt();
        (root + self).ln()
    }

    /// `2 ln(sqrt((z + 1) / 2) + sqrt((z - 1) / 2))`
    pub fn acosh(self) -> Self {
        let half = T::one() / (T::one() + T::one());
        let a = ((self + T::one()) * half).sqrt();
        let b = ((self - T::one()) * half).sqrt();
        (a + b).ln() * (T::one() + T::one())
    }

    pub fn atanh(self) -> Self {
        let (x, y) = (self.re, self.im);
        let one = T::one();
        let two = one + one;
        let quarter = one / (two * two);
        let y2 = y * y;
        let den_re = one - y2 - x * x;
        let num = y2 + (one + x) * (one + x);
        let den = y2 + (one - x) * (one - x);
        Complex::new(
            quarter * (num.ln() - den.ln()),
            (two * y).atan2(den_re) / two,
        )
    }

    /// `-i asinh(iz)`
    pub fn asin(self) -> Self {
        let t = Complex::new(-self.im, self.re).asinh();
        Complex::new(t.im, -t.re)
    }

    /// `π/2 - asin(z)`
    pub fn acos(self) -> Self {
        let t = self.asin();
        Complex::new(T::FRAC_PI_2() - t.re, -t.im)
    }

    pub fn atan(self) -> Self {
        let (x, y) = (self.re, self.im);
        let one = T::one();
        let two = one + one;
        let quarter = one / (two * two);
        let x2 = x * x;
        let den_re = one - x2 - y * y;
        let num = x2 + (y + one) * (y + one);
        let den = x2 + (y - one) * (y - one);
        Complex::new((two * x).atan2(den_re) / two, quarter * (num / den).ln())
    }
}

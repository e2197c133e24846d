// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Add, Div, Mul, Neg, Sub};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::complex::{C32, C64};
use crate::error::{self, op_failed};
use crate::{Element, NArray, Promote, Result, ScalarOperand};

/// Type of the array produced by a binary operation between `NArray<T>`
/// and `U` elements.
pub type Promoted<T, U> = NArray<<T as Promote<U>>::Output>;

macro_rules! impl_binary_op(
    ($trt:ident, $operator:tt, $mth:ident, $try_mth:ident, $name:expr, $doc:expr) => (
impl<T: Element> NArray<T> {
    /// Perform elementwise
    #[doc=$doc]
    /// between `self` and `rhs` and return the result as a new array with
    /// the promoted element type.
    ///
    /// **Errors** with a shape error if the shapes are not identical.
    pub fn $try_mth<U>(&self, rhs: &NArray<U>) -> Result<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Element,
    {
        self.zip_map(rhs, $name, |a, b| {
            let (a, b) = (<T as Promote<U>>::promote_lhs(a), <T as Promote<U>>::promote_rhs(b));
            a $operator b
        })
    }
}

/// Perform elementwise
#[doc=$doc]
/// between references `self` and `rhs`,
/// and return the result as a new array.
///
/// **Panics** if the shapes are not identical.
impl<'a, 'b, T, U> $trt<&'b NArray<U>> for &'a NArray<T>
where
    T: Promote<U>,
    U: Element,
{
    type Output = Promoted<T, U>;
    fn $mth(self, rhs: &'b NArray<U>) -> Self::Output {
        match self.$try_mth(rhs) {
            Ok(res) => res,
            Err(e) => op_failed(e),
        }
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and reference `rhs`.
///
/// **Panics** if the shapes are not identical.
impl<'b, T, U> $trt<&'b NArray<U>> for NArray<T>
where
    T: Promote<U>,
    U: Element,
{
    type Output = Promoted<T, U>;
    fn $mth(self, rhs: &'b NArray<U>) -> Self::Output {
        (&self).$mth(rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between reference `self` and `rhs`.
///
/// **Panics** if the shapes are not identical.
impl<'a, T, U> $trt<NArray<U>> for &'a NArray<T>
where
    T: Promote<U>,
    U: Element,
{
    type Output = Promoted<T, U>;
    fn $mth(self, rhs: NArray<U>) -> Self::Output {
        self.$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and `rhs`.
///
/// **Panics** if the shapes are not identical.
impl<T, U> $trt<NArray<U>> for NArray<T>
where
    T: Promote<U>,
    U: Element,
{
    type Output = Promoted<T, U>;
    fn $mth(self, rhs: NArray<U>) -> Self::Output {
        (&self).$mth(&rhs)
    }
}

/// Perform elementwise
#[doc=$doc]
/// between the reference `self` and the scalar `x`,
/// and return the result as a new array.
impl<'a, T, U> $trt<U> for &'a NArray<T>
where
    T: Promote<U>,
    U: ScalarOperand,
{
    type Output = Promoted<T, U>;
    fn $mth(self, x: U) -> Self::Output {
        let x = <T as Promote<U>>::promote_rhs(x);
        self.mapv(move |a| {
            let a = <T as Promote<U>>::promote_lhs(a);
            a $operator x
        })
    }
}

/// Perform elementwise
#[doc=$doc]
/// between `self` and the scalar `x`.
impl<T, U> $trt<U> for NArray<T>
where
    T: Promote<U>,
    U: ScalarOperand,
{
    type Output = Promoted<T, U>;
    fn $mth(self, x: U) -> Self::Output {
        (&self).$mth(x)
    }
}
    );
);

macro_rules! if_commutative {
    (Commute { $a:expr } or { $b:expr }) => {
        $a
    };
    (Ordered { $a:expr } or { $b:expr }) => {
        $b
    };
}

macro_rules! impl_scalar_lhs_op {
    // $commutative flag: Ordered keeps the scalar on the left of the operator
    ($scalar:ty, $commutative:ident, $operator:tt, $trt:ident, $mth:ident, $doc:expr) => (
/// Perform elementwise
#[doc=$doc]
/// between the scalar `self` and array `rhs`,
/// and return the result as a new array.
impl<'a, T> $trt<&'a NArray<T>> for $scalar
where
    $scalar: Promote<T>,
    T: Element,
{
    type Output = NArray<<$scalar as Promote<T>>::Output>;
    fn $mth(self, rhs: &'a NArray<T>) -> Self::Output {
        let x = <$scalar as Promote<T>>::promote_lhs(self);
        if_commutative!($commutative {
            rhs.mapv(move |a| {
                let a = <$scalar as Promote<T>>::promote_rhs(a);
                a $operator x
            })
        } or {
            rhs.mapv(move |a| {
                let a = <$scalar as Promote<T>>::promote_rhs(a);
                x $operator a
            })
        })
    }
}

impl<T> $trt<NArray<T>> for $scalar
where
    $scalar: Promote<T>,
    T: Element,
{
    type Output = NArray<<$scalar as Promote<T>>::Output>;
    fn $mth(self, rhs: NArray<T>) -> Self::Output {
        self $operator &rhs
    }
}
    );
}

mod arithmetic_ops {
    use super::*;

    impl_binary_op!(Add, +, add, try_add, "add", "addition");
    impl_binary_op!(Sub, -, sub, try_sub, "subtract", "subtraction");
    impl_binary_op!(Mul, *, mul, try_mul, "multiply", "multiplication");
    impl_binary_op!(Div, /, div, try_div, "divide", "division");

    macro_rules! all_scalar_ops {
        ($int_scalar:ty) => (
            impl_scalar_lhs_op!($int_scalar, Commute, +, Add, add, "addition");
            impl_scalar_lhs_op!($int_scalar, Ordered, -, Sub, sub, "subtraction");
            impl_scalar_lhs_op!($int_scalar, Commute, *, Mul, mul, "multiplication");
            impl_scalar_lhs_op!($int_scalar, Ordered, /, Div, div, "division");
        );
    }

    all_scalar_ops!(i8);
    all_scalar_ops!(u8);
    all_scalar_ops!(i16);
    all_scalar_ops!(u16);
    all_scalar_ops!(i32);
    all_scalar_ops!(u32);
    all_scalar_ops!(i64);
    all_scalar_ops!(u64);
    all_scalar_ops!(isize);
    all_scalar_ops!(usize);
    all_scalar_ops!(f32);
    all_scalar_ops!(f64);
    all_scalar_ops!(C32);
    all_scalar_ops!(C64);

    impl<'a, T> Neg for &'a NArray<T>
    where
        T: Element + Neg<Output = T>,
    {
        type Output = NArray<T>;
        /// Perform an elementwise negation of reference `self` and return the
        /// result as a new array.
        fn neg(self) -> NArray<T> {
            self.mapv(|x| -x)
        }
    }

    impl<T> Neg for NArray<T>
    where
        T: Element + Neg<Output = T>,
    {
        type Output = NArray<T>;
        fn neg(self) -> NArray<T> {
            -&self
        }
    }
}

mod assign_ops {
    use super::*;

    macro_rules! impl_assign_op {
        ($trt:ident, $method:ident, $try_method:ident, $operator:tt, $name:expr, $doc:expr) => {
            impl<T: Element> NArray<T> {
                #[doc=$doc]
                /// `rhs` into `self` in place. The result is written to the
                /// buffer, so every view of it sees the change.
                ///
                /// **Errors** with a shape error if the shapes are not
                /// identical.
                pub fn $try_method(&self, rhs: &NArray<T>) -> Result<()> {
                    if !self.shape().same_shape(rhs.shape()) {
                        return Err(error::incompatible_shapes(self.shape(), rhs.shape(), $name));
                    }
                    let snapshot;
                    let src = if self.is_view_of(rhs) {
                        snapshot = rhs.deepcopy();
                        &snapshot
                    } else {
                        rhs
                    };
                    for (dst, b) in self.cells().iter().zip(src.iter()) {
                        dst.set(dst.get() $operator b);
                    }
                    Ok(())
                }
            }

            #[doc=$doc]
            /// `rhs` into `self` in place.
            ///
            /// **Panics** if the shapes are not identical.
            impl<'a, T: Element> $trt<&'a NArray<T>> for NArray<T> {
                fn $method(&mut self, rhs: &NArray<T>) {
                    if let Err(e) = self.$try_method(rhs) {
                        op_failed(e)
                    }
                }
            }

            #[doc=$doc]
            /// the scalar `rhs` into `self` in place.
            impl<T: ScalarOperand> $trt<T> for NArray<T> {
                fn $method(&mut self, rhs: T) {
                    self.mapv_inplace(move |x| x $operator rhs);
                }
            }
        };
    }

    impl_assign_op!(AddAssign, add_assign, try_add_assign, +, "add", "Perform `self += rhs` as elementwise addition of");
    impl_assign_op!(SubAssign, sub_assign, try_sub_assign, -, "subtract", "Perform `self -= rhs` as elementwise subtraction of");
    impl_assign_op!(MulAssign, mul_assign, try_mul_assign, *, "multiply", "Perform `self *= rhs` as elementwise multiplication of");
    impl_assign_op!(DivAssign, div_assign, try_div_assign, /, "divide", "Perform `self /= rhs` as elementwise division of");
}

macro_rules! impl_comparison {
    ($($mth:ident, $operator:tt, $doc:expr;)*) => {
        impl<T: Element> NArray<T> {
            $(
            #[doc=$doc]
            ///
            /// Both operands are promoted to their common type before the
            /// comparison. **Errors** with a shape error if the shapes are not
            /// identical.
            pub fn $mth<U>(&self, rhs: &NArray<U>) -> Result<NArray<bool>>
            where
                T: Promote<U>,
                U: Element,
            {
                self.zip_map(rhs, "compare", |a, b| {
                    let (a, b) = (<T as Promote<U>>::promote_lhs(a), <T as Promote<U>>::promote_rhs(b));
                    a $operator b
                })
            }
            )*
        }
    };
}

impl_comparison! {
    equal, ==, "Elementwise `==`, as a boolean array.";
    not_equal, !=, "Elementwise `!=`, as a boolean array.";
    less, <, "Elementwise `<`, as a boolean array.";
    less_equal, <=, "Elementwise `<=`, as a boolean array.";
    greater, >, "Elementwise `>`, as a boolean array.";
    greater_equal, >=, "Elementwise `>=`, as a boolean array.";
}

// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::any::Any;

use num_traits::Zero;

use crate::error::{self, from_kind, ErrorKind};
use crate::{Element, MatmulType, NArray, Promote, Promoted, Result, Shape};

/// Matrix product of `a` and `b`, each of rank one or two.
///
/// The operand shapes are classified with
/// [`Shape::matmul_type`](crate::Shape::matmul_type); a rank one left
/// operand acts as a row vector and a rank one right operand as a column
/// vector. The result has the shape given by
/// [`Shape::product_shape`](crate::Shape::product_shape) and the promoted
/// element type. `f32` and `f64` products use the `matrixmultiply` kernels.
///
/// **Errors** with a shape error if the operands cannot be multiplied.
///
/// ```
/// use narray::{matmul, narray};
///
/// let a = narray![[1, 2], [3, 4]];
/// let b = narray![[5., 6.], [7., 8.]];
/// assert_eq!(matmul(&a, &b).unwrap(), narray![[19., 22.], [43., 50.]]);
/// assert_eq!(matmul(&narray![1, 1], &a).unwrap(), narray![4, 6]);
/// ```
pub fn matmul<T, U>(a: &NArray<T>, b: &NArray<U>) -> Result<Promoted<T, U>>
where
    T: Promote<U>,
    U: Element,
{
    let (m, k, n) = Shape::gemm_dims(a.shape(), b.shape())?;
    let shape = Shape::product_shape(a.shape(), b.shape())?;
    let lhs: Vec<<T as Promote<U>>::Output> = a.iter().map(<T as Promote<U>>::promote_lhs).collect();
    let rhs: Vec<<T as Promote<U>>::Output> = b.iter().map(<T as Promote<U>>::promote_rhs).collect();
    let mut out = vec![<<T as Promote<U>>::Output>::zero(); m * n];
    gemm(m, k, n, &lhs, &rhs, &mut out);
    NArray::from_shape_vec(shape, out)
}

/// C ← A B for row-major `m × k` A and `k × n` B.
#[allow(clippy::ptr_arg)]
fn gemm<A: Element>(m: usize, k: usize, n: usize, lhs: &Vec<A>, rhs: &Vec<A>, out: &mut Vec<A>) {
    macro_rules! gemm {
        ($ty:ty, $func:ident) => {
            if let (Some(a), Some(b), Some(c)) = (
                (lhs as &dyn Any).downcast_ref::<Vec<$ty>>(),
                (rhs as &dyn Any).downcast_ref::<Vec<$ty>>(),
                (&mut *out as &mut dyn Any).downcast_mut::<Vec<$ty>>(),
            ) {
                // Safety: the three buffers hold m × k, k × n and m × n
                // elements laid out with the row strides passed here.
                unsafe {
                    matrixmultiply::$func(
                        m,
                        k,
                        n,
                        1.,
                        a.as_ptr(),
                        k as isize,
                        1,
                        b.as_ptr(),
                        n as isize,
                        1,
                        0.,
                        c.as_mut_ptr(),
                        n as isize,
                        1,
                    );
                }
                return;
            }
        };
    }
    gemm!(f32, sgemm);
    gemm!(f64, dgemm);

    gemm_general(m, k, n, lhs, rhs, out)
}

fn gemm_general<A: Element>(m: usize, k: usize, n: usize, lhs: &[A], rhs: &[A], out: &mut [A]) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = A::zero();
            for l in 0..k {
                sum = sum + lhs[i * k + l] * rhs[l * n + j];
            }
            out[i * n + j] = sum;
        }
    }
}

/// Dot product of `a` and `b`.
///
/// Two vectors of equal length give the sum of their elementwise products
/// as a one element array of shape `(1,)`. Vector-matrix, matrix-vector and
/// matrix-matrix operands give their [`matmul`] product.
///
/// **Errors** with a shape error if the operands cannot be multiplied.
pub fn dot<T, U>(a: &NArray<T>, b: &NArray<U>) -> Result<Promoted<T, U>>
where
    T: Promote<U>,
    U: Element,
{
    match Shape::matmul_type(a.shape(), b.shape()) {
        MatmulType::Invalid => Err(error::incompatible_shapes(a.shape(), b.shape(), "dot")),
        MatmulType::Dot => {
            let sum = a.iter().zip(b.iter()).fold(<<T as Promote<U>>::Output>::zero(), |acc, (x, y)| {
                acc + <T as Promote<U>>::promote_lhs(x) * <T as Promote<U>>::promote_rhs(y)
            });
            Ok(NArray::from_vec(vec![sum]))
        }
        MatmulType::RowMat | MatmulType::MatCol | MatmulType::MatMat => matmul(a, b),
    }
}

/// Sum of `conj(a[i]) * b[i]` over the elements of two arrays of identical
/// shape, returned as a zero dimensional array.
///
/// **Errors** with a shape error if the shapes differ.
///
/// ```
/// use narray::{narray, vdot, Complex};
///
/// let a = narray![Complex::new(0.0f64, 1.0), Complex::new(2.0, 0.0)];
/// let b = narray![Complex::new(0.0f64, 1.0), Complex::new(1.0, 0.0)];
/// assert_eq!(vdot(&a, &b).unwrap().into_scalar().unwrap(), Complex::new(3.0, 0.0));
/// ```
pub fn vdot<T, U>(a: &NArray<T>, b: &NArray<U>) -> Result<Promoted<T, U>>
where
    T: Promote<U>,
    U: Element,
{
    if !a.shape().same_shape(b.shape()) {
        return Err(error::incompatible_shapes(a.shape(), b.shape(), "vdot"));
    }
    let sum = a.iter().zip(b.iter()).fold(<<T as Promote<U>>::Output>::zero(), |acc, (x, y)| {
        acc + <T as Promote<U>>::promote_lhs(x).conj() * <T as Promote<U>>::promote_rhs(y)
    });
    Ok(NArray::scalar(sum))
}

/// Elementwise product of two arrays of identical shape, of any rank.
///
/// **Errors** with a shape error if the shapes differ.
pub fn hadamard<T, U>(a: &NArray<T>, b: &NArray<U>) -> Result<Promoted<T, U>>
where
    T: Promote<U>,
    U: Element,
{
    a.try_mul(b)
}

/// Cross product of two vectors of length 2 or 3.
///
/// A vector of length 2 has an implicit zero third component; the result
/// always has three components.
///
/// **Errors** with a shape error if either operand is not of shape `(2,)`
/// or `(3,)`.
///
/// ```
/// use narray::{cross, narray};
///
/// let x = narray![1, 0, 0];
/// let y = narray![0, 1];
/// assert_eq!(cross(&x, &y).unwrap(), narray![0, 0, 1]);
/// ```
pub fn cross<T, U>(a: &NArray<T>, b: &NArray<U>) -> Result<Promoted<T, U>>
where
    T: Promote<U>,
    U: Element,
{
    fn components<E: Element>(v: &NArray<E>) -> Option<[E; 3]> {
        match v.shape().dims() {
            [2] | [3] => {
                let mut c = [E::zero(); 3];
                for (dst, x) in c.iter_mut().zip(v.iter()) {
                    *dst = x;
                }
                Some(c)
            }
            _ => None,
        }
    }
    let (a3, b3) = match (components(a), components(b)) {
        (Some(a3), Some(b3)) => (a3, b3),
        _ => {
            return Err(from_kind(
                ErrorKind::Shape,
                format!(
                    "cross product needs shapes (2,) or (3,), got {} and {}",
                    a.shape(),
                    b.shape()
                ),
            ))
        }
    };
    let [x, y, z] = a3.map(<T as Promote<U>>::promote_lhs);
    let [p, q, r] = b3.map(<T as Promote<U>>::promote_rhs);
    Ok(NArray::from_vec(vec![y * r - z * q, z * p - x * r, x * q - y * p]))
}

extern crate approx;
extern crate narray;
extern crate narray_rand;
extern crate rand;
extern crate rand_distr;

extern crate numeric_tests;

use std::fmt;

use narray_rand::RandomExt;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use narray::prelude::*;

use num_traits::{AsPrimitive, Float};
use rand_distr::{Distribution, Normal, StandardNormal};

use approx::{assert_abs_diff_eq, assert_relative_eq};

fn kahan_sum<A>(iter: impl Iterator<Item = A>) -> A
where A: Element
{
    let mut sum = A::zero();
    let mut compensation = A::zero();

    for elt in iter {
        let y = elt - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }

    sum
}

// simple, slow, correct (hopefully) mat mul
fn reference_mat_mul<A>(lhs: &NArray<A>, rhs: &NArray<A>) -> NArray<A>
where A: Element
{
    let (m, k) = (lhs.shape().dims()[0], lhs.shape().dims()[1]);
    let n = rhs.shape().dims()[1];
    let (l, r) = (lhs.to_vec(), rhs.to_vec());

    let mut res_elems = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            res_elems.push(kahan_sum((0..k).map(|x| l[i * k + x] * r[x * n + j])));
        }
    }

    NArray::from_shape_vec([m, n], res_elems).unwrap()
}

fn gen<A, Sh>(shape: Sh, rng: &mut SmallRng) -> NArray<A>
where
    Sh: Into<Shape>,
    A: Element + Float,
    StandardNormal: Distribution<A>,
{
    NArray::random_using(shape, Normal::new(A::zero(), A::one()).unwrap(), rng)
}

fn gen_complex<A, Sh>(shape: Sh, rng: &mut SmallRng) -> NArray<Complex<A>>
where
    Sh: Into<Shape>,
    A: Element + Float,
    StandardNormal: Distribution<A>,
{
    let shape = shape.into();
    let re = gen::<A, _>(shape.clone(), rng);
    let im = gen::<A, _>(shape.clone(), rng);
    let elems = re.iter().zip(im.iter()).map(|(r, i)| Complex::new(r, i)).collect();
    NArray::from_shape_vec(shape, elems).unwrap()
}

#[test]
fn accurate_eye_f32()
{
    let rng = &mut SmallRng::from_os_rng();
    for i in 1..16 {
        let eye = NArray::<f32>::eye(i);
        for j in 1..16 {
            let a = gen::<f32, _>([i, j], rng);
            let a2 = matmul(&eye, &a).unwrap();
            assert_abs_diff_eq!(a, a2, epsilon = 1e-6);
            let at = a.transpose().unwrap();
            let a3 = matmul(&at, &eye).unwrap();
            assert_abs_diff_eq!(at, a3, epsilon = 1e-6);
        }
    }
    // pick a few random sizes
    for _ in 0..5 {
        let i = rng.random_range(15..200);
        let j = rng.random_range(15..200);
        println!("Testing size {} by {}", i, j);
        let a = gen::<f32, _>([i, j], rng);
        let eye = NArray::<f32>::eye(i);
        let a2 = matmul(&eye, &a).unwrap();
        assert_abs_diff_eq!(a, a2, epsilon = 1e-6);
    }
}

#[test]
fn accurate_eye_f64()
{
    let rng = &mut SmallRng::from_os_rng();
    let abs_tol = 1e-15;
    for i in 1..16 {
        let eye = NArray::<f64>::eye(i);
        for j in 1..16 {
            let a = gen::<f64, _>([i, j], rng);
            let a2 = matmul(&eye, &a).unwrap();
            assert_abs_diff_eq!(a, a2, epsilon = abs_tol);
            let at = a.transpose().unwrap();
            let a3 = matmul(&at, &eye).unwrap();
            assert_abs_diff_eq!(at, a3, epsilon = abs_tol);
        }
    }
}

#[test]
fn accurate_eye_matrix_type()
{
    let rng = &mut SmallRng::from_os_rng();
    let a = Matrix::from_array(gen::<f64, _>([7, 5], rng)).unwrap();
    let product = &Matrix::<f64>::eye(7) * &a;
    assert_eq!((product.rows(), product.cols()), (7, 5));
    assert_abs_diff_eq!(product.into_array(), a.into_array(), epsilon = 1e-15);
}

#[test]
fn accurate_mul_f32()
{
    accurate_mul_float::<f32>(1e-5);
}

#[test]
fn accurate_mul_f64()
{
    accurate_mul_float::<f64>(1e-14);
}

/// Generate random sized matrices, multiply them with `matmul` and with the
/// reference implementation, and return both products.
fn random_matrix_mul<A>(rng: &mut SmallRng, generator: fn(Shape, &mut SmallRng) -> NArray<A>) -> (NArray<A>, NArray<A>)
where A: Element
{
    let m = rng.random_range(15..128);
    let k = rng.random_range(15..128);
    let n = rng.random_range(15..256);
    let a = generator(Shape::from([m, k]), rng);
    let b = generator(Shape::from([k, n]), rng);

    println!("Testing size {} by {} by {}", m, k, n);
    let c = matmul(&a, &b).unwrap();
    let reference = reference_mat_mul(&a, &b);

    (c, reference)
}

fn accurate_mul_float<A>(limit: f64)
where
    A: Element + Float + AsPrimitive<f64>,
    StandardNormal: Distribution<A>,
    A: fmt::Debug,
{
    // pick a few random sizes
    let mut rng = SmallRng::from_os_rng();
    for _ in 0..10 {
        let (c, reference) = random_matrix_mul(&mut rng, gen::<A, Shape>);

        let max_diff = c
            .iter()
            .zip(reference.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(A::zero(), A::max);
        let max_elt = reference.iter().map(A::abs).fold(A::zero(), A::max);
        println!("Max elt diff={:?}, max={:?}, ratio={:.4e}", max_diff, max_elt, (max_diff / max_elt).as_());
        assert!((max_diff / max_elt).as_() < limit,
                "Expected relative norm diff < {:e}, found {:?} / {:?}", limit, max_diff, max_elt);
    }
}

#[test]
fn accurate_mul_complex32()
{
    accurate_mul_complex::<f32>(1e-5);
}

#[test]
fn accurate_mul_complex64()
{
    accurate_mul_complex::<f64>(1e-14);
}

fn accurate_mul_complex<A>(limit: f64)
where
    A: Element + Float + AsPrimitive<f64>,
    Complex<A>: Element,
    StandardNormal: Distribution<A>,
    A: fmt::Debug,
{
    let mut rng = SmallRng::from_os_rng();
    for _ in 0..6 {
        let (c, reference) = random_matrix_mul(&mut rng, gen_complex::<A, Shape>);

        let max_diff = c
            .iter()
            .zip(reference.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(A::zero(), A::max);
        let max_elt = reference.iter().map(|z| z.abs()).fold(A::zero(), A::max);
        println!("Max elt diff={:?}, max={:?}, ratio={:.4e}", max_diff, max_elt, (max_diff / max_elt).as_());
        assert!((max_diff / max_elt).as_() < limit,
                "Expected relative norm diff < {:e}, found {:?} / {:?}", limit, max_diff, max_elt);
    }
}

#[test]
fn accurate_vector_dot()
{
    let rng = &mut SmallRng::from_os_rng();
    for len in [1usize, 2, 17, 500, 4096] {
        let a = gen::<f64, _>(len, rng);
        let b = gen::<f64, _>(len, rng);
        let d = dot(&a, &b).unwrap();
        assert_eq!(d.shape().dims(), &[1]);
        let reference = kahan_sum(a.iter().zip(b.iter()).map(|(x, y)| x * y));
        assert_abs_diff_eq!(d.get(0).unwrap(), reference, epsilon = 1e-10);
    }
}

#[test]
fn vdot_of_self_is_squared_norm()
{
    let rng = &mut SmallRng::from_os_rng();
    let z = gen_complex::<f64, _>(1000usize, rng);
    let v = vdot(&z, &z).unwrap().into_scalar().unwrap();
    let reference = kahan_sum(z.iter().map(|x| x.norm_sqr()));
    assert_relative_eq!(v.real(), reference, max_relative = 1e-12);
    assert_eq!(v.imag(), 0.);
}

#[test]
fn det_of_triangular_is_diagonal_product()
{
    let rng = &mut SmallRng::from_os_rng();
    for n in 1..7 {
        let mut elems = gen::<f64, _>([n, n], rng).to_vec();
        for i in 0..n {
            for j in 0..i {
                elems[i * n + j] = 0.;
            }
        }
        let diagonal: f64 = (0..n).map(|i| elems[i * n + i]).product();
        let m = NArray::from_shape_vec([n, n], elems).unwrap();
        assert_relative_eq!(det(&m).unwrap(), diagonal, epsilon = 1e-12, max_relative = 1e-10);
    }
}

#[test]
fn det_is_multiplicative()
{
    let rng = &mut SmallRng::from_os_rng();
    for n in 2..6 {
        let a = gen::<f64, _>([n, n], rng);
        let b = gen::<f64, _>([n, n], rng);
        let ab = matmul(&a, &b).unwrap();
        let expected = det(&a).unwrap() * det(&b).unwrap();
        assert_relative_eq!(det(&ab).unwrap(), expected, epsilon = 1e-9, max_relative = 1e-8);
    }
}

#[test]
fn accurate_sum_and_mean()
{
    let rng = &mut SmallRng::from_os_rng();
    let a = gen::<f64, _>([64, 100], rng);
    let reference = kahan_sum(a.iter());
    assert_abs_diff_eq!(a.sum(), reference, epsilon = 1e-9);
    assert_abs_diff_eq!(a.mean().unwrap(), reference / 6400., epsilon = 1e-12);

    let rows = a.sum_axis(1).unwrap();
    for i in 0..64 {
        let row = a.view_at(i).unwrap();
        assert_abs_diff_eq!(rows.get(i).unwrap(), kahan_sum(row.iter()), epsilon = 1e-11);
    }
}

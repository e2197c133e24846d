#![allow(clippy::float_cmp)]

extern crate narray;

use defmac::defmac;
use itertools::Itertools;
use narray::prelude::*;
use narray::{ErrorKind, Nested};

#[test]
fn construct_and_query()
{
    let a = narray![[1, 2, 3], [4, 5, 6]];
    assert_eq!(a.shape().dims(), &[2, 3]);
    assert_eq!(a.ndim(), 2);
    assert_eq!(a.len(), 6);
    assert!(!a.is_empty());
    assert_eq!(a.offset(), 0);

    let z = NArray::<f64>::zeros([3, 0]);
    assert!(z.is_empty());
    assert_eq!(z.len(), 0);
    assert_eq!(z.to_vec(), Vec::<f64>::new());

    let s = NArray::scalar(1.5f32);
    assert_eq!(s.ndim(), 0);
    assert_eq!(s.into_scalar().unwrap(), 1.5);
}

#[test]
fn nested_input()
{
    let rows = Nested::list((0..3).map(|i| Nested::from(vec![i, i * 10])));
    let a = NArray::from_nested(&rows).unwrap();
    assert_eq!(a, narray![[0, 0], [1, 10], [2, 20]]);

    let jagged = Nested::list(vec![Nested::from(vec![1.]), Nested::from(vec![2., 3.])]);
    assert_eq!(NArray::from_nested(&jagged).unwrap_err().kind(), ErrorKind::Value);
}

#[test]
fn views_share_the_buffer()
{
    let a = NArray::from_vec((0..12).collect_vec());
    let b = a.reshape([3, 4]).unwrap();
    let row = b.view_at(1).unwrap();
    let elt = row.view_at(-1).unwrap();
    assert_eq!(row.offset(), 4);
    assert_eq!(elt.offset(), 7);
    assert_eq!(elt.ndim(), 0);

    elt.assign_scalar(70).unwrap();
    assert_eq!(a.get(7).unwrap(), 70);
    assert_eq!(b.view_at(1).unwrap().to_vec(), vec![4, 5, 6, 70]);

    for view in [&b, &row, &elt] {
        assert!(view.is_view_of(&a));
    }

    let copy = b.deepcopy();
    assert!(!copy.is_view_of(&a));
    copy.fill(0);
    assert_eq!(a.get(7).unwrap(), 70);
    assert_eq!(copy.get(7).unwrap(), 0);
}

#[test]
fn clone_is_a_view()
{
    let a = narray![1., 2., 3.];
    let b = a.clone();
    b.set(0, -1.).unwrap();
    assert_eq!(a, narray![-1., 2., 3.]);

    let c = a.ravel();
    c.mapv_inplace(|x| x * 2.);
    assert_eq!(b.to_vec(), vec![-2., 4., 6.]);
}

#[test]
fn negative_and_out_of_range_indices()
{
    let a = narray![[1, 2], [3, 4], [5, 6]];
    defmac!(kind e => e.unwrap_err().kind());

    assert_eq!(a.get(-1).unwrap(), 6);
    assert_eq!(a.get(-6).unwrap(), 1);
    assert_eq!(kind!(a.get(6)), ErrorKind::Index);
    assert_eq!(kind!(a.get(-7)), ErrorKind::Index);
    assert_eq!(kind!(a.set(10, 0)), ErrorKind::Index);
    assert_eq!(kind!(a.view_at(3)), ErrorKind::Index);
    assert_eq!(kind!(a.view_at(-4)), ErrorKind::Index);
    assert_eq!(a.view_at(-3).unwrap(), narray![1, 2]);
    assert_eq!(kind!(NArray::scalar(1).view_at(0)), ErrorKind::Index);
}

#[test]
fn reshape_checks_size()
{
    let a = narray![[1, 2, 3], [4, 5, 6]];
    assert_eq!(a.reshape([3, 2]).unwrap(), narray![[1, 2], [3, 4], [5, 6]]);
    assert_eq!(a.reshape(6).unwrap(), narray![1, 2, 3, 4, 5, 6]);
    assert_eq!(a.reshape([4, 2]).unwrap_err().kind(), ErrorKind::Value);
    let one = narray![9];
    assert_eq!(one.reshape(Shape::scalar()).unwrap().ndim(), 0);
}

#[test]
fn assign_between_views()
{
    let a = NArray::from_vec((0..6).collect_vec());
    let front = a.reshape([2, 3]).unwrap().view_at(0).unwrap();
    let back = a.reshape([2, 3]).unwrap().view_at(1).unwrap();
    front.assign(&back).unwrap();
    assert_eq!(a.to_vec(), vec![3, 4, 5, 3, 4, 5]);

    // overlapping source and destination
    let head = NArray::from_shape_buffer(4, a.buffer(), 0).unwrap();
    let tail = NArray::from_shape_buffer(4, a.buffer(), 2).unwrap();
    head.assign(&tail).unwrap();
    assert_eq!(a.to_vec(), vec![5, 3, 4, 5, 4, 5]);

    assert_eq!(front.assign(&narray![1, 2]).unwrap_err().kind(), ErrorKind::Value);
    assert_eq!(front.assign_slice(&[1, 2, 3, 4]).unwrap_err().kind(), ErrorKind::Value);
}

#[test]
fn transpose_and_flatten_copy()
{
    let a = narray![[1, 2, 3], [4, 5, 6]];
    let t = a.transpose().unwrap();
    assert_eq!(t, narray![[1, 4], [2, 5], [3, 6]]);
    assert!(!t.is_view_of(&a));
    assert_eq!(narray![1, 2].transpose().unwrap().shape().dims(), &[1, 2]);
    assert_eq!(NArray::<u8>::zeros([1, 1, 1]).transpose().unwrap_err().kind(), ErrorKind::Shape);

    let f = a.flatten();
    assert_eq!(f.shape().dims(), &[6]);
    assert!(!f.is_view_of(&a));
}

#[test]
fn iteration_order_is_row_major()
{
    let a = narray![[[1, 2], [3, 4]], [[5, 6], [7, 8]]];
    assert_eq!(a.iter().collect_vec(), (1..=8).collect_vec());
    assert_eq!(a.iter().rev().take(2).collect_vec(), vec![8, 7]);
    assert_eq!(a.iter().len(), 8);
    let mut total = 0;
    for x in &a {
        total += x;
    }
    assert_eq!(total, 36);
}

#[test]
fn map_changes_element_type()
{
    let a = narray![[1, -2], [3, -4]];
    let b: NArray<f64> = a.mapv(|x| x as f64 / 2.);
    assert_eq!(b, narray![[0.5, -1.], [1.5, -2.]]);
    let c = a.map(|x| *x > 0);
    assert_eq!(c.to_vec(), vec![true, false, true, false]);
    assert_eq!(c.shape(), a.shape());
}

#[test]
fn stack_rows()
{
    let rows = (0..4).map(|i| NArray::from_elem(3, i)).collect_vec();
    let s = stack(&rows).unwrap();
    assert_eq!(s.shape().dims(), &[4, 3]);
    assert_eq!(s.view_at(2).unwrap(), narray![2, 2, 2]);
    let stacked_again = stack(&[s.clone(), s]).unwrap();
    assert_eq!(stacked_again.shape().dims(), &[2, 4, 3]);
}

#[test]
fn scalar_conversions()
{
    let a = narray![[2.75]];
    assert_eq!(f64::try_from(&a).unwrap(), 2.75);
    assert_eq!(i32::try_from(&a).unwrap(), 2);
    let err = f32::try_from(&narray![1., 2.]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
    assert!(u8::try_from(&narray![-1]).is_err());
}

#[test]
fn collect_and_convert()
{
    let a: NArray<i64> = (1..4).collect();
    assert_eq!(a, NArray::from(vec![1, 2, 3]));
    assert_eq!(NArray::from(&[1, 2, 3][..]), a);
    assert_ne!(a, a.reshape([3, 1]).unwrap());
}

#[test]
fn equality_across_element_types()
{
    let z = narray![C64::new(2., 0.), C64::new(-1., 0.)];
    let x = narray![2f64, -1.];
    assert!(z == x);
    assert!(x == z);
    assert!(z != narray![2f64, 1.]);
    assert!(z != x.reshape([2, 1]).unwrap());
}

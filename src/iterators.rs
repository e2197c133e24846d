// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cell::Cell;
use std::iter::FusedIterator;
use std::slice;

/// An iterator over the elements of an array, in row-major order.
///
/// Elements are yielded by value; see [`NArray::iter`](crate::NArray::iter).
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Cell<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(cells: &'a [Cell<T>]) -> Self {
        Iter { inner: cells.iter() }
    }
}

impl<'a, T: Copy> Iterator for Iter<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next().map(Cell::get)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, T) -> Acc,
    {
        self.inner.fold(init, |acc, c| g(acc, c.get()))
    }
}

impl<'a, T: Copy> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(Cell::get)
    }
}

impl<'a, T: Copy> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, T: Copy> FusedIterator for Iter<'a, T> {}

// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Array's storage: a reference counted block of cells.
///
/// Cloning a `Buffer` makes another handle to the same memory; the elements
/// are released when the last handle is dropped. Writes go through the
/// cells, so they are visible through every handle.
///
/// `Buffer` (and with it every array type) is neither `Send` nor `Sync`.
pub struct Buffer<T> {
    cells: Rc<[Cell<T>]>,
}

impl<T> Buffer<T> {
    /// Take ownership of the elements of `v`.
    pub fn from_vec(v: Vec<T>) -> Self {
        Buffer {
            cells: v.into_iter().map(Cell::new).collect(),
        }
    }

    /// Number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return `true` if both handles refer to the same memory.
    #[inline]
    pub fn ptr_eq(&self, other: &Buffer<T>) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }

    /// Number of live handles (arrays, views and buffers) to this memory.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.cells)
    }

    #[inline]
    pub(crate) fn cells(&self) -> &[Cell<T>] {
        &self.cells
    }
}

impl<T: Copy> Buffer<T> {
    /// Create a buffer of `len` copies of `elem`.
    pub fn from_elem(len: usize, elem: T) -> Self {
        Buffer {
            cells: (0..len).map(|_| Cell::new(elem)).collect(),
        }
    }

    /// Return the element at `index`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.cells.get(index).map(Cell::get)
    }

    /// Copy the contents out into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.cells.iter().map(Cell::get).collect()
    }
}

impl<T> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Buffer {
            cells: Rc::clone(&self.cells),
        }
    }
}

impl<T: Copy> From<Vec<T>> for Buffer<T> {
    fn from(v: Vec<T>) -> Self {
        Buffer::from_vec(v)
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.cells.iter().map(Cell::get))
            .finish()
    }
}

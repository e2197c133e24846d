// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::NArray;

fn format_array<T, F>(array: &NArray<T>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    T: Copy,
    F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let elems = array.to_vec();
    match array.shape().dims() {
        [] => match elems.first() {
            Some(x) => format(x, f),
            None => Ok(()),
        },
        dims => format_axis(&elems, dims, 0, f, &mut format),
    }
}

/// Write the sub-array `elems` of shape `dims`, `depth` levels below the
/// outermost bracket.
fn format_axis<T, F>(
    elems: &[T],
    dims: &[usize],
    depth: usize,
    f: &mut fmt::Formatter<'_>,
    format: &mut F,
) -> fmt::Result
where
    F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let (len, inner) = match dims.split_first() {
        Some((&len, inner)) => (len, inner),
        None => return Ok(()),
    };
    f.write_str("[")?;
    if inner.is_empty() {
        for (i, elt) in elems.iter().take(len).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            format(elt, f)?;
        }
    } else {
        let stride: usize = inner.iter().product();
        for i in 0..len {
            if i > 0 {
                // One blank line between blocks per level of nesting left.
                f.write_str(",")?;
                for _ in 0..inner.len() {
                    f.write_str("\n")?;
                }
                for _ in 0..=depth {
                    f.write_str(" ")?;
                }
            }
            let start = i * stride;
            format_axis(&elems[start..start + stride], inner, depth + 1, f, format)?;
        }
    }
    f.write_str("]")
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style.
///
/// ```
/// use narray::narray;
///
/// let a = narray![[1.0, 2.5], [3.0, 4.0]];
/// assert_eq!(format!("{:.1}", a), "[[1.0, 2.5],\n [3.0, 4.0]]");
/// ```
impl<T: Copy + fmt::Display> fmt::Display for NArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, followed by its shape.
impl<T: Copy + fmt::Debug> fmt::Debug for NArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Add extra information for Debug
        format_array(self, f, <_>::fmt)?;
        write!(f, " shape={}, offset={}", self.shape(), self.offset())
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters used
/// to each element.
impl<T: Copy + fmt::LowerExp> fmt::LowerExp for NArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `UpperExp` and apply the formatting parameters used
/// to each element.
impl<T: Copy + fmt::UpperExp> fmt::UpperExp for NArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

#[cfg(test)]
mod tests {
    use crate::{narray, Complex, NArray};

    #[test]
    fn display_ranks() {
        assert_eq!(format!("{}", NArray::scalar(5)), "5");
        assert_eq!(format!("{}", narray![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format!("{}", narray![[1, 2], [3, 4]]), "[[1, 2],\n [3, 4]]");
        let a = narray![[[1, 2], [3, 4]], [[5, 6], [7, 8]]];
        assert_eq!(format!("{}", a), "[[[1, 2],\n  [3, 4]],\n\n [[5, 6],\n  [7, 8]]]");
    }

    #[test]
    fn display_empty() {
        let a = NArray::<f32>::zeros([0]);
        assert_eq!(format!("{}", a), "[]");
        let b = NArray::<f32>::zeros([2, 0]);
        assert_eq!(format!("{}", b), "[[],\n []]");
    }

    #[test]
    fn formatter_options_reach_elements() {
        let a = narray![1.0f64, 0.5];
        assert_eq!(format!("{:.2}", a), "[1.00, 0.50]");
        assert_eq!(format!("{:4}", narray![1, 22]), "[   1,   22]");
        assert_eq!(format!("{:e}", narray![1500.0f64]), "[1.5e3]");
        let c = narray![Complex::new(1.0f64, -2.0)];
        assert_eq!(format!("{}", c), "[1 - 2j]");
    }

    #[test]
    fn debug_shows_shape() {
        let a = narray![[1, 2], [3, 4]];
        assert_eq!(format!("{:?}", a.view_at(1).unwrap()), "[3, 4] shape=(2,), offset=2");
    }
}

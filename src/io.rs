// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading and writing arrays.
//!
//! Two formats are supported:
//!
//! - The *array file* format keeps the shape of an array of any rank. The
//!   first line is the marker `narray::NArray`, the second line holds the
//!   extents and the third line the elements in row-major order, both
//!   separated by whitespace.
//! - *Delimited text* holds at most two dimensions: one row per line, the
//!   elements of a row separated by a delimiter character. A file with a
//!   single row reads as a one dimensional array.
//!
//! Elements are written with `Display` and read with `FromStr`, so the
//! element type must format without whitespace (all the real primitive
//! types do).
//!
//! Failing to open, read or write a file is an argument error; malformed
//! content is a value error, or a shape error for rows of inconsistent
//! length.
//!
//! ```
//! use narray::{io, narray, NArray};
//!
//! let a = narray![[1.5, 2.0], [3.0, -4.0]];
//! let mut buf = Vec::new();
//! io::write_narray(&a, &mut buf).unwrap();
//! let b: NArray<f64> = io::read_narray(&buf[..]).unwrap();
//! assert_eq!(a, b);
//! ```

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{from_kind, ErrorKind};
use crate::{ArrayError, NArray, Result, Shape};

/// First line of every array file.
pub const NARRAY_FILE_MARKER: &str = "narray::NArray";

fn io_error(context: &str, err: std::io::Error) -> ArrayError {
    from_kind(ErrorKind::Argument, format!("{}: {}", context, err))
}

fn csv_error(context: &str, err: csv::Error) -> ArrayError {
    let kind = if err.is_io_error() {
        ErrorKind::Argument
    } else {
        ErrorKind::Value
    };
    from_kind(kind, format!("{}: {}", context, err))
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(from_kind(
            ErrorKind::Argument,
            format!("delimiter {:?} is not an ASCII character", delimiter),
        ))
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| io_error(&format!("cannot open \"{}\"", path.display()), e))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| io_error(&format!("cannot create \"{}\"", path.display()), e))
}

fn parse_token<T: FromStr>(token: &str, line: usize) -> Result<T> {
    token.parse().map_err(|_| {
        from_kind(
            ErrorKind::Value,
            format!("cannot parse \"{}\" on line {}", token, line),
        )
    })
}

/// Write `array` in the array file format.
pub fn write_narray<T, W>(array: &NArray<T>, mut writer: W) -> Result<()>
where
    T: Copy + Display,
    W: Write,
{
    let mut write = || -> std::io::Result<()> {
        writeln!(writer, "{}", NARRAY_FILE_MARKER)?;
        let dims: Vec<String> = array.shape().iter().map(|d| d.to_string()).collect();
        writeln!(writer, "{}", dims.join(" "))?;
        let elems: Vec<String> = array.iter().map(|x| x.to_string()).collect();
        writeln!(writer, "{}", elems.join(" "))?;
        writer.flush()
    };
    write().map_err(|e| io_error("cannot write array", e))
}

/// Read an array in the array file format.
///
/// **Errors** with a value error if the marker is missing, a token does
/// not parse, the size of the shape overflows `usize` or the number of
/// elements differs from that size.
pub fn read_narray<T, R>(reader: R) -> Result<NArray<T>>
where
    T: Copy + FromStr,
    R: BufRead,
{
    let mut lines = reader.lines();
    let mut next_line = |what: &str| -> Result<String> {
        match lines.next() {
            Some(line) => line.map_err(|e| io_error("cannot read array", e)),
            None => Err(from_kind(
                ErrorKind::Value,
                format!("array file ends before the {}", what),
            )),
        }
    };
    let marker = next_line("marker")?;
    if marker.trim_end() != NARRAY_FILE_MARKER {
        return Err(from_kind(
            ErrorKind::Value,
            format!("expected the marker \"{}\", found \"{}\"", NARRAY_FILE_MARKER, marker),
        ));
    }
    let dims = next_line("shape")?
        .split_whitespace()
        .map(|token| parse_token::<usize>(token, 2))
        .collect::<Result<Vec<_>>>()?;
    let shape = Shape::from(dims);
    let size = shape.checked_total_size().ok_or_else(|| {
        from_kind(
            ErrorKind::Value,
            format!("the size of shape {} overflows usize", shape),
        )
    })?;
    // An array without elements may end after the shape.
    let data = match next_line("data") {
        Ok(line) => line,
        Err(_) if size == 0 => String::new(),
        Err(e) => return Err(e),
    };
    let v = data
        .split_whitespace()
        .map(|token| parse_token(token, 3))
        .collect::<Result<Vec<T>>>()?;
    NArray::from_shape_vec(shape, v)
}

/// Save `array` to `path` in the array file format.
pub fn save_narray<T, P>(array: &NArray<T>, path: P) -> Result<()>
where
    T: Copy + Display,
    P: AsRef<Path>,
{
    write_narray(array, create(path.as_ref())?)
}

/// Load an array file from `path`.
pub fn load_narray<T, P>(path: P) -> Result<NArray<T>>
where
    T: Copy + FromStr,
    P: AsRef<Path>,
{
    read_narray(open(path.as_ref())?)
}

/// Read delimited text.
///
/// Fields are split on `delimiter` by a `csv` reader without headers;
/// surrounding whitespace is trimmed and empty fields are ignored, as are
/// blank lines. Every row must have as many elements as the first. A row
/// that does not is a shape error, or is dropped when `skip_malformed` is
/// set.
///
/// A single row gives a one dimensional array, otherwise the result has
/// shape `(rows, columns)`.
///
/// **Errors** with an argument error if `delimiter` is not an ASCII
/// character.
///
/// ```
/// use narray::{io, narray};
///
/// let text = "1,2,3\n4,5,6\n";
/// let a = io::read_txt::<i32, _>(text.as_bytes(), ',', false).unwrap();
/// assert_eq!(a, narray![[1, 2, 3], [4, 5, 6]]);
/// ```
pub fn read_txt<T, R>(reader: R, delimiter: char, skip_malformed: bool) -> Result<NArray<T>>
where
    T: Copy + FromStr,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte(delimiter)?)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut v = Vec::new();
    let mut rows = 0;
    let mut cols = 0;
    let mut record = csv::StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(csv_error("cannot read text", e)),
        }
        let lineno = record.position().map_or(0, |pos| pos.line() as usize);
        let row = record
            .iter()
            .filter(|token| !token.is_empty())
            .map(|token| parse_token(token, lineno))
            .collect::<Result<Vec<T>>>()?;
        if row.is_empty() {
            continue;
        }
        if rows > 0 && row.len() != cols {
            if skip_malformed {
                continue;
            }
            return Err(from_kind(
                ErrorKind::Shape,
                format!("line {} has {} elements, expected {}", lineno, row.len(), cols),
            ));
        }
        cols = row.len();
        rows += 1;
        v.extend(row);
    }
    if rows == 1 {
        Ok(NArray::from_vec(v))
    } else {
        NArray::from_shape_vec([rows, cols], v)
    }
}

/// Load delimited text from `path`; see [`read_txt`].
pub fn loadtxt<T, P>(path: P, delimiter: char, skip_malformed: bool) -> Result<NArray<T>>
where
    T: Copy + FromStr,
    P: AsRef<Path>,
{
    read_txt(open(path.as_ref())?, delimiter, skip_malformed)
}

/// Load comma separated values from `path`.
pub fn loadcsv<T, P>(path: P, skip_malformed: bool) -> Result<NArray<T>>
where
    T: Copy + FromStr,
    P: AsRef<Path>,
{
    loadtxt(path, ',', skip_malformed)
}

/// Write an array of at most two dimensions as delimited text, one row
/// per line.
///
/// **Errors** with a shape error for arrays of more than two dimensions,
/// and with an argument error if `delimiter` is not an ASCII character.
pub fn write_txt<T, W>(array: &NArray<T>, writer: W, delimiter: char) -> Result<()>
where
    T: Copy + Display,
    W: Write,
{
    let cols = match array.shape().dims() {
        [] => 1,
        [n] => *n,
        [_, c] => *c,
        _ => {
            return Err(from_kind(
                ErrorKind::Shape,
                format!(
                    "cannot write an array of shape {} as text, at most 2 dimensions are supported",
                    array.shape()
                ),
            ))
        }
    };
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter_byte(delimiter)?)
        .has_headers(false)
        .from_writer(writer);
    let elems: Vec<String> = array.iter().map(|x| x.to_string()).collect();
    for row in elems.chunks(cols.max(1)) {
        writer
            .write_record(row)
            .map_err(|e| csv_error("cannot write text", e))?;
    }
    writer.flush().map_err(|e| io_error("cannot write text", e))
}

/// Save an array of at most two dimensions to `path` as delimited text.
pub fn savetxt<T, P>(array: &NArray<T>, path: P, delimiter: char) -> Result<()>
where
    T: Copy + Display,
    P: AsRef<Path>,
{
    write_txt(array, create(path.as_ref())?, delimiter)
}

/// Save an array of at most two dimensions to `path` as comma separated
/// values.
pub fn savecsv<T, P>(array: &NArray<T>, path: P) -> Result<()>
where
    T: Copy + Display,
    P: AsRef<Path>,
{
    savetxt(array, path, ',')
}

/// Load an array from `path`, detecting the format.
///
/// Files that start with the array file marker are read as array files.
/// Otherwise the file is delimited text, split on `,` for a `.csv`
/// extension and on `delimiter` for any other.
pub fn load<T, P>(path: P, delimiter: char, skip_malformed: bool) -> Result<NArray<T>>
where
    T: Copy + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut first = String::new();
    open(path)?
        .read_line(&mut first)
        .map_err(|e| io_error(&format!("cannot read \"{}\"", path.display()), e))?;
    if first.trim_end() == NARRAY_FILE_MARKER {
        return load_narray(path);
    }
    let is_csv = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));
    let delimiter = if is_csv { ',' } else { delimiter };
    loadtxt(path, delimiter, skip_malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arr1, narray};

    #[test]
    fn array_file_round_trip() {
        let a = narray![[[1, 2], [3, 4]], [[5, 6], [7, 8]]];
        let mut buf = Vec::new();
        write_narray(&a, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf.clone()).unwrap(),
            "narray::NArray\n2 2 2\n1 2 3 4 5 6 7 8\n"
        );
        let b: NArray<i64> = read_narray(&buf[..]).unwrap();
        assert_eq!(b.to_vec(), a.to_vec().into_iter().map(i64::from).collect::<Vec<_>>());
        assert_eq!(b.shape(), a.shape());
    }

    #[test]
    fn array_file_scalar_and_empty() {
        let mut buf = Vec::new();
        write_narray(&NArray::scalar(2.5), &mut buf).unwrap();
        let s: NArray<f64> = read_narray(&buf[..]).unwrap();
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.into_scalar().unwrap(), 2.5);

        let e: NArray<f64> = read_narray("narray::NArray\n0 3\n".as_bytes()).unwrap();
        assert_eq!(e.shape().dims(), &[0, 3]);
    }

    #[test]
    fn array_file_errors() {
        let bad_marker = read_narray::<f64, _>("numbers\n2\n1 2\n".as_bytes());
        assert_eq!(bad_marker.unwrap_err().kind(), ErrorKind::Value);
        let bad_count = read_narray::<f64, _>("narray::NArray\n3\n1 2\n".as_bytes());
        assert_eq!(bad_count.unwrap_err().kind(), ErrorKind::Value);
        let bad_token = read_narray::<f64, _>("narray::NArray\n2\n1 x\n".as_bytes());
        assert_eq!(bad_token.unwrap_err().kind(), ErrorKind::Value);
        let truncated = read_narray::<f64, _>("narray::NArray\n".as_bytes());
        assert_eq!(truncated.unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn text_rows() {
        let a: NArray<f64> = read_txt("1 2  3\n".as_bytes(), ' ', false).unwrap();
        assert_eq!(a, arr1(&[1., 2., 3.]));
        let m: NArray<i32> = read_txt("1; 2\n\n3; 4\n".as_bytes(), ';', false).unwrap();
        assert_eq!(m, narray![[1, 2], [3, 4]]);
        let e: NArray<i32> = read_txt("".as_bytes(), ' ', false).unwrap();
        assert_eq!(e.shape().dims(), &[0, 0]);
    }

    #[test]
    fn text_malformed_rows() {
        let text = "1,2\n3\n4,5\n";
        let err = read_txt::<i32, _>(text.as_bytes(), ',', false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        let m: NArray<i32> = read_txt(text.as_bytes(), ',', true).unwrap();
        assert_eq!(m, narray![[1, 2], [4, 5]]);
        let err = read_txt::<i32, _>("1,a\n".as_bytes(), ',', true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn write_text() {
        let mut buf = Vec::new();
        write_txt(&narray![[1, 2], [3, 4]], &mut buf, ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,2\n3,4\n");
        let mut buf = Vec::new();
        write_txt(&arr1(&[0.5, 1.5]), &mut buf, ' ').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0.5 1.5\n");
        let cube = NArray::<u8>::zeros([1, 1, 1]);
        let err = write_txt(&cube, Vec::new(), ' ').unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn text_fields_are_csv() {
        let q: NArray<i32> = read_txt("\"1\",\"2\"\n3,4\n".as_bytes(), ',', false).unwrap();
        assert_eq!(q, narray![[1, 2], [3, 4]]);
        let t: NArray<f64> = read_txt("0.5\t 1.5\n".as_bytes(), '\t', false).unwrap();
        assert_eq!(t, arr1(&[0.5, 1.5]));

        let err = read_txt::<i32, _>("1\u{b7}2\n".as_bytes(), '\u{b7}', false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        let err = write_txt(&arr1(&[1, 2]), Vec::new(), '\u{b7}').unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn array_file_size_overflow() {
        let text = "narray::NArray\n4294967296 4294967296 16\n\n";
        let err = read_narray::<f64, _>(text.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn missing_file_is_argument_error() {
        let path = std::env::temp_dir().join("narray-io-test-missing-file.txt");
        let err = loadtxt::<f64, _>(&path, ' ', false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }
}

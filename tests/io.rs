#![allow(clippy::float_cmp)]

extern crate narray;

use std::fs;
use std::path::PathBuf;

use narray::io;
use narray::prelude::*;
use narray::ErrorKind;

/// A path in the temporary directory, removed when dropped.
struct TempPath(PathBuf);

impl TempPath
{
    fn new(name: &str) -> Self
    {
        let mut path = std::env::temp_dir();
        path.push(format!("narray-{}-{}", std::process::id(), name));
        TempPath(path)
    }
}

impl Drop for TempPath
{
    fn drop(&mut self)
    {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn array_file_round_trip()
{
    let path = TempPath::new("round-trip.narray");
    let a = narray![[1.5, -2.], [0.25, 1e10]];
    io::save_narray(&a, &path.0).unwrap();

    let text = fs::read_to_string(&path.0).unwrap();
    assert!(text.starts_with(io::NARRAY_FILE_MARKER));
    assert_eq!(text.lines().nth(1), Some("2 2"));

    let b: NArray<f64> = io::load_narray(&path.0).unwrap();
    assert_eq!(a, b);
    let c: NArray<f64> = io::load(&path.0, ' ', false).unwrap();
    assert_eq!(a, c);
}

#[test]
fn array_file_keeps_rank()
{
    let path = TempPath::new("ranks.narray");
    for a in [
        NArray::scalar(7i64),
        NArray::from_vec(vec![1, 2, 3]),
        NArray::from_vec((0..24).collect()).reshape([2, 3, 4]).unwrap(),
        NArray::zeros([0, 5]),
    ] {
        io::save_narray(&a, &path.0).unwrap();
        let b = io::load_narray::<i64, _>(&path.0).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn complex_array_file()
{
    let path = TempPath::new("complex.narray");
    let a = narray![C64::new(1., -1.), C64::new(0., 2.5)];
    io::save_narray(&a.abs(), &path.0).unwrap();
    let mags = io::load_narray::<f64, _>(&path.0).unwrap();
    assert_eq!(mags.get(1).unwrap(), 2.5);
}

#[test]
fn csv_round_trip()
{
    let path = TempPath::new("table.csv");
    let a = narray![[1, 2, 3], [4, 5, 6]];
    io::savecsv(&a, &path.0).unwrap();
    assert_eq!(fs::read_to_string(&path.0).unwrap(), "1,2,3\n4,5,6\n");
    assert_eq!(io::loadcsv::<i32, _>(&path.0, false).unwrap(), a);
    // the extension decides the delimiter
    assert_eq!(io::load::<i32, _>(&path.0, ' ', false).unwrap(), a);
}

#[test]
fn text_with_custom_delimiter()
{
    let path = TempPath::new("table.txt");
    let a = narray![0.5, 1.5, 2.5];
    io::savetxt(&a, &path.0, ';').unwrap();
    assert_eq!(fs::read_to_string(&path.0).unwrap(), "0.5;1.5;2.5\n");
    let b = io::loadtxt::<f64, _>(&path.0, ';', false).unwrap();
    assert_eq!(b, a);
    assert_eq!(b.ndim(), 1);
}

#[test]
fn text_parsing_rules()
{
    let text = " 1, 2 ,3\n\n4,5,6,\n";
    let a = io::read_txt::<u32, _>(text.as_bytes(), ',', false).unwrap();
    assert_eq!(a, narray![[1, 2, 3], [4, 5, 6]]);

    let ragged = "1 2 3\n4 5\n6 7 8\n";
    let err = io::read_txt::<i32, _>(ragged.as_bytes(), ' ', false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
    let skipped = io::read_txt::<i32, _>(ragged.as_bytes(), ' ', true).unwrap();
    assert_eq!(skipped, narray![[1, 2, 3], [6, 7, 8]]);

    let bad = "1,x\n";
    assert_eq!(io::read_txt::<f32, _>(bad.as_bytes(), ',', false).unwrap_err().kind(), ErrorKind::Value);

    let empty = io::read_txt::<f32, _>("\n\n".as_bytes(), ',', false).unwrap();
    assert_eq!(empty.shape().dims(), &[0, 0]);
}

#[test]
fn text_writer_limits_rank()
{
    let mut out = Vec::new();
    let cube = NArray::<u8>::zeros([2, 2, 2]);
    assert_eq!(io::write_txt(&cube, &mut out, ',').unwrap_err().kind(), ErrorKind::Shape);
    assert!(out.is_empty());

    io::write_txt(&NArray::scalar(4), &mut out, ',').unwrap();
    assert_eq!(out, b"4\n");
}

#[test]
fn file_errors()
{
    let missing = TempPath::new("does-not-exist.narray");
    let err = io::load_narray::<f64, _>(&missing.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert_eq!(io::loadcsv::<f64, _>(&missing.0, false).unwrap_err().kind(), ErrorKind::Argument);

    let path = TempPath::new("not-an-array.narray");
    fs::write(&path.0, "hello\n1 2\n").unwrap();
    assert_eq!(io::load_narray::<f64, _>(&path.0).unwrap_err().kind(), ErrorKind::Value);

    fs::write(&path.0, format!("{}\n2 2\n1 2 3\n", io::NARRAY_FILE_MARKER)).unwrap();
    assert_eq!(io::load_narray::<f64, _>(&path.0).unwrap_err().kind(), ErrorKind::Value);
}

#[test]
fn oversized_shape_is_value_error()
{
    let text = "narray::NArray\n4294967296 4294967296 16\n\n";
    let err = io::read_narray::<f64, _>(text.as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
}

#[test]
fn quoted_csv_fields()
{
    let path = TempPath::new("quoted.csv");
    fs::write(&path.0, "\"1.5\",\"2\"\r\n3,4\r\n").unwrap();
    assert_eq!(io::loadcsv::<f64, _>(&path.0, false).unwrap(), narray![[1.5, 2.], [3., 4.]]);
}

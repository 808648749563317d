use ndiff_rs::{diff_files, diff_readers, NdiffError};
use std::io::{self, BufRead, Cursor, Read, Write};
use std::path::Path;

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "device gone"))
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Err(io::Error::new(io::ErrorKind::Other, "device gone"))
    }

    fn consume(&mut self, _amt: usize) {}
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_file_not_found() {
    let mut out = Vec::new();
    let err = diff_files(
        Path::new("tests/fixtures/missing_before.txt"),
        Path::new("tests/fixtures/after.txt"),
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(err, NdiffError::FileNotFound { .. }));
    assert!(err.to_string().contains("missing_before.txt"));
    assert!(out.is_empty());
}

#[test]
fn test_directory_is_open_error() {
    let mut out = Vec::new();
    let err = diff_files(
        Path::new("tests/fixtures/before.txt"),
        Path::new("tests/fixtures"),
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(err, NdiffError::OpenError { .. }));
}

#[test]
fn test_read_error_names_stream() {
    let mut out = Vec::new();
    let err = diff_readers(
        Cursor::new("1\n"),
        FailingReader,
        &mut out,
        "before.txt",
        "after.txt",
    )
    .unwrap_err();

    assert!(matches!(err, NdiffError::ReadError { .. }));
    assert!(err.to_string().contains("after.txt"));
}

#[test]
fn test_invalid_utf8_is_read_error() {
    let mut out = Vec::new();
    let err = diff_readers(
        Cursor::new(vec![0xff, 0xfe, b'\n']),
        Cursor::new("1\n"),
        &mut out,
        "before.txt",
        "after.txt",
    )
    .unwrap_err();

    assert!(matches!(err, NdiffError::ReadError { .. }));
    assert!(err.to_string().contains("before.txt"));
}

#[test]
fn test_write_error() {
    let err = diff_readers(
        Cursor::new("1\n"),
        Cursor::new("1\n"),
        &mut ClosedPipe,
        "before.txt",
        "after.txt",
    )
    .unwrap_err();

    assert!(matches!(err, NdiffError::WriteError { .. }));
}

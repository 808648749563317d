//! Line-by-line numeric diff.
//!
//! Line N of the before-file is always compared with line N of the after-file;
//! there is no insertion/deletion matching. For each pair the two lines are
//! walked run by run (see [`crate::segment`]) and the before-line is reproduced
//! with every numeric token replaced by its difference from the matching
//! after-token (see [`crate::delta`]).
//!
//! # Examples
//!
//! ```
//! use ndiff_rs::differ::diff_line_to_string;
//!
//! let out = diff_line_to_string("  1  2  3\n", "  4  5  6\n").unwrap();
//! assert_eq!(out, "  -3  -3  -3\n");
//! ```

use crate::delta::token_delta;
use crate::error::NdiffError;
use crate::segment::LineCursor;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Counters gathered over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSummary {
    /// Number of after-lines processed
    pub lines: usize,
    /// Number of token pairs replaced by a numeric difference
    pub tokens_diffed: usize,
    /// 1-based after-line number at which the before-file ran out, if it did
    pub before_exhausted_at: Option<usize>,
}

/// Diffs one line pair, writing the result to `out` as it is produced.
///
/// Iteration is driven by the before-line: runs are extracted until its token
/// cursor reaches its end. Whitespace always comes from the before-line. An
/// empty before-line produces no output at all.
///
/// Returns the number of tokens that were replaced by a difference.
///
/// # Errors
///
/// Returns `NdiffError::WriteError` if writing to `out` fails.
pub fn diff_line<W: Write>(before: &str, after: &str, out: &mut W) -> Result<usize, NdiffError> {
    let mut before_cursor = LineCursor::new(before);
    let mut after_cursor = LineCursor::new(after);
    let mut diffed = 0;

    while !before_cursor.is_exhausted() {
        after_cursor.advance();
        before_cursor.advance();

        out.write_all(before_cursor.whitespace().as_bytes())?;
        match token_delta(before_cursor.token(), after_cursor.token())? {
            Some(delta) => {
                diffed += 1;
                out.write_all(delta.as_bytes())?;
            }
            None => out.write_all(before_cursor.token().as_bytes())?,
        }
    }

    Ok(diffed)
}

/// Diffs one line pair into a `String`.
pub fn diff_line_to_string(before: &str, after: &str) -> Result<String, NdiffError> {
    let mut buf = Vec::new();
    diff_line(before, after, &mut buf)?;
    // Only slices of valid UTF-8 input and ASCII digits are ever written.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Diffs two line streams in lock-step.
///
/// The after-stream drives iteration: processing ends when it is exhausted.
/// Once the before-stream runs out, every remaining pair sees an empty
/// before-line, so nothing is written for those lines; a warning is logged the
/// first time it happens.
///
/// # Errors
///
/// Returns `NdiffError::ReadError` (tagged with `before_name` / `after_name`)
/// if either stream fails, and `NdiffError::WriteError` if `out` fails.
pub fn diff_readers<B, A, W>(
    mut before: B,
    mut after: A,
    out: &mut W,
    before_name: &str,
    after_name: &str,
) -> Result<DiffSummary, NdiffError>
where
    B: BufRead,
    A: BufRead,
    W: Write,
{
    let mut summary = DiffSummary::default();
    let mut after_line = String::new();
    let mut before_line = String::new();

    loop {
        after_line.clear();
        let read = after
            .read_line(&mut after_line)
            .map_err(|e| NdiffError::read_error(after_name, e))?;
        if read == 0 {
            break;
        }
        summary.lines += 1;

        before_line.clear();
        let read = before
            .read_line(&mut before_line)
            .map_err(|e| NdiffError::read_error(before_name, e))?;
        if read == 0 && summary.before_exhausted_at.is_none() {
            warn!(
                "{} has fewer lines than {}; output stops reproducing lines from line {}",
                before_name, after_name, summary.lines
            );
            summary.before_exhausted_at = Some(summary.lines);
        }

        debug!(
            "line {}: before {} bytes, after {} bytes",
            summary.lines,
            before_line.len(),
            after_line.len()
        );

        summary.tokens_diffed += diff_line(&before_line, &after_line, out)?;
    }

    out.flush()?;
    Ok(summary)
}

/// Opens both files and diffs them into `out`.
///
/// # Errors
///
/// Returns `NdiffError::FileNotFound` if a path does not exist,
/// `NdiffError::OpenError` if it cannot be opened, and the errors of
/// [`diff_readers`] otherwise.
pub fn diff_files<W: Write>(
    before_path: &Path,
    after_path: &Path,
    out: &mut W,
) -> Result<DiffSummary, NdiffError> {
    let before = open_input(before_path)?;
    let after = open_input(after_path)?;

    let summary = diff_readers(
        before,
        after,
        out,
        &before_path.to_string_lossy(),
        &after_path.to_string_lossy(),
    )?;

    info!(
        "{} lines, {} numeric tokens diffed",
        summary.lines, summary.tokens_diffed
    );
    Ok(summary)
}

fn open_input(path: &Path) -> Result<BufReader<File>, NdiffError> {
    let name = path.to_string_lossy().to_string();

    if !path.exists() {
        return Err(NdiffError::file_not_found(name));
    }

    // Directories open fine on some platforms and only fail on first read.
    if path.is_dir() {
        return Err(NdiffError::open_error(
            name,
            std::io::Error::other("is a directory"),
        ));
    }

    debug!("opening {}", name);
    let file = File::open(path).map_err(|e| NdiffError::open_error(name, e))?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(before: &str, after: &str) -> (String, DiffSummary) {
        let mut out = Vec::new();
        let summary = diff_readers(
            Cursor::new(before),
            Cursor::new(after),
            &mut out,
            "before",
            "after",
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_single_integer_with_indent() {
        assert_eq!(diff_line_to_string("   42\n", "   10\n").unwrap(), "   32\n");
    }

    #[test]
    fn test_empty_before_line_writes_nothing() {
        assert_eq!(diff_line_to_string("", "  5\n").unwrap(), "");
    }

    #[test]
    fn test_diff_line_counts_numeric_pairs() {
        let mut out = Vec::new();
        let diffed = diff_line("a 5 5 2.0\n", "b 5 x 1.5\n", &mut out).unwrap();
        assert_eq!(diffed, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "a 0 5 0.5\n");
    }

    #[test]
    fn test_readers_stop_with_after_stream() {
        let (out, summary) = run("1\n2\n3\n", "1\n1\n");
        assert_eq!(out, "0\n1\n");
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.tokens_diffed, 2);
        assert_eq!(summary.before_exhausted_at, None);
    }

    #[test]
    fn test_readers_short_before_stream() {
        let (out, summary) = run("9\n", "1\n2\n3\n");
        assert_eq!(out, "8\n");
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.before_exhausted_at, Some(2));
    }

    #[test]
    fn test_readers_final_line_without_newline() {
        let (out, _) = run("10\n20", "1\n2");
        assert_eq!(out, " 9\n18");
    }

    #[test]
    fn test_missing_file() {
        let mut out = Vec::new();
        let err = diff_files(
            Path::new("does/not/exist.txt"),
            Path::new("does/not/exist.txt"),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, NdiffError::FileNotFound { .. }));
    }
}

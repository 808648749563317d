//! Whitespace / token segmentation of a single line.
//!
//! A line is read as alternating runs: whitespace, token, whitespace, token,
//! and so on. Either run may be empty, so a line starting with a token yields an
//! empty leading whitespace run, and the run after the final newline is an empty
//! token. Two lines are walked in lock-step by run *count*, never by byte offset,
//! which is what lets columns of different widths be paired up.

use regex::Regex;
use std::sync::OnceLock;

static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

/// The kind of run to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Whitespace,
    Token,
}

impl SegmentKind {
    fn regex(self) -> &'static Regex {
        match self {
            SegmentKind::Whitespace => WHITESPACE_REGEX
                .get_or_init(|| Regex::new(r"\s*").expect("Failed to compile whitespace regex")),
            SegmentKind::Token => TOKEN_REGEX
                .get_or_init(|| Regex::new(r"\S*").expect("Failed to compile token regex")),
        }
    }
}

/// A run of one kind, borrowed from its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Byte offset just past the run
    pub end: usize,
}

/// Finds the maximal run of `kind` starting exactly at `cursor`.
///
/// The run may be empty. Returns `None` only when `cursor` is past the end of
/// the line.
///
/// # Examples
///
/// ```
/// use ndiff_rs::segment::{find_run, SegmentKind};
///
/// let run = find_run("  42\n", 0, SegmentKind::Whitespace).unwrap();
/// assert_eq!(run.text, "  ");
/// let run = find_run("  42\n", run.end, SegmentKind::Token).unwrap();
/// assert_eq!(run.text, "42");
/// ```
pub fn find_run(line: &str, cursor: usize, kind: SegmentKind) -> Option<Segment<'_>> {
    if cursor > line.len() || !line.is_char_boundary(cursor) {
        return None;
    }

    // Both patterns accept the empty string, so the leftmost match is anchored
    // at the cursor.
    kind.regex().find_at(line, cursor).map(|m| Segment {
        text: m.as_str(),
        end: m.end(),
    })
}

/// One side's progress through its line.
///
/// Holds the most recently extracted whitespace and token. When an extraction
/// finds nothing the previous value is carried forward and the cursor stays put.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    line: &'a str,
    whitespace_end: usize,
    token_end: usize,
    whitespace: &'a str,
    token: &'a str,
}

impl<'a> LineCursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            whitespace_end: 0,
            token_end: 0,
            whitespace: "",
            token: "",
        }
    }

    /// Extracts the next whitespace run, then the token that follows it.
    pub fn advance(&mut self) {
        if let Some(run) = find_run(self.line, self.token_end, SegmentKind::Whitespace) {
            self.whitespace = run.text;
            self.whitespace_end = run.end;
        }

        if let Some(run) = find_run(self.line, self.whitespace_end, SegmentKind::Token) {
            self.token = run.text;
            self.token_end = run.end;
        }
    }

    /// True once the token cursor has reached the end of the line.
    pub fn is_exhausted(&self) -> bool {
        self.token_end == self.line.len()
    }

    pub fn whitespace(&self) -> &'a str {
        self.whitespace
    }

    pub fn token(&self) -> &'a str {
        self.token
    }
}

//! NDIFF - Numeric diff for column-aligned text.
//!
//! This library compares two text files line by line and token by token. The
//! output reproduces the before-file with every number replaced by the
//! difference `before - after`, padded so that columns stay where they were.
//! It is meant for comparing two runs of a report (benchmark tables, profiler
//! summaries, `/proc` snapshots) where only the numbers move.
//!
//! # Example
//!
//! ```no_run
//! use ndiff_rs::diff_files;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let stdout = std::io::stdout();
//! let mut out = stdout.lock();
//! let summary = diff_files(Path::new("before.txt"), Path::new("after.txt"), &mut out)?;
//! eprintln!("{} lines compared", summary.lines);
//! # Ok(())
//! # }
//! ```

pub mod delta;
pub mod differ;
pub mod error;
pub mod segment;
pub mod token;

// Re-export commonly used types for convenience
pub use delta::{decimal_delta, integer_delta, pad_to_width, resolve_token, token_delta};
pub use differ::{diff_files, diff_line, diff_line_to_string, diff_readers, DiffSummary};
pub use error::NdiffError;
pub use segment::{find_run, LineCursor, Segment, SegmentKind};
pub use token::{classify, is_decimal, is_integer, TokenClass};

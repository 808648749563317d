//! Classification of non-whitespace tokens.
//!
//! Only two shapes of token take part in numeric diffing: plain digit runs
//! (`42`, `007`) and unsigned decimals with at least one fractional digit
//! (`3.14`, `.5`). Everything else, including signs, exponents, units and
//! thousands separators, is opaque.
//!
//! # Examples
//!
//! ```
//! use ndiff_rs::token::{classify, TokenClass};
//!
//! assert_eq!(classify("42"), TokenClass::Integer);
//! assert_eq!(classify("3.140"), TokenClass::Decimal { digits: 3 });
//! assert_eq!(classify("-1"), TokenClass::Opaque);
//! ```

use regex::Regex;
use std::sync::OnceLock;

static INTEGER_REGEX: OnceLock<Regex> = OnceLock::new();
static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();

fn integer_regex() -> &'static Regex {
    INTEGER_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Failed to compile integer regex"))
}

fn decimal_regex() -> &'static Regex {
    DECIMAL_REGEX
        .get_or_init(|| Regex::new(r"^[0-9]*\.[0-9]+$").expect("Failed to compile decimal regex"))
}

/// The numeric shape of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// One or more ASCII digits
    Integer,
    /// Optional integer part, a point, then `digits` fractional digits
    Decimal { digits: usize },
    /// Anything else
    Opaque,
}

impl TokenClass {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, TokenClass::Opaque)
    }
}

/// Returns true if `token` is a non-empty run of ASCII digits.
pub fn is_integer(token: &str) -> bool {
    integer_regex().is_match(token)
}

/// Returns true if `token` is an unsigned decimal with a fractional part.
pub fn is_decimal(token: &str) -> bool {
    decimal_regex().is_match(token)
}

/// Number of characters after the first decimal point, or 0 if there is none.
pub fn fraction_digits(token: &str) -> usize {
    token
        .find('.')
        .map(|idx| token[idx + 1..].chars().count())
        .unwrap_or(0)
}

/// Classifies a token. Integer is checked before decimal.
pub fn classify(token: &str) -> TokenClass {
    if is_integer(token) {
        TokenClass::Integer
    } else if is_decimal(token) {
        TokenClass::Decimal {
            digits: fraction_digits(token),
        }
    } else {
        TokenClass::Opaque
    }
}

//! Numeric differences between paired tokens.
//!
//! Every difference is `before - after`. Integers are subtracted exactly with
//! arbitrary precision; decimals are subtracted as `f64` and printed with the
//! number of fractional digits of the *after* token. The printed result is then
//! left-padded with spaces to the width of the original before-token so that
//! later columns on the line keep their position.
//!
//! # Examples
//!
//! ```
//! use ndiff_rs::delta::resolve_token;
//!
//! assert_eq!(resolve_token("100", "1").unwrap(), " 99");
//! assert_eq!(resolve_token("3.000", "1.0").unwrap(), "  2.0");
//! assert_eq!(resolve_token("foo", "bar").unwrap(), "foo");
//! ```

use crate::error::NdiffError;
use crate::token::{classify, is_decimal, is_integer, TokenClass};
use num_bigint::BigInt;
use std::borrow::Cow;

/// Computes `before - after` for two digit strings of any length.
///
/// # Errors
///
/// Returns `NdiffError::MalformedNumber` if either side is not a valid integer.
pub fn integer_delta(before: &str, after: &str) -> Result<String, NdiffError> {
    let before_value = parse_integer(before)?;
    let after_value = parse_integer(after)?;
    Ok((before_value - after_value).to_string())
}

/// Computes `before - after` as floating point, printed with exactly `digits`
/// fractional digits.
///
/// # Errors
///
/// Returns `NdiffError::MalformedNumber` if either side is not a valid decimal.
pub fn decimal_delta(before: &str, after: &str, digits: usize) -> Result<String, NdiffError> {
    let before_value = parse_decimal(before)?;
    let after_value = parse_decimal(after)?;
    Ok(format!("{:.*}", digits, before_value - after_value))
}

/// Left-pads `value` with spaces up to `width` characters. Longer values are
/// returned as-is.
pub fn pad_to_width(value: &str, width: usize) -> String {
    format!("{:>width$}", value, width = width)
}

/// Computes the padded difference for one token pair, if one applies.
///
/// The after-token decides whether a difference is attempted. Returns `None`
/// when it is opaque or when the before-token does not have the same shape.
pub fn token_delta(before: &str, after: &str) -> Result<Option<String>, NdiffError> {
    let delta = match classify(after) {
        TokenClass::Integer if is_integer(before) => integer_delta(before, after)?,
        TokenClass::Decimal { digits } if is_decimal(before) => {
            decimal_delta(before, after, digits)?
        }
        _ => return Ok(None),
    };

    Ok(Some(pad_to_width(&delta, before.chars().count())))
}

/// Returns the text to emit for one token pair: the padded difference when
/// [`token_delta`] computes one, otherwise the before-token unchanged.
pub fn resolve_token<'a>(before: &'a str, after: &str) -> Result<Cow<'a, str>, NdiffError> {
    Ok(match token_delta(before, after)? {
        Some(delta) => Cow::Owned(delta),
        None => Cow::Borrowed(before),
    })
}

fn parse_integer(token: &str) -> Result<BigInt, NdiffError> {
    token
        .parse::<BigInt>()
        .map_err(|_| NdiffError::malformed_number(token))
}

fn parse_decimal(token: &str) -> Result<f64, NdiffError> {
    token
        .parse::<f64>()
        .map_err(|_| NdiffError::malformed_number(token))
}

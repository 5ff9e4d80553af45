//! Strict conversion of strings to numbers
//!
//! Every function in this module follows the same rules:
//!
//! - The input must not be empty ([`ParseNumberError::Empty`]).
//! - Leading whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`) and a single
//!   `+` or `-` sign are accepted, the way the C library's `strto*` family
//!   scans numbers. Hexadecimal inputs may additionally carry a `0x`/`0X`
//!   prefix after the sign.
//! - Everything after that must be digits of the expected radix, up to the
//!   end of the input ([`ParseNumberError::TrailingGarbage`]). An input without
//!   any digits counts as trailing garbage too.
//! - The value must fit the target type exactly
//!   ([`ParseNumberError::OutOfRange`]). A negative value never fits an
//!   unsigned type, even for the hexadecimal parsers.
//!
//! ```
//! use paramtab_utils::parse_number::{parse_hex16, parse_uint8, ParseNumberError};
//!
//! assert_eq!(parse_uint8("255"), Ok(255));
//! assert_eq!(parse_uint8("256"), Err(ParseNumberError::OutOfRange));
//! assert_eq!(parse_uint8("12abc"), Err(ParseNumberError::TrailingGarbage));
//! assert_eq!(parse_hex16("0x55AA"), Ok(0x55AA));
//! ```

use thiserror::Error;

/// The reasons a string can be rejected by the parsers in this module
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseNumberError {
    /// The input was empty.
    #[error("empty input")]
    Empty,
    /// The input was not entirely consumed by the number scan.
    #[error("unexpected characters after the number")]
    TrailingGarbage,
    /// The value does not fit the target type.
    #[error("value out of range")]
    OutOfRange,
}

/// Skip the leading whitespace accepted in front of a number
///
/// This is the C locale `isspace` set, which is
/// [`char::is_ascii_whitespace`] plus the vertical tab.
fn skip_whitespace(input: &str) -> &str {
    input.trim_start_matches(|ch: char| ch.is_ascii_whitespace() || ch == '\x0b')
}

/// Scan a whole string as an integer in the given radix.
///
/// The result is kept in an `i128` so that every value of the 64-bit types,
/// and their neighbours, can be represented before the final range check.
fn scan_integer(input: &str, radix: u32) -> Result<i128, ParseNumberError> {
    if input.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    let rest = skip_whitespace(input);
    let (negative, rest) = rest
        .strip_prefix('-')
        .map_or_else(|| (false, rest.strip_prefix('+').unwrap_or(rest)), |r| (true, r));

    // `0x` is only a prefix when a hexadecimal digit follows it, otherwise the
    // `x` is left in place and reported as trailing garbage.
    let digits = if radix == 16 {
        rest.strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
            .filter(|after| after.starts_with(|ch: char| ch.is_ascii_hexdigit()))
            .unwrap_or(rest)
    } else {
        rest
    };

    let end = digits
        .find(|ch: char| !ch.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 || end != digits.len() {
        return Err(ParseNumberError::TrailingGarbage);
    }

    let magnitude = digits
        .chars()
        .try_fold(0_i128, |acc, ch| {
            acc.checked_mul(i128::from(radix))?
                .checked_add(i128::from(ch.to_digit(radix)?))
        })
        .ok_or(ParseNumberError::OutOfRange)?;

    Ok(if negative { -magnitude } else { magnitude })
}

/// Scan a whole string as an integer and narrow it to `T`
fn parse_integer<T: TryFrom<i128>>(input: &str, radix: u32) -> Result<T, ParseNumberError> {
    T::try_from(scan_integer(input, radix)?).map_err(|_| ParseNumberError::OutOfRange)
}

/// Parse a decimal `u8`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_uint8(input: &str) -> Result<u8, ParseNumberError> {
    parse_integer(input, 10)
}

/// Parse a decimal `i8`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_int8(input: &str) -> Result<i8, ParseNumberError> {
    parse_integer(input, 10)
}

/// Parse a hexadecimal `u8`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_hex8(input: &str) -> Result<u8, ParseNumberError> {
    parse_integer(input, 16)
}

/// Parse a decimal `u16`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_uint16(input: &str) -> Result<u16, ParseNumberError> {
    parse_integer(input, 10)
}

/// Parse a decimal `i16`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_int16(input: &str) -> Result<i16, ParseNumberError> {
    parse_integer(input, 10)
}

/// Parse a hexadecimal `u16`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_hex16(input: &str) -> Result<u16, ParseNumberError> {
    parse_integer(input, 16)
}

/// Parse a decimal `u32`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_uint32(input: &str) -> Result<u32, ParseNumberError> {
    parse_integer(input, 10)
}

/// Parse a decimal `i32`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_int32(input: &str) -> Result<i32, ParseNumberError> {
    parse_integer(input, 10)
}

/// Parse a hexadecimal `u32`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_hex32(input: &str) -> Result<u32, ParseNumberError> {
    parse_integer(input, 16)
}

/// Parse a decimal `u64`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_uint64(input: &str) -> Result<u64, ParseNumberError> {
    parse_integer(input, 10)
}

/// Parse a decimal `i64`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_int64(input: &str) -> Result<i64, ParseNumberError> {
    parse_integer(input, 10)
}

/// Parse a hexadecimal `u64`.
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_hex64(input: &str) -> Result<u64, ParseNumberError> {
    parse_integer(input, 16)
}

/// Parse a floating point literal into an `f64`.
///
/// Accepts what [`str::parse`] accepts for `f64` (decimal and exponent
/// notation, `inf`, `infinity` and `nan` in any case), after optional leading
/// whitespace. A finite literal too large for an `f64` is
/// [`ParseNumberError::OutOfRange`] instead of silently becoming infinite.
///
/// Unlike `strtod`, hexadecimal literals such as `0x1p4` are not accepted and
/// are [`ParseNumberError::TrailingGarbage`].
///
/// # Errors
/// See the [module documentation](self).
pub fn parse_double(input: &str) -> Result<f64, ParseNumberError> {
    if input.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    let literal = skip_whitespace(input);
    let value: f64 = literal
        .parse()
        .map_err(|_| ParseNumberError::TrailingGarbage)?;

    if value.is_infinite() && !literal.to_ascii_lowercase().contains("inf") {
        return Err(ParseNumberError::OutOfRange);
    }

    Ok(value)
}

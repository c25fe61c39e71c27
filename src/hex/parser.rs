// ============================================================================
// Hex Parser
// Text to Fixedpoint conversion
// ============================================================================

use super::validator::hex_is_valid;
use crate::numeric::{Fixedpoint, NumericError, NumericResult};
use std::str::FromStr;

/// Hex digits that fit in one 64-bit field
pub const FIELD_DIGITS: usize = 16;

/// Parse a hex token, reporting why it was rejected.
///
/// A leading `-` makes the value negative (except for zero). Digits before
/// the `.` form the whole part, digits after it the fraction, read most
/// significant nibble first: `"0.8"` is one half. Either side may be empty
/// and then reads as zero.
///
/// # Errors
/// - `InvalidInput` if the token fails [`hex_is_valid`]
/// - `PrecisionLoss` if either side has more than 16 digits
///
/// # Examples
/// ```
/// use hexfixed::hex::parse_hex;
/// use hexfixed::numeric::NumericError;
///
/// let v = parse_hex("f6a5865.00f2").unwrap();
/// assert_eq!(v.whole_part(), 0xf6a5865);
/// assert_eq!(v.frac_part(), 0x00f2_0000_0000_0000);
///
/// assert_eq!(parse_hex("1.2.3"), Err(NumericError::InvalidInput));
/// assert_eq!(parse_hex("88888888888888889"), Err(NumericError::PrecisionLoss));
/// ```
pub fn parse_hex(text: &str) -> NumericResult<Fixedpoint> {
    if !hex_is_valid(text) {
        return Err(NumericError::InvalidInput);
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (whole_str, frac_str) = digits.split_once('.').unwrap_or((digits, ""));

    if whole_str.len() > FIELD_DIGITS || frac_str.len() > FIELD_DIGITS {
        return Err(NumericError::PrecisionLoss);
    }

    let whole = parse_field(whole_str)?;
    let frac = align_fraction(parse_field(frac_str)?, frac_str.len());

    Ok(Fixedpoint::signed(whole, frac, negative))
}

/// Parse a hex token, folding every rejection into the `Error` tag.
///
/// This is the tagged counterpart of [`parse_hex`]: it never fails, and the
/// caller checks [`Fixedpoint::is_err`] instead.
pub fn parse(text: &str) -> Fixedpoint {
    match parse_hex(text) {
        Ok(value) => value,
        Err(reason) => {
            tracing::debug!(token = text, %reason, "rejected hex token");
            Fixedpoint::ERROR
        }
    }
}

/// Base-16 value of at most 16 validated digits; empty reads as zero.
fn parse_field(digits: &str) -> NumericResult<u64> {
    if digits.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(digits, 16).map_err(|_| NumericError::InvalidInput)
}

/// Move the first of `len` parsed fraction digits into the top nibble.
#[inline]
fn align_fraction(value: u64, len: usize) -> u64 {
    let shift = ((FIELD_DIGITS - len) * 4) as u32;
    value.checked_shl(shift).unwrap_or(0)
}

impl Fixedpoint {
    /// Tagged parse; see [`parse`].
    #[inline]
    pub fn from_hex(text: &str) -> Self {
        parse(text)
    }
}

impl FromStr for Fixedpoint {
    type Err = NumericError;

    /// Parse from a hex string.
    ///
    /// # Examples
    /// - "1" -> 1
    /// - "0.8" -> one half
    /// - "-.4" -> minus one quarter
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl TryFrom<&str> for Fixedpoint {
    type Error = NumericError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse_hex(s)
    }
}

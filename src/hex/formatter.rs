// ============================================================================
// Hex Formatter
// Fixedpoint to canonical hex text
// ============================================================================

use crate::numeric::{Fixedpoint, Tag};
use arrayvec::ArrayString;
use std::fmt::{self, Write};

/// Longest canonical form: sign, 16 whole digits, dot, 16 fraction digits
pub const MAX_FORMATTED_LEN: usize = 34;

/// Rendering of any non-valid value
pub const INVALID_TEXT: &str = "<invalid>";

/// Render a value in canonical hex notation into a fresh `String`.
///
/// `-` is emitted only for `ValidNegative`. The whole part is lowercase hex
/// without leading zeros (`0` for zero). A nonzero fraction follows a `.`
/// with trailing zero digits removed. Values that are not valid render as
/// `<invalid>`.
///
/// # Examples
/// ```
/// use hexfixed::hex::format;
/// use hexfixed::numeric::Fixedpoint;
///
/// assert_eq!(format(Fixedpoint::from_parts(0, 0x8000_0000_0000_0000)), "0.8");
/// assert_eq!(format(Fixedpoint::from_parts(0x4b19efcea, 0xec9a1e2418)), "4b19efcea.000000ec9a1e2418");
/// ```
pub fn format(value: Fixedpoint) -> String {
    value.format_buf().to_string()
}

impl Fixedpoint {
    /// Canonical hex text in a stack buffer.
    pub fn format_buf(self) -> ArrayString<MAX_FORMATTED_LEN> {
        let mut buf = ArrayString::new();
        // Capacity covers the longest canonical form, so this cannot fail.
        let _ = write_canonical(&mut buf, self, false, false);
        buf
    }
}

fn write_canonical<W: Write>(out: &mut W, value: Fixedpoint, upper: bool, prefix: bool) -> fmt::Result {
    match value.tag() {
        Tag::ValidNonNegative => {}
        Tag::ValidNegative => out.write_char('-')?,
        Tag::Error
        | Tag::PositiveOverflow
        | Tag::NegativeOverflow
        | Tag::PositiveUnderflow
        | Tag::NegativeUnderflow => return out.write_str(INVALID_TEXT),
    }

    let (whole, frac) = value.magnitude();
    match (prefix, upper) {
        (false, false) => write!(out, "{:x}", whole)?,
        (false, true) => write!(out, "{:X}", whole)?,
        (true, false) => write!(out, "{:#x}", whole)?,
        (true, true) => write!(out, "0X{:X}", whole)?,
    }

    if frac != 0 {
        let mut digits = ArrayString::<16>::new();
        if upper {
            write!(digits, "{:016X}", frac)?;
        } else {
            write!(digits, "{:016x}", frac)?;
        }
        out.write_char('.')?;
        out.write_str(digits.trim_end_matches('0'))?;
    }
    Ok(())
}

// ============================================================================
// Display and hex formatting traits
// ============================================================================

impl fmt::Display for Fixedpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_buf())
    }
}

impl fmt::LowerHex for Fixedpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ArrayString::<{ MAX_FORMATTED_LEN + 2 }>::new();
        write_canonical(&mut buf, *self, false, f.alternate())?;
        f.pad(&buf)
    }
}

impl fmt::UpperHex for Fixedpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ArrayString::<{ MAX_FORMATTED_LEN + 2 }>::new();
        write_canonical(&mut buf, *self, true, f.alternate())?;
        f.pad(&buf)
    }
}

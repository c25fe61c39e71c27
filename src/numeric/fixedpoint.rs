// ============================================================================
// Fixed-Point Value
// 64.64 sign-magnitude fixed-point number with a validity tag
// ============================================================================

use super::errors::NumericResult;
use super::tag::Tag;
use std::fmt;

/// Sign-magnitude fixed-point number with 64 whole and 64 fractional bits.
///
/// The magnitude is `whole + frac / 2^64`. The sign, and whether the value is
/// an ordinary number at all, lives in the [`Tag`].
///
/// # Value Range
/// - Magnitude: 0 to `ffffffffffffffff.ffffffffffffffff` (hex)
/// - Precision: 2^-64
///
/// Values are plain `Copy` data. Operations never mutate their operands and
/// never panic; an unrepresentable result comes back with a fault tag.
///
/// # Example
/// ```
/// use hexfixed::numeric::Fixedpoint;
///
/// let half = Fixedpoint::from_parts(0, 0x8000_0000_0000_0000);
/// let one = half + half;
/// assert_eq!(one.whole_part(), 1);
/// assert_eq!(one.to_string(), "1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fixedpoint {
    whole: u64,
    frac: u64,
    tag: Tag,
}

impl Fixedpoint {
    /// Zero
    pub const ZERO: Self = Self::from_whole(0);

    /// One (1.0)
    pub const ONE: Self = Self::from_whole(1);

    /// Largest representable magnitude, non-negative
    pub const MAX: Self = Self::from_parts(u64::MAX, u64::MAX);

    /// Placeholder returned for malformed input
    pub const ERROR: Self = Self::with_tag(0, 0, Tag::Error);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a non-negative value with no fractional part.
    #[inline]
    pub const fn from_whole(whole: u64) -> Self {
        Self::from_parts(whole, 0)
    }

    /// Create a non-negative value from raw whole and fractional fields.
    ///
    /// `frac` is in units of 2^-64, so `0x8000_0000_0000_0000` is one half.
    #[inline]
    pub const fn from_parts(whole: u64, frac: u64) -> Self {
        Self::with_tag(whole, frac, Tag::ValidNonNegative)
    }

    #[inline]
    pub(crate) const fn with_tag(whole: u64, frac: u64, tag: Tag) -> Self {
        Self { whole, frac, tag }
    }

    /// Ordinary value with the given sign. Zero is always non-negative.
    #[inline]
    pub(crate) const fn signed(whole: u64, frac: u64, negative: bool) -> Self {
        let negative = negative && !(whole == 0 && frac == 0);
        Self::with_tag(whole, frac, Tag::valid(negative))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Raw whole field. Not checked for validity.
    #[inline]
    pub const fn whole_part(self) -> u64 {
        self.whole
    }

    /// Raw fractional field in units of 2^-64. Not checked for validity.
    #[inline]
    pub const fn frac_part(self) -> u64 {
        self.frac
    }

    #[inline]
    pub const fn tag(self) -> Tag {
        self.tag
    }

    /// Magnitude as the `(whole, frac)` pair.
    #[inline]
    pub const fn magnitude(self) -> (u64, u64) {
        (self.whole, self.frac)
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Magnitude is exactly zero. The tag is ignored.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.whole == 0 && self.frac == 0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.tag.is_valid()
    }

    #[inline]
    pub const fn is_err(self) -> bool {
        matches!(self.tag, Tag::Error)
    }

    /// True only for `ValidNegative`; fault tags do not count.
    #[inline]
    pub const fn is_neg(self) -> bool {
        matches!(self.tag, Tag::ValidNegative)
    }

    #[inline]
    pub const fn is_overflow_pos(self) -> bool {
        matches!(self.tag, Tag::PositiveOverflow)
    }

    #[inline]
    pub const fn is_overflow_neg(self) -> bool {
        matches!(self.tag, Tag::NegativeOverflow)
    }

    #[inline]
    pub const fn is_underflow_pos(self) -> bool {
        matches!(self.tag, Tag::PositiveUnderflow)
    }

    #[inline]
    pub const fn is_underflow_neg(self) -> bool {
        matches!(self.tag, Tag::NegativeUnderflow)
    }

    /// Pass a valid value through, turn any other tag into its error.
    ///
    /// # Errors
    /// Returns the [`NumericError`](super::NumericError) matching the tag
    /// when the value is not valid.
    #[inline]
    pub fn checked(self) -> NumericResult<Self> {
        match self.tag.fault() {
            None => Ok(self),
            Some(err) => Err(err),
        }
    }

    /// Drop the negative sign of a valid value. Other tags pass through.
    #[inline]
    pub const fn abs(self) -> Self {
        match self.tag {
            Tag::ValidNegative => Self::from_parts(self.whole, self.frac),
            _ => self,
        }
    }
}

impl Default for Fixedpoint {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Fixedpoint {
    #[inline]
    fn from(whole: u64) -> Self {
        Self::from_whole(whole)
    }
}

impl fmt::Debug for Fixedpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fixedpoint({}, whole={:#x}, frac={:#018x}, {:?})",
            self, self.whole, self.frac, self.tag
        )
    }
}

// ============================================================================
// Serde (canonical hex string on the wire)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Fixedpoint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.checked().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&value.format_buf())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fixedpoint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::hex::parse_hex(&text).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Value Tag
// Sign and validity state carried by every fixed-point value
// ============================================================================

use super::errors::NumericError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign and fault state of a [`Fixedpoint`](super::Fixedpoint).
///
/// Exactly one tag holds at a time. Only the two `Valid*` tags mark an
/// ordinary number; every other tag records that the operation producing the
/// value could not represent its true result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tag {
    /// Ordinary value, zero or positive
    ValidNonNegative,
    /// Ordinary value, strictly negative
    ValidNegative,
    /// Malformed input; magnitude is meaningless
    Error,
    /// Same-sign addition of non-negative values wrapped the whole part
    PositiveOverflow,
    /// Same-sign addition of negative values wrapped the whole part
    NegativeOverflow,
    /// Halving a non-negative value dropped a fractional bit
    PositiveUnderflow,
    /// Halving a negative value dropped a fractional bit
    NegativeUnderflow,
}

impl Tag {
    /// True for the two ordinary tags.
    #[inline]
    pub const fn is_valid(self) -> bool {
        matches!(self, Tag::ValidNonNegative | Tag::ValidNegative)
    }

    /// True for overflow and underflow tags (not `Error`).
    #[inline]
    pub const fn is_fault(self) -> bool {
        matches!(
            self,
            Tag::PositiveOverflow
                | Tag::NegativeOverflow
                | Tag::PositiveUnderflow
                | Tag::NegativeUnderflow
        )
    }

    /// Sign implied by the tag. `Error` carries no sign and reports `false`.
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(
            self,
            Tag::ValidNegative | Tag::NegativeOverflow | Tag::NegativeUnderflow
        )
    }

    /// Swap the sign while keeping the fault kind.
    ///
    /// `Error` has no sign and maps to itself.
    #[inline]
    pub const fn flip_sign(self) -> Self {
        match self {
            Tag::ValidNonNegative => Tag::ValidNegative,
            Tag::ValidNegative => Tag::ValidNonNegative,
            Tag::PositiveOverflow => Tag::NegativeOverflow,
            Tag::NegativeOverflow => Tag::PositiveOverflow,
            Tag::PositiveUnderflow => Tag::NegativeUnderflow,
            Tag::NegativeUnderflow => Tag::PositiveUnderflow,
            Tag::Error => Tag::Error,
        }
    }

    /// Ordinary tag for the given sign.
    #[inline]
    pub const fn valid(negative: bool) -> Self {
        if negative {
            Tag::ValidNegative
        } else {
            Tag::ValidNonNegative
        }
    }

    /// Overflow tag for the given sign.
    #[inline]
    pub const fn overflow(negative: bool) -> Self {
        if negative {
            Tag::NegativeOverflow
        } else {
            Tag::PositiveOverflow
        }
    }

    /// Underflow tag for the given sign.
    #[inline]
    pub const fn underflow(negative: bool) -> Self {
        if negative {
            Tag::NegativeUnderflow
        } else {
            Tag::PositiveUnderflow
        }
    }

    /// The error a non-valid tag stands for, `None` for valid tags.
    pub const fn fault(self) -> Option<NumericError> {
        match self {
            Tag::ValidNonNegative | Tag::ValidNegative => None,
            Tag::Error => Some(NumericError::Invalid),
            Tag::PositiveOverflow => Some(NumericError::PositiveOverflow),
            Tag::NegativeOverflow => Some(NumericError::NegativeOverflow),
            Tag::PositiveUnderflow => Some(NumericError::PositiveUnderflow),
            Tag::NegativeUnderflow => Some(NumericError::NegativeUnderflow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Tag; 7] = [
        Tag::ValidNonNegative,
        Tag::ValidNegative,
        Tag::Error,
        Tag::PositiveOverflow,
        Tag::NegativeOverflow,
        Tag::PositiveUnderflow,
        Tag::NegativeUnderflow,
    ];

    #[test]
    fn test_flip_sign_is_involution() {
        for tag in ALL {
            assert_eq!(tag.flip_sign().flip_sign(), tag);
        }
        assert_eq!(Tag::Error.flip_sign(), Tag::Error);
        assert_eq!(Tag::PositiveUnderflow.flip_sign(), Tag::NegativeUnderflow);
    }

    #[test]
    fn test_flip_sign_keeps_fault_kind() {
        for tag in ALL {
            assert_eq!(tag.flip_sign().is_valid(), tag.is_valid());
            assert_eq!(tag.flip_sign().is_fault(), tag.is_fault());
        }
    }

    #[test]
    fn test_classification_is_exclusive() {
        for tag in ALL {
            let classes = [tag.is_valid(), tag.is_fault(), tag == Tag::Error];
            assert_eq!(classes.iter().filter(|c| **c).count(), 1, "{:?}", tag);
        }
    }

    #[test]
    fn test_fault_mapping() {
        assert_eq!(Tag::ValidNegative.fault(), None);
        assert_eq!(Tag::Error.fault(), Some(NumericError::Invalid));
        assert_eq!(
            Tag::overflow(true).fault(),
            Some(NumericError::NegativeOverflow)
        );
        assert_eq!(
            Tag::underflow(false).fault(),
            Some(NumericError::PositiveUnderflow)
        );
    }
}

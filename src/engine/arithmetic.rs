// ============================================================================
// Arithmetic Engine
// Sign-magnitude add/sub/negate/halve/double/compare with fault tagging
// ============================================================================
//
// All functions take operands by value and return a new value. Overflow and
// underflow are reported through the result's tag. An `Error` operand
// yields `Fixedpoint::ERROR`; overflow/underflow operands are treated as
// their magnitude with the sign their tag implies.

use crate::numeric::{Fixedpoint, Tag};
use std::cmp::Ordering;

// ============================================================================
// Addition and Subtraction
// ============================================================================

/// Sign-magnitude addition.
///
/// Operands of equal sign add their magnitudes; a carry out of the whole
/// part tags the result `PositiveOverflow` or `NegativeOverflow`. Operands
/// of different sign subtract the smaller magnitude from the larger and take
/// the larger operand's sign, which cannot overflow.
///
/// # Example
/// ```
/// use hexfixed::engine::add;
/// use hexfixed::numeric::Fixedpoint;
///
/// let sum = add(Fixedpoint::MAX, Fixedpoint::ONE);
/// assert!(sum.is_overflow_pos());
/// ```
pub fn add(lhs: Fixedpoint, rhs: Fixedpoint) -> Fixedpoint {
    if lhs.is_err() || rhs.is_err() {
        return Fixedpoint::ERROR;
    }

    let lhs_negative = lhs.tag().is_negative();
    if lhs_negative == rhs.tag().is_negative() {
        add_magnitudes(lhs, rhs, lhs_negative)
    } else {
        subtract_magnitudes(lhs, rhs)
    }
}

/// `lhs - rhs`, computed as `lhs + (rhs with its sign flipped)`.
pub fn sub(lhs: Fixedpoint, rhs: Fixedpoint) -> Fixedpoint {
    add(lhs, flip_sign(rhs))
}

fn add_magnitudes(lhs: Fixedpoint, rhs: Fixedpoint, negative: bool) -> Fixedpoint {
    let (frac, carry) = lhs.frac_part().overflowing_add(rhs.frac_part());
    let (whole, wrapped) = lhs.whole_part().overflowing_add(rhs.whole_part());
    let (whole, carried_out) = whole.overflowing_add(u64::from(carry));

    if wrapped || carried_out {
        let tag = Tag::overflow(negative);
        tracing::trace!(?lhs, ?rhs, ?tag, "addition overflowed the whole part");
        return Fixedpoint::with_tag(whole, frac, tag);
    }
    Fixedpoint::signed(whole, frac, negative)
}

fn subtract_magnitudes(lhs: Fixedpoint, rhs: Fixedpoint) -> Fixedpoint {
    let (larger, smaller) = match compare(lhs, rhs) {
        Ordering::Less => (rhs, lhs),
        Ordering::Equal | Ordering::Greater => (lhs, rhs),
    };

    let (frac, borrow) = larger.frac_part().overflowing_sub(smaller.frac_part());
    // larger >= smaller, so the whole part cannot wrap
    let whole = larger
        .whole_part()
        .wrapping_sub(smaller.whole_part())
        .wrapping_sub(u64::from(borrow));

    Fixedpoint::signed(whole, frac, larger.tag().is_negative())
}

/// Flip only the sign carried by the tag; magnitude is untouched.
#[inline]
fn flip_sign(value: Fixedpoint) -> Fixedpoint {
    Fixedpoint::with_tag(value.whole_part(), value.frac_part(), value.tag().flip_sign())
}

// ============================================================================
// Sign
// ============================================================================

/// Swap the sign of a valid value. Zero always comes back non-negative.
///
/// Fault-tagged values are returned unchanged.
pub fn negate(value: Fixedpoint) -> Fixedpoint {
    match value.tag() {
        Tag::ValidNonNegative => Fixedpoint::signed(value.whole_part(), value.frac_part(), true),
        Tag::ValidNegative => Fixedpoint::from_parts(value.whole_part(), value.frac_part()),
        Tag::Error => Fixedpoint::ERROR,
        Tag::PositiveOverflow
        | Tag::NegativeOverflow
        | Tag::PositiveUnderflow
        | Tag::NegativeUnderflow => value,
    }
}

// ============================================================================
// Scaling by two
// ============================================================================

/// Divide by two, truncating.
///
/// The low bit of the whole part moves into the top bit of the fraction. If
/// the fraction's own low bit is shifted out the result is tagged
/// `PositiveUnderflow` or `NegativeUnderflow` by the input's sign.
///
/// # Example
/// ```
/// use hexfixed::engine::halve;
/// use hexfixed::hex::parse;
///
/// let res = halve(parse("0.0000000000000001"));
/// assert!(res.is_underflow_pos());
/// assert!(res.is_zero());
/// ```
pub fn halve(value: Fixedpoint) -> Fixedpoint {
    if value.is_err() {
        return Fixedpoint::ERROR;
    }

    let (whole, frac) = value.magnitude();
    let halved_whole = whole >> 1;
    let halved_frac = (frac >> 1) | ((whole & 1) << 63);

    if frac & 1 == 1 {
        let tag = Tag::underflow(value.tag().is_negative());
        tracing::trace!(?value, ?tag, "halving dropped a fractional bit");
        return Fixedpoint::with_tag(halved_whole, halved_frac, tag);
    }
    Fixedpoint::with_tag(halved_whole, halved_frac, value.tag())
}

/// Multiply by two; exactly `add(value, value)`.
#[inline]
pub fn double(value: Fixedpoint) -> Fixedpoint {
    add(value, value)
}

// ============================================================================
// Comparison
// ============================================================================

/// Order two values by magnitude, whole part first.
///
/// The sign is deliberately not consulted: `-5` and `5` compare `Equal`.
pub fn compare(lhs: Fixedpoint, rhs: Fixedpoint) -> Ordering {
    lhs.magnitude().cmp(&rhs.magnitude())
}

/// [`compare`] as `-1`, `0` or `1`.
#[inline]
pub fn compare_i32(lhs: Fixedpoint, rhs: Fixedpoint) -> i32 {
    match compare(lhs, rhs) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

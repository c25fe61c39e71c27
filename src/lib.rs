// ============================================================================
// Hex Fixed-Point Library
// 64.64 sign-magnitude fixed-point numbers written in hexadecimal
// ============================================================================

//! # hexfixed
//!
//! A 128-bit sign-magnitude fixed-point number: a 64-bit whole part and a
//! 64-bit binary fraction, read and written in hexadecimal.
//!
//! ## Features
//!
//! - **Tagged values**: sign, overflow, underflow and parse errors are carried
//!   in the value itself, nothing panics
//! - **Hex notation**: `[-]WHOLE[.FRAC]`, up to 16 digits on each side
//! - **Exact arithmetic**: add, subtract, negate, halve, double, compare
//! - **Allocation-free formatting** into a stack buffer
//!
//! ## Example
//!
//! ```rust
//! use hexfixed::prelude::*;
//!
//! let a = parse("-c7252a193ae07.7a51de9ea0538c5");
//! let b = parse("d09079.1e6d601");
//!
//! let sum = a + b;
//! assert!(sum.is_valid());
//! assert!(sum.is_neg());
//! assert_eq!(format(sum), "-c7252a0c31d8e.5be47e8ea0538c5");
//!
//! // Overflow is a tag, not a panic
//! let big = parse("ffffffffffffffff");
//! assert!((big + Fixedpoint::ONE).is_overflow_pos());
//!
//! // So is malformed input
//! assert!(parse("--1").is_err());
//! ```

pub mod engine;
pub mod hex;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{add, compare, double, halve, negate, sub};
    pub use crate::hex::{format, hex_is_valid, parse, parse_hex};
    pub use crate::numeric::{Fixedpoint, NumericError, NumericResult, Tag};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    struct Fixture {
        zero: Fixedpoint,
        one: Fixedpoint,
        one_half: Fixedpoint,
        one_fourth: Fixedpoint,
        large1: Fixedpoint,
        large2: Fixedpoint,
        neg_1: Fixedpoint,
        neg_one_eighth: Fixedpoint,
        max: Fixedpoint,
        min: Fixedpoint,
    }

    fn fixture() -> Fixture {
        Fixture {
            zero: Fixedpoint::from_whole(0),
            one: Fixedpoint::from_whole(1),
            one_half: Fixedpoint::from_parts(0, 0x8000_0000_0000_0000),
            one_fourth: Fixedpoint::from_parts(0, 0x4000_0000_0000_0000),
            large1: Fixedpoint::from_parts(0x4b19efcea, 0xec9a1e2418),
            large2: Fixedpoint::from_parts(0xfcbf3d5, 0x4d1a23c24faf),
            neg_1: parse("-1"),
            neg_one_eighth: parse("-0.2"),
            max: Fixedpoint::from_parts(u64::MAX, u64::MAX),
            min: parse("-ffffffffffffffff.ffffffffffffffff"),
        }
    }

    #[test]
    fn test_fixture_fields() {
        let f = fixture();
        let expected = [
            (f.zero, 0, 0),
            (f.one, 1, 0),
            (f.one_half, 0, 0x8000_0000_0000_0000),
            (f.one_fourth, 0, 0x4000_0000_0000_0000),
            (f.large1, 0x4b19efcea, 0xec9a1e2418),
            (f.large2, 0xfcbf3d5, 0x4d1a23c24faf),
            (f.max, u64::MAX, u64::MAX),
            (f.neg_1, 1, 0),
            (f.neg_one_eighth, 0, 0x2000_0000_0000_0000),
            (f.min, u64::MAX, u64::MAX),
        ];
        for (value, whole, frac) in expected {
            assert_eq!(value.whole_part(), whole, "{:?}", value);
            assert_eq!(value.frac_part(), frac, "{:?}", value);
        }
    }

    #[test]
    fn test_negate_fixture() {
        let f = fixture();
        for v in [f.zero, f.one, f.one_half, f.one_fourth, f.large1, f.large2] {
            assert!(!v.is_neg());
        }
        for v in [f.neg_1, f.neg_one_eighth, f.min] {
            assert!(v.is_neg());
        }

        assert!(!negate(f.zero).is_neg());
        for v in [f.one, f.one_half, f.one_fourth, f.large1, f.large2] {
            let n = negate(v);
            assert!(n.is_neg());
            assert_eq!(n.magnitude(), v.magnitude());
        }
        for v in [f.neg_1, f.neg_one_eighth, f.min] {
            let n = negate(v);
            assert!(!n.is_neg());
            assert_eq!(n.magnitude(), v.magnitude());
        }
    }

    #[test]
    fn test_overflow_pos() {
        let f = fixture();
        assert!(add(f.max, f.one).is_overflow_pos());
        assert!(add(f.one, f.max).is_overflow_pos());
        assert!(sub(f.max, f.neg_1).is_overflow_pos());

        let sum = add(f.max, f.neg_1);
        assert!(!sum.is_overflow_pos());
        let sum = add(sum, f.one);
        assert!(!sum.is_overflow_pos());
        assert_eq!(sum, f.max);

        assert!(!sub(f.min, f.one).is_overflow_pos());
    }

    #[test]
    fn test_overflow_neg() {
        let f = fixture();
        assert!(sub(f.min, f.one).is_overflow_neg());
        assert!(!add(f.max, f.one).is_overflow_neg());

        let res = sub(f.zero, f.min);
        assert!(!res.is_overflow_neg());
        assert_eq!(res, f.max);
    }

    #[test]
    fn test_underflow() {
        let f = fixture();
        for v in [f.zero, f.one] {
            let res = halve(v);
            assert!(!res.is_underflow_pos());
            assert!(!res.is_underflow_neg());
        }

        let res = halve(f.max);
        assert!(res.is_underflow_pos());
        assert!(!res.is_underflow_neg());
        assert!(!res.is_valid());

        let res = halve(f.min);
        assert!(res.is_underflow_neg());
        assert!(!res.is_underflow_pos());

        assert!(halve(f.large2).is_underflow_pos());
        assert!(halve(parse("0.0000000000000001")).is_underflow_pos());
        assert!(halve(parse("-0.0000000000000001")).is_underflow_neg());
    }

    #[test]
    fn test_is_neg() {
        let f = fixture();
        assert!(!parse("f6a5865.00f2").is_neg());
        assert!(!f.zero.is_neg());
        assert!(!f.max.is_neg());
        assert!(parse("-f6a5865.00f2").is_neg());
        assert!(parse("-111.f020").is_neg());
        assert!(f.min.is_neg());
    }

    #[test]
    fn test_is_valid() {
        for token in ["f6a5865.00f2", "f6a5865", "F6A5865.00F2", "-.f6a5865"] {
            assert!(parse(token).is_valid(), "{token}");
        }
        assert!(sub(parse("-ccf35aa3a04a3b.b105"), parse("f676e8.58")).is_valid());
        assert!(add(parse("-c7252a193ae07.7a51de9ea0538c5"), parse("d09079.1e6d601")).is_valid());

        assert!(!parse("f!6a5865").is_valid());
        assert!(!parse("--f6a5865").is_valid());
        assert!(!halve(fixture().max).is_valid());
    }

    #[test]
    fn test_hex_round_trip() {
        for token in [
            "0",
            "1",
            "0.8",
            "-0.2",
            "f6a5865.00f2",
            "-c7252a0c31d8e.5be47e8ea0538c5",
            "4b19efcea.000000ec9a1e2418",
            "ffffffffffffffff.ffffffffffffffff",
            "-ffffffffffffffff.ffffffffffffffff",
        ] {
            assert_eq!(format(parse(token)), token);
        }
    }

    #[test]
    fn test_checked_pipeline() -> NumericResult<()> {
        let a: Fixedpoint = "ab.cd".parse()?;
        let b: Fixedpoint = "-0.cd".parse()?;
        let sum = (a + b).checked()?;
        assert_eq!(format(sum), "ab");

        let overflow = (Fixedpoint::MAX + Fixedpoint::ONE).checked();
        assert_eq!(overflow, Err(NumericError::PositiveOverflow));
        Ok(())
    }
}

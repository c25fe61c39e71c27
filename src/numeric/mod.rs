// ============================================================================
// Numeric Module
// 64.64 sign-magnitude fixed-point value representation
// ============================================================================
//
// This module provides:
// - Fixedpoint: whole/frac magnitude plus a sign-and-validity tag
// - Tag: closed set of ordinary and fault states
// - NumericError: error types for the Result-returning surfaces
//
// Design principles:
// - No floating-point operations
// - Faults are data (tags), never panics
// - Plain Copy values, no heap state

mod errors;
mod fixedpoint;
mod tag;

pub use errors::{NumericError, NumericResult};
pub use fixedpoint::Fixedpoint;
pub use tag::Tag;

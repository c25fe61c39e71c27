// ============================================================================
// Engine Module
// Arithmetic on sign-magnitude fixed-point values
// ============================================================================

mod arithmetic;
mod ops;

pub use arithmetic::{add, compare, compare_i32, double, halve, negate, sub};

// ============================================================================
// Operator Traits
// std::ops and method forms of the arithmetic engine
// ============================================================================

use super::arithmetic;
use crate::numeric::Fixedpoint;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

impl Fixedpoint {
    /// Divide by two; see [`halve`](crate::engine::halve).
    #[inline]
    pub fn halve(self) -> Self {
        arithmetic::halve(self)
    }

    /// Multiply by two; see [`double`](crate::engine::double).
    #[inline]
    pub fn double(self) -> Self {
        arithmetic::double(self)
    }

    /// Magnitude-only ordering; see [`compare`](crate::engine::compare).
    #[inline]
    pub fn compare(self, other: Self) -> Ordering {
        arithmetic::compare(self, other)
    }
}

// These never panic: overflow shows up in the result's tag.
impl Add for Fixedpoint {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        arithmetic::add(self, rhs)
    }
}

impl Sub for Fixedpoint {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        arithmetic::sub(self, rhs)
    }
}

impl Neg for Fixedpoint {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        arithmetic::negate(self)
    }
}

impl AddAssign for Fixedpoint {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = arithmetic::add(*self, rhs);
    }
}

impl SubAssign for Fixedpoint {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = arithmetic::sub(*self, rhs);
    }
}

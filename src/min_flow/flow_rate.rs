//!
//! FlowRateLike trait for generics of Flow amount
//!
//! i32 and i64 implements FlowRateLike
//!

use super::Cost;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

///
/// generic FlowRate
///
/// Flow on a reverse residual edge is negative, so the type has to be signed.
///
pub trait FlowRateLike:
    Copy
    + Eq
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Sum
    + Default
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// largest representable value, used as the initial bottleneck
    fn max_value() -> Self;
    /// widen into the cost domain
    fn to_cost(self) -> Cost;
    /// `None` on overflow
    fn checked_add(self, other: Self) -> Option<Self>;
}

impl FlowRateLike for i32 {
    fn zero() -> i32 {
        0
    }
    fn max_value() -> i32 {
        i32::MAX
    }
    fn to_cost(self) -> Cost {
        Cost::from(self)
    }
    fn checked_add(self, other: i32) -> Option<i32> {
        i32::checked_add(self, other)
    }
}

impl FlowRateLike for i64 {
    fn zero() -> i64 {
        0
    }
    fn max_value() -> i64 {
        i64::MAX
    }
    fn to_cost(self) -> Cost {
        self
    }
    fn checked_add(self, other: i64) -> Option<i64> {
        i64::checked_add(self, other)
    }
}

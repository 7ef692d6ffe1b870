//! 128-bit exact decimal element type
//!
//! Wraps [`rust_decimal::Decimal`] in its 16-byte serialized form so that
//! decimal buffers can live in the same Pod-cast storage as every other
//! element kind. Arithmetic round-trips through `rust_decimal`; overflow
//! panics surface unchanged from that crate, and division by zero is caught
//! by the engine through [`crate::dtype::Element::checked_div`].

use bytemuck::{Pod, Zeroable};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Decimal element stored as the 16-byte `rust_decimal` wire representation.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Dec128(pub [u8; 16]);

// Safety: Dec128 is a transparent wrapper around [u8; 16], which is Pod
unsafe impl Pod for Dec128 {}
unsafe impl Zeroable for Dec128 {}

impl Dec128 {
    /// Zero
    pub const ZERO: Self = Self([0; 16]);

    /// Wrap a decimal value
    #[inline]
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d.serialize())
    }

    /// Unwrap to a decimal value
    #[inline]
    pub fn to_decimal(self) -> Decimal {
        Decimal::deserialize(self.0)
    }
}

impl From<Decimal> for Dec128 {
    #[inline]
    fn from(d: Decimal) -> Self {
        Self::from_decimal(d)
    }
}

impl From<Dec128> for Decimal {
    #[inline]
    fn from(d: Dec128) -> Self {
        d.to_decimal()
    }
}

impl PartialOrd for Dec128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_decimal().partial_cmp(&other.to_decimal())
    }
}

impl Add for Dec128 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_decimal(self.to_decimal() + rhs.to_decimal())
    }
}

impl Sub for Dec128 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_decimal(self.to_decimal() - rhs.to_decimal())
    }
}

impl Mul for Dec128 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_decimal(self.to_decimal() * rhs.to_decimal())
    }
}

impl fmt::Debug for Dec128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl fmt::Display for Dec128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

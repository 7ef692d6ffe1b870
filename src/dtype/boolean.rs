//! Byte-backed boolean element type
//!
//! `bool` cannot back array storage directly: it is not `Pod`, since only the
//! bit patterns 0 and 1 are valid. `Boolean` stores one byte per element and
//! treats any nonzero byte as true, which is also the truth rule used when
//! casting numeric kinds to booleans.

use bytemuck::{Pod, Zeroable};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Boolean element stored as a single byte.
///
/// Arithmetic on boolean pairs takes the logical form of each operator:
/// `+` is OR, `*` is AND, `-` is XOR. Division and remainder go through the
/// numeric 0/1 values (see [`crate::dtype::Element::checked_div`]), so
/// dividing by `false` is a division-by-zero error.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Boolean(pub u8);

// Safety: Boolean is a transparent wrapper around u8, which is Pod
unsafe impl Pod for Boolean {}
unsafe impl Zeroable for Boolean {}

impl Boolean {
    /// False
    pub const FALSE: Self = Self(0);
    /// True
    pub const TRUE: Self = Self(1);

    /// Truth value (any nonzero byte is true)
    #[inline]
    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Boolean {
    #[inline]
    fn from(v: bool) -> Self {
        Self(v as u8)
    }
}

impl From<Boolean> for bool {
    #[inline]
    fn from(v: Boolean) -> Self {
        v.as_bool()
    }
}

impl PartialOrd for Boolean {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_bool().partial_cmp(&other.as_bool())
    }
}

impl Add for Boolean {
    type Output = Self;

    /// Logical OR
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from(self.as_bool() | rhs.as_bool())
    }
}

impl Sub for Boolean {
    type Output = Self;

    /// Logical XOR
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from(self.as_bool() ^ rhs.as_bool())
    }
}

impl Mul for Boolean {
    type Output = Self;

    /// Logical AND
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from(self.as_bool() & rhs.as_bool())
    }
}

impl fmt::Debug for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bool())
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bool())
    }
}

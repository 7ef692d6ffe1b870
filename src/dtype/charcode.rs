//! Character element type
//!
//! `char` cannot back array storage directly (not every u32 bit pattern is a
//! valid Unicode scalar, so `char` is not `Pod`). `CharCode` stores the
//! scalar value in a u32 and converts lossily back to `char` on read.

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Character element stored as a u32 Unicode scalar value.
///
/// Arithmetic operates on the code point with wrapping semantics, mirroring
/// how character arrays behave as small unsigned integers in the promotion
/// lattice (a char loses to every numeric kind).
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct CharCode(pub u32);

// Safety: CharCode is a transparent wrapper around u32, which is Pod
unsafe impl Pod for CharCode {}
unsafe impl Zeroable for CharCode {}

impl CharCode {
    /// The NUL character
    pub const NUL: Self = Self(0);

    /// The underlying code point
    #[inline]
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Convert to `char`, substituting U+FFFD for invalid scalar values
    #[inline]
    pub fn as_char(self) -> char {
        char::from_u32(self.0).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl From<char> for CharCode {
    #[inline]
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<CharCode> for char {
    #[inline]
    fn from(c: CharCode) -> Self {
        c.as_char()
    }
}

impl Add for CharCode {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for CharCode {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for CharCode {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }
}

impl fmt::Debug for CharCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_char())
    }
}

impl fmt::Display for CharCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

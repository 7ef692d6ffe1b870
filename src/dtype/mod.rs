//! Data type system for narray arrays
//!
//! This module provides the `DType` enum representing all supported element
//! kinds, the `Element` trait tying them to concrete Rust types, the numeric
//! promotion lattice, and the conversion (cast) rules between kinds.

mod boolean;
mod cast;
mod charcode;
mod decimal;
mod element;
mod promotion;

pub use boolean::Boolean;
pub use cast::CastFrom;
pub use charcode::CharCode;
pub use decimal::Dec128;
pub use element::Element;
pub use promotion::promote;

use std::fmt;

/// Data types supported by narray arrays
///
/// This enum represents the element type of an array at runtime.
/// Using an enum (rather than generics on the array type) allows:
/// - Mixed-kind operations with numeric promotion
/// - Runtime type selection
/// - A single array container for every element kind
///
/// # Discriminant Values (Serialization Stability)
///
/// The discriminant values are **stable**:
/// - Floats: 0-9 (F64=0, F32=1)
/// - Signed ints: 10-19 (I64=10, I32=11, I16=12)
/// - Unsigned ints: 20-29 (U64=20, U32=21, U16=22, U8=23)
/// - Bool: 30
/// - Char: 35
/// - Decimal: 40
///
/// New types will use reserved ranges. Existing values are NEVER changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,

    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
    /// 16-bit signed integer
    I16 = 12,

    /// 64-bit unsigned integer
    U64 = 20,
    /// 32-bit unsigned integer
    U32 = 21,
    /// 16-bit unsigned integer
    U16 = 22,
    /// 8-bit unsigned integer (byte)
    U8 = 23,

    /// Boolean type, stored as one byte per element
    Bool = 30,

    /// Unicode scalar value, stored as four bytes per element
    Char = 35,

    /// 128-bit exact decimal
    Decimal = 40,
}

impl DType {
    /// Every supported dtype, in discriminant order.
    ///
    /// The promotion lattice and the cast rules are total over this set;
    /// tests iterate it to prove that.
    pub const ALL: [DType; 12] = [
        Self::F64,
        Self::F32,
        Self::I64,
        Self::I32,
        Self::I16,
        Self::U64,
        Self::U32,
        Self::U16,
        Self::U8,
        Self::Bool,
        Self::Char,
        Self::Decimal,
    ];

    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Decimal => 16,
            Self::F64 | Self::I64 | Self::U64 => 8,
            Self::F32 | Self::I32 | Self::U32 | Self::Char => 4,
            Self::I16 | Self::U16 => 2,
            Self::U8 | Self::Bool => 1,
        }
    }

    /// Returns true if this is a floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F64 | Self::F32)
    }

    /// Returns true if this is a signed integer type
    #[inline]
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::I64 | Self::I32 | Self::I16)
    }

    /// Returns true if this is an unsigned integer type
    #[inline]
    pub const fn is_unsigned_int(self) -> bool {
        matches!(self, Self::U64 | Self::U32 | Self::U16 | Self::U8)
    }

    /// Returns true if this is any integer type (signed or unsigned)
    #[inline]
    pub const fn is_int(self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    /// Returns true if this is the boolean type
    #[inline]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    /// Returns true if this is the char type
    #[inline]
    pub const fn is_char(self) -> bool {
        matches!(self, Self::Char)
    }

    /// Returns true if this is the decimal type
    #[inline]
    pub const fn is_decimal(self) -> bool {
        matches!(self, Self::Decimal)
    }

    /// Returns true if this type can represent negative values
    #[inline]
    pub const fn is_signed(self) -> bool {
        self.is_float() || self.is_signed_int() || self.is_decimal()
    }

    /// Short name for display (e.g., "f32", "i64")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::U64 => "u64",
            Self::U32 => "u32",
            Self::U16 => "u16",
            Self::U8 => "u8",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Decimal => "decimal",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

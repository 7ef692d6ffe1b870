//! Element trait for mapping Rust types to DType

use super::{Boolean, CharCode, DType, Dec128};
use bytemuck::{Pod, Zeroable};
use num_traits::{FromPrimitive, ToPrimitive};
use std::ops::{Add, Mul, Sub};

/// Trait for types that can be elements of an array
///
/// This trait connects Rust's type system to narray's runtime dtype system.
/// It is implemented for the primitive numeric types and for the storage
/// wrappers [`Boolean`], [`CharCode`] and [`Dec128`].
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck)
/// - `Add + Sub + Mul` - Infallible arithmetic (Output = Self). For boolean
///   pairs these are the logical operator forms (OR/XOR/AND); decimal
///   overflow panics surface unchanged from `rust_decimal`.
/// - `PartialOrd` - Comparison operations
///
/// Division and remainder are fallible for the integer-family kinds, so they
/// go through [`checked_div`](Element::checked_div) and
/// [`checked_rem`](Element::checked_rem) instead of operator bounds.
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + PartialOrd
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Division. `None` when the divisor is zero for the integer-family
    /// kinds (ints, bool, char) or when the decimal operation fails; floats
    /// always succeed with IEEE inf/NaN semantics.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Remainder, with the same failure rule as [`checked_div`](Element::checked_div).
    fn checked_rem(self, rhs: Self) -> Option<Self>;

    /// Negation. Wrapping for integer kinds, logical NOT for booleans.
    /// The engine rejects negation on unsigned and char dtypes before this
    /// is ever reached for them.
    fn neg(self) -> Self;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(self / rhs)
    }

    #[inline]
    fn checked_rem(self, rhs: Self) -> Option<Self> {
        Some(self % rhs)
    }

    #[inline]
    fn neg(self) -> Self {
        -self
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(self / rhs)
    }

    #[inline]
    fn checked_rem(self, rhs: Self) -> Option<Self> {
        Some(self % rhs)
    }

    #[inline]
    fn neg(self) -> Self {
        -self
    }
}

/// Implements `Element` for the primitive integer types. Division and
/// remainder use the primitives' own checked operations, so division by zero
/// (and `MIN / -1` for the signed kinds) reports as a failure rather than
/// wrapping.
macro_rules! impl_int_element {
    ($($ty:ty => $dtype:expr),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = $dtype;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $ty
                }

                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_div(self, rhs)
                }

                #[inline]
                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_rem(self, rhs)
                }

                #[inline]
                fn neg(self) -> Self {
                    self.wrapping_neg()
                }
            }
        )*
    };
}

impl_int_element!(
    i64 => DType::I64,
    i32 => DType::I32,
    i16 => DType::I16,
    u64 => DType::U64,
    u32 => DType::U32,
    u16 => DType::U16,
    u8 => DType::U8,
);

impl Element for Boolean {
    const DTYPE: DType = DType::Bool;

    #[inline]
    fn to_f64(self) -> f64 {
        if self.as_bool() { 1.0 } else { 0.0 }
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        Self::from(v != 0.0)
    }

    #[inline]
    fn zero() -> Self {
        Self::FALSE
    }

    #[inline]
    fn one() -> Self {
        Self::TRUE
    }

    /// Numeric 0/1 division: `x / true == x`, `x / false` fails.
    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.as_bool() { Some(Self::from(self.as_bool())) } else { None }
    }

    /// Numeric 0/1 remainder: `x % true == false`, `x % false` fails.
    #[inline]
    fn checked_rem(self, rhs: Self) -> Option<Self> {
        if rhs.as_bool() { Some(Self::FALSE) } else { None }
    }

    /// Logical NOT
    #[inline]
    fn neg(self) -> Self {
        Self::from(!self.as_bool())
    }
}

impl Element for CharCode {
    const DTYPE: DType = DType::Char;

    #[inline]
    fn to_f64(self) -> f64 {
        self.code() as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        Self(v as u32)
    }

    #[inline]
    fn zero() -> Self {
        Self::NUL
    }

    #[inline]
    fn one() -> Self {
        Self(1)
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        self.0.checked_div(rhs.0).map(Self)
    }

    #[inline]
    fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.0.checked_rem(rhs.0).map(Self)
    }

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl Element for Dec128 {
    const DTYPE: DType = DType::Decimal;

    /// Lossy: decimals outside the f64 range report as 0.
    #[inline]
    fn to_f64(self) -> f64 {
        self.to_decimal().to_f64().unwrap_or(0.0)
    }

    /// Nearest decimal; NaN and infinities map to 0.
    #[inline]
    fn from_f64(v: f64) -> Self {
        Self::from_decimal(rust_decimal::Decimal::from_f64(v).unwrap_or_default())
    }

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn one() -> Self {
        Self::from_decimal(rust_decimal::Decimal::ONE)
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        self.to_decimal().checked_div(rhs.to_decimal()).map(Self::from_decimal)
    }

    #[inline]
    fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.to_decimal().checked_rem(rhs.to_decimal()).map(Self::from_decimal)
    }

    #[inline]
    fn neg(self) -> Self {
        Self::from_decimal(-self.to_decimal())
    }
}

//! Conversion rules between element kinds
//!
//! `CastFrom` is the single place numeric conversion policy lives: every
//! (source kind, destination kind) pair in the dtype set has exactly one
//! impl here, and both the public `cast` operation and the engine's
//! promotion step go through it.
//!
//! Policy, per destination family:
//! - int -> int: two's-complement truncation (Rust `as` semantics)
//! - float -> int: truncate toward zero, saturating at the target bounds,
//!   NaN -> 0 (Rust `as` semantics)
//! - -> float: nearest representable value
//! - -> bool: nonzero test (NaN is nonzero)
//! - bool -> numeric: 0/1
//! - char <-> numeric: through the u32 code point, same int rules
//! - -> decimal: exact for ints/bool/char; floats convert to the nearest
//!   decimal with NaN/inf mapping to 0
//! - decimal -> numeric: through f64 (lossy for decimals beyond 2^53)

use super::{Boolean, CharCode, Dec128};
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Conversion from another element kind.
///
/// Total over the supported dtype set: the dispatch machinery instantiates
/// every ordered pair, so a missing impl is a compile error, not a runtime
/// one.
pub trait CastFrom<S>: Sized {
    /// Convert `v` into this kind under the module's conversion policy.
    fn cast_from(v: S) -> Self;
}

// Primitive <-> primitive conversions use Rust `as` casts.
macro_rules! cast_via_as {
    ($src:ty => $($dst:ty),+) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn cast_from(v: $src) -> Self {
                    v as $dst
                }
            }
        )+
    };
}

macro_rules! cast_primitives {
    ($($src:ty),+) => {
        $(
            cast_via_as!($src => u8, u16, u32, u64, i16, i32, i64, f32, f64);
        )+
    };
}

cast_primitives!(u8, u16, u32, u64, i16, i32, i64, f32, f64);

// Boolean: nonzero test in, 0/1 out.
macro_rules! cast_boolean {
    ($($ty:ty),+) => {
        $(
            impl CastFrom<$ty> for Boolean {
                #[inline]
                fn cast_from(v: $ty) -> Self {
                    Boolean::from(v != (0 as $ty))
                }
            }

            impl CastFrom<Boolean> for $ty {
                #[inline]
                fn cast_from(v: Boolean) -> Self {
                    if v.as_bool() { 1 as $ty } else { 0 as $ty }
                }
            }
        )+
    };
}

cast_boolean!(u8, u16, u32, u64, i16, i32, i64, f32, f64);

impl CastFrom<Boolean> for Boolean {
    #[inline]
    fn cast_from(v: Boolean) -> Self {
        v
    }
}

// Char: through the u32 code point.
macro_rules! cast_charcode {
    ($($ty:ty),+) => {
        $(
            impl CastFrom<$ty> for CharCode {
                #[inline]
                fn cast_from(v: $ty) -> Self {
                    CharCode(v as u32)
                }
            }

            impl CastFrom<CharCode> for $ty {
                #[inline]
                fn cast_from(v: CharCode) -> Self {
                    v.code() as $ty
                }
            }
        )+
    };
}

cast_charcode!(u8, u16, u32, u64, i16, i32, i64, f32, f64);

impl CastFrom<CharCode> for CharCode {
    #[inline]
    fn cast_from(v: CharCode) -> Self {
        v
    }
}

impl CastFrom<Boolean> for CharCode {
    #[inline]
    fn cast_from(v: Boolean) -> Self {
        CharCode(v.as_bool() as u32)
    }
}

impl CastFrom<CharCode> for Boolean {
    #[inline]
    fn cast_from(v: CharCode) -> Self {
        Boolean::from(v.code() != 0)
    }
}

// Decimal: exact from the integer family, nearest from floats,
// through f64 on the way out.
macro_rules! cast_decimal_int {
    ($($ty:ty),+) => {
        $(
            impl CastFrom<$ty> for Dec128 {
                #[inline]
                fn cast_from(v: $ty) -> Self {
                    Dec128::from_decimal(Decimal::from(v))
                }
            }

            impl CastFrom<Dec128> for $ty {
                #[inline]
                fn cast_from(v: Dec128) -> Self {
                    v.to_decimal().to_f64().unwrap_or(0.0) as $ty
                }
            }
        )+
    };
}

cast_decimal_int!(u8, u16, u32, u64, i16, i32, i64);

macro_rules! cast_decimal_float {
    ($($ty:ty),+) => {
        $(
            impl CastFrom<$ty> for Dec128 {
                #[inline]
                fn cast_from(v: $ty) -> Self {
                    Dec128::from_decimal(Decimal::from_f64(v as f64).unwrap_or_default())
                }
            }

            impl CastFrom<Dec128> for $ty {
                #[inline]
                fn cast_from(v: Dec128) -> Self {
                    v.to_decimal().to_f64().unwrap_or(0.0) as $ty
                }
            }
        )+
    };
}

cast_decimal_float!(f32, f64);

impl CastFrom<Dec128> for Dec128 {
    #[inline]
    fn cast_from(v: Dec128) -> Self {
        v
    }
}

impl CastFrom<Boolean> for Dec128 {
    #[inline]
    fn cast_from(v: Boolean) -> Self {
        if v.as_bool() {
            Dec128::from_decimal(Decimal::ONE)
        } else {
            Dec128::ZERO
        }
    }
}

impl CastFrom<Dec128> for Boolean {
    #[inline]
    fn cast_from(v: Dec128) -> Self {
        Boolean::from(!v.to_decimal().is_zero())
    }
}

impl CastFrom<CharCode> for Dec128 {
    #[inline]
    fn cast_from(v: CharCode) -> Self {
        Dec128::from_decimal(Decimal::from(v.code()))
    }
}

impl CastFrom<Dec128> for CharCode {
    #[inline]
    fn cast_from(v: Dec128) -> Self {
        CharCode(v.to_decimal().to_f64().unwrap_or(0.0) as u32)
    }
}

//! Numeric promotion lattice for binary operations

use super::DType;

/// Promote two dtypes to the common dtype a binary operation computes in.
///
/// The lattice is total and symmetric over the whole dtype set. It follows
/// NumPy-style array promotion:
/// - equal kinds stay put;
/// - decimal absorbs every other kind;
/// - bool loses to everything, char loses to every numeric kind;
/// - floats win over integers, with f32 widening to f64 when the integer
///   side has 32 or more bits (f32 cannot hold its full range);
/// - same-signedness integers widen to the larger;
/// - mixed signedness resolves to the signed type wide enough for both
///   ranges, falling through to f64 when no 64-bit integer can hold them
///   (i64 x u64).
pub fn promote(lhs: DType, rhs: DType) -> DType {
    use DType::*;

    if lhs == rhs {
        return lhs;
    }

    if lhs == Decimal || rhs == Decimal {
        return Decimal;
    }

    // Bool and Char lose to any other kind; Char beats Bool.
    if lhs == Bool {
        return rhs;
    }
    if rhs == Bool {
        return lhs;
    }
    if lhs == Char {
        return rhs;
    }
    if rhs == Char {
        return lhs;
    }

    // Both numeric from here on.
    if lhs == F64 || rhs == F64 {
        return F64;
    }
    if lhs == F32 || rhs == F32 {
        let other = if lhs == F32 { rhs } else { lhs };
        return if int_bits(other) <= 16 { F32 } else { F64 };
    }

    // Both integers.
    let (l_bits, l_signed) = (int_bits(lhs), lhs.is_signed_int());
    let (r_bits, r_signed) = (int_bits(rhs), rhs.is_signed_int());

    if l_signed == r_signed {
        let bits = l_bits.max(r_bits);
        return if l_signed { signed_of(bits) } else { unsigned_of(bits) };
    }

    let (s_bits, u_bits) = if l_signed { (l_bits, r_bits) } else { (r_bits, l_bits) };
    if s_bits > u_bits {
        signed_of(s_bits)
    } else if u_bits == 64 {
        // No signed integer holds the full u64 range.
        F64
    } else {
        signed_of(u_bits * 2)
    }
}

fn int_bits(dt: DType) -> u8 {
    use DType::*;
    match dt {
        I64 | U64 => 64,
        I32 | U32 => 32,
        I16 | U16 => 16,
        U8 => 8,
        _ => unreachable!("int_bits called on non-integer dtype {dt}"),
    }
}

fn signed_of(bits: u8) -> DType {
    match bits {
        16 => DType::I16,
        32 => DType::I32,
        _ => DType::I64,
    }
}

fn unsigned_of(bits: u8) -> DType {
    match bits {
        8 => DType::U8,
        16 => DType::U16,
        32 => DType::U32,
        _ => DType::U64,
    }
}

//! Promotion lattice totality and conversion policy pins

use narray::dtype::promote;
use narray::{ops, DType, NdArray};

#[test]
fn test_lattice_total_and_symmetric() {
    for a in DType::ALL {
        for b in DType::ALL {
            let ab = promote(a, b);
            let ba = promote(b, a);
            assert_eq!(ab, ba, "promote({a}, {b})");
            // The result is always a member of the supported set
            assert!(DType::ALL.contains(&ab));
        }
    }
}

#[test]
fn test_lattice_spot_pins() {
    use DType::*;
    assert_eq!(promote(Bool, I32), I32);
    assert_eq!(promote(Bool, Char), Char);
    assert_eq!(promote(Char, U8), U8);
    assert_eq!(promote(U8, I16), I16);
    assert_eq!(promote(I16, U16), I32);
    assert_eq!(promote(I32, U32), I64);
    assert_eq!(promote(I64, U64), F64);
    assert_eq!(promote(I32, F32), F64);
    assert_eq!(promote(U16, F32), F32);
    assert_eq!(promote(F32, F64), F64);
    assert_eq!(promote(F64, Decimal), Decimal);
}

#[test]
fn test_every_pair_is_operable() {
    // The dispatch engine must accept any combination of kinds: build a
    // one-element array of each dtype and add every pair.
    let arrays: Vec<NdArray> = DType::ALL
        .iter()
        .map(|&dt| ops::cast(&NdArray::from_slice(&[1i32], &[1]).unwrap(), dt).unwrap())
        .collect();

    for a in &arrays {
        for b in &arrays {
            let c = ops::add(a, b).unwrap();
            assert_eq!(c.dtype(), promote(a.dtype(), b.dtype()));
        }
    }
}

#[test]
fn test_cast_float_to_int_saturates_and_truncates() {
    let a = NdArray::from_slice(&[3.9f64, -3.9, 1e12, -1e12, f64::NAN], &[5]).unwrap();
    let c = ops::cast(&a, DType::I32).unwrap();
    assert_eq!(
        c.to_vec::<i32>().unwrap(),
        vec![3, -3, i32::MAX, i32::MIN, 0]
    );
}

#[test]
fn test_cast_int_narrowing_wraps() {
    let a = NdArray::from_slice(&[300i32, -1], &[2]).unwrap();
    let c = ops::cast(&a, DType::U8).unwrap();
    assert_eq!(c.to_vec::<u8>().unwrap(), vec![44, 255]);
}

#[test]
fn test_cast_to_bool_is_nonzero_test() {
    let a = NdArray::from_slice(&[0.0f64, -0.5, f64::NAN, 0.0], &[4]).unwrap();
    let c = ops::cast(&a, DType::Bool).unwrap();
    assert_eq!(c.to_bools().unwrap(), vec![false, true, true, false]);
}

#[test]
fn test_cast_bool_to_numeric_is_zero_one() {
    let a = NdArray::from_bools(&[true, false], &[2]).unwrap();
    let c = ops::cast(&a, DType::F32).unwrap();
    assert_eq!(c.to_vec::<f32>().unwrap(), vec![1.0, 0.0]);
}

#[test]
fn test_cast_char_roundtrip_through_u32() {
    let a = NdArray::from_chars(&['a', 'Z'], &[2]).unwrap();
    let ints = ops::cast(&a, DType::U32).unwrap();
    assert_eq!(ints.to_vec::<u32>().unwrap(), vec![97, 90]);
    let back = ops::cast(&ints, DType::Char).unwrap();
    assert_eq!(back.to_chars().unwrap(), vec!['a', 'Z']);
}

#[test]
fn test_cast_int_to_decimal_is_exact() {
    use narray::rust_decimal::Decimal;
    let a = NdArray::from_slice(&[i64::MAX, -1], &[2]).unwrap();
    let c = ops::cast(&a, DType::Decimal).unwrap();
    assert_eq!(
        c.to_decimals().unwrap(),
        vec![Decimal::from(i64::MAX), Decimal::from(-1)]
    );
}

#[test]
fn test_cast_identity_returns_same_data() {
    let a = NdArray::from_slice(&[1i16, 2, 3], &[3]).unwrap();
    let c = ops::cast(&a, DType::I16).unwrap();
    assert_eq!(c.to_vec::<i16>().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_result_dtype_follows_lattice_for_views() {
    // Promotion applies the same way when operands are broadcast views
    let a = NdArray::from_slice(&[1u8, 2], &[2, 1]).unwrap();
    let b = NdArray::from_slice(&[1.5f32, 2.5, 3.5], &[1, 3]).unwrap();
    let c = ops::add(&a, &b).unwrap();
    assert_eq!(c.dtype(), DType::F32);
    assert_eq!(c.shape(), &[2, 3]);
}

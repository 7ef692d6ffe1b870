//! Element-wise operator behavior across dtypes, shapes, and iteration paths

mod common;

use common::{assert_allclose_f64, storage_bytes};
use narray::{ops, DType, Error, NdArray};

// ============================================================================
// Scalar fast path
// ============================================================================

#[test]
fn test_scalar_scalar_add() {
    let a = NdArray::scalar(3i32);
    let b = NdArray::scalar(4i32);
    let c = ops::add(&a, &b).unwrap();
    assert!(c.is_scalar());
    assert_eq!(c.dtype(), DType::I32);
    assert_eq!(c.scalar_value::<i32>().unwrap(), 7);
}

#[test]
fn test_scalar_scalar_mixed_kinds() {
    let a = NdArray::scalar(3i16);
    let b = NdArray::scalar(2.5f64);
    let c = ops::multiply(&a, &b).unwrap();
    assert_eq!(c.dtype(), DType::F64);
    assert_eq!(c.scalar_value::<f64>().unwrap(), 7.5);
}

#[test]
fn test_scalar_integer_divide_by_zero_fails() {
    let a = NdArray::scalar(5i32);
    let b = NdArray::scalar(0i32);
    let err = ops::divide(&a, &b).unwrap_err();
    assert!(matches!(err, Error::DivisionByZero { .. }), "got {err:?}");
}

#[test]
fn test_scalar_float_divide_by_zero_is_ieee() {
    let a = NdArray::scalar(5.0f64);
    let b = NdArray::scalar(0.0f64);
    let c = ops::divide(&a, &b).unwrap();
    assert!(c.scalar_value::<f64>().unwrap().is_infinite());
}

// ============================================================================
// Broadcast paths
// ============================================================================

#[test]
fn test_array_plus_scalar_broadcast() {
    let a = NdArray::from_slice(&[1i32, 2, 3, 4], &[2, 2]).unwrap();
    let b = NdArray::scalar(10i32);
    let c = ops::add(&a, &b).unwrap();
    assert_eq!(c.shape(), &[2, 2]);
    assert_eq!(c.to_vec::<i32>().unwrap(), vec![11, 12, 13, 14]);
}

#[test]
fn test_two_sided_broadcast() {
    // [3,1] + [1,4] -> [3,4], out[i,j] = left[i,0] + right[0,j]
    let a = NdArray::from_slice(&[0i32, 10, 20], &[3, 1]).unwrap();
    let b = NdArray::from_slice(&[1i32, 2, 3, 4], &[1, 4]).unwrap();
    let c = ops::add(&a, &b).unwrap();
    assert_eq!(c.shape(), &[3, 4]);
    assert_eq!(
        c.to_vec::<i32>().unwrap(),
        vec![1, 2, 3, 4, 11, 12, 13, 14, 21, 22, 23, 24]
    );
}

#[test]
fn test_rank_padding_broadcast() {
    let a = NdArray::from_slice(&[1i64, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    let b = NdArray::from_slice(&[10i64, 20, 30], &[3]).unwrap();
    let c = ops::add(&a, &b).unwrap();
    assert_eq!(c.to_vec::<i64>().unwrap(), vec![11, 22, 33, 14, 25, 36]);
}

#[test]
fn test_incompatible_shapes_fail_before_allocation() {
    let a = NdArray::zeros(&[3, 4], DType::F32);
    let b = NdArray::zeros(&[3, 5], DType::F32);
    let err = ops::add(&a, &b).unwrap_err();
    match err {
        Error::BroadcastError {
            axis,
            lhs_extent,
            rhs_extent,
            ..
        } => {
            assert_eq!(axis, 1);
            assert_eq!((lhs_extent, rhs_extent), (4, 5));
        }
        other => panic!("expected BroadcastError, got {other:?}"),
    }
}

// ============================================================================
// Promotion through operators
// ============================================================================

#[test]
fn test_bool_times_int_is_mask() {
    let mask = NdArray::from_bools(&[true, false, true], &[3]).unwrap();
    let vals = NdArray::from_slice(&[2i32, 3, 4], &[3]).unwrap();
    let c = ops::multiply(&mask, &vals).unwrap();
    assert_eq!(c.dtype(), DType::I32);
    assert_eq!(c.to_vec::<i32>().unwrap(), vec![2, 0, 4]);
}

#[test]
fn test_mixed_width_promotion() {
    let a = NdArray::from_slice(&[1i16, 2], &[2]).unwrap();
    let b = NdArray::from_slice(&[100_000u32, 5], &[2]).unwrap();
    let c = ops::add(&a, &b).unwrap();
    assert_eq!(c.dtype(), DType::I64);
    assert_eq!(c.to_vec::<i64>().unwrap(), vec![100_001, 7]);
}

#[test]
fn test_int_float_promotion_values() {
    let a = NdArray::from_slice(&[1i32, 2], &[2]).unwrap();
    let b = NdArray::from_slice(&[0.5f32, 0.25], &[2]).unwrap();
    let c = ops::add(&a, &b).unwrap();
    // i32 x f32 -> f64: f32 cannot hold the full i32 range
    assert_eq!(c.dtype(), DType::F64);
    assert_allclose_f64(
        &c.to_vec::<f64>().unwrap(),
        &[1.5, 2.25],
        1e-12,
        0.0,
        "i32 + f32",
    );
}

#[test]
fn test_char_plus_int_is_int() {
    let a = NdArray::from_chars(&['a', 'b'], &[2]).unwrap();
    let b = NdArray::from_slice(&[1i32, 2], &[2]).unwrap();
    let c = ops::add(&a, &b).unwrap();
    assert_eq!(c.dtype(), DType::I32);
    assert_eq!(c.to_vec::<i32>().unwrap(), vec![98, 100]);
}

#[test]
fn test_char_pair_stays_char() {
    let a = NdArray::from_chars(&['a', 'b'], &[2]).unwrap();
    let b = NdArray::from_chars(&['\u{1}', '\u{2}'], &[2]).unwrap();
    let c = ops::add(&a, &b).unwrap();
    assert_eq!(c.dtype(), DType::Char);
    assert_eq!(c.to_chars().unwrap(), vec!['b', 'd']);
}

// ============================================================================
// Boolean-pair operator forms
// ============================================================================

#[test]
fn test_bool_pair_add_is_or() {
    let a = NdArray::from_bools(&[true, true, false, false], &[4]).unwrap();
    let b = NdArray::from_bools(&[true, false, true, false], &[4]).unwrap();
    let c = ops::add(&a, &b).unwrap();
    assert_eq!(c.dtype(), DType::Bool);
    assert_eq!(c.to_bools().unwrap(), vec![true, true, true, false]);
}

#[test]
fn test_bool_pair_mul_is_and() {
    let a = NdArray::from_bools(&[true, true, false, false], &[4]).unwrap();
    let b = NdArray::from_bools(&[true, false, true, false], &[4]).unwrap();
    let c = ops::multiply(&a, &b).unwrap();
    assert_eq!(c.to_bools().unwrap(), vec![true, false, false, false]);
}

#[test]
fn test_bool_pair_sub_is_xor() {
    let a = NdArray::from_bools(&[true, true, false, false], &[4]).unwrap();
    let b = NdArray::from_bools(&[true, false, true, false], &[4]).unwrap();
    let c = ops::subtract(&a, &b).unwrap();
    assert_eq!(c.to_bools().unwrap(), vec![false, true, true, false]);
}

#[test]
fn test_bool_pair_divide_by_false_fails() {
    let a = NdArray::from_bools(&[true], &[1]).unwrap();
    let b = NdArray::from_bools(&[false], &[1]).unwrap();
    assert!(ops::divide(&a, &b).is_err());
}

// ============================================================================
// Division and remainder semantics
// ============================================================================

#[test]
fn test_integer_division_truncates() {
    let a = NdArray::from_slice(&[7i32, -7, 9], &[3]).unwrap();
    let b = NdArray::from_slice(&[2i32, 2, 3], &[3]).unwrap();
    let c = ops::divide(&a, &b).unwrap();
    assert_eq!(c.to_vec::<i32>().unwrap(), vec![3, -3, 3]);
}

#[test]
fn test_integer_division_by_zero_in_array() {
    let a = NdArray::from_slice(&[4i32, 9], &[2]).unwrap();
    let b = NdArray::from_slice(&[2i32, 0], &[2]).unwrap();
    assert!(ops::divide(&a, &b).is_err());
}

#[test]
fn test_modulo() {
    let a = NdArray::from_slice(&[7i32, 9, 10], &[3]).unwrap();
    let b = NdArray::from_slice(&[3i32, 3, 4], &[3]).unwrap();
    let c = ops::modulo(&a, &b).unwrap();
    assert_eq!(c.to_vec::<i32>().unwrap(), vec![1, 0, 2]);
}

#[test]
fn test_float_division_produces_nan_and_inf() {
    let a = NdArray::from_slice(&[1.0f64, 0.0, -1.0], &[3]).unwrap();
    let b = NdArray::from_slice(&[0.0f64, 0.0, 0.0], &[3]).unwrap();
    let c = ops::divide(&a, &b).unwrap();
    let out = c.to_vec::<f64>().unwrap();
    assert_eq!(out[0], f64::INFINITY);
    assert!(out[1].is_nan());
    assert_eq!(out[2], f64::NEG_INFINITY);
}

// ============================================================================
// Decimal
// ============================================================================

#[test]
fn test_decimal_addition_is_exact() {
    use narray::rust_decimal::Decimal;
    let a = NdArray::from_decimals(&[Decimal::new(1, 1)], &[1]).unwrap(); // 0.1
    let b = NdArray::from_decimals(&[Decimal::new(2, 1)], &[1]).unwrap(); // 0.2
    let c = ops::add(&a, &b).unwrap();
    assert_eq!(c.dtype(), DType::Decimal);
    assert_eq!(c.to_decimals().unwrap(), vec![Decimal::new(3, 1)]);
}

#[test]
fn test_decimal_absorbs_float() {
    use narray::rust_decimal::Decimal;
    let a = NdArray::from_decimals(&[Decimal::new(15, 1)], &[1]).unwrap(); // 1.5
    let b = NdArray::from_slice(&[2.0f64], &[1]).unwrap();
    let c = ops::multiply(&a, &b).unwrap();
    assert_eq!(c.dtype(), DType::Decimal);
    assert_eq!(c.to_decimals().unwrap(), vec![Decimal::new(3, 0)]);
}

#[test]
fn test_decimal_division_by_zero_fails() {
    use narray::rust_decimal::Decimal;
    let a = NdArray::from_decimals(&[Decimal::ONE], &[1]).unwrap();
    let b = NdArray::from_decimals(&[Decimal::ZERO], &[1]).unwrap();
    assert!(ops::divide(&a, &b).is_err());
}

// ============================================================================
// Comparisons and logical operators
// ============================================================================

#[test]
fn test_compare_mixed_kinds() {
    let a = NdArray::from_slice(&[1i32, 5, 3], &[3]).unwrap();
    let b = NdArray::from_slice(&[2.0f64, 5.0, 1.0], &[3]).unwrap();
    let lt = ops::less(&a, &b).unwrap();
    assert_eq!(lt.dtype(), DType::Bool);
    assert_eq!(lt.to_bools().unwrap(), vec![true, false, false]);
    let ge = ops::greater_equal(&a, &b).unwrap();
    assert_eq!(ge.to_bools().unwrap(), vec![false, true, true]);
}

#[test]
fn test_equal_broadcasts() {
    let a = NdArray::from_slice(&[1i32, 2, 3], &[3]).unwrap();
    let b = NdArray::scalar(2i32);
    let c = ops::equal(&a, &b).unwrap();
    assert_eq!(c.to_bools().unwrap(), vec![false, true, false]);
}

#[test]
fn test_logical_ops_coerce_nonzero() {
    let a = NdArray::from_slice(&[0i32, 3, 0, -1], &[4]).unwrap();
    let b = NdArray::from_slice(&[1.0f64, 0.0, 0.0, 2.0], &[4]).unwrap();
    let and = ops::logical_and(&a, &b).unwrap();
    assert_eq!(and.to_bools().unwrap(), vec![false, false, false, true]);
    let or = ops::logical_or(&a, &b).unwrap();
    assert_eq!(or.to_bools().unwrap(), vec![true, true, false, true]);
    let xor = ops::logical_xor(&a, &b).unwrap();
    assert_eq!(xor.to_bools().unwrap(), vec![true, true, false, false]);
}

// ============================================================================
// Negation
// ============================================================================

#[test]
fn test_negate() {
    let a = NdArray::from_slice(&[1i32, -2, 3], &[3]).unwrap();
    assert_eq!(
        ops::negate(&a).unwrap().to_vec::<i32>().unwrap(),
        vec![-1, 2, -3]
    );

    let b = NdArray::from_bools(&[true, false], &[2]).unwrap();
    assert_eq!(
        ops::negate(&b).unwrap().to_bools().unwrap(),
        vec![false, true]
    );

    let u = NdArray::from_slice(&[1u8, 2], &[2]).unwrap();
    assert!(matches!(
        ops::negate(&u).unwrap_err(),
        Error::UnsupportedDType { .. }
    ));
}

// ============================================================================
// Inputs are never mutated
// ============================================================================

#[test]
fn test_operands_unchanged_after_ops() {
    let a = NdArray::from_slice(&[1i32, 2, 3, 4], &[2, 2]).unwrap();
    let b = NdArray::from_slice(&[5i32, 0, -1, 2], &[1, 4]).unwrap();
    let a_bytes = storage_bytes(&a);
    let b_bytes = storage_bytes(&b);

    let a2 = a.reshape(&[1, 4]).unwrap();
    let _ = ops::add(&a2, &b).unwrap();
    let _ = ops::multiply(&a2, &b).unwrap();
    let _ = ops::less(&a2, &b).unwrap();
    let _ = ops::divide(&a2, &b); // errors on the zero divisor
    let _ = ops::negate(&a).unwrap();

    assert_eq!(storage_bytes(&a), a_bytes);
    assert_eq!(storage_bytes(&b), b_bytes);
}

// ============================================================================
// Path equivalence: strided and broadcast views must match the linear path
// ============================================================================

#[test]
fn test_transposed_operand_matches_materialized() {
    let a = NdArray::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    let b = NdArray::from_slice(&[10i32, 20, 30, 40, 50, 60], &[3, 2]).unwrap();

    // Strided path: transposed view of a
    let at = a.transpose(0, 1).unwrap();
    let strided = ops::add(&at, &b).unwrap();

    // Linear path: materialized copy of the same data
    let at_mat = NdArray::from_slice(&at.to_vec::<i32>().unwrap(), &[3, 2]).unwrap();
    let linear = ops::add(&at_mat, &b).unwrap();

    assert_eq!(
        strided.to_vec::<i32>().unwrap(),
        linear.to_vec::<i32>().unwrap()
    );
}

#[test]
fn test_narrowed_operand_matches_materialized() {
    let a = NdArray::from_slice(&(0i64..24).collect::<Vec<_>>(), &[4, 6]).unwrap();
    let b = NdArray::from_slice(&[1i64, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12], &[2, 6]).unwrap();

    let view = a.narrow(0, 1, 2).unwrap();
    let strided = ops::multiply(&view, &b).unwrap();

    let view_mat = NdArray::from_slice(&view.to_vec::<i64>().unwrap(), &[2, 6]).unwrap();
    let linear = ops::multiply(&view_mat, &b).unwrap();

    assert_eq!(
        strided.to_vec::<i64>().unwrap(),
        linear.to_vec::<i64>().unwrap()
    );
}

#[test]
fn test_broadcast_view_matches_materialized() {
    let col = NdArray::from_slice(&[1.5f64, -2.0, 0.25], &[3, 1]).unwrap();
    let full = NdArray::from_slice(&(0..12).map(f64::from).collect::<Vec<_>>(), &[3, 4]).unwrap();

    let broadcasted = ops::multiply(&col, &full).unwrap();

    let col_mat =
        NdArray::from_slice(&col.broadcast_to(&[3, 4]).unwrap().to_vec::<f64>().unwrap(), &[3, 4])
            .unwrap();
    let linear = ops::multiply(&col_mat, &full).unwrap();

    assert_allclose_f64(
        &broadcasted.to_vec::<f64>().unwrap(),
        &linear.to_vec::<f64>().unwrap(),
        0.0,
        0.0,
        "broadcast vs materialized",
    );
}

#[test]
fn test_large_parallel_path_matches_small_chunks() {
    // Big enough to cross the rayon threshold
    let n = 100_000usize;
    let a_data: Vec<i64> = (0..n as i64).collect();
    let b_data: Vec<i64> = (0..n as i64).map(|x| x * 3 + 1).collect();
    let a = NdArray::from_slice(&a_data, &[n]).unwrap();
    let b = NdArray::from_slice(&b_data, &[n]).unwrap();

    let c = ops::add(&a, &b).unwrap();
    let out = c.to_vec::<i64>().unwrap();
    for i in (0..n).step_by(7919) {
        assert_eq!(out[i], a_data[i] + b_data[i]);
    }
    assert_eq!(out[n - 1], a_data[n - 1] + b_data[n - 1]);
}

#[test]
fn test_large_parallel_divide_detects_zero() {
    let n = 50_000usize;
    let a = NdArray::from_slice(&vec![6i32; n], &[n]).unwrap();
    let mut b_data = vec![3i32; n];
    b_data[n - 2] = 0;
    let b = NdArray::from_slice(&b_data, &[n]).unwrap();
    assert!(ops::divide(&a, &b).is_err());
}

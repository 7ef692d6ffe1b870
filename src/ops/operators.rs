//! Standard operator impls for array references
//!
//! `&a + &b` style sugar over the fallible functions in [`crate::ops`].
//! These panic on shape or arithmetic errors; use the named functions when
//! the error needs to be handled.

use super::{add, divide, modulo, multiply, negate, subtract};
use crate::array::NdArray;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

impl Add for &NdArray {
    type Output = NdArray;

    /// # Panics
    /// Panics if the shapes cannot be broadcast together.
    fn add(self, rhs: Self) -> NdArray {
        add(self, rhs).expect("NdArray addition failed")
    }
}

impl Sub for &NdArray {
    type Output = NdArray;

    /// # Panics
    /// Panics if the shapes cannot be broadcast together.
    fn sub(self, rhs: Self) -> NdArray {
        subtract(self, rhs).expect("NdArray subtraction failed")
    }
}

impl Mul for &NdArray {
    type Output = NdArray;

    /// # Panics
    /// Panics if the shapes cannot be broadcast together.
    fn mul(self, rhs: Self) -> NdArray {
        multiply(self, rhs).expect("NdArray multiplication failed")
    }
}

impl Div for &NdArray {
    type Output = NdArray;

    /// # Panics
    /// Panics if the shapes cannot be broadcast together or an integer
    /// divisor is zero.
    fn div(self, rhs: Self) -> NdArray {
        divide(self, rhs).expect("NdArray division failed")
    }
}

impl Rem for &NdArray {
    type Output = NdArray;

    /// # Panics
    /// Panics if the shapes cannot be broadcast together or an integer
    /// divisor is zero.
    fn rem(self, rhs: Self) -> NdArray {
        modulo(self, rhs).expect("NdArray remainder failed")
    }
}

impl Neg for &NdArray {
    type Output = NdArray;

    /// # Panics
    /// Panics if the dtype does not support negation.
    fn neg(self) -> NdArray {
        negate(self).expect("NdArray negation failed")
    }
}

//! DType dispatch macro
//!
//! `dispatch_dtype!` converts a runtime [`DType`](crate::dtype::DType) value
//! into a concrete element type bound to an identifier, monomorphizing the
//! body once per kind. This is the single runtime type decision per operator
//! call; the per-element loops it selects carry no type dispatch at all.
//!
//! # Usage
//!
//! ```ignore
//! dispatch_dtype!(dtype, T => {
//!     // T is now a concrete element type (f32, i64, Boolean, ...)
//!     let size = std::mem::size_of::<T>();
//! });
//! ```
//!
//! The macro is an expression: every arm's body must evaluate to the same
//! type. Nesting two invocations (as the cast kernel does) instantiates the
//! body once per ordered dtype pair.

/// Macro for runtime dtype dispatch to typed operations.
#[macro_export]
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::I64 => {
                type $T = i64;
                $body
            }
            $crate::dtype::DType::I32 => {
                type $T = i32;
                $body
            }
            $crate::dtype::DType::I16 => {
                type $T = i16;
                $body
            }
            $crate::dtype::DType::U64 => {
                type $T = u64;
                $body
            }
            $crate::dtype::DType::U32 => {
                type $T = u32;
                $body
            }
            $crate::dtype::DType::U16 => {
                type $T = u16;
                $body
            }
            $crate::dtype::DType::U8 => {
                type $T = u8;
                $body
            }
            $crate::dtype::DType::Bool => {
                type $T = $crate::dtype::Boolean;
                $body
            }
            $crate::dtype::DType::Char => {
                type $T = $crate::dtype::CharCode;
                $body
            }
            $crate::dtype::DType::Decimal => {
                type $T = $crate::dtype::Dec128;
                $body
            }
        }
    };
}

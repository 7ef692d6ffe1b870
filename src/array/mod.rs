//! Array types
//!
//! This module provides the core `NdArray` type, an n-dimensional array with
//! a runtime element type, plus its layout and storage building blocks.

mod core;
mod layout;
mod storage;

pub use core::NdArray;
pub use layout::{Layout, Shape, Strides};
pub use storage::Storage;

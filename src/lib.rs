//! sphereless-maths: a small linear-algebra kernel for orientation and kinematics code.
//!
//! This crate provides dynamically-sized `Vector` and `Matrix` containers over
//! `u32`, `i32` and `f64`, with in-place and out-of-place arithmetic, row/column
//! orientation semantics (transpose without moving data), and builders for the
//! axis-aligned rotation matrices and their time derivatives.
//!
//! Shape mismatches and type-incompatible scalings on in-place operators are
//! silent no-ops; use the predicates (`has_same_size`, `can_multiply`,
//! `is_divisible`, ...) to check beforehand. Out-of-place products return
//! `Result` and out-of-range indexing panics.
pub mod config;
pub mod error;
pub mod math;

pub use error::LinalgError;
pub use math::{Addressing, Axis, Element, ElementKind, Matrix, Orientation, Vector};

//! Vector and matrix containers.
//!
//! `Vector` owns a fixed-length buffer and a row/column tag. `Matrix` layers
//! 2-D addressing on top of a single `Vector`, choosing column-major or
//! row-major offsets from that tag so transposition never moves data.
pub mod element;
mod format;
pub mod matrix;
pub mod rotation;
pub mod vector;

pub use element::{Element, ElementKind};
pub use matrix::{Addressing, Matrix};
pub use rotation::Axis;
pub use vector::{Orientation, Vector};

use std::error::Error;
use std::fmt;

/// Failures surfaced by the out-of-place operators, fallible constructors and
/// tolerance configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for `op`. Shapes are `(rows, cols)`;
    /// vectors report `(len, 1)`.
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    NotSquare { rows: usize, cols: usize },
    Allocation { len: usize },
    CapacityOverflow { rows: usize, cols: usize },
    InvalidTolerance(f64),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "cannot {} operands of shape ({}, {}) and ({}, {})",
                op, lhs.0, lhs.1, rhs.0, rhs.1
            ),
            LinalgError::NotSquare { rows, cols } => {
                write!(f, "operation requires a square matrix, got ({}, {})", rows, cols)
            }
            LinalgError::Allocation { len } => {
                write!(f, "failed to allocate storage for {} elements", len)
            }
            LinalgError::CapacityOverflow { rows, cols } => {
                write!(f, "matrix of shape ({}, {}) overflows the addressable length", rows, cols)
            }
            LinalgError::InvalidTolerance(eps) => {
                write!(f, "tolerance must be finite and non-negative, got {}", eps)
            }
        }
    }
}

impl Error for LinalgError {}

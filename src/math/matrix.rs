use std::fmt;
use std::ops::{AddAssign, BitXor, Div, DivAssign, Index, IndexMut, Mul, MulAssign, SubAssign};

use crate::config;
use crate::error::LinalgError;
use crate::math::element::Element;
use crate::math::format::{significant, FIELD_WIDTH};
use crate::math::vector::{Orientation, Vector};

/// Mapping from `(row, col)` to a flat offset in the backing vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Addressing {
    /// `col * rows + row`; used while the backing vector is a column.
    ColumnMajor,
    /// `row * cols + col`; used while the backing vector is a row.
    RowMajor,
}

impl Addressing {
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Column => Addressing::ColumnMajor,
            Orientation::Row => Addressing::RowMajor,
        }
    }

    #[inline]
    pub fn offset(self, row: usize, col: usize, rows: usize, cols: usize) -> usize {
        match self {
            Addressing::ColumnMajor => col * rows + row,
            Addressing::RowMajor => row * cols + col,
        }
    }
}

/// Dense matrix stored as a flat [`Vector`] with 2-D addressing on top.
///
/// The addressing scheme follows the backing vector's orientation, so
/// [`Matrix::transpose`] only swaps the dimensions and flips that
/// orientation. In-place operators with incompatible shapes are no-ops;
/// the out-of-place products report shape errors through `Result`.
#[derive(Clone, Debug)]
pub struct Matrix<T> {
    data: Vector<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> Matrix<T> {
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("{}", LinalgError::CapacityOverflow { rows, cols }));
        Self {
            data: Vector::new(len, value),
            rows,
            cols,
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, T::zero())
    }

    /// Like [`Matrix::new`], but reports overflow and allocation failure.
    pub fn try_new(rows: usize, cols: usize, value: T) -> Result<Self, LinalgError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(LinalgError::CapacityOverflow { rows, cols })?;
        Ok(Self {
            data: Vector::try_new(len, value)?,
            rows,
            cols,
        })
    }

    /// Build from row-major `data`. The buffer is kept as-is behind a
    /// row-oriented backing vector.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, LinalgError> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(LinalgError::DimensionMismatch {
                op: "reshape",
                lhs: (rows, cols),
                rhs: (data.len(), 1),
            });
        }
        Ok(Self {
            data: Vector::from_vec_oriented(data, Orientation::Row),
            rows,
            cols,
        })
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        m.make_unity();
        m
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn has_same_size(&self, other: &Matrix<T>) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    pub fn can_multiply(&self, other: &Matrix<T>) -> bool {
        self.cols == other.rows
    }

    pub fn can_multiply_vector(&self, vec: &Vector<T>) -> bool {
        self.cols == vec.len()
    }

    pub fn addressing(&self) -> Addressing {
        Addressing::for_orientation(self.data.orientation())
    }

    /// The backing vector, in storage order.
    pub fn as_vector(&self) -> &Vector<T> {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for matrix of shape ({}, {})",
            row,
            col,
            self.rows,
            self.cols
        );
        self.addressing().offset(row, col, self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(self.addressing().offset(row, col, self.rows, self.cols))
        } else {
            None
        }
    }

    /// Row `row` as a new row vector.
    pub fn row(&self, row: usize) -> Vector<T> {
        let values: Vec<T> = (0..self.cols).map(|col| self[(row, col)]).collect();
        Vector::from_vec_oriented(values, Orientation::Row)
    }

    /// Column `col` as a new column vector.
    pub fn column(&self, col: usize) -> Vector<T> {
        (0..self.rows).map(|row| self[(row, col)]).collect()
    }

    fn same_layout(&self, other: &Matrix<T>) -> bool {
        self.has_same_size(other) && self.data.orientation() == other.data.orientation()
    }

    /// Copy `other`'s elements when both have the same size.
    pub fn assign_from(&mut self, other: &Matrix<T>) -> &mut Self {
        if self.same_layout(other) {
            self.data.assign_from(&other.data);
        } else if self.has_same_size(other) {
            self.zip_apply(other, |a, b| *a = b);
        } else {
            log::debug!(
                "Skipping matrix assignment: shape {:?} != {:?}",
                self.shape(),
                other.shape()
            );
        }
        self
    }

    /// Same shape and every element within `eps`.
    pub fn approx_eq(&self, other: &Matrix<T>, eps: f64) -> bool {
        if !self.has_same_size(other) {
            return false;
        }
        if self.same_layout(other) {
            return self.data.approx_eq(&other.data, eps);
        }
        (0..self.rows).all(|i| {
            (0..self.cols).all(|j| {
                let (a, b) = (self[(i, j)], other[(i, j)]);
                a == b || a.abs_diff_f64(b) < eps
            })
        })
    }

    // Elementwise in logical (row, col) order, for operands whose layouts differ.
    fn zip_apply(&mut self, other: &Matrix<T>, f: impl Fn(&mut T, T)) {
        for i in 0..self.rows {
            for j in 0..self.cols {
                let b = other[(i, j)];
                f(&mut self[(i, j)], b);
            }
        }
    }

    pub fn reset(&mut self, value: T) {
        self.data.reset(value);
    }

    /// Zero the matrix and set the leading diagonal, `min(rows, cols)` long, to one.
    pub fn make_unity(&mut self) {
        self.reset(T::zero());
        for i in 0..self.rows.min(self.cols) {
            self[(i, i)] = T::one();
        }
    }

    /// Transpose in O(1): flip the backing orientation and swap the dimensions.
    pub fn transpose(&mut self) -> &mut Self {
        self.data.transpose();
        std::mem::swap(&mut self.rows, &mut self.cols);
        self
    }

    /// Matrix product `self * other`, shaped `(self.rows, other.cols)`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        if !self.can_multiply(other) {
            return Err(LinalgError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let mut res = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc += self[(i, k)] * other[(k, j)];
                }
                res[(i, j)] = acc;
            }
        }
        Ok(res)
    }

    /// Matrix-vector product; the result is a column vector of length `rows`.
    pub fn mul_vector(&self, vec: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        if !self.can_multiply_vector(vec) {
            return Err(LinalgError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: (vec.len(), 1),
            });
        }
        let mut res = Vector::zeros(self.rows);
        for i in 0..self.rows {
            let mut acc = T::zero();
            for j in 0..self.cols {
                acc += self[(i, j)] * vec[j];
            }
            res[i] = acc;
        }
        Ok(res)
    }

    /// `self` multiplied `exponent` times onto the identity. Square matrices only.
    pub fn pow(&self, exponent: u32) -> Result<Matrix<T>, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut res = Matrix::identity(self.rows);
        for _ in 0..exponent {
            res *= self;
        }
        Ok(res)
    }
}

impl<T: Element> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, config::tolerance())
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<'a, T: Element> AddAssign<&'a Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &'a Matrix<T>) {
        if self.same_layout(rhs) {
            self.data += &rhs.data;
        } else if self.has_same_size(rhs) {
            self.zip_apply(rhs, |a, b| *a += b);
        } else {
            log::debug!("Skipping matrix +=: shape {:?} != {:?}", self.shape(), rhs.shape());
        }
    }
}

impl<'a, T: Element> SubAssign<&'a Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &'a Matrix<T>) {
        if self.same_layout(rhs) {
            self.data -= &rhs.data;
        } else if self.has_same_size(rhs) {
            self.zip_apply(rhs, |a, b| *a -= b);
        } else {
            log::debug!("Skipping matrix -=: shape {:?} != {:?}", self.shape(), rhs.shape());
        }
    }
}

impl<'a, T: Element> MulAssign<&'a Matrix<T>> for Matrix<T> {
    /// In-place product. Applied only when `self` is square and `rhs` has the
    /// same shape, so the result fits in `self`.
    fn mul_assign(&mut self, rhs: &'a Matrix<T>) {
        if !(self.is_square() && self.can_multiply(rhs) && rhs.ncols() == self.cols) {
            log::debug!("Skipping matrix *=: shape {:?} by {:?}", self.shape(), rhs.shape());
            return;
        }
        let snapshot = self.clone();
        self.reset(T::zero());
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc += snapshot[(i, k)] * rhs[(k, j)];
                }
                self[(i, j)] = acc;
            }
        }
    }
}

impl<T: Element> MulAssign<i32> for Matrix<T> {
    fn mul_assign(&mut self, factor: i32) {
        self.data *= factor;
    }
}

impl<T: Element> MulAssign<f64> for Matrix<T> {
    fn mul_assign(&mut self, factor: f64) {
        self.data *= factor;
    }
}

impl<T: Element> DivAssign<i32> for Matrix<T> {
    fn div_assign(&mut self, divisor: i32) {
        self.data /= divisor;
    }
}

impl<T: Element> DivAssign<f64> for Matrix<T> {
    fn div_assign(&mut self, divisor: f64) {
        self.data /= divisor;
    }
}

impl<'a, 'b, T: Element> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, LinalgError>;

    fn mul(self, rhs: &'b Matrix<T>) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<'a, 'b, T: Element> Mul<&'b Vector<T>> for &'a Matrix<T> {
    type Output = Result<Vector<T>, LinalgError>;

    fn mul(self, rhs: &'b Vector<T>) -> Self::Output {
        self.mul_vector(rhs)
    }
}

impl<'a, T: Element> BitXor<u32> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, LinalgError>;

    fn bitxor(self, exponent: u32) -> Self::Output {
        self.pow(exponent)
    }
}

macro_rules! impl_scalar_ops {
    ($scalar:ty) => {
        impl<'a, T: Element> Mul<$scalar> for &'a Matrix<T> {
            type Output = Matrix<T>;

            fn mul(self, factor: $scalar) -> Matrix<T> {
                let mut res = self.clone();
                res *= factor;
                res
            }
        }

        impl<'a, T: Element> Mul<&'a Matrix<T>> for $scalar {
            type Output = Matrix<T>;

            fn mul(self, mat: &'a Matrix<T>) -> Matrix<T> {
                mat * self
            }
        }

        impl<'a, T: Element> Div<$scalar> for &'a Matrix<T> {
            type Output = Matrix<T>;

            fn div(self, divisor: $scalar) -> Matrix<T> {
                let mut res = self.clone();
                res /= divisor;
                res
            }
        }
    };
}

impl_scalar_ops!(i32);
impl_scalar_ops!(f64);

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:>width$}", significant(self[(i, j)]), width = FIELD_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

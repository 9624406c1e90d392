use std::fmt;
use std::iter::FromIterator;
use std::ops::{AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, SubAssign};
use std::slice::{Iter, IterMut};

use crate::config;
use crate::error::LinalgError;
use crate::math::element::{Element, ElementKind};
use crate::math::format::{significant, FIELD_WIDTH};

/// Row or column interpretation of a vector. Only a tag: the storage layout
/// is the same for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Column,
    Row,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Column => Orientation::Row,
            Orientation::Row => Orientation::Column,
        }
    }
}

/// Fixed-length numeric vector with an orientation tag.
///
/// The length is set at construction and never changes. Elementwise
/// operators with a mismatched length, and scalings the element kind does
/// not support, leave the vector untouched.
#[derive(Clone, Debug)]
pub struct Vector<T> {
    data: Vec<T>,
    orientation: Orientation,
}

impl<T: Element> Vector<T> {
    /// Column vector of `len` elements, all set to `value`.
    pub fn new(len: usize, value: T) -> Self {
        Self::with_orientation(len, value, Orientation::Column)
    }

    pub fn zeros(len: usize) -> Self {
        Self::new(len, T::zero())
    }

    pub fn with_orientation(len: usize, value: T, orientation: Orientation) -> Self {
        Self {
            data: vec![value; len],
            orientation,
        }
    }

    /// Like [`Vector::new`], but reports allocation failure instead of aborting.
    pub fn try_new(len: usize, value: T) -> Result<Self, LinalgError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| LinalgError::Allocation { len })?;
        data.resize(len, value);
        Ok(Self {
            data,
            orientation: Orientation::Column,
        })
    }

    /// Column vector over `data`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data,
            orientation: Orientation::Column,
        }
    }

    pub(crate) fn from_vec_oriented(data: Vec<T>, orientation: Orientation) -> Self {
        Self { data, orientation }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_column(&self) -> bool {
        self.orientation == Orientation::Column
    }

    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// True when the element kind accepts fractional factors and division.
    pub fn is_divisible(&self) -> bool {
        T::KIND.is_divisible()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Copy `other`'s elements into `self` when both have the same length.
    /// The orientation of `self` is kept.
    pub fn assign_from(&mut self, other: &Vector<T>) -> &mut Self {
        if self.len() == other.len() {
            self.data.copy_from_slice(&other.data);
        } else {
            log::debug!(
                "Skipping vector assignment: length {} != {}",
                self.len(),
                other.len()
            );
        }
        self
    }

    /// Elementwise comparison within `eps`. Orientation is not compared.
    pub fn approx_eq(&self, other: &Vector<T>, eps: f64) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| a == b || a.abs_diff_f64(b) < eps)
    }

    pub fn reset(&mut self, value: T) {
        self.data.iter_mut().for_each(|v| *v = value);
    }

    /// Flip the orientation. No data moves.
    pub fn transpose(&mut self) -> &mut Self {
        self.orientation = self.orientation.flipped();
        self
    }

    fn is_crossable(&self) -> bool {
        self.len() == 3 && self.is_column()
    }

    /// 3-D cross product. `None` unless both operands are length-3 column
    /// vectors of a signed or real kind.
    pub fn cross(&self, other: &Vector<T>) -> Option<Vector<T>> {
        if T::KIND == ElementKind::Unsigned || !self.is_crossable() || !other.is_crossable() {
            return None;
        }
        let (a, b) = (&self.data, &other.data);
        Some(Vector::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    fn scale(&mut self, factor: T) {
        self.data.iter_mut().for_each(|v| *v *= factor);
    }

    fn divide(&mut self, divisor: T) {
        self.data.iter_mut().for_each(|v| *v /= divisor);
    }
}

impl<T: Element> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, config::tolerance())
    }
}

impl<T: Element> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T: Element> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < self.data.len(),
            "index {} out of bounds for vector of length {}",
            index,
            self.data.len()
        );
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(
            index < self.data.len(),
            "index {} out of bounds for vector of length {}",
            index,
            self.data.len()
        );
        &mut self.data[index]
    }
}

impl<'a, T: Element> AddAssign<&'a Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: &'a Vector<T>) {
        if self.len() != rhs.len() {
            log::debug!("Skipping vector +=: length {} != {}", self.len(), rhs.len());
            return;
        }
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
    }
}

impl<'a, T: Element> SubAssign<&'a Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: &'a Vector<T>) {
        if self.len() != rhs.len() {
            log::debug!("Skipping vector -=: length {} != {}", self.len(), rhs.len());
            return;
        }
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a -= b;
        }
    }
}

impl<T: Element> MulAssign<i32> for Vector<T> {
    fn mul_assign(&mut self, factor: i32) {
        if T::KIND == ElementKind::Unsigned && factor < 0 {
            log::debug!("Skipping scaling of unsigned vector by negative factor {}", factor);
            return;
        }
        match num_traits::cast::<i32, T>(factor) {
            Some(factor) => self.scale(factor),
            None => log::debug!("Skipping scaling: factor {} not representable", factor),
        }
    }
}

impl<T: Element> MulAssign<f64> for Vector<T> {
    fn mul_assign(&mut self, factor: f64) {
        if !self.is_divisible() {
            log::debug!("Skipping real-valued scaling of {:?} vector", T::KIND);
            return;
        }
        if let Some(factor) = num_traits::cast::<f64, T>(factor) {
            self.scale(factor);
        }
    }
}

impl<T: Element> DivAssign<i32> for Vector<T> {
    fn div_assign(&mut self, divisor: i32) {
        if !self.is_divisible() {
            log::debug!("Skipping division of {:?} vector", T::KIND);
            return;
        }
        if let Some(divisor) = num_traits::cast::<i32, T>(divisor) {
            self.divide(divisor);
        }
    }
}

impl<T: Element> DivAssign<f64> for Vector<T> {
    fn div_assign(&mut self, divisor: f64) {
        if !self.is_divisible() {
            log::debug!("Skipping division of {:?} vector", T::KIND);
            return;
        }
        if let Some(divisor) = num_traits::cast::<f64, T>(divisor) {
            self.divide(divisor);
        }
    }
}

// Out-of-place scalings copy the operand and apply the in-place rule.
macro_rules! impl_scalar_ops {
    ($scalar:ty) => {
        impl<'a, T: Element> Mul<$scalar> for &'a Vector<T> {
            type Output = Vector<T>;

            fn mul(self, factor: $scalar) -> Vector<T> {
                let mut res = self.clone();
                res *= factor;
                res
            }
        }

        impl<'a, T: Element> Mul<&'a Vector<T>> for $scalar {
            type Output = Vector<T>;

            fn mul(self, vec: &'a Vector<T>) -> Vector<T> {
                vec * self
            }
        }

        impl<'a, T: Element> Div<$scalar> for &'a Vector<T> {
            type Output = Vector<T>;

            fn div(self, divisor: $scalar) -> Vector<T> {
                let mut res = self.clone();
                res /= divisor;
                res
            }
        }
    };
}

impl_scalar_ops!(i32);
impl_scalar_ops!(f64);

impl<T: Element> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.data.iter() {
            write!(f, "{:>width$}", significant(*value), width = FIELD_WIDTH)?;
            if self.is_column() {
                writeln!(f)?;
            }
        }
        if !self.is_column() {
            writeln!(f)?;
        }
        Ok(())
    }
}

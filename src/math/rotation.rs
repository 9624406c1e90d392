//! Axis-aligned rotation matrices and their time derivatives.
//!
//! The builders fill a caller-supplied 3×3 `Matrix<f64>` with the right-handed
//! active rotation about the named axis, so `rot_z(π/2)` takes `(1, 0, 0)` to
//! `(0, 1, 0)`. The `*_dot` builders write `rate · dR/dθ`, the time derivative
//! of `R(θ(t))` for an angular rate `rate = dθ/dt`. A target that is not 3×3
//! is left untouched.
use crate::math::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

fn is_3x3(m: &Matrix<f64>) -> bool {
    if m.shape() == (3, 3) {
        true
    } else {
        log::debug!("Skipping rotation builder: target shape {:?} is not 3x3", m.shape());
        false
    }
}

impl Matrix<f64> {
    pub fn rot_x(radians: f64, m: &mut Matrix<f64>) {
        if !is_3x3(m) {
            return;
        }
        let (s, c) = radians.sin_cos();
        m.make_unity();
        m[(1, 1)] = c;
        m[(2, 2)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
    }

    pub fn rot_y(radians: f64, m: &mut Matrix<f64>) {
        if !is_3x3(m) {
            return;
        }
        let (s, c) = radians.sin_cos();
        m.make_unity();
        m[(0, 0)] = c;
        m[(2, 2)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
    }

    pub fn rot_z(radians: f64, m: &mut Matrix<f64>) {
        if !is_3x3(m) {
            return;
        }
        let (s, c) = radians.sin_cos();
        m.make_unity();
        m[(0, 0)] = c;
        m[(1, 1)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
    }

    pub fn rot_x_dot(radians: f64, rate: f64, m: &mut Matrix<f64>) {
        if !is_3x3(m) {
            return;
        }
        let (s, c) = radians.sin_cos();
        m.reset(0.0);
        m[(1, 1)] = -s;
        m[(2, 2)] = -s;
        m[(1, 2)] = -c;
        m[(2, 1)] = c;
        *m *= rate;
    }

    pub fn rot_y_dot(radians: f64, rate: f64, m: &mut Matrix<f64>) {
        if !is_3x3(m) {
            return;
        }
        let (s, c) = radians.sin_cos();
        m.reset(0.0);
        m[(0, 0)] = -s;
        m[(2, 2)] = -s;
        m[(0, 2)] = c;
        m[(2, 0)] = -c;
        *m *= rate;
    }

    pub fn rot_z_dot(radians: f64, rate: f64, m: &mut Matrix<f64>) {
        if !is_3x3(m) {
            return;
        }
        let (s, c) = radians.sin_cos();
        m.reset(0.0);
        m[(0, 0)] = -s;
        m[(1, 1)] = -s;
        m[(0, 1)] = -c;
        m[(1, 0)] = c;
        *m *= rate;
    }

    /// Fresh 3×3 rotation about `axis`.
    pub fn rotation(axis: Axis, radians: f64) -> Matrix<f64> {
        let mut m = Self::zeros(3, 3);
        match axis {
            Axis::X => Self::rot_x(radians, &mut m),
            Axis::Y => Self::rot_y(radians, &mut m),
            Axis::Z => Self::rot_z(radians, &mut m),
        }
        m
    }

    /// Fresh 3×3 time derivative of the rotation about `axis`.
    pub fn rotation_dot(axis: Axis, radians: f64, rate: f64) -> Matrix<f64> {
        let mut m = Self::zeros(3, 3);
        match axis {
            Axis::X => Self::rot_x_dot(radians, rate, &mut m),
            Axis::Y => Self::rot_y_dot(radians, rate, &mut m),
            Axis::Z => Self::rot_z_dot(radians, rate, &mut m),
        }
        m
    }
}

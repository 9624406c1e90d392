//! Integration tests for the axis rotation builders and their derivatives.

use std::f64::consts::{FRAC_PI_2, PI};

use sphereless_maths::math::{Axis, Matrix, Vector};

fn column(values: [f64; 3]) -> Vector<f64> {
    Vector::from_vec(values.to_vec())
}

fn rotate(axis: Axis, radians: f64, v: [f64; 3]) -> Vector<f64> {
    Matrix::rotation(axis, radians).mul_vector(&column(v)).unwrap()
}

#[test]
fn zero_angle_is_identity() {
    let mut m = Matrix::new(3, 3, 4.0);
    Matrix::rot_x(0.0, &mut m);
    assert_eq!(m, Matrix::identity(3));
    Matrix::rot_y(0.0, &mut m);
    assert_eq!(m, Matrix::identity(3));
    Matrix::rot_z(0.0, &mut m);
    assert_eq!(m, Matrix::identity(3));
}

#[test]
fn quarter_turns_follow_right_hand_rule() {
    assert_eq!(rotate(Axis::Z, FRAC_PI_2, [1.0, 0.0, 0.0]), column([0.0, 1.0, 0.0]));
    assert_eq!(rotate(Axis::X, FRAC_PI_2, [0.0, 1.0, 0.0]), column([0.0, 0.0, 1.0]));
    assert_eq!(rotate(Axis::Y, FRAC_PI_2, [0.0, 0.0, 1.0]), column([1.0, 0.0, 0.0]));
}

#[test]
fn rotations_are_orthonormal() {
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let r = Matrix::rotation(axis, 0.7);
        let mut r_t = r.clone();
        r_t.transpose();
        let product = r.matmul(&r_t).unwrap();
        assert!(product.approx_eq(&Matrix::identity(3), 1e-12), "{:?}", axis);
    }
}

#[test]
fn half_turn_about_z_negates_xy() {
    let r = Matrix::rotation(Axis::Z, PI);
    let v = r.mul_vector(&column([1.0, 2.0, 3.0])).unwrap();
    assert!(v.approx_eq(&column([-1.0, -2.0, 3.0]), 1e-12));
}

#[test]
fn builders_skip_non_3x3_targets() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut m = Matrix::new(2, 2, 7.0);
    Matrix::rot_x(1.0, &mut m);
    Matrix::rot_y_dot(1.0, 2.0, &mut m);
    Matrix::rot_z(1.0, &mut m);
    assert_eq!(m, Matrix::new(2, 2, 7.0));

    let mut tall = Matrix::new(4, 3, 1.0);
    Matrix::rot_z_dot(0.3, 1.0, &mut tall);
    assert_eq!(tall, Matrix::new(4, 3, 1.0));
}

#[test]
fn builders_overwrite_previous_contents() {
    let mut m = Matrix::new(3, 3, 5.0);
    Matrix::rot_z(0.4, &mut m);
    assert_eq!(m, Matrix::rotation(Axis::Z, 0.4));
    Matrix::rot_x_dot(0.4, 1.5, &mut m);
    assert_eq!(m, Matrix::rotation_dot(Axis::X, 0.4, 1.5));
}

#[test]
fn derivatives_match_finite_differences() {
    let h = 1e-6;
    let rate = 1.3;
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        for &theta in &[0.0, 0.5, 2.0, -1.2] {
            let mut numeric = Matrix::rotation(axis, theta + h);
            numeric -= &Matrix::rotation(axis, theta - h);
            numeric *= rate / (2.0 * h);
            let analytic = Matrix::rotation_dot(axis, theta, rate);
            assert!(
                numeric.approx_eq(&analytic, 1e-6),
                "{:?} at {}:\n{}\nvs\n{}",
                axis,
                theta,
                numeric,
                analytic
            );
        }
    }
}

#[test]
fn derivative_scales_with_rate() {
    let unit = Matrix::rotation_dot(Axis::Y, 0.9, 1.0);
    let fast = Matrix::rotation_dot(Axis::Y, 0.9, -3.0);
    assert!(fast.approx_eq(&(&unit * -3.0f64), 1e-12));
}

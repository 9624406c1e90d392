//! Integration tests for tolerance configuration.

use std::io::Write;

use sphereless_maths::config::{
    load_tolerance_config, set_tolerance, tolerance, ToleranceConfig, DEFAULT_EPS,
};
use sphereless_maths::math::Vector;
use sphereless_maths::LinalgError;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn default_config_uses_default_eps() {
    assert_eq!(ToleranceConfig::default().eps, DEFAULT_EPS);
}

#[test]
fn config_serializes_to_json() {
    let json = serde_json::to_string_pretty(&ToleranceConfig::new(0.25)).unwrap();
    assert!(json.contains("eps"));
    let back: ToleranceConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ToleranceConfig::new(0.25));
}

#[test]
fn load_from_file() {
    let file = write_config(r#"{ "eps": 0.001 }"#);
    let cfg = load_tolerance_config(file.path()).unwrap();
    assert_eq!(cfg.eps, 0.001);
}

#[test]
fn missing_field_falls_back_to_default() {
    let file = write_config("{}");
    let cfg = load_tolerance_config(file.path()).unwrap();
    assert_eq!(cfg.eps, DEFAULT_EPS);
}

#[test]
fn load_errors() {
    assert!(load_tolerance_config("/nonexistent/path/tolerance.json").is_err());

    let garbage = write_config("not json");
    assert!(load_tolerance_config(garbage.path()).is_err());

    let negative = write_config(r#"{ "eps": -1.0 }"#);
    let err = load_tolerance_config(negative.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid tolerance"));
}

// The process-wide tolerance is shared by every test in this binary, so all
// mutations live in this one test.
#[test]
fn installed_tolerance_drives_equality() {
    let a = Vector::from_vec(vec![1.0, 2.0]);
    let b = Vector::from_vec(vec![1.3, 2.0]);
    assert_eq!(tolerance(), DEFAULT_EPS);
    assert_ne!(a, b);

    ToleranceConfig::new(0.5).install().unwrap();
    assert_eq!(tolerance(), 0.5);
    assert_eq!(a, b);

    assert_eq!(set_tolerance(-1.0), Err(LinalgError::InvalidTolerance(-1.0)));
    assert!(set_tolerance(f64::NAN).is_err());
    assert_eq!(tolerance(), 0.5);

    set_tolerance(DEFAULT_EPS).unwrap();
    assert_ne!(a, b);
}

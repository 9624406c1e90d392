//! Tolerance configuration used by approximate equality.
//!
//! The process-wide tolerance starts at [`DEFAULT_EPS`] and can be replaced by
//! installing a [`ToleranceConfig`], typically loaded from a JSON file.
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::LinalgError;

pub const DEFAULT_EPS: f64 = 1e-9;

// f64 bits of the active tolerance; 0x3E112E0BE826D695 == 1e-9
static TOLERANCE_BITS: AtomicU64 = AtomicU64::new(0x3E11_2E0B_E826_D695);

/// Numeric tolerance for `==` on vectors and matrices.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ToleranceConfig {
    pub eps: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

impl ToleranceConfig {
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }

    /// Make this the process-wide tolerance.
    pub fn install(&self) -> std::result::Result<(), LinalgError> {
        set_tolerance(self.eps)
    }
}

/// Current process-wide tolerance.
pub fn tolerance() -> f64 {
    f64::from_bits(TOLERANCE_BITS.load(Ordering::Acquire))
}

pub fn set_tolerance(eps: f64) -> std::result::Result<(), LinalgError> {
    if !eps.is_finite() || eps < 0.0 {
        return Err(LinalgError::InvalidTolerance(eps));
    }
    log::debug!("Setting equality tolerance to {}", eps);
    TOLERANCE_BITS.store(eps.to_bits(), Ordering::Release);
    Ok(())
}

/// Load a tolerance configuration from a JSON file.
pub fn load_tolerance_config<P: AsRef<Path>>(path: P) -> Result<ToleranceConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ToleranceConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    if !config.eps.is_finite() || config.eps < 0.0 {
        return Err(LinalgError::InvalidTolerance(config.eps))
            .with_context(|| format!("Invalid tolerance in config: {}", path.as_ref().display()));
    }
    Ok(config)
}

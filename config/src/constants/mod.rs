//! Centralized tolerance values shared across the geometry crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute tolerance used for approximate vector comparison.
///
/// Exact `==` on vectors never uses this value; it only backs the
/// approximate comparison helpers.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Default distance in units in the last place for ULP-based comparison.
///
/// # Examples
/// ```
/// use config::constants::MAX_ULPS;
/// assert!(MAX_ULPS >= 1);
/// ```
pub const MAX_ULPS: u32 = 4;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of comparison settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Absolute tolerance used when comparing components.
    pub tolerance: f64,
    /// Maximum ULP distance accepted by ULP-based comparison.
    pub max_ulps: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and ULP distance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 8).expect("valid config");
    /// assert_eq!(cfg.max_ulps, 8);
    /// ```
    pub fn new(tolerance: f64, max_ulps: u32) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_ulps == 0 {
            return Err(ConfigError::InvalidUlps(max_ulps));
        }
        Ok(Self {
            tolerance,
            max_ulps,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            max_ulps: MAX_ULPS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    #[error("tolerance must be positive and finite: {0}")]
    InvalidTolerance(f64),
    /// Raised when the ULP distance is zero.
    #[error("max_ulps must be >= 1: {0}")]
    InvalidUlps(u32),
}

//! Approximate comparison for [`Vector3`].
//!
//! `==` stays exact. These impls let callers opt in to tolerance-based
//! comparison through the `approx` macros, with defaults taken from the
//! `config` crate.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use config::constants::{GlobalConfig, EPSILON_TOLERANCE, MAX_ULPS};

use super::Vector3;

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        MAX_ULPS
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

impl Vector3 {
    /// Componentwise comparison: components match when they differ by at
    /// most `config.tolerance` or by at most `config.max_ulps` units in the
    /// last place.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// use geometry_core::Vector3;
    ///
    /// let cfg = GlobalConfig::new(1e-3, 4).unwrap();
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// assert!(a.approx_eq(&Vector3::new(1.0005, 2.0, 3.0), &cfg));
    /// assert!(!a.approx_eq(&Vector3::new(1.01, 2.0, 3.0), &cfg));
    /// ```
    pub fn approx_eq(&self, other: &Self, config: &GlobalConfig) -> bool {
        self.ulps_eq(other, config.tolerance, config.max_ulps)
    }
}

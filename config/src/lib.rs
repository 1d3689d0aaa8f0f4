//! # Config Crate
//!
//! Centralized numeric tolerances for the geometry crates. Comparison
//! thresholds are defined here once so that every crate agrees on what
//! "approximately equal" means.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, GlobalConfig};
//!
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON_TOLERANCE);
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All tolerances defined once, used everywhere
//! - **Validated Overrides**: Custom settings go through `GlobalConfig::new`

pub mod constants;

#[cfg(test)]
mod tests;

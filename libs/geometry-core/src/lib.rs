//! Foundational value types for the geometry-processing crates.
//!
//! The centerpiece is [`Vector3`], a plain-old-data triple of `f64`
//! components with exact IEEE arithmetic, plus the free functions that the
//! higher geometry layers build on (norms, cross products, angles and
//! rotations).
//!
//! ```
//! use geometry_core::{cross, dot, Vector3};
//!
//! let u = Vector3::new(1.0, 0.0, 0.0);
//! let v = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(cross(u, v), Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(dot(u, v), 0.0);
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod core;
pub mod error;

pub use crate::core::vector3::functions::*;
pub use crate::core::vector3::Vector3;
pub use error::{GeometryError, GeometryResult};

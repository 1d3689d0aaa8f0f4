//! # Error Types
//!
//! Errors for the fallible conversions into [`crate::Vector3`].
//!
//! ## Error Policy
//!
//! - Vector arithmetic never fails; IEEE NaN/Infinity carry domain errors
//! - Conversions from text or slices return explicit errors
//! - Errors include the offending input for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building a vector from external data.
///
/// ## Example
///
/// ```rust
/// use geometry_core::{GeometryError, Vector3};
///
/// match "<1, 2>".parse::<Vector3>() {
///     Ok(v) => println!("parsed {v}"),
///     Err(GeometryError::ParseVector { input, reason }) => {
///         eprintln!("cannot parse {input:?}: {reason}")
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Text could not be parsed as `<x, y, z>`.
    #[error("cannot parse vector from {input:?}: {reason}")]
    ParseVector {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A slice did not hold exactly the expected number of components.
    #[error("expected {expected} components, got {actual}")]
    InvalidLength {
        /// Required component count.
        expected: usize,
        /// Length of the supplied slice.
        actual: usize,
    },

    /// Component index outside `0..3`.
    #[error("component index {0} out of range [0, 2]")]
    IndexOutOfRange(usize),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for geometry conversions.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================

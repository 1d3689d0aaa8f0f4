//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of the tolerance constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(
        EPSILON_TOLERANCE < 1e-6,
        "EPSILON_TOLERANCE should be small for precision"
    );
}

#[test]
fn test_max_ulps_reasonable() {
    assert!(MAX_ULPS >= 1);
    assert!(MAX_ULPS <= 64);
}

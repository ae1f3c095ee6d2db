//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_eps_is_positive_and_small() {
    assert!(EPS > 0.0, "EPS must be positive");
    assert!(EPS <= 1e-4, "EPS should be small for precision");
}

#[test]
fn test_plane_epsilon_matches_kernel_epsilon() {
    assert_eq!(PLANE_EPSILON, EPS);
}

#[test]
fn test_numeric_epsilon_is_tighter_than_eps() {
    assert!(NUMERIC_EPSILON < EPS);
}

#[test]
fn test_scaled_epsilon_two_dimensions() {
    let epsilon = scaled_epsilon(&[5.0, 5.0]);
    assert!((epsilon - 5e-5).abs() < 1e-15);
}

#[test]
fn test_scaled_epsilon_three_dimensions() {
    let epsilon = scaled_epsilon(&[3.0, 5.0, 7.0]);
    assert!((epsilon - 5e-5).abs() < 1e-15);
}

#[test]
fn test_scaled_epsilon_empty_is_zero() {
    assert_eq!(scaled_epsilon(&[]), 0.0);
}

#[test]
fn test_approx_helpers() {
    assert!(approx_equal(2.0, 2.0 + EPS / 2.0));
    assert!(!approx_equal(2.0, 2.0 + EPS * 2.0));
    assert!(approx_zero(-EPS / 2.0));
    assert!(!approx_zero(1.0));
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_segments() {
    assert_eq!(DEFAULT_SEGMENTS, 32);
    assert_eq!(DEFAULT_ROTATE_SEGMENTS, 12);
    assert_eq!(DEFAULT_CURVE_SEGMENTS, 16);
}

#[test]
fn test_minimum_segments() {
    assert_eq!(MIN_SEGMENTS, 3);
    assert!(MIN_ARC_SEGMENTS > MIN_SEGMENTS);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_stack_sizes() {
    assert!(STACK_GROW_BYTES > STACK_RED_ZONE_BYTES);
}

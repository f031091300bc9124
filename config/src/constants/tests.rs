//! Tests for the centralized configuration constants.

use super::*;

/// Ensures the comparison tolerance is positive and tight.
#[test]
fn epsilon_is_small_and_positive() {
    assert!(EPSILON_TOLERANCE > 0.0);
    assert!(EPSILON_TOLERANCE < 1.0e-6);
}

/// The disk must sit strictly above the petal plane.
#[test]
fn disk_lift_is_positive() {
    assert!(DISK_LIFT > 0.0);
}

/// A full turn divides evenly for the supported petal counts.
#[test]
fn full_turn_divides_cleanly() {
    assert_eq!(FULL_TURN_DEGREES, 360.0);
    assert_eq!(FULL_TURN_DEGREES / 3.0, 120.0);
}

/// A cylinder cross-section needs at least a triangle.
#[test]
fn min_radial_segments_forms_polygon() {
    assert!(MIN_RADIAL_SEGMENTS >= 3);
}

//! Centralized configuration values shared across the flower mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

/// Numerical tolerance used for floating-point comparisons, e.g. when
/// deciding whether a per-layer scale factor is still the identity.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Vertical offset added to the petal box height when lifting the flower
/// disk above the petal plane, so the disk face is not coplanar with the
/// petal roots.
///
/// # Examples
/// ```
/// use config::constants::DISK_LIFT;
/// let height = 0.05;
/// assert!(height + DISK_LIFT > height);
/// ```
pub const DISK_LIFT: f64 = 0.08;

/// One full revolution in degrees; divided by the petal count to obtain
/// the angular increment of a ring arrangement.
///
/// # Examples
/// ```
/// use config::constants::FULL_TURN_DEGREES;
/// assert_eq!(FULL_TURN_DEGREES / 8.0, 45.0);
/// ```
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Pitch rotation, in degrees, that lays a freshly duplicated petal flat
/// into the ring plane before it is positioned.
///
/// # Examples
/// ```
/// use config::constants::FLAT_LAY_PITCH_DEGREES;
/// assert_eq!(FLAT_LAY_PITCH_DEGREES, 90.0);
/// ```
pub const FLAT_LAY_PITCH_DEGREES: f64 = 90.0;

/// Minimum radial segment count accepted for a cylinder primitive; fewer
/// segments cannot form a closed cross-section.
///
/// # Examples
/// ```
/// use config::constants::MIN_RADIAL_SEGMENTS;
/// assert!(MIN_RADIAL_SEGMENTS >= 3);
/// ```
pub const MIN_RADIAL_SEGMENTS: u32 = 3;

#[cfg(test)]
mod tests;

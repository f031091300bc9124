//! # Config Crate
//!
//! Centralized configuration constants for the flower mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DISK_LIFT, EPSILON_TOLERANCE, FULL_TURN_DEGREES};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 1.0e-11;
//! assert!(value.abs() < EPSILON_TOLERANCE);
//!
//! // Angle increment for an evenly spaced ring of petals
//! let petal_count = 21.0;
//! let increment = FULL_TURN_DEGREES / petal_count;
//! assert!(increment > 0.0);
//!
//! // The flower disk sits slightly above the petal plane
//! assert!(DISK_LIFT > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Agnostic**: No values tied to a particular scene-graph backend
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

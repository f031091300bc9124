//! # Error Types
//!
//! Error types for flower construction. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when operations fail
//! - All failures surface explicit errors
//! - Errors include context for debugging
//!
//! The only cleanup performed on failure is the orchestrator's rollback of
//! partially created geometry; the error itself always propagates.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating a flower.
///
/// ## Example
///
/// ```rust
/// use flower_mesh::{resolve_layer_set, FlowerError};
///
/// match resolve_layer_set(7) {
///     Ok(set) => println!("layers: {} {} {}", set.base, set.mid, set.inner),
///     Err(FlowerError::Configuration { base_count }) => {
///         eprintln!("unsupported petal count: {base_count}")
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum FlowerError {
    /// No layer set matches the requested base petal count.
    ///
    /// The caller must supply one of the enumerated supported counts; the
    /// resolver never interpolates new combinations.
    #[error("no layer set matches base petal count {base_count}")]
    Configuration {
        /// The unsupported base petal count that was requested.
        base_count: u32,
    },

    /// A caller-supplied argument is outside the accepted domain.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },

    /// Opaque failure reported by the mesh-editing collaborator.
    ///
    /// Contains the editor operation that failed and its error message.
    #[error("mesh editor operation '{operation}' failed: {message}")]
    ExternalApi {
        /// Name of the editor operation (create_cylinder, duplicate, ...).
        operation: String,
        /// Error message from the editor.
        message: String,
    },
}

impl FlowerError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an external-API error for the named editor operation.
    pub fn external(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalApi {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for flower operations.
pub type FlowerResult<T> = Result<T, FlowerError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let config_err = FlowerError::Configuration { base_count: 7 };
        assert!(config_err.to_string().contains("7"));

        let api_err = FlowerError::external("duplicate", "scene is read-only");
        assert!(api_err.to_string().contains("duplicate"));
        assert!(api_err.to_string().contains("read-only"));
    }

    /// Test error types are Send + Sync for async compatibility.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlowerError>();
    }
}

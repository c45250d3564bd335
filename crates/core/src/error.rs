//! Error types for arconst
//!
//! This module provides unified error handling across the value model,
//! including construction errors, payload coercion failures, and
//! initializer generation errors.

use thiserror::Error;

/// The main error type for arconst
#[derive(Debug, Error)]
pub enum ConstantError {
    // ========================================================================
    // Construction Errors
    // ========================================================================
    /// Admin data was neither a mapping nor an `AdminData` object
    #[error("adminData must be a mapping or an AdminData object, got {found}")]
    InvalidAdminData { found: String },

    /// A raw admin-data mapping could not be converted
    #[error("Failed to convert admin data mapping: {0}")]
    AdminDataConversion(String),

    /// A required label or name was empty
    #[error("Invalid identifier for {kind}: {message}")]
    InvalidIdentifier { kind: String, message: String },

    // ========================================================================
    // Coercion Errors
    // ========================================================================
    /// A scalar payload could not be coerced into its canonical type
    #[error("Cannot coerce {input} into {target}")]
    Coercion { target: String, input: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// The value variant has no initializer representation
    #[error("Unsupported value type for initializer: {0}")]
    UnsupportedInitializer(String),

    /// The value has no payload to render
    #[error("Value '{name}' has no payload to render")]
    MissingPayload { name: String },

    /// An AUTOSAR4-only variant was used under an AUTOSAR3 schema
    #[error("{variant} requires AUTOSAR 4 but schema version is {version}")]
    SchemaMismatch { variant: String, version: String },

    /// Schema version could not be parsed
    #[error("Invalid schema version: {0}")]
    InvalidSchemaVersion(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ConstantError {
    /// Create a coercion error
    pub fn coercion(target: impl Into<String>, input: impl Into<String>) -> Self {
        ConstantError::Coercion {
            target: target.into(),
            input: input.into(),
        }
    }

    /// Create an unsupported-initializer error naming the variant
    pub fn unsupported(variant: impl Into<String>) -> Self {
        ConstantError::UnsupportedInitializer(variant.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ConstantError::Validation(msg.into())
    }

    /// Check if this error is a coercion failure
    pub fn is_coercion(&self) -> bool {
        matches!(self, ConstantError::Coercion { .. })
    }

    /// Check if this error was raised while constructing a value
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            ConstantError::InvalidAdminData { .. }
                | ConstantError::AdminDataConversion(_)
                | ConstantError::InvalidIdentifier { .. }
        )
    }

    /// Check if this error is an unsupported-variant failure
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ConstantError::UnsupportedInitializer(_))
    }
}

/// Result type alias using ConstantError
pub type ConstantResult<T> = Result<T, ConstantError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coercion_error() {
        let err = ConstantError::coercion("integer", "\"abc\"");
        assert!(err.is_coercion());
        assert!(!err.is_construction());
        assert_eq!(err.to_string(), "Cannot coerce \"abc\" into integer");
    }

    #[test]
    fn test_admin_data_error_is_construction() {
        let err = ConstantError::InvalidAdminData {
            found: "number".to_string(),
        };
        assert!(err.is_construction());
        assert_eq!(
            err.to_string(),
            "adminData must be a mapping or an AdminData object, got number"
        );
    }

    #[test]
    fn test_unsupported_error() {
        let err = ConstantError::unsupported("BooleanValue");
        assert!(err.is_unsupported());
        assert_eq!(
            err.to_string(),
            "Unsupported value type for initializer: BooleanValue"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConstantError = json_err.into();
        assert!(matches!(err, ConstantError::JsonSerialization(_)));
    }
}

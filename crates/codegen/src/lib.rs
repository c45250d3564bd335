//! # arconst Codegen
//!
//! C initializer generation for arconst constants.
//!
//! ## Features
//!
//! - **Initializer text**: [`initializer_string`] projects integers, records,
//!   and integer constants onto C initializer text
//! - **Definitions**: [`Generator`] renders a batch of constants as `const`
//!   definitions or `#define` macros
//!

// ============================================================================
// Modules
// ============================================================================

pub mod generator;
pub mod initializer;

// ============================================================================
// Re-exports
// ============================================================================

pub use generator::{GeneratedConstant, GeneratedUnit, Generator};
pub use initializer::{Initializer, initializer_string};

use arconst_core::SchemaVersion;

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Shape of each emitted definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefinitionStyle {
    /// `const <type> <name> = <init>;`
    #[default]
    Const,
    /// `#define <PREFIX><NAME> <init>`
    Define,
}

/// Configuration for the code generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Schema version the constants are checked against
    pub schema_version: SchemaVersion,

    /// Definition shape
    pub style: DefinitionStyle,

    /// C type used when the root value carries no type reference
    pub default_type: Option<String>,

    /// Prefix prepended to macro names in `Define` style
    pub macro_prefix: String,

    /// Whether to emit a comment line above each definition
    pub include_comments: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema_version: SchemaVersion::Autosar4,
            style: DefinitionStyle::Const,
            default_type: None,
            macro_prefix: String::new(),
            include_comments: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema version
    pub fn with_schema_version(mut self, version: SchemaVersion) -> Self {
        self.schema_version = version;
        self
    }

    /// Set the definition style
    pub fn with_style(mut self, style: DefinitionStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the fallback C type
    pub fn with_default_type(mut self, type_name: impl Into<String>) -> Self {
        self.default_type = Some(type_name.into());
        self
    }

    /// Set the macro name prefix
    pub fn with_macro_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.macro_prefix = prefix.into();
        self
    }

    /// Disable comment generation
    pub fn without_comments(mut self) -> Self {
        self.include_comments = false;
        self
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.schema_version, SchemaVersion::Autosar4);
        assert_eq!(config.style, DefinitionStyle::Const);
        assert!(config.include_comments);
        assert!(config.default_type.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::new()
            .with_schema_version(SchemaVersion::Autosar3)
            .with_style(DefinitionStyle::Define)
            .with_default_type("uint16")
            .with_macro_prefix("RTE_")
            .without_comments();

        assert_eq!(config.schema_version, SchemaVersion::Autosar3);
        assert_eq!(config.style, DefinitionStyle::Define);
        assert_eq!(config.default_type.as_deref(), Some("uint16"));
        assert_eq!(config.macro_prefix, "RTE_");
        assert!(!config.include_comments);
    }
}

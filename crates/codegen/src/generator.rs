//! # Definition Generator
//!
//! The `Generator` turns a batch of [`Constant`]s into C definitions using
//! the initializer text of each root value.
//!
//! ## Pipeline
//!
//! ```text
//! &[Constant] + GeneratorConfig
//!         │
//!         ├──► validate name, value tree, schema version
//!         ├──► initializer_string(root value)
//!         ├──► resolve C type (Const style only)
//!         │
//!         ▼
//!   GeneratedUnit { constants, source }
//! ```
//!
//! A generation unit is all-or-nothing: the first constant that cannot be
//! rendered fails the whole unit.

use arconst_core::{ConstantError, ConstantResult, Tagged, Validatable};
use arconst_ir::Constant;
use heck::ToShoutySnakeCase;

use crate::initializer::Initializer;
use crate::{DefinitionStyle, GeneratorConfig};

// ============================================================================
// GeneratedConstant
// ============================================================================

/// One rendered constant
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedConstant {
    /// Constant short name
    pub name: String,

    /// Resolved C type (absent in `Define` style)
    pub type_name: Option<String>,

    /// Initializer text of the root value
    pub initializer: String,

    /// Element tag of the root value under the configured schema version
    pub tag: &'static str,
}

impl GeneratedConstant {
    /// Render the definition, preceded by a comment line when enabled
    ///
    /// Fails in `Const` style when no type was resolved.
    pub fn render(&self, config: &GeneratorConfig) -> ConstantResult<String> {
        let mut out = String::new();
        if config.include_comments {
            out.push_str(&format!("/* {}: {} */\n", self.name, self.tag));
        }
        match (config.style, &self.type_name) {
            (DefinitionStyle::Const, Some(type_name)) => {
                out.push_str(&format!(
                    "const {} {} = {};",
                    type_name, self.name, self.initializer
                ));
            }
            (DefinitionStyle::Const, None) => {
                return Err(ConstantError::validation(format!(
                    "Constant '{}' has no C type for a const definition",
                    self.name
                )));
            }
            (DefinitionStyle::Define, _) => {
                out.push_str(&format!(
                    "#define {}{} {}",
                    config.macro_prefix,
                    self.name.to_shouty_snake_case(),
                    self.initializer
                ));
            }
        }
        Ok(out)
    }
}

// ============================================================================
// GeneratedUnit
// ============================================================================

/// Output of a generation run
#[derive(Debug, Clone, Default)]
pub struct GeneratedUnit {
    /// Rendered constants in input order
    pub constants: Vec<GeneratedConstant>,

    /// Concatenated source text
    pub source: String,
}

impl GeneratedUnit {
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Look up a rendered constant by name
    pub fn get(&self, name: &str) -> Option<&GeneratedConstant> {
        self.constants.iter().find(|c| c.name == name)
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Top-level generator for constant definitions
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render every constant; fails on the first constant that cannot be
    /// rendered.
    pub fn generate(&self, constants: &[Constant]) -> ConstantResult<GeneratedUnit> {
        let mut unit = GeneratedUnit::default();

        for constant in constants {
            let generated = self.generate_constant(constant).inspect_err(|e| {
                tracing::error!(constant = constant.name(), "generation failed: {}", e);
            })?;
            unit.source.push_str(&generated.render(&self.config)?);
            unit.source.push('\n');
            unit.constants.push(generated);
        }

        tracing::info!(
            count = unit.len(),
            version = %self.config.schema_version,
            "generated constant definitions"
        );
        Ok(unit)
    }

    /// Render a single constant
    pub fn generate_constant(&self, constant: &Constant) -> ConstantResult<GeneratedConstant> {
        check_c_identifier(constant.name())?;
        constant.validate()?;
        constant.check_schema(self.config.schema_version)?;

        let root = constant.value();
        let initializer = root.initializer_string()?;

        let type_name = match self.config.style {
            DefinitionStyle::Define => None,
            DefinitionStyle::Const => Some(self.resolve_type(constant)?),
        };

        tracing::debug!(
            constant = constant.name(),
            kind = %root.kind(),
            "rendered initializer"
        );

        Ok(GeneratedConstant {
            name: constant.name().to_string(),
            type_name,
            initializer,
            tag: root.tag(self.config.schema_version),
        })
    }

    /// Last path segment of the root type reference, or the configured default
    fn resolve_type(&self, constant: &Constant) -> ConstantResult<String> {
        constant
            .value()
            .type_ref()
            .and_then(|r| r.rsplit('/').next())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| self.config.default_type.clone())
            .ok_or_else(|| {
                ConstantError::validation(format!(
                    "Constant '{}' has no type reference and no default type is configured",
                    constant.name()
                ))
            })
    }
}

/// Reject names that cannot be used as C identifiers
fn check_c_identifier(name: &str) -> ConstantResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ConstantError::InvalidIdentifier {
            kind: "C identifier".to_string(),
            message: format!("'{}' is not a valid C identifier", name),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

//! # C Initializer Text
//!
//! Projects a value tree onto C-style initializer text:
//!
//! | Input                        | Output                              |
//! |------------------------------|-------------------------------------|
//! | nothing (`None`)             | empty string                        |
//! | `IntegerValue`               | decimal payload, e.g. `65535`       |
//! | `Constant` wrapping integer  | decimal payload of the wrapped root |
//! | `RecordValue`                | `{a, b, ...}` over children in order|
//! | anything else                | `UnsupportedInitializer` error      |
//!
//! Unsupported variants fail instead of being skipped: an empty or default
//! initializer would look valid to the downstream compiler while carrying
//! the wrong data.

use arconst_core::{ConstantError, ConstantResult, Named};
use arconst_ir::{Constant, IntegerValue, RecordValue, Value};

/// Types that can be rendered as a C initializer
pub trait Initializer {
    /// Render the initializer text
    fn initializer_string(&self) -> ConstantResult<String>;
}

/// Render `node` as C initializer text
pub fn initializer_string<T: Initializer + ?Sized>(node: &T) -> ConstantResult<String> {
    node.initializer_string()
}

fn integer_literal(value: &IntegerValue, name: Option<&str>) -> ConstantResult<String> {
    value
        .value()
        .map(|v| v.to_string())
        .ok_or_else(|| ConstantError::MissingPayload {
            name: name.unwrap_or("<unnamed>").to_string(),
        })
}

fn record_literal(record: &RecordValue) -> ConstantResult<String> {
    let parts = record
        .elements()
        .iter()
        .map(Initializer::initializer_string)
        .collect::<ConstantResult<Vec<_>>>()?;
    Ok(format!("{{{}}}", parts.join(", ")))
}

impl Initializer for Value {
    fn initializer_string(&self) -> ConstantResult<String> {
        match self {
            Value::Integer(v) => integer_literal(v, self.name()),
            Value::Record(r) => record_literal(r),
            Value::Boolean(_)
            | Value::String(_)
            | Value::Text(_)
            | Value::Numerical(_)
            | Value::Array(_)
            | Value::Application(_)
            | Value::ConstantReference(_) => {
                Err(ConstantError::unsupported(self.kind().type_name()))
            }
        }
    }
}

impl Initializer for Constant {
    /// Only a constant wrapping an integer is unwrapped
    fn initializer_string(&self) -> ConstantResult<String> {
        match self.value() {
            Value::Integer(v) => integer_literal(v, Some(self.name())),
            other => Err(ConstantError::unsupported(format!(
                "Constant({})",
                other.kind()
            ))),
        }
    }
}

impl<T: Initializer> Initializer for Option<T> {
    fn initializer_string(&self) -> ConstantResult<String> {
        match self {
            Some(node) => node.initializer_string(),
            None => Ok(String::new()),
        }
    }
}

impl<T: Initializer + ?Sized> Initializer for &T {
    fn initializer_string(&self) -> ConstantResult<String> {
        (**self).initializer_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Scalar literal values
//!
//! Every scalar keeps its payload behind a validating setter: [`Literal::Null`]
//! clears the payload, anything else is coerced into the canonical type.
//! A payload is therefore always absent or already coerced, including after
//! loading from JSON.

use arconst_core::{ConstantResult, Literal};
use serde::{Deserialize, Deserializer, Serialize};

use crate::value::ValueHeader;

// ============================================================================
// IntegerValue
// ============================================================================

/// `INTEGER-LITERAL`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerValue {
    #[serde(flatten)]
    pub(crate) header: ValueHeader,

    /// Data type reference (AUTOSAR 3)
    #[serde(default)]
    pub type_ref: Option<String>,

    #[serde(default, deserialize_with = "payload::integer")]
    value: Option<i64>,
}

impl IntegerValue {
    /// Create an integer value, coercing `value`
    pub fn new(name: impl Into<String>, value: impl Into<Literal>) -> ConstantResult<Self> {
        let mut v = Self {
            header: ValueHeader::new(Some(name.into())),
            type_ref: None,
            value: None,
        };
        v.set_value(value)?;
        Ok(v)
    }

    /// Set the data type reference
    pub fn with_type_ref(mut self, type_ref: impl Into<String>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.header.category = Some(category.into());
        self
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Replace the payload; on coercion failure the payload is left untouched
    pub fn set_value(&mut self, value: impl Into<Literal>) -> ConstantResult<()> {
        self.value = value.into().to_integer()?;
        Ok(())
    }
}

// ============================================================================
// BooleanValue
// ============================================================================

/// `BOOLEAN-LITERAL`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanValue {
    #[serde(flatten)]
    pub(crate) header: ValueHeader,

    #[serde(default)]
    pub type_ref: Option<String>,

    #[serde(default, deserialize_with = "payload::boolean")]
    value: Option<bool>,
}

impl BooleanValue {
    /// Create a boolean value; accepts `"true"`/`"false"` and numbers
    pub fn new(name: impl Into<String>, value: impl Into<Literal>) -> ConstantResult<Self> {
        let mut v = Self {
            header: ValueHeader::new(Some(name.into())),
            type_ref: None,
            value: None,
        };
        v.set_value(value)?;
        Ok(v)
    }

    pub fn with_type_ref(mut self, type_ref: impl Into<String>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    pub fn set_value(&mut self, value: impl Into<Literal>) -> ConstantResult<()> {
        self.value = value.into().to_boolean()?;
        Ok(())
    }
}

// ============================================================================
// StringValue
// ============================================================================

/// `STRING-LITERAL`
///
/// A missing initial value defaults to the empty string; an explicit
/// [`set_value`](StringValue::set_value) with null afterwards clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringValue {
    #[serde(flatten)]
    pub(crate) header: ValueHeader,

    #[serde(default)]
    pub type_ref: Option<String>,

    #[serde(default, deserialize_with = "payload::text")]
    value: Option<String>,
}

impl StringValue {
    pub fn new(name: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self {
            header: ValueHeader::new(Some(name.into())),
            type_ref: None,
            value: Some(value.into().to_text().unwrap_or_default()),
        }
    }

    pub fn with_type_ref(mut self, type_ref: impl Into<String>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<Literal>) {
        self.value = value.into().to_text();
    }
}

// ============================================================================
// TextValue
// ============================================================================

/// `TEXT-VALUE-SPECIFICATION` (AUTOSAR 4)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextValue {
    #[serde(flatten)]
    pub(crate) header: ValueHeader,

    #[serde(default, deserialize_with = "payload::text")]
    value: Option<String>,
}

impl TextValue {
    pub fn new(name: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self {
            header: ValueHeader::new(Some(name.into())),
            value: Some(value.into().to_text().unwrap_or_default()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<Literal>) {
        self.value = value.into().to_text();
    }
}

// ============================================================================
// NumericalValue
// ============================================================================

/// `NUMERICAL-VALUE-SPECIFICATION` (AUTOSAR 4)
///
/// The payload is kept as its textual rendering so that the writer emits it
/// verbatim. A missing initial value defaults to `"0"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericalValue {
    #[serde(flatten)]
    pub(crate) header: ValueHeader,

    #[serde(default, deserialize_with = "payload::text")]
    value: Option<String>,
}

impl NumericalValue {
    /// Create an unnamed numerical value
    pub fn new(value: impl Into<Literal>) -> Self {
        Self {
            header: ValueHeader::new(None),
            value: Some(value.into().to_text().unwrap_or_else(|| "0".to_string())),
        }
    }

    /// Create a named numerical value
    pub fn named(name: impl Into<String>, value: impl Into<Literal>) -> Self {
        let mut v = Self::new(value);
        v.header.name = Some(name.into());
        v
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<Literal>) {
        self.value = value.into().to_text();
    }
}

/// Deserializers that run stored payloads through the setter coercions
mod payload {
    use super::*;
    use serde::de::Error;

    fn literal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Literal, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Literal::from_json(&raw).map_err(D::Error::custom)
    }

    pub(super) fn integer<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        literal(deserializer)?.to_integer().map_err(D::Error::custom)
    }

    pub(super) fn boolean<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        literal(deserializer)?.to_boolean().map_err(D::Error::custom)
    }

    pub(super) fn text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(literal(deserializer)?.to_text())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integer_coerces_input() {
        assert_eq!(IntegerValue::new("V", 5).unwrap().value(), Some(5));
        assert_eq!(IntegerValue::new("V", "65535").unwrap().value(), Some(65535));
        assert_eq!(IntegerValue::new("V", 2.7).unwrap().value(), Some(2));
        assert_eq!(IntegerValue::new("V", None::<i64>).unwrap().value(), None);
    }

    #[test]
    fn test_integer_rejects_bad_input() {
        let err = IntegerValue::new("V", "abc").unwrap_err();
        assert!(err.is_coercion());

        let mut v = IntegerValue::new("V", 1).unwrap();
        assert!(v.set_value("x1").is_err());
        assert_eq!(v.value(), Some(1));
        v.set_value(None::<i64>).unwrap();
        assert_eq!(v.value(), None);
    }

    #[test]
    fn test_boolean_tokens() {
        assert_eq!(BooleanValue::new("B", "true").unwrap().value(), Some(true));
        assert_eq!(BooleanValue::new("B", "false").unwrap().value(), Some(false));
        assert_eq!(BooleanValue::new("B", 0).unwrap().value(), Some(false));
        assert_eq!(BooleanValue::new("B", 1).unwrap().value(), Some(true));
        assert_eq!(BooleanValue::new("B", None::<bool>).unwrap().value(), None);
    }

    #[test]
    fn test_string_defaults_empty_then_honours_null() {
        let mut s = StringValue::new("S", None::<String>);
        assert_eq!(s.value(), Some(""));
        s.set_value(None::<String>);
        assert_eq!(s.value(), None);
        s.set_value(42);
        assert_eq!(s.value(), Some("42"));
    }

    #[test]
    fn test_text_defaults_empty() {
        let mut t = TextValue::new("T", None::<String>);
        assert_eq!(t.value(), Some(""));
        t.set_value("Hello");
        assert_eq!(t.value(), Some("Hello"));
    }

    #[test]
    fn test_numerical_defaults_zero_and_stringifies() {
        assert_eq!(NumericalValue::new(None::<f64>).value(), Some("0"));
        assert_eq!(NumericalValue::new(1.5).value(), Some("1.5"));

        let mut n = NumericalValue::named("N", 7);
        assert_eq!(n.value(), Some("7"));
        n.set_value(None::<f64>);
        assert_eq!(n.value(), None);
    }

    #[test]
    fn test_load_coerces_payloads() {
        let int: IntegerValue =
            serde_json::from_value(serde_json::json!({"name": "V", "value": "42"})).unwrap();
        assert_eq!(int.value(), Some(42));

        let int: IntegerValue = serde_json::from_value(serde_json::json!({"name": "V"})).unwrap();
        assert_eq!(int.value(), None);

        let flag: BooleanValue =
            serde_json::from_value(serde_json::json!({"name": "B", "value": 1})).unwrap();
        assert_eq!(flag.value(), Some(true));

        let num: NumericalValue = serde_json::from_value(serde_json::json!({"value": 2.5})).unwrap();
        assert_eq!(num.value(), Some("2.5"));

        let err = serde_json::from_value::<IntegerValue>(serde_json::json!({"value": "abc"}))
            .unwrap_err();
        assert!(err.to_string().contains("Cannot coerce"));
    }

    #[test]
    fn test_type_ref_builder() {
        let v = IntegerValue::new("V", 3)
            .unwrap()
            .with_type_ref("/DataTypes/uint16")
            .with_category("VALUE");
        assert_eq!(v.type_ref.as_deref(), Some("/DataTypes/uint16"));
        assert_eq!(v.header.category.as_deref(), Some("VALUE"));
    }
}

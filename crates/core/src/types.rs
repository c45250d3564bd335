//! Core types used throughout arconst
//!
//! This module contains the schema version discriminator, element
//! identifiers, admin data, and the untyped literal input accepted by the
//! validating scalar setters.

use crate::error::{ConstantError, ConstantResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for element unique identifiers (values, constants, packages)
pub type ElementId = uuid::Uuid;

/// Create a fresh element identifier
pub fn new_element_id() -> ElementId {
    uuid::Uuid::new_v4()
}

// ============================================================================
// Schema Version
// ============================================================================

/// AUTOSAR schema generation that selects element tags
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum SchemaVersion {
    /// AUTOSAR 3.x (legacy element names)
    Autosar3,
    /// AUTOSAR 4.x
    #[default]
    Autosar4,
}

impl SchemaVersion {
    /// Map a numeric schema version onto its generation (`>= 4.0` is AUTOSAR 4)
    pub fn from_number(version: f64) -> Self {
        if version >= 4.0 {
            SchemaVersion::Autosar4
        } else {
            SchemaVersion::Autosar3
        }
    }

    /// Check if this is the AUTOSAR 4 generation
    pub fn is_autosar4(self) -> bool {
        matches!(self, SchemaVersion::Autosar4)
    }

    /// Get display name
    pub fn display_name(self) -> &'static str {
        match self {
            SchemaVersion::Autosar3 => "AUTOSAR 3",
            SchemaVersion::Autosar4 => "AUTOSAR 4",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SchemaVersion {
    type Err = ConstantError;

    /// Parse `"3.0.2"`, `"4.2.2"`, `"4"` style strings by their major component
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let major = trimmed
            .split('.')
            .next()
            .filter(|m| !m.is_empty())
            .and_then(|m| m.parse::<u32>().ok())
            .ok_or_else(|| ConstantError::InvalidSchemaVersion(trimmed.to_string()))?;

        Ok(if major >= 4 {
            SchemaVersion::Autosar4
        } else {
            SchemaVersion::Autosar3
        })
    }
}

// ============================================================================
// Admin Data
// ============================================================================

/// A single `SD` entry inside a special data group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub struct SpecialData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<String>,
}

/// An `SDG` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub struct SpecialDataGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<String>,
    pub sd: Vec<SpecialData>,
}

impl SpecialDataGroup {
    /// Create an empty group with the given GID
    pub fn new(gid: impl Into<String>) -> Self {
        Self {
            gid: Some(gid.into()),
            sd: Vec::new(),
        }
    }

    /// Append a special data entry
    pub fn with_data(mut self, value: impl Into<String>, gid: Option<&str>) -> Self {
        self.sd.push(SpecialData {
            value: Some(value.into()),
            gid: gid.map(str::to_string),
        });
        self
    }
}

/// Metadata envelope attachable to values and constants
///
/// Serializes in the raw `SDG`/`GID`/`SD`/`VALUE` form and deserializes
/// through [`AdminData::from_mapping`], so stored documents and raw mappings
/// share one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "serde_json::Value")]
pub struct AdminData {
    #[serde(rename = "SDG")]
    pub special_data_groups: Vec<SpecialDataGroup>,
}

impl AdminData {
    /// Create empty admin data
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a special data group
    pub fn with_group(mut self, group: SpecialDataGroup) -> Self {
        self.special_data_groups.push(group);
        self
    }

    /// Convert a raw mapping of the form
    /// `{"SDG": [{"GID": .., "SD": [{"GID": .., "VALUE": ..}]}]}`.
    ///
    /// Keys other than `SDG` are ignored; groups without an `SD` list are
    /// skipped.
    pub fn from_mapping(map: &serde_json::Map<String, serde_json::Value>) -> ConstantResult<Self> {
        let mut admin = AdminData::new();

        let Some(groups) = map.get("SDG") else {
            return Ok(admin);
        };
        let groups = groups
            .as_array()
            .ok_or_else(|| ConstantError::AdminDataConversion("SDG must be a list".to_string()))?;

        for group in groups {
            let group = group.as_object().ok_or_else(|| {
                ConstantError::AdminDataConversion("SDG entries must be mappings".to_string())
            })?;

            let Some(entries) = group.get("SD") else {
                continue;
            };
            let entries = entries.as_array().ok_or_else(|| {
                ConstantError::AdminDataConversion("SD must be a list".to_string())
            })?;

            let mut sdg = SpecialDataGroup {
                gid: group.get("GID").and_then(scalar_text),
                sd: Vec::with_capacity(entries.len()),
            };
            for entry in entries {
                let entry = entry.as_object().ok_or_else(|| {
                    ConstantError::AdminDataConversion("SD entries must be mappings".to_string())
                })?;
                sdg.sd.push(SpecialData {
                    value: entry.get("VALUE").and_then(scalar_text),
                    gid: entry.get("GID").and_then(scalar_text),
                });
            }
            admin.special_data_groups.push(sdg);
        }

        Ok(admin)
    }
}

fn scalar_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Admin data as handed to an AUTOSAR 4 value constructor
///
/// Either nothing, a ready-made [`AdminData`], or a raw mapping that still has
/// to go through [`AdminData::from_mapping`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AdminDataSource {
    #[default]
    Absent,
    Object(AdminData),
    Raw(serde_json::Value),
}

impl AdminDataSource {
    /// Resolve into stored admin data, rejecting anything that is neither a
    /// mapping nor an admin object
    pub fn resolve(self) -> ConstantResult<Option<AdminData>> {
        match self {
            AdminDataSource::Absent | AdminDataSource::Raw(serde_json::Value::Null) => Ok(None),
            AdminDataSource::Object(admin) => Ok(Some(admin)),
            AdminDataSource::Raw(serde_json::Value::Object(map)) => {
                AdminData::from_mapping(&map).map(Some)
            }
            AdminDataSource::Raw(other) => Err(ConstantError::InvalidAdminData {
                found: json_kind(&other).to_string(),
            }),
        }
    }
}

impl TryFrom<serde_json::Value> for AdminData {
    type Error = ConstantError;

    fn try_from(raw: serde_json::Value) -> Result<Self, Self::Error> {
        AdminDataSource::Raw(raw)
            .resolve()
            .map(Option::unwrap_or_default)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "mapping",
    }
}

impl From<AdminData> for AdminDataSource {
    fn from(admin: AdminData) -> Self {
        AdminDataSource::Object(admin)
    }
}

impl From<Option<AdminData>> for AdminDataSource {
    fn from(admin: Option<AdminData>) -> Self {
        admin.map_or(AdminDataSource::Absent, AdminDataSource::Object)
    }
}

impl From<serde_json::Value> for AdminDataSource {
    fn from(raw: serde_json::Value) -> Self {
        AdminDataSource::Raw(raw)
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for AdminDataSource {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        AdminDataSource::Raw(serde_json::Value::Object(map))
    }
}

// ============================================================================
// Literal Input
// ============================================================================

/// Untyped input to a validating scalar setter
///
/// Each scalar value coerces a `Literal` into its canonical payload type.
/// `Null` always normalizes to an absent payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Literal {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Literal {
    /// Read a literal from a JSON scalar
    ///
    /// Integral numbers become `Int`, other numbers `Float`; lists and
    /// mappings are rejected.
    pub fn from_json(value: &serde_json::Value) -> ConstantResult<Self> {
        match value {
            serde_json::Value::Null => Ok(Literal::Null),
            serde_json::Value::Bool(b) => Ok(Literal::Bool(*b)),
            serde_json::Value::Number(n) => Ok(match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Literal::Int(i),
                (None, Some(f)) => Literal::Float(f),
                (None, None) => Literal::Text(n.to_string()),
            }),
            serde_json::Value::String(s) => Ok(Literal::Text(s.clone())),
            other => Err(ConstantError::coercion("literal", json_kind(other))),
        }
    }

    /// Coerce into an integer payload
    pub fn to_integer(&self) -> ConstantResult<Option<i64>> {
        match self {
            Literal::Null => Ok(None),
            Literal::Bool(b) => Ok(Some(i64::from(*b))),
            Literal::Int(i) => Ok(Some(*i)),
            Literal::Float(f) => {
                // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
                if f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Ok(Some(f.trunc() as i64))
                } else {
                    Err(ConstantError::coercion("integer", self.describe()))
                }
            }
            Literal::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ConstantError::coercion("integer", self.describe())),
        }
    }

    /// Coerce into a boolean payload
    ///
    /// Text is `true` only for the exact token `"true"`; numbers are `true`
    /// when non-zero.
    pub fn to_boolean(&self) -> ConstantResult<Option<bool>> {
        Ok(match self {
            Literal::Null => None,
            Literal::Bool(b) => Some(*b),
            Literal::Int(i) => Some(*i != 0),
            Literal::Float(f) => Some(*f != 0.0),
            Literal::Text(s) => Some(s == "true"),
        })
    }

    /// Coerce into a string payload
    pub fn to_text(&self) -> Option<String> {
        match self {
            Literal::Null => None,
            Literal::Bool(b) => Some(b.to_string()),
            Literal::Int(i) => Some(i.to_string()),
            Literal::Float(f) => Some(format_float(*f)),
            Literal::Text(s) => Some(s.clone()),
        }
    }

    /// Render for error messages
    pub fn describe(&self) -> String {
        match self {
            Literal::Null => "null".to_string(),
            Literal::Bool(b) => b.to_string(),
            Literal::Int(i) => i.to_string(),
            Literal::Float(f) => format_float(*f),
            Literal::Text(s) => format!("{:?}", s),
        }
    }
}

/// Render a float keeping a fractional part on integral values (`1.0`, not `1`)
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        let sign = if f > 0.0 { "" } else { "-" };
        format!("{}inf", sign)
    } else if f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

macro_rules! literal_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Literal {
                fn from(v: $t) -> Self {
                    Literal::Int(i64::from(v))
                }
            }
        )*
    };
}

literal_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Literal::Bool(v)
    }
}

impl From<f32> for Literal {
    fn from(v: f32) -> Self {
        Literal::Float(f64::from(v))
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Float(v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::Text(v.to_string())
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Literal::Text(v)
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(v: Option<T>) -> Self {
        v.map_or(Literal::Null, Into::into)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_schema_version_threshold() {
        assert_eq!(SchemaVersion::from_number(3.0), SchemaVersion::Autosar3);
        assert_eq!(SchemaVersion::from_number(3.99), SchemaVersion::Autosar3);
        assert_eq!(SchemaVersion::from_number(4.0), SchemaVersion::Autosar4);
        assert_eq!(SchemaVersion::from_number(4.3), SchemaVersion::Autosar4);
    }

    #[test]
    fn test_schema_version_parse() {
        assert_eq!(
            "3.0.2".parse::<SchemaVersion>().unwrap(),
            SchemaVersion::Autosar3
        );
        assert_eq!(
            "4.2.2".parse::<SchemaVersion>().unwrap(),
            SchemaVersion::Autosar4
        );
        assert_eq!("4".parse::<SchemaVersion>().unwrap(), SchemaVersion::Autosar4);
        assert!("".parse::<SchemaVersion>().is_err());
        assert!("four".parse::<SchemaVersion>().is_err());
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(Literal::from(5).to_integer().unwrap(), Some(5));
        assert_eq!(Literal::from("42").to_integer().unwrap(), Some(42));
        assert_eq!(Literal::from(" -7 ").to_integer().unwrap(), Some(-7));
        assert_eq!(Literal::from(3.9).to_integer().unwrap(), Some(3));
        assert_eq!(Literal::from(true).to_integer().unwrap(), Some(1));
        assert_eq!(Literal::Null.to_integer().unwrap(), None);

        let err = Literal::from("1.5").to_integer().unwrap_err();
        assert!(err.is_coercion());
        assert!(Literal::from(f64::NAN).to_integer().is_err());
    }

    #[test]
    fn test_boolean_coercion() {
        assert_eq!(Literal::from("true").to_boolean().unwrap(), Some(true));
        assert_eq!(Literal::from("false").to_boolean().unwrap(), Some(false));
        assert_eq!(Literal::from("yes").to_boolean().unwrap(), Some(false));
        assert_eq!(Literal::from(0).to_boolean().unwrap(), Some(false));
        assert_eq!(Literal::from(2).to_boolean().unwrap(), Some(true));
        assert_eq!(Literal::Null.to_boolean().unwrap(), None);
    }

    #[test]
    fn test_text_coercion() {
        assert_eq!(Literal::from(12).to_text(), Some("12".to_string()));
        assert_eq!(Literal::from(1.0).to_text(), Some("1.0".to_string()));
        assert_eq!(Literal::from(0.25).to_text(), Some("0.25".to_string()));
        assert_eq!(Literal::from(false).to_text(), Some("false".to_string()));
        assert_eq!(Literal::from(None::<i32>).to_text(), None);
    }

    #[test]
    fn test_admin_data_from_mapping() {
        let raw = json!({
            "SDG": [
                {"GID": "Vendor", "SD": [{"GID": "Key", "VALUE": "v1"}, {"VALUE": 3}]},
                {"GID": "Empty"}
            ]
        });
        let admin = AdminData::from_mapping(raw.as_object().unwrap()).unwrap();

        assert_eq!(admin.special_data_groups.len(), 1);
        let group = &admin.special_data_groups[0];
        assert_eq!(group.gid.as_deref(), Some("Vendor"));
        assert_eq!(group.sd[0].gid.as_deref(), Some("Key"));
        assert_eq!(group.sd[0].value.as_deref(), Some("v1"));
        assert_eq!(group.sd[1].value.as_deref(), Some("3"));
        assert_eq!(group.sd[1].gid, None);
    }

    #[test]
    fn test_admin_data_source_resolution() {
        assert_eq!(AdminDataSource::Absent.resolve().unwrap(), None);
        assert_eq!(
            AdminDataSource::from(json!({"k": "v"})).resolve().unwrap(),
            Some(AdminData::new())
        );

        let admin = AdminData::new().with_group(SpecialDataGroup::new("G").with_data("x", None));
        assert_eq!(
            AdminDataSource::from(admin.clone()).resolve().unwrap(),
            Some(admin)
        );

        let err = AdminDataSource::from(json!(42)).resolve().unwrap_err();
        assert!(err.is_construction());
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn test_literal_from_json() {
        assert_eq!(Literal::from_json(&json!(null)).unwrap(), Literal::Null);
        assert_eq!(Literal::from_json(&json!(7)).unwrap(), Literal::Int(7));
        assert_eq!(Literal::from_json(&json!(2.5)).unwrap(), Literal::Float(2.5));
        assert_eq!(Literal::from_json(&json!("42")).unwrap(), Literal::from("42"));
        assert_eq!(Literal::from_json(&json!(true)).unwrap(), Literal::Bool(true));

        let err = Literal::from_json(&json!([1])).unwrap_err();
        assert!(err.is_coercion());
    }

    #[test]
    fn test_admin_data_serde_uses_raw_form() {
        let admin =
            AdminData::new().with_group(SpecialDataGroup::new("G").with_data("x", Some("K")));
        let raw = serde_json::to_value(&admin).unwrap();
        assert_eq!(raw, json!({"SDG": [{"GID": "G", "SD": [{"VALUE": "x", "GID": "K"}]}]}));

        let back: AdminData = serde_json::from_value(raw).unwrap();
        assert_eq!(back, admin);

        let err = serde_json::from_value::<AdminData>(json!(42)).unwrap_err();
        assert!(err.to_string().contains("adminData must be a mapping"));
    }

    #[test]
    fn test_admin_data_bad_sdg_shape() {
        let raw = json!({"SDG": "nope"});
        let err = AdminData::from_mapping(raw.as_object().unwrap()).unwrap_err();
        assert!(err.is_construction());
    }
}

//! JSON serialization for constants and value trees
//!
//! Works on strings only. Parent links and element identifiers are not part
//! of the document; they are re-established when a tree is loaded.
//!
//! Loading resolves every `adminData` entry through the admin-data factory
//! before decoding, so a malformed entry reports the construction error
//! rather than a generic decode failure.

use arconst_core::{AdminDataSource, ConstantResult};

use crate::constant::Constant;
use crate::value::Value;

// ============================================================================
// Save Functions
// ============================================================================

/// Save a constant to a pretty-printed JSON string
pub fn constant_to_json(constant: &Constant) -> ConstantResult<String> {
    Ok(serde_json::to_string_pretty(constant)?)
}

/// Save several constants as a JSON list
pub fn constants_to_json(constants: &[Constant]) -> ConstantResult<String> {
    Ok(serde_json::to_string_pretty(constants)?)
}

/// Save a value tree to a pretty-printed JSON string
pub fn value_to_json(value: &Value) -> ConstantResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load a constant from a JSON string
pub fn constant_from_json(json: &str) -> ConstantResult<Constant> {
    let mut constant: Constant = serde_json::from_value(parse_document(json)?)?;
    constant.relink();
    Ok(constant)
}

/// Load a document holding either one constant or a list of constants
pub fn constants_from_json(json: &str) -> ConstantResult<Vec<Constant>> {
    let document = parse_document(json)?;
    let mut constants: Vec<Constant> = match document {
        serde_json::Value::Array(_) => serde_json::from_value(document)?,
        other => vec![serde_json::from_value(other)?],
    };
    for constant in &mut constants {
        constant.relink();
    }
    tracing::debug!(count = constants.len(), "loaded constants");
    Ok(constants)
}

/// Load a value tree from a JSON string
pub fn value_from_json(json: &str) -> ConstantResult<Value> {
    let mut value: Value = serde_json::from_value(parse_document(json)?)?;
    value.relink();
    Ok(value)
}

fn parse_document(json: &str) -> ConstantResult<serde_json::Value> {
    let document: serde_json::Value = serde_json::from_str(json)?;
    check_admin_data(&document)?;
    Ok(document)
}

/// Run every `adminData` entry in the document through the factory
fn check_admin_data(node: &serde_json::Value) -> ConstantResult<()> {
    match node {
        serde_json::Value::Object(map) => {
            if let Some(raw) = map.get("adminData") {
                AdminDataSource::Raw(raw.clone()).resolve()?;
            }
            map.values().try_for_each(check_admin_data)
        }
        serde_json::Value::Array(items) => items.iter().try_for_each(check_admin_data),
        _ => Ok(()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationValue, SwValue, SwValueCont};
    use crate::composite::{ArrayValue, RecordValue};
    use crate::reference::ConstantReference;
    use crate::scalar::{BooleanValue, IntegerValue, NumericalValue, StringValue, TextValue};
    use arconst_core::{ConstantError, Named, Parented};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Constant {
        Constant::new(
            "Calib",
            RecordValue::new("Rec")
                .with_type_ref("/DataTypes/Rec_T")
                .with_element(IntegerValue::new("a", 1).unwrap())
                .with_element(BooleanValue::new("b", "true").unwrap())
                .with_element(StringValue::new("s", "hi"))
                .with_element(
                    ArrayValue::new()
                        .with_element(TextValue::new("t", "x"))
                        .with_element(NumericalValue::new(2.5)),
                )
                .with_element(ConstantReference::named("r", "/Constants/Other"))
                .with_element(
                    ApplicationValue::new("App", AdminDataSource::Absent)
                        .unwrap()
                        .with_value_cont(
                            SwValueCont::new()
                                .with_values([SwValue::Numeric(1.0), SwValue::from("on")]),
                        ),
                ),
        )
    }

    #[test]
    fn test_round_trip_keeps_tree() {
        let constant = sample();
        let json = constant_to_json(&constant).unwrap();
        let loaded = constant_from_json(&json).unwrap();

        assert_eq!(loaded.name(), "Calib");
        assert_eq!(loaded.asdict().unwrap(), constant.asdict().unwrap());
    }

    #[test]
    fn test_load_relinks_parents() {
        let json = constant_to_json(&sample()).unwrap();
        let loaded = constant_from_json(&json).unwrap();

        assert_eq!(loaded.value().parent(), Some(loaded.id()));
        let root_id = loaded.value().id();
        for child in loaded.value().children() {
            assert_eq!(child.parent(), Some(root_id));
        }
        let array = &loaded.value().children()[3];
        assert_eq!(array.children()[0].parent(), Some(array.id()));
    }

    #[test]
    fn test_load_single_or_list() {
        let doc = json!({
            "type": "Constant",
            "name": "VehicleSpeed_IV",
            "value": {"type": "IntegerValue", "name": "VehicleSpeed_IV", "typeRef": "uint16", "value": 65535}
        });
        let single = constants_from_json(&doc.to_string()).unwrap();
        assert_eq!(single.len(), 1);
        assert!(single[0].find("VehicleSpeed_IV").is_some());

        let list = constants_from_json(&json!([doc.clone(), doc]).to_string()).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_value_round_trip() {
        let value: Value = RecordValue::new("R")
            .with_element(IntegerValue::new("a", 7).unwrap())
            .into();
        let loaded = value_from_json(&value_to_json(&value).unwrap()).unwrap();
        assert_eq!(loaded.children()[0].name(), Some("a"));
        assert_eq!(loaded.children()[0].parent(), Some(loaded.id()));
    }

    #[test]
    fn test_load_validates_admin_data() {
        let doc = json!({
            "type": "Constant",
            "name": "C",
            "adminData": {"SDG": [{"GID": "Origin", "SD": [{"VALUE": "tool"}]}]},
            "value": {"type": "ApplicationValue", "label": "App", "adminData": 42}
        });
        let err = constant_from_json(&doc.to_string()).unwrap_err();
        assert!(matches!(err, ConstantError::InvalidAdminData { .. }));

        let doc = json!({
            "type": "Constant",
            "name": "C",
            "adminData": {"SDG": [{"GID": "Origin", "SD": [{"VALUE": "tool"}]}]},
            "value": {"type": "IntegerValue", "name": "V", "value": "42"}
        });
        let loaded = constant_from_json(&doc.to_string()).unwrap();
        let admin = loaded.admin_data.as_ref().unwrap();
        assert_eq!(admin.special_data_groups[0].gid.as_deref(), Some("Origin"));
        assert!(matches!(loaded.value(), Value::Integer(v) if v.value() == Some(42)));
    }

    #[test]
    fn test_load_rejects_empty_label() {
        let doc = json!({"type": "ApplicationValue", "label": " "});
        let err = value_from_json(&doc.to_string()).unwrap_err();
        assert!(err.to_string().contains("label must not be empty"));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let doc = json!({"type": "Constant", "name": "C", "value": {"type": "FloatValue"}});
        assert!(constant_from_json(&doc.to_string()).is_err());
    }
}

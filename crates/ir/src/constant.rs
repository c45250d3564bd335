//! Constant container
//!
//! A [`Constant`] names and owns exactly one root [`Value`]. Setting the root
//! attaches it to the constant; this is the only ownership edge from a
//! container to its payload.

use arconst_core::{
    AdminData, ConstantError, ConstantResult, ElementId, Named, Parented, SchemaVersion, Tagged,
    Validatable, new_element_id,
};
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// `CONSTANT-SPECIFICATION`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Constant {
    #[serde(skip, default = "new_element_id")]
    id: ElementId,

    name: String,

    #[serde(skip)]
    parent: Option<ElementId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_data: Option<AdminData>,

    value: Value,
}

impl Constant {
    /// Create a constant owning `value` as its root
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut constant = Self {
            id: new_element_id(),
            name: name.into(),
            parent: None,
            admin_data: None,
            value: value.into(),
        };
        constant.value.attach(constant.id);
        tracing::debug!(
            constant = %constant.name,
            kind = %constant.value.kind(),
            "created constant"
        );
        constant
    }

    pub fn with_admin_data(mut self, admin_data: AdminData) -> Self {
        self.admin_data = Some(admin_data);
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replace the root, returning the previous one detached
    pub fn set_value(&mut self, value: impl Into<Value>) -> Value {
        let mut value = value.into();
        value.attach(self.id);
        let mut old = std::mem::replace(&mut self.value, value);
        old.detach();
        old
    }

    /// Attach this constant under a package element
    ///
    /// Called by the package layer when it registers the constant.
    pub fn attach(&mut self, parent: ElementId) {
        self.parent = Some(parent);
    }

    /// Single-level lookup: the root value if its name equals `name`
    ///
    /// Never descends into composite children.
    pub fn find(&self, name: &str) -> Option<&Value> {
        if self.value.name_is(name) {
            Some(&self.value)
        } else {
            None
        }
    }

    /// Visit the root value and its descendants in pre-order
    pub fn walk<F: FnMut(&Value, usize)>(&self, visitor: &mut F) {
        self.value.walk_at(1, visitor);
    }

    /// `(depth, tag)` pairs for the constant and its value tree
    pub fn tags(&self, version: SchemaVersion) -> Vec<(usize, &'static str)> {
        let mut tags = vec![(0, self.tag(version))];
        self.walk(&mut |value, depth| tags.push((depth, value.tag(version))));
        tags
    }

    /// Check every value in the tree against the schema version
    pub fn check_schema(&self, version: SchemaVersion) -> ConstantResult<()> {
        self.value.check_schema(version)
    }

    /// Dictionary view: `{"type": "Constant", "name": .., "value": {..}}`
    pub fn asdict(&self) -> ConstantResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Re-establish parent links after deserialization
    pub(crate) fn relink(&mut self) {
        self.value.attach(self.id);
        self.value.relink();
    }
}

impl Tagged for Constant {
    fn tag(&self, _version: SchemaVersion) -> &'static str {
        "CONSTANT-SPECIFICATION"
    }
}

impl Named for Constant {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Parented for Constant {
    fn parent(&self) -> Option<ElementId> {
        self.parent
    }
}

impl Validatable for Constant {
    fn validate(&self) -> ConstantResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConstantError::validation("Constant name must not be empty"));
        }
        self.value.validate()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::RecordValue;
    use crate::scalar::IntegerValue;
    use arconst_core::{Named, RootLookup};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn speed() -> Constant {
        Constant::new("C", IntegerValue::new("V", 5).unwrap())
    }

    #[test]
    fn test_find_root_by_name() {
        let constant = speed();
        let found = constant.find("V").unwrap();
        assert_eq!(found.name(), Some("V"));
        assert!(matches!(found, Value::Integer(v) if v.value() == Some(5)));
        assert!(constant.find("X").is_none());
    }

    #[test]
    fn test_find_is_shallow() {
        let constant = Constant::new(
            "C",
            RecordValue::new("Rec").with_element(IntegerValue::new("inner", 1).unwrap()),
        );
        assert!(constant.find("Rec").is_some());
        assert!(constant.find("inner").is_none());
    }

    #[test]
    fn test_root_parent_is_constant() {
        let constant = speed();
        assert_eq!(constant.value().parent(), Some(constant.id()));
    }

    #[test]
    fn test_set_value_reattaches() {
        let mut constant = speed();
        let old = constant.set_value(IntegerValue::new("W", 6).unwrap());
        assert_eq!(old.parent(), None);
        assert_eq!(old.name(), Some("V"));
        assert_eq!(constant.value().parent(), Some(constant.id()));
        assert!(constant.find("W").is_some());

        let old = constant.set_value(
            RecordValue::new("Rec").with_element(IntegerValue::new("a", 1).unwrap()),
        );
        assert_eq!(old.parent(), None);
        let root = constant.value();
        assert_eq!(root.parent(), Some(constant.id()));
        assert_eq!(root.children()[0].parent(), Some(root.id()));
    }

    struct Package {
        id: ElementId,
        root: ElementId,
        constants: HashMap<ElementId, ()>,
    }

    impl RootLookup for Package {
        fn root_ws(&self, id: ElementId) -> Option<ElementId> {
            if id == self.id || self.constants.contains_key(&id) {
                Some(self.root)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_root_ws_climbs_through_package() {
        let mut constant = speed();
        let package = Package {
            id: new_element_id(),
            root: new_element_id(),
            constants: HashMap::from([(constant.id(), ())]),
        };

        assert_eq!(constant.root_ws(&package), None);
        constant.attach(package.id);
        assert_eq!(constant.root_ws(&package), Some(package.root));
        assert_eq!(constant.value().root_ws(&package), Some(package.root));
    }

    #[test]
    fn test_tags_include_constant() {
        let constant = Constant::new(
            "C",
            RecordValue::new("Rec").with_element(IntegerValue::new("a", 1).unwrap()),
        );
        assert_eq!(
            constant.tags(SchemaVersion::Autosar3),
            vec![
                (0, "CONSTANT-SPECIFICATION"),
                (1, "RECORD-SPECIFICATION"),
                (2, "INTEGER-LITERAL"),
            ]
        );
    }

    #[test]
    fn test_validate_name() {
        assert!(speed().is_valid());
        assert!(!Constant::new(" ", IntegerValue::new("V", 1).unwrap()).is_valid());
    }

    #[test]
    fn test_asdict_shape() {
        let dict = speed().asdict().unwrap();
        assert_eq!(dict["type"], "Constant");
        assert_eq!(dict["name"], "C");
        assert_eq!(dict["value"]["type"], "IntegerValue");
        assert_eq!(dict["value"]["value"], 5);
    }
}

//! The closed value taxonomy
//!
//! [`Value`] is the tagged union of every literal-value variant that can sit
//! inside a constant. Each variant is fixed at construction; consumers
//! dispatch on it with exhaustive matches, so adding a variant forces every
//! tag or initializer consumer to be revisited.

use arconst_core::{
    AdminData, AdminDataSource, ConstantError, ConstantResult, ElementId, Named, Parented,
    SchemaVersion, Tagged, Validatable, new_element_id,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::application::ApplicationValue;
use crate::composite::{ArrayValue, RecordValue};
use crate::reference::ConstantReference;
use crate::scalar::{BooleanValue, IntegerValue, NumericalValue, StringValue, TextValue};

// ============================================================================
// ValueHeader
// ============================================================================

/// Identity shared by the AUTOSAR 3 style values
///
/// The parent link is an identifier, never an owning handle. It is set by the
/// owning container at attach time and is not serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueHeader {
    /// Unique identifier used as the target of child parent links
    #[serde(skip, default = "new_element_id")]
    pub(crate) id: ElementId,

    /// Short name; absent for some AUTOSAR 4 nested values
    pub(crate) name: Option<String>,

    /// Non-owning back-reference to the owning container
    #[serde(skip)]
    pub(crate) parent: Option<ElementId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) admin_data: Option<AdminData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ValueHeader {
    pub(crate) fn new(name: Option<String>) -> Self {
        Self {
            id: new_element_id(),
            name,
            parent: None,
            admin_data: None,
            category: None,
        }
    }
}

// ============================================================================
// ValueKind
// ============================================================================

/// Discriminator of the value variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Boolean,
    String,
    Text,
    Numerical,
    Record,
    Array,
    Application,
    ConstantReference,
}

impl ValueKind {
    /// Name of the concrete variant type
    pub fn type_name(self) -> &'static str {
        match self {
            ValueKind::Integer => "IntegerValue",
            ValueKind::Boolean => "BooleanValue",
            ValueKind::String => "StringValue",
            ValueKind::Text => "TextValue",
            ValueKind::Numerical => "NumericalValue",
            ValueKind::Record => "RecordValue",
            ValueKind::Array => "ArrayValue",
            ValueKind::Application => "ApplicationValue",
            ValueKind::ConstantReference => "ConstantReference",
        }
    }

    /// Check if the variant only exists in AUTOSAR 4 schemas
    pub fn is_ar4_only(self) -> bool {
        matches!(
            self,
            ValueKind::Text
                | ValueKind::Numerical
                | ValueKind::Application
                | ValueKind::ConstantReference
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

// ============================================================================
// Value
// ============================================================================

/// A literal value inside a constant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Value {
    #[serde(rename = "IntegerValue")]
    Integer(IntegerValue),
    #[serde(rename = "BooleanValue")]
    Boolean(BooleanValue),
    #[serde(rename = "StringValue")]
    String(StringValue),
    #[serde(rename = "TextValue")]
    Text(TextValue),
    #[serde(rename = "NumericalValue")]
    Numerical(NumericalValue),
    #[serde(rename = "RecordValue")]
    Record(RecordValue),
    #[serde(rename = "ArrayValue")]
    Array(ArrayValue),
    #[serde(rename = "ApplicationValue")]
    Application(ApplicationValue),
    #[serde(rename = "ConstantReference")]
    ConstantReference(ConstantReference),
}

impl Value {
    /// Get the variant discriminator
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::String(_) => ValueKind::String,
            Value::Text(_) => ValueKind::Text,
            Value::Numerical(_) => ValueKind::Numerical,
            Value::Record(_) => ValueKind::Record,
            Value::Array(_) => ValueKind::Array,
            Value::Application(_) => ValueKind::Application,
            Value::ConstantReference(_) => ValueKind::ConstantReference,
        }
    }

    /// Unique identifier of this node
    pub fn id(&self) -> ElementId {
        match self {
            Value::Integer(v) => v.header.id,
            Value::Boolean(v) => v.header.id,
            Value::String(v) => v.header.id,
            Value::Text(v) => v.header.id,
            Value::Numerical(v) => v.header.id,
            Value::Record(v) => v.header.id,
            Value::Array(v) => v.header.id,
            Value::Application(v) => v.header.id,
            Value::ConstantReference(v) => v.header.id,
        }
    }

    /// Admin data attached to this node, if any
    pub fn admin_data(&self) -> Option<&AdminData> {
        match self {
            Value::Integer(v) => v.header.admin_data.as_ref(),
            Value::Boolean(v) => v.header.admin_data.as_ref(),
            Value::String(v) => v.header.admin_data.as_ref(),
            Value::Text(v) => v.header.admin_data.as_ref(),
            Value::Numerical(v) => v.header.admin_data.as_ref(),
            Value::Record(v) => v.header.admin_data.as_ref(),
            Value::Array(v) => v.header.admin_data.as_ref(),
            Value::Application(v) => v.admin_data(),
            Value::ConstantReference(v) => v.header.admin_data.as_ref(),
        }
    }

    /// Replace the admin data (builder form), converting raw mappings
    ///
    /// Fails if the admin data is neither a mapping nor an [`AdminData`]
    /// object.
    pub fn with_admin_data(
        mut self,
        admin_data: impl Into<AdminDataSource>,
    ) -> ConstantResult<Self> {
        let resolved = admin_data.into().resolve()?;
        let slot = match &mut self {
            Value::Integer(v) => &mut v.header.admin_data,
            Value::Boolean(v) => &mut v.header.admin_data,
            Value::String(v) => &mut v.header.admin_data,
            Value::Text(v) => &mut v.header.admin_data,
            Value::Numerical(v) => &mut v.header.admin_data,
            Value::Record(v) => &mut v.header.admin_data,
            Value::Array(v) => &mut v.header.admin_data,
            Value::Application(v) => &mut v.header.admin_data,
            Value::ConstantReference(v) => &mut v.header.admin_data,
        };
        *slot = resolved;
        Ok(self)
    }

    /// Data type reference of the AUTOSAR 3 style variants
    pub fn type_ref(&self) -> Option<&str> {
        match self {
            Value::Integer(v) => v.type_ref.as_deref(),
            Value::Boolean(v) => v.type_ref.as_deref(),
            Value::String(v) => v.type_ref.as_deref(),
            Value::Record(v) => v.type_ref.as_deref(),
            Value::Array(v) => v.type_ref.as_deref(),
            Value::Text(_)
            | Value::Numerical(_)
            | Value::Application(_)
            | Value::ConstantReference(_) => None,
        }
    }

    /// Check if this variant only exists in AUTOSAR 4 schemas
    pub fn is_ar4_only(&self) -> bool {
        self.kind().is_ar4_only()
    }

    /// Like [`Tagged::tag`], but rejects AUTOSAR 4 only variants under an
    /// AUTOSAR 3 schema
    pub fn checked_tag(&self, version: SchemaVersion) -> ConstantResult<&'static str> {
        if self.is_ar4_only() && !version.is_autosar4() {
            return Err(ConstantError::SchemaMismatch {
                variant: self.kind().to_string(),
                version: version.to_string(),
            });
        }
        Ok(self.tag(version))
    }

    /// Attach this value under `parent`
    ///
    /// Called by whichever container takes ownership of the value.
    pub fn attach(&mut self, parent: ElementId) {
        let header_parent = match self {
            Value::Integer(v) => &mut v.header.parent,
            Value::Boolean(v) => &mut v.header.parent,
            Value::String(v) => &mut v.header.parent,
            Value::Text(v) => &mut v.header.parent,
            Value::Numerical(v) => &mut v.header.parent,
            Value::Record(v) => &mut v.header.parent,
            Value::Array(v) => &mut v.header.parent,
            Value::Application(v) => &mut v.header.parent,
            Value::ConstantReference(v) => &mut v.header.parent,
        };
        *header_parent = Some(parent);
    }

    /// Clear the parent link of a value removed from its container
    pub(crate) fn detach(&mut self) {
        match self {
            Value::Integer(v) => v.header.parent = None,
            Value::Boolean(v) => v.header.parent = None,
            Value::String(v) => v.header.parent = None,
            Value::Text(v) => v.header.parent = None,
            Value::Numerical(v) => v.header.parent = None,
            Value::Record(v) => v.header.parent = None,
            Value::Array(v) => v.header.parent = None,
            Value::Application(v) => v.header.parent = None,
            Value::ConstantReference(v) => v.header.parent = None,
        }
    }

    /// Child values in serialization order (empty for non-composites)
    pub fn children(&self) -> &[Value] {
        match self {
            Value::Record(v) => v.elements(),
            Value::Array(v) => v.elements(),
            _ => &[],
        }
    }

    /// Re-establish the parent links of every descendant
    pub(crate) fn relink(&mut self) {
        match self {
            Value::Record(v) => v.relink(),
            Value::Array(v) => v.relink(),
            _ => {}
        }
    }

    /// Visit this value and every descendant in pre-order with its depth
    pub fn walk<F: FnMut(&Value, usize)>(&self, visitor: &mut F) {
        self.walk_at(0, visitor);
    }

    pub(crate) fn walk_at<F: FnMut(&Value, usize)>(&self, depth: usize, visitor: &mut F) {
        visitor(self, depth);
        for child in self.children() {
            child.walk_at(depth + 1, visitor);
        }
    }

    /// Collect `(depth, tag)` pairs in pre-order
    pub fn tags(&self, version: SchemaVersion) -> Vec<(usize, &'static str)> {
        let mut tags = Vec::new();
        self.walk(&mut |value, depth| tags.push((depth, value.tag(version))));
        tags
    }

    /// Check every node of the tree against the schema version
    pub fn check_schema(&self, version: SchemaVersion) -> ConstantResult<()> {
        let mut result = Ok(());
        self.walk(&mut |value, _| {
            if result.is_ok() {
                result = value.checked_tag(version).map(|_| ());
            }
        });
        result
    }

    /// Dictionary view with a `type` discriminator and camelCase keys
    pub fn asdict(&self) -> ConstantResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Tagged for Value {
    fn tag(&self, version: SchemaVersion) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER-LITERAL",
            Value::Boolean(_) => "BOOLEAN-LITERAL",
            Value::String(_) => "STRING-LITERAL",
            Value::Text(_) => "TEXT-VALUE-SPECIFICATION",
            Value::Numerical(_) => "NUMERICAL-VALUE-SPECIFICATION",
            Value::Record(v) => v.tag(version),
            Value::Array(v) => v.tag(version),
            Value::Application(v) => v.tag(version),
            Value::ConstantReference(_) => "CONSTANT-REFERENCE",
        }
    }
}

impl Named for Value {
    fn name(&self) -> Option<&str> {
        match self {
            Value::Integer(v) => v.header.name.as_deref(),
            Value::Boolean(v) => v.header.name.as_deref(),
            Value::String(v) => v.header.name.as_deref(),
            Value::Text(v) => v.header.name.as_deref(),
            Value::Numerical(v) => v.header.name.as_deref(),
            Value::Record(v) => v.header.name.as_deref(),
            Value::Array(v) => v.header.name.as_deref(),
            Value::Application(v) => Some(v.label()),
            Value::ConstantReference(v) => v.header.name.as_deref(),
        }
    }
}

impl Parented for Value {
    fn parent(&self) -> Option<ElementId> {
        match self {
            Value::Integer(v) => v.header.parent,
            Value::Boolean(v) => v.header.parent,
            Value::String(v) => v.header.parent,
            Value::Text(v) => v.header.parent,
            Value::Numerical(v) => v.header.parent,
            Value::Record(v) => v.header.parent,
            Value::Array(v) => v.header.parent,
            Value::Application(v) => v.header.parent,
            Value::ConstantReference(v) => v.header.parent,
        }
    }
}

impl Validatable for Value {
    fn validate(&self) -> ConstantResult<()> {
        match self {
            Value::Application(v) => v.validate(),
            Value::Record(_) | Value::Array(_) => {
                self.children().iter().try_for_each(Validatable::validate)
            }
            _ => Ok(()),
        }
    }
}

macro_rules! value_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    Integer => IntegerValue,
    Boolean => BooleanValue,
    String => StringValue,
    Text => TextValue,
    Numerical => NumericalValue,
    Record => RecordValue,
    Array => ArrayValue,
    Application => ApplicationValue,
    ConstantReference => ConstantReference,
}

// ============================================================================
// Tests
// ============================================================================

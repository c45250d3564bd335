//! Record and array values
//!
//! Composites own their children outright. Insertion order is the
//! serialization order and is never changed by any traversal.

use arconst_core::{SchemaVersion, Tagged};
use serde::{Deserialize, Serialize};

use crate::value::{Value, ValueHeader};

/// Shared child storage for records and arrays
macro_rules! composite_elements {
    ($ty:ident) => {
        impl $ty {
            /// Append a child (builder form)
            pub fn with_element(mut self, value: impl Into<Value>) -> Self {
                self.push(value);
                self
            }

            /// Append several children in order (builder form)
            pub fn with_elements<I, V>(mut self, values: I) -> Self
            where
                I: IntoIterator<Item = V>,
                V: Into<Value>,
            {
                for value in values {
                    self.push(value);
                }
                self
            }

            /// Append a child, making this composite its parent
            pub fn push(&mut self, value: impl Into<Value>) {
                let mut value = value.into();
                value.attach(self.header.id);
                tracing::trace!(
                    parent = %self.header.id,
                    child = %value.id(),
                    kind = %value.kind(),
                    "attached element"
                );
                self.elements.push(value);
            }

            /// Insert a child at `index`, shifting later children right
            ///
            /// # Panics
            ///
            /// Panics if `index > len`.
            pub fn insert(&mut self, index: usize, value: impl Into<Value>) {
                let mut value = value.into();
                value.attach(self.header.id);
                self.elements.insert(index, value);
            }

            /// Remove and return the child at `index`, clearing its parent link
            pub fn remove(&mut self, index: usize) -> Option<Value> {
                if index >= self.elements.len() {
                    return None;
                }
                let mut value = self.elements.remove(index);
                value.detach();
                Some(value)
            }

            /// Children in serialization order
            pub fn elements(&self) -> &[Value] {
                &self.elements
            }

            /// Replace the child at `index`, returning the previous one detached
            ///
            /// Returns `None` and drops `value` if `index` is out of range.
            pub fn replace(&mut self, index: usize, value: impl Into<Value>) -> Option<Value> {
                let slot = self.elements.get_mut(index)?;
                let mut value = value.into();
                value.attach(self.header.id);
                let mut old = std::mem::replace(slot, value);
                old.detach();
                Some(old)
            }

            pub fn len(&self) -> usize {
                self.elements.len()
            }

            pub fn is_empty(&self) -> bool {
                self.elements.is_empty()
            }

            pub(crate) fn relink(&mut self) {
                let id = self.header.id;
                for child in &mut self.elements {
                    child.attach(id);
                    child.relink();
                }
            }
        }
    };
}

// ============================================================================
// RecordValue
// ============================================================================

/// `RECORD-VALUE-SPECIFICATION` (AUTOSAR 4) / `RECORD-SPECIFICATION` (AUTOSAR 3)
///
/// `type_ref` is only needed for AUTOSAR 3 constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordValue {
    #[serde(flatten)]
    pub(crate) header: ValueHeader,

    #[serde(default)]
    pub type_ref: Option<String>,

    #[serde(default)]
    elements: Vec<Value>,
}

impl RecordValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            header: ValueHeader::new(Some(name.into())),
            type_ref: None,
            elements: Vec::new(),
        }
    }

    pub fn with_type_ref(mut self, type_ref: impl Into<String>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }
}

composite_elements!(RecordValue);

impl Tagged for RecordValue {
    fn tag(&self, version: SchemaVersion) -> &'static str {
        match version {
            SchemaVersion::Autosar4 => "RECORD-VALUE-SPECIFICATION",
            SchemaVersion::Autosar3 => "RECORD-SPECIFICATION",
        }
    }
}

// ============================================================================
// ArrayValue
// ============================================================================

/// `ARRAY-VALUE-SPECIFICATION` (AUTOSAR 4) / `ARRAY-SPECIFICATION` (AUTOSAR 3)
///
/// Name and `type_ref` are only needed for AUTOSAR 3 constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayValue {
    #[serde(flatten)]
    pub(crate) header: ValueHeader,

    #[serde(default)]
    pub type_ref: Option<String>,

    #[serde(default)]
    elements: Vec<Value>,
}

impl ArrayValue {
    /// Create an unnamed array
    pub fn new() -> Self {
        Self {
            header: ValueHeader::new(None),
            type_ref: None,
            elements: Vec::new(),
        }
    }

    /// Create a named array
    pub fn named(name: impl Into<String>) -> Self {
        let mut array = Self::new();
        array.header.name = Some(name.into());
        array
    }

    pub fn with_type_ref(mut self, type_ref: impl Into<String>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }
}

impl Default for ArrayValue {
    fn default() -> Self {
        Self::new()
    }
}

composite_elements!(ArrayValue);

impl Tagged for ArrayValue {
    fn tag(&self, version: SchemaVersion) -> &'static str {
        match version {
            SchemaVersion::Autosar4 => "ARRAY-VALUE-SPECIFICATION",
            SchemaVersion::Autosar3 => "ARRAY-SPECIFICATION",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! `CONSTANT-REFERENCE` (AUTOSAR 4)

use arconst_core::{AdminData, AdminDataSource, ConstantResult};
use serde::{Deserialize, Serialize};

use crate::value::ValueHeader;

/// A value that refers to another constant by name or path instead of
/// carrying an inline literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantReference {
    #[serde(flatten)]
    pub(crate) header: ValueHeader,

    /// Reference to the target constant, e.g. `/Constants/VehicleSpeed_IV`
    #[serde(default)]
    pub value: Option<String>,
}

impl ConstantReference {
    /// Create an unnamed reference to `target`
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            header: ValueHeader::new(None),
            value: Some(target.into()),
        }
    }

    /// Create a named reference to `target`
    pub fn named(name: impl Into<String>, target: impl Into<String>) -> Self {
        let mut reference = Self::new(target);
        reference.header.name = Some(name.into());
        reference
    }

    /// Attach admin data, converting raw mappings
    pub fn with_admin_data(
        mut self,
        admin_data: impl Into<AdminDataSource>,
    ) -> ConstantResult<Self> {
        self.header.admin_data = admin_data.into().resolve()?;
        Ok(self)
    }

    pub fn target(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn admin_data(&self) -> Option<&AdminData> {
        self.header.admin_data.as_ref()
    }
}

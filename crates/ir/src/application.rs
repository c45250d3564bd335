//! AUTOSAR 4 application values
//!
//! `APPLICATION-VALUE-SPECIFICATION` carries physical value and axis data
//! containers instead of a single scalar. It is identified by a required
//! label and may carry admin data.

use arconst_core::{
    AdminData, AdminDataSource, ConstantError, ConstantResult, ElementId, SchemaVersion, Tagged,
    Validatable, new_element_id,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Ar4Header
// ============================================================================

/// Identity of AUTOSAR 4 only values: a required label plus admin data
///
/// Deserialization goes through [`Ar4Header::new`], so loaded headers obey
/// the same label and admin-data rules as constructed ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Ar4HeaderRepr")]
pub struct Ar4Header {
    #[serde(skip, default = "new_element_id")]
    pub(crate) id: ElementId,

    pub(crate) label: String,

    #[serde(skip)]
    pub(crate) parent: Option<ElementId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) admin_data: Option<AdminData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Ar4Header {
    /// Create a header, converting raw admin-data mappings
    ///
    /// Fails if the label is empty or the admin data is neither a mapping
    /// nor an [`AdminData`] object.
    pub fn new(
        label: impl Into<String>,
        admin_data: impl Into<AdminDataSource>,
    ) -> ConstantResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ConstantError::InvalidIdentifier {
                kind: "label".to_string(),
                message: "label must not be empty".to_string(),
            });
        }
        Ok(Self {
            id: new_element_id(),
            label,
            parent: None,
            admin_data: admin_data.into().resolve()?,
            category: None,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn admin_data(&self) -> Option<&AdminData> {
        self.admin_data.as_ref()
    }
}

/// Stored form of [`Ar4Header`] before validation
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ar4HeaderRepr {
    label: String,
    #[serde(default)]
    admin_data: Option<serde_json::Value>,
    #[serde(default)]
    category: Option<String>,
}

impl TryFrom<Ar4HeaderRepr> for Ar4Header {
    type Error = ConstantError;

    fn try_from(repr: Ar4HeaderRepr) -> Result<Self, Self::Error> {
        let admin_data = repr
            .admin_data
            .map_or(AdminDataSource::Absent, AdminDataSource::Raw);
        let mut header = Ar4Header::new(repr.label, admin_data)?;
        header.category = repr.category;
        Ok(header)
    }
}

// ============================================================================
// SW-VALUE-CONT / SW-AXIS-CONT
// ============================================================================

/// One entry of a physical value list: `V` (numeric) or `VT` (text)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SwValue {
    Numeric(f64),
    Text(String),
}

impl From<f64> for SwValue {
    fn from(v: f64) -> Self {
        SwValue::Numeric(v)
    }
}

impl From<i32> for SwValue {
    fn from(v: i32) -> Self {
        SwValue::Numeric(f64::from(v))
    }
}

impl From<&str> for SwValue {
    fn from(v: &str) -> Self {
        SwValue::Text(v.to_string())
    }
}

/// `SW-VALUE-CONT`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwValueCont {
    #[serde(default)]
    pub values: Option<Vec<SwValue>>,
    #[serde(default)]
    pub unit_ref: Option<String>,
    #[serde(default)]
    pub unit_display_name: Option<String>,
    #[serde(default)]
    pub sw_array_size: Option<Vec<u32>>,
}

impl SwValueCont {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SwValue>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_unit(mut self, unit_ref: impl Into<String>) -> Self {
        self.unit_ref = Some(unit_ref.into());
        self
    }

    pub fn with_unit_display_name(mut self, name: impl Into<String>) -> Self {
        self.unit_display_name = Some(name.into());
        self
    }

    pub fn with_array_size(mut self, sizes: Vec<u32>) -> Self {
        self.sw_array_size = Some(sizes);
        self
    }
}

impl Tagged for SwValueCont {
    fn tag(&self, _version: SchemaVersion) -> &'static str {
        "SW-VALUE-CONT"
    }
}

/// `SW-AXIS-CONT`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwAxisCont {
    #[serde(default)]
    pub values: Option<Vec<SwValue>>,
    #[serde(default)]
    pub unit_ref: Option<String>,
    #[serde(default)]
    pub unit_display_name: Option<String>,
    #[serde(default)]
    pub sw_axis_index: Option<u32>,
    #[serde(default)]
    pub sw_array_size: Option<Vec<u32>>,
    #[serde(default)]
    pub category: Option<String>,
}

impl SwAxisCont {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SwValue>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_unit(mut self, unit_ref: impl Into<String>) -> Self {
        self.unit_ref = Some(unit_ref.into());
        self
    }

    pub fn with_axis_index(mut self, index: u32) -> Self {
        self.sw_axis_index = Some(index);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl Tagged for SwAxisCont {
    fn tag(&self, _version: SchemaVersion) -> &'static str {
        "SW-AXIS-CONT"
    }
}

// ============================================================================
// ApplicationValue
// ============================================================================

/// `APPLICATION-VALUE-SPECIFICATION` (AUTOSAR 4)
///
/// Holds at most one value container and at most one axis container; the
/// field types rule out any other container kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationValue {
    #[serde(flatten)]
    pub(crate) header: Ar4Header,

    #[serde(default)]
    pub sw_value_cont: Option<SwValueCont>,

    #[serde(default)]
    pub sw_axis_cont: Option<SwAxisCont>,
}

impl ApplicationValue {
    /// Create an application value with the given label and admin data
    pub fn new(
        label: impl Into<String>,
        admin_data: impl Into<AdminDataSource>,
    ) -> ConstantResult<Self> {
        Ok(Self {
            header: Ar4Header::new(label, admin_data)?,
            sw_value_cont: None,
            sw_axis_cont: None,
        })
    }

    pub fn with_value_cont(mut self, cont: SwValueCont) -> Self {
        self.sw_value_cont = Some(cont);
        self
    }

    pub fn with_axis_cont(mut self, cont: SwAxisCont) -> Self {
        self.sw_axis_cont = Some(cont);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.header.category = Some(category.into());
        self
    }

    pub fn label(&self) -> &str {
        self.header.label()
    }

    pub fn admin_data(&self) -> Option<&AdminData> {
        self.header.admin_data()
    }
}

impl Tagged for ApplicationValue {
    fn tag(&self, _version: SchemaVersion) -> &'static str {
        "APPLICATION-VALUE-SPECIFICATION"
    }
}

impl Validatable for ApplicationValue {
    fn validate(&self) -> ConstantResult<()> {
        if self.label().trim().is_empty() {
            return Err(ConstantError::validation(
                "ApplicationValue label must not be empty",
            ));
        }
        if let Some(cont) = &self.sw_value_cont {
            check_array_size(self.label(), "value", &cont.values, &cont.sw_array_size)?;
        }
        if let Some(axis) = &self.sw_axis_cont {
            check_array_size(self.label(), "axis", &axis.values, &axis.sw_array_size)?;
        }
        Ok(())
    }
}

/// The number of values must match the product of the declared array sizes
fn check_array_size(
    label: &str,
    container: &str,
    values: &Option<Vec<SwValue>>,
    sizes: &Option<Vec<u32>>,
) -> ConstantResult<()> {
    let (Some(values), Some(sizes)) = (values, sizes) else {
        return Ok(());
    };
    let expected = sizes
        .iter()
        .try_fold(1usize, |acc, s| acc.checked_mul(*s as usize))
        .ok_or_else(|| {
            ConstantError::validation(format!(
                "ApplicationValue '{}': {} container array size {:?} is too large",
                label, container, sizes
            ))
        })?;
    if values.len() != expected {
        return Err(ConstantError::validation(format!(
            "ApplicationValue '{}': {} container has {} values but array size is {}",
            label,
            container,
            values.len(),
            expected
        )));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

//! Core traits for arconst
//!
//! This module defines the behaviours shared by every element of the value
//! model: schema tag selection, naming, validation, and root lookup through
//! non-owning parent links.

use crate::error::ConstantResult;
use crate::types::{ElementId, SchemaVersion};

// ============================================================================
// Tagged Trait
// ============================================================================

/// Trait for elements that map onto an ARXML element name
///
/// `tag` must be a pure function of the element kind and the schema version;
/// it never inspects payload contents.
///
/// # Example
///
/// ```rust,ignore
/// use arconst_core::{SchemaVersion, Tagged};
///
/// struct Record;
///
/// impl Tagged for Record {
///     fn tag(&self, version: SchemaVersion) -> &'static str {
///         if version.is_autosar4() {
///             "RECORD-VALUE-SPECIFICATION"
///         } else {
///             "RECORD-SPECIFICATION"
///         }
///     }
/// }
/// ```
pub trait Tagged {
    /// Get the element name for the given schema version
    fn tag(&self, version: SchemaVersion) -> &'static str;
}

// ============================================================================
// Named Trait
// ============================================================================

/// Trait for elements that may carry a short name
pub trait Named {
    /// Get the name, if any
    fn name(&self) -> Option<&str>;

    /// Check if the name equals `other` exactly
    fn name_is(&self, other: &str) -> bool {
        self.name() == Some(other)
    }
}

// ============================================================================
// Root Lookup
// ============================================================================

/// Answers root lookups for elements addressed by identifier
///
/// Implemented by whatever owns the element hierarchy (a package or
/// workspace layer). Given the identifier of an element it owns, it returns
/// the identifier of the workspace root that element belongs to.
pub trait RootLookup {
    /// Root of the element `id`, or `None` if `id` is unknown or detached
    fn root_ws(&self, id: ElementId) -> Option<ElementId>;
}

/// Trait for elements holding a non-owning link to their parent
pub trait Parented {
    /// The parent link set at attach time
    fn parent(&self) -> Option<ElementId>;

    /// Climb to the workspace root through the parent link
    ///
    /// Returns `None` without a parent, otherwise delegates to the parent's
    /// own root lookup.
    fn root_ws<L: RootLookup + ?Sized>(&self, lookup: &L) -> Option<ElementId> {
        self.parent().and_then(|parent| lookup.root_ws(parent))
    }
}

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
pub trait Validatable {
    /// Validate the current state of the object
    fn validate(&self) -> ConstantResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================

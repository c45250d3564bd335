//! # arconst IR
//!
//! The value tree used to initialize AUTOSAR software-component constants.
//!
//! ## Core Concepts
//!
//! - **Value**: closed set of literal variants (integer, boolean, string,
//!   text, numerical, record, array, application, constant reference)
//! - **Composite**: records and arrays own their children in insertion order
//! - **ApplicationValue**: AUTOSAR 4 value carrying `SW-VALUE-CONT` and
//!   `SW-AXIS-CONT` containers
//! - **Constant**: names and owns exactly one root value
//!

// Module declarations
pub mod application;
pub mod composite;
pub mod constant;
pub mod reference;
pub mod scalar;
pub mod serialization;
pub mod value;

// Re-export commonly used types at crate root
pub use application::{Ar4Header, ApplicationValue, SwAxisCont, SwValue, SwValueCont};
pub use composite::{ArrayValue, RecordValue};
pub use constant::Constant;
pub use reference::ConstantReference;
pub use scalar::{BooleanValue, IntegerValue, NumericalValue, StringValue, TextValue};
pub use serialization::{
    constant_from_json, constant_to_json, constants_from_json, constants_to_json,
    value_from_json, value_to_json,
};
pub use value::{Value, ValueHeader, ValueKind};

// Re-export core types that are commonly used with IR
pub use arconst_core::{
    AdminData, AdminDataSource, ConstantError, ConstantResult, ElementId, Literal, Named,
    Parented, RootLookup, SchemaVersion, Tagged, Validatable,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        AdminData, AdminDataSource, ApplicationValue, ArrayValue, BooleanValue, Constant,
        ConstantError, ConstantReference, ConstantResult, IntegerValue, Literal, Named,
        NumericalValue, Parented, RecordValue, SchemaVersion, StringValue, SwAxisCont,
        SwValueCont, Tagged, TextValue, Validatable, Value,
    };
}

//! # arconst Core
//!
//! Core types, traits, and error handling for the arconst constant-value
//! model.
//!
//! - **Types**: `SchemaVersion`, `ElementId`, `AdminData`, `Literal`
//! - **Traits**: `Tagged`, `Named`, `Parented`/`RootLookup`, `Validatable`
//! - **Errors**: `ConstantError` and `ConstantResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ConstantError, ConstantResult};
pub use traits::{Named, Parented, RootLookup, Tagged, Validatable};
pub use types::{
    AdminData, AdminDataSource, ElementId, Literal, SchemaVersion, SpecialData, SpecialDataGroup,
    new_element_id,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

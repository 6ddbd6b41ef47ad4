//! Convenient re-exports for working with modelgen definitions.
//!
//! ## Examples
//!
//! ```
//! use modelgen_define::prelude::*;
//!
//! let group = ModelGroup::common();
//! assert_eq!(group.label, "common");
//! ```

pub use crate::error::SchemaError;
pub use crate::group::ModelGroup;
pub use crate::property::{FormatHint, PrimitiveKind, PropertySchema};
pub use crate::schema::SchemaDocument;

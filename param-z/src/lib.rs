//! # param-z — typed parameter definitions and values
//!
//! `param-z` provides a small, strongly-typed parameter model: a parameter
//! definition (name, namespace, declared type) paired with a runtime value
//! guaranteed to match the declared type.
//!
//! - Construction is strict: [`ParameterValue::new`] rejects any value
//!   whose runtime kind differs from the declared type.
//! - Mutation is lenient: [`ParameterValue::set_value`] coerces arbitrary
//!   input into the declared type via [`convert::coerce`].
//! - Ordering, rendering, and widening/truncating accessors dispatch
//!   exhaustively over the four supported kinds (double, integer, bool,
//!   string).
//!
//! ## Modules
//!
//! - [`types`] — the type enumeration and the runtime value union
//! - [`definition`] — externally-owned parameter identity
//! - [`value`] — the typed value wrapper
//! - [`convert`] — coercion of raw input into a declared type
//! - [`store`] — an in-memory named-parameter collection with overrides
//! - [`yaml`] — YAML text parsing of definitions and override values
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use param_z::prelude::*;
//!
//! let def = Arc::new(ParameterDefinition::new("rate", ParameterType::Double));
//! let mut rate = ParameterValue::new(def, TypedValue::Double(2.0))?;
//!
//! assert_eq!(rate.as_f64()?, 2.0);
//! assert_eq!(rate.as_string(), "2.0");
//!
//! // Lenient mutation: the raw input is coerced to the declared type.
//! rate.set_value("3.5")?;
//! assert_eq!(rate.as_f64()?, 3.5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod convert;
pub mod definition;
pub mod error;
pub mod store;
pub mod types;
pub mod value;
pub mod yaml;

pub use convert::ConvertError;
pub use definition::ParameterDefinition;
pub use error::ParameterError;
pub use store::ParameterStore;
pub use types::{ParameterType, TypedValue};
pub use value::{DOUBLE_TOLERANCE, ParameterValue};

/// Convenience re-exports for common param-z types.
pub mod prelude {
    pub use crate::convert::ConvertError;
    pub use crate::definition::ParameterDefinition;
    pub use crate::error::ParameterError;
    pub use crate::store::ParameterStore;
    pub use crate::types::{ParameterType, TypedValue};
    pub use crate::value::ParameterValue;
}

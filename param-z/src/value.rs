//! The typed parameter value wrapper.
//!
//! A [`ParameterValue`] binds a shared [`ParameterDefinition`] to a runtime
//! [`TypedValue`] whose kind is guaranteed to match the declared type.
//! Construction validates strictly; [`ParameterValue::set_value`] is the
//! single lenient mutation path and goes through [`convert::coerce`].

use std::cmp::Ordering;
use std::sync::Arc;

use crate::convert::{self, ConvertError};
use crate::definition::ParameterDefinition;
use crate::error::ParameterError;
use crate::types::{ParameterType, TypedValue};

/// Two doubles closer than this compare as equal.
pub const DOUBLE_TOLERANCE: f64 = 1e-16;

/// A value bound to a parameter definition.
///
/// Cloning produces a distinct value sharing the same definition; mutating
/// the clone never affects the original.
#[derive(Debug, Clone)]
pub struct ParameterValue {
    definition: Arc<ParameterDefinition>,
    value: TypedValue,
}

impl ParameterValue {
    /// Bind a value to a definition.
    ///
    /// Strict: the value's runtime kind must equal the declared type, else
    /// [`ParameterError::InvalidValueType`]. The instance is never partially
    /// constructed.
    pub fn new(
        definition: Arc<ParameterDefinition>,
        value: TypedValue,
    ) -> Result<Self, ParameterError> {
        if value.parameter_type() != definition.type_ {
            return Err(ParameterError::InvalidValueType {
                parameter: definition.full_name(),
                declared: definition.type_,
                supplied: value.parameter_type(),
            });
        }
        Ok(Self { definition, value })
    }

    /// The associated definition.
    pub fn parameter(&self) -> &ParameterDefinition {
        &self.definition
    }

    /// The shared definition handle, for callers that need to keep it.
    pub fn definition(&self) -> &Arc<ParameterDefinition> {
        &self.definition
    }

    /// The stored value.
    pub fn value(&self) -> &TypedValue {
        &self.value
    }

    /// Replace the stored value, coercing the raw input into the declared
    /// type.
    ///
    /// Unlike construction this path is lenient: a string `"5"` set on an
    /// integer parameter becomes `5`. Coercion failures propagate unchanged
    /// from [`convert::coerce`].
    pub fn set_value(&mut self, raw: impl Into<TypedValue>) -> Result<(), ConvertError> {
        self.value = convert::coerce(raw.into(), self.definition.type_)?;
        Ok(())
    }

    /// Total order between values of the same kind.
    ///
    /// Integers compare numerically, doubles within [`DOUBLE_TOLERANCE`]
    /// compare equal, booleans order false < true, strings compare
    /// lexicographically. Any other pairing is
    /// [`ParameterError::UnsupportedComparison`].
    pub fn compare_to(&self, other: &ParameterValue) -> Result<Ordering, ParameterError> {
        match (&self.value, &other.value) {
            (TypedValue::Integer(a), TypedValue::Integer(b)) => Ok(a.cmp(b)),
            (TypedValue::Double(a), TypedValue::Double(b)) => {
                if (a - b).abs() < DOUBLE_TOLERANCE {
                    Ok(Ordering::Equal)
                } else if a < b {
                    Ok(Ordering::Less)
                } else {
                    Ok(Ordering::Greater)
                }
            }
            (TypedValue::Bool(a), TypedValue::Bool(b)) => Ok(a.cmp(b)),
            (TypedValue::String(a), TypedValue::String(b)) => Ok(a.cmp(b)),
            _ => Err(ParameterError::UnsupportedComparison {
                parameter: self.definition.full_name(),
                declared: self.definition.type_,
                other: other.value.parameter_type(),
            }),
        }
    }

    /// Canonical text rendering of the stored value.
    ///
    /// Whole doubles keep a trailing `.0`, booleans render as
    /// "true"/"false", strings pass through unchanged.
    pub fn as_string(&self) -> String {
        self.value.to_string()
    }

    /// The value as an `f64`. Integers widen; other kinds are
    /// [`ParameterError::UnsupportedConversion`].
    pub fn as_f64(&self) -> Result<f64, ParameterError> {
        match self.value {
            TypedValue::Double(v) => Ok(v),
            TypedValue::Integer(v) => Ok(f64::from(v)),
            _ => Err(self.unsupported_conversion(ParameterType::Double)),
        }
    }

    /// The value as a `bool`. Only boolean values qualify.
    pub fn as_bool(&self) -> Result<bool, ParameterError> {
        match self.value {
            TypedValue::Bool(v) => Ok(v),
            _ => Err(self.unsupported_conversion(ParameterType::Bool)),
        }
    }

    /// The value as an `i32`. Doubles truncate toward zero; other kinds are
    /// [`ParameterError::UnsupportedConversion`].
    pub fn as_i32(&self) -> Result<i32, ParameterError> {
        match self.value {
            TypedValue::Integer(v) => Ok(v),
            TypedValue::Double(v) => Ok(v.trunc() as i32),
            _ => Err(self.unsupported_conversion(ParameterType::Integer)),
        }
    }

    fn unsupported_conversion(&self, requested: ParameterType) -> ParameterError {
        ParameterError::UnsupportedConversion {
            parameter: self.definition.full_name(),
            declared: self.definition.type_,
            requested,
        }
    }
}

/// Structural equality: same definition (by reference identity) and equal
/// value.
impl PartialEq for ParameterValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.definition, &other.definition) && self.value == other.value
    }
}

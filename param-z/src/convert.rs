//! Coercion of arbitrary input into a declared parameter type.
//!
//! This is the lenient counterpart to the strict validation performed at
//! [`ParameterValue::new`](crate::ParameterValue::new): a string `"5"` fed
//! to an integer parameter coerces to `5` instead of being rejected.
//! [`ParameterValue::set_value`](crate::ParameterValue::set_value) is the
//! only caller inside the crate and propagates failures unchanged.

use std::fmt;

use crate::types::{ParameterType, TypedValue};

/// Errors produced while coercing a raw value into a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// String input did not parse as the target type.
    ParseFailed {
        input: String,
        target: ParameterType,
    },
    /// No coercion exists between the two kinds.
    Unsupported {
        from: ParameterType,
        target: ParameterType,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ParseFailed { input, target } => {
                write!(f, "Cannot convert '{}' to {}", input, target)
            }
            ConvertError::Unsupported { from, target } => {
                write!(f, "Conversion from {} to {} is not supported", from, target)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Coerce a raw value into the target declared type.
///
/// Rules per target:
///
/// - `double`: doubles pass through, integers widen, strings parse.
/// - `integer`: integers pass through, doubles truncate toward zero,
///   strings parse.
/// - `bool`: bools pass through, strings parse strictly ("true"/"false").
/// - `string`: any kind renders canonically.
///
/// Booleans never coerce to numbers and numbers never coerce to booleans.
pub fn coerce(raw: TypedValue, target: ParameterType) -> Result<TypedValue, ConvertError> {
    match target {
        ParameterType::Double => match raw {
            TypedValue::Double(_) => Ok(raw),
            TypedValue::Integer(v) => Ok(TypedValue::Double(f64::from(v))),
            TypedValue::String(s) => s
                .trim()
                .parse::<f64>()
                .map(TypedValue::Double)
                .map_err(|_| ConvertError::ParseFailed { input: s, target }),
            TypedValue::Bool(_) => Err(unsupported(&raw, target)),
        },
        ParameterType::Integer => match raw {
            TypedValue::Integer(_) => Ok(raw),
            TypedValue::Double(v) => Ok(TypedValue::Integer(v.trunc() as i32)),
            TypedValue::String(s) => s
                .trim()
                .parse::<i32>()
                .map(TypedValue::Integer)
                .map_err(|_| ConvertError::ParseFailed { input: s, target }),
            TypedValue::Bool(_) => Err(unsupported(&raw, target)),
        },
        ParameterType::Bool => match raw {
            TypedValue::Bool(_) => Ok(raw),
            TypedValue::String(s) => s
                .trim()
                .parse::<bool>()
                .map(TypedValue::Bool)
                .map_err(|_| ConvertError::ParseFailed { input: s, target }),
            TypedValue::Integer(_) | TypedValue::Double(_) => Err(unsupported(&raw, target)),
        },
        ParameterType::String => Ok(TypedValue::String(raw.to_string())),
    }
}

fn unsupported(raw: &TypedValue, target: ParameterType) -> ConvertError {
    ConvertError::Unsupported {
        from: raw.parameter_type(),
        target,
    }
}

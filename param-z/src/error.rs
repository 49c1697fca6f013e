//! Contract-violation errors for the typed value layer.

use std::fmt;

use crate::types::ParameterType;

/// Errors raised by [`ParameterValue`](crate::ParameterValue) operations.
///
/// Every variant is a programming-contract violation: the caller supplied a
/// value of the wrong kind or requested a conversion the stored kind cannot
/// satisfy. None are retryable; each message names the offending parameter
/// and its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// Construction received a value whose runtime kind differs from the
    /// declared type.
    InvalidValueType {
        parameter: String,
        declared: ParameterType,
        supplied: ParameterType,
    },

    /// Ordering requested between values of different kinds.
    UnsupportedComparison {
        parameter: String,
        declared: ParameterType,
        other: ParameterType,
    },

    /// The stored kind cannot be represented as the requested type.
    UnsupportedConversion {
        parameter: String,
        declared: ParameterType,
        requested: ParameterType,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::InvalidValueType {
                parameter,
                declared,
                supplied,
            } => {
                write!(
                    f,
                    "Invalid value type for parameter '{}': declared {}, got {}",
                    parameter, declared, supplied
                )
            }
            ParameterError::UnsupportedComparison {
                parameter,
                declared,
                other,
            } => {
                write!(
                    f,
                    "Comparison is supported only between values of the same kind, \
                     but '{}' is of type {} and the other value is of type {}",
                    parameter, declared, other
                )
            }
            ParameterError::UnsupportedConversion {
                parameter,
                declared,
                requested,
            } => {
                write!(
                    f,
                    "Conversion to {} is not supported for parameter '{}' of type {}",
                    requested, parameter, declared
                )
            }
        }
    }
}

impl std::error::Error for ParameterError {}

//! Parameter type enumeration and the runtime value union.
//!
//! `ParameterType` is the closed set of declared types a parameter
//! definition can carry; `TypedValue` is the matching tagged union of
//! runtime values. Every accessor in the crate dispatches exhaustively over
//! these four kinds, so there is no unreachable fallback branch anywhere.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// The declared type of a parameter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    Serialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    #[strum(serialize = "double")]
    Double,
    #[strum(serialize = "integer")]
    Integer,
    #[strum(serialize = "bool")]
    Bool,
    #[strum(serialize = "string")]
    String,
}

/// Deserializes through the strum string form, so type names parse
/// case-insensitively ("Double" and "double" both work).
impl<'de> Deserialize<'de> for ParameterType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = std::string::String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::unknown_variant(&s, &["double", "integer", "bool", "string"])
        })
    }
}

/// A runtime parameter value, one of the four supported kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Bool(bool),
    Integer(i32),
    Double(f64),
    String(std::string::String),
}

impl TypedValue {
    /// Returns the parameter type of this value.
    pub fn parameter_type(&self) -> ParameterType {
        match self {
            Self::Bool(_) => ParameterType::Bool,
            Self::Integer(_) => ParameterType::Integer,
            Self::Double(_) => ParameterType::Double,
            Self::String(_) => ParameterType::String,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Double(v) => {
                // Whole doubles keep a trailing ".0" so a double parameter
                // never renders like an integer one.
                if v.is_finite() && v.fract() == 0.0 {
                    write!(f, "{:.1}", v)
                } else {
                    write!(f, "{}", v)
                }
            }
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<f64> for TypedValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<i32> for TypedValue {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for TypedValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for TypedValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<std::string::String> for TypedValue {
    fn from(v: std::string::String) -> Self {
        Self::String(v)
    }
}

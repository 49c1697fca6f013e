//! Parameter definitions: identity plus declared type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::ParameterType;

/// Identity and declared type of a parameter.
///
/// Definitions are owned outside the value layer and shared by reference; a
/// [`ParameterValue`](crate::ParameterValue) holds an `Arc` to one and never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(rename = "type")]
    pub type_: ParameterType,
}

impl ParameterDefinition {
    /// Create a definition in the root namespace.
    pub fn new(name: impl Into<String>, type_: ParameterType) -> Self {
        Self {
            name: name.into(),
            namespace: String::new(),
            type_,
        }
    }

    /// Move the definition into a namespace.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Fully-qualified name: `namespace.name`, or the bare name for the
    /// root namespace. Used in every diagnostic message.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

impl fmt::Display for ParameterDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.type_)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let def = ParameterDefinition::new("timeout", ParameterType::Integer);
        assert_eq!(def.full_name(), "timeout");

        let def = def.in_namespace("server.http");
        assert_eq!(def.full_name(), "server.http.timeout");
    }

    #[test]
    fn test_display() {
        let def = ParameterDefinition::new("rate", ParameterType::Double).in_namespace("sensor");
        assert_eq!(def.to_string(), "sensor.rate (double)");
    }
}

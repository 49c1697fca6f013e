//! In-memory parameter collection.
//!
//! `ParameterStore` holds declared parameters keyed by full name. Declaring
//! validates strictly through [`ParameterValue::new`]; updating goes through
//! the lenient [`ParameterValue::set_value`] coercion path. Overrides
//! supplied up front win over declaration defaults.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::definition::ParameterDefinition;
use crate::types::TypedValue;
use crate::value::ParameterValue;

/// Parameter store holding all declared parameters.
#[derive(Debug, Default)]
pub struct ParameterStore {
    parameters: HashMap<String, ParameterValue>,
    /// Raw overrides applied at declaration time.
    overrides: HashMap<String, TypedValue>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<String, TypedValue>) -> Self {
        Self {
            parameters: HashMap::new(),
            overrides,
        }
    }

    /// Declare a parameter with a default value.
    ///
    /// If an override exists for the parameter's full name, the override is
    /// coerced to the declared type and used instead of the default.
    /// Returns the actual initial value.
    pub fn declare(
        &mut self,
        definition: Arc<ParameterDefinition>,
        default: TypedValue,
    ) -> Result<TypedValue, String> {
        let full_name = definition.full_name();
        if self.parameters.contains_key(&full_name) {
            return Err(format!("Parameter '{}' already declared", full_name));
        }

        let mut value = ParameterValue::new(definition, default).map_err(|e| e.to_string())?;

        if let Some(raw) = self.overrides.remove(&full_name) {
            value
                .set_value(raw)
                .map_err(|e| format!("Invalid override for parameter '{}': {}", full_name, e))?;
        }

        debug!(
            "[PARAMS] declared '{}' ({})",
            full_name,
            value.parameter().type_
        );
        let initial = value.value().clone();
        self.parameters.insert(full_name, value);
        Ok(initial)
    }

    /// Get a declared parameter by full name.
    pub fn get(&self, full_name: &str) -> Option<&ParameterValue> {
        self.parameters.get(full_name)
    }

    /// Update a parameter through the lenient coercion path.
    pub fn set(&mut self, full_name: &str, raw: impl Into<TypedValue>) -> Result<(), String> {
        match self.parameters.get_mut(full_name) {
            Some(value) => value.set_value(raw).map_err(|e| {
                warn!("[PARAMS] set '{}' rejected: {}", full_name, e);
                e.to_string()
            }),
            None => Err(format!("Parameter '{}' not declared", full_name)),
        }
    }

    /// Undeclare a parameter, returning its last value.
    pub fn undeclare(&mut self, full_name: &str) -> Result<ParameterValue, String> {
        self.parameters
            .remove(full_name)
            .ok_or_else(|| format!("Parameter '{}' not declared", full_name))
    }

    /// Sorted full names, optionally filtered by a dot-separated prefix.
    pub fn list(&self, prefix: Option<&str>) -> Vec<String> {
        let mut names: Vec<String> = self
            .parameters
            .keys()
            .filter(|name| match prefix {
                None => true,
                Some(p) => {
                    p.is_empty() || name.as_str() == p || name.starts_with(&format!("{}.", p))
                }
            })
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Check if a parameter is declared.
    pub fn has(&self, full_name: &str) -> bool {
        self.parameters.contains_key(full_name)
    }
}

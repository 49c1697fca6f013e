//! YAML parsing for parameter definitions and override values.
//!
//! Text in, values out — callers own any file handling. Supported override
//! format is a flat mapping of parameter full names to scalars:
//!
//! ```yaml
//! sensor.rate: 12.5
//! server.http.timeout: 30
//! verbose: true
//! mode: "fast"
//! ```
//!
//! Definitions are a list of `name`/`namespace`/`type` entries:
//!
//! ```yaml
//! - name: rate
//!   namespace: sensor
//!   type: double
//! - name: verbose
//!   type: bool
//! ```

use std::collections::HashMap;

use serde_yaml::Value;

use crate::definition::ParameterDefinition;
use crate::types::TypedValue;

/// Parse a flat `name: scalar` mapping of parameter overrides.
///
/// Scalar type inference: booleans → bool, integers → integer (must fit
/// `i32`), floats → double, strings → string. Sequences, mappings, and null
/// are rejected.
pub fn parse_overrides(yaml: &str) -> Result<HashMap<String, TypedValue>, String> {
    let doc: Value =
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse YAML: {}", e))?;

    let mapping = doc
        .as_mapping()
        .ok_or_else(|| "YAML root must be a mapping".to_string())?;

    let mut result = HashMap::new();
    for (key, val) in mapping {
        let name = key
            .as_str()
            .ok_or_else(|| "Parameter names must be strings".to_string())?;

        let value = yaml_value_to_typed(val)
            .ok_or_else(|| format!("Unsupported value for parameter '{}'", name))?;
        result.insert(name.to_string(), value);
    }
    Ok(result)
}

/// Parse a list of parameter definitions.
pub fn parse_definitions(yaml: &str) -> Result<Vec<ParameterDefinition>, String> {
    serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse definitions: {}", e))
}

/// Convert a YAML scalar to a TypedValue.
fn yaml_value_to_typed(val: &Value) -> Option<TypedValue> {
    match val {
        Value::Bool(b) => Some(TypedValue::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                // Integers outside i32 range are rejected, not narrowed
                i32::try_from(i).ok().map(TypedValue::Integer)
            } else {
                n.as_f64().map(TypedValue::Double)
            }
        }
        Value::String(s) => Some(TypedValue::String(s.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParameterType;

    #[test]
    fn test_parse_overrides() {
        let yaml = r#"
sensor.rate: 12.5
server.http.timeout: 30
verbose: true
mode: "fast"
"#;
        let overrides = parse_overrides(yaml).unwrap();
        assert_eq!(overrides["sensor.rate"], TypedValue::Double(12.5));
        assert_eq!(overrides["server.http.timeout"], TypedValue::Integer(30));
        assert_eq!(overrides["verbose"], TypedValue::Bool(true));
        assert_eq!(overrides["mode"], TypedValue::String("fast".into()));
    }

    #[test]
    fn test_root_must_be_mapping() {
        assert!(parse_overrides("- 1\n- 2\n").is_err());
    }

    #[test]
    fn test_nested_values_rejected() {
        assert!(parse_overrides("p:\n  nested: 1\n").is_err());
    }

    #[test]
    fn test_integer_out_of_i32_range_rejected() {
        assert!(parse_overrides("p: 4294967296\n").is_err());
    }

    #[test]
    fn test_parse_definitions() {
        let yaml = r#"
- name: rate
  namespace: sensor
  type: double
- name: verbose
  type: bool
"#;
        let defs = parse_definitions(yaml).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].full_name(), "sensor.rate");
        assert_eq!(defs[0].type_, ParameterType::Double);
        assert_eq!(defs[1].full_name(), "verbose");
        assert_eq!(defs[1].type_, ParameterType::Bool);
    }

    #[test]
    fn test_parse_definitions_mixed_case_type() {
        let defs = parse_definitions("- name: p\n  type: Double\n").unwrap();
        assert_eq!(defs[0].type_, ParameterType::Double);

        let defs = parse_definitions("- name: p\n  type: INTEGER\n").unwrap();
        assert_eq!(defs[0].type_, ParameterType::Integer);
    }

    #[test]
    fn test_parse_definitions_bad_type() {
        assert!(parse_definitions("- name: p\n  type: float\n").is_err());
    }
}

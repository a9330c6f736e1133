/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * YAML/JSON document loading for program input.
 * Works only with in-memory strings (no file I/O).
 */

use crate::parser::error::ParseError;
use serde_json::{Map, Number, Value};
use yaml_rust::{Yaml, YamlLoader};

/// Parse YAML or JSON content from a string.
///
/// The format is taken from the file extension when one is given, otherwise
/// JSON is tried first and YAML second.
pub fn parse_yaml_or_json(content: &str, file_path: Option<&str>) -> Result<Value, ParseError> {
    if let Some(path) = file_path {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            return parse_json(content).map_err(ParseError::InvalidJson);
        }
        if path_lower.ends_with(".yaml") || path_lower.ends_with(".yml") {
            return parse_yaml(content).map_err(ParseError::InvalidYaml);
        }
    }

    match parse_json(content) {
        Ok(value) => Ok(value),
        Err(_) => parse_yaml(content).map_err(ParseError::InvalidYaml),
    }
}

fn parse_json(content: &str) -> Result<Value, String> {
    serde_json::from_str(content).map_err(|e| format!("JSON parse error: {e}"))
}

/// Only the first document of a multi-document stream is read.
fn parse_yaml(content: &str) -> Result<Value, String> {
    let docs = YamlLoader::load_from_str(content).map_err(|e| format!("YAML parse error: {e}"))?;
    let first = docs
        .first()
        .ok_or_else(|| "YAML document is empty".to_string())?;
    yaml_to_json(first)
}

fn yaml_to_json(yaml: &Yaml) -> Result<Value, String> {
    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Boolean(b) => Value::Bool(*b),
        Yaml::Integer(i) => Value::Number(Number::from(*i)),
        // Keep the source spelling when the float is not representable (e.g. `.nan`).
        Yaml::Real(s) => s
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map_or_else(|| Value::String(s.clone()), Value::Number),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Array(items) => Value::Array(items.iter().map(yaml_to_json).collect::<Result<_, _>>()?),
        Yaml::Hash(hash) => {
            let mut map = Map::new();
            for (k, v) in hash {
                map.insert(yaml_key(k)?, yaml_to_json(v)?);
            }
            Value::Object(map)
        }
        Yaml::Alias(_) => return Err("YAML aliases are not supported".to_string()),
        Yaml::BadValue => return Err("YAML document contains an invalid value".to_string()),
    })
}

fn yaml_key(yaml: &Yaml) -> Result<String, String> {
    match yaml {
        Yaml::String(s) | Yaml::Real(s) => Ok(s.clone()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Boolean(b) => Ok(b.to_string()),
        other => Err(format!("unsupported YAML mapping key: {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_scalars() {
        let yaml = r#"
name: value
count: -3
ratio: 0.5
enabled: true
nothing: ~
"#;
        let result = parse_yaml(yaml).unwrap();
        assert_eq!(result["name"], "value");
        assert_eq!(result["count"], -3);
        assert_eq!(result["ratio"], 0.5);
        assert_eq!(result["enabled"], true);
        assert!(result["nothing"].is_null());
    }

    #[test]
    fn test_parse_yaml_or_json_detects_json() {
        let result = parse_yaml_or_json(r#"{"test": "value"}"#, Some("program.json")).unwrap();
        assert_eq!(result["test"], "value");
    }

    #[test]
    fn test_json_extension_does_not_fall_back_to_yaml() {
        let result = parse_yaml_or_json("test: value", Some("program.json"));
        assert!(matches!(result, Err(ParseError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_yaml_or_json_falls_back_to_yaml() {
        let result = parse_yaml_or_json("test: value", None).unwrap();
        assert_eq!(result["test"], "value");
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(parse_yaml("key: [unclosed").is_err());
    }

    #[test]
    fn test_empty_yaml_is_an_error() {
        assert!(parse_yaml("").is_err());
    }
}

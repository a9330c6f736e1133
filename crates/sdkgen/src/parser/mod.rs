/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Reads a `Program` out of the JSON/YAML document produced by a source-language parser.
 * This module works only with in-memory data (no file I/O).
 */

pub mod error;
pub mod utils;

use crate::ast::Program;
use crate::parser::error::ParseError;
use crate::parser::utils::parse_yaml_or_json;
use serde_json::Value;

/// Parse a program from a YAML/JSON string.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - The content is invalid YAML/JSON
/// - The content is not an object
/// - The "body" field is missing or not an array
/// - A body entry does not match the program model
pub fn parse_program(content: &str) -> Result<Program, ParseError> {
    parse_program_from_string(content, None)
}

/// Parse a program from a string with optional file path for format detection.
///
/// # Errors
///
/// Same as [`parse_program`].
pub fn parse_program_from_string(
    content: &str,
    file_path: Option<&str>,
) -> Result<Program, ParseError> {
    let parsed = parse_yaml_or_json(content, file_path)?;
    program_from_value(parsed)
}

/// Convert an already parsed document into a `Program`.
///
/// # Errors
///
/// Returns `ParseError::InvalidProgram` when the document does not have the program shape.
pub fn program_from_value(value: Value) -> Result<Program, ParseError> {
    let Some(object) = value.as_object() else {
        return Err(ParseError::InvalidProgram(
            "expected an object at the top level".to_string(),
        ));
    };

    match object.get("body") {
        None => {
            return Err(ParseError::InvalidProgram(
                "missing required field \"body\"".to_string(),
            ))
        }
        Some(body) if !body.is_array() => {
            return Err(ParseError::InvalidProgram(
                "\"body\" must be an array".to_string(),
            ))
        }
        Some(_) => {}
    }

    serde_json::from_value(value).map_err(|e| ParseError::InvalidProgram(e.to_string()))
}

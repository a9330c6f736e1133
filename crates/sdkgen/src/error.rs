/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
use thiserror::Error;

/// Top-level error type for the generator
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Unsupported language: {0}. Supported languages: typescript, python, dart")]
    UnsupportedLanguage(String),
}

/// Errors for reading a `Program` out of JSON/YAML input
///
/// This is a wrapper around the parser module's `ParseError` to keep the
/// parser internals out of the public API.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid program: {0}")]
    InvalidProgram(String),
}

impl From<crate::parser::error::ParseError> for ParseError {
    fn from(err: crate::parser::error::ParseError) -> Self {
        match err {
            crate::parser::error::ParseError::InvalidYaml(msg) => Self::InvalidYaml(msg),
            crate::parser::error::ParseError::InvalidJson(msg) => Self::InvalidJson(msg),
            crate::parser::error::ParseError::InvalidProgram(msg) => Self::InvalidProgram(msg),
        }
    }
}

/// Errors in the generation options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid package name: {0}")]
    InvalidPackageName(String),

    #[error("Invalid package version \"{version}\": {reason}")]
    InvalidPackageVersion { version: String, reason: String },
}

/// Errors raised while turning a view into source text
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to load template {name}: {reason}")]
    Template { name: String, reason: String },

    #[error("Failed to render {file}: {reason}")]
    Render { file: String, reason: String },
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;

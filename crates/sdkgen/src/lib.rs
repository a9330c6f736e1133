//! Callpath SDK Generator Library
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.
//!
//! This library turns the language-neutral model of remote-callable classes into
//! client SDK sources (TypeScript, Python, Dart) whose methods forward every call
//! to a remote transport. It works only with in-memory data (no file I/O).
//!
//! # Example
//!
//! ```rust,no_run
//! use callpath_sdkgen::{generate_sdk, parse_program, GenerationOptions, Language};
//!
//! let program = parse_program(r#"{
//!   "originalLanguage": "typescript",
//!   "sourceType": "module",
//!   "body": [{
//!     "type": "ClassDefinition",
//!     "name": "User",
//!     "methods": [{
//!       "name": "create",
//!       "params": [{"name": "name", "type": {"type": "StringLiteral"}}],
//!       "returnType": {"type": "VoidLiteral"}
//!     }]
//!   }]
//! }"#)?;
//!
//! let output = generate_sdk(GenerationOptions::new(Language::TypeScript), &[program])?;
//! for artifact in &output.artifacts {
//!     println!("{}", artifact.path);
//! }
//! # Ok::<(), callpath_sdkgen::GeneratorError>(())
//! ```

pub mod ast;
pub mod class_view;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod imports;
pub mod language;
pub mod parser;
pub mod render;
pub mod view;

pub use ast::Program;
pub use config::{Channel, ExposureConfig, GenerationOptions, PackageMetadata};
pub use diagnostics::Diagnostic;
pub use error::{GeneratorError, GeneratorResult};
pub use generator::{
    generate_for_languages, generate_sdk, Artifact, GenerationOutput, Generator, SdkGenerator,
};
pub use language::Language;

/// Parse a program from a YAML/JSON string
///
/// This function works on in-memory strings only (no file I/O).
///
/// # Errors
///
/// Returns `ParseError` if the input is invalid YAML/JSON or does not have the program shape.
pub fn parse_program(content: &str) -> GeneratorResult<Program> {
    parser::parse_program(content).map_err(|e| GeneratorError::Parse(e.into()))
}

/// Parse a program, using the file extension of `file_path` to pick the format.
///
/// # Errors
///
/// Same as [`parse_program`].
pub fn parse_program_file(content: &str, file_path: &str) -> GeneratorResult<Program> {
    parser::parse_program_from_string(content, Some(file_path))
        .map_err(|e| GeneratorError::Parse(e.into()))
}

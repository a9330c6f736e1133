/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Target languages: how each one spells types, literals, identifiers and imports.
 */

pub mod dart;
pub mod python;
pub mod reserved;
pub mod typescript;

pub use reserved::ReservedWordGuard;

use crate::ast::{LiteralKind, Node};
use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported SDK target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    TypeScript,
    Python,
    Dart,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::TypeScript, Language::Python, Language::Dart];

    pub fn name(self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Dart => "dart",
        }
    }

    /// The static description of this language used by the generator.
    pub fn target(self) -> &'static dyn TargetLanguage {
        match self {
            Language::TypeScript => &typescript::TypeScript,
            Language::Python => &python::Python,
            Language::Dart => &dart::Dart,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(Language::TypeScript),
            "python" | "py" => Ok(Language::Python),
            "dart" => Ok(Language::Dart),
            _ => Err(GeneratorError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Converts type nodes into target-language type syntax.
///
/// Both functions are total: nodes the language cannot express, and nodes of an
/// unknown kind, come out as the language's most permissive type.
pub trait TypeMapper {
    fn map_type(&self, node: &Node) -> String;

    /// The type as a proxy method's declared return type.
    fn map_return_type(&self, node: &Node) -> String;
}

/// A target language as seen by the view builders and the renderer.
pub trait TargetLanguage: TypeMapper + Send + Sync {
    fn language(&self) -> Language;

    fn reserved_words(&self) -> &ReservedWordGuard;

    /// Source file extension, without the dot.
    fn extension(&self) -> &'static str;

    /// Appended to the lower-cased class name to form the proxy module name.
    fn proxy_suffix(&self) -> &'static str;

    /// Module name of the transport stub.
    fn stub_module(&self) -> &'static str {
        "remote"
    }

    /// Quote and escape a string literal.
    fn quote_string(&self, value: &str) -> String;

    fn boolean_literal(&self, value: bool) -> String;

    fn null_literal(&self) -> String;

    /// Spell the import path of module `to` as written inside module `from`.
    fn import_path(&self, from: &str, to: &str) -> String;

    /// Type of a value that may be absent. Targets with an optional marker on the
    /// name instead (`name?: T`) keep the type as is.
    fn optional_type(&self, ty: String) -> String {
        ty
    }

    /// Type of a parameter that may be absent but must still be passed, because a
    /// required parameter follows it.
    fn nullable_type(&self, ty: String) -> String {
        self.optional_type(ty)
    }

    /// Identifier of an enum case.
    fn enum_case_name(&self, name: &str) -> String {
        self.field_name(name)
    }

    /// Identifier used for a declared struct field.
    fn field_name(&self, name: &str) -> String {
        self.reserved_words().sanitize(name)
    }

    /// Identifier of a generated proxy method.
    fn method_name(&self, name: &str) -> String {
        self.reserved_words().sanitize(name)
    }

    /// Spell a literal default value.
    fn literal(&self, value: &str, kind: LiteralKind) -> String {
        match kind {
            LiteralKind::String => self.quote_string(value),
            LiteralKind::Boolean => self.boolean_literal(value.trim().eq_ignore_ascii_case("true")),
            LiteralKind::Null => self.null_literal(),
            LiteralKind::Number | LiteralKind::Raw => value.to_string(),
        }
    }

    /// Module name (path without extension) of the proxy for `class_name`.
    fn proxy_module(&self, class_name: &str) -> String {
        format!("{}{}", lower_first(class_name), self.proxy_suffix())
    }

    /// Output file path for a module.
    fn file_path(&self, module: &str) -> String {
        format!("{}.{}", module, self.extension())
    }
}

/// `User` -> `user`.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Normalize a project-relative home path into a module path: no leading `./` or `/`.
///
/// `..` segments are dropped so a module never resolves outside the output directory.
pub fn normalize_module_path(path: &str) -> String {
    let trimmed = path.trim().trim_start_matches("./").trim_start_matches('/');
    trimmed
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether a home path tries to climb above the project root.
pub fn escapes_project(path: &str) -> bool {
    path.split(['/', '\\']).any(|segment| segment.trim() == "..")
}

/// Relative location of module `to` from module `from`.
///
/// Returns the number of parent directories to climb and the remaining path.
pub fn relative_module_path(from: &str, to: &str) -> (usize, String) {
    let from_parts: Vec<&str> = from.split('/').filter(|s| !s.is_empty()).collect();
    let to_parts: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();

    let from_dir = &from_parts[..from_parts.len().saturating_sub(1)];
    let to_dir = &to_parts[..to_parts.len().saturating_sub(1)];

    let common = from_dir
        .iter()
        .zip(to_dir.iter())
        .take_while(|(a, b)| a == b)
        .count();

    (from_dir.len() - common, to_parts[common..].join("/"))
}

/// Escape a string for a C-family literal delimited by `quote`.
pub(crate) fn escape_with(value: &str, quote: char, extra: &[char]) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote || extra.contains(&c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

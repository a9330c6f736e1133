/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Dart target.
 */

use crate::ast::Node;
use crate::language::{
    escape_with, relative_module_path, Language, ReservedWordGuard, TargetLanguage, TypeMapper,
};
use once_cell::sync::Lazy;

static RESERVED: Lazy<ReservedWordGuard> = Lazy::new(|| {
    ReservedWordGuard::new(
        &[
            "abstract", "as", "assert", "async", "await", "base", "break", "case", "catch",
            "class", "const", "continue", "covariant", "default", "deferred", "do", "dynamic",
            "else", "enum", "export", "extends", "extension", "external", "factory", "false",
            "final", "finally", "for", "Function", "get", "hide", "if", "implements", "import",
            "in", "interface", "is", "late", "library", "mixin", "new", "null", "on", "operator",
            "part", "required", "rethrow", "return", "sealed", "set", "show", "static", "super",
            "switch", "sync", "this", "throw", "true", "try", "typedef", "var", "void", "when",
            "while", "with", "yield",
        ],
        "_",
    )
});

#[derive(Debug, Clone, Copy)]
pub struct Dart;

impl TypeMapper for Dart {
    fn map_type(&self, node: &Node) -> String {
        match node {
            Node::StringLiteral => "String".to_string(),
            Node::IntegerLiteral => "int".to_string(),
            Node::FloatLiteral | Node::DoubleLiteral => "double".to_string(),
            Node::BooleanLiteral => "bool".to_string(),
            Node::BigIntLiteral => "BigInt".to_string(),
            Node::NullLiteral => "Null".to_string(),
            Node::VoidLiteral => "void".to_string(),
            Node::DateType => "DateTime".to_string(),
            Node::ArrayType { element } => format!("List<{}>", self.map_type(element)),
            Node::MapType { key, value } => {
                format!("Map<{}, {}>", self.map_type(key), self.map_type(value))
            }
            Node::PromiseType { element } => format!("Future<{}>", self.map_type(element)),
            // Dart has no union types; only `T | null` has a precise spelling.
            Node::UnionType { variants } => {
                let others: Vec<&Node> = variants
                    .iter()
                    .filter(|v| !matches!(v, Node::NullLiteral))
                    .collect();
                match others.as_slice() {
                    [single] if others.len() < variants.len() => {
                        let mapped = self.map_type(single);
                        if mapped == "dynamic" {
                            mapped
                        } else {
                            format!("{mapped}?")
                        }
                    }
                    [single] => self.map_type(single),
                    _ => "dynamic".to_string(),
                }
            }
            Node::TypeLiteral(_) => "Map<String, dynamic>".to_string(),
            Node::StructLiteral(_) | Node::TypeAlias(_) | Node::Enum(_) => {
                node.declaration_name().unwrap_or("dynamic").to_string()
            }
            Node::CustomNodeLiteral { raw_value } => raw_value.clone(),
            Node::AnyLiteral | Node::Unknown => "dynamic".to_string(),
        }
    }

    fn map_return_type(&self, node: &Node) -> String {
        match node {
            Node::PromiseType { .. } => self.map_type(node),
            _ => format!("Future<{}>", self.map_type(node)),
        }
    }
}

impl TargetLanguage for Dart {
    fn language(&self) -> Language {
        Language::Dart
    }

    fn reserved_words(&self) -> &ReservedWordGuard {
        &RESERVED
    }

    fn extension(&self) -> &'static str {
        "dart"
    }

    fn proxy_suffix(&self) -> &'static str {
        "_sdk"
    }

    fn optional_type(&self, ty: String) -> String {
        if ty.ends_with('?') || ty == "dynamic" || ty == "void" || ty == "Null" {
            ty
        } else {
            format!("{ty}?")
        }
    }

    /// Enhanced enums already define `values` and `index`; `value` is the generated field.
    fn enum_case_name(&self, name: &str) -> String {
        match name {
            "values" | "index" | "value" => format!("{name}_"),
            _ => self.reserved_words().sanitize(name),
        }
    }

    /// Single quotes; `$` starts an interpolation so it is escaped too.
    fn quote_string(&self, value: &str) -> String {
        escape_with(value, '\'', &['$'])
    }

    fn boolean_literal(&self, value: bool) -> String {
        value.to_string()
    }

    fn null_literal(&self) -> String {
        "null".to_string()
    }

    fn import_path(&self, from: &str, to: &str) -> String {
        let (ups, rest) = relative_module_path(from, to);
        format!("{}{rest}.dart", "../".repeat(ups))
    }
}

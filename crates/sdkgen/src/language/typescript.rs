/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * TypeScript target.
 */

use crate::ast::Node;
use crate::language::{
    escape_with, relative_module_path, Language, ReservedWordGuard, TargetLanguage, TypeMapper,
};
use once_cell::sync::Lazy;

static RESERVED: Lazy<ReservedWordGuard> = Lazy::new(|| {
    ReservedWordGuard::new(
        &[
            "arguments", "as", "async", "await", "break", "case", "catch", "class", "const",
            "continue", "debugger", "default", "delete", "do", "else", "enum", "eval", "export",
            "extends", "false", "finally", "for", "function", "if", "implements", "import", "in",
            "instanceof", "interface", "let", "new", "null", "package", "private", "protected",
            "public", "return", "static", "super", "switch", "this", "throw", "true", "try",
            "typeof", "var", "void", "while", "with", "yield",
        ],
        "_",
    )
});

#[derive(Debug, Clone, Copy)]
pub struct TypeScript;

impl TypeMapper for TypeScript {
    fn map_type(&self, node: &Node) -> String {
        match node {
            Node::StringLiteral => "string".to_string(),
            Node::IntegerLiteral | Node::FloatLiteral | Node::DoubleLiteral => "number".to_string(),
            Node::BooleanLiteral => "boolean".to_string(),
            Node::BigIntLiteral => "bigint".to_string(),
            Node::NullLiteral => "null".to_string(),
            Node::VoidLiteral => "void".to_string(),
            Node::DateType => "Date".to_string(),
            Node::ArrayType { element } => format!("Array<{}>", self.map_type(element)),
            Node::MapType { key, value } => {
                format!("{{[key: {}]: {}}}", self.map_type(key), self.map_type(value))
            }
            Node::PromiseType { element } => format!("Promise<{}>", self.map_type(element)),
            Node::UnionType { variants } if !variants.is_empty() => variants
                .iter()
                .map(|v| self.map_type(v))
                .collect::<Vec<_>>()
                .join(" | "),
            Node::TypeLiteral(literal) => {
                let properties: Vec<String> = literal
                    .properties
                    .iter()
                    .map(|p| {
                        let optional = if p.optional { "?" } else { "" };
                        format!("{}{}: {}", quote_if_needed(&p.name), optional, self.map_type(&p.ty))
                    })
                    .collect();
                format!("{{{}}}", properties.join(", "))
            }
            Node::StructLiteral(_) | Node::TypeAlias(_) | Node::Enum(_) => {
                node.declaration_name().unwrap_or("any").to_string()
            }
            Node::CustomNodeLiteral { raw_value } => raw_value.clone(),
            Node::AnyLiteral | Node::UnionType { .. } | Node::Unknown => "any".to_string(),
        }
    }

    fn map_return_type(&self, node: &Node) -> String {
        match node {
            Node::PromiseType { .. } => self.map_type(node),
            _ => format!("Promise<{}>", self.map_type(node)),
        }
    }
}

impl TargetLanguage for TypeScript {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn reserved_words(&self) -> &ReservedWordGuard {
        &RESERVED
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn proxy_suffix(&self) -> &'static str {
        ".sdk"
    }

    fn nullable_type(&self, ty: String) -> String {
        if ty == "any" || ty == "unknown" || ty.ends_with("| undefined") {
            ty
        } else {
            format!("{ty} | undefined")
        }
    }

    /// Reserved words are valid property keys.
    fn field_name(&self, name: &str) -> String {
        quote_if_needed(name)
    }

    /// Class members may use reserved words.
    fn method_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn quote_string(&self, value: &str) -> String {
        escape_with(value, '"', &[])
    }

    fn boolean_literal(&self, value: bool) -> String {
        value.to_string()
    }

    fn null_literal(&self) -> String {
        "null".to_string()
    }

    fn import_path(&self, from: &str, to: &str) -> String {
        match relative_module_path(from, to) {
            (0, rest) => format!("./{rest}"),
            (ups, rest) => format!("{}{rest}", "../".repeat(ups)),
        }
    }
}

/// Property keys that are not plain identifiers must be quoted.
fn quote_if_needed(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        name.to_string()
    } else {
        escape_with(name, '"', &[])
    }
}

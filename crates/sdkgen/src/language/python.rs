/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Python target. Proxy methods are `async def`, so the coroutine is the
 * asynchronous container and return annotations carry the awaited type.
 */

use crate::ast::Node;
use crate::language::{
    escape_with, relative_module_path, Language, ReservedWordGuard, TargetLanguage, TypeMapper,
};
use once_cell::sync::Lazy;

static RESERVED: Lazy<ReservedWordGuard> = Lazy::new(|| {
    ReservedWordGuard::new(
        &[
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "cls",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
            "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise",
            "return", "self", "try", "while", "with", "yield",
        ],
        "_",
    )
});

#[derive(Debug, Clone, Copy)]
pub struct Python;

impl TypeMapper for Python {
    fn map_type(&self, node: &Node) -> String {
        match node {
            Node::StringLiteral => "str".to_string(),
            Node::IntegerLiteral | Node::BigIntLiteral => "int".to_string(),
            Node::FloatLiteral | Node::DoubleLiteral => "float".to_string(),
            Node::BooleanLiteral => "bool".to_string(),
            Node::NullLiteral | Node::VoidLiteral => "None".to_string(),
            Node::DateType => "datetime".to_string(),
            Node::ArrayType { element } => format!("List[{}]", self.map_type(element)),
            Node::MapType { key, value } => {
                format!("Dict[{}, {}]", self.map_type(key), self.map_type(value))
            }
            Node::PromiseType { element } => format!("Awaitable[{}]", self.map_type(element)),
            Node::UnionType { variants } if !variants.is_empty() => {
                let (nulls, others): (Vec<&Node>, Vec<&Node>) = variants
                    .iter()
                    .partition(|v| matches!(v, Node::NullLiteral | Node::VoidLiteral));
                let mapped: Vec<String> = others.iter().map(|v| self.map_type(v)).collect();
                match (nulls.is_empty(), mapped.as_slice()) {
                    (_, []) => "None".to_string(),
                    (true, [single]) => single.clone(),
                    (false, [single]) => format!("Optional[{single}]"),
                    (true, _) => format!("Union[{}]", mapped.join(", ")),
                    (false, _) => format!("Optional[Union[{}]]", mapped.join(", ")),
                }
            }
            Node::TypeLiteral(_) => "Dict[str, Any]".to_string(),
            Node::StructLiteral(_) | Node::TypeAlias(_) | Node::Enum(_) => {
                node.declaration_name().unwrap_or("Any").to_string()
            }
            Node::CustomNodeLiteral { raw_value } => raw_value.clone(),
            Node::AnyLiteral | Node::UnionType { .. } | Node::Unknown => "Any".to_string(),
        }
    }

    fn map_return_type(&self, node: &Node) -> String {
        match node {
            Node::PromiseType { element } => self.map_type(element),
            _ => self.map_type(node),
        }
    }
}

impl TargetLanguage for Python {
    fn language(&self) -> Language {
        Language::Python
    }

    fn reserved_words(&self) -> &ReservedWordGuard {
        &RESERVED
    }

    fn extension(&self) -> &'static str {
        "py"
    }

    fn proxy_suffix(&self) -> &'static str {
        "_sdk"
    }

    fn optional_type(&self, ty: String) -> String {
        if ty.starts_with("Optional[") || ty == "Any" || ty == "None" {
            ty
        } else {
            format!("Optional[{ty}]")
        }
    }

    fn quote_string(&self, value: &str) -> String {
        escape_with(value, '"', &[])
    }

    fn boolean_literal(&self, value: bool) -> String {
        if value { "True" } else { "False" }.to_string()
    }

    fn null_literal(&self) -> String {
        "None".to_string()
    }

    /// Package-relative import: `from .models.user import ...`.
    fn import_path(&self, from: &str, to: &str) -> String {
        let (ups, rest) = relative_module_path(from, to);
        format!("{}{}", ".".repeat(ups + 1), rest.replace('/', "."))
    }
}

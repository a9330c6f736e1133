/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Traversal over type nodes.
 */

use crate::ast::Node;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"[A-Za-z_$][A-Za-z0-9_$]*").unwrap()
});

/// Identifier tokens of an opaque type spelling, e.g. `Page<User>` -> `Page`, `User`.
pub fn identifier_tokens(raw: &str) -> impl Iterator<Item = &str> {
    IDENTIFIER.find_iter(raw).map(|m| m.as_str())
}

/// Names of the declarations a type node refers to, in first-occurrence order.
///
/// Declaration nodes contribute their own name and are not descended into: their
/// inner types belong to the declaration, not to the referencing position.
pub fn referenced_names(node: &Node) -> Vec<String> {
    let mut names = Vec::new();
    collect(node, &mut names);
    names
}

/// Whether an unknown node kind occurs anywhere inside `node`.
pub fn contains_unknown(node: &Node) -> bool {
    match node {
        Node::Unknown => true,
        Node::ArrayType { element } | Node::PromiseType { element } => contains_unknown(element),
        Node::MapType { key, value } => contains_unknown(key) || contains_unknown(value),
        Node::UnionType { variants } => variants.iter().any(contains_unknown),
        Node::TypeLiteral(literal) => literal.properties.iter().any(|p| contains_unknown(&p.ty)),
        _ => false,
    }
}

/// Copy of `node` with every declaration reference in `renames` spelled by its new name.
pub fn rename_references(node: &Node, renames: &BTreeMap<String, String>) -> Node {
    if renames.is_empty() {
        return node.clone();
    }
    let rename = |name: &mut String| {
        if let Some(renamed) = renames.get(name.as_str()) {
            *name = renamed.clone();
        }
    };
    match node {
        Node::StructLiteral(s) => {
            let mut s = s.clone();
            rename(&mut s.name);
            Node::StructLiteral(s)
        }
        Node::TypeAlias(a) => {
            let mut a = a.clone();
            rename(&mut a.name);
            Node::TypeAlias(a)
        }
        Node::Enum(e) => {
            let mut e = e.clone();
            rename(&mut e.name);
            Node::Enum(e)
        }
        Node::CustomNodeLiteral { raw_value } => Node::custom(
            IDENTIFIER
                .replace_all(raw_value, |caps: &Captures| {
                    renames
                        .get(&caps[0])
                        .cloned()
                        .unwrap_or_else(|| caps[0].to_string())
                })
                .into_owned(),
        ),
        Node::ArrayType { element } => Node::array_of(rename_references(element, renames)),
        Node::PromiseType { element } => Node::promise_of(rename_references(element, renames)),
        Node::MapType { key, value } => Node::map_of(
            rename_references(key, renames),
            rename_references(value, renames),
        ),
        Node::UnionType { variants } => Node::UnionType {
            variants: variants.iter().map(|v| rename_references(v, renames)).collect(),
        },
        Node::TypeLiteral(literal) => {
            let mut literal = literal.clone();
            for property in &mut literal.properties {
                property.ty = rename_references(&property.ty, renames);
            }
            Node::TypeLiteral(literal)
        }
        other => other.clone(),
    }
}

fn collect(node: &Node, names: &mut Vec<String>) {
    match node {
        Node::StructLiteral(_) | Node::TypeAlias(_) | Node::Enum(_) => {
            if let Some(name) = node.declaration_name() {
                push_unique(names, name);
            }
        }
        Node::CustomNodeLiteral { raw_value } => {
            for token in identifier_tokens(raw_value) {
                push_unique(names, token);
            }
        }
        Node::ArrayType { element } | Node::PromiseType { element } => collect(element, names),
        Node::MapType { key, value } => {
            collect(key, names);
            collect(value, names);
        }
        Node::UnionType { variants } => {
            for variant in variants {
                collect(variant, names);
            }
        }
        Node::TypeLiteral(literal) => {
            for property in &literal.properties {
                collect(&property.ty, names);
            }
        }
        Node::StringLiteral
        | Node::IntegerLiteral
        | Node::FloatLiteral
        | Node::DoubleLiteral
        | Node::BooleanLiteral
        | Node::BigIntLiteral
        | Node::NullLiteral
        | Node::VoidLiteral
        | Node::AnyLiteral
        | Node::DateType
        | Node::Unknown => {}
    }
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

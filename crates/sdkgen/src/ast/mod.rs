/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Language-neutral model of a remote-callable class and the types it references.
 * Produced by the per-source-language parsers and consumed read-only by the generator.
 */

mod visit;

pub use visit::{contains_unknown, identifier_tokens, referenced_names, rename_references};

use serde::{Deserialize, Deserializer, Serialize};

/// A type node.
///
/// Declaration variants (`StructLiteral`, `TypeAlias`, `Enum`) appearing in a type
/// position are references to the declaration of the same name in `Program::body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,
    DoubleLiteral,
    BooleanLiteral,
    BigIntLiteral,
    NullLiteral,
    VoidLiteral,
    AnyLiteral,
    DateType,
    ArrayType {
        element: Box<Node>,
    },
    MapType {
        key: Box<Node>,
        value: Box<Node>,
    },
    PromiseType {
        element: Box<Node>,
    },
    UnionType {
        variants: Vec<Node>,
    },
    TypeLiteral(TypeLiteral),
    StructLiteral(StructLiteral),
    TypeAlias(TypeAlias),
    Enum(EnumDeclaration),
    #[serde(rename_all = "camelCase")]
    CustomNodeLiteral {
        raw_value: String,
    },
    /// Any node kind this generator does not know about.
    #[serde(other)]
    Unknown,
}

impl Node {
    /// Wrap a node into an array node.
    pub fn array_of(element: Node) -> Self {
        Node::ArrayType {
            element: Box::new(element),
        }
    }

    /// Wrap a node into a promise node.
    pub fn promise_of(element: Node) -> Self {
        Node::PromiseType {
            element: Box::new(element),
        }
    }

    /// Build a map node.
    pub fn map_of(key: Node, value: Node) -> Self {
        Node::MapType {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Build an opaque pass-through reference.
    pub fn custom(raw_value: impl Into<String>) -> Self {
        Node::CustomNodeLiteral {
            raw_value: raw_value.into(),
        }
    }

    /// Name of the declaration this node references directly, if it is a declaration node.
    pub fn declaration_name(&self) -> Option<&str> {
        match self {
            Node::StructLiteral(s) => Some(&s.name),
            Node::TypeAlias(a) => Some(&a.name),
            Node::Enum(e) => Some(&e.name),
            _ => None,
        }
    }
}

/// Inline object type: `{ a: string; b?: number }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeLiteral {
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(rename = "type")]
    pub ty: Node,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructLiteral {
    pub name: String,
    #[serde(default)]
    pub type_literal: TypeLiteral,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAlias {
    pub name: String,
    pub alias_type: Box<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDeclaration {
    pub name: String,
    #[serde(default)]
    pub cases: Vec<EnumCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumCase {
    pub name: String,
    #[serde(deserialize_with = "literal_text")]
    pub value: String,
    #[serde(default)]
    pub value_kind: LiteralKind,
}

/// How a literal's text should be spelled in the target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    #[default]
    String,
    Number,
    Boolean,
    Null,
    /// Emitted verbatim.
    Raw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultValue {
    #[serde(deserialize_with = "literal_text")]
    pub value: String,
    #[serde(default)]
    pub value_kind: LiteralKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Node,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    #[default]
    Method,
    Constructor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDefinition {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParameterDefinition>,
    #[serde(default)]
    pub kind: MethodKind,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_string: Option<String>,
    pub return_type: Node,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_string: Option<String>,
}

/// A top-level entry of `Program::body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BodyItem {
    ClassDefinition(ClassDefinition),
    StructLiteral(StructLiteral),
    TypeAlias(TypeAlias),
    Enum(EnumDeclaration),
    #[serde(other)]
    Unknown,
}

/// A type declaration borrowed out of a program body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Declaration<'a> {
    Struct(&'a StructLiteral),
    Alias(&'a TypeAlias),
    Enum(&'a EnumDeclaration),
}

impl<'a> Declaration<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Declaration::Struct(s) => &s.name,
            Declaration::Alias(a) => &a.name,
            Declaration::Enum(e) => &e.name,
        }
    }

    /// File the declaration belongs to; `None` means local to the consuming class.
    pub fn home_path(&self) -> Option<&'a str> {
        match self {
            Declaration::Struct(s) => s.home_path.as_deref(),
            Declaration::Alias(a) => a.home_path.as_deref(),
            Declaration::Enum(e) => e.home_path.as_deref(),
        }
    }

    /// Type nodes used inside the declaration's own definition.
    pub fn inner_types(&self) -> Vec<&'a Node> {
        match self {
            Declaration::Struct(s) => s.type_literal.properties.iter().map(|p| &p.ty).collect(),
            Declaration::Alias(a) => vec![a.alias_type.as_ref()],
            Declaration::Enum(_) => Vec::new(),
        }
    }
}

/// Everything reachable from one source class file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub body: Vec<BodyItem>,
}

impl Program {
    /// All class definitions in body order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.body.iter().filter_map(|item| match item {
            BodyItem::ClassDefinition(class) => Some(class),
            _ => None,
        })
    }

    /// All type declarations in body order.
    pub fn declarations(&self) -> impl Iterator<Item = Declaration<'_>> {
        self.body.iter().filter_map(|item| match item {
            BodyItem::StructLiteral(s) => Some(Declaration::Struct(s)),
            BodyItem::TypeAlias(a) => Some(Declaration::Alias(a)),
            BodyItem::Enum(e) => Some(Declaration::Enum(e)),
            BodyItem::ClassDefinition(_) | BodyItem::Unknown => None,
        })
    }
}

/// Accept a string, number, boolean or null and keep its literal text.
fn literal_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => "null".to_string(),
        other => other.to_string(),
    })
}

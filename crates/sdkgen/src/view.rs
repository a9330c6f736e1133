/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Render views handed to the templates. Built fresh per generation call.
 * Items of comma-joined lists carry `last` so templates can drop the trailing separator.
 */

use crate::ast::{rename_references, Declaration, EnumDeclaration, LiteralKind, Node};
use crate::config::PackageMetadata;
use crate::language::{lower_first, TargetLanguage};
use serde::Serialize;
use std::collections::BTreeMap;

/// Declaration names respelled inside one file, original -> local name.
pub type Renames = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageView {
    pub name: String,
    pub version: String,
}

impl From<&PackageMetadata> for PackageView {
    fn from(package: &PackageMetadata) -> Self {
        Self {
            name: package.name.clone(),
            version: package.version.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolView {
    pub name: String,
    pub last: bool,
}

/// A symbol imported under a different local name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliasView {
    /// Name exported by the provider.
    pub name: String,
    /// Name used inside the consumer.
    pub alias: String,
    /// Library prefix for targets that alias through a prefixed import.
    pub prefix: String,
    pub last: bool,
}

/// One import statement: a provider module and the symbols taken from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportView {
    /// Provider path as spelled in the consumer.
    pub path: String,
    pub symbols: Vec<SymbolView>,
    pub aliased: Vec<AliasView>,
}

impl ImportView {
    pub fn new(path: String, names: impl IntoIterator<Item = String>) -> Self {
        Self::with_aliases(path, names.into_iter().map(|name| (name.clone(), name)))
    }

    /// Import of `(provider name, local name)` pairs; pairs that differ become aliases.
    pub fn with_aliases(path: String, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let (plain, aliased): (Vec<_>, Vec<_>) = pairs.into_iter().partition(|(name, local)| name == local);
        Self {
            path,
            symbols: mark_last(plain.into_iter().map(|(name, _)| name).collect(), |name, last| {
                SymbolView { name, last }
            }),
            aliased: mark_last(aliased, |(name, alias), last| AliasView {
                prefix: format!("_{}", lower_first(&alias)),
                name,
                alias,
                last,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub last: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseView {
    pub name: String,
    pub value: String,
    pub last: bool,
}

/// A rendered type declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeclarationView {
    Struct {
        name: String,
        fields: Vec<FieldView>,
    },
    Alias {
        name: String,
        target: String,
    },
    Enum {
        name: String,
        /// Target spelling of the case value type.
        value_type: String,
        string_valued: bool,
        cases: Vec<CaseView>,
    },
}

impl DeclarationView {
    /// View of `declaration` as written in a file whose names are respelled by `renames`.
    pub fn build(target: &dyn TargetLanguage, declaration: Declaration<'_>, renames: &Renames) -> Self {
        let map = |node: &Node| target.map_type(&rename_references(node, renames));
        let name = renames
            .get(declaration.name())
            .cloned()
            .unwrap_or_else(|| declaration.name().to_string());
        match declaration {
            Declaration::Struct(s) => {
                let fields = s
                    .type_literal
                    .properties
                    .iter()
                    .map(|p| {
                        let ty = map(&p.ty);
                        let ty = if p.optional { target.optional_type(ty) } else { ty };
                        (target.field_name(&p.name), ty, p.optional)
                    })
                    .collect();
                DeclarationView::Struct {
                    name,
                    fields: mark_last(fields, |(name, ty, optional), last| FieldView {
                        name,
                        ty,
                        optional,
                        last,
                    }),
                }
            }
            Declaration::Alias(a) => DeclarationView::Alias {
                name,
                target: map(&a.alias_type),
            },
            Declaration::Enum(e) => enum_view(target, name, e),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DeclarationView::Struct { name, .. }
            | DeclarationView::Alias { name, .. }
            | DeclarationView::Enum { name, .. } => name,
        }
    }
}

fn enum_view(target: &dyn TargetLanguage, name: String, declaration: &EnumDeclaration) -> DeclarationView {
    let numeric = !declaration.cases.is_empty()
        && declaration
            .cases
            .iter()
            .all(|c| c.value_kind == LiteralKind::Number);
    let value_node = if !numeric {
        Node::StringLiteral
    } else if declaration.cases.iter().all(|c| c.value.parse::<i64>().is_ok()) {
        Node::IntegerLiteral
    } else {
        Node::DoubleLiteral
    };

    let cases = declaration
        .cases
        .iter()
        .map(|c| {
            let kind = if numeric { LiteralKind::Number } else { LiteralKind::String };
            (target.enum_case_name(&c.name), target.literal(&c.value, kind))
        })
        .collect();

    DeclarationView::Enum {
        name,
        value_type: target.map_type(&value_node),
        string_valued: !numeric,
        cases: mark_last(cases, |(name, value), last| CaseView { name, value, last }),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamView {
    /// Reserved-word safe name, used both in the signature and in the call.
    pub name: String,
    pub ty: String,
    pub optional: bool,
    /// Rendered default value literal.
    pub default: Option<String>,
    /// First parameter of the trailing optional group.
    pub first_optional: bool,
    pub last: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgView {
    pub name: String,
    pub last: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodView {
    pub name: String,
    pub doc: Vec<String>,
    pub params: Vec<ParamView>,
    pub has_optional: bool,
    pub return_type: String,
    pub returns_value: bool,
    /// `"Class.method"` as a target string literal.
    pub qualified_name: String,
    pub args: Vec<ArgView>,
}

/// View of one proxy file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassView {
    pub name: String,
    pub doc: Vec<String>,
    pub module: String,
    pub package: PackageView,
    /// Import path of the transport stub.
    pub stub_import: String,
    pub imports: Vec<ImportView>,
    /// `imports` minus the re-exported symbols; only needed by type annotations.
    pub annotation_imports: Vec<ImportView>,
    pub reexports: Vec<ImportView>,
    pub declarations: Vec<DeclarationView>,
    pub methods: Vec<MethodView>,
}

/// View of one type-declaration file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeFileView {
    pub module: String,
    pub package: PackageView,
    pub imports: Vec<ImportView>,
    pub declarations: Vec<DeclarationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StubView {
    pub package: PackageView,
    pub endpoint_marker: &'static str,
}

/// Split a doc string into trimmed lines, dropping leading/trailing blanks.
pub fn doc_lines(doc: Option<&str>) -> Vec<String> {
    let lines: Vec<&str> = doc.map(|d| d.lines().map(str::trim).collect()).unwrap_or_default();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].iter().map(|l| (*l).to_string()).collect()
}

/// Map each item together with whether it is the final one.
pub fn mark_last<T, V>(items: Vec<T>, mut f: impl FnMut(T, bool) -> V) -> Vec<V> {
    let count = items.len();
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| f(item, index + 1 == count))
        .collect()
}

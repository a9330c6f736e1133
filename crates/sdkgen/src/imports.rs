/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Cross-file type resolution for one generation call and one target language.
 *
 * Every declaration reachable from a class's method signatures is assigned to
 * its home module (or to the class's proxy module when it has none). Each
 * reference that crosses a module boundary becomes an import edge
 * consumer -> provider -> symbol. Edges and declarations are deduplicated, so
 * cyclic references between files terminate and nothing is emitted twice.
 */

use crate::ast::{contains_unknown, referenced_names, Declaration, MethodDefinition, Program};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::language::{escapes_project, normalize_module_path, TargetLanguage};
use crate::view::{DeclarationView, ImportView, PackageView, Renames, TypeFileView};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

type ProviderMap = BTreeMap<String, BTreeSet<String>>;

/// Names a proxy file always defines besides its declarations: the transport stub.
const STUB_SYMBOL: &str = "Remote";

/// What the proxy file of one class needs from the resolver.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassImports {
    pub imports: Vec<ImportView>,
    /// `imports` without the re-exported symbols.
    pub annotation_imports: Vec<ImportView>,
    /// External types used directly by the class's signatures.
    pub reexports: Vec<ImportView>,
    /// Reachable declarations without a home path, rendered in the proxy file.
    pub local_declarations: Vec<DeclarationView>,
    /// Declarations spelled under another name in the proxy file, because their
    /// own name is taken by the proxy class or the stub.
    pub renames: Renames,
}

/// Import map and type-file contents for one `(generation call, language)`.
///
/// Not shared across languages or calls; create a fresh one per run.
pub struct ImportGraphResolver<'t> {
    target: &'t dyn TargetLanguage,
    edges: BTreeMap<String, ProviderMap>,
    type_files: BTreeMap<String, Vec<DeclarationView>>,
    /// Per proxy module, the names respelled inside it.
    renames: BTreeMap<String, Renames>,
}

impl<'t> ImportGraphResolver<'t> {
    pub fn new(target: &'t dyn TargetLanguage) -> Self {
        Self {
            target,
            edges: BTreeMap::new(),
            type_files: BTreeMap::new(),
            renames: BTreeMap::new(),
        }
    }

    /// Resolve the declarations reachable from `methods` of class `class_name`
    /// whose proxy lives in `class_module`.
    pub fn resolve_class(
        &mut self,
        program: &Program,
        class_name: &str,
        class_module: &str,
        methods: &[&MethodDefinition],
        diagnostics: &mut Diagnostics,
    ) -> ClassImports {
        let index = declaration_index(program, diagnostics);
        let direct = direct_references(methods, &index);
        let reachable = reachable_declarations(&direct, &index);

        let mut locals = Vec::new();
        for declaration in &reachable {
            let home = home_module(*declaration, class_module);
            if home == class_module {
                locals.push(*declaration);
            } else {
                let file = self.type_files.entry(home.clone()).or_default();
                // First input wins; a later declaration of the same name adds nothing.
                if file.iter().any(|existing| existing.name() == declaration.name()) {
                    continue;
                }
                file.push(DeclarationView::build(self.target, *declaration, &Renames::new()));
            }
            note_unknown(*declaration, diagnostics);
            note_unsafe_home(*declaration, diagnostics);
            for reference in nested_references(*declaration, &index) {
                let provider = home_module(reference, class_module);
                if provider != home {
                    self.add_edge(&home, &provider, reference.name());
                }
            }
        }

        let mut reexported = ProviderMap::new();
        for declaration in &direct {
            let provider = home_module(*declaration, class_module);
            if provider != class_module {
                self.add_edge(class_module, &provider, declaration.name());
                reexported
                    .entry(provider)
                    .or_default()
                    .insert(declaration.name().to_string());
            }
        }

        let renames = self.proxy_renames(class_name, class_module, &locals);
        self.renames.insert(class_module.to_string(), renames.clone());
        let local_declarations = locals
            .iter()
            .map(|declaration| DeclarationView::build(self.target, *declaration, &renames))
            .collect::<Vec<_>>();

        let annotation_only: ProviderMap = self
            .edges
            .get(class_module)
            .into_iter()
            .flatten()
            .filter_map(|(provider, symbols)| {
                let kept: BTreeSet<String> = match reexported.get(provider) {
                    Some(exported) => symbols.difference(exported).cloned().collect(),
                    None => symbols.clone(),
                };
                (!kept.is_empty()).then(|| (provider.clone(), kept))
            })
            .collect();

        tracing::debug!(
            module = class_module,
            reachable = reachable.len(),
            local = local_declarations.len(),
            renamed = renames.len(),
            "resolved class imports"
        );

        ClassImports {
            imports: self.imports_for(class_module),
            annotation_imports: self.import_views(class_module, &annotation_only),
            reexports: self.import_views(class_module, &reexported),
            local_declarations,
            renames,
        }
    }

    /// Ordered import list of `consumer`: grouped by provider, ordered by the
    /// resolved relative path, symbols ordered by name.
    pub fn imports_for(&self, consumer: &str) -> Vec<ImportView> {
        self.edges
            .get(consumer)
            .map(|providers| self.import_views(consumer, providers))
            .unwrap_or_default()
    }

    /// Views of every non-local home module seen during this run, ordered by module path.
    pub fn into_type_files(self, package: &PackageView) -> Vec<TypeFileView> {
        let imports: Vec<(String, Vec<ImportView>)> = self
            .type_files
            .keys()
            .map(|module| (module.clone(), self.imports_for(module)))
            .collect();

        self.type_files
            .into_iter()
            .zip(imports)
            .map(|((module, declarations), (_, imports))| TypeFileView {
                module,
                package: package.clone(),
                imports,
                declarations,
            })
            .collect()
    }

    /// Aliases for every name in the proxy file's scope that the proxy class or
    /// the stub import already takes: `User` -> `UserModel`.
    fn proxy_renames(&self, class_name: &str, class_module: &str, locals: &[Declaration<'_>]) -> Renames {
        let mut scope: BTreeSet<&str> = locals.iter().map(|d| d.name()).collect();
        if let Some(providers) = self.edges.get(class_module) {
            scope.extend(providers.values().flatten().map(String::as_str));
        }

        let mut taken: HashSet<String> = scope.iter().map(|name| (*name).to_string()).collect();
        taken.insert(class_name.to_string());
        taken.insert(STUB_SYMBOL.to_string());

        let mut renames = Renames::new();
        for name in scope {
            if name != class_name && name != STUB_SYMBOL {
                continue;
            }
            let base = format!("{name}Model");
            let mut alias = base.clone();
            let mut n = 2;
            while taken.contains(&alias) {
                alias = format!("{base}{n}");
                n += 1;
            }
            taken.insert(alias.clone());
            renames.insert(name.to_string(), alias);
        }
        renames
    }

    fn add_edge(&mut self, consumer: &str, provider: &str, symbol: &str) {
        self.edges
            .entry(consumer.to_string())
            .or_default()
            .entry(provider.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// A symbol is exported by its provider under the provider's spelling and
    /// used under the consumer's.
    fn import_views(&self, consumer: &str, providers: &ProviderMap) -> Vec<ImportView> {
        let spelled = |module: &str, symbol: &str| {
            self.renames
                .get(module)
                .and_then(|renames| renames.get(symbol))
                .cloned()
                .unwrap_or_else(|| symbol.to_string())
        };
        let mut views: Vec<ImportView> = providers
            .iter()
            .map(|(provider, symbols)| {
                ImportView::with_aliases(
                    self.target.import_path(consumer, provider),
                    symbols
                        .iter()
                        .map(|symbol| (spelled(provider, symbol), spelled(consumer, symbol))),
                )
            })
            .collect();
        views.sort_by(|a, b| a.path.cmp(&b.path));
        views
    }
}

/// Declarations of a program by name; the first of duplicate names wins.
fn declaration_index<'a>(
    program: &'a Program,
    diagnostics: &mut Diagnostics,
) -> HashMap<&'a str, Declaration<'a>> {
    let mut index = HashMap::new();
    let mut reported = HashSet::new();
    for declaration in program.declarations() {
        let name = declaration.name();
        if index.contains_key(name) {
            if reported.insert(name) {
                diagnostics.push(Diagnostic::DuplicateDeclaration {
                    name: name.to_string(),
                });
            }
        } else {
            index.insert(name, declaration);
        }
    }
    index
}

fn resolve_names<'a>(
    names: impl IntoIterator<Item = String>,
    index: &HashMap<&'a str, Declaration<'a>>,
    out: &mut Vec<Declaration<'a>>,
) {
    for name in names {
        if let Some(declaration) = index.get(name.as_str()) {
            if !out.iter().any(|d| d.name() == declaration.name()) {
                out.push(*declaration);
            }
        }
    }
}

/// Declarations named directly by method parameters and return types.
fn direct_references<'a>(
    methods: &[&MethodDefinition],
    index: &HashMap<&'a str, Declaration<'a>>,
) -> Vec<Declaration<'a>> {
    let mut out = Vec::new();
    for method in methods {
        for param in &method.params {
            resolve_names(referenced_names(&param.ty), index, &mut out);
        }
        resolve_names(referenced_names(&method.return_type), index, &mut out);
    }
    out
}

/// Declarations named inside another declaration's definition.
fn nested_references<'a>(
    declaration: Declaration<'a>,
    index: &HashMap<&'a str, Declaration<'a>>,
) -> Vec<Declaration<'a>> {
    let mut out = Vec::new();
    for ty in declaration.inner_types() {
        resolve_names(referenced_names(ty), index, &mut out);
    }
    out
}

/// Transitive closure of `direct`, in discovery order.
fn reachable_declarations<'a>(
    direct: &[Declaration<'a>],
    index: &HashMap<&'a str, Declaration<'a>>,
) -> Vec<Declaration<'a>> {
    let mut order: Vec<Declaration<'a>> = direct.to_vec();
    let mut seen: HashSet<&str> = direct.iter().map(|d| d.name()).collect();
    let mut cursor = 0;
    while cursor < order.len() {
        for reference in nested_references(order[cursor], index) {
            if seen.insert(reference.name()) {
                order.push(reference);
            }
        }
        cursor += 1;
    }
    order
}

fn home_module(declaration: Declaration<'_>, class_module: &str) -> String {
    declaration
        .home_path()
        .map(normalize_module_path)
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| class_module.to_string())
}

fn note_unsafe_home(declaration: Declaration<'_>, diagnostics: &mut Diagnostics) {
    if let Some(home_path) = declaration.home_path().filter(|path| escapes_project(path)) {
        diagnostics.push(Diagnostic::UnsafeHomePath {
            name: declaration.name().to_string(),
            home_path: home_path.to_string(),
        });
    }
}

fn note_unknown(declaration: Declaration<'_>, diagnostics: &mut Diagnostics) {
    if declaration.inner_types().into_iter().any(contains_unknown) {
        diagnostics.push(Diagnostic::UnknownNode {
            context: declaration.name().to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use serde_json::{json, Value};

    fn program(body: Value) -> Program {
        serde_json::from_value(json!({
            "originalLanguage": "typescript",
            "sourceType": "module",
            "body": body
        }))
        .unwrap()
    }

    fn methods(program: &Program) -> Vec<&MethodDefinition> {
        program.classes().next().unwrap().methods.iter().collect()
    }

    fn class_name(program: &Program) -> &str {
        &program.classes().next().unwrap().name
    }

    fn names(view: &ImportView) -> Vec<&str> {
        view.symbols.iter().map(|s| s.name.as_str()).collect()
    }

    fn user_program() -> Program {
        program(json!([
            {"type": "ClassDefinition", "name": "Accounts", "methods": [{
                "name": "create",
                "params": [
                    {"name": "user", "type": {"type": "StructLiteral", "name": "User"}},
                    {"name": "address", "type": {"type": "StructLiteral", "name": "Address"}}
                ],
                "returnType": {"type": "VoidLiteral"}
            }]},
            {"type": "StructLiteral", "name": "User", "homePath": "models/user", "typeLiteral": {
                "properties": [
                    {"name": "name", "type": {"type": "StringLiteral"}},
                    {"name": "role", "type": {"type": "Enum", "name": "Role"}},
                    {"name": "address", "optional": true, "type": {"type": "StructLiteral", "name": "Address"}}
                ]
            }},
            {"type": "Enum", "name": "Role", "homePath": "models/role", "cases": [
                {"name": "Admin", "value": "admin"}
            ]},
            {"type": "StructLiteral", "name": "Address", "typeLiteral": {
                "properties": [{"name": "city", "type": {"type": "StringLiteral"}}]
            }}
        ]))
    }

    #[test]
    fn test_cross_file_imports_and_reexports() {
        let program = user_program();
        let mut resolver = ImportGraphResolver::new(Language::TypeScript.target());
        let mut diagnostics = Diagnostics::new();

        let resolved = resolver.resolve_class(&program, class_name(&program), "user.sdk", &methods(&program), &mut diagnostics);

        assert!(diagnostics.is_empty());
        assert_eq!(resolved.imports.len(), 1);
        assert_eq!(resolved.imports[0].path, "./models/user");
        assert_eq!(names(&resolved.imports[0]), vec!["User"]);
        assert_eq!(resolved.reexports, resolved.imports);
        assert!(resolved.annotation_imports.is_empty());
        assert!(resolved.renames.is_empty());

        let local: Vec<_> = resolved.local_declarations.iter().map(|d| d.name()).collect();
        assert_eq!(local, vec!["Address"]);
    }

    #[test]
    fn test_annotation_imports_leave_out_reexports() {
        let program = program(json!([
            {"type": "ClassDefinition", "name": "Accounts", "methods": [{
                "name": "move",
                "params": [
                    {"name": "user", "type": {"type": "StructLiteral", "name": "User"}},
                    {"name": "address", "type": {"type": "StructLiteral", "name": "Address"}}
                ],
                "returnType": {"type": "VoidLiteral"}
            }]},
            {"type": "StructLiteral", "name": "User", "homePath": "models/user", "typeLiteral": {
                "properties": [{"name": "name", "type": {"type": "StringLiteral"}}]
            }},
            {"type": "StructLiteral", "name": "Address", "typeLiteral": {
                "properties": [
                    {"name": "owner", "type": {"type": "StructLiteral", "name": "User"}},
                    {"name": "region", "type": {"type": "Enum", "name": "Region"}}
                ]
            }},
            {"type": "Enum", "name": "Region", "homePath": "models/region", "cases": [
                {"name": "Eu", "value": "eu"}
            ]}
        ]));
        let mut resolver = ImportGraphResolver::new(Language::Python.target());
        let mut diagnostics = Diagnostics::new();

        let resolved = resolver.resolve_class(&program, class_name(&program), "accounts_sdk", &methods(&program), &mut diagnostics);

        let paths: Vec<_> = resolved.imports.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec![".models.region", ".models.user"]);
        assert_eq!(resolved.annotation_imports.len(), 1);
        assert_eq!(resolved.annotation_imports[0].path, ".models.region");
        assert_eq!(names(&resolved.annotation_imports[0]), vec!["Region"]);
        assert_eq!(resolved.reexports.len(), 1);
        assert_eq!(names(&resolved.reexports[0]), vec!["User"]);
    }

    #[test]
    fn test_names_taken_by_the_proxy_class_and_stub_are_aliased() {
        let program = program(json!([
            {"type": "ClassDefinition", "name": "User", "methods": [{
                "name": "get",
                "params": [{"name": "via", "type": {"type": "StructLiteral", "name": "Remote"}}],
                "returnType": {"type": "PromiseType", "element": {"type": "StructLiteral", "name": "User"}}
            }]},
            {"type": "StructLiteral", "name": "User", "homePath": "models/user", "typeLiteral": {
                "properties": [{"name": "origin", "type": {"type": "StructLiteral", "name": "Remote"}}]
            }},
            {"type": "StructLiteral", "name": "Remote", "typeLiteral": {
                "properties": [{"name": "host", "type": {"type": "StringLiteral"}}]
            }}
        ]));
        let mut resolver = ImportGraphResolver::new(Language::TypeScript.target());
        let mut diagnostics = Diagnostics::new();

        let resolved = resolver.resolve_class(&program, class_name(&program), "user.sdk", &methods(&program), &mut diagnostics);

        assert_eq!(resolved.renames.get("User").map(String::as_str), Some("UserModel"));
        assert_eq!(resolved.renames.get("Remote").map(String::as_str), Some("RemoteModel"));

        let import = &resolved.imports[0];
        assert!(import.symbols.is_empty());
        assert_eq!(import.aliased[0].name, "User");
        assert_eq!(import.aliased[0].alias, "UserModel");
        assert_eq!(resolved.reexports, resolved.imports);

        let local: Vec<_> = resolved.local_declarations.iter().map(|d| d.name()).collect();
        assert_eq!(local, vec!["RemoteModel"]);

        // The type file still calls the local type `Remote`.
        let files = resolver.into_type_files(&PackageView {
            name: "acme".to_string(),
            version: "1.0.0".to_string(),
        });
        let user_file = &files[0];
        assert_eq!(user_file.imports[0].path, "../user.sdk");
        assert_eq!(user_file.imports[0].aliased[0].name, "RemoteModel");
        assert_eq!(user_file.imports[0].aliased[0].alias, "Remote");
    }

    #[test]
    fn test_parent_segments_in_home_path_are_dropped_and_reported() {
        let program = program(json!([
            {"type": "ClassDefinition", "name": "Files", "methods": [{
                "name": "read",
                "returnType": {"type": "StructLiteral", "name": "Foo"}
            }]},
            {"type": "StructLiteral", "name": "Foo", "homePath": "../../etc/foo"}
        ]));
        let mut resolver = ImportGraphResolver::new(Language::TypeScript.target());
        let mut diagnostics = Diagnostics::new();

        let resolved = resolver.resolve_class(&program, class_name(&program), "files.sdk", &methods(&program), &mut diagnostics);

        assert_eq!(resolved.imports[0].path, "./etc/foo");
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::UnsafeHomePath {
                name: "Foo".to_string(),
                home_path: "../../etc/foo".to_string(),
            }]
        );
        let files = resolver.into_type_files(&PackageView {
            name: "acme".to_string(),
            version: "1.0.0".to_string(),
        });
        assert_eq!(files[0].module, "etc/foo");
    }

    #[test]
    fn test_type_files_import_each_other_and_local_types() {
        let program = user_program();
        let mut resolver = ImportGraphResolver::new(Language::TypeScript.target());
        let mut diagnostics = Diagnostics::new();
        resolver.resolve_class(&program, class_name(&program), "user.sdk", &methods(&program), &mut diagnostics);

        let package = PackageView {
            name: "acme".to_string(),
            version: "1.0.0".to_string(),
        };
        let files = resolver.into_type_files(&package);
        let modules: Vec<_> = files.iter().map(|f| f.module.as_str()).collect();
        assert_eq!(modules, vec!["models/role", "models/user"]);

        assert!(files[0].imports.is_empty());
        let user_imports: Vec<_> = files[1].imports.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(user_imports, vec!["../user.sdk", "./role"]);
        assert_eq!(names(&files[1].imports[0]), vec!["Address"]);
        assert_eq!(names(&files[1].imports[1]), vec!["Role"]);
    }

    #[test]
    fn test_cyclic_references_terminate() {
        let program = program(json!([
            {"type": "ClassDefinition", "name": "Graph", "methods": [{
                "name": "root",
                "returnType": {"type": "StructLiteral", "name": "Node"}
            }]},
            {"type": "StructLiteral", "name": "Node", "homePath": "graph/node", "typeLiteral": {
                "properties": [{"name": "edges", "type": {"type": "ArrayType", "element": {"type": "StructLiteral", "name": "Edge"}}}]
            }},
            {"type": "StructLiteral", "name": "Edge", "homePath": "shared/edge", "typeLiteral": {
                "properties": [{"name": "to", "type": {"type": "StructLiteral", "name": "Node"}}]
            }}
        ]));
        let mut resolver = ImportGraphResolver::new(Language::TypeScript.target());
        let mut diagnostics = Diagnostics::new();
        resolver.resolve_class(&program, class_name(&program), "graph.sdk", &methods(&program), &mut diagnostics);

        assert_eq!(resolver.imports_for("graph/node")[0].path, "../shared/edge");
        assert_eq!(resolver.imports_for("shared/edge")[0].path, "../graph/node");
        assert_eq!(resolver.imports_for("graph.sdk")[0].path, "./graph/node");
    }

    #[test]
    fn test_shared_declaration_emitted_once() {
        let first = user_program();
        let second = program(json!([
            {"type": "ClassDefinition", "name": "Admin", "methods": [{
                "name": "promote",
                "params": [{"name": "user", "type": {"type": "StructLiteral", "name": "User"}}],
                "returnType": {"type": "BooleanLiteral"}
            }]},
            {"type": "StructLiteral", "name": "User", "homePath": "./models/user", "typeLiteral": {
                "properties": [{"name": "name", "type": {"type": "StringLiteral"}}]
            }}
        ]));
        let mut resolver = ImportGraphResolver::new(Language::Python.target());
        let mut diagnostics = Diagnostics::new();
        resolver.resolve_class(&first, class_name(&first), "user_sdk", &methods(&first), &mut diagnostics);
        let admin = resolver.resolve_class(&second, class_name(&second), "admin_sdk", &methods(&second), &mut diagnostics);

        assert_eq!(admin.imports[0].path, ".models.user");

        let files = resolver.into_type_files(&PackageView {
            name: "acme".to_string(),
            version: "1.0.0".to_string(),
        });
        let user_file = files.iter().find(|f| f.module == "models/user").unwrap();
        assert_eq!(user_file.declarations.len(), 1);
    }

    #[test]
    fn test_losing_duplicate_adds_no_imports() {
        let first = program(json!([
            {"type": "ClassDefinition", "name": "Accounts", "methods": [{
                "name": "get",
                "returnType": {"type": "StructLiteral", "name": "User"}
            }]},
            {"type": "StructLiteral", "name": "User", "homePath": "models/user", "typeLiteral": {
                "properties": [{"name": "name", "type": {"type": "StringLiteral"}}]
            }}
        ]));
        let second = program(json!([
            {"type": "ClassDefinition", "name": "Teams", "methods": [{
                "name": "lead",
                "returnType": {"type": "StructLiteral", "name": "User"}
            }]},
            {"type": "StructLiteral", "name": "User", "homePath": "models/user", "typeLiteral": {
                "properties": [{"name": "owner", "type": {"type": "StructLiteral", "name": "Owner"}}]
            }},
            {"type": "StructLiteral", "name": "Owner", "typeLiteral": {
                "properties": [{"name": "id", "type": {"type": "StringLiteral"}}]
            }}
        ]));
        let mut resolver = ImportGraphResolver::new(Language::TypeScript.target());
        let mut diagnostics = Diagnostics::new();
        resolver.resolve_class(&first, class_name(&first), "accounts.sdk", &methods(&first), &mut diagnostics);
        resolver.resolve_class(&second, class_name(&second), "teams.sdk", &methods(&second), &mut diagnostics);

        assert!(resolver.imports_for("models/user").is_empty());
        let files = resolver.into_type_files(&PackageView {
            name: "acme".to_string(),
            version: "1.0.0".to_string(),
        });
        assert_eq!(files.len(), 1);
        assert!(files[0].imports.is_empty());
    }

    #[test]
    fn test_duplicate_declaration_first_wins() {
        let program = program(json!([
            {"type": "ClassDefinition", "name": "Ids", "methods": [{
                "name": "next",
                "returnType": {"type": "TypeAlias", "name": "Id", "aliasType": {"type": "StringLiteral"}}
            }]},
            {"type": "TypeAlias", "name": "Id", "aliasType": {"type": "StringLiteral"}},
            {"type": "TypeAlias", "name": "Id", "aliasType": {"type": "IntegerLiteral"}}
        ]));
        let mut resolver = ImportGraphResolver::new(Language::TypeScript.target());
        let mut diagnostics = Diagnostics::new();
        let resolved = resolver.resolve_class(&program, class_name(&program), "ids.sdk", &methods(&program), &mut diagnostics);

        assert_eq!(
            resolved.local_declarations,
            vec![DeclarationView::Alias {
                name: "Id".to_string(),
                target: "string".to_string(),
            }]
        );
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::DuplicateDeclaration {
                name: "Id".to_string()
            }]
        );
    }

    #[test]
    fn test_unknown_node_inside_declaration_is_reported() {
        let program = program(json!([
            {"type": "ClassDefinition", "name": "Shapes", "methods": [{
                "name": "get",
                "returnType": {"type": "StructLiteral", "name": "Shape"}
            }]},
            {"type": "StructLiteral", "name": "Shape", "typeLiteral": {
                "properties": [{"name": "points", "type": {"type": "TupleType"}}]
            }}
        ]));
        let mut resolver = ImportGraphResolver::new(Language::Dart.target());
        let mut diagnostics = Diagnostics::new();
        resolver.resolve_class(&program, class_name(&program), "shapes_sdk", &methods(&program), &mut diagnostics);

        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::UnknownNode {
                context: "Shape".to_string()
            }]
        );
    }

    #[test]
    fn test_unreferenced_declarations_are_not_emitted() {
        let program = program(json!([
            {"type": "ClassDefinition", "name": "Ping", "methods": [{
                "name": "ping",
                "returnType": {"type": "StringLiteral"}
            }]},
            {"type": "StructLiteral", "name": "Unused", "homePath": "models/unused"}
        ]));
        let mut resolver = ImportGraphResolver::new(Language::TypeScript.target());
        let mut diagnostics = Diagnostics::new();
        let resolved = resolver.resolve_class(&program, class_name(&program), "ping.sdk", &methods(&program), &mut diagnostics);

        assert!(resolved.imports.is_empty());
        assert!(resolved.local_declarations.is_empty());
        assert!(resolver
            .into_type_files(&PackageView {
                name: "acme".to_string(),
                version: "1.0.0".to_string(),
            })
            .is_empty());
    }
}

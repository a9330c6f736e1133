/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Builds the proxy-file view of one class: qualifying methods, parameter
 * spellings, defaults and the forwarding call to the transport stub.
 */

use crate::ast::{contains_unknown, rename_references, ClassDefinition, MethodDefinition, MethodKind, Node};
use crate::config::GenerationOptions;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::imports::ClassImports;
use crate::language::TargetLanguage;
use crate::view::{doc_lines, mark_last, ArgView, ClassView, MethodView, PackageView, ParamView, Renames};

pub struct ClassCodeGenerator<'a> {
    target: &'static dyn TargetLanguage,
    options: &'a GenerationOptions,
}

impl<'a> ClassCodeGenerator<'a> {
    pub fn new(options: &'a GenerationOptions) -> Self {
        Self {
            target: options.language.target(),
            options,
        }
    }

    /// Methods exposed on the generated channel. Constructors never qualify.
    pub fn qualifying_methods<'c>(&self, class: &'c ClassDefinition) -> Vec<&'c MethodDefinition> {
        class
            .methods
            .iter()
            .filter(|m| m.kind != MethodKind::Constructor)
            .filter(|m| self.options.exposure.channel_for(&class.name, &m.name) == self.options.channel)
            .collect()
    }

    /// Proxy module of `class`, e.g. `user.sdk` or `user_sdk`.
    pub fn module(&self, class: &ClassDefinition) -> String {
        self.target.proxy_module(&class.name)
    }

    pub fn build(
        &self,
        class: &ClassDefinition,
        methods: &[&MethodDefinition],
        imports: ClassImports,
        diagnostics: &mut Diagnostics,
    ) -> ClassView {
        let module = self.module(class);
        let stub_import = self.target.import_path(&module, self.target.stub_module());
        let methods = methods
            .iter()
            .map(|method| self.method_view(&class.name, method, &imports.renames, diagnostics))
            .collect();

        ClassView {
            name: class.name.clone(),
            doc: doc_lines(class.doc_string.as_deref()),
            module,
            package: PackageView::from(&self.options.package),
            stub_import,
            imports: imports.imports,
            annotation_imports: imports.annotation_imports,
            reexports: imports.reexports,
            declarations: imports.local_declarations,
            methods,
        }
    }

    fn method_view(
        &self,
        class_name: &str,
        method: &MethodDefinition,
        renames: &Renames,
        diagnostics: &mut Diagnostics,
    ) -> MethodView {
        let target = self.target;
        let qualified = format!("{class_name}.{}", method.name);

        let has_unknown = contains_unknown(&method.return_type)
            || method.params.iter().any(|p| contains_unknown(&p.ty));
        if has_unknown {
            diagnostics.push(Diagnostic::UnknownNode {
                context: qualified.clone(),
            });
        }

        // Only a trailing run of optional parameters can be omitted by callers.
        let trailing_start = method
            .params
            .iter()
            .rposition(|p| !(p.optional || p.default_value.is_some()))
            .map_or(0, |i| i + 1);

        let params: Vec<_> = method
            .params
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let in_trailing = index >= trailing_start;
                let default = p
                    .default_value
                    .as_ref()
                    .filter(|_| in_trailing)
                    .map(|d| target.literal(&d.value, d.value_kind));
                let ty = target.map_type(&rename_references(&p.ty, renames));
                let ty = match (p.optional, in_trailing) {
                    (true, true) if default.is_none() => target.optional_type(ty),
                    // Cannot be omitted, only passed as absent.
                    (true, false) => target.nullable_type(ty),
                    _ => ty,
                };
                (
                    target.reserved_words().sanitize(&p.name),
                    ty,
                    in_trailing,
                    default,
                    index == trailing_start,
                )
            })
            .collect();

        let args = mark_last(params.iter().map(|p| p.0.clone()).collect(), |name, last| {
            ArgView { name, last }
        });
        let has_optional = trailing_start < params.len();
        let params = mark_last(params, |(name, ty, optional, default, first), last| ParamView {
            name,
            ty,
            optional,
            default,
            first_optional: optional && first,
            last,
        });

        let awaited = match &method.return_type {
            Node::PromiseType { element } => element.as_ref(),
            other => other,
        };

        MethodView {
            name: target.method_name(&method.name),
            doc: doc_lines(method.doc_string.as_deref()),
            params,
            has_optional,
            return_type: target.map_return_type(&rename_references(&method.return_type, renames)),
            returns_value: !matches!(awaited, Node::VoidLiteral),
            qualified_name: target.quote_string(&qualified),
            args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Channel, ExposureConfig};
    use crate::language::Language;
    use serde_json::json;

    fn user_class() -> ClassDefinition {
        serde_json::from_value(json!({
            "name": "User",
            "docString": "Manages users.",
            "methods": [
                {
                    "name": "constructor",
                    "kind": "constructor",
                    "returnType": {"type": "VoidLiteral"}
                },
                {
                    "name": "create",
                    "docString": "Create a user.",
                    "params": [
                        {"name": "name", "type": {"type": "StringLiteral"}},
                        {"name": "email", "type": {"type": "StringLiteral"}}
                    ],
                    "returnType": {"type": "VoidLiteral"}
                },
                {
                    "name": "internalMethod",
                    "returnType": {"type": "StringLiteral"}
                }
            ]
        }))
        .unwrap()
    }

    fn options(language: Language) -> GenerationOptions {
        let exposure: ExposureConfig = serde_json::from_value(json!({
            "classes": [{
                "name": "User",
                "methods": [
                    {"name": "create", "type": "jsonrpc"},
                    {"name": "internalMethod", "type": "http"}
                ]
            }]
        }))
        .unwrap();
        GenerationOptions::new(language).with_exposure(exposure)
    }

    fn no_imports() -> ClassImports {
        ClassImports::default()
    }

    #[test]
    fn test_only_channel_methods_qualify() {
        let options = options(Language::TypeScript);
        let generator = ClassCodeGenerator::new(&options);
        let class = user_class();

        let names: Vec<_> = generator
            .qualifying_methods(&class)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["create"]);

        let http = options.clone().with_channel(Channel::Http);
        let names: Vec<_> = ClassCodeGenerator::new(&http)
            .qualifying_methods(&class)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["internalMethod"]);
    }

    #[test]
    fn test_build_user_view() {
        let options = options(Language::TypeScript);
        let generator = ClassCodeGenerator::new(&options);
        let class = user_class();
        let methods = generator.qualifying_methods(&class);
        let mut diagnostics = Diagnostics::new();

        let view = generator.build(&class, &methods, no_imports(), &mut diagnostics);

        assert_eq!(view.module, "user.sdk");
        assert_eq!(view.stub_import, "./remote");
        assert_eq!(view.doc, vec!["Manages users."]);
        assert_eq!(view.methods.len(), 1);

        let create = &view.methods[0];
        assert_eq!(create.return_type, "Promise<void>");
        assert!(!create.returns_value);
        assert_eq!(create.qualified_name, "\"User.create\"");
        let args: Vec<_> = create.args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(args, vec!["name", "email"]);
        assert!(create.args[1].last);
        assert!(!create.has_optional);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_reserved_parameter_names_match_call_arguments() {
        let class: ClassDefinition = serde_json::from_value(json!({
            "name": "Mailer",
            "methods": [{
                "name": "send",
                "params": [
                    {"name": "from", "type": {"type": "StringLiteral"}},
                    {"name": "to", "type": {"type": "StringLiteral"}}
                ],
                "returnType": {"type": "BooleanLiteral"}
            }]
        }))
        .unwrap();
        let options = GenerationOptions::new(Language::Python);
        let generator = ClassCodeGenerator::new(&options);
        let methods = generator.qualifying_methods(&class);
        let view = generator.build(&class, &methods, no_imports(), &mut Diagnostics::new());

        let send = &view.methods[0];
        assert_eq!(send.params[0].name, "from_");
        assert_eq!(send.args[0].name, "from_");
        assert_eq!(send.return_type, "bool");
        assert!(send.returns_value);
        assert_eq!(view.stub_import, ".remote");
    }

    #[test]
    fn test_optional_and_default_parameters() {
        let class: ClassDefinition = serde_json::from_value(json!({
            "name": "Search",
            "methods": [{
                "name": "query",
                "params": [
                    {"name": "filter", "optional": true, "type": {"type": "StringLiteral"}},
                    {"name": "term", "type": {"type": "StringLiteral"}},
                    {"name": "cursor", "optional": true, "type": {"type": "StringLiteral"}},
                    {"name": "limit", "type": {"type": "IntegerLiteral"},
                     "defaultValue": {"value": 10, "valueKind": "number"}}
                ],
                "returnType": {"type": "PromiseType", "element": {"type": "ArrayType", "element": {"type": "StringLiteral"}}}
            }]
        }))
        .unwrap();
        let options = GenerationOptions::new(Language::Dart);
        let generator = ClassCodeGenerator::new(&options);
        let methods = generator.qualifying_methods(&class);
        let view = generator.build(&class, &methods, no_imports(), &mut Diagnostics::new());
        let query = &view.methods[0];

        assert_eq!(view.module, "search_sdk");
        assert_eq!(query.return_type, "Future<List<String>>");
        assert!(query.has_optional);

        let filter = &query.params[0];
        assert!(!filter.optional);
        assert_eq!(filter.ty, "String?");

        let cursor = &query.params[2];
        assert!(cursor.optional);
        assert!(cursor.first_optional);
        assert_eq!(cursor.ty, "String?");
        assert_eq!(cursor.default, None);

        let limit = &query.params[3];
        assert!(limit.optional);
        assert!(!limit.first_optional);
        assert_eq!(limit.ty, "int");
        assert_eq!(limit.default.as_deref(), Some("10"));
        assert!(limit.last);

        let options = GenerationOptions::new(Language::TypeScript);
        let generator = ClassCodeGenerator::new(&options);
        let view = generator.build(&class, &methods, no_imports(), &mut Diagnostics::new());
        let query = &view.methods[0];

        let filter = &query.params[0];
        assert!(!filter.optional);
        assert_eq!(filter.ty, "string | undefined");

        let cursor = &query.params[2];
        assert!(cursor.optional);
        assert_eq!(cursor.ty, "string");
    }

    #[test]
    fn test_renamed_declarations_in_signatures() {
        let class: ClassDefinition = serde_json::from_value(json!({
            "name": "User",
            "methods": [{
                "name": "find",
                "params": [{"name": "ids", "type": {"type": "ArrayType", "element": {"type": "StringLiteral"}}}],
                "returnType": {"type": "PromiseType", "element": {"type": "ArrayType", "element": {"type": "StructLiteral", "name": "User"}}}
            }]
        }))
        .unwrap();
        let options = GenerationOptions::new(Language::Python);
        let generator = ClassCodeGenerator::new(&options);
        let methods = generator.qualifying_methods(&class);
        let imports = ClassImports {
            renames: Renames::from([("User".to_string(), "UserModel".to_string())]),
            ..ClassImports::default()
        };

        let view = generator.build(&class, &methods, imports, &mut Diagnostics::new());

        assert_eq!(view.name, "User");
        assert_eq!(view.methods[0].return_type, "List[UserModel]");
        assert_eq!(view.methods[0].params[0].ty, "List[str]");
    }

    #[test]
    fn test_unknown_node_in_signature_is_reported() {
        let class: ClassDefinition = serde_json::from_value(json!({
            "name": "Geo",
            "methods": [{
                "name": "locate",
                "params": [{"name": "point", "type": {"type": "TupleType"}}],
                "returnType": {"type": "VoidLiteral"}
            }]
        }))
        .unwrap();
        let options = GenerationOptions::new(Language::TypeScript);
        let generator = ClassCodeGenerator::new(&options);
        let methods = generator.qualifying_methods(&class);
        let mut diagnostics = Diagnostics::new();
        let view = generator.build(&class, &methods, no_imports(), &mut diagnostics);

        assert_eq!(view.methods[0].params[0].ty, "any");
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::UnknownNode {
                context: "Geo.locate".to_string()
            }]
        );
    }
}

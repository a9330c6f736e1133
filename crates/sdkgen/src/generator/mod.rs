/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
//! SDK generation orchestrator
//!
//! Runs one generation call for one target language: builds a proxy view per
//! qualifying class, resolves cross-file types with a fresh import resolver,
//! renders every file and appends the transport stub.

use crate::ast::Program;
use crate::class_view::ClassCodeGenerator;
use crate::config::GenerationOptions;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::GeneratorResult;
use crate::imports::ImportGraphResolver;
use crate::language::Language;
use crate::render::{TemplateRenderer, ENDPOINT_MARKER};
use crate::view::{PackageView, StubView};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Path relative to the SDK root.
    pub path: String,
    pub content: String,
}

/// Everything one generation call produced for one language.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutput {
    pub language: Language,
    /// Proxy files in input order, then type files by path, then the transport stub.
    pub artifacts: Vec<Artifact>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Trait for SDK generators
pub trait Generator {
    /// Generate the SDK sources for a set of programs.
    fn generate(&self, programs: &[Program]) -> GeneratorResult<GenerationOutput>;
}

pub struct SdkGenerator {
    options: GenerationOptions,
    renderer: TemplateRenderer,
}

impl SdkGenerator {
    /// # Errors
    ///
    /// Returns `GeneratorError::Config` if the package metadata is invalid and
    /// `GeneratorError::Render` if the embedded templates fail to load.
    pub fn new(options: GenerationOptions) -> GeneratorResult<Self> {
        options.package.validate()?;
        Ok(Self {
            options,
            renderer: TemplateRenderer::new()?,
        })
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }
}

impl Generator for SdkGenerator {
    fn generate(&self, programs: &[Program]) -> GeneratorResult<GenerationOutput> {
        let language = self.options.language;
        let target = language.target();
        let classes = ClassCodeGenerator::new(&self.options);
        let mut resolver = ImportGraphResolver::new(target);
        let mut diagnostics = Diagnostics::new();
        let mut views = Vec::new();
        let mut modules = HashSet::new();

        for (index, program) in programs.iter().enumerate() {
            let mut found = program.classes();
            let Some(class) = found.next() else {
                diagnostics.push(Diagnostic::MissingClassDefinition { program: index });
                continue;
            };
            for extra in found {
                diagnostics.push(Diagnostic::ExtraClassDefinition {
                    class: extra.name.clone(),
                });
            }

            let methods = classes.qualifying_methods(class);
            if methods.is_empty() {
                diagnostics.push(Diagnostic::NoQualifyingMethods {
                    class: class.name.clone(),
                    channel: self.options.channel,
                });
                continue;
            }

            // Two classes with the same name would write the same proxy file.
            let module = classes.module(class);
            if !modules.insert(module.clone()) {
                diagnostics.push(Diagnostic::ExtraClassDefinition {
                    class: class.name.clone(),
                });
                continue;
            }

            let imports = resolver.resolve_class(program, &class.name, &module, &methods, &mut diagnostics);
            tracing::debug!(
                class = %class.name,
                module = %module,
                methods = methods.len(),
                "built proxy view"
            );
            views.push(classes.build(class, &methods, imports, &mut diagnostics));
        }

        let package = PackageView::from(&self.options.package);
        let mut artifacts = Vec::with_capacity(views.len() + 1);

        for view in &views {
            let path = target.file_path(&view.module);
            let content = self.renderer.render_proxy(language, view, &path)?;
            artifacts.push(Artifact { path, content });
        }

        let mut type_files = Vec::new();
        for view in resolver.into_type_files(&package) {
            let path = target.file_path(&view.module);
            tracing::debug!(path = %path, declarations = view.declarations.len(), "rendering type file");
            let content = self.renderer.render_types(language, &view, &path)?;
            type_files.push(Artifact { path, content });
        }
        type_files.sort_by(|a, b| a.path.cmp(&b.path));
        artifacts.extend(type_files);

        let stub_path = target.file_path(target.stub_module());
        let stub = StubView {
            package,
            endpoint_marker: ENDPOINT_MARKER,
        };
        let content = self.renderer.render_stub(language, &stub, &stub_path)?;
        artifacts.push(Artifact {
            path: stub_path,
            content,
        });

        tracing::debug!(
            language = %language,
            artifacts = artifacts.len(),
            "generation finished"
        );

        Ok(GenerationOutput {
            language,
            artifacts,
            diagnostics: diagnostics.into_vec(),
        })
    }
}

/// Generate the SDK for one language.
pub fn generate_sdk(
    options: GenerationOptions,
    programs: &[Program],
) -> GeneratorResult<GenerationOutput> {
    SdkGenerator::new(options)?.generate(programs)
}

/// Generate the SDK for several languages in parallel.
///
/// Each language runs with its own generator and import resolver. Outputs are
/// returned in the order of `languages`.
pub fn generate_for_languages(
    programs: &[Program],
    languages: &[Language],
    base: &GenerationOptions,
) -> GeneratorResult<Vec<GenerationOutput>> {
    languages
        .par_iter()
        .map(|&language| {
            let options = GenerationOptions {
                language,
                ..base.clone()
            };
            generate_sdk(options, programs)
        })
        .collect()
}

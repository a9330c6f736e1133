/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Turns views into source text. Templates are compiled into the binary, one
 * set (`proxy`, `types`, `remote`) per target language.
 */

use crate::error::RenderError;
use crate::language::Language;
use crate::view::{ClassView, StubView, TypeFileView};
use serde::Serialize;
use std::error::Error as _;
use tera::{Context, Tera};

/// Placeholder in the transport stub that the deployment step replaces with
/// the live endpoint.
pub const ENDPOINT_MARKER: &str = "%%%callpath_endpoint%%%";

const TEMPLATES: &[(&str, &str)] = &[
    (
        "typescript/declarations.tera",
        include_str!("templates/typescript/declarations.tera"),
    ),
    ("typescript/proxy.tera", include_str!("templates/typescript/proxy.tera")),
    ("typescript/types.tera", include_str!("templates/typescript/types.tera")),
    ("typescript/remote.tera", include_str!("templates/typescript/remote.tera")),
    (
        "python/declarations.tera",
        include_str!("templates/python/declarations.tera"),
    ),
    ("python/header.tera", include_str!("templates/python/header.tera")),
    ("python/proxy.tera", include_str!("templates/python/proxy.tera")),
    ("python/types.tera", include_str!("templates/python/types.tera")),
    ("python/remote.tera", include_str!("templates/python/remote.tera")),
    ("dart/declarations.tera", include_str!("templates/dart/declarations.tera")),
    ("dart/proxy.tera", include_str!("templates/dart/proxy.tera")),
    ("dart/types.tera", include_str!("templates/dart/types.tera")),
    ("dart/remote.tera", include_str!("templates/dart/remote.tera")),
];

pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())
            .map_err(|e| RenderError::Template {
                name: "embedded templates".to_string(),
                reason: describe(&e),
            })?;

        // Generated code is not HTML.
        tera.autoescape_on(vec![]);

        Ok(Self { tera })
    }

    pub fn render_proxy(
        &self,
        language: Language,
        view: &ClassView,
        file: &str,
    ) -> Result<String, RenderError> {
        self.render(language, "proxy", view, file)
    }

    pub fn render_types(
        &self,
        language: Language,
        view: &TypeFileView,
        file: &str,
    ) -> Result<String, RenderError> {
        self.render(language, "types", view, file)
    }

    pub fn render_stub(
        &self,
        language: Language,
        view: &StubView,
        file: &str,
    ) -> Result<String, RenderError> {
        self.render(language, "remote", view, file)
    }

    fn render<V: Serialize>(
        &self,
        language: Language,
        kind: &str,
        view: &V,
        file: &str,
    ) -> Result<String, RenderError> {
        let template = format!("{}/{}.tera", language.name(), kind);
        let context = Context::from_serialize(view).map_err(|e| RenderError::Render {
            file: file.to_string(),
            reason: describe(&e),
        })?;
        self.tera
            .render(&template, &context)
            .map_err(|e| RenderError::Render {
                file: file.to_string(),
                reason: describe(&e),
            })
    }
}

/// Tera keeps the useful part of an error in its source chain.
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

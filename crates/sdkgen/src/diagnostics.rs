/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Non-fatal findings of a generation run. Every lenient path (skipped input,
 * permissive fallback type) records one so upstream defects stay visible.
 */

use crate::config::Channel;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Program body has no class; nothing was generated for it.
    MissingClassDefinition { program: usize },
    /// Program body has more than one class; only the first was used.
    ExtraClassDefinition { class: String },
    /// No method of the class is exposed on the generated channel.
    NoQualifyingMethods { class: String, channel: Channel },
    /// A node of an unknown kind was rendered as the permissive type.
    UnknownNode { context: String },
    /// A declaration name appears twice in one program body; the first was used.
    DuplicateDeclaration { name: String },
    /// A home path climbs out of the project with `..`; those segments were dropped.
    UnsafeHomePath { name: String, home_path: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingClassDefinition { program } => {
                write!(f, "program #{program} has no class definition, skipped")
            }
            Diagnostic::ExtraClassDefinition { class } => {
                write!(f, "extra class definition {class} ignored")
            }
            Diagnostic::NoQualifyingMethods { class, channel } => {
                write!(f, "class {class} has no methods exposed on {channel}, skipped")
            }
            Diagnostic::UnknownNode { context } => {
                write!(f, "unknown type node in {context}, rendered as the permissive type")
            }
            Diagnostic::DuplicateDeclaration { name } => {
                write!(f, "declaration {name} is declared more than once, first one used")
            }
            Diagnostic::UnsafeHomePath { name, home_path } => {
                write!(f, "home path {home_path:?} of {name} leaves the project, `..` segments dropped")
            }
        }
    }
}

/// Collects diagnostics and mirrors each one to the log.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "generation diagnostic");
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

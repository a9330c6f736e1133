/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use std::collections::HashSet;

/// Reserved identifiers of one target language and the transform that avoids them.
#[derive(Debug)]
pub struct ReservedWordGuard {
    words: HashSet<&'static str>,
    suffix: &'static str,
}

impl ReservedWordGuard {
    pub fn new(words: &[&'static str], suffix: &'static str) -> Self {
        Self {
            words: words.iter().copied().collect(),
            suffix,
        }
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.words.contains(name)
    }

    /// `name` unchanged, or `name` plus the fixed suffix when it is reserved.
    ///
    /// Deterministic: the same input always gives the same output, so a parameter
    /// sanitized at its declaration matches every use built from the same name.
    pub fn sanitize(&self, name: &str) -> String {
        if self.is_reserved(name) {
            format!("{name}{}", self.suffix)
        } else {
            name.to_string()
        }
    }
}

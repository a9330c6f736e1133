//! Target language selection

use crate::error::CliResult;
use callpath_sdkgen::Language;
use std::path::Path;

/// Detect the language from project files, or fall back to TypeScript
pub fn detect_language() -> Language {
    if Path::new("package.json").exists() || Path::new("tsconfig.json").exists() {
        return Language::TypeScript;
    }
    if Path::new("requirements.txt").exists() || Path::new("pyproject.toml").exists() {
        return Language::Python;
    }
    if Path::new("pubspec.yaml").exists() {
        return Language::Dart;
    }

    Language::TypeScript
}

/// Determine languages with priority: CLI flags > Config > Auto-detect > Default
///
/// Names are parsed case-insensitively with aliases (`ts`, `py`); duplicates
/// are dropped, first occurrence wins.
pub fn determine_languages(cli_langs: &[String], config_langs: &[String]) -> CliResult<Vec<Language>> {
    let names = if !cli_langs.is_empty() {
        cli_langs
    } else if !config_langs.is_empty() {
        config_langs
    } else {
        return Ok(vec![detect_language()]);
    };

    let mut languages = Vec::new();
    for name in names {
        let language: Language = name.parse()?;
        if !languages.contains(&language) {
            languages.push(language);
        }
    }
    Ok(languages)
}

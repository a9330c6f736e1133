//! Reusable SDK generation operations

use crate::error::{CliError, CliResult};
use callpath_sdkgen::{
    generate_for_languages, parse_program_file, Artifact, Diagnostic, GenerationOptions, Language,
    Program,
};
use std::fs;
use std::path::{Component, Path, PathBuf};

const PROGRAM_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Options for generating SDKs
pub struct GenerateOptions {
    /// Program files, or directories scanned for program files
    pub inputs: Vec<PathBuf>,
    pub languages: Vec<Language>,
    /// With more than one language, each gets its own subdirectory
    pub output: PathBuf,
    pub base: GenerationOptions,
}

/// What was written for one language
#[derive(Debug)]
pub struct LanguageSummary {
    pub language: Language,
    pub output_dir: PathBuf,
    pub files: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Generate SDK sources from program files
///
/// This function:
/// 1. Expands the inputs into program files and parses them
/// 2. Generates every requested language in parallel
/// 3. Writes each language's artifacts under the output directory
pub fn generate_sdks(options: &GenerateOptions) -> CliResult<Vec<LanguageSummary>> {
    if options.languages.is_empty() {
        return Err(CliError::Message("No target language selected".to_string()));
    }

    let files = collect_program_files(&options.inputs)?;
    let programs = load_programs(&files)?;
    tracing::info!(
        programs = programs.len(),
        languages = options.languages.len(),
        "generating SDKs"
    );

    let outputs = generate_for_languages(&programs, &options.languages, &options.base)?;
    let split = outputs.len() > 1;

    outputs
        .into_iter()
        .map(|output| -> CliResult<LanguageSummary> {
            let output_dir = if split {
                options.output.join(output.language.name())
            } else {
                options.output.clone()
            };
            write_artifacts(&output_dir, &output.artifacts)?;
            Ok(LanguageSummary {
                language: output.language,
                output_dir,
                files: output.artifacts.into_iter().map(|a| a.path).collect(),
                diagnostics: output.diagnostics,
            })
        })
        .collect()
}

/// Expand inputs into a list of program files.
///
/// Files are taken as given; directories contribute their `.json`, `.yaml`
/// and `.yml` files (not recursive), sorted by name.
pub fn collect_program_files(inputs: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    if inputs.is_empty() {
        return Err(CliError::Message(
            "No input given. Pass --input or set `input` in callpath.yaml".to_string(),
        ));
    }

    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(input)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| path.is_file() && is_program_file(path))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            return Err(CliError::Message(format!(
                "Input not found: {}",
                input.display()
            )));
        }
    }
    Ok(files)
}

fn is_program_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PROGRAM_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

pub fn load_programs(files: &[PathBuf]) -> CliResult<Vec<Program>> {
    files
        .iter()
        .map(|file| {
            tracing::debug!(file = %file.display(), "reading program");
            let content = fs::read_to_string(file).map_err(|e| {
                CliError::Message(format!("Failed to read {}: {e}", file.display()))
            })?;
            parse_program_file(&content, &file.to_string_lossy()).map_err(|e| {
                CliError::Message(format!("{}: {e}", file.display()))
            })
        })
        .collect()
}

/// Write artifacts below `dir`, creating directories as needed.
///
/// Artifact paths must stay inside `dir`: absolute paths and `..` are refused.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> CliResult<usize> {
    for artifact in artifacts {
        let relative = Path::new(&artifact.path);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(CliError::Message(format!(
                "Refusing to write {} outside of {}",
                artifact.path,
                dir.display()
            )));
        }
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &artifact.content)?;
        tracing::debug!(path = %path.display(), bytes = artifact.content.len(), "wrote artifact");
    }
    Ok(artifacts.len())
}

//! Generate SDK command implementation

use crate::error::{CliError, CliResult};
use crate::ops::generate::{generate_sdks, GenerateOptions};
use crate::utils::config::{read_project_config, ProjectConfig};
use crate::utils::language::determine_languages;
use callpath_sdkgen::{Channel, GenerationOptions};
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "./sdk";

pub struct Options {
    pub input: Vec<String>,
    pub lang: Vec<String>,
    pub output: Option<String>,
    pub config: Option<String>,
    pub channel: Option<String>,
}

pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(()) => {
            println!("✓ SDK generated successfully");
            0
        }
        Err(e) => {
            eprintln!("✗ SDK generation failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<()> {
    let config = read_project_config(options.config.as_deref())?.unwrap_or_default();
    let generate_options = resolve_options(options, config)?;

    for summary in generate_sdks(&generate_options)? {
        println!(
            "  {}: {} file(s) in {}",
            summary.language,
            summary.files.len(),
            summary.output_dir.display()
        );
        for diagnostic in &summary.diagnostics {
            println!("    ! {diagnostic}");
        }
    }
    Ok(())
}

/// Merge flags over config (priority: CLI flag > Config > Default)
fn resolve_options(options: &Options, config: ProjectConfig) -> CliResult<GenerateOptions> {
    let languages = determine_languages(&options.lang, &config.languages)?;

    let channel = match options.channel.as_deref() {
        Some(name) => name.parse::<Channel>().map_err(CliError::Message)?,
        None => config.channel.unwrap_or_default(),
    };

    let output = options
        .output
        .clone()
        .or(config.output)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let inputs = if options.input.is_empty() {
        config.input
    } else {
        options.input.clone()
    };

    let mut base = GenerationOptions::default()
        .with_channel(channel)
        .with_exposure(config.exposure);
    if let Some(package) = config.package {
        base = base.with_package(package);
    }

    Ok(GenerateOptions {
        inputs: inputs.into_iter().map(PathBuf::from).collect(),
        languages,
        output: PathBuf::from(output),
        base,
    })
}

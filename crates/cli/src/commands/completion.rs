//! `callpath completion`: shell completion scripts for the callpath command tree

use crate::error::CliResult;
use crate::get_cli_command;
use clap_complete::{generate, Shell};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

const BIN_NAME: &str = "callpath";

pub struct Options {
    pub shell: Shell,
    /// Write the script to this file instead of stdout.
    pub output: Option<PathBuf>,
}

/// Generate shell completion script
pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("✗ Completion generation failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<()> {
    let script = render(options.shell);
    match &options.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &script)?;
            tracing::info!(shell = %options.shell, path = %path.display(), "wrote completion script");
            println!("✓ {} completion written to {}", options.shell, path.display());
        }
        None => io::stdout().write_all(&script)?,
    }
    Ok(())
}

/// Completion script for `shell` covering every subcommand and flag.
pub fn render(shell: Shell) -> Vec<u8> {
    let mut cmd = get_cli_command();
    let mut script = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut script);
    script
}

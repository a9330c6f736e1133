//! Callpath CLI
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.

mod commands;
mod error;
mod ops;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{completion, generate, languages};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Callpath CLI - Generate client SDKs for remote-callable classes
#[derive(Parser)]
#[command(name = "callpath")]
#[command(about = "Callpath CLI - Generate client SDKs for remote-callable classes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate SDK sources from class model files
    Generate {
        /// Program file or directory of program files (JSON/YAML); repeatable
        #[arg(long, short)]
        input: Vec<String>,
        /// Target language (typescript, python, dart); repeatable
        #[arg(long, short)]
        lang: Vec<String>,
        /// Output directory (default: ./sdk)
        #[arg(long, short)]
        output: Option<String>,
        /// Project config file (default: callpath.yaml if present)
        #[arg(long)]
        config: Option<String>,
        /// Channel the SDK is generated for (jsonrpc, http, cron)
        #[arg(long)]
        channel: Option<String>,
    },
    /// List supported target languages
    Languages,
    /// Generate shell completion script
    Completion {
        /// Shell to complete for
        #[arg(value_enum)]
        shell: Shell,
        /// Write the script to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Clap command tree, shared with the completion generator.
pub fn get_cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Generate {
            input,
            lang,
            output,
            config,
            channel,
        } => {
            let opts = generate::Options {
                input,
                lang,
                output,
                config,
                channel,
            };
            generate::run(&opts)
        }
        Commands::Languages => languages::run(),
        Commands::Completion { shell, output } => {
            completion::run(&completion::Options { shell, output })
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing() {
    // CALLPATH_LOG is a plain level ("debug") or a full filter directive
    // ("callpath_sdkgen=trace,callpath=info").
    let filter = match std::env::var("CALLPATH_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("callpath={level},callpath_sdkgen={level}")
        }
        Ok(directives) => directives,
        Err(_) => "callpath=info,callpath_sdkgen=info".to_string(),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

//! Project config file (`callpath.yaml`)

use crate::error::{CliError, CliResult};
use callpath_sdkgen::{Channel, ExposureConfig, PackageMetadata};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "callpath.yaml";

/// Full config file structure
///
/// Every field is optional; command-line flags override what is set here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Program files or directories
    pub input: Vec<String>,
    pub languages: Vec<String>,
    pub output: Option<String>,
    pub channel: Option<Channel>,
    pub package: Option<PackageMetadata>,
    pub exposure: ExposureConfig,
}

/// Read the project config.
///
/// An explicit `path` must exist. Without one, `callpath.yaml` in the current
/// directory is used when present.
pub fn read_project_config(path: Option<&str>) -> CliResult<Option<ProjectConfig>> {
    let config_path = Path::new(path.unwrap_or(DEFAULT_CONFIG_FILE));

    if !config_path.exists() {
        return match path {
            Some(p) => Err(CliError::Message(format!("Config file not found: {p}"))),
            None => Ok(None),
        };
    }

    let config_content = fs::read_to_string(config_path)
        .map_err(|e| CliError::Message(format!("Failed to read config file: {e}")))?;

    parse_project_config(&config_content).map(Some)
}

pub fn parse_project_config(content: &str) -> CliResult<ProjectConfig> {
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    serde_yaml::from_str(content)
        .map_err(|e| CliError::Message(format!("Failed to parse config file: {e}")))
}

/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Inputs that accompany the programs: which channel exposes each method,
 * package metadata, and the target language.
 */

use crate::error::ConfigError;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Invocation channel a method is exposed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Jsonrpc,
    Http,
    Cron,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Jsonrpc => "jsonrpc",
            Channel::Http => "http",
            Channel::Cron => "cron",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonrpc" | "json-rpc" => Ok(Channel::Jsonrpc),
            "http" => Ok(Channel::Http),
            "cron" => Ok(Channel::Cron),
            other => Err(format!("unknown channel \"{other}\"")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MethodExposure {
    pub name: String,
    #[serde(rename = "type")]
    pub channel: Channel,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassExposure {
    pub name: String,
    /// Class-level default for methods without their own entry.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(default)]
    pub methods: Vec<MethodExposure>,
}

/// Per-class and per-method channel configuration.
///
/// Classes and methods that are not listed are exposed on [`Channel::default`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExposureConfig {
    #[serde(default)]
    pub classes: Vec<ClassExposure>,
}

impl ExposureConfig {
    /// Channel of `class.method`: method entry, then class entry, then the default.
    pub fn channel_for(&self, class: &str, method: &str) -> Channel {
        let Some(class_entry) = self.classes.iter().find(|c| c.name == class) else {
            return Channel::default();
        };
        class_entry
            .methods
            .iter()
            .find(|m| m.name == method)
            .map(|m| m.channel)
            .or(class_entry.channel)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
}

impl Default for PackageMetadata {
    fn default() -> Self {
        Self {
            name: "callpath-sdk".to_string(),
            version: "0.1.0".to_string(),
        }
    }
}

impl PackageMetadata {
    /// Check the name is usable and the version is semver.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name_ok = !self.name.is_empty()
            && self
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '/'));
        if !name_ok {
            return Err(ConfigError::InvalidPackageName(self.name.clone()));
        }
        semver::Version::parse(&self.version).map_err(|e| ConfigError::InvalidPackageVersion {
            version: self.version.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

/// Everything one generation call needs besides the programs.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub language: Language,
    /// Channel this SDK is produced for; methods on other channels are dropped.
    pub channel: Channel,
    pub package: PackageMetadata,
    pub exposure: ExposureConfig,
}

impl GenerationOptions {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn with_package(mut self, package: PackageMetadata) -> Self {
        self.package = package;
        self
    }

    pub fn with_exposure(mut self, exposure: ExposureConfig) -> Self {
        self.exposure = exposure;
        self
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn exposure() -> ExposureConfig {
        serde_json::from_value(json!({
            "classes": [
                {
                    "name": "User",
                    "methods": [{"name": "internalMethod", "type": "cron"}]
                },
                {
                    "name": "Webhooks",
                    "type": "http",
                    "methods": [{"name": "status", "type": "jsonrpc"}]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_method_entry_wins() {
        let config = exposure();
        assert_eq!(config.channel_for("User", "internalMethod"), Channel::Cron);
        assert_eq!(config.channel_for("Webhooks", "status"), Channel::Jsonrpc);
    }

    #[test]
    fn test_class_entry_is_fallback() {
        assert_eq!(exposure().channel_for("Webhooks", "receive"), Channel::Http);
    }

    #[test]
    fn test_unlisted_defaults_to_jsonrpc() {
        let config = exposure();
        assert_eq!(config.channel_for("User", "create"), Channel::Jsonrpc);
        assert_eq!(config.channel_for("Billing", "charge"), Channel::Jsonrpc);
    }

    #[test]
    fn test_channel_from_str() {
        assert_eq!("JSONRPC".parse::<Channel>().unwrap(), Channel::Jsonrpc);
        assert_eq!("cron".parse::<Channel>().unwrap(), Channel::Cron);
        assert!("smtp".parse::<Channel>().is_err());
    }

    #[test]
    fn test_package_validation() {
        assert!(PackageMetadata::default().validate().is_ok());

        let bad_version = PackageMetadata {
            name: "sdk".to_string(),
            version: "1.0".to_string(),
        };
        assert!(matches!(
            bad_version.validate(),
            Err(ConfigError::InvalidPackageVersion { .. })
        ));

        let bad_name = PackageMetadata {
            name: "my sdk".to_string(),
            version: "1.0.0".to_string(),
        };
        assert!(matches!(bad_name.validate(), Err(ConfigError::InvalidPackageName(_))));
    }
}

//! Configuration for the compliance engine

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default rule document location, relative to the working directory
pub const DEFAULT_RULES_PATH: &str = "config/compliance_rules.yaml";

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// YAML rule document
    pub rules_path: PathBuf,

    /// Use the default rules when the rule document is present but malformed
    pub fallback_on_malformed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "compliance-core".to_string(),
            rules_path: PathBuf::from(DEFAULT_RULES_PATH),
            fallback_on_malformed: false,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::ComplianceError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(path) = std::env::var("COMPLIANCE_RULES_PATH") {
            config.rules_path = PathBuf::from(path);
        }

        if let Ok(flag) = std::env::var("COMPLIANCE_FALLBACK_ON_MALFORMED") {
            config.fallback_on_malformed = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    return Err(crate::ComplianceError::Config(format!(
                        "COMPLIANCE_FALLBACK_ON_MALFORMED must be a boolean, got {:?}",
                        other
                    )))
                }
            };
        }

        Ok(config)
    }
}

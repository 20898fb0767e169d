//! Rule registry
//!
//! Rules are descriptive metadata keyed by rule id. The checks that enforce
//! them live in [`crate::checks`].

use crate::error::{ComplianceError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Rule id of the active-status rule
pub const ACTIVE_STATUS_RULE: &str = "ECOSOC_RULE_1";

/// Rule id of the annual-review rule
pub const ANNUAL_REVIEW_RULE: &str = "ECOSOC_RULE_2";

/// Rule severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
}

impl Severity {
    /// Wire name of the severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

/// Rule metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleDefinition {
    /// Human-readable rule name
    pub name: String,

    /// What the rule requires
    pub description: String,

    /// Severity classification
    pub severity: Severity,
}

/// Rule id -> rule metadata. Never empty.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RuleRegistry {
    rules: BTreeMap<String, RuleDefinition>,
}

impl RuleRegistry {
    /// Built-in registry used when no rule document can be read
    pub fn default_rules() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            ACTIVE_STATUS_RULE.to_string(),
            RuleDefinition {
                name: "Active Status Check".to_string(),
                description: "Fund must have active compliance status".to_string(),
                severity: Severity::High,
            },
        );
        Self { rules }
    }

    /// Parse a YAML rule document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content)
            .map(|rules| Self { rules })
            .map_err(|reason| ComplianceError::MalformedRules {
                path: PathBuf::from("<inline>"),
                reason,
            })
    }

    /// Load the rule document at `path`.
    ///
    /// An unreadable document yields [`RuleRegistry::default_rules`]. A readable
    /// but malformed one (including non UTF-8 content) is an error unless
    /// `fallback_on_malformed` is set.
    pub fn load(path: impl AsRef<Path>, fallback_on_malformed: bool) -> Result<Self> {
        let path = path.as_ref();

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    "Rule document {} unavailable ({}), using default rules",
                    path.display(),
                    e
                );
                return Ok(Self::default_rules());
            }
        };

        let parsed = String::from_utf8(bytes)
            .map_err(|e| format!("invalid UTF-8: {}", e))
            .and_then(|content| Self::parse(&content));

        match parsed {
            Ok(rules) => {
                let registry = Self { rules };
                info!("Loaded {} compliance rules from {}", registry.len(), path.display());
                for (id, rule) in registry.iter() {
                    debug!("Rule {} [{}]: {}", id, rule.severity.as_str(), rule.name);
                }
                Ok(registry)
            }
            Err(reason) if fallback_on_malformed => {
                warn!(
                    "Rule document {} is malformed ({}), using default rules",
                    path.display(),
                    reason
                );
                Ok(Self::default_rules())
            }
            Err(reason) => Err(ComplianceError::MalformedRules {
                path: path.to_path_buf(),
                reason,
            }),
        }
    }

    fn parse(content: &str) -> std::result::Result<BTreeMap<String, RuleDefinition>, String> {
        let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        if value.is_null() {
            return Err("document is empty".to_string());
        }

        let rules: BTreeMap<String, RuleDefinition> =
            serde_yaml::from_value(value).map_err(|e| e.to_string())?;
        if rules.is_empty() {
            return Err("document defines no rules".to_string());
        }

        Ok(rules)
    }

    /// Look up a rule by id
    pub fn get(&self, rule_id: &str) -> Option<&RuleDefinition> {
        self.rules.get(rule_id)
    }

    /// Whether a rule id is registered
    pub fn contains(&self, rule_id: &str) -> bool {
        self.rules.contains_key(rule_id)
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false for a constructed registry
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleDefinition)> {
        self.rules.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    /// Rule ids in order
    pub fn ids(&self) -> Vec<&str> {
        self.iter().map(|(id, _)| id).collect()
    }
}

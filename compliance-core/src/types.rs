//! Record, result and report types

use crate::error::{ComplianceError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fund status snapshot. Only `fund_id`, `compliance_status` and
/// `last_review_date` are read; other keys are carried untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ComplianceRecord(Map<String, Value>);

impl ComplianceRecord {
    /// Empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object
    pub fn from_json_str(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(ComplianceError::InvalidRecord(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
            Err(e) => Err(ComplianceError::InvalidRecord(e.to_string())),
        }
    }

    /// Set a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw field lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `fund_id` field
    pub fn fund_id(&self) -> Option<&Value> {
        self.get("fund_id")
    }

    /// `compliance_status` field
    pub fn compliance_status(&self) -> Option<&Value> {
        self.get("compliance_status")
    }

    /// `last_review_date` field
    pub fn last_review_date(&self) -> Option<&Value> {
        self.get("last_review_date")
    }
}

impl From<Map<String, Value>> for ComplianceRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ComplianceRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A record's failure against one rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    /// Rule id
    pub rule: String,
    /// What went wrong
    pub description: String,
}

impl Violation {
    /// Create a violation
    pub fn new(rule: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            description: description.into(),
        }
    }
}

/// Outcome of validating one record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    /// True iff there are no violations
    pub is_compliant: bool,
    /// Violations in detection order
    pub violations: Vec<Violation>,
    /// Input `fund_id`, verbatim
    pub fund_id: Option<Value>,
    /// When the validation ran
    pub timestamp: DateTime<Utc>,
}

/// Engine-level compliance snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceReport {
    /// Engine construction time
    pub timestamp: DateTime<Utc>,
    /// Placeholder score
    pub compliance_score: f64,
    /// Always empty; not fed by validation history
    pub violations: Vec<Violation>,
    /// Number of registered rules
    pub rules_checked: usize,
    /// Overall status
    pub status: String,
}

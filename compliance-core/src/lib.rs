//! Fund compliance core
//!
//! Rule-based compliance checks for fund status snapshots.
//!
//! # Architecture
//!
//! - **Registry**: rule metadata loaded once from a YAML document, immutable afterwards
//! - **Checks**: built-in active-status and annual-review checks
//! - **Results**: per-record validation results and an engine-level status report
//!
//! Malformed record fields never raise; they surface as violations.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

pub mod checks;
pub mod config;
pub mod error;
pub mod rules;
pub mod types;
pub mod validator;

// Re-exports
pub use config::Config;
pub use error::{ComplianceError, Result};
pub use rules::{RuleDefinition, RuleRegistry, Severity};
pub use types::{ComplianceRecord, ComplianceReport, ValidationResult, Violation};
pub use validator::ComplianceValidator;

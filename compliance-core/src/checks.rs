//! Built-in compliance checks
//!
//! The thresholds here are fixed; rule metadata in the registry does not
//! change them.

use crate::rules::{ACTIVE_STATUS_RULE, ANNUAL_REVIEW_RULE};
use crate::types::{ComplianceRecord, Violation};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;

/// Status literal a compliant fund must carry
pub const ACTIVE_STATUS: &str = "ACTIVE";

/// Longest allowed gap between reviews, in days
pub const REVIEW_WINDOW_DAYS: i64 = 365;

/// Accepted `last_review_date` format
pub const REVIEW_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parsed `last_review_date`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDate {
    /// Valid calendar date
    Parsed(NaiveDate),
    /// Missing, not a string, or not `YYYY-MM-DD`
    Invalid,
}

impl ReviewDate {
    /// Interpret a raw record field
    pub fn from_field(field: Option<&Value>) -> Self {
        match field.and_then(Value::as_str) {
            Some(raw) if has_date_shape(raw) => NaiveDate::parse_from_str(raw, REVIEW_DATE_FORMAT)
                .map(ReviewDate::Parsed)
                .unwrap_or(ReviewDate::Invalid),
            _ => ReviewDate::Invalid,
        }
    }
}

// Exactly `DDDD-DD-DD`; chrono alone accepts signs, padding and short years.
fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Violation if `compliance_status` is not exactly `ACTIVE`
pub fn check_active_status(record: &ComplianceRecord) -> Option<Violation> {
    match record.compliance_status().and_then(Value::as_str) {
        Some(ACTIVE_STATUS) => None,
        _ => Some(Violation::new(
            ACTIVE_STATUS_RULE,
            "Fund is not in active compliance status",
        )),
    }
}

/// Violation if the last review is unparsable or older than the review window
pub fn check_review_recency(record: &ComplianceRecord, now: DateTime<Utc>) -> Option<Violation> {
    match ReviewDate::from_field(record.last_review_date()) {
        ReviewDate::Parsed(date) => {
            (days_since(date, now) > REVIEW_WINDOW_DAYS)
                .then(|| Violation::new(ANNUAL_REVIEW_RULE, "Annual review overdue"))
        }
        ReviewDate::Invalid => Some(Violation::new(ANNUAL_REVIEW_RULE, "Invalid last review date")),
    }
}

/// Whole days from midnight of `date` to `now`
fn days_since(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (now.naive_utc() - date.and_time(NaiveTime::MIN)).num_days()
}

/// Run every built-in check in order
pub fn run_all(record: &ComplianceRecord, now: DateTime<Utc>) -> Vec<Violation> {
    [check_active_status(record), check_review_recency(record, now)]
        .into_iter()
        .flatten()
        .collect()
}

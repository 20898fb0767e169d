//! Property-based tests for validation invariants
//!
//! - Active, recently reviewed funds are always compliant
//! - Any status other than the exact `ACTIVE` literal is a violation
//! - Stale reviews are overdue, unparsable dates are invalid
//! - The report ignores validation history

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use compliance_core::{ComplianceRecord, ComplianceValidator, RuleRegistry};
use proptest::prelude::*;
use serde_json::{json, Value};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
}

fn validator() -> ComplianceValidator {
    ComplianceValidator::with_registry(RuleRegistry::default_rules())
}

fn review_date(days_ago: i64) -> String {
    (now().date_naive() - Duration::days(days_ago))
        .format("%Y-%m-%d")
        .to_string()
}

fn record(status: Option<Value>, date: Option<Value>) -> ComplianceRecord {
    let mut record = ComplianceRecord::new();
    record.insert("fund_id", "PROP");
    if let Some(status) = status {
        record.insert("compliance_status", status);
    }
    if let Some(date) = date {
        record.insert("last_review_date", date);
    }
    record
}

/// Status values that are not exactly `ACTIVE`
fn inactive_status_strategy() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        Just(Some(json!("active"))),
        Just(Some(json!("ACTIVE "))),
        any::<bool>().prop_map(|b| Some(json!(b))),
        "[A-Z_]{0,12}"
            .prop_filter("not ACTIVE", |s| s != "ACTIVE")
            .prop_map(|s| Some(json!(s))),
    ]
}

/// Date fields that do not parse as `YYYY-MM-DD`
fn invalid_date_strategy() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        any::<i64>().prop_map(|n| Some(json!(n))),
        "[a-z ]{0,10}".prop_map(|s| Some(json!(s))),
        (1u32..=28, 1u32..=12, 2000i32..2024)
            .prop_map(|(d, m, y)| Some(json!(format!("{:02}/{:02}/{}", d, m, y)))),
        (prop::sample::select(vec![" ", "+", "-", "0"]), 0i64..364)
            .prop_map(|(prefix, days_ago)| Some(json!(format!("{}{}", prefix, review_date(days_ago))))),
        (0i64..364).prop_map(|days_ago| Some(json!(review_date(days_ago)[2..].to_string()))),
    ]
}

proptest! {
    #[test]
    fn prop_recent_active_fund_is_compliant(days_ago in 0i64..=364) {
        let rec = record(Some(json!("ACTIVE")), Some(json!(review_date(days_ago))));
        let result = validator().validate_compliance_at(&rec, now());
        prop_assert!(result.is_compliant);
        prop_assert!(result.violations.is_empty());
    }

    #[test]
    fn prop_inactive_status_is_flagged(status in inactive_status_strategy()) {
        let rec = record(status, Some(json!(review_date(10))));
        let result = validator().validate_compliance_at(&rec, now());
        prop_assert!(!result.is_compliant);
        prop_assert_eq!(result.violations.len(), 1);
        prop_assert_eq!(result.violations[0].rule.as_str(), "ECOSOC_RULE_1");
    }

    #[test]
    fn prop_stale_review_is_overdue(days_ago in 366i64..20_000) {
        let rec = record(Some(json!("ACTIVE")), Some(json!(review_date(days_ago))));
        let result = validator().validate_compliance_at(&rec, now());
        prop_assert_eq!(result.violations.len(), 1);
        prop_assert_eq!(result.violations[0].rule.as_str(), "ECOSOC_RULE_2");
        prop_assert_eq!(result.violations[0].description.as_str(), "Annual review overdue");
    }

    #[test]
    fn prop_unparsable_date_is_invalid(date in invalid_date_strategy()) {
        let rec = record(Some(json!("ACTIVE")), date);
        let result = validator().validate_compliance_at(&rec, now());
        prop_assert_eq!(result.violations.len(), 1);
        prop_assert_eq!(result.violations[0].rule.as_str(), "ECOSOC_RULE_2");
        prop_assert_eq!(result.violations[0].description.as_str(), "Invalid last review date");
    }

    #[test]
    fn prop_report_ignores_history(statuses in prop::collection::vec(inactive_status_strategy(), 0..10)) {
        let v = validator();
        let baseline = v.generate_compliance_report();
        for status in statuses {
            v.validate_compliance(&record(status, None));
        }

        let report = v.generate_compliance_report();
        prop_assert_eq!(&report, &baseline);
        prop_assert_eq!(report.status.as_str(), "COMPLIANT");
        prop_assert_eq!(report.compliance_score, 0.95);
        prop_assert!(report.violations.is_empty());
        prop_assert_eq!(report.rules_checked, v.get_compliance_rules().len());
    }
}

#[test]
fn test_review_date_helper_is_calendar_date() {
    let date = NaiveDate::parse_from_str(&review_date(0), "%Y-%m-%d").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
}

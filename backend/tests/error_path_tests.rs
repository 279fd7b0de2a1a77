//! Boundary-error behavior: every failure is detected before computation
//! runs, and degenerate-but-valid inputs never fail.

mod support;

use chrono::Weekday;
use noshow_rust::api::RiskQuery;
use noshow_rust::error::EngineError;
use noshow_rust::models::{Dataset, FilterSpec};
use noshow_rust::{aggregate, estimate_risk, filter_records};
use support::{clinic_month, worked_scenario};

#[test]
fn test_empty_history_is_rejected_at_construction() {
    assert_eq!(Dataset::new(vec![]), Err(EngineError::EmptyHistory));
}

#[test]
fn test_inverted_range_fails_aggregate_and_filter() {
    let dataset = worked_scenario();
    let filter = FilterSpec::new(
        "2024-02-01".parse().unwrap(),
        "2024-01-01".parse().unwrap(),
        dataset.distinct_statuses(),
    );

    let expected = EngineError::InvalidFilter {
        start: "2024-02-01".parse().unwrap(),
        end: "2024-01-01".parse().unwrap(),
    };
    assert_eq!(aggregate(&dataset, &filter), Err(expected.clone()));
    assert_eq!(filter_records(&dataset, &filter), Err(expected));
}

#[test]
fn test_no_partial_result_alongside_error() {
    // An invalid filter fails outright; the Err carries the offending
    // bounds and nothing else.
    let dataset = clinic_month();
    let filter = FilterSpec::new(
        "2024-12-31".parse().unwrap(),
        "2024-01-01".parse().unwrap(),
        vec![],
    );
    let err = aggregate(&dataset, &filter).expect_err("inverted range");
    assert!(matches!(err, EngineError::InvalidFilter { .. }));
}

#[test]
fn test_empty_selection_is_not_an_error() {
    let dataset = worked_scenario();
    let filter = FilterSpec::new(
        "2030-01-01".parse().unwrap(),
        "2030-12-31".parse().unwrap(),
        dataset.distinct_statuses(),
    );
    let result = aggregate(&dataset, &filter).expect("empty selection is valid");
    assert_eq!(result.metrics.total, 0);
    assert_eq!(result.metrics.no_show_rate, 0.0);
}

#[test]
fn test_unknown_query_values_are_not_an_error() {
    let estimate = estimate_risk(
        &worked_scenario(),
        &RiskQuery::new(Weekday::Sun, "A reason nobody ever gave"),
    )
    .expect("fallback makes the estimator total");
    assert!(estimate.cohort_level.is_fallback());
    assert!(estimate.cohort_size > 0);
}

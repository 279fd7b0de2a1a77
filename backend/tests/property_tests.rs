//! Property-based coverage of the aggregation and estimation invariants,
//! over arbitrary datasets, filters, and queries.

use chrono::{Duration, NaiveDate, Weekday};
use noshow_rust::api::RiskQuery;
use noshow_rust::models::{Appointment, AppointmentStatus, Dataset, FilterSpec};
use noshow_rust::{aggregate, estimate_risk};
use proptest::prelude::*;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid base date")
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..365).prop_map(|offset| base_date() + Duration::days(offset))
}

fn arb_status() -> impl Strategy<Value = AppointmentStatus> {
    prop_oneof![
        Just(AppointmentStatus::Scheduled),
        Just(AppointmentStatus::NoShow),
        Just(AppointmentStatus::Cancelled),
        Just(AppointmentStatus::Other("Walk-in".to_string())),
    ]
}

fn arb_reason() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Checkup".to_string()),
        Just("Follow-up".to_string()),
        Just("Consultation".to_string()),
        Just("Vaccination".to_string()),
    ]
}

fn arb_appointment() -> impl Strategy<Value = Appointment> {
    (arb_date(), arb_status(), arb_reason())
        .prop_map(|(date, status, reason)| Appointment::new(date, status, reason))
}

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    proptest::collection::vec(arb_appointment(), 1..60)
        .prop_map(|records| Dataset::new(records).expect("generated dataset is non-empty"))
}

fn arb_valid_filter() -> impl Strategy<Value = FilterSpec> {
    (
        arb_date(),
        arb_date(),
        proptest::collection::vec(arb_status(), 0..5),
    )
        .prop_map(|(a, b, statuses)| FilterSpec::new(a.min(b), a.max(b), statuses))
}

fn arb_query() -> impl Strategy<Value = RiskQuery> {
    (0usize..7, arb_reason()).prop_map(|(day, reason)| RiskQuery::new(WEEKDAYS[day], reason))
}

proptest! {
    #[test]
    fn prop_status_counts_sum_to_total(dataset in arb_dataset(), filter in arb_valid_filter()) {
        let result = aggregate(&dataset, &filter).expect("valid filter");
        let sum: usize = result.status_counts.iter().map(|c| c.count).sum();
        prop_assert_eq!(sum, result.metrics.total);
        prop_assert_eq!(result.records.len(), result.metrics.total);
    }

    #[test]
    fn prop_no_show_rate_is_bounded(dataset in arb_dataset(), filter in arb_valid_filter()) {
        let result = aggregate(&dataset, &filter).expect("valid filter");
        prop_assert!((0.0..=1.0).contains(&result.metrics.no_show_rate));
        if result.metrics.total == 0 {
            prop_assert_eq!(result.metrics.no_show_rate, 0.0);
        }
    }

    #[test]
    fn prop_reason_breakdown_sums_to_no_shows(
        dataset in arb_dataset(),
        filter in arb_valid_filter(),
    ) {
        let result = aggregate(&dataset, &filter).expect("valid filter");
        let breakdown_sum: usize = result.reason_breakdown.iter().map(|r| r.count).sum();
        prop_assert_eq!(breakdown_sum, result.metrics.no_show_count);
    }

    #[test]
    fn prop_aggregate_is_idempotent(dataset in arb_dataset(), filter in arb_valid_filter()) {
        let first = aggregate(&dataset, &filter).expect("valid filter");
        let second = aggregate(&dataset, &filter).expect("valid filter");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_trend_is_strictly_ascending(dataset in arb_dataset(), filter in arb_valid_filter()) {
        let result = aggregate(&dataset, &filter).expect("valid filter");
        for pair in result.trend.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn prop_estimator_is_total_on_nonempty_history(
        dataset in arb_dataset(),
        query in arb_query(),
    ) {
        let estimate = estimate_risk(&dataset, &query).expect("non-empty history");
        prop_assert!((0.0..=1.0).contains(&estimate.probability));
        prop_assert!(estimate.cohort_size > 0);
        prop_assert!(estimate.no_show_count <= estimate.cohort_size);
    }

    #[test]
    fn prop_fallback_widens_exactly_when_exact_cohort_is_empty(
        dataset in arb_dataset(),
        query in arb_query(),
    ) {
        let exact_cohort_size = dataset
            .records()
            .iter()
            .filter(|r| r.day_of_week() == query.day_of_week && r.reason == query.reason)
            .count();
        let estimate = estimate_risk(&dataset, &query).expect("non-empty history");
        if exact_cohort_size == 0 {
            prop_assert!(estimate.cohort_level.is_fallback());
            prop_assert!(estimate.cohort_size > 0);
        } else {
            prop_assert!(!estimate.cohort_level.is_fallback());
            prop_assert_eq!(estimate.cohort_size, exact_cohort_size);
        }
    }
}

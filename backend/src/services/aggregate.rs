//! Aggregation service for the dashboard.
//!
//! Pure functions over the in-memory dataset: select the records a filter
//! accepts, then derive summary metrics, the status distribution, the
//! no-show reason breakdown, and the per-date trend. Every output order is
//! deterministic, so identical inputs produce identical results.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::api::{AggregateResult, ReasonCount, StatusCount, SummaryMetrics, TrendPoint};
use crate::error::EngineResult;
use crate::models::{Appointment, Dataset, FilterSpec};

/// Select the records the filter accepts, preserving dataset order.
///
/// The returned sequence is what an export collaborator serializes. Fails
/// with `InvalidFilter` on an inverted date range; an empty selection is a
/// valid, empty result.
pub fn filter_records(dataset: &Dataset, filter: &FilterSpec) -> EngineResult<Vec<Appointment>> {
    filter.validate()?;
    Ok(dataset
        .records()
        .iter()
        .filter(|record| filter.accepts(record))
        .cloned()
        .collect())
}

/// Compute summary metrics for a selection.
///
/// An empty selection reports a no-show rate of `0.0` by convention rather
/// than failing.
pub(crate) fn compute_metrics(records: &[Appointment]) -> SummaryMetrics {
    let total = records.len();
    let no_show_count = records.iter().filter(|r| r.is_no_show()).count();
    let no_show_rate = if total > 0 {
        no_show_count as f64 / total as f64
    } else {
        0.0
    };
    SummaryMetrics {
        total,
        no_show_count,
        no_show_rate,
    }
}

/// Count records per status, in the fixed display order: canonical statuses
/// first, then others by first appearance in the selection.
pub(crate) fn compute_status_counts(records: &[Appointment]) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|c| c.status == record.status) {
            Some(entry) => entry.count += 1,
            None => counts.push(StatusCount {
                status: record.status.clone(),
                count: 1,
            }),
        }
    }
    // Stable sort keeps first-appearance order among non-canonical statuses.
    counts.sort_by_key(|entry| entry.status.canonical_rank());
    counts
}

/// Count no-show records per visit reason, descending by count with ties
/// broken ascending by reason name.
pub(crate) fn compute_reason_breakdown(records: &[Appointment]) -> Vec<ReasonCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_no_show()) {
        *counts.entry(record.reason.as_str()).or_insert(0) += 1;
    }
    let mut breakdown: Vec<ReasonCount> = counts
        .into_iter()
        .map(|(reason, count)| ReasonCount {
            reason: reason.to_string(),
            count,
        })
        .collect();
    // BTreeMap iteration is ascending by reason; the stable sort preserves
    // that order within equal counts.
    breakdown.sort_by(|a, b| b.count.cmp(&a.count));
    breakdown
}

/// Build the time series: one point per distinct date in the selection,
/// ascending, each carrying per-status counts in the fixed display order.
pub(crate) fn compute_trend(records: &[Appointment]) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, Vec<StatusCount>> = BTreeMap::new();
    for record in records {
        let counts = by_date.entry(record.appointment_date).or_default();
        match counts.iter_mut().find(|c| c.status == record.status) {
            Some(entry) => entry.count += 1,
            None => counts.push(StatusCount {
                status: record.status.clone(),
                count: 1,
            }),
        }
    }
    by_date
        .into_iter()
        .map(|(date, mut counts)| {
            counts.sort_by_key(|entry| entry.status.canonical_rank());
            TrendPoint { date, counts }
        })
        .collect()
}

/// Run the full aggregation for one filter.
///
/// Recomputed on every call; nothing is cached. The result bundles the
/// filtered records with every derived statistic the dashboard renders.
pub fn aggregate(dataset: &Dataset, filter: &FilterSpec) -> EngineResult<AggregateResult> {
    let records = filter_records(dataset, filter)?;
    log::debug!(
        "aggregating {} of {} records for {} .. {}",
        records.len(),
        dataset.len(),
        filter.start,
        filter.end
    );

    let metrics = compute_metrics(&records);
    let status_counts = compute_status_counts(&records);
    let reason_breakdown = compute_reason_breakdown(&records);
    let trend = compute_trend(&records);

    Ok(AggregateResult {
        records,
        metrics,
        status_counts,
        reason_breakdown,
        trend,
    })
}

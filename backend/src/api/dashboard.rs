use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Appointment, AppointmentStatus};

// =========================================================
// Dashboard aggregation types
// =========================================================

/// Headline metrics for the filtered selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total: usize,
    pub no_show_count: usize,
    /// No-show fraction of the selection. By convention this is `0.0` when
    /// the selection is empty; it is never a division by zero.
    pub no_show_rate: f64,
}

/// Count of records carrying one status value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: AppointmentStatus,
    pub count: usize,
}

/// Count of no-show records for one visit reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonCount {
    pub reason: String,
    pub count: usize,
}

/// Per-status counts for one calendar date, one point of the time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Counts in the fixed display order (Scheduled, No-show, Cancelled,
    /// then others); only statuses present on this date appear.
    pub counts: Vec<StatusCount>,
}

/// Complete aggregation result for one filter, recomputed on every call.
///
/// Carries the filtered records themselves alongside the derived statistics
/// so an export collaborator can reuse the selection without re-filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Filtered records in dataset order.
    pub records: Vec<Appointment>,
    pub metrics: SummaryMetrics,
    /// Per-status counts over the selection, fixed display order.
    pub status_counts: Vec<StatusCount>,
    /// No-show counts per reason, descending by count, ties ascending by
    /// reason name.
    pub reason_breakdown: Vec<ReasonCount>,
    /// One point per distinct date in the selection, ascending.
    pub trend: Vec<TrendPoint>,
}

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::config::RiskBands;

// =========================================================
// Risk estimation types
// =========================================================

/// A no-show risk question: how likely is a patient to miss an appointment
/// on this day of the week, for this visit reason?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskQuery {
    pub day_of_week: Weekday,
    /// Visit reason, matched exactly against historical records. May be a
    /// value that never occurs in the data.
    pub reason: String,
}

impl RiskQuery {
    pub fn new(day_of_week: Weekday, reason: impl Into<String>) -> Self {
        Self {
            day_of_week,
            reason: reason.into(),
        }
    }
}

/// Which cohort backed an estimate. Tiers widen from an exact
/// (day, reason) match down to the whole history, so callers can
/// communicate confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CohortLevel {
    /// Records matching both the day of week and the reason.
    Exact,
    /// Records matching the reason on any day.
    ReasonOnly,
    /// Records matching the day of week with any reason.
    DayOnly,
    /// Every record in the history.
    Overall,
}

impl CohortLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CohortLevel::Exact => "exact",
            CohortLevel::ReasonOnly => "reason-only",
            CohortLevel::DayOnly => "day-only",
            CohortLevel::Overall => "overall",
        }
    }

    /// True for every tier coarser than an exact match.
    pub fn is_fallback(&self) -> bool {
        !matches!(self, CohortLevel::Exact)
    }
}

impl std::fmt::Display for CohortLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative risk classification of a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    High,
    Moderate,
    Low,
}

impl RiskBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::High => "high",
            RiskBand::Moderate => "moderate",
            RiskBand::Low => "low",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Historical-frequency no-show estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    /// No-show fraction of the backing cohort, in `[0, 1]`.
    pub probability: f64,
    /// Number of historical records backing the estimate. Always positive.
    pub cohort_size: usize,
    /// No-show records within the cohort.
    pub no_show_count: usize,
    /// Tier the estimate was computed at.
    pub cohort_level: CohortLevel,
}

impl RiskEstimate {
    /// Classify the probability against configured thresholds. Bounds are
    /// exclusive: a probability exactly at a threshold falls in the band
    /// below it.
    pub fn band(&self, bands: &RiskBands) -> RiskBand {
        if self.probability > bands.high {
            RiskBand::High
        } else if self.probability > bands.moderate {
            RiskBand::Moderate
        } else {
            RiskBand::Low
        }
    }
}

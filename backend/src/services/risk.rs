//! No-show risk estimation.
//!
//! The estimate is a historical conditional frequency, not a model: the
//! no-show fraction of the records matching the query's (day of week,
//! reason) pair. When the exact cohort is empty the estimator widens the
//! match one step at a time and reports which tier produced the value, so a
//! display layer can qualify the number's confidence.

use crate::api::{CohortLevel, RiskEstimate, RiskQuery};
use crate::error::{EngineError, EngineResult};
use crate::models::{Appointment, Dataset};

fn cohort_estimate(cohort: &[&Appointment], cohort_level: CohortLevel) -> Option<RiskEstimate> {
    if cohort.is_empty() {
        return None;
    }
    let cohort_size = cohort.len();
    let no_show_count = cohort.iter().filter(|r| r.is_no_show()).count();
    Some(RiskEstimate {
        probability: no_show_count as f64 / cohort_size as f64,
        cohort_size,
        no_show_count,
        cohort_level,
    })
}

/// Estimate the no-show probability for a (day of week, reason) query.
///
/// Cohorts widen until one is non-empty: exact match, then reason-only,
/// then day-only, then the full history. A non-empty dataset therefore
/// always yields an estimate; `EmptyHistory` is only possible if an empty
/// record collection reaches this function, which dataset construction
/// already prevents.
pub fn estimate_risk(dataset: &Dataset, query: &RiskQuery) -> EngineResult<RiskEstimate> {
    let records = dataset.records();
    if records.is_empty() {
        return Err(EngineError::EmptyHistory);
    }

    let exact: Vec<&Appointment> = records
        .iter()
        .filter(|r| r.day_of_week() == query.day_of_week && r.reason == query.reason)
        .collect();
    if let Some(estimate) = cohort_estimate(&exact, CohortLevel::Exact) {
        return Ok(estimate);
    }

    let by_reason: Vec<&Appointment> = records
        .iter()
        .filter(|r| r.reason == query.reason)
        .collect();
    if let Some(estimate) = cohort_estimate(&by_reason, CohortLevel::ReasonOnly) {
        log::debug!(
            "no exact history for ({:?}, {}), widened to reason-only",
            query.day_of_week,
            query.reason
        );
        return Ok(estimate);
    }

    let by_day: Vec<&Appointment> = records
        .iter()
        .filter(|r| r.day_of_week() == query.day_of_week)
        .collect();
    if let Some(estimate) = cohort_estimate(&by_day, CohortLevel::DayOnly) {
        log::debug!(
            "no history for reason '{}', widened to day-only",
            query.reason
        );
        return Ok(estimate);
    }

    let overall: Vec<&Appointment> = records.iter().collect();
    log::debug!(
        "no history for ({:?}, {}) at any narrower tier, using overall rate",
        query.day_of_week,
        query.reason
    );
    cohort_estimate(&overall, CohortLevel::Overall).ok_or(EngineError::EmptyHistory)
}

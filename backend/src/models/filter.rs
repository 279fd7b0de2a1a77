//! Filter specification for the aggregator.
//!
//! A filter is a value object: an inclusive date range plus the set of
//! accepted statuses. An inverted range is an error; an empty status set is
//! valid and simply selects nothing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::dataset::Dataset;

/// Record-selection criteria: inclusive `[start, end]` date range and the
/// set of statuses to keep. Duplicates in `statuses` are harmless; only
/// membership matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub statuses: Vec<AppointmentStatus>,
}

impl FilterSpec {
    pub fn new(start: NaiveDate, end: NaiveDate, statuses: Vec<AppointmentStatus>) -> Self {
        Self {
            start,
            end,
            statuses,
        }
    }

    /// The widest filter for a dataset: its full date span and every status
    /// present. Mirrors the default state of a dashboard's filter controls.
    pub fn spanning(dataset: &Dataset) -> Self {
        let (start, end) = dataset.date_span();
        Self::new(start, end, dataset.distinct_statuses())
    }

    /// Reject inverted date ranges. Callers surface the error rather than
    /// silently swapping the bounds.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start > self.end {
            return Err(EngineError::InvalidFilter {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Whether a record passes both the date range and the status set.
    pub fn accepts(&self, appointment: &Appointment) -> bool {
        appointment.appointment_date >= self.start
            && appointment.appointment_date <= self.end
            && self.statuses.contains(&appointment.status)
    }
}

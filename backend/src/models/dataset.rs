//! The in-memory appointments dataset.
//!
//! The dataset is loaded once, lives for the session, and is never mutated:
//! every computation takes it by reference and produces fresh values. The
//! constructor is the single place where emptiness is rejected, so all
//! downstream accessors can rely on at least one record being present.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::appointment::{Appointment, AppointmentStatus};

/// Ordered, immutable collection of appointment records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Appointment>,
    source_checksum: Option<String>,
}

impl Dataset {
    /// Build a dataset from records, rejecting an empty history at the load
    /// boundary so downstream computation never has to.
    pub fn new(records: Vec<Appointment>) -> EngineResult<Self> {
        if records.is_empty() {
            return Err(EngineError::EmptyHistory);
        }
        Ok(Self {
            records,
            source_checksum: None,
        })
    }

    /// Build a dataset carrying the hex SHA-256 checksum of the source bytes
    /// it was loaded from, for provenance reporting.
    pub fn with_checksum(records: Vec<Appointment>, checksum: String) -> EngineResult<Self> {
        let mut dataset = Self::new(records)?;
        dataset.source_checksum = Some(checksum);
        Ok(dataset)
    }

    pub fn records(&self) -> &[Appointment] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source_checksum(&self) -> Option<&str> {
        self.source_checksum.as_deref()
    }

    /// Earliest and latest appointment dates, inclusive. Used by display
    /// layers to bound date-range controls.
    pub fn date_span(&self) -> (NaiveDate, NaiveDate) {
        let mut min = self.records[0].appointment_date;
        let mut max = min;
        for record in &self.records[1..] {
            if record.appointment_date < min {
                min = record.appointment_date;
            }
            if record.appointment_date > max {
                max = record.appointment_date;
            }
        }
        (min, max)
    }

    /// Distinct statuses present in the data, in the fixed display order:
    /// canonical statuses first, then others by first appearance.
    pub fn distinct_statuses(&self) -> Vec<AppointmentStatus> {
        let mut statuses: Vec<AppointmentStatus> = Vec::new();
        for record in &self.records {
            if !statuses.contains(&record.status) {
                statuses.push(record.status.clone());
            }
        }
        statuses.sort_by_key(|status| status.canonical_rank());
        statuses
    }

    /// Distinct visit reasons present in the data, sorted ascending. Used by
    /// display layers to populate reason selectors deterministically.
    pub fn distinct_reasons(&self) -> Vec<String> {
        let mut reasons: Vec<String> = self
            .records
            .iter()
            .map(|record| record.reason.clone())
            .collect();
        reasons.sort();
        reasons.dedup();
        reasons
    }

    /// No-show fraction over the full history. This is the coarsest fallback
    /// tier of the risk estimator.
    pub fn overall_no_show_rate(&self) -> f64 {
        let no_shows = self.records.iter().filter(|r| r.is_no_show()).count();
        no_shows as f64 / self.records.len() as f64
    }
}

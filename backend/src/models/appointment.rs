//! Appointment record and status types.
//!
//! An appointment is one row of the historical dataset: a calendar date, an
//! attendance status, and a free-text visit reason. The day of week is a
//! derived attribute, computed on demand from the date, never stored.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Attendance status of an appointment.
///
/// The source data carries a small canonical set of values but is an open
/// string enum in practice: unknown values are preserved verbatim in
/// [`AppointmentStatus::Other`] and round-trip through serialization
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    Scheduled,
    NoShow,
    Cancelled,
    Other(String),
}

impl AppointmentStatus {
    /// The canonical statuses in their fixed display order. Values outside
    /// this set sort after it, in order of first appearance.
    pub const CANONICAL: [AppointmentStatus; 3] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::NoShow,
        AppointmentStatus::Cancelled,
    ];

    /// Parse a status value from source data. Matching is case-insensitive
    /// and tolerant of the common spelling variants; anything unrecognized
    /// becomes [`AppointmentStatus::Other`] with the trimmed original text.
    /// This never fails: the status column is an open enum.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "scheduled" => AppointmentStatus::Scheduled,
            "no-show" | "no show" | "noshow" => AppointmentStatus::NoShow,
            "cancelled" | "canceled" => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Other(trimmed.to_string()),
        }
    }

    /// Canonical display string, matching the source data's spelling.
    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::NoShow => "No-show",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Other(value) => value,
        }
    }

    /// Sort rank for the fixed display order: Scheduled, No-show, Cancelled,
    /// then any others.
    pub fn canonical_rank(&self) -> usize {
        match self {
            AppointmentStatus::Scheduled => 0,
            AppointmentStatus::NoShow => 1,
            AppointmentStatus::Cancelled => 2,
            AppointmentStatus::Other(_) => 3,
        }
    }

    pub fn is_no_show(&self) -> bool {
        matches!(self, AppointmentStatus::NoShow)
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AppointmentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if value.trim().is_empty() {
            return Err(de::Error::custom("status must not be empty"));
        }
        Ok(AppointmentStatus::parse(&value))
    }
}

/// One row of the appointments dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Calendar date of the appointment.
    pub appointment_date: NaiveDate,
    /// Attendance status.
    pub status: AppointmentStatus,
    /// Visit reason, as recorded in the source data.
    pub reason: String,
}

impl Appointment {
    pub fn new(
        appointment_date: NaiveDate,
        status: AppointmentStatus,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            appointment_date,
            status,
            reason: reason.into(),
        }
    }

    /// Day of week, derived from the appointment date.
    pub fn day_of_week(&self) -> Weekday {
        self.appointment_date.weekday()
    }

    pub fn is_no_show(&self) -> bool {
        self.status.is_no_show()
    }
}

/// Full English day name for a weekday, as displayed to users.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

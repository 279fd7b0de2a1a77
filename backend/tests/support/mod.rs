//! Shared fixtures for integration tests.

use noshow_rust::models::{Appointment, AppointmentStatus, Dataset};

/// Build an appointment from literal pieces.
pub fn appointment(date: &str, status: &str, reason: &str) -> Appointment {
    Appointment::new(
        date.parse().expect("valid fixture date"),
        AppointmentStatus::parse(status),
        reason,
    )
}

/// The worked three-record scenario: two Monday checkups (2024-01-01
/// missed, 2024-01-08 kept) and a Tuesday follow-up no-show (2024-01-02).
pub fn worked_scenario() -> Dataset {
    Dataset::new(vec![
        appointment("2024-01-01", "No-show", "Checkup"),
        appointment("2024-01-08", "Scheduled", "Checkup"),
        appointment("2024-01-02", "No-show", "Follow-up"),
    ])
    .expect("non-empty fixture")
}

/// A fuller month of history with every canonical status, an off-canon
/// status value, and several reasons.
pub fn clinic_month() -> Dataset {
    Dataset::new(vec![
        appointment("2024-03-01", "Scheduled", "Checkup"),
        appointment("2024-03-01", "No-show", "Checkup"),
        appointment("2024-03-04", "Cancelled", "Vaccination"),
        appointment("2024-03-05", "No-show", "Follow-up"),
        appointment("2024-03-05", "Scheduled", "Follow-up"),
        appointment("2024-03-08", "Walk-in", "Checkup"),
        appointment("2024-03-11", "No-show", "Checkup"),
        appointment("2024-03-12", "Scheduled", "Consultation"),
        appointment("2024-03-15", "No-show", "Vaccination"),
        appointment("2024-03-18", "Scheduled", "Checkup"),
    ])
    .expect("non-empty fixture")
}

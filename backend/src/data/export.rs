//! CSV export of a filtered record selection.
//!
//! The download collaborator's input: the exported columns mirror the
//! loader's schema (ISO dates, canonical status spellings), so an exported
//! file re-loads cleanly.

use std::io::Write;

use crate::data::loader::{DATE_COLUMN, REASON_COLUMN, STATUS_COLUMN};
use crate::models::Appointment;

/// Result type for CSV export.
pub type ExportResult<T> = Result<T, ExportError>;

/// Error type for CSV export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV export: {0}")]
    Io(#[from] std::io::Error),

    #[error("exported CSV is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Write records as CSV, header included, in the order given.
pub fn export_csv<W: Write>(records: &[Appointment], writer: W) -> ExportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([DATE_COLUMN, STATUS_COLUMN, REASON_COLUMN])?;
    for record in records {
        csv_writer.write_record([
            record.appointment_date.to_string().as_str(),
            record.status.as_str(),
            record.reason.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render records as a CSV string, ready to hand to a download control.
pub fn export_csv_string(records: &[Appointment]) -> ExportResult<String> {
    let mut buffer = Vec::new();
    export_csv(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

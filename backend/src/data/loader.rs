//! CSV ingestion for the appointments dataset.
//!
//! The loader owns row validation: each row either becomes a typed
//! [`Appointment`] or is quarantined with its line number and a reason.
//! Quarantined rows are diagnostics, not errors; the load only fails when
//! the file cannot be read at all, a required column is missing, or no
//! valid row remains. A SHA-256 checksum of the source bytes is carried on
//! the dataset for provenance.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use crate::models::{Appointment, AppointmentStatus, Dataset};

/// Required column headers, matched case-insensitively.
pub const DATE_COLUMN: &str = "appointment_date";
pub const STATUS_COLUMN: &str = "status";
pub const REASON_COLUMN: &str = "reason_for_visit";

/// Accepted date formats, tried in order; first match wins.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type for dataset loading. `Empty` is the load-boundary surface of
/// the engine's empty-history condition.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("no valid appointment rows in {path}")]
    Empty { path: PathBuf },
}

/// A rejected source row and why it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarantinedRow {
    /// 1-based line number in the source file.
    pub line: u64,
    pub reason: String,
}

/// Accounting for one load: how many rows were seen, kept, and quarantined.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub rows_read: usize,
    pub rows_loaded: usize,
    pub quarantined: Vec<QuarantinedRow>,
    /// Hex SHA-256 of the source bytes.
    pub source_checksum: String,
}

/// A loaded dataset plus its load report.
#[derive(Debug)]
pub struct LoadOutcome {
    pub dataset: Dataset,
    pub report: LoadReport,
}

/// Hex SHA-256 checksum of raw source bytes.
pub fn source_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

/// Load the appointments file at `path`.
pub fn load_appointments(path: &Path) -> LoadResult<LoadOutcome> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_appointments_from_bytes(&bytes, path)
}

fn load_appointments_from_bytes(bytes: &[u8], path: &Path) -> LoadResult<LoadOutcome> {
    let checksum = source_checksum(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let required = [DATE_COLUMN, STATUS_COLUMN, REASON_COLUMN];
    let mut indices = [0usize; 3];
    for (slot, column) in indices.iter_mut().zip(required) {
        *slot = column_index(&headers, column).ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })?;
    }
    let [date_idx, status_idx, reason_idx] = indices;

    let mut records: Vec<Appointment> = Vec::new();
    let mut quarantined: Vec<QuarantinedRow> = Vec::new();
    let mut rows_read = 0usize;

    for row in reader.records() {
        rows_read += 1;
        let record = match row {
            Ok(record) => record,
            Err(source) => {
                let line = source.position().map(|p| p.line()).unwrap_or(0);
                let reason = format!("unreadable row: {source}");
                log::warn!("{}:{line}: quarantined row: {reason}", path.display());
                quarantined.push(QuarantinedRow { line, reason });
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let mut quarantine = |reason: String| {
            log::warn!("{}:{line}: quarantined row: {reason}", path.display());
            quarantined.push(QuarantinedRow { line, reason });
        };

        let date_field = match record.get(date_idx) {
            Some(value) if !value.is_empty() => value,
            _ => {
                quarantine(format!("missing {DATE_COLUMN}"));
                continue;
            }
        };
        let appointment_date = match parse_date(date_field) {
            Some(date) => date,
            None => {
                quarantine(format!("unparseable {DATE_COLUMN} '{date_field}'"));
                continue;
            }
        };

        let status_field = match record.get(status_idx) {
            Some(value) if !value.is_empty() => value,
            _ => {
                quarantine(format!("missing {STATUS_COLUMN}"));
                continue;
            }
        };

        let reason_field = match record.get(reason_idx) {
            Some(value) if !value.is_empty() => value,
            _ => {
                quarantine(format!("missing {REASON_COLUMN}"));
                continue;
            }
        };

        records.push(Appointment::new(
            appointment_date,
            AppointmentStatus::parse(status_field),
            reason_field,
        ));
    }

    let rows_loaded = records.len();
    let dataset = Dataset::with_checksum(records, checksum.clone()).map_err(|_| {
        LoadError::Empty {
            path: path.to_path_buf(),
        }
    })?;

    log::info!(
        "loaded {rows_loaded} of {rows_read} rows from {} ({} quarantined)",
        path.display(),
        quarantined.len()
    );

    Ok(LoadOutcome {
        dataset,
        report: LoadReport {
            rows_read,
            rows_loaded,
            quarantined,
            source_checksum: checksum,
        },
    })
}

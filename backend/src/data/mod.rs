//! File-boundary collaborators: CSV ingestion and export.
//!
//! The engine itself only ever sees typed, validated records; everything
//! about reading and writing files lives here, behind the `csv-loader`
//! feature.

#[cfg(feature = "csv-loader")]
pub mod export;
#[cfg(feature = "csv-loader")]
pub mod loader;

#[cfg(feature = "csv-loader")]
pub use export::{export_csv, export_csv_string, ExportError};
#[cfg(feature = "csv-loader")]
pub use loader::{load_appointments, LoadError, LoadOutcome, LoadReport, QuarantinedRow};

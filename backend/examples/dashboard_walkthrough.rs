//! Example walking through the full analytics flow
//!
//! This example shows how a display layer uses the library to:
//! 1. Build a dataset of typed appointment records
//! 2. Aggregate a filtered selection for the dashboard charts
//! 3. Estimate no-show risk for a (day, reason) pair
//! 4. Export the filtered selection as CSV
//!
//! To run this example:
//! ```bash
//! cargo run --example dashboard_walkthrough
//! ```

use chrono::Weekday;
use noshow_rust::api::RiskQuery;
use noshow_rust::config::RiskBands;
use noshow_rust::data::export_csv_string;
use noshow_rust::models::{weekday_name, Appointment, AppointmentStatus, Dataset, FilterSpec};
use noshow_rust::{aggregate, estimate_risk};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== No-Show Dashboard Walkthrough ===\n");

    // Step 1: Build the dataset. In the real application this comes from
    // `data::load_appointments`, which also validates and quarantines rows.
    println!("1. Building appointment history...");
    let record = |date: &str, status: &str, reason: &str| -> Result<Appointment, chrono::ParseError> {
        Ok(Appointment::new(
            date.parse()?,
            AppointmentStatus::parse(status),
            reason,
        ))
    };
    let dataset = Dataset::new(vec![
        record("2024-01-01", "No-show", "Checkup")?,
        record("2024-01-02", "No-show", "Follow-up")?,
        record("2024-01-05", "Scheduled", "Checkup")?,
        record("2024-01-08", "Scheduled", "Checkup")?,
        record("2024-01-08", "No-show", "Consultation")?,
        record("2024-01-12", "Cancelled", "Follow-up")?,
        record("2024-01-15", "No-show", "Checkup")?,
    ])?;
    let (start, end) = dataset.date_span();
    println!("   {} records, {} to {}\n", dataset.len(), start, end);

    // Step 2: Aggregate with the widest filter, the dashboard's default.
    println!("2. Aggregating the selection...");
    let filter = FilterSpec::spanning(&dataset);
    let result = aggregate(&dataset, &filter)?;
    println!("   Total appointments: {}", result.metrics.total);
    println!("   Missed appointments: {}", result.metrics.no_show_count);
    println!(
        "   No-show rate: {:.1}%\n",
        result.metrics.no_show_rate * 100.0
    );

    println!("   Missed appointments by reason:");
    for entry in &result.reason_breakdown {
        println!("     {} ({})", entry.reason, entry.count);
    }
    println!();

    // Step 3: Ask the estimator about a prospective appointment.
    println!("3. Estimating no-show risk...");
    let query = RiskQuery::new(Weekday::Mon, "Checkup");
    let estimate = estimate_risk(&dataset, &query)?;
    println!(
        "   {} / {}: {:.1}% ({} risk, {} cohort of {} records)\n",
        weekday_name(query.day_of_week),
        query.reason,
        estimate.probability * 100.0,
        estimate.band(&RiskBands::default()),
        estimate.cohort_level,
        estimate.cohort_size
    );

    // Step 4: Hand the filtered selection to the download control.
    println!("4. Exporting the filtered selection...");
    let csv_text = export_csv_string(&result.records)?;
    println!("   {} bytes of CSV, first line:", csv_text.len());
    if let Some(header) = csv_text.lines().next() {
        println!("   {header}");
    }

    println!("\n=== Walkthrough Complete ===");
    Ok(())
}

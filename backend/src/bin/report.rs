//! No-show report binary.
//!
//! Command-line stand-in for the dashboard: loads the appointments CSV,
//! applies the requested filter, and prints the summary metrics, status
//! distribution, no-show reason breakdown, and daily trend. Optionally
//! answers a risk query and exports the filtered selection.
//!
//! # Usage
//!
//! ```bash
//! noshow-report [appointments.csv] \
//!     [--config noshow.toml] \
//!     [--from 2024-01-01] [--to 2024-03-31] \
//!     [--status Scheduled --status No-show] \
//!     [--risk Monday Checkup] \
//!     [--export filtered.csv] \
//!     [--json]
//! ```
//!
//! With no path argument the CSV named by the config file (or the default
//! `data/appointments.csv`) is loaded. With no `--status` the filter keeps
//! every status present in the data; with no `--from`/`--to` it spans the
//! whole history.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Weekday};
use log::info;

use noshow_rust::api::RiskQuery;
use noshow_rust::config::AppConfig;
use noshow_rust::data::{export_csv_string, load_appointments};
use noshow_rust::models::{weekday_name, AppointmentStatus, FilterSpec};
use noshow_rust::services::{aggregate, estimate_risk};

#[derive(Debug, Default)]
struct Args {
    data_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    statuses: Vec<AppointmentStatus>,
    risk: Option<RiskQuery>,
    export_path: Option<PathBuf>,
    json: bool,
}

fn parse_date_arg(value: &str, flag: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("{flag} expects a YYYY-MM-DD date, got '{value}'"))
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(arg) = raw.next() {
        let mut value_of = |flag: &str| {
            raw.next()
                .with_context(|| format!("{flag} expects a value"))
        };
        match arg.as_str() {
            "--config" => args.config_path = Some(PathBuf::from(value_of("--config")?)),
            "--from" => args.from = Some(parse_date_arg(&value_of("--from")?, "--from")?),
            "--to" => args.to = Some(parse_date_arg(&value_of("--to")?, "--to")?),
            "--status" => args
                .statuses
                .push(AppointmentStatus::parse(&value_of("--status")?)),
            "--risk" => {
                let day_text = value_of("--risk")?;
                let day: Weekday = day_text
                    .parse()
                    .ok()
                    .with_context(|| format!("unrecognized day of week '{day_text}'"))?;
                let reason = value_of("--risk")?;
                args.risk = Some(RiskQuery::new(day, reason));
            }
            "--export" => args.export_path = Some(PathBuf::from(value_of("--export")?)),
            "--json" => args.json = true,
            "--help" | "-h" => {
                bail!(
                    "usage: noshow-report [appointments.csv] [--config FILE] \
                     [--from DATE] [--to DATE] [--status NAME]... \
                     [--risk DAY REASON] [--export FILE] [--json]"
                );
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            path if args.data_path.is_none() => args.data_path = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument '{extra}'"),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = AppConfig::load_or_default(args.config_path.as_deref())?;
    let data_path = args.data_path.unwrap_or_else(|| config.data_path.clone());

    info!("loading appointments from {}", data_path.display());
    let outcome = load_appointments(&data_path)?;
    let dataset = &outcome.dataset;
    let report = &outcome.report;

    let (span_start, span_end) = dataset.date_span();
    let filter = FilterSpec::new(
        args.from.unwrap_or(span_start),
        args.to.unwrap_or(span_end),
        if args.statuses.is_empty() {
            dataset.distinct_statuses()
        } else {
            args.statuses
        },
    );

    let result = aggregate(dataset, &filter)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "Appointments: {} loaded, {} quarantined (sha256 {})",
            report.rows_loaded,
            report.quarantined.len(),
            &report.source_checksum[..12]
        );
        println!("History span: {span_start} .. {span_end}");
        println!();
        println!("Summary for {} .. {}", filter.start, filter.end);
        println!("  Total appointments   {}", result.metrics.total);
        println!("  Missed appointments  {}", result.metrics.no_show_count);
        println!(
            "  No-show rate         {:.1}%",
            result.metrics.no_show_rate * 100.0
        );

        println!();
        println!("Status distribution");
        for entry in &result.status_counts {
            println!("  {:<12} {}", entry.status.as_str(), entry.count);
        }

        println!();
        println!("Missed appointments by reason");
        if result.reason_breakdown.is_empty() {
            println!("  (none in selection)");
        }
        for entry in &result.reason_breakdown {
            println!("  {:<20} {}", entry.reason, entry.count);
        }

        println!();
        println!("Daily trend");
        for point in &result.trend {
            let counts: Vec<String> = point
                .counts
                .iter()
                .map(|c| format!("{}={}", c.status.as_str(), c.count))
                .collect();
            println!("  {}  {}", point.date, counts.join(" "));
        }
    }

    if let Some(query) = &args.risk {
        let estimate = estimate_risk(dataset, query)?;
        let band = estimate.band(&config.risk_bands);
        println!();
        println!(
            "Risk of no-show on {} for '{}': {:.1}% ({band} risk)",
            weekday_name(query.day_of_week),
            query.reason,
            estimate.probability * 100.0
        );
        println!(
            "  based on {} records, {} cohort",
            estimate.cohort_size, estimate.cohort_level
        );
    }

    if let Some(export_path) = &args.export_path {
        let csv_text = export_csv_string(&result.records)?;
        std::fs::write(export_path, csv_text)
            .with_context(|| format!("failed to write export to {}", export_path.display()))?;
        info!(
            "exported {} filtered records to {}",
            result.records.len(),
            export_path.display()
        );
    }

    Ok(())
}

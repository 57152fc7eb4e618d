//! Exporting session results.
//!
//! Supports appending result rows to a CSV file and writing the full report
//! as JSON.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing::{debug, info};

use crate::grading::types::Report;

/// One CSV row: a student's result stamped with the report time.
#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    timestamp: DateTime<Utc>,
    student: &'a str,
    percentage: f64,
    grade: &'a str,
}

/// Appends every result in `report` as a row of the CSV file at `path`.
///
/// Creates the file with headers if it does not already exist.
pub fn append_results(path: &Path, report: &Report) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending CSV results");

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    for r in &report.results {
        writer.serialize(ResultRow {
            timestamp: report.generated_at,
            student: &r.student,
            percentage: r.percentage,
            grade: &r.grade,
        })?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = report.results.len(), "Results appended");
    Ok(())
}

/// Writes `report` to `path` as pretty-printed JSON, replacing any existing file.
pub fn write_json(path: &Path, report: &Report) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, report)?;

    info!(path = %path.display(), "Report written");
    Ok(())
}

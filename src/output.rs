//! Output formatting and persistence for grading results.
//!
//! Supports pretty-printing, JSON serialization, and CSV export.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::graders::types::{GradeReport, GradeResult};
use csv::WriterBuilder;

#[derive(Serialize)]
struct GradeRow<'a> {
    id: &'a str,
    grade_point: f64,
}

/// Logs a grade report using Rust's debug pretty-print format.
pub fn print_pretty(report: &GradeReport) {
    debug!("{:#?}", report);
}

/// Renders a grade report as pretty-printed JSON.
pub fn to_json(report: &GradeReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes the final grades to a CSV file, one `id,grade_point` row per
/// student, overwriting any existing file at `path`.
pub fn write_grades_csv(path: &str, grades: &GradeResult) -> Result<()> {
    debug!(path, rows = grades.len(), "Writing grades CSV");

    let mut writer = WriterBuilder::new().from_path(path)?;
    for (id, &grade_point) in grades {
        writer.serialize(GradeRow { id, grade_point })?;
    }
    writer.flush()?;

    Ok(())
}

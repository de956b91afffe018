//! CSV ledger export
//!
//! One row per category followed by a totals row and one row per average.
//! Rows have different widths, so the writer runs in flexible mode.

use crate::core::models::ProgramAverage;
use crate::core::report::{ReportContext, ReportGenerator};
use csv::WriterBuilder;
use serde::Serialize;
use std::error::Error;

/// Ledger row as written to the CSV file
#[derive(Debug, Serialize)]
struct LedgerRecord<'a> {
    #[serde(rename = "Category")]
    code: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Courses")]
    courses: usize,
    #[serde(rename = "Required")]
    required: String,
    #[serde(rename = "Completed")]
    completed: String,
    #[serde(rename = "Graded Credits")]
    graded: String,
    #[serde(rename = "Grade Points")]
    points: String,
    #[serde(rename = "Outstanding")]
    outstanding: String,
    #[serde(rename = "Surplus")]
    surplus: String,
}

/// CSV report generator
pub struct CsvReporter;

impl CsvReporter {
    /// Create a new CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn amount(value: f64) -> String {
    format!("{value:.1}")
}

fn average_record(label: &str, average: &ProgramAverage) -> [String; 4] {
    [
        label.to_string(),
        amount(average.credits_counted),
        amount(average.grade_points_counted),
        average.average.to_string(),
    ]
}

impl ReportGenerator for CsvReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = ctx.report;
        let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

        for entry in &report.per_category {
            writer.serialize(LedgerRecord {
                code: entry.category.code(),
                name: entry.category.name(),
                courses: entry.course_count,
                required: amount(entry.required_credits),
                completed: amount(entry.earned_credits),
                graded: amount(entry.average_credits),
                points: amount(entry.earned_grade_points),
                outstanding: amount(entry.outstanding),
                surplus: amount(entry.surplus),
            })?;
        }

        writer.write_record([
            "Total".to_string(),
            String::new(),
            report.records.len().to_string(),
            amount(report.required_total()),
            amount(report.earned_total()),
            String::new(),
            String::new(),
            amount(report.outstanding_total),
            amount(report.surplus_total),
        ])?;

        writer.write_record(["Average", "Graded Credits", "Grade Points", "Value"])?;
        writer.write_record(average_record("Primary", &report.primary_average))?;
        writer.write_record(average_record("Secondary", &report.secondary_average))?;
        writer.write_record(average_record("Overall", &report.overall_average))?;

        writer.flush()?;
        let bytes = writer.into_inner().map_err(|e| e.to_string())?;
        Ok(String::from_utf8(bytes)?)
    }
}

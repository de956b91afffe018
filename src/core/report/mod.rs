//! Report model and rendering
//!
//! [`compute_report`] is the engine's entry point: it runs normalization,
//! aggregation and reconciliation and assembles a [`ReportResult`]. The
//! `formats` submodule renders that result for people (Markdown) and
//! spreadsheets (CSV).

pub mod formats;

use crate::core::aggregate::{aggregate, Aggregation};
use crate::core::models::{
    Category, CourseRecord, GradeScale, ProgramAverage, ProgramCode, RawCourseRow,
    RequirementTable,
};
use crate::core::normalize::normalize_rows;
use crate::core::reconcile::{reconcile, Reconciliation};
use crate::core::AuditError;
use crate::info;
use std::error::Error;
use std::path::Path;

pub use formats::{CsvReporter, MarkdownReporter, ReportFormat};

/// Ledger line for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLedgerEntry {
    /// Category
    pub category: Category,
    /// Credits counted toward the requirement (quality and pass grades)
    pub earned_credits: f64,
    /// Σ credits × grade points
    pub earned_grade_points: f64,
    /// Credits carrying a quality grade
    pub average_credits: f64,
    /// Number of transcript rows in the category
    pub course_count: usize,
    /// Credits the program requires
    pub required_credits: f64,
    /// `max(0, required - earned)`
    pub outstanding: f64,
    /// `max(0, earned - required)`
    pub surplus: f64,
}

/// Complete audit result, read-only once built
#[derive(Debug, Clone, PartialEq)]
pub struct ReportResult {
    /// Program whose requirements were applied
    pub program: ProgramCode,
    /// One entry per category, in canonical order
    pub per_category: Vec<CategoryLedgerEntry>,
    /// Average over primary-program categories
    pub primary_average: ProgramAverage,
    /// Average over secondary-program categories
    pub secondary_average: ProgramAverage,
    /// Average over every graded course
    pub overall_average: ProgramAverage,
    /// Σ outstanding credits
    pub outstanding_total: f64,
    /// Σ surplus credits
    pub surplus_total: f64,
    /// Normalized transcript, in transcript order
    pub records: Vec<CourseRecord>,
}

impl ReportResult {
    /// Ledger entry for one category
    #[must_use]
    pub fn entry(&self, category: Category) -> Option<&CategoryLedgerEntry> {
        self.per_category.iter().find(|e| e.category == category)
    }

    /// Courses recorded under `category`, in transcript order
    pub fn courses_in(&self, category: Category) -> impl Iterator<Item = &CourseRecord> {
        self.records.iter().filter(move |r| r.category == category)
    }

    /// Categories with credits still to complete
    pub fn outstanding_entries(&self) -> impl Iterator<Item = &CategoryLedgerEntry> {
        self.per_category.iter().filter(|e| e.outstanding > 0.0)
    }

    /// Categories with more credits than required
    pub fn surplus_entries(&self) -> impl Iterator<Item = &CategoryLedgerEntry> {
        self.per_category.iter().filter(|e| e.surplus > 0.0)
    }

    /// Credits counted toward requirements across all categories
    #[must_use]
    pub fn earned_total(&self) -> f64 {
        self.per_category.iter().map(|e| e.earned_credits).sum()
    }

    /// Credits required across all categories
    #[must_use]
    pub fn required_total(&self) -> f64 {
        self.per_category.iter().map(|e| e.required_credits).sum()
    }

    /// Whether every category requirement is met
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outstanding_total <= 0.0
    }
}

/// Assemble the report from the aggregation and reconciliation passes
#[must_use]
pub fn build_report(
    records: Vec<CourseRecord>,
    aggregation: Aggregation,
    reconciliation: &Reconciliation,
) -> ReportResult {
    let mut per_category: Vec<CategoryLedgerEntry> = aggregation
        .categories()
        .iter()
        .map(|totals| {
            let status = reconciliation.status(totals.category);
            CategoryLedgerEntry {
                category: totals.category,
                earned_credits: totals.completion_credits,
                earned_grade_points: totals.earned_grade_points,
                average_credits: totals.average_credits,
                course_count: totals.course_count,
                required_credits: status.required,
                outstanding: status.outstanding,
                surplus: status.surplus,
            }
        })
        .collect();
    per_category.sort_by_key(|entry| entry.category.index());

    let outstanding_total = per_category.iter().map(|e| e.outstanding).sum();
    let surplus_total = per_category.iter().map(|e| e.surplus).sum();

    ReportResult {
        program: reconciliation.program.clone(),
        per_category,
        primary_average: aggregation.primary,
        secondary_average: aggregation.secondary,
        overall_average: aggregation.overall,
        outstanding_total,
        surplus_total,
        records,
    }
}

/// Compute the full audit for a transcript
///
/// Runs normalize → aggregate → reconcile → assemble.
///
/// # Errors
/// - `AuditError::MalformedRecord` / `AuditError::UnknownCategory` for bad rows
/// - `AuditError::UnknownProgram` when `table` has no row for `program`
pub fn compute_report(
    rows: &[RawCourseRow],
    program: &ProgramCode,
    scale: &GradeScale,
    table: &RequirementTable,
) -> Result<ReportResult, AuditError> {
    let records = normalize_rows(rows)?;
    let aggregation = aggregate(&records, scale);
    let reconciliation = reconcile(&aggregation, program, table)?;
    let report = build_report(records, aggregation, &reconciliation);

    info!(
        "Audit for {program}: {} courses, CGPA {}, {:.1} credits outstanding",
        report.records.len(),
        report.overall_average.average,
        report.outstanding_total
    );
    Ok(report)
}

/// Data handed to a renderer
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Audit result
    pub report: &'a ReportResult,
    /// Student identifier, when known
    pub student: Option<&'a str>,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(report: &'a ReportResult, student: Option<&'a str>) -> Self {
        Self { report, student }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Render the report to a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

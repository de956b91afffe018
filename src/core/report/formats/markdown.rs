//! Markdown report generator
//!
//! Renders the audit as a Markdown document through an `askama` template:
//! averages, the requirement ledger, outstanding and extra credits, and the
//! transcript grouped by category.

use crate::core::get_version;
use crate::core::models::{Category, ProgramAverage};
use crate::core::report::{ReportContext, ReportGenerator, ReportResult};
use askama::Template;
use std::error::Error;

struct AverageRow {
    scope: String,
    credits: String,
    points: String,
    average: String,
}

struct LedgerRow {
    code: &'static str,
    name: &'static str,
    courses: usize,
    required: String,
    earned: String,
    graded: String,
    points: String,
    outstanding: String,
    surplus: String,
}

struct SummaryRow {
    code: &'static str,
    name: &'static str,
    amount: String,
}

struct CourseRow {
    code: String,
    description: String,
    credits: String,
    grade: String,
}

struct CourseSection {
    code: &'static str,
    name: &'static str,
    courses: Vec<CourseRow>,
}

#[derive(Template)]
#[template(path = "report.md", escape = "none")]
struct MarkdownTemplate {
    program: String,
    student: String,
    version: &'static str,
    course_count: usize,
    status: String,
    averages: Vec<AverageRow>,
    ledger: Vec<LedgerRow>,
    required_total: String,
    earned_total: String,
    outstanding_total: String,
    surplus_total: String,
    outstanding: Vec<SummaryRow>,
    surplus: Vec<SummaryRow>,
    sections: Vec<CourseSection>,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn average_row(label: &str, average: &ProgramAverage) -> AverageRow {
        AverageRow {
            scope: label.to_string(),
            credits: credits(average.credits_counted),
            points: credits(average.grade_points_counted),
            average: average.average.to_string(),
        }
    }

    fn build_template(ctx: &ReportContext) -> MarkdownTemplate {
        let report = ctx.report;

        let averages = vec![
            Self::average_row("Primary program", &report.primary_average),
            Self::average_row("Secondary program", &report.secondary_average),
            Self::average_row("Overall (CGPA)", &report.overall_average),
        ];

        let ledger = report
            .per_category
            .iter()
            .map(|entry| LedgerRow {
                code: entry.category.code(),
                name: entry.category.name(),
                courses: entry.course_count,
                required: credits(entry.required_credits),
                earned: credits(entry.earned_credits),
                graded: credits(entry.average_credits),
                points: credits(entry.earned_grade_points),
                outstanding: credits(entry.outstanding),
                surplus: credits(entry.surplus),
            })
            .collect();

        let outstanding = report
            .outstanding_entries()
            .map(|e| summary_row(e.category, e.outstanding))
            .collect();
        let surplus = report
            .surplus_entries()
            .map(|e| summary_row(e.category, e.surplus))
            .collect();

        MarkdownTemplate {
            program: report.program.to_string(),
            student: ctx.student.unwrap_or_default().to_string(),
            version: get_version(),
            course_count: report.records.len(),
            status: status_line(report),
            averages,
            ledger,
            required_total: credits(report.required_total()),
            earned_total: credits(report.earned_total()),
            outstanding_total: credits(report.outstanding_total),
            surplus_total: credits(report.surplus_total),
            outstanding,
            surplus,
            sections: course_sections(report),
        }
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::build_template(ctx).render()?)
    }
}

fn credits(value: f64) -> String {
    format!("{value:.1}")
}

fn summary_row(category: Category, amount: f64) -> SummaryRow {
    SummaryRow {
        code: category.code(),
        name: category.name(),
        amount: credits(amount),
    }
}

fn status_line(report: &ReportResult) -> String {
    if report.is_complete() {
        "all category requirements met".to_string()
    } else {
        format!(
            "{} credits outstanding across {} categories",
            credits(report.outstanding_total),
            report.outstanding_entries().count()
        )
    }
}

fn course_sections(report: &ReportResult) -> Vec<CourseSection> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let courses: Vec<CourseRow> = report
                .courses_in(category)
                .map(|record| CourseRow {
                    code: record.code.clone(),
                    description: record.description.replace('|', "/"),
                    credits: credits(record.credit_hours),
                    grade: if record.grade.is_empty() {
                        "-".to_string()
                    } else {
                        record.grade.clone()
                    },
                })
                .collect();
            (!courses.is_empty()).then(|| CourseSection {
                code: category.code(),
                name: category.name(),
                courses,
            })
        })
        .collect()
}

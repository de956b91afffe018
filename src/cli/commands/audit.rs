//! Audit command handler
//!
//! Loads an extracted transcript, audits it against the program's
//! requirements and writes the report.

use degree_calc::config::Config;
use degree_calc::core::models::{GradeScale, ProgramCode};
use degree_calc::core::report::{ReportContext, ReportFormat, ReportGenerator};
use degree_calc::core::{compute_report, load_transcript, AuditError, ReportResult};
use degree_calc::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Arguments of one `audit` invocation
pub struct AuditOptions<'a> {
    /// Transcript CSV
    pub transcript: &'a Path,
    /// Student identifier given on the command line
    pub student: Option<&'a str>,
    /// Program code given on the command line
    pub program: Option<&'a str>,
    /// Report format name
    pub format: &'a str,
    /// Explicit report path
    pub output: Option<&'a Path>,
    /// Skip writing the report file
    pub no_report: bool,
}

/// Run the audit command.
///
/// # Errors
/// Returns a `✗`-prefixed message when the transcript, program or
/// requirement table is unusable, or the report cannot be written
pub fn run(options: &AuditOptions, config: &Config) -> Result<(), String> {
    audit(options, config).inspect_err(|err| {
        error!("Audit of {} failed: {err}", options.transcript.display());
    })
}

fn audit(options: &AuditOptions, config: &Config) -> Result<(), String> {
    let format = options
        .format
        .parse::<ReportFormat>()
        .map_err(|e| format!("✗ {e}. Use: markdown or csv"))?;

    let student = options
        .student
        .map(str::to_string)
        .or_else(|| (!config.audit.student_id.is_empty()).then(|| config.audit.student_id.clone()));
    let program = resolve_program(options.program, student.as_deref()).map_err(describe)?;
    info!("Auditing {} as {program}", options.transcript.display());

    let table = config.requirement_table().map_err(describe)?;
    let rows = load_transcript(options.transcript).map_err(describe)?;
    let report =
        compute_report(&rows, &program, &GradeScale::ten_point(), &table).map_err(describe)?;

    print_summary(&report);

    if options.no_report {
        return Ok(());
    }

    let output_path = match options.output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(config, format)?,
    };
    let ctx = ReportContext::new(&report, student.as_deref());
    format
        .generator()
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to write {format} report: {e}"))?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());
    Ok(())
}

/// Program from `--program`, else detected from the student identifier
fn resolve_program(program: Option<&str>, student: Option<&str>) -> Result<ProgramCode, AuditError> {
    match (program, student) {
        (Some(code), _) => code.parse(),
        (None, Some(identifier)) => ProgramCode::detect(identifier),
        (None, None) => Err(AuditError::InvalidIdentifier {
            identifier: String::new(),
        }),
    }
}

fn describe(err: AuditError) -> String {
    match err {
        AuditError::InvalidIdentifier { ref identifier } if identifier.is_empty() => {
            "✗ No student identifier: pass --student, --program or set audit.student_id".to_string()
        }
        err if err.is_configuration() => format!("✗ Configuration error: {err}"),
        err => format!("✗ {err}"),
    }
}

fn default_output_path(config: &Config, format: ReportFormat) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = if config.audit.report_name.is_empty() {
        "degree_audit"
    } else {
        config.audit.report_name.as_str()
    };
    Ok(reports_dir.join(format!("{stem}.{}", format.extension())))
}

fn print_summary(report: &ReportResult) {
    println!("\n=== Audit: {} ===", report.program);
    println!("Courses: {}", report.records.len());
    for average in [
        &report.primary_average,
        &report.secondary_average,
        &report.overall_average,
    ] {
        println!(
            "{:<20} {} ({:.1} credits)",
            average.scope, average.average, average.credits_counted
        );
    }
    println!(
        "Credits: {:.1} earned of {:.1} required",
        report.earned_total(),
        report.required_total()
    );

    for entry in &report.per_category {
        verbose!(
            "  {:<4} earned {:>6.1}  required {:>6.1}  outstanding {:>6.1}  surplus {:>6.1}",
            entry.category.code(),
            entry.earned_credits,
            entry.required_credits,
            entry.outstanding,
            entry.surplus
        );
    }

    if report.is_complete() {
        println!("✓ All category requirements met");
    } else {
        println!("Outstanding: {:.1} credits", report.outstanding_total);
        for entry in report.outstanding_entries() {
            println!(
                "  {} ({}): {:.1}",
                entry.category.name(),
                entry.category.code(),
                entry.outstanding
            );
        }
    }
    if report.surplus_total > 0.0 {
        println!("Extra credits: {:.1}", report.surplus_total);
    }
}

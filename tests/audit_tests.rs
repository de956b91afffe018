//! Integration tests for the audit pipeline: transcript in, report out

use degree_calc::core::models::{
    Average, Category, GradeScale, ProgramCode, ProgramRequirements, RawCourseRow,
    RequirementTable,
};
use degree_calc::core::{compute_report, load_transcript, AuditError};
use std::fs;
use tempfile::TempDir;

const EPS: f64 = 1e-9;

fn row(serial: &str, code: &str, category: &str, credits: &str, grade: &str) -> RawCourseRow {
    RawCourseRow::from_cells([serial, code, "Course", category, credits, grade])
}

fn program(code: &str) -> ProgramCode {
    code.parse().expect("valid program code")
}

fn dc_only_table(required: f64) -> RequirementTable {
    let mut requirements = ProgramRequirements::default();
    requirements.set(Category::DepartmentalCore, required);
    let mut table = RequirementTable::new();
    table.insert(program("CS1"), requirements);
    table
}

fn mixed_transcript() -> Vec<RawCourseRow> {
    vec![
        row("1", "MTL100", "BS", "4", "A-"),
        row("2", "COL106", "DC", "5", "B"),
        row("3", "HUL261", "HU", "3", "A"),
        row("4", "NIN100", "NG", "1", "S"),
        row("5", "COL719", "PC", "4", "B"),
        row("6", "COL730", "PE", "3", "C"),
        row("7", "COL215", "DC", "4", "F"),
        row("8", "ELL201", "EAS", "4", "NP"),
    ]
}

#[test]
fn scenario_single_departmental_core_course() {
    let report = compute_report(
        &[row("1", "COL106", "DC", "3", "A")],
        &program("CS1"),
        &GradeScale::ten_point(),
        &dc_only_table(69.0),
    )
    .expect("audit succeeds");

    let dc = report.entry(Category::DepartmentalCore).expect("DC entry");
    assert!((dc.earned_grade_points - 30.0).abs() < EPS);
    assert!((dc.outstanding - 66.0).abs() < EPS);
    assert!(dc.surplus.abs() < EPS);
}

#[test]
fn scenario_secondary_program_average() {
    let rows = vec![
        row("1", "COL719", "PC", "4", "B"),
        row("2", "COL720", "PC", "2", "A-"),
    ];
    let report = compute_report(
        &rows,
        &program("CS5"),
        &GradeScale::ten_point(),
        &RequirementTable::builtin(),
    )
    .expect("audit succeeds");

    assert!((report.secondary_average.credits_counted - 6.0).abs() < EPS);
    assert!((report.secondary_average.grade_points_counted - 50.0).abs() < EPS);
    assert_eq!(report.secondary_average.average.to_string(), "8.333");
    assert_eq!(report.primary_average.average, Average::Undefined);
    assert!(matches!(
        report.primary_average.value(),
        Err(AuditError::DegenerateAverage { .. })
    ));
}

#[test]
fn scenario_failed_grade_counts_for_nothing() {
    let report = compute_report(
        &[row("1", "COL106", "DC", "4", "F")],
        &program("CS1"),
        &GradeScale::ten_point(),
        &dc_only_table(10.0),
    )
    .expect("audit succeeds");

    let dc = report.entry(Category::DepartmentalCore).expect("DC entry");
    assert!(dc.earned_grade_points.abs() < EPS);
    assert!(dc.average_credits.abs() < EPS);
    assert!(dc.earned_credits.abs() < EPS);
    assert_eq!(dc.course_count, 1);

    let lenient = GradeScale::ten_point().with_pass_grade("F");
    let report = compute_report(
        &[row("1", "COL106", "DC", "4", "F")],
        &program("CS1"),
        &lenient,
        &dc_only_table(10.0),
    )
    .expect("audit succeeds");
    let dc = report.entry(Category::DepartmentalCore).expect("DC entry");
    assert!((dc.earned_credits - 4.0).abs() < EPS);
    assert!(dc.average_credits.abs() < EPS);
}

#[test]
fn scenario_program_detected_from_identifier() {
    assert_eq!(
        ProgramCode::detect("cs123456").expect("detects").as_str(),
        "CS1"
    );
    assert!(matches!(
        ProgramCode::detect("123456"),
        Err(AuditError::InvalidIdentifier { .. })
    ));
}

#[test]
fn scenario_unknown_program() {
    let err = compute_report(
        &[row("1", "COL106", "DC", "3", "A")],
        &program("XX9"),
        &GradeScale::ten_point(),
        &RequirementTable::builtin(),
    )
    .expect_err("no row for XX9");

    assert_eq!(
        err,
        AuditError::UnknownProgram {
            program: "XX9".to_string()
        }
    );
    assert!(err.is_configuration());
}

#[test]
fn malformed_and_unknown_rows_are_rejected() {
    let table = RequirementTable::builtin();
    let scale = GradeScale::ten_point();

    let err = compute_report(&[row("7", "COL106", "DC", "four", "A")], &program("CS1"), &scale, &table)
        .expect_err("bad credits");
    assert!(matches!(err, AuditError::MalformedRecord { ref serial, .. } if serial == "7"));

    let err = compute_report(&[row("1", "COL106", "dc", "3", "A")], &program("CS1"), &scale, &table)
        .expect_err("lowercase category");
    assert!(matches!(err, AuditError::UnknownCategory { ref category, .. } if category == "dc"));
    assert!(!err.is_configuration());
}

#[test]
fn outstanding_and_surplus_never_both_positive() {
    let report = compute_report(
        &mixed_transcript(),
        &program("CS5"),
        &GradeScale::ten_point(),
        &RequirementTable::builtin(),
    )
    .expect("audit succeeds");

    for entry in &report.per_category {
        assert!(entry.outstanding >= 0.0 && entry.surplus >= 0.0);
        assert!((entry.outstanding * entry.surplus).abs() < EPS, "{entry:?}");
    }
}

#[test]
fn overall_is_primary_plus_secondary() {
    let report = compute_report(
        &mixed_transcript(),
        &program("CS5"),
        &GradeScale::ten_point(),
        &RequirementTable::builtin(),
    )
    .expect("audit succeeds");

    let primary = &report.primary_average;
    let secondary = &report.secondary_average;
    let overall = &report.overall_average;
    assert!((overall.credits_counted - (primary.credits_counted + secondary.credits_counted)).abs() < EPS);
    assert!(
        (overall.grade_points_counted
            - (primary.grade_points_counted + secondary.grade_points_counted))
            .abs()
            < EPS
    );
    // BS 4×9 + DC 5×8 + HU 3×10 ; PC 4×8 + PE 3×6
    assert!((primary.grade_points_counted - 106.0).abs() < EPS);
    assert!((secondary.grade_points_counted - 50.0).abs() < EPS);
    assert!((overall.credits_counted - 19.0).abs() < EPS);
}

#[test]
fn empty_category_is_fully_outstanding() {
    let report = compute_report(
        &mixed_transcript(),
        &program("CS5"),
        &GradeScale::ten_point(),
        &RequirementTable::builtin(),
    )
    .expect("audit succeeds");

    let de = report.entry(Category::DepartmentalElectives).expect("DE entry");
    assert!(de.earned_credits.abs() < EPS);
    assert!((de.outstanding - de.required_credits).abs() < EPS);
    assert!(de.surplus.abs() < EPS);
}

#[test]
fn repeated_runs_are_identical() {
    let rows = mixed_transcript();
    let table = RequirementTable::builtin();
    let scale = GradeScale::ten_point();

    let first = compute_report(&rows, &program("CS5"), &scale, &table).expect("first run");
    let second = compute_report(&rows, &program("CS5"), &scale, &table).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn audits_transcript_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("transcript.csv");
    fs::write(
        &path,
        "Serial No.,Course Code,Course Description,Course Category,Course Credits,Grade\n\
         1, COL106 ,Data Structures,DC, 4.0 ,A-\n\
         2,HUL261,Introduction to Psychology,HU,3,B\n\
         3,NIN100,Introduction to NSO,NG,1,S\n",
    )
    .expect("Failed to write transcript");

    let rows = load_transcript(&path).expect("transcript loads");
    assert_eq!(rows.len(), 3);

    let student = ProgramCode::detect("  cs1190421 ").expect("detects");
    let report = compute_report(
        &rows,
        &student,
        &GradeScale::ten_point(),
        &RequirementTable::builtin(),
    )
    .expect("audit succeeds");

    assert_eq!(report.program.as_str(), "CS1");
    assert_eq!(report.records.len(), 3);
    assert!((report.overall_average.credits_counted - 7.0).abs() < EPS);
    assert!((report.overall_average.grade_points_counted - 60.0).abs() < EPS);
    let ng = report.entry(Category::NonGraded).expect("NG entry");
    assert!((ng.earned_credits - 1.0).abs() < EPS);
}

#[test]
fn missing_transcript_file_is_reported() {
    let err = load_transcript("/nonexistent/transcript.csv").expect_err("missing file");
    assert!(matches!(err, AuditError::Transcript { ref path, .. } if path.contains("transcript.csv")));
}

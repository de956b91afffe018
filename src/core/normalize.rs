//! Course record normalization
//!
//! Turns scraped transcript rows into typed [`CourseRecord`]s. Rows are not
//! de-duplicated: a course taken twice appears twice and is counted twice.

use crate::core::models::{Category, CourseRecord, RawCourseRow};
use crate::core::AuditError;
use crate::debug;

/// Normalize a single raw row
///
/// Cells are trimmed; the category must match a known code exactly.
///
/// # Errors
/// - `AuditError::MalformedRecord` if credit hours are not a finite, non-negative number
/// - `AuditError::UnknownCategory` if the category code is not recognised
pub fn normalize_row(row: &RawCourseRow) -> Result<CourseRecord, AuditError> {
    let code = row.code.trim();
    let credits_text = row.credits.trim();

    let credit_hours = credits_text
        .parse::<f64>()
        .ok()
        .filter(|credits| credits.is_finite() && *credits >= 0.0)
        .ok_or_else(|| AuditError::MalformedRecord {
            serial: row.serial.trim().to_string(),
            code: code.to_string(),
            value: row.credits.clone(),
        })?;

    let category_text = row.category.trim();
    let category = category_text
        .parse::<Category>()
        .map_err(|_| AuditError::UnknownCategory {
            code: code.to_string(),
            category: category_text.to_string(),
        })?;

    Ok(CourseRecord::new(
        code,
        row.description.trim(),
        category,
        credit_hours,
        row.grade.trim(),
    ))
}

/// Normalize every row, stopping at the first invalid one
///
/// # Errors
/// Returns the first error produced by [`normalize_row`]
pub fn normalize_rows(rows: &[RawCourseRow]) -> Result<Vec<CourseRecord>, AuditError> {
    let records = rows
        .iter()
        .map(normalize_row)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Normalized {} course records", records.len());
    Ok(records)
}

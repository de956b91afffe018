//! Course rows as extracted from a transcript, and their normalized form

use super::Category;
use serde::{Deserialize, Serialize};

/// One transcript row exactly as scraped: six untyped text cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCourseRow {
    /// Row serial number
    #[serde(rename = "Serial No.", default)]
    pub serial: String,

    /// Course code (e.g., "COL106")
    #[serde(rename = "Course Code")]
    pub code: String,

    /// Course title
    #[serde(rename = "Course Description", default)]
    pub description: String,

    /// Category code (e.g., "DC")
    #[serde(rename = "Course Category")]
    pub category: String,

    /// Credit hours as text (e.g., "4.0")
    #[serde(rename = "Course Credits")]
    pub credits: String,

    /// Letter grade as text (e.g., "A-")
    #[serde(rename = "Grade", default)]
    pub grade: String,
}

impl RawCourseRow {
    /// Build a row from its six cells in transcript column order
    #[must_use]
    pub fn from_cells(cells: [&str; 6]) -> Self {
        let [serial, code, description, category, credits, grade] = cells;
        Self {
            serial: serial.to_string(),
            code: code.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            credits: credits.to_string(),
            grade: grade.to_string(),
        }
    }
}

/// A validated course record
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRecord {
    /// Course code (e.g., "COL106")
    pub code: String,

    /// Course title
    pub description: String,

    /// Category the course counts toward
    pub category: Category,

    /// Credit hours (non-negative, can be fractional)
    pub credit_hours: f64,

    /// Letter grade; interpreted against a grade scale when aggregated
    pub grade: String,
}

impl CourseRecord {
    /// Create a new course record
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `description` - Course title
    /// * `category` - Category the course counts toward
    /// * `credit_hours` - Credit hours
    /// * `grade` - Letter grade
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        credit_hours: f64,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            category,
            credit_hours,
            grade: grade.into(),
        }
    }
}

//! Transcript loading
//!
//! Reads a transcript that has already been extracted from the academic
//! portal into CSV. Expected headers: `Serial No.`, `Course Code`,
//! `Course Description`, `Course Category`, `Course Credits`, `Grade`.

use crate::core::models::RawCourseRow;
use crate::core::AuditError;
use crate::debug;
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

/// Load raw course rows from a transcript CSV file
///
/// # Errors
/// Returns `AuditError::Transcript` if the file cannot be opened or a row
/// cannot be read
pub fn load_transcript<P: AsRef<Path>>(path: P) -> Result<Vec<RawCourseRow>, AuditError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| transcript_error(path, &e.to_string()))?;
    let rows = read_transcript(file).map_err(|e| match e {
        AuditError::Transcript { message, .. } => transcript_error(path, &message),
        other => other,
    })?;
    debug!("Loaded {} transcript rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read raw course rows from any CSV source
///
/// Blank rows are skipped.
///
/// # Errors
/// Returns `AuditError::Transcript` if a row cannot be parsed
pub fn read_transcript<R: Read>(reader: R) -> Result<Vec<RawCourseRow>, AuditError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line_num, result) in reader.deserialize::<RawCourseRow>().enumerate() {
        let row = result.map_err(|e| AuditError::Transcript {
            path: "<input>".to_string(),
            message: format!("line {}: {e}", line_num + 2),
        })?;
        if row.code.is_empty() && row.category.is_empty() && row.credits.is_empty() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

fn transcript_error(path: &Path, message: &str) -> AuditError {
    AuditError::Transcript {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Serial No.,Course Code,Course Description,Course Category,Course Credits,Grade\n";

    #[test]
    fn reads_rows_by_header() {
        let data = format!("{HEADER}1,COL106,\"Data Structures, Algorithms\",DC,5,A-\n2,HUL101,English,HU,3,B\n");
        let rows = read_transcript(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].description, "Data Structures, Algorithms");
        assert_eq!(rows[0].grade, "A-");
        assert_eq!(rows[1].category, "HU");
    }

    #[test]
    fn keeps_bad_cells_for_the_normalizer() {
        let data = format!("{HEADER}1,COL106,DS,ZZ,five,A\n");
        let rows = read_transcript(data.as_bytes()).unwrap();
        assert_eq!(rows[0].category, "ZZ");
        assert_eq!(rows[0].credits, "five");
    }

    #[test]
    fn missing_file_is_a_transcript_error() {
        let err = load_transcript("/nonexistent/transcript.csv").unwrap_err();
        assert!(matches!(err, AuditError::Transcript { ref path, .. } if path.contains("nonexistent")));
    }
}

//! Error taxonomy for the degree-audit engine

use thiserror::Error;

/// Errors raised while auditing a transcript.
///
/// Every variant is terminal for the current run: they describe malformed
/// upstream data or a gap in configuration, never a transient fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuditError {
    /// A course row whose credit-hours field is not a non-negative number
    #[error("Malformed record {serial} ({code}): credit hours '{value}' is not a non-negative number")]
    MalformedRecord {
        /// Serial number of the row as it appeared in the transcript
        serial: String,
        /// Course code of the row
        code: String,
        /// Raw credit-hours text
        value: String,
    },

    /// A course row whose category is not one of the known category codes
    #[error("Unknown category '{category}' for course {code}")]
    UnknownCategory {
        /// Course code of the row
        code: String,
        /// Raw category text
        category: String,
    },

    /// The requirement table has no row for the program
    #[error("No requirements configured for program '{program}'")]
    UnknownProgram {
        /// Detected or requested program code
        program: String,
    },

    /// The student identifier does not start with a program code
    #[error("Cannot derive a program code from identifier '{identifier}'")]
    InvalidIdentifier {
        /// Identifier as supplied
        identifier: String,
    },

    /// An average was requested for a scope with no graded credits
    #[error("No graded credits in {scope}; its average is undefined")]
    DegenerateAverage {
        /// Which average was requested (e.g. "secondary program")
        scope: String,
    },

    /// The transcript file could not be read
    #[error("Failed to read transcript {path}: {message}")]
    Transcript {
        /// Path of the transcript
        path: String,
        /// Underlying reader error
        message: String,
    },

    /// A requirement-table document could not be parsed
    #[error("Invalid requirement table: {message}")]
    RequirementTable {
        /// What was wrong with the document
        message: String,
    },
}

impl AuditError {
    /// Whether this error points at missing or broken configuration rather than bad input data
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownProgram { .. } | Self::RequirementTable { .. }
        )
    }
}

//! Per-program credit requirements

use super::{Category, ProgramCode};
use crate::core::AuditError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Number of categories; one requirement slot per category
const CATEGORY_COUNT: usize = Category::ALL.len();

/// Built-in requirement rows, columns in canonical category order:
/// BS, EAS, PL, HU, OC, DC, DE, PC, PE, NG, OE
const BUILTIN_ROWS: &[(&str, [f64; CATEGORY_COUNT])] = &[
    ("CE1", [22.0, 19.0, 12.0, 15.0, 10.0, 64.0, 13.0, 0.0, 0.0, 15.0, 0.0]),
    ("CH1", [22.0, 19.0, 12.0, 15.0, 10.0, 62.0, 15.0, 0.0, 0.0, 15.0, 0.0]),
    ("CS1", [22.0, 19.0, 10.0, 15.0, 10.0, 69.0, 12.0, 0.0, 0.0, 15.0, 0.0]),
    ("CS5", [22.0, 19.0, 10.0, 15.0, 10.0, 69.0, 12.0, 20.0, 12.0, 15.0, 0.0]),
    ("EE1", [22.0, 19.0, 13.5, 15.0, 10.0, 56.5, 18.0, 0.0, 0.0, 15.0, 0.0]),
    ("EE3", [22.0, 19.0, 13.5, 15.0, 10.0, 57.0, 17.5, 0.0, 0.0, 15.0, 0.0]),
    ("ME1", [22.0, 19.0, 11.0, 15.0, 10.0, 60.0, 18.0, 0.0, 0.0, 15.0, 0.0]),
    ("ME2", [22.0, 19.0, 11.0, 15.0, 10.0, 61.5, 16.5, 0.0, 0.0, 15.0, 0.0]),
    ("MT1", [22.0, 19.0, 10.0, 15.0, 10.0, 62.0, 12.5, 0.0, 0.0, 15.0, 6.0]),
    ("MT6", [22.0, 19.0, 10.0, 15.0, 10.0, 62.0, 12.5, 24.0, 15.0, 15.0, 6.0]),
];

/// Required credit hours for every category of one program
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgramRequirements {
    credits: [f64; CATEGORY_COUNT],
}

impl ProgramRequirements {
    /// Requirements from a full row in canonical category order
    #[must_use]
    pub const fn from_row(credits: [f64; CATEGORY_COUNT]) -> Self {
        Self { credits }
    }

    /// Required credits for `category` (0 when the program does not require it)
    #[must_use]
    pub const fn required(&self, category: Category) -> f64 {
        self.credits[category.index()]
    }

    /// Set the requirement for one category
    pub fn set(&mut self, category: Category, credits: f64) {
        self.credits[category.index()] = credits;
    }

    /// Sum of all category requirements
    #[must_use]
    pub fn total(&self) -> f64 {
        self.credits.iter().sum()
    }

    /// (category, required credits) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.required(c)))
    }
}

/// Requirement table as written in a TOML document
#[derive(Debug, Deserialize)]
struct TableDocument {
    #[serde(default)]
    programs: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Program code → per-category credit requirements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequirementTable {
    programs: BTreeMap<ProgramCode, ProgramRequirements>,
}

impl RequirementTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in requirement table
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (code, row) in BUILTIN_ROWS {
            table.insert(
                ProgramCode::from_static(*code),
                ProgramRequirements::from_row(*row),
            );
        }
        table
    }

    /// Parse a table from TOML of the form `[programs.CS1]` / `DC = 69`
    ///
    /// Categories missing from a program default to 0.
    ///
    /// # Errors
    /// Returns `AuditError::RequirementTable` on malformed TOML, an invalid
    /// program code, an unknown category key or a negative/non-finite value
    pub fn from_toml(toml_str: &str) -> Result<Self, AuditError> {
        let document: TableDocument =
            toml::from_str(toml_str).map_err(|e| AuditError::RequirementTable {
                message: e.to_string(),
            })?;

        let mut table = Self::new();
        for (code, categories) in document.programs {
            let program = code
                .parse::<ProgramCode>()
                .map_err(|_| AuditError::RequirementTable {
                    message: format!("'{code}' is not a program code"),
                })?;

            let mut requirements = ProgramRequirements::default();
            for (key, credits) in categories {
                let category = key
                    .parse::<Category>()
                    .map_err(|e| AuditError::RequirementTable {
                        message: format!("program {program}: {e}"),
                    })?;
                if !credits.is_finite() || credits < 0.0 {
                    return Err(AuditError::RequirementTable {
                        message: format!("program {program}: {key} = {credits} is not a credit amount"),
                    });
                }
                requirements.set(category, credits);
            }
            table.insert(program, requirements);
        }
        Ok(table)
    }

    /// Add or replace the row for a program
    pub fn insert(&mut self, program: ProgramCode, requirements: ProgramRequirements) {
        self.programs.insert(program, requirements);
    }

    /// Row for `program`
    ///
    /// # Errors
    /// Returns `AuditError::UnknownProgram` when the table has no row for it
    pub fn requirements_for(
        &self,
        program: &ProgramCode,
    ) -> Result<&ProgramRequirements, AuditError> {
        self.programs
            .get(program)
            .ok_or_else(|| AuditError::UnknownProgram {
                program: program.to_string(),
            })
    }

    /// Whether the table has a row for `program`
    #[must_use]
    pub fn contains(&self, program: &ProgramCode) -> bool {
        self.programs.contains_key(program)
    }

    /// Programs with their rows, sorted by code
    pub fn iter(&self) -> impl Iterator<Item = (&ProgramCode, &ProgramRequirements)> {
        self.programs.iter()
    }

    /// Number of programs in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether the table has no programs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

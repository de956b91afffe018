//! Course categories and the program each one accumulates into

use std::fmt;
use std::str::FromStr;

/// Which concurrently pursued program a category's credits count toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramTag {
    /// Undergraduate curriculum
    Primary,
    /// Graduate-equivalent curriculum (programme core/elective)
    Secondary,
}

impl ProgramTag {
    /// Human-readable label used in reports and diagnostics
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary program",
            Self::Secondary => "secondary program",
        }
    }
}

/// Closed set of course categories.
///
/// Declaration order is the canonical order used by every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Basic Sciences
    BasicSciences,
    /// Engineering Arts and Sciences
    EngineeringArts,
    /// Programme-linked
    ProgrammeLinked,
    /// Humanities and Social Sciences
    Humanities,
    /// Open Category
    OpenCategory,
    /// Departmental Core
    DepartmentalCore,
    /// Departmental Electives
    DepartmentalElectives,
    /// Programme Core
    ProgrammeCore,
    /// Programme Elective
    ProgrammeElective,
    /// Non-Graded
    NonGraded,
    /// Open Elective
    OpenElective,
}

impl Category {
    /// Every category, in canonical order
    pub const ALL: [Self; 11] = [
        Self::BasicSciences,
        Self::EngineeringArts,
        Self::ProgrammeLinked,
        Self::Humanities,
        Self::OpenCategory,
        Self::DepartmentalCore,
        Self::DepartmentalElectives,
        Self::ProgrammeCore,
        Self::ProgrammeElective,
        Self::NonGraded,
        Self::OpenElective,
    ];

    /// Short code as printed on the transcript (e.g. "DC")
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BasicSciences => "BS",
            Self::EngineeringArts => "EAS",
            Self::ProgrammeLinked => "PL",
            Self::Humanities => "HU",
            Self::OpenCategory => "OC",
            Self::DepartmentalCore => "DC",
            Self::DepartmentalElectives => "DE",
            Self::ProgrammeCore => "PC",
            Self::ProgrammeElective => "PE",
            Self::NonGraded => "NG",
            Self::OpenElective => "OE",
        }
    }

    /// Full category name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BasicSciences => "Basic Sciences",
            Self::EngineeringArts => "Engineering Arts and Sciences",
            Self::ProgrammeLinked => "Programme-linked",
            Self::Humanities => "Humanities and Social Sciences",
            Self::OpenCategory => "Open Category",
            Self::DepartmentalCore => "Departmental Core",
            Self::DepartmentalElectives => "Departmental Electives",
            Self::ProgrammeCore => "Programme Core",
            Self::ProgrammeElective => "Programme Elective",
            Self::NonGraded => "Non-Graded",
            Self::OpenElective => "Open Elective",
        }
    }

    /// Program whose totals this category accumulates into
    #[must_use]
    pub const fn tag(self) -> ProgramTag {
        match self {
            Self::ProgrammeCore | Self::ProgrammeElective => ProgramTag::Secondary,
            _ => ProgramTag::Primary,
        }
    }

    /// Position in the canonical order
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Category {
    type Err = String;

    /// Exact, case-sensitive match against the category codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.code() == s)
            .ok_or_else(|| format!("Unknown category code: '{s}'"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

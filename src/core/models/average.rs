//! Grade-point averages

use crate::core::AuditError;
use std::fmt;

/// Outcome of dividing grade points by graded credits
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Average {
    /// Average over a non-zero credit denominator
    Defined(f64),
    /// No graded credits were counted
    Undefined,
}

impl Average {
    /// Value when defined
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined => None,
        }
    }
}

impl fmt::Display for Average {
    /// Three decimal places, `n/a` when undefined
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(value) => write!(f, "{value:.3}"),
            Self::Undefined => f.write_str("n/a"),
        }
    }
}

/// Credits and grade points counted toward one average
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramAverage {
    /// What the average covers (e.g. "primary program")
    pub scope: String,
    /// Graded credit hours in the denominator
    pub credits_counted: f64,
    /// Grade points (credits × points) in the numerator
    pub grade_points_counted: f64,
    /// `grade_points_counted / credits_counted`, or `Undefined` with no credits
    pub average: Average,
}

impl ProgramAverage {
    /// Build an average from its totals
    #[must_use]
    pub fn from_totals(scope: impl Into<String>, credits: f64, grade_points: f64) -> Self {
        let average = if credits > 0.0 {
            Average::Defined(grade_points / credits)
        } else {
            Average::Undefined
        };
        Self {
            scope: scope.into(),
            credits_counted: credits,
            grade_points_counted: grade_points,
            average,
        }
    }

    /// Combine two averages by summing their totals
    #[must_use]
    pub fn combine(scope: impl Into<String>, first: &Self, second: &Self) -> Self {
        Self::from_totals(
            scope,
            first.credits_counted + second.credits_counted,
            first.grade_points_counted + second.grade_points_counted,
        )
    }

    /// Whether any graded credits were counted
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        matches!(self.average, Average::Defined(_))
    }

    /// The average value
    ///
    /// # Errors
    /// Returns `AuditError::DegenerateAverage` when no graded credits were counted
    pub fn value(&self) -> Result<f64, AuditError> {
        self.average
            .value()
            .ok_or_else(|| AuditError::DegenerateAverage {
                scope: self.scope.clone(),
            })
    }
}

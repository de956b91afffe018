//! Requirement reconciliation: completed credits against the program's table row

use crate::core::aggregate::Aggregation;
use crate::core::models::{Category, ProgramCode, RequirementTable};
use crate::core::AuditError;
use crate::debug;

/// Differences smaller than this are floating-point residue, not credits
pub const CREDIT_TOLERANCE: f64 = 1e-6;

/// `difference` when it is a real shortfall or excess, otherwise 0
fn credit_gap(difference: f64) -> f64 {
    if difference > CREDIT_TOLERANCE {
        difference
    } else {
        0.0
    }
}

/// Required vs completed credits for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequirementStatus {
    /// Category being reconciled
    pub category: Category,
    /// Credits the program requires
    pub required: f64,
    /// Credits completed toward the requirement
    pub completed: f64,
    /// `max(0, required - completed)`
    pub outstanding: f64,
    /// `max(0, completed - required)`
    pub surplus: f64,
}

impl RequirementStatus {
    /// Compare completed credits against a requirement
    #[must_use]
    pub fn new(category: Category, required: f64, completed: f64) -> Self {
        Self {
            category,
            required,
            completed,
            outstanding: credit_gap(required - completed),
            surplus: credit_gap(completed - required),
        }
    }

    /// Whether the requirement is met
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.outstanding <= 0.0
    }
}

/// Per-category requirement status for one program
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// Program the requirements were taken from
    pub program: ProgramCode,
    /// One status per category, in canonical order
    statuses: Vec<RequirementStatus>,
}

impl Reconciliation {
    /// Status for every category, in canonical order
    #[must_use]
    pub fn statuses(&self) -> &[RequirementStatus] {
        &self.statuses
    }

    /// Status for one category
    #[must_use]
    pub fn status(&self, category: Category) -> &RequirementStatus {
        &self.statuses[category.index()]
    }

    /// Sum of outstanding credits
    #[must_use]
    pub fn outstanding_total(&self) -> f64 {
        self.statuses.iter().map(|s| s.outstanding).sum()
    }

    /// Sum of surplus credits
    #[must_use]
    pub fn surplus_total(&self) -> f64 {
        self.statuses.iter().map(|s| s.surplus).sum()
    }
}

/// Reconcile completion credits against the requirement row for `program`
///
/// # Errors
/// Returns `AuditError::UnknownProgram` when the table has no row for `program`
pub fn reconcile(
    aggregation: &Aggregation,
    program: &ProgramCode,
    table: &RequirementTable,
) -> Result<Reconciliation, AuditError> {
    let requirements = table.requirements_for(program)?;

    let statuses = Category::ALL
        .into_iter()
        .map(|category| {
            let completed = aggregation.totals(category).completion_credits;
            RequirementStatus::new(category, requirements.required(category), completed)
        })
        .collect();

    let reconciliation = Reconciliation {
        program: program.clone(),
        statuses,
    };
    debug!(
        "Reconciled {program}: {:.1} outstanding, {:.1} surplus",
        reconciliation.outstanding_total(),
        reconciliation.surplus_total()
    );
    Ok(reconciliation)
}

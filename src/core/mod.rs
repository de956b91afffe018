//! Degree-audit engine: transcript normalization, credit aggregation and
//! requirement reconciliation

pub mod aggregate;
pub mod error;
pub mod models;
pub mod normalize;
pub mod reconcile;
pub mod report;
pub mod transcript;

pub use aggregate::{aggregate, Aggregation, CategoryTotals};
pub use error::AuditError;
pub use normalize::{normalize_row, normalize_rows};
pub use reconcile::{reconcile, Reconciliation};
pub use report::{build_report, compute_report, ReportResult};
pub use transcript::load_transcript;

/// Returns the current version of the `DegreeCalc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

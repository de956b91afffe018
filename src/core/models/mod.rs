//! Data models for `DegreeCalc`

pub mod average;
pub mod category;
pub mod course;
pub mod grade_scale;
pub mod program;
pub mod requirements;

pub use average::{Average, ProgramAverage};
pub use category::{Category, ProgramTag};
pub use course::{CourseRecord, RawCourseRow};
pub use grade_scale::GradeScale;
pub use program::ProgramCode;
pub use requirements::{ProgramRequirements, RequirementTable};

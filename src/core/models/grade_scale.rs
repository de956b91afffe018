//! Letter grade to grade-point mapping

use std::collections::{BTreeMap, BTreeSet};

/// Maps letter grades to grade points and lists the pass/non-graded grades.
///
/// A grade missing from the point table scores zero and is left out of the
/// GPA denominator. It still counts toward completion when it is on the pass
/// list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeScale {
    points: BTreeMap<String, u8>,
    pass: BTreeSet<String>,
}

impl GradeScale {
    /// Create a scale from explicit point and pass tables
    #[must_use]
    pub fn new<P, S>(points: P, pass: S) -> Self
    where
        P: IntoIterator<Item = (String, u8)>,
        S: IntoIterator<Item = String>,
    {
        Self {
            points: points.into_iter().collect(),
            pass: pass.into_iter().collect(),
        }
    }

    /// Ten-point scale: A=10 down to D=4, with `S` and `NP` as pass grades
    #[must_use]
    pub fn ten_point() -> Self {
        let points = [
            ("A", 10),
            ("A-", 9),
            ("B", 8),
            ("B-", 7),
            ("C", 6),
            ("C-", 5),
            ("D", 4),
        ];
        Self::new(
            points.map(|(grade, value)| (grade.to_string(), value)),
            ["S", "NP"].map(str::to_string),
        )
    }

    /// Add a grade to the pass/non-graded list
    #[must_use]
    pub fn with_pass_grade(mut self, grade: &str) -> Self {
        self.pass.insert(grade.to_string());
        self
    }

    /// Grade points for `grade`, if it is a quality grade
    #[must_use]
    pub fn points(&self, grade: &str) -> Option<u8> {
        self.points.get(grade).copied()
    }

    /// Grade points for `grade`, zero when it is not on the scale
    #[must_use]
    pub fn points_or_zero(&self, grade: &str) -> f64 {
        self.points(grade).map_or(0.0, f64::from)
    }

    /// Whether the grade counts toward the GPA denominator
    #[must_use]
    pub fn is_graded(&self, grade: &str) -> bool {
        self.points.contains_key(grade)
    }

    /// Whether the grade is on the pass/non-graded list
    #[must_use]
    pub fn is_pass(&self, grade: &str) -> bool {
        self.pass.contains(grade)
    }

    /// Whether credits carrying this grade count toward requirements
    #[must_use]
    pub fn counts_for_completion(&self, grade: &str) -> bool {
        self.is_graded(grade) || self.is_pass(grade)
    }

    /// Quality grades with their points, best first
    #[must_use]
    pub fn quality_grades(&self) -> Vec<(&str, u8)> {
        let mut grades: Vec<(&str, u8)> = self
            .points
            .iter()
            .map(|(grade, value)| (grade.as_str(), *value))
            .collect();
        grades.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        grades
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::ten_point()
    }
}

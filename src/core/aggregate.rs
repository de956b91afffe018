//! Credit and grade-point aggregation
//!
//! Groups course records by category and folds each category's graded totals
//! into the program its [`ProgramTag`] names. Three averages come out: one per
//! program and a combined one.

use crate::core::models::{Category, CourseRecord, GradeScale, ProgramAverage, ProgramTag};
use crate::debug;

/// Totals for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals {
    /// The category these totals belong to
    pub category: Category,
    /// Σ credits × grade points (unknown grades score 0)
    pub earned_grade_points: f64,
    /// Credits carrying a quality grade (GPA denominator)
    pub average_credits: f64,
    /// Credits carrying a quality or pass grade (count toward requirements)
    pub completion_credits: f64,
    /// Number of records in the category, including ungraded and failed ones
    pub course_count: usize,
}

impl CategoryTotals {
    const fn empty(category: Category) -> Self {
        Self {
            category,
            earned_grade_points: 0.0,
            average_credits: 0.0,
            completion_credits: 0.0,
            course_count: 0,
        }
    }

    fn add(&mut self, record: &CourseRecord, scale: &GradeScale) {
        self.course_count += 1;
        self.earned_grade_points += record.credit_hours * scale.points_or_zero(&record.grade);
        if scale.is_graded(&record.grade) {
            self.average_credits += record.credit_hours;
        }
        if scale.counts_for_completion(&record.grade) {
            self.completion_credits += record.credit_hours;
        }
    }
}

/// Running graded totals for one program
#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    credits: f64,
    grade_points: f64,
}

/// Output of [`aggregate`]
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// One entry per category, in canonical order
    categories: Vec<CategoryTotals>,
    /// Average over primary-program categories
    pub primary: ProgramAverage,
    /// Average over secondary-program categories
    pub secondary: ProgramAverage,
    /// Average over every graded course
    pub overall: ProgramAverage,
}

impl Aggregation {
    /// Totals for every category, in canonical order
    #[must_use]
    pub fn categories(&self) -> &[CategoryTotals] {
        &self.categories
    }

    /// Totals for one category
    #[must_use]
    pub fn totals(&self, category: Category) -> &CategoryTotals {
        &self.categories[category.index()]
    }

    /// Average for the program `tag` names
    #[must_use]
    pub const fn average_for(&self, tag: ProgramTag) -> &ProgramAverage {
        match tag {
            ProgramTag::Primary => &self.primary,
            ProgramTag::Secondary => &self.secondary,
        }
    }
}

/// Aggregate course records into per-category totals and program averages
#[must_use]
pub fn aggregate(records: &[CourseRecord], scale: &GradeScale) -> Aggregation {
    let mut primary = Accumulator::default();
    let mut secondary = Accumulator::default();

    let categories: Vec<CategoryTotals> = Category::ALL
        .into_iter()
        .map(|category| {
            let mut totals = CategoryTotals::empty(category);
            for record in records.iter().filter(|r| r.category == category) {
                totals.add(record, scale);
            }

            let program = match category.tag() {
                ProgramTag::Primary => &mut primary,
                ProgramTag::Secondary => &mut secondary,
            };
            program.credits += totals.average_credits;
            program.grade_points += totals.earned_grade_points;

            debug!(
                "{category}: {} courses, {:.1} graded credits, {:.1} completion credits, {:.1} points",
                totals.course_count,
                totals.average_credits,
                totals.completion_credits,
                totals.earned_grade_points
            );
            totals
        })
        .collect();

    let primary = ProgramAverage::from_totals(
        ProgramTag::Primary.label(),
        primary.credits,
        primary.grade_points,
    );
    let secondary = ProgramAverage::from_totals(
        ProgramTag::Secondary.label(),
        secondary.credits,
        secondary.grade_points,
    );
    let overall = ProgramAverage::combine("all programs", &primary, &secondary);

    Aggregation {
        categories,
        primary,
        secondary,
        overall,
    }
}

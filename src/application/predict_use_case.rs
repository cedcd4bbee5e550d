// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// Pairs each detected course with the grade the user expects and
// asks the scorer for the CGPA band.
//
// Grades are matched to courses by position: grade i belongs to
// course i. A course without a grade gets the default grade (A),
// and surplus grades are ignored; both cases are logged.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::course::{total_credits, CourseRecord};
use crate::domain::grade::{GradeSelection, GradeSymbol};
use crate::domain::score::ScoreResult;
use crate::scoring::scorer;

/// Everything the CLI needs to show after a calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub courses:       Vec<CourseRecord>,
    pub selections:    Vec<GradeSelection>,
    pub total_credits: Decimal,
    pub result:        ScoreResult,
}

impl Prediction {
    pub fn message(&self) -> String {
        self.result.message()
    }
}

pub struct PredictUseCase;

impl PredictUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Build one selection per course from `grades`
    pub fn selections(&self, courses: &[CourseRecord], grades: &[GradeSymbol]) -> Vec<GradeSelection> {
        if grades.len() < courses.len() {
            tracing::warn!(
                "{} grades given for {} courses, the rest default to {}",
                grades.len(),
                courses.len(),
                GradeSymbol::default()
            );
        } else if grades.len() > courses.len() {
            tracing::warn!(
                "{} grades given for {} courses, ignoring the extra {}",
                grades.len(),
                courses.len(),
                grades.len() - courses.len()
            );
        }

        courses
            .iter()
            .enumerate()
            .map(|(i, course)| {
                let grade = grades.get(i).copied().unwrap_or_default();
                GradeSelection::new(course.credit, grade)
            })
            .collect()
    }

    /// Score `courses` with the expected `grades`
    pub fn execute(&self, courses: Vec<CourseRecord>, grades: &[GradeSymbol]) -> Result<Prediction> {
        let selections    = self.selections(&courses, grades);
        let total_credits = total_credits(&courses);

        let result = scorer::score(&selections, total_credits)?;

        tracing::info!(
            "Predicted CGPA {} (range {} - {}) over {} credits",
            result.average_points,
            result.lower_bound,
            result.average_points,
            total_credits
        );

        Ok(Prediction {
            courses,
            selections,
            total_credits,
            result,
        })
    }
}

impl Default for PredictUseCase {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::CgpaError;

    fn course(code: &str, credit_hundredths: i64) -> CourseRecord {
        CourseRecord::new(code, "Some Course", Decimal::new(credit_hundredths, 2))
    }

    #[test]
    fn test_prediction_message() {
        let courses = vec![course("MEM601", 300), course("MEM602", 400)];
        let p = PredictUseCase::new()
            .execute(courses, &[GradeSymbol::A, GradeSymbol::B])
            .unwrap();
        assert_eq!(p.total_credits, Decimal::new(700, 2));
        assert_eq!(p.message(), "Your expected CGPA is in between 8.36 to 8.86");
    }

    #[test]
    fn test_missing_grades_default_to_a() {
        let courses = vec![course("MEM601", 300), course("MEM602", 400)];
        let sel = PredictUseCase::new().selections(&courses, &[GradeSymbol::C]);
        assert_eq!(sel[0].grade, GradeSymbol::C);
        assert_eq!(sel[1].grade, GradeSymbol::A);
        assert_eq!(sel[1].credit, Decimal::new(400, 2));
    }

    #[test]
    fn test_extra_grades_are_ignored() {
        let courses = vec![course("MEM601", 300)];
        let sel = PredictUseCase::new().selections(&courses, &[GradeSymbol::B, GradeSymbol::F]);
        assert_eq!(sel, vec![GradeSelection::new(Decimal::new(300, 2), GradeSymbol::B)]);
    }

    #[test]
    fn test_zero_credit_courses_are_refused() {
        let courses = vec![course("SEM000", 0)];
        let err = PredictUseCase::new()
            .execute(courses, &[GradeSymbol::A])
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CgpaError>(),
            Some(CgpaError::ZeroCredits { .. })
        ));
    }

    #[test]
    fn test_single_failed_course() {
        let p = PredictUseCase::new()
            .execute(vec![course("MEM601", 300)], &[GradeSymbol::F])
            .unwrap();
        assert_eq!(p.message(), "Your expected CGPA is in between 0.00 to 0.00");
    }
}

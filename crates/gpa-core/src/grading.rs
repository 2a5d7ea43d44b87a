//! Grading engine: marks → grade points, SGPA and CGPA reducers.
//!
//! Every function here is pure. Aggregates are recomputed from the full
//! subject/semester lists on each call; nothing is maintained incrementally.

use crate::curriculum::Subject;
use crate::enums::GradePoint;
use crate::values::{Marks, Points};
use crate::ACTIVITY_POINTS_REQUIRED;

/// Minimum marks for a pass (graded grade point 5, or PASS for pass/fail).
pub const PASS_MARK: u32 = 50;

/// Lower bound of each band and the grade point it earns, highest first.
const GRADE_BANDS: [(u32, Points); 6] = [
    (90, Points::clamped(10)),
    (85, Points::clamped(9)),
    (75, Points::clamped(8)),
    (65, Points::clamped(7)),
    (55, Points::clamped(6)),
    (PASS_MARK, Points::clamped(5)),
];

/// Map marks to a grade point on the fixed 10-point scale. Below 50 is 0.
#[must_use]
pub fn grade_point(marks: Marks) -> Points {
    GRADE_BANDS
        .iter()
        .find(|(floor, _)| marks.value() >= *floor)
        .map_or(Points::ZERO, |(_, points)| *points)
}

/// Derive the outcome of `subject` for the given marks.
#[must_use]
pub fn evaluate(subject: &Subject, marks: Marks) -> GradePoint {
    if !subject.pass_fail {
        return GradePoint::Graded(grade_point(marks));
    }
    if marks.value() >= PASS_MARK {
        GradePoint::PassFailPass
    } else {
        GradePoint::PassFailFail
    }
}

/// Credits that count toward GPA arithmetic.
#[must_use]
pub fn semester_credits(subjects: &[Subject]) -> u32 {
    subjects
        .iter()
        .filter(|subject| subject.credits > 0)
        .map(|subject| subject.credits)
        .sum()
}

/// Σ grade points × credits over GPA-counted subjects.
///
/// `grades` is positionally aligned with `subjects`; subjects without a
/// numeric grade contribute nothing.
#[must_use]
pub fn credit_points(subjects: &[Subject], grades: &[GradePoint]) -> u32 {
    subjects
        .iter()
        .zip(grades)
        .filter(|(subject, _)| subject.credits > 0)
        .filter_map(|(subject, grade)| grade.points().map(|p| p.value() * subject.credits))
        .sum()
}

/// Credit-weighted mean grade point of one semester; 0 without GPA credits.
#[must_use]
pub fn sgpa(subjects: &[Subject], grades: &[GradePoint]) -> f64 {
    let credits = semester_credits(subjects);
    if credits == 0 {
        return 0.0;
    }
    f64::from(credit_points(subjects, grades)) / f64::from(credits)
}

/// One semester's contribution to the cumulative average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemesterWeight {
    pub sgpa: f64,
    pub credits: u32,
}

/// Credit-weighted mean of semester SGPAs.
///
/// Falls back to `current_sgpa` when the included semesters carry no GPA
/// credits at all.
#[must_use]
pub fn cgpa<I>(semesters: I, current_sgpa: f64) -> f64
where
    I: IntoIterator<Item = SemesterWeight>,
{
    let (weighted, credits) = semesters
        .into_iter()
        .fold((0.0_f64, 0_u32), |(weighted, credits), semester| {
            (
                f64::from(semester.credits).mul_add(semester.sgpa, weighted),
                credits + semester.credits,
            )
        });

    if credits == 0 {
        current_sgpa
    } else {
        weighted / f64::from(credits)
    }
}

/// Activity points still missing toward the degree requirement.
#[must_use]
pub const fn activity_shortfall(total: u32) -> u32 {
    ACTIVITY_POINTS_REQUIRED.saturating_sub(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(value: u32) -> Marks {
        Marks::new(value).expect("test marks are in range")
    }

    #[test]
    fn grade_bands_cover_every_mark() {
        for value in 0..=100 {
            let points = grade_point(marks(value)).value();
            assert!(points == 0 || (5..=10).contains(&points), "{value} -> {points}");
        }
    }

    #[test]
    fn pass_fail_subjects_never_get_numeric_points() {
        let subject = Subject::pass_fail("Professional Communication (P/F)");
        assert_eq!(evaluate(&subject, marks(100)), GradePoint::PassFailPass);
        assert_eq!(evaluate(&subject, marks(0)), GradePoint::PassFailFail);
    }

    #[test]
    fn credit_points_ignore_ungraded_subjects() {
        let subjects = vec![Subject::graded("A", 4), Subject::graded("B", 3)];
        let grades = vec![GradePoint::Graded(Points::clamped(10)), GradePoint::Ungraded];
        assert_eq!(credit_points(&subjects, &grades), 40);
    }

    #[test]
    fn cgpa_of_nothing_falls_back_to_current() {
        assert!((cgpa(std::iter::empty(), 6.5) - 6.5).abs() < f64::EPSILON);
    }

    #[test]
    fn activity_shortfall_saturates() {
        assert_eq!(activity_shortfall(0), 150);
        assert_eq!(activity_shortfall(120), 30);
        assert_eq!(activity_shortfall(300), 0);
    }
}

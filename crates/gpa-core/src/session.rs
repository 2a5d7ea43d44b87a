//! Per-run session state layered 1:1 onto the curriculum.
//!
//! A [`Session`] borrows the immutable [`Curriculum`] and owns every mutable
//! field: marks, derived grades, SGPA, CGPA, completion, activity points and
//! the pass/fail failure flag. Independent sessions can share one curriculum.

use crate::curriculum::{Branch, Curriculum, Semester};
use crate::enums::{BranchCode, GradePoint};
use crate::errors::CoreError;
use crate::grading::{self, SemesterWeight};
use crate::reports::{BranchSummary, SemesterReport};
use crate::values::{ActivityPoints, Marks};

/// Mutable overlay of one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectState {
    /// `None` until marks are entered; distinct from a mark of 0.
    pub marks: Option<Marks>,
    pub grade: GradePoint,
}

/// Mutable overlay of one semester.
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterState {
    pub subjects: Vec<SubjectState>,
    pub sgpa: f64,
    pub completed: bool,
    pub pass_fail_failed: bool,
    pub activity_points: ActivityPoints,
}

impl SemesterState {
    fn pending(spec: &Semester) -> Self {
        Self {
            subjects: spec
                .subjects
                .iter()
                .map(|subject| SubjectState {
                    marks: None,
                    grade: GradePoint::pending(subject.pass_fail),
                })
                .collect(),
            sgpa: 0.0,
            completed: false,
            pass_fail_failed: false,
            activity_points: ActivityPoints::default(),
        }
    }

    #[must_use]
    pub fn grades(&self) -> Vec<GradePoint> {
        self.subjects.iter().map(|subject| subject.grade).collect()
    }

    /// Pass/fail subjects of this semester currently in FAIL.
    #[must_use]
    pub fn pass_fail_failures(&self) -> usize {
        self.subjects
            .iter()
            .filter(|subject| subject.grade.is_pass_fail_failure())
            .count()
    }
}

/// Mutable overlay of one branch.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchState {
    pub cgpa: f64,
    pub semesters: Vec<SemesterState>,
}

impl BranchState {
    fn pending(spec: &Branch) -> Self {
        Self {
            cgpa: 0.0,
            semesters: spec.semesters.iter().map(SemesterState::pending).collect(),
        }
    }

    /// Sum of per-semester activity points; ungraded semesters contribute 0.
    #[must_use]
    pub fn total_activity_points(&self) -> u32 {
        self.semesters
            .iter()
            .map(|semester| semester.activity_points.value())
            .sum()
    }

    #[must_use]
    pub fn pass_fail_failures(&self) -> usize {
        self.semesters
            .iter()
            .map(SemesterState::pass_fail_failures)
            .sum()
    }
}

/// One interactive run's grade book.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    curriculum: &'c Curriculum,
    branches: Vec<BranchState>,
}

impl<'c> Session<'c> {
    #[must_use]
    pub fn new(curriculum: &'c Curriculum) -> Self {
        Self {
            curriculum,
            branches: curriculum.branches().iter().map(BranchState::pending).collect(),
        }
    }

    #[must_use]
    pub const fn curriculum(&self) -> &'c Curriculum {
        self.curriculum
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownBranch`] when the curriculum lacks `code`.
    pub fn branch(&self, code: BranchCode) -> Result<&BranchState, CoreError> {
        let index = self.position(code)?;
        Ok(&self.branches[index])
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownBranch`] or [`CoreError::SemesterOutOfRange`].
    pub fn semester(&self, code: BranchCode, number: usize) -> Result<&SemesterState, CoreError> {
        self.curriculum.semester(code, number)?;
        Ok(&self.branch(code)?.semesters[number - 1])
    }

    /// Enter marks and activity points for one semester and regrade.
    ///
    /// In a single step this stores the marks and derived grades, the
    /// activity points, the pass/fail failure flag, the semester SGPA, the
    /// branch CGPA, and marks the semester completed. Re-entering overwrites
    /// every previous value for the semester.
    ///
    /// `marks` is positionally aligned with the semester's subject list.
    ///
    /// # Errors
    ///
    /// Fails without touching state when the branch or semester is unknown,
    /// the semester has no subjects, or the mark count does not match.
    pub fn record_semester(
        &mut self,
        code: BranchCode,
        number: usize,
        marks: &[Marks],
        activity_points: ActivityPoints,
    ) -> Result<&SemesterState, CoreError> {
        let curriculum = self.curriculum;
        let index = self.position(code)?;
        let branch = &curriculum.branches()[index];
        let spec = branch.semester(number)?;

        if spec.is_empty() {
            return Err(CoreError::EmptySemester {
                branch: code,
                semester: number,
            });
        }
        if marks.len() != spec.subjects.len() {
            return Err(CoreError::SubjectCountMismatch {
                branch: code,
                semester: number,
                expected: spec.subjects.len(),
                actual: marks.len(),
            });
        }

        let slot = number - 1;
        let state = &mut self.branches[index];
        let semester = &mut state.semesters[slot];

        semester.subjects = spec
            .subjects
            .iter()
            .zip(marks)
            .map(|(subject, &marks)| SubjectState {
                marks: Some(marks),
                grade: grading::evaluate(subject, marks),
            })
            .collect();
        semester.activity_points = activity_points;
        semester.pass_fail_failed = semester.pass_fail_failures() > 0;
        semester.sgpa = grading::sgpa(&spec.subjects, &semester.grades());
        let current_sgpa = semester.sgpa;

        // The semester being graded counts even before it is flagged completed.
        let weights = branch
            .semesters
            .iter()
            .zip(&state.semesters)
            .enumerate()
            .filter(|(position, (_, overlay))| overlay.completed || *position == slot)
            .map(|(_, (shape, overlay))| SemesterWeight {
                sgpa: overlay.sgpa,
                credits: shape.gpa_credits(),
            });
        let cgpa = grading::cgpa(weights, current_sgpa);

        state.cgpa = cgpa;
        state.semesters[slot].completed = true;

        tracing::debug!(
            branch = %code,
            semester = number,
            sgpa = current_sgpa,
            cgpa,
            "semester recorded"
        );

        Ok(&state.semesters[slot])
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownBranch`] when the curriculum lacks `code`.
    pub fn total_activity_points(&self, code: BranchCode) -> Result<u32, CoreError> {
        Ok(self.branch(code)?.total_activity_points())
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownBranch`] when the curriculum lacks `code`.
    pub fn pass_fail_failures(&self, code: BranchCode) -> Result<usize, CoreError> {
        Ok(self.branch(code)?.pass_fail_failures())
    }

    /// Build the report view for one semester from the current state.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownBranch`] or [`CoreError::SemesterOutOfRange`].
    pub fn semester_report(
        &self,
        code: BranchCode,
        number: usize,
    ) -> Result<SemesterReport, CoreError> {
        let branch = self.curriculum.branch(code)?;
        let spec = branch.semester(number)?;
        let state = self.branch(code)?;
        Ok(SemesterReport::new(
            branch,
            spec,
            &state.semesters[number - 1],
            state,
        ))
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownBranch`] when the curriculum lacks `code`.
    pub fn branch_summary(&self, code: BranchCode) -> Result<BranchSummary, CoreError> {
        let branch = self.curriculum.branch(code)?;
        Ok(BranchSummary::new(branch, self.branch(code)?))
    }

    fn position(&self, code: BranchCode) -> Result<usize, CoreError> {
        self.curriculum
            .branches()
            .iter()
            .position(|branch| branch.code == code)
            .ok_or_else(|| CoreError::UnknownBranch(code.to_string()))
    }
}

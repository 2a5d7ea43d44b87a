//! Report view models rendered by the CLI.
//!
//! These carry every figure already computed by the grading engine so the
//! formatter only lays them out.

use std::fmt;

use crate::ACTIVITY_POINTS_REQUIRED;
use crate::curriculum::{Branch, Semester, Subject};
use crate::enums::{BranchCode, GradePoint};
use crate::grading::{self, PASS_MARK};
use crate::session::{BranchState, SemesterState, SubjectState};
use crate::values::{ActivityPoints, Marks};

/// Annotation shown next to a subject line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectNote {
    None,
    PassFailPass,
    PassFailFail,
    PassFailPending,
    /// Graded subject scored below the pass mark.
    NeedsReappear,
}

impl SubjectNote {
    #[must_use]
    pub fn for_subject(subject: &Subject, state: &SubjectState) -> Self {
        match state.grade {
            GradePoint::PassFailPass => Self::PassFailPass,
            GradePoint::PassFailFail => Self::PassFailFail,
            GradePoint::PassFailPending => Self::PassFailPending,
            GradePoint::Graded(_) | GradePoint::Ungraded => {
                let failed = !subject.pass_fail
                    && state.marks.is_some_and(|marks| marks.value() < PASS_MARK);
                if failed { Self::NeedsReappear } else { Self::None }
            }
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::PassFailPass => "PASS/FAIL: pass",
            Self::PassFailFail => "PASS/FAIL: fail (reappear)",
            Self::PassFailPending => "PASS/FAIL: pending",
            Self::NeedsReappear => "FAIL (needs reappear)",
        }
    }
}

impl fmt::Display for SubjectNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the semester table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectLine {
    pub name: String,
    pub credits: u32,
    pub marks: Option<Marks>,
    pub grade: GradePoint,
    pub note: SubjectNote,
}

/// Everything shown after a semester is graded.
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterReport {
    pub branch_code: BranchCode,
    pub branch_name: String,
    pub semester: usize,
    pub lines: Vec<SubjectLine>,
    /// Credits counted for GPA (pass/fail excluded).
    pub gpa_credits: u32,
    /// Σ grade points × credits.
    pub credit_points: u32,
    pub sgpa: f64,
    pub cgpa: f64,
    pub activity_points: ActivityPoints,
    pub total_activity_points: u32,
    pub activity_required: u32,
    pub pass_fail_failed: bool,
}

impl SemesterReport {
    #[must_use]
    pub fn new(
        branch: &Branch,
        spec: &Semester,
        semester: &SemesterState,
        state: &BranchState,
    ) -> Self {
        let lines = spec
            .subjects
            .iter()
            .zip(&semester.subjects)
            .map(|(subject, subject_state)| SubjectLine {
                name: subject.name.clone(),
                credits: subject.credits,
                marks: subject_state.marks,
                grade: subject_state.grade,
                note: SubjectNote::for_subject(subject, subject_state),
            })
            .collect();

        Self {
            branch_code: branch.code,
            branch_name: branch.name.clone(),
            semester: spec.number,
            lines,
            gpa_credits: spec.gpa_credits(),
            credit_points: grading::credit_points(&spec.subjects, &semester.grades()),
            sgpa: semester.sgpa,
            cgpa: state.cgpa,
            activity_points: semester.activity_points,
            total_activity_points: state.total_activity_points(),
            activity_required: ACTIVITY_POINTS_REQUIRED,
            pass_fail_failed: semester.pass_fail_failed,
        }
    }
}

/// Branch-level activity and pass/fail totals.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchSummary {
    pub branch_code: BranchCode,
    pub branch_name: String,
    pub cgpa: f64,
    pub completed_semesters: Vec<usize>,
    pub total_activity_points: u32,
    pub activity_required: u32,
    pub activity_shortfall: u32,
    pub pass_fail_failures: usize,
}

impl BranchSummary {
    #[must_use]
    pub fn new(branch: &Branch, state: &BranchState) -> Self {
        let total_activity_points = state.total_activity_points();
        Self {
            branch_code: branch.code,
            branch_name: branch.name.clone(),
            cgpa: state.cgpa,
            completed_semesters: branch
                .semesters
                .iter()
                .zip(&state.semesters)
                .filter(|(_, semester)| semester.completed)
                .map(|(spec, _)| spec.number)
                .collect(),
            total_activity_points,
            activity_required: ACTIVITY_POINTS_REQUIRED,
            activity_shortfall: grading::activity_shortfall(total_activity_points),
            pass_fail_failures: state.pass_fail_failures(),
        }
    }

    #[must_use]
    pub const fn activity_requirement_met(&self) -> bool {
        self.activity_shortfall == 0
    }
}

use gpa_core::SEMESTER_COUNT;
use gpa_core::curriculum::{Branch, Curriculum, Subject};
use gpa_core::enums::BranchCode;

use crate::error::CurriculumError;

/// Check the invariants every curriculum table must satisfy.
///
/// - exactly the five branches, in menu order (CE, ME, EEE, ECE, CS)
/// - each branch owns semesters `1..=8`, in order
/// - subject names are non-empty
/// - pass/fail subjects carry zero credits; graded subjects carry credits
///
/// Semesters without subjects are allowed; they simply cannot be graded.
///
/// # Errors
///
/// Returns the first violated invariant as a [`CurriculumError`].
pub fn validate(curriculum: &Curriculum) -> Result<(), CurriculumError> {
    let found: Vec<BranchCode> = curriculum.branches.iter().map(|branch| branch.code).collect();
    if found != BranchCode::ALL {
        return Err(CurriculumError::BranchOrder {
            expected: BranchCode::ALL.iter().map(ToString::to_string).collect(),
            found: found.iter().map(ToString::to_string).collect(),
        });
    }

    for branch in &curriculum.branches {
        validate_branch(branch)?;
    }
    Ok(())
}

fn validate_branch(branch: &Branch) -> Result<(), CurriculumError> {
    let numbers: Vec<usize> = branch.semesters.iter().map(|semester| semester.number).collect();
    if !numbers.iter().copied().eq(1..=SEMESTER_COUNT) {
        return Err(CurriculumError::SemesterLayout {
            branch: branch.code.to_string(),
            expected: SEMESTER_COUNT,
            found: numbers,
        });
    }

    for semester in &branch.semesters {
        for (index, subject) in semester.subjects.iter().enumerate() {
            if let Some(reason) = subject_violation(subject) {
                return Err(CurriculumError::InvalidSubject {
                    branch: branch.code.to_string(),
                    semester: semester.number,
                    position: index + 1,
                    reason,
                });
            }
        }
    }
    Ok(())
}

fn subject_violation(subject: &Subject) -> Option<String> {
    if subject.name.trim().is_empty() {
        return Some("subject name is empty".to_string());
    }
    if subject.pass_fail && subject.credits != 0 {
        return Some(format!(
            "pass/fail subject '{}' must carry 0 credits, found {}",
            subject.name, subject.credits
        ));
    }
    if !subject.pass_fail && subject.credits == 0 {
        return Some(format!(
            "graded subject '{}' must carry credits",
            subject.name
        ));
    }
    None
}

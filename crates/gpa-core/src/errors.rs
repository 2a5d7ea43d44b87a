//! Cross-cutting error types for the calculator.
//!
//! Data-loading errors (`CurriculumError`) and configuration errors
//! (`ConfigError`) live in their own crates. The binary converges all of
//! them into `anyhow`.

use thiserror::Error;

use crate::enums::BranchCode;

/// Errors raised by the grading engine and session state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Branch code does not name one of the five programs.
    #[error("Unknown branch code: {0}")]
    UnknownBranch(String),

    /// Semester number outside `1..=8`.
    #[error("Semester {number} is out of range (1-{max})")]
    SemesterOutOfRange { number: usize, max: usize },

    /// A bounded value (marks, activity points) was outside its range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Number of marks supplied does not match the semester's subject list.
    #[error("{branch} semester {semester} has {expected} subjects, got {actual} marks")]
    SubjectCountMismatch {
        branch: BranchCode,
        semester: usize,
        expected: usize,
        actual: usize,
    },

    /// The semester has no configured subjects and cannot be graded.
    #[error("No subject data for semester {semester} in branch {branch}")]
    EmptySemester { branch: BranchCode, semester: usize },
}

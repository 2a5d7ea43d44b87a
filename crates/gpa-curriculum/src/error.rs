//! Curriculum loading error types.

use thiserror::Error;

/// Errors raised while parsing or validating a curriculum table.
#[derive(Debug, Error)]
pub enum CurriculumError {
    /// The TOML source is malformed or does not match the table shape.
    #[error("failed to parse curriculum: {0}")]
    Parse(#[from] toml::de::Error),

    /// Branches are missing, duplicated, or out of menu order.
    #[error("expected branches {expected:?}, found {found:?}")]
    BranchOrder {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A branch does not own exactly the semesters `1..=8` in order.
    #[error("branch {branch}: expected semesters 1-{expected}, found {found:?}")]
    SemesterLayout {
        branch: String,
        expected: usize,
        found: Vec<usize>,
    },

    /// A subject violates a curriculum invariant.
    #[error("branch {branch} semester {semester} subject {position}: {reason}")]
    InvalidSubject {
        branch: String,
        semester: usize,
        /// 1-based position within the semester.
        position: usize,
        reason: String,
    },
}

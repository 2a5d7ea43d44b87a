//! Static curriculum shape: branches, semesters, and subjects.
//!
//! These types mirror the curriculum table one-to-one and are deserialized by
//! `gpa-curriculum`. Nothing in the workspace mutates them after loading.

use serde::{Deserialize, Serialize};

use crate::SEMESTER_COUNT;
use crate::enums::BranchCode;
use crate::errors::CoreError;
use crate::grading;

/// One curriculum line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub credits: u32,
    /// Graded PASS/FAIL instead of a grade point; always zero credits.
    #[serde(default)]
    pub pass_fail: bool,
}

impl Subject {
    #[must_use]
    pub fn graded(name: impl Into<String>, credits: u32) -> Self {
        Self {
            name: name.into(),
            credits,
            pass_fail: false,
        }
    }

    #[must_use]
    pub fn pass_fail(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credits: 0,
            pass_fail: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// 1-based slot within the branch.
    pub number: usize,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Semester {
    /// Credits that count toward SGPA/CGPA (pass/fail subjects excluded).
    #[must_use]
    pub fn gpa_credits(&self) -> u32 {
        grading::semester_credits(&self.subjects)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub code: BranchCode,
    pub name: String,
    pub semesters: Vec<Semester>,
}

impl Branch {
    /// Look up a semester by its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SemesterOutOfRange`] for numbers outside `1..=8`
    /// or slots the table does not define.
    pub fn semester(&self, number: usize) -> Result<&Semester, CoreError> {
        number
            .checked_sub(1)
            .filter(|_| number <= SEMESTER_COUNT)
            .and_then(|index| self.semesters.get(index))
            .ok_or(CoreError::SemesterOutOfRange {
                number,
                max: SEMESTER_COUNT,
            })
    }
}

/// The full, immutable curriculum table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    pub branches: Vec<Branch>,
}

impl Curriculum {
    #[must_use]
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownBranch`] when the table has no such branch.
    pub fn branch(&self, code: BranchCode) -> Result<&Branch, CoreError> {
        self.branches
            .iter()
            .find(|branch| branch.code == code)
            .ok_or_else(|| CoreError::UnknownBranch(code.to_string()))
    }

    /// # Errors
    ///
    /// Propagates [`Curriculum::branch`] and [`Branch::semester`] errors.
    pub fn semester(&self, code: BranchCode, number: usize) -> Result<&Semester, CoreError> {
        self.branch(code)?.semester(number)
    }
}

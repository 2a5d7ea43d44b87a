//! Branch codes and grade-point outcomes.
//!
//! Branch codes serialize as their upper-case labels (`"CE"`, `"EEE"`, ...),
//! matching the curriculum table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;
use crate::values::Points;

// ---------------------------------------------------------------------------
// BranchCode
// ---------------------------------------------------------------------------

/// One of the five fixed academic programs, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BranchCode {
    Ce,
    Me,
    Eee,
    Ece,
    Cs,
}

impl BranchCode {
    /// All branches in menu order.
    pub const ALL: [Self; 5] = [Self::Ce, Self::Me, Self::Eee, Self::Ece, Self::Cs];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ce => "CE",
            Self::Me => "ME",
            Self::Eee => "EEE",
            Self::Ece => "ECE",
            Self::Cs => "CS",
        }
    }
}

impl fmt::Display for BranchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BranchCode {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownBranch(trimmed.to_string()))
    }
}

// ---------------------------------------------------------------------------
// GradePoint
// ---------------------------------------------------------------------------

/// Derived outcome of a subject.
///
/// Graded subjects move `Ungraded → Graded(points)`; pass/fail subjects move
/// `PassFailPending → PassFailPass | PassFailFail`. Re-entering marks can
/// move between the terminal states of the same family, never across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradePoint {
    Ungraded,
    Graded(Points),
    PassFailPending,
    PassFailPass,
    PassFailFail,
}

impl GradePoint {
    /// Initial outcome before any marks are entered.
    #[must_use]
    pub const fn pending(pass_fail: bool) -> Self {
        if pass_fail {
            Self::PassFailPending
        } else {
            Self::Ungraded
        }
    }

    /// Numeric points for graded subjects; `None` for pass/fail or ungraded.
    #[must_use]
    pub const fn points(self) -> Option<Points> {
        match self {
            Self::Graded(points) => Some(points),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_pass_fail(self) -> bool {
        matches!(
            self,
            Self::PassFailPending | Self::PassFailPass | Self::PassFailFail
        )
    }

    #[must_use]
    pub const fn is_pass_fail_failure(self) -> bool {
        matches!(self, Self::PassFailFail)
    }
}

impl fmt::Display for GradePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ungraded => f.write_str("ungraded"),
            Self::Graded(points) => write!(f, "{points}"),
            Self::PassFailPending => f.write_str("pending"),
            Self::PassFailPass => f.write_str("pass"),
            Self::PassFailFail => f.write_str("fail"),
        }
    }
}

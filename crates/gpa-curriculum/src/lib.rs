//! # gpa-curriculum
//!
//! The curriculum data store: five branches, eight semesters each, with the
//! published subject names, credit weights and pass/fail flags.
//!
//! The table is pure data. It ships as an embedded TOML resource
//! (`data/curriculum.toml`) and is parsed into
//! [`gpa_core::curriculum::Curriculum`] once per process.
//!
//! # Usage
//!
//! ```no_run
//! use gpa_core::enums::BranchCode;
//!
//! let curriculum = gpa_curriculum::published().expect("embedded curriculum is valid");
//! let semester = curriculum.semester(BranchCode::Cs, 1).expect("CS S1 exists");
//! println!("{} subjects", semester.subjects.len());
//! ```

mod error;
mod validate;

pub use error::CurriculumError;
pub use validate::validate;

use std::sync::OnceLock;

use gpa_core::curriculum::Curriculum;

/// Raw TOML of the published curriculum.
pub const EMBEDDED: &str = include_str!("../data/curriculum.toml");

static PUBLISHED: OnceLock<Curriculum> = OnceLock::new();

/// Shared, read-only published curriculum, parsed on first use.
///
/// # Errors
///
/// Returns [`CurriculumError`] if the embedded table fails to parse or
/// validate.
pub fn published() -> Result<&'static Curriculum, CurriculumError> {
    if let Some(curriculum) = PUBLISHED.get() {
        return Ok(curriculum);
    }
    let curriculum = load()?;
    Ok(PUBLISHED.get_or_init(|| curriculum))
}

/// Parse and validate a fresh copy of the embedded curriculum.
///
/// # Errors
///
/// Returns [`CurriculumError`] if the embedded table fails to parse or
/// validate.
pub fn load() -> Result<Curriculum, CurriculumError> {
    let curriculum = parse(EMBEDDED)?;
    validate(&curriculum)?;
    tracing::debug!(
        branches = curriculum.branches.len(),
        subjects = curriculum
            .branches
            .iter()
            .flat_map(|branch| &branch.semesters)
            .map(|semester| semester.subjects.len())
            .sum::<usize>(),
        "curriculum loaded"
    );
    Ok(curriculum)
}

/// Parse a curriculum table from TOML without validating it.
///
/// # Errors
///
/// Returns [`CurriculumError::Parse`] for malformed TOML or unknown branch
/// codes.
pub fn parse(source: &str) -> Result<Curriculum, CurriculumError> {
    toml::from_str(source).map_err(CurriculumError::from)
}

//! # gpa-core
//!
//! Core types, grading engine, and session state for the SGPA/CGPA calculator.
//!
//! This crate provides the foundational types shared across all `gpa` crates:
//! - Branch codes and the tagged grade-point outcome
//! - Validated marks and activity-point values
//! - The static curriculum shape (branches, semesters, subjects)
//! - Pure grading functions (grade points, SGPA, CGPA)
//! - The mutable per-run session overlay
//! - Report view models rendered by the CLI
//! - Cross-cutting error types

pub mod curriculum;
pub mod enums;
pub mod errors;
pub mod grading;
pub mod reports;
pub mod session;
pub mod values;

pub use errors::CoreError;

/// Number of semesters every branch owns.
pub const SEMESTER_COUNT: usize = 8;

/// Cumulative activity points required for the degree.
pub const ACTIVITY_POINTS_REQUIRED: u32 = 150;

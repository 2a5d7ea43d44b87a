//! Validated input values.
//!
//! `Marks`, `ActivityPoints` and `Points` can only be built through their checked
//! constructors, so every value stored in a session is within range.

use std::fmt;

use crate::errors::CoreError;

/// Raw marks for one subject, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Marks(u8);

impl Marks {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 100;

    /// # Errors
    ///
    /// Returns [`CoreError::OutOfRange`] when `value` exceeds 100.
    pub fn new(value: u32) -> Result<Self, CoreError> {
        checked(value, Self::MAX, "marks").map(Self)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<u32> for Marks {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Marks> for u32 {
    fn from(marks: Marks) -> Self {
        marks.value()
    }
}

impl fmt::Display for Marks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Activity points earned in one semester, `0..=150`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActivityPoints(u8);

impl ActivityPoints {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 150;

    /// # Errors
    ///
    /// Returns [`CoreError::OutOfRange`] when `value` exceeds 150.
    pub fn new(value: u32) -> Result<Self, CoreError> {
        checked(value, Self::MAX, "activity points").map(Self)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<u32> for ActivityPoints {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActivityPoints> for u32 {
    fn from(points: ActivityPoints) -> Self {
        points.value()
    }
}

impl fmt::Display for ActivityPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grade points earned by a graded subject, `0..=10`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(u8);

impl Points {
    pub const MAX: u32 = 10;
    pub const ZERO: Self = Self(0);

    /// # Errors
    ///
    /// Returns [`CoreError::OutOfRange`] when `value` exceeds 10.
    pub fn new(value: u32) -> Result<Self, CoreError> {
        checked(value, Self::MAX, "grade points").map(Self)
    }

    /// Build from a scale constant, saturating at 10.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value as u32 > Self::MAX {
            Self(Self::MAX as u8)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<u32> for Points {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn checked(value: u32, max: u32, field: &'static str) -> Result<u8, CoreError> {
    u8::try_from(value)
        .ok()
        .filter(|_| value <= max)
        .ok_or(CoreError::OutOfRange {
            field,
            value: i64::from(value),
            min: 0,
            max: i64::from(max),
        })
}

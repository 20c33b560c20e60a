//! Academic terms and exam slots.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque academic term identifier.
///
/// Two terms are equal iff their identifiers are equal.
///
/// # Example
///
/// ```rust
/// use enrollment::core::Term;
///
/// let fall = Term::new("2023-fall");
/// assert_eq!(fall, Term::new("2023-fall"));
/// assert_ne!(fall, Term::new("2024-spring"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scheduled exam slot of an offering.
///
/// Only equality matters to enrollment: two offerings collide when their
/// exam times are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamTime(NaiveDateTime);

impl ExamTime {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Exam slot on `date` starting at `hour:minute`.
    ///
    /// Returns `None` for an out-of-range hour or minute.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use enrollment::core::ExamTime;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// assert!(ExamTime::at(day, 10, 0).is_some());
    /// assert!(ExamTime::at(day, 25, 0).is_none());
    /// ```
    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> Option<Self> {
        date.and_hms_opt(hour, minute, 0).map(Self)
    }
}

impl fmt::Display for ExamTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

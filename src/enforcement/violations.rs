//! Rule violations and the aggregated enrollment rejection.

use serde::{Deserialize, Serialize};
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single broken enrollment rule.
///
/// `Display` renders the line that appears in the rejection report.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum Violation {
    #[error("The student has already passed {course}")]
    AlreadyPassed { course: String },

    #[error("The student has not passed {prerequisite} as a prerequisite of {course}")]
    MissingPrerequisite { prerequisite: String, course: String },

    #[error("Two offerings {first} and {second} have the same exam time")]
    ExamTimeCollision { first: String, second: String },

    #[error("{course} is requested to be taken twice")]
    DuplicateRequest { course: String },

    #[error("Number of units ({units}) requested does not match GPA of {}", format_gpa(.gpa))]
    UnitsLimitation { units: u32, gpa: Option<f64> },

    #[error("{message}")]
    Custom { message: String },
}

/// Six decimals, `N/A` for a student without graded units.
fn format_gpa(gpa: &Option<f64>) -> String {
    match gpa {
        Some(gpa) => format!("{gpa:.6}"),
        None => "N/A".to_string(),
    }
}

/// Rejection of a proposed enrollment, listing every violated rule.
///
/// The report holds one newline-terminated line per violation, in
/// evaluation order. Nothing was committed when this is returned.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{report}")]
pub struct EnrollmentRulesViolation {
    violations: Vec<Violation>,
    report: String,
}

// A rejection always carries at least one violation.
#[allow(clippy::len_without_is_empty)]
impl EnrollmentRulesViolation {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        let report = violations
            .iter()
            .map(|violation| format!("{violation}\n"))
            .collect();
        Self { violations, report }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn report(&self) -> &str {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }
}

impl From<NonEmptyVec<Violation>> for EnrollmentRulesViolation {
    fn from(violations: NonEmptyVec<Violation>) -> Self {
        Self::new(violations.into_vec())
    }
}

//! Transcript record errors.

use thiserror::Error;

/// Errors that can occur when recording a grade
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    /// Grade is NaN, infinite or outside the 0-20 scale
    #[error("Grade {grade} is outside the range [{min}, {max}]")]
    GradeOutOfRange { grade: f64, min: f64, max: f64 },
}

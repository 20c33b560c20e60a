//! Core catalogue records used by enrollment.
//!
//! This module contains the immutable values the rules engine reads:
//! - `Course` with its unit weight and prerequisites
//! - `Term` identifiers for transcript records
//! - `Offering` sections with their exam slot
//!
//! Nothing here mutates after construction.

mod course;
mod offering;
mod term;

pub use course::Course;
pub use offering::Offering;
pub use term::{ExamTime, Term};

//! Enrollment: course registration checked against academic rules
//!
//! Given a student with a transcript and a proposed list of course
//! offerings, the controller either registers the student for all of them
//! or rejects the request with a report of every rule it breaks.
//!
//! # Core Concepts
//!
//! - **Course / Offering**: Immutable catalogue records
//! - **Transcript**: Per-term grades answering "passed?" and "GPA?"
//! - **Rules**: Pure checks whose violations accumulate instead of failing fast
//! - **Commit**: All-or-nothing registration after a clean validation
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use enrollment::controller::EnrollmentController;
//! use enrollment::core::{Course, ExamTime, Offering, Term};
//! use enrollment::student::Student;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let math1 = Course::new("m1", "Math1", 3, vec![]);
//! let phys1 = Course::new("p1", "Phys1", 3, vec![]);
//!
//! let mut student = Student::new("810199999", "Ada");
//! student
//!     .add_transcript_record(math1.clone(), Term::new("2023-fall"), 14.0)
//!     .unwrap();
//!
//! let controller = EnrollmentController::new();
//! let offerings = vec![
//!     Offering::new(math1, 1, ExamTime::at(day, 9, 0).unwrap()),
//!     Offering::new(phys1, 1, ExamTime::at(day, 9, 0).unwrap()),
//! ];
//!
//! let rejection = controller.enroll(&mut student, &offerings).unwrap_err();
//! assert_eq!(
//!     rejection.report(),
//!     "The student has already passed Math1\n\
//!      Two offerings Math1 and Phys1 have the same exam time\n\
//!      Two offerings Phys1 and Math1 have the same exam time\n"
//! );
//! assert!(student.current_term_offerings().is_empty());
//! ```

pub mod controller;
pub mod core;
pub mod enforcement;
pub mod student;
pub mod transcript;

// Re-export commonly used types
pub use controller::EnrollmentController;
pub use crate::core::{Course, ExamTime, Offering, Term};
pub use enforcement::{EnrollmentBuilder, EnrollmentPolicy, EnrollmentRulesViolation, Violation};
pub use student::{CourseSelection, Student};
pub use transcript::{Transcript, TermTranscript};

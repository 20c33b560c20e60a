//! Students, their transcript and the offerings they hold this term.

use crate::core::{Course, Term};
use crate::transcript::{RecordError, Transcript};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A course section the student is registered for in the current term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSelection {
    pub course: Course,
    pub section: u32,
}

/// A student with an owned transcript and current-term registrations.
///
/// The current-term list only grows through a successful
/// [`EnrollmentController::enroll`](crate::controller::EnrollmentController::enroll).
///
/// # Example
///
/// ```rust
/// use enrollment::core::{Course, Term};
/// use enrollment::student::Student;
///
/// let math1 = Course::new("m1", "Math1", 3, vec![]);
/// let mut student = Student::new("810199999", "Ada");
///
/// student
///     .add_transcript_record(math1.clone(), Term::new("2023-fall"), 14.0)
///     .unwrap();
///
/// assert!(student.has_passed(&math1));
/// assert_eq!(student.calculate_gpa(), Some(14.0));
/// assert!(student.current_term_offerings().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    id: String,
    name: String,
    transcript: Transcript,
    current_term: Vec<CourseSelection>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            transcript: Transcript::new(),
            current_term: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Registrations for the current term, in the order they were committed.
    pub fn current_term_offerings(&self) -> &[CourseSelection] {
        &self.current_term
    }

    pub fn add_transcript_record(
        &mut self,
        course: Course,
        term: Term,
        grade: f64,
    ) -> Result<(), RecordError> {
        self.transcript.add_record(course, term, grade)
    }

    pub fn has_passed(&self, course: &Course) -> bool {
        self.transcript.has_passed(course)
    }

    pub fn calculate_gpa(&self) -> Option<f64> {
        self.transcript.calculate_gpa()
    }

    /// Register for a section. Only the controller commits registrations.
    pub(crate) fn take_course(&mut self, course: Course, section: u32) {
        self.current_term.push(CourseSelection { course, section });
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_student_is_empty() {
        let student = Student::new("s1", "Ada");

        assert_eq!(student.id(), "s1");
        assert_eq!(student.name(), "Ada");
        assert!(student.transcript().is_empty());
        assert!(student.current_term_offerings().is_empty());
        assert_eq!(student.calculate_gpa(), None);
    }

    #[test]
    fn transcript_queries_delegate() {
        let math1 = Course::new("m1", "Math1", 3, vec![]);
        let phys1 = Course::new("p1", "Phys1", 3, vec![]);
        let mut student = Student::new("s1", "Ada");

        student
            .add_transcript_record(math1.clone(), Term::new("t1"), 11.0)
            .unwrap();
        student
            .add_transcript_record(phys1.clone(), Term::new("t1"), 9.0)
            .unwrap();

        assert!(student.has_passed(&math1));
        assert!(!student.has_passed(&phys1));
        assert_eq!(student.calculate_gpa(), Some(10.0));
    }

    #[test]
    fn invalid_record_is_reported() {
        let mut student = Student::new("s1", "Ada");
        let result =
            student.add_transcript_record(Course::new("m1", "Math1", 3, vec![]), Term::new("t1"), 21.0);

        assert!(result.is_err());
        assert!(student.transcript().is_empty());
    }

    #[test]
    fn take_course_appends_in_order() {
        let math1 = Course::new("m1", "Math1", 3, vec![]);
        let phys1 = Course::new("p1", "Phys1", 3, vec![]);
        let mut student = Student::new("s1", "Ada");

        student.take_course(math1.clone(), 2);
        student.take_course(phys1.clone(), 1);

        assert_eq!(
            student.current_term_offerings(),
            &[
                CourseSelection {
                    course: math1,
                    section: 2
                },
                CourseSelection {
                    course: phys1,
                    section: 1
                },
            ]
        );
    }

    #[test]
    fn display_renders_name() {
        assert_eq!(Student::new("s1", "Ada").to_string(), "Ada");
    }
}

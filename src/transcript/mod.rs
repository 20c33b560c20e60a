//! Student transcripts: historical grades grouped by term.
//!
//! A [`Transcript`] answers the two questions the enrollment rules ask of a
//! student's history:
//! - has the student passed a course in any term?
//! - what is the student's units-weighted GPA?
//!
//! Both levels are ordered maps (terms by id, then courses by id) so the
//! floating-point GPA sum always runs in the same order and a transcript
//! yields the same GPA bit for bit.

use crate::core::{Course, Term};
use std::collections::BTreeMap;

pub mod error;
mod term_transcript;

pub use error::RecordError;
pub use term_transcript::{TermTranscript, PASSING_GRADE};

/// Highest grade on the 0-20 scale.
pub const MAX_GRADE: f64 = 20.0;

/// All recorded grades of one student, keyed by term.
///
/// # Example
///
/// ```rust
/// use enrollment::core::{Course, Term};
/// use enrollment::transcript::Transcript;
///
/// let math1 = Course::new("m1", "Math1", 3, vec![]);
/// let phys1 = Course::new("p1", "Phys1", 1, vec![]);
///
/// let mut transcript = Transcript::new();
/// assert_eq!(transcript.calculate_gpa(), None);
///
/// transcript.add_record(math1.clone(), Term::new("2023-fall"), 12.0).unwrap();
/// transcript.add_record(phys1, Term::new("2024-spring"), 16.0).unwrap();
///
/// assert!(transcript.has_passed(&math1));
/// assert_eq!(transcript.calculate_gpa(), Some(13.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    term_transcripts: BTreeMap<Term, TermTranscript>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `grade` for `course` in `term`, creating the term on first use.
    ///
    /// Rejects grades that are not finite or fall outside `[0, 20]`; the
    /// transcript is left untouched in that case.
    pub fn add_record(
        &mut self,
        course: Course,
        term: Term,
        grade: f64,
    ) -> Result<(), RecordError> {
        if !grade.is_finite() || !(0.0..=MAX_GRADE).contains(&grade) {
            return Err(RecordError::GradeOutOfRange {
                grade,
                min: 0.0,
                max: MAX_GRADE,
            });
        }

        self.term_transcripts
            .entry(term)
            .or_default()
            .put(course, grade);
        Ok(())
    }

    /// True iff any term records a passing grade for `course`.
    pub fn has_passed(&self, course: &Course) -> bool {
        self.has_passed_with(course, PASSING_GRADE)
    }

    pub fn has_passed_with(&self, course: &Course, pass_grade: f64) -> bool {
        self.term_transcripts
            .values()
            .any(|term| term.has_passed_with(course, pass_grade))
    }

    pub fn units_sum(&self) -> u32 {
        self.term_transcripts.values().map(TermTranscript::units_sum).sum()
    }

    pub fn grade_sum(&self) -> f64 {
        self.term_transcripts.values().map(TermTranscript::grade_sum).sum()
    }

    /// Units-weighted mean grade, or `None` while no units are recorded.
    pub fn calculate_gpa(&self) -> Option<f64> {
        match self.units_sum() {
            0 => None,
            units => Some(self.grade_sum() / f64::from(units)),
        }
    }

    pub fn term(&self, term: &Term) -> Option<&TermTranscript> {
        self.term_transcripts.get(term)
    }

    /// Terms with at least one record, in id order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.term_transcripts.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.term_transcripts.values().all(TermTranscript::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math1() -> Course {
        Course::new("m1", "Math1", 3, vec![])
    }

    fn phys1() -> Course {
        Course::new("p1", "Phys1", 4, vec![])
    }

    #[test]
    fn add_record_creates_term_once() {
        let mut transcript = Transcript::new();
        let fall = Term::new("2023-fall");

        transcript.add_record(math1(), fall.clone(), 14.0).unwrap();
        transcript.add_record(phys1(), fall.clone(), 9.0).unwrap();

        assert_eq!(transcript.terms().count(), 1);
        assert_eq!(transcript.term(&fall).map(TermTranscript::len), Some(2));
    }

    #[test]
    fn passed_in_any_term_counts() {
        let mut transcript = Transcript::new();
        transcript.add_record(math1(), Term::new("2023-fall"), 7.0).unwrap();
        transcript.add_record(math1(), Term::new("2024-spring"), 10.0).unwrap();

        assert!(transcript.has_passed(&math1()));
        assert!(!transcript.has_passed(&phys1()));
    }

    #[test]
    fn failed_in_every_term_is_not_passed() {
        let mut transcript = Transcript::new();
        transcript.add_record(math1(), Term::new("2023-fall"), 7.0).unwrap();
        transcript.add_record(math1(), Term::new("2024-spring"), 9.5).unwrap();

        assert!(!transcript.has_passed(&math1()));
    }

    #[test]
    fn gpa_weights_by_course_units_across_terms() {
        let mut transcript = Transcript::new();
        transcript.add_record(math1(), Term::new("2023-fall"), 10.0).unwrap();
        transcript.add_record(phys1(), Term::new("2024-spring"), 17.0).unwrap();

        // (10*3 + 17*4) / 7
        assert_eq!(transcript.units_sum(), 7);
        assert_eq!(transcript.grade_sum(), 98.0);
        assert_eq!(transcript.calculate_gpa(), Some(14.0));
    }

    #[test]
    fn retaken_course_counts_once_per_term() {
        let mut transcript = Transcript::new();
        transcript.add_record(math1(), Term::new("2023-fall"), 8.0).unwrap();
        transcript.add_record(math1(), Term::new("2024-spring"), 16.0).unwrap();

        assert_eq!(transcript.units_sum(), 6);
        assert_eq!(transcript.calculate_gpa(), Some(12.0));
    }

    #[test]
    fn empty_transcript_has_no_gpa() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.units_sum(), 0);
        assert_eq!(transcript.calculate_gpa(), None);
    }

    #[test]
    fn gpa_does_not_depend_on_insertion_order() {
        let grades = [11.1, 12.2, 12.7, 11.3, 12.7];
        let build = |order: &[usize]| {
            let mut transcript = Transcript::new();
            for &i in order {
                let course = Course::new(format!("h{i}"), format!("History{i}"), 1, vec![]);
                transcript
                    .add_record(course, Term::new(format!("t{i}")), grades[i])
                    .unwrap();
            }
            transcript
        };

        let forward = build(&[0, 1, 2, 3, 4]);
        let backward = build(&[4, 3, 2, 1, 0]);
        let shuffled = build(&[3, 0, 4, 2, 1]);

        let gpa = forward.calculate_gpa().map(f64::to_bits);
        assert_eq!(backward.calculate_gpa().map(f64::to_bits), gpa);
        assert_eq!(shuffled.calculate_gpa().map(f64::to_bits), gpa);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn out_of_range_grades_are_rejected() {
        let mut transcript = Transcript::new();

        for grade in [-0.5, 20.5, f64::NAN, f64::INFINITY] {
            let result = transcript.add_record(math1(), Term::new("2023-fall"), grade);
            assert!(matches!(result, Err(RecordError::GradeOutOfRange { .. })));
        }
        assert!(transcript.is_empty());
        assert_eq!(transcript.terms().count(), 0);
    }

    #[test]
    fn boundary_grades_are_accepted() {
        let mut transcript = Transcript::new();
        transcript.add_record(math1(), Term::new("t1"), 0.0).unwrap();
        transcript.add_record(phys1(), Term::new("t1"), 20.0).unwrap();

        assert!(!transcript.has_passed(&math1()));
        assert!(transcript.has_passed(&phys1()));
    }
}

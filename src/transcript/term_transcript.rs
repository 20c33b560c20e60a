//! Grades earned during a single term.

use crate::core::Course;
use std::collections::BTreeMap;

/// Lowest grade that counts as passing on the 0-20 scale.
pub const PASSING_GRADE: f64 = 10.0;

/// Grades recorded for one term, at most one per course, ordered by course id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermTranscript {
    records: BTreeMap<Course, f64>,
}

impl TermTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a grade, replacing any earlier grade for the same course.
    pub fn put(&mut self, course: Course, grade: f64) {
        self.records.insert(course, grade);
    }

    pub fn grade(&self, course: &Course) -> Option<f64> {
        self.records.get(course).copied()
    }

    /// True iff a grade for `course` exists and is at least [`PASSING_GRADE`].
    pub fn has_passed(&self, course: &Course) -> bool {
        self.has_passed_with(course, PASSING_GRADE)
    }

    /// Like [`has_passed`](Self::has_passed) with an explicit threshold.
    pub fn has_passed_with(&self, course: &Course, pass_grade: f64) -> bool {
        self.grade(course).is_some_and(|grade| grade >= pass_grade)
    }

    /// Sum of the units of every recorded course.
    pub fn units_sum(&self) -> u32 {
        self.records.keys().map(Course::units).sum()
    }

    /// Sum of `grade * units` over every record, in course id order.
    pub fn grade_sum(&self) -> f64 {
        self.records
            .iter()
            .map(|(course, grade)| grade * f64::from(course.units()))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

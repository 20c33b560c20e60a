//! Context provided to enrollment checks.

use crate::core::Offering;
use crate::student::Student;

/// Context provided to enrollment checks
#[derive(Clone, Copy, Debug)]
pub struct EnrollmentContext<'a> {
    pub student: &'a Student,
    pub offerings: &'a [Offering],
}

impl<'a> EnrollmentContext<'a> {
    pub fn new(student: &'a Student, offerings: &'a [Offering]) -> Self {
        Self { student, offerings }
    }

    /// Total units of the requested offerings (pure)
    pub fn requested_units(&self) -> u32 {
        self.offerings.iter().map(Offering::units).sum()
    }

    /// Student GPA, `None` without graded units (pure)
    pub fn gpa(&self) -> Option<f64> {
        self.student.calculate_gpa()
    }

    /// Every ordered pair of distinct positions, row-major by input index
    pub fn ordered_pairs(&self) -> impl Iterator<Item = (&'a Offering, &'a Offering)> + 'a {
        let offerings = self.offerings;
        offerings.iter().enumerate().flat_map(move |(i, first)| {
            offerings
                .iter()
                .enumerate()
                .filter(move |(j, _)| *j != i)
                .map(move |(_, second)| (first, second))
        })
    }
}

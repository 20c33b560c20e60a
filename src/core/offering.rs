//! Course offerings for the upcoming term.

use super::course::Course;
use super::term::ExamTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A specific section of a course offered this term.
///
/// Offerings deliberately have no equality relation. The rules engine
/// tells two offerings apart by their position in the requested list, so
/// two sections of the same course are always distinct requests.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use enrollment::core::{Course, ExamTime, Offering};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let math1 = Course::new("m1", "Math1", 3, vec![]);
///
/// let a = Offering::new(math1.clone(), 1, ExamTime::at(day, 9, 0).unwrap());
/// let b = Offering::new(math1, 2, ExamTime::at(day, 9, 0).unwrap());
///
/// assert!(a.has_exam_time_collision(&b));
/// assert_eq!(a.to_string(), "Math1");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Offering {
    course: Course,
    section: u32,
    exam_time: ExamTime,
}

impl Offering {
    pub fn new(course: Course, section: u32, exam_time: ExamTime) -> Self {
        Self {
            course,
            section,
            exam_time,
        }
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn section(&self) -> u32 {
        self.section
    }

    pub fn exam_time(&self) -> ExamTime {
        self.exam_time
    }

    /// Units of the offered course.
    pub fn units(&self) -> u32 {
        self.course.units()
    }

    /// True iff both offerings hold their exam at the same time.
    pub fn has_exam_time_collision(&self, other: &Offering) -> bool {
        self.exam_time == other.exam_time
    }
}

/// Renders the course name; the section is available through `{:?}`.
impl fmt::Display for Offering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.course.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn slot(hour: u32) -> ExamTime {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        ExamTime::at(day, hour, 0).unwrap()
    }

    #[test]
    fn collision_is_exam_time_equality() {
        let math1 = Course::new("m1", "Math1", 3, vec![]);
        let phys1 = Course::new("p1", "Phys1", 4, vec![]);

        let a = Offering::new(math1, 1, slot(10));
        let b = Offering::new(phys1.clone(), 1, slot(10));
        let c = Offering::new(phys1, 2, slot(14));

        assert!(a.has_exam_time_collision(&b));
        assert!(b.has_exam_time_collision(&a));
        assert!(!a.has_exam_time_collision(&c));
    }

    #[test]
    fn accessors_expose_construction_values() {
        let phys1 = Course::new("p1", "Phys1", 4, vec![]);
        let offering = Offering::new(phys1.clone(), 7, slot(14));

        assert_eq!(offering.course(), &phys1);
        assert_eq!(offering.section(), 7);
        assert_eq!(offering.exam_time(), slot(14));
        assert_eq!(offering.units(), 4);
    }

    #[test]
    fn display_uses_course_name() {
        let offering = Offering::new(Course::new("p1", "Phys1", 4, vec![]), 3, slot(8));
        assert_eq!(offering.to_string(), "Phys1");
    }
}

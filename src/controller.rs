//! Enrollment controller: validate a request, then commit it atomically.

use crate::core::Offering;
use crate::enforcement::checks::CheckResult;
use crate::enforcement::{EnrollmentContext, EnrollmentRules, EnrollmentRulesViolation};
use crate::student::Student;
use stillwater::validation::Validation;
use tracing::{debug, info, warn};

/// Runs the enrollment rules and registers the student on success.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use enrollment::controller::EnrollmentController;
/// use enrollment::core::{Course, ExamTime, Offering};
/// use enrollment::student::Student;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let math1 = Course::new("m1", "Math1", 3, vec![]);
/// let math2 = Course::new("m2", "Math2", 3, vec![math1.clone()]);
///
/// let controller = EnrollmentController::new();
/// let mut student = Student::new("s1", "Ada");
///
/// let rejected = controller
///     .enroll(&mut student, &[Offering::new(math2, 1, ExamTime::at(day, 10, 0).unwrap())])
///     .unwrap_err();
/// assert_eq!(
///     rejected.report(),
///     "The student has not passed Math1 as a prerequisite of Math2\n"
/// );
/// assert!(student.current_term_offerings().is_empty());
///
/// controller
///     .enroll(&mut student, &[Offering::new(math1, 1, ExamTime::at(day, 10, 0).unwrap())])
///     .unwrap();
/// assert_eq!(student.current_term_offerings().len(), 1);
/// ```
#[derive(Default)]
pub struct EnrollmentController {
    rules: EnrollmentRules,
}

impl EnrollmentController {
    /// Controller with the default rules and policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: EnrollmentRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &EnrollmentRules {
        &self.rules
    }

    /// Check a request without committing it (pure).
    pub fn validate(&self, student: &Student, offerings: &[Offering]) -> CheckResult {
        self.rules
            .enforce(&EnrollmentContext::new(student, offerings))
    }

    /// Validate `offerings` for `student` and, only if every rule holds,
    /// register the student for each offering in input order.
    ///
    /// On rejection the student is left exactly as it was.
    pub fn enroll(
        &self,
        student: &mut Student,
        offerings: &[Offering],
    ) -> Result<(), EnrollmentRulesViolation> {
        debug!(
            student = student.id(),
            offerings = offerings.len(),
            "Validating enrollment request"
        );

        if let Validation::Failure(violations) = self.validate(student, offerings) {
            let rejection = EnrollmentRulesViolation::from(violations);
            warn!(
                student = student.id(),
                violations = rejection.len(),
                "Enrollment rejected"
            );
            return Err(rejection);
        }

        for offering in offerings {
            student.take_course(offering.course().clone(), offering.section());
        }

        info!(
            student = student.id(),
            courses = offerings.len(),
            units = offerings.iter().map(Offering::units).sum::<u32>(),
            "Enrollment committed"
        );
        Ok(())
    }
}

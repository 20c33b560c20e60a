//! Enrollment rules evaluated using Validation.

use crate::enforcement::checks::{self, CheckResult};
use crate::enforcement::context::EnrollmentContext;
use crate::enforcement::policy::EnrollmentPolicy;
use crate::enforcement::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for extra validation check functions
pub type ValidationCheck =
    Box<dyn Fn(&EnrollmentContext<'_>) -> Validation<(), NonEmptyVec<Violation>> + Send + Sync>;

/// Enrollment rules for a proposed list of offerings.
/// Uses Validation to accumulate ALL violations.
pub struct EnrollmentRules {
    pub(crate) policy: EnrollmentPolicy,
    pub(crate) required_checks: Vec<ValidationCheck>,
}

impl EnrollmentRules {
    /// Enforce all rules, accumulating ALL violations.
    ///
    /// Built-in rules run first in a fixed order: already passed,
    /// prerequisites, exam collisions, duplicates, unit load. Extra checks
    /// follow in registration order.
    pub fn enforce(&self, context: &EnrollmentContext<'_>) -> CheckResult {
        let mut results: Vec<CheckResult> = vec![
            checks::already_passed(context, &self.policy),
            checks::prerequisites(context, &self.policy),
            checks::exam_time_collisions(context),
            checks::duplicate_requests(context),
            checks::units_limitation(context, &self.policy),
        ];

        for check_fn in &self.required_checks {
            results.push(check_fn(context));
        }

        Validation::all_vec(results).map(|_| ())
    }

    pub fn policy(&self) -> &EnrollmentPolicy {
        &self.policy
    }
}

impl Default for EnrollmentRules {
    fn default() -> Self {
        Self {
            policy: EnrollmentPolicy::default(),
            required_checks: Vec::new(),
        }
    }
}

//! Builder API for creating enrollment rules.

use crate::enforcement::context::EnrollmentContext;
use crate::enforcement::policy::{EnrollmentPolicy, PolicyError, UnitLimit};
use crate::enforcement::rules::{EnrollmentRules, ValidationCheck};
use crate::enforcement::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating enrollment rules
pub struct EnrollmentBuilder {
    policy: EnrollmentPolicy,
    required_checks: Vec<ValidationCheck>,
}

impl EnrollmentBuilder {
    /// Start from the default policy with no extra checks
    pub fn new() -> Self {
        Self {
            policy: EnrollmentPolicy::default(),
            required_checks: Vec::new(),
        }
    }

    /// Replace the whole policy
    pub fn policy(mut self, policy: EnrollmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the lowest passing grade
    pub fn pass_grade(mut self, grade: f64) -> Self {
        self.policy.pass_grade = grade;
        self
    }

    /// Add a GPA-dependent unit cap
    pub fn unit_limit(mut self, gpa_below: f64, max_units: u32) -> Self {
        self.policy.unit_limits.push(UnitLimit {
            gpa_below,
            max_units,
        });
        self
    }

    /// Drop every GPA-dependent unit cap
    pub fn clear_unit_limits(mut self) -> Self {
        self.policy.unit_limits.clear();
        self
    }

    /// Set the absolute unit cap
    pub fn max_units(mut self, units: u32) -> Self {
        self.policy.max_units = units;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&EnrollmentContext<'_>) -> Validation<(), NonEmptyVec<Violation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&EnrollmentContext<'_>) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &EnrollmentContext<'_>| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(Violation::Custom {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the enrollment rules
    ///
    /// Fails if a GPA tier allows more units than the absolute cap.
    pub fn build(self) -> Result<EnrollmentRules, PolicyError> {
        self.policy.check()?;
        Ok(EnrollmentRules {
            policy: self.policy,
            required_checks: self.required_checks,
        })
    }
}

impl Default for EnrollmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Configurable thresholds for the enrollment rules.

use crate::transcript::PASSING_GRADE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a policy
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Policy parsing failed: {0}")]
    ParseFailed(String),

    #[error("Unit limit for GPA below {gpa_below} allows {max_units} units, above the cap of {cap}")]
    LimitAboveCap {
        gpa_below: f64,
        max_units: u32,
        cap: u32,
    },
}

/// Load cap that applies while the student's GPA is below `gpa_below`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitLimit {
    pub gpa_below: f64,
    pub max_units: u32,
}

/// Thresholds used by the enrollment rules.
///
/// The default policy is the standard one: passing grade 10, at most 14
/// units below a GPA of 12, at most 16 units below a GPA of 16, and never
/// more than 20 units.
///
/// # Example
///
/// ```rust
/// use enrollment::enforcement::EnrollmentPolicy;
///
/// let policy = EnrollmentPolicy::from_json(
///     r#"{"pass_grade": 12.0, "unit_limits": [], "max_units": 18}"#,
/// ).unwrap();
///
/// assert!(policy.permits(18, Some(5.0)));
/// assert!(!policy.permits(19, Some(20.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentPolicy {
    /// Lowest grade that counts as passing a course
    pub pass_grade: f64,

    /// GPA-dependent load caps, all of which must hold
    pub unit_limits: Vec<UnitLimit>,

    /// Absolute cap regardless of GPA
    pub max_units: u32,
}

impl Default for EnrollmentPolicy {
    fn default() -> Self {
        Self {
            pass_grade: PASSING_GRADE,
            unit_limits: vec![
                UnitLimit {
                    gpa_below: 12.0,
                    max_units: 14,
                },
                UnitLimit {
                    gpa_below: 16.0,
                    max_units: 16,
                },
            ],
            max_units: 20,
        }
    }
}

impl EnrollmentPolicy {
    /// Parse and check a policy from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self =
            serde_json::from_str(json).map_err(|e| PolicyError::ParseFailed(e.to_string()))?;
        policy.check()?;
        Ok(policy)
    }

    /// Reject GPA tiers that would allow more than the absolute cap.
    pub fn check(&self) -> Result<(), PolicyError> {
        match self
            .unit_limits
            .iter()
            .find(|limit| limit.max_units > self.max_units)
        {
            Some(limit) => Err(PolicyError::LimitAboveCap {
                gpa_below: limit.gpa_below,
                max_units: limit.max_units,
                cap: self.max_units,
            }),
            None => Ok(()),
        }
    }

    /// Whether `units` may be requested at `gpa`.
    ///
    /// A student without graded units (`gpa == None`) is held only to the
    /// absolute cap.
    pub fn permits(&self, units: u32, gpa: Option<f64>) -> bool {
        if units > self.max_units {
            return false;
        }
        match gpa {
            Some(gpa) => self
                .unit_limits
                .iter()
                .all(|limit| gpa >= limit.gpa_below || units <= limit.max_units),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_tiers() {
        let policy = EnrollmentPolicy::default();

        assert!(policy.permits(14, Some(11.99)));
        assert!(!policy.permits(15, Some(11.99)));

        assert!(policy.permits(16, Some(12.0)));
        assert!(!policy.permits(17, Some(15.99)));

        assert!(policy.permits(20, Some(16.0)));
        assert!(!policy.permits(21, Some(20.0)));
    }

    #[test]
    fn missing_gpa_is_held_to_absolute_cap_only() {
        let policy = EnrollmentPolicy::default();

        assert!(policy.permits(20, None));
        assert!(!policy.permits(21, None));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let policy = EnrollmentPolicy::from_json(r#"{"max_units": 24}"#).unwrap();

        assert_eq!(policy.max_units, 24);
        assert_eq!(policy.pass_grade, 10.0);
        assert_eq!(policy.unit_limits, EnrollmentPolicy::default().unit_limits);
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = EnrollmentPolicy::from_json("{ max_units: ");
        assert!(matches!(result, Err(PolicyError::ParseFailed(_))));
    }

    #[test]
    fn tier_above_cap_is_rejected() {
        let result = EnrollmentPolicy::from_json(
            r#"{"unit_limits": [{"gpa_below": 12.0, "max_units": 22}], "max_units": 20}"#,
        );
        assert!(matches!(
            result,
            Err(PolicyError::LimitAboveCap { max_units: 22, cap: 20, .. })
        ));
    }

    #[test]
    fn policy_serializes_correctly() {
        let policy = EnrollmentPolicy::default();
        let json = serde_json::to_string(&policy).unwrap();
        let deserialized = EnrollmentPolicy::from_json(&json).unwrap();
        assert_eq!(policy, deserialized);
    }
}

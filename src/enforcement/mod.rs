//! Validation-based enforcement of the enrollment rules.
//!
//! This module checks a proposed list of offerings using Stillwater's
//! `Validation` type to accumulate ALL violations instead of fail-fast behavior.
//!
//! # Philosophy
//!
//! A student who asks for five courses should learn about every problem with
//! the request at once, not fix them one resubmission at a time. Each rule is
//! a pure function in [`checks`], and [`EnrollmentRules::enforce`] combines
//! their results without short-circuiting.
//!
//! # Example
//!
//! ```rust
//! use enrollment::enforcement::{EnrollmentBuilder, EnrollmentRules};
//!
//! let rules: EnrollmentRules = EnrollmentBuilder::new()
//!     .max_units(18)
//!     .require_pred(
//!         |ctx| ctx.offerings.len() <= 6,
//!         "At most six courses per term".to_string(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(rules.policy().max_units, 18);
//! ```

pub mod builder;
pub mod checks;
pub mod context;
pub mod policy;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::EnrollmentBuilder;
pub use context::EnrollmentContext;
pub use policy::{EnrollmentPolicy, PolicyError, UnitLimit};
pub use rules::EnrollmentRules;
pub use violations::{EnrollmentRulesViolation, Violation};

//! Catalogue of the built-in enrollment rules.
//!
//! Each rule is a pure function of the context and policy. A rule reports
//! every instance it finds; it never stops at the first one.

use crate::enforcement::context::EnrollmentContext;
use crate::enforcement::policy::EnrollmentPolicy;
use crate::enforcement::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single rule
pub type CheckResult = Validation<(), NonEmptyVec<Violation>>;

/// Fold a rule's findings into one validation, keeping their order.
pub fn collect<I>(violations: I) -> CheckResult
where
    I: IntoIterator<Item = Violation>,
{
    let checks: Vec<CheckResult> = violations.into_iter().map(Validation::fail).collect();
    Validation::all_vec(checks).map(|_| ())
}

/// Requested courses the student has already passed.
pub fn already_passed(ctx: &EnrollmentContext<'_>, policy: &EnrollmentPolicy) -> CheckResult {
    let transcript = ctx.student.transcript();
    collect(
        ctx.offerings
            .iter()
            .filter(|o| transcript.has_passed_with(o.course(), policy.pass_grade))
            .map(|o| Violation::AlreadyPassed {
                course: o.course().name().to_string(),
            }),
    )
}

/// Prerequisites not yet passed, per offering in prerequisite order.
pub fn prerequisites(ctx: &EnrollmentContext<'_>, policy: &EnrollmentPolicy) -> CheckResult {
    let transcript = ctx.student.transcript();
    collect(ctx.offerings.iter().flat_map(|o| {
        o.course()
            .prerequisites()
            .iter()
            .filter(move |pre| !transcript.has_passed_with(pre, policy.pass_grade))
            .map(move |pre| Violation::MissingPrerequisite {
                prerequisite: pre.name().to_string(),
                course: o.course().name().to_string(),
            })
    }))
}

/// Distinct offerings sharing an exam slot, once per ordered pair.
pub fn exam_time_collisions(ctx: &EnrollmentContext<'_>) -> CheckResult {
    collect(
        ctx.ordered_pairs()
            .filter(|(first, second)| first.has_exam_time_collision(second))
            .map(|(first, second)| Violation::ExamTimeCollision {
                first: first.to_string(),
                second: second.to_string(),
            }),
    )
}

/// Distinct offerings of the same course, once per ordered pair.
pub fn duplicate_requests(ctx: &EnrollmentContext<'_>) -> CheckResult {
    collect(
        ctx.ordered_pairs()
            .filter(|(first, second)| first.course() == second.course())
            .map(|(first, _)| Violation::DuplicateRequest {
                course: first.course().name().to_string(),
            }),
    )
}

/// Requested load against the GPA-dependent caps. At most one violation.
pub fn units_limitation(ctx: &EnrollmentContext<'_>, policy: &EnrollmentPolicy) -> CheckResult {
    let units = ctx.requested_units();
    let gpa = ctx.gpa();
    if policy.permits(units, gpa) {
        Validation::success(())
    } else {
        Validation::fail(Violation::UnitsLimitation { units, gpa })
    }
}

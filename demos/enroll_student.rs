//! Enrolling a student
//!
//! This example walks one student through a rejected request and a
//! corrected one.
//!
//! Key concepts:
//! - Every violated rule is reported at once
//! - A rejected request leaves the student untouched
//! - Policies can be loaded from JSON and extended with custom checks
//!
//! Run with: RUST_LOG=debug cargo run --example enroll_student

use chrono::NaiveDate;
use enrollment::controller::EnrollmentController;
use enrollment::core::{Course, ExamTime, Offering, Term};
use enrollment::enforcement::{EnrollmentBuilder, EnrollmentPolicy};
use enrollment::student::Student;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Enrollment Example ===\n");

    let day = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    let slot = |hour| ExamTime::at(day, hour, 0).expect("valid exam hour");

    let math1 = Course::new("m1", "Math1", 3, vec![]);
    let phys1 = Course::new("p1", "Phys1", 3, vec![]);
    let math2 = Course::new("m2", "Math2", 3, vec![math1.clone()]);
    let phys2 = Course::new("p2", "Phys2", 3, vec![math1.clone(), phys1.clone()]);
    let prog = Course::new("cs1", "Programming", 4, vec![]);

    let mut student = Student::new("810199999", "Ada");
    student
        .add_transcript_record(math1.clone(), Term::new("2023-fall"), 15.0)
        .expect("grade within scale");
    student
        .add_transcript_record(phys1.clone(), Term::new("2023-fall"), 8.5)
        .expect("grade within scale");

    println!(
        "Student {} has GPA {:.2}\n",
        student,
        student.calculate_gpa().unwrap_or_default()
    );

    // Example 1: a request with several problems
    println!("Example 1: Rejected request");
    let controller = EnrollmentController::new();
    let request = vec![
        Offering::new(math1.clone(), 1, slot(9)),
        Offering::new(phys2.clone(), 1, slot(9)),
        Offering::new(math2.clone(), 1, slot(11)),
        Offering::new(math2.clone(), 2, slot(14)),
    ];

    match controller.enroll(&mut student, &request) {
        Ok(()) => println!("  Unexpectedly accepted"),
        Err(rejection) => {
            println!("  {} violations:", rejection.len());
            for line in rejection.report().lines() {
                println!("    - {line}");
            }
        }
    }
    println!(
        "  Registered courses afterwards: {}\n",
        student.current_term_offerings().len()
    );

    // Example 2: the corrected request
    println!("Example 2: Corrected request");
    let request = vec![
        Offering::new(math2, 1, slot(11)),
        Offering::new(phys1, 2, slot(9)),
        Offering::new(prog.clone(), 1, slot(14)),
    ];

    match controller.enroll(&mut student, &request) {
        Ok(()) => {
            for selection in student.current_term_offerings() {
                println!(
                    "  Registered for {} (section {})",
                    selection.course, selection.section
                );
            }
        }
        Err(rejection) => print!("{rejection}"),
    }
    println!();

    // Example 3: a stricter policy loaded from JSON plus a custom check
    println!("Example 3: Custom policy");
    let policy = EnrollmentPolicy::from_json(r#"{"max_units": 6, "unit_limits": []}"#)
        .expect("valid policy");
    let strict = EnrollmentController::with_rules(
        EnrollmentBuilder::new()
            .policy(policy)
            .require_pred(
                |ctx| ctx.offerings.iter().all(|o| o.section() == 1),
                "Only first sections are open to this cohort".to_string(),
            )
            .build()
            .expect("policy tiers fit under the cap"),
    );

    let mut newcomer = Student::new("810100000", "Grace");
    let request = vec![
        Offering::new(prog, 2, slot(8)),
        Offering::new(phys2, 1, slot(10)),
    ];
    if let Err(rejection) = strict.enroll(&mut newcomer, &request) {
        print!("{rejection}");
    }

    println!("\n=== Example Complete ===");
}

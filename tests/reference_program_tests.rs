//! Conformance of the canonical payroll program against the embedded
//! `payroll` profile, and the one-predicate-per-deviation property.

use c_subset_analyzer::profile::{PAYROLL_PROFILE, ProfileRegistry};
use c_subset_analyzer::{Profile, REFERENCE_PROGRAM, validate, validate_with_profile};

fn payroll_profile() -> Profile {
    let mut registry = ProfileRegistry::with_embedded_profiles().unwrap();
    assert!(registry.set_active_profile(PAYROLL_PROFILE));
    registry.get_active_profile().unwrap().clone()
}

#[test]
fn reference_program_passes_the_default_profile() {
    let report = validate(REFERENCE_PROGRAM);
    assert!(!report.empty);
    assert!(report.is_clean(), "unexpected errors: {:?}", report);
}

#[test]
fn reference_program_satisfies_every_payroll_predicate() {
    let report = validate_with_profile(REFERENCE_PROGRAM, &payroll_profile());
    assert!(report.is_clean(), "unexpected errors: {:?}", report);
}

#[test]
fn changing_the_commission_rate_fails_exactly_one_predicate() {
    let mutated = REFERENCE_PROGRAM.replace("0.10", "0.15");
    assert_ne!(mutated, REFERENCE_PROGRAM);

    let report = validate_with_profile(&mutated, &payroll_profile());

    // The mutated line still matches the assignment rule, so the only
    // fallout is the one predicate bound to the high commission rate.
    assert!(report.lexical.is_empty());
    assert!(report.syntactic.is_empty());
    assert_eq!(report.semantic.len(), 1);
    assert!(report.semantic[0].message.contains("high commission rate"));
}

#[test]
fn removing_the_accumulation_fails_its_predicate() {
    let mutated = REFERENCE_PROGRAM.replace("total += commission;", "total = commission;");

    let report = validate_with_profile(&mutated, &payroll_profile());
    assert_eq!(report.semantic.len(), 1);
    assert!(report.semantic[0].message.contains("commission accumulation"));
}

#[test]
fn declaring_hours_as_float_trips_the_absence_predicate() {
    let mutated = REFERENCE_PROGRAM.replace("int hours = 0;", "float hours = 0;");

    let report = validate_with_profile(&mutated, &payroll_profile());
    assert_eq!(report.semantic.len(), 1);
    assert!(report.semantic[0].message.contains("must be declared int"));
}

#[test]
fn predicate_failures_follow_table_order() {
    // Drop both the wage formula and the exit statement; the predicate
    // table lists the wage formula first.
    let mutated = REFERENCE_PROGRAM
        .replace("total = hours * rate;", "total = hours;")
        .replace("return 0;", "return 1;");

    let report = validate_with_profile(&mutated, &payroll_profile());
    assert_eq!(report.semantic.len(), 2);
    assert!(report.semantic[0].message.contains("weekly wage computation"));
    assert!(report.semantic[1].message.contains("exit statement"));
}

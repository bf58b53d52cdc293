use projboard_core::{
    validate, violations, InputField, ProjectInputError, ProjectInputRules, Validatable, Violation,
};

#[test]
fn text_constraints_follow_contract() {
    assert!(!validate(&Validatable::new("ab").required().min_length(3)));
    assert!(!validate(&Validatable::new("").required()));
    assert!(validate(&Validatable::new("abc").required().min_length(3)));
    assert!(!validate(&Validatable::new("abcdef").max_length(5)));
}

#[test]
fn length_counts_untrimmed_characters() {
    assert!(validate(&Validatable::new("  a  ").required().min_length(5)));
    assert!(validate(&Validatable::new("héllo").max_length(5)));
}

#[test]
fn numeric_bounds_are_inclusive() {
    assert!(validate(&Validatable::new(7_i64).min(5.0).max(10.0)));
    assert!(validate(&Validatable::new(5_i64).min(5.0).max(10.0)));
    assert!(validate(&Validatable::new(10_i64).min(5.0).max(10.0)));
    assert!(!validate(&Validatable::new(4_i64).min(5.0)));
    assert!(!validate(&Validatable::new(11_i64).max(10.0)));
}

#[test]
fn constraints_only_apply_to_matching_kind() {
    assert!(validate(&Validatable::new(1_i64).min_length(5).max_length(0)));
    assert!(validate(&Validatable::new("3").min(5.0).max(1.0)));
}

#[test]
fn required_number_is_always_present() {
    assert!(validate(&Validatable::new(0_i64).required()));
}

#[test]
fn violations_are_listed_in_constraint_order() {
    let input = Validatable::new(12_i64).min(15.0).max(10.0);
    assert_eq!(
        violations(&input),
        vec![
            Violation::BelowMin {
                min: 15.0,
                actual: 12.0
            },
            Violation::AboveMax {
                max: 10.0,
                actual: 12.0
            },
        ]
    );
}

#[test]
fn standard_rules_accept_typical_input() {
    let draft = ProjectInputRules::standard()
        .check("Build API", "Implement REST endpoints", "4")
        .unwrap();
    assert_eq!(draft.title, "Build API");
    assert_eq!(draft.description, "Implement REST endpoints");
    assert_eq!(draft.people, 4);
}

#[test]
fn standard_rules_bound_description_and_people() {
    let long_description = "x".repeat(501);
    let err = ProjectInputRules::standard()
        .check("Title", &long_description, "11")
        .unwrap_err();

    assert_eq!(err.fields(), vec![InputField::Description, InputField::People]);
    assert_eq!(
        err.violations_for(InputField::Description),
        &[Violation::TooLong {
            max_length: 500,
            actual: 501
        }]
    );
    assert!(err.violations_for(InputField::Title).is_empty());
}

#[test]
fn strict_rules_use_stricter_minimums() {
    let rules = ProjectInputRules::strict();
    let err = rules.check("ab", "too short", "4").unwrap_err();
    assert_eq!(
        err.fields(),
        vec![InputField::Title, InputField::Description, InputField::People]
    );

    assert!(rules
        .check("Build API", "Implement REST endpoints", "5")
        .is_ok());
}

#[test]
fn non_numeric_people_is_reported() {
    let err = ProjectInputRules::standard()
        .check("Title", "Description", "four")
        .unwrap_err();
    assert_eq!(
        err.violations_for(InputField::People),
        &[Violation::NotANumber("four".to_string())]
    );
    assert!(err.to_string().contains("people: `four` is not a whole number"));
}

#[test]
fn blank_fields_are_missing() {
    let err = ProjectInputRules::standard().check("  ", "", " ").unwrap_err();
    let ProjectInputError::Invalid(fields) = &err;
    assert_eq!(fields.len(), 3);
    for entry in fields {
        assert!(entry.violations.contains(&Violation::Missing));
    }
}

#[test]
fn rules_are_configurable() {
    let mut rules = ProjectInputRules::standard();
    rules.people.max = Some(3.0);
    assert!(rules.check("Title", "Description", "4").is_err());
    assert!(rules.check("Title", "Description", "3").is_ok());
}

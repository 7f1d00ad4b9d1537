use projboard_core::{check, validate, FieldRules, LabeledValue, RuleViolation};

#[test]
fn required_fails_only_for_blank_text() {
    for (text, expected) in [
        ("", false),
        ("   ", false),
        ("\n\t", false),
        ("a", true),
        (" a ", true),
    ] {
        assert_eq!(
            validate(&LabeledValue::new(text).required()),
            expected,
            "required on `{text:?}`"
        );
    }
}

#[test]
fn min_length_fails_short_text() {
    let value = LabeledValue::new("Desc").min_length(5);
    assert!(!validate(&value));
    assert!(validate(&LabeledValue::new("Desc1").min_length(5)));
}

#[test]
fn five_within_one_to_ten_is_valid() {
    let value = LabeledValue::new(5.0).required().min(1.0).max(10.0);
    assert!(validate(&value));
}

#[test]
fn zero_passes_required_but_fails_min() {
    assert!(validate(&LabeledValue::new(0.0).required()));

    let value = LabeledValue::new(0.0).required().min(1.0).max(10.0);
    assert!(!validate(&value));
    assert_eq!(
        check(&value),
        Err(RuleViolation::BelowMin {
            min: 1.0,
            actual: 0.0
        })
    );
}

#[test]
fn with_rules_copies_every_rule() {
    let rules = FieldRules {
        required: true,
        min_length: Some(2),
        max_length: Some(4),
        min: Some(1.0),
        max: Some(3.0),
    };
    let value = LabeledValue::with_rules("abc", &rules);
    assert!(value.required);
    assert_eq!(value.min_length, Some(2));
    assert_eq!(value.max_length, Some(4));
    assert_eq!(value.min, Some(1.0));
    assert_eq!(value.max, Some(3.0));
    assert!(validate(&value));
    assert!(!validate(&LabeledValue::with_rules("abcde", &rules)));
}

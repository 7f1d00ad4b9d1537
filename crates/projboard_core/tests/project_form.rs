use projboard_core::{
    FormField, FormRules, ProjectInput, ProjectStore, RecordingAlerts, RuleViolation,
    SubmitError, INVALID_INPUT_ALERT,
};
use std::rc::Rc;

fn form() -> (Rc<ProjectStore>, Rc<RecordingAlerts>, ProjectInput) {
    let store = Rc::new(ProjectStore::new());
    let alerts = Rc::new(RecordingAlerts::new());
    let input = ProjectInput::new(Rc::clone(&store), FormRules::default(), alerts.clone());
    (store, alerts, input)
}

fn fill(input: &mut ProjectInput, title: &str, description: &str, people: &str) {
    input.set_title(title);
    input.set_description(description);
    input.set_people(people);
}

#[test]
fn valid_submission_adds_trimmed_project_and_clears_fields() {
    let (store, alerts, mut input) = form();
    fill(&mut input, "  Website ", " Rebuild landing page ", " 3 ");

    let id = input.submit().expect("valid submission");

    let projects = store.projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, id);
    assert_eq!(projects[0].title, "Website");
    assert_eq!(projects[0].description, "Rebuild landing page");
    assert_eq!(projects[0].people, 3);
    assert_eq!(input.title(), "");
    assert_eq!(input.description(), "");
    assert_eq!(input.people(), "");
    assert!(alerts.messages().is_empty());
}

#[test]
fn invalid_submission_alerts_once_and_changes_nothing() {
    let (store, alerts, mut input) = form();
    fill(&mut input, "Website", "Tiny", "3");

    let err = input.submit().expect_err("description too short");

    assert_eq!(
        err,
        SubmitError::Invalid {
            field: FormField::Description,
            violation: RuleViolation::TooShort {
                min_length: 5,
                actual: 4
            },
        }
    );
    assert_eq!(alerts.messages(), vec![INVALID_INPUT_ALERT.to_string()]);
    assert!(store.is_empty());
    assert_eq!(input.title(), "Website");
    assert_eq!(input.description(), "Tiny");
    assert_eq!(input.people(), "3");
}

#[test]
fn first_failing_field_is_reported() {
    let (_, alerts, mut input) = form();
    fill(&mut input, "   ", "", "abc");

    let err = input.submit().expect_err("everything invalid");

    assert!(matches!(
        err,
        SubmitError::Invalid {
            field: FormField::Title,
            violation: RuleViolation::Required,
        }
    ));
    assert_eq!(alerts.messages().len(), 1);
}

#[test]
fn non_numeric_people_is_rejected_as_not_a_number() {
    let (store, _, mut input) = form();
    fill(&mut input, "Website", "Rebuild landing page", "many");

    let err = input.submit().expect_err("non-numeric people");

    assert_eq!(
        err,
        SubmitError::Invalid {
            field: FormField::People,
            violation: RuleViolation::NotANumber,
        }
    );
    assert!(store.is_empty());
}

#[test]
fn empty_people_fails_minimum() {
    let (_, _, mut input) = form();
    fill(&mut input, "Website", "Rebuild landing page", "");

    let err = input.submit().expect_err("empty people");

    assert_eq!(
        err,
        SubmitError::Invalid {
            field: FormField::People,
            violation: RuleViolation::BelowMin {
                min: 1.0,
                actual: 0.0
            },
        }
    );
}

#[test]
fn people_bounds_are_inclusive() {
    let (store, _, mut input) = form();
    for people in ["1", "10"] {
        fill(&mut input, "Website", "Rebuild landing page", people);
        input.submit().expect("bound value is valid");
    }
    fill(&mut input, "Website", "Rebuild landing page", "11");
    assert!(input.submit().is_err());
    assert_eq!(store.len(), 2);
}

#[test]
fn fractional_people_is_rejected() {
    let (store, _, mut input) = form();
    fill(&mut input, "Website", "Rebuild landing page", "2.5");

    let err = input.submit().expect_err("fractional people");

    assert_eq!(
        err,
        SubmitError::Invalid {
            field: FormField::People,
            violation: RuleViolation::InvalidCount(2.5),
        }
    );
    assert!(store.is_empty());
}

#[test]
fn custom_rules_are_applied() {
    let store = Rc::new(ProjectStore::new());
    let alerts = Rc::new(RecordingAlerts::new());
    let rules = FormRules::from_json_str(r#"{ "title": { "required": true, "max_length": 3 } }"#)
        .expect("rules");
    let mut input = ProjectInput::new(Rc::clone(&store), rules, alerts);

    fill(&mut input, "Website", "Rebuild landing page", "3");
    assert!(input.submit().is_err());

    fill(&mut input, "Web", "Rebuild landing page", "3");
    input.submit().expect("short title passes");
    assert_eq!(store.len(), 1);
}

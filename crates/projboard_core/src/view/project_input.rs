//! Project form view.
//!
//! # Responsibility
//! - Hold raw text for the title, description and people fields.
//! - Validate a submission against `FormRules` and hand it to the store.
//!
//! # Invariants
//! - A rejected submission raises exactly one alert and changes nothing.
//! - An accepted submission adds one project and clears every field.
//! - People text must be a decimal literal; empty text counts as `0`.

use crate::config::FormRules;
use crate::model::project::ProjectId;
use crate::store::ProjectStore;
use crate::validation::{check, LabeledValue, RuleViolation};
use crate::view::alert::AlertSink;
use crate::view::Component;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Message shown for any rejected submission.
pub const INVALID_INPUT_ALERT: &str = "Invalid input!";

static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid decimal regex")
});

/// One field of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// First field that failed validation, in form order.
    Invalid {
        field: FormField,
        violation: RuleViolation,
    },
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { field, violation } => {
                write!(f, "invalid {}: {violation}", field.as_str())
            }
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid { violation, .. } => Some(violation),
        }
    }
}

/// Validated, trimmed form values ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Submission {
    title: String,
    description: String,
    people: u32,
}

pub struct ProjectInput {
    store: Rc<ProjectStore>,
    rules: FormRules,
    alerts: Rc<dyn AlertSink>,
    title: String,
    description: String,
    people: String,
}

impl ProjectInput {
    pub fn new(store: Rc<ProjectStore>, rules: FormRules, alerts: Rc<dyn AlertSink>) -> Self {
        let mut input = Self {
            store,
            rules,
            alerts,
            title: String::new(),
            description: String::new(),
            people: String::new(),
        };
        input.configure();
        input
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.people = value.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> &str {
        &self.people
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    /// Validates the current fields and adds a project when all pass.
    ///
    /// # Errors
    /// - Returns `SubmitError::Invalid` for the first failing field, after
    ///   raising one alert. Fields and store are left untouched.
    pub fn submit(&mut self) -> Result<ProjectId, SubmitError> {
        let submission = match self.collect() {
            Ok(submission) => submission,
            Err(err) => {
                let SubmitError::Invalid { field, violation } = &err;
                warn!(
                    "event=submit_rejected module=view status=error field={} rule={}",
                    field.as_str(),
                    violation.rule()
                );
                self.alerts.alert(INVALID_INPUT_ALERT);
                return Err(err);
            }
        };

        let id = self.store.add_project(
            submission.title,
            submission.description,
            submission.people,
        );
        info!(
            "event=submit_accepted module=view status=ok project_id={}",
            id
        );
        self.clear();
        Ok(id)
    }

    /// Resets every field to empty text.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    fn collect(&self) -> Result<Submission, SubmitError> {
        let title = self.title.trim();
        let description = self.description.trim();
        let people = self.people.trim();

        check_field(
            FormField::Title,
            &LabeledValue::with_rules(title, &self.rules.title),
        )?;
        check_field(
            FormField::Description,
            &LabeledValue::with_rules(description, &self.rules.description),
        )?;
        let people_value = parse_people(people).map_err(|violation| SubmitError::Invalid {
            field: FormField::People,
            violation,
        })?;
        check_field(
            FormField::People,
            &LabeledValue::with_rules(people_value, &self.rules.people),
        )?;
        let people = to_head_count(people_value).map_err(|violation| SubmitError::Invalid {
            field: FormField::People,
            violation,
        })?;

        Ok(Submission {
            title: title.to_string(),
            description: description.to_string(),
            people,
        })
    }
}

impl Component for ProjectInput {
    fn configure(&mut self) {
        self.clear();
        let rules = &self.rules;
        debug!(
            "event=input_configured module=view status=ok title_required={} \
             description_min_length={:?} people_min={:?} people_max={:?} store_total={}",
            rules.title.required,
            rules.description.min_length,
            rules.people.min,
            rules.people.max,
            self.store.len()
        );
    }

    fn render_content(&self) -> String {
        format!(
            "title: {}\ndescription: {}\npeople: {}\n",
            self.title, self.description, self.people
        )
    }
}

fn check_field(field: FormField, value: &LabeledValue) -> Result<(), SubmitError> {
    check(value).map_err(|violation| SubmitError::Invalid { field, violation })
}

/// Reads trimmed people text as a number.
///
/// Empty text reads as `0`. Anything that is not a plain decimal literal is
/// rejected outright instead of becoming NaN.
pub fn parse_people(text: &str) -> Result<f64, RuleViolation> {
    if text.is_empty() {
        return Ok(0.0);
    }
    if !DECIMAL_RE.is_match(text) {
        return Err(RuleViolation::NotANumber);
    }
    text.parse::<f64>().map_err(|_| RuleViolation::NotANumber)
}

fn to_head_count(value: f64) -> Result<u32, RuleViolation> {
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(RuleViolation::InvalidCount(value));
    }
    Ok(value as u32)
}

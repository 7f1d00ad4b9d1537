//! Declarative per-field validation.
//!
//! # Responsibility
//! - Check one labeled value against an optional set of rules.
//! - Report the first failing rule for diagnostics.
//!
//! # Invariants
//! - Absent rules are vacuously satisfied.
//! - Length rules only apply to text; bound rules only apply to numbers.
//! - `required` checks the trimmed text rendering, so the number `0` passes it.
//! - A NaN number fails every bound that is present.

use crate::config::FieldRules;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw value carried by a labeled value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Text rendering used by the `required` rule.
    ///
    /// Integral numbers render without a fraction (`0`, `5`).
    pub fn render(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// A value plus the constraints it is checked against.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl LabeledValue {
    /// Creates a value with no rules attached.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Creates a value checked against configured field rules.
    pub fn with_rules(value: impl Into<FieldValue>, rules: &FieldRules) -> Self {
        Self {
            value: value.into(),
            required: rules.required,
            min_length: rules.min_length,
            max_length: rules.max_length,
            min: rules.min,
            max: rules.max,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// First rule a labeled value failed.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleViolation {
    /// Trimmed text rendering is empty.
    Required,
    /// Text has fewer characters than `min_length`.
    TooShort { min_length: usize, actual: usize },
    /// Text has more characters than `max_length`.
    TooLong { max_length: usize, actual: usize },
    /// Number is below `min` (or NaN).
    BelowMin { min: f64, actual: f64 },
    /// Number is above `max` (or NaN).
    AboveMax { max: f64, actual: f64 },
    /// Text could not be read as a number at all.
    NotANumber,
    /// Number passed its bounds but is not a whole, non-negative count.
    InvalidCount(f64),
}

impl RuleViolation {
    /// Stable rule name used in log lines.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooShort { .. } => "min_length",
            Self::TooLong { .. } => "max_length",
            Self::BelowMin { .. } => "min",
            Self::AboveMax { .. } => "max",
            Self::NotANumber => "numeric",
            Self::InvalidCount(_) => "count",
        }
    }
}

impl Display for RuleViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "value is required"),
            Self::TooShort { min_length, actual } => {
                write!(f, "expected at least {min_length} characters, got {actual}")
            }
            Self::TooLong { max_length, actual } => {
                write!(f, "expected at most {max_length} characters, got {actual}")
            }
            Self::BelowMin { min, actual } => write!(f, "{actual} is below minimum {min}"),
            Self::AboveMax { max, actual } => write!(f, "{actual} is above maximum {max}"),
            Self::NotANumber => write!(f, "value is not a number"),
            Self::InvalidCount(value) => write!(f, "{value} is not a valid head count"),
        }
    }
}

impl Error for RuleViolation {}

/// Checks every applicable rule and returns the first violation.
///
/// Rule order: `required`, `min_length`, `max_length`, `min`, `max`.
pub fn check(input: &LabeledValue) -> Result<(), RuleViolation> {
    if input.required && input.value.render().trim().is_empty() {
        return Err(RuleViolation::Required);
    }

    match &input.value {
        FieldValue::Text(text) => {
            let actual = text.chars().count();
            if let Some(min_length) = input.min_length {
                if actual < min_length {
                    return Err(RuleViolation::TooShort { min_length, actual });
                }
            }
            if let Some(max_length) = input.max_length {
                if actual > max_length {
                    return Err(RuleViolation::TooLong { max_length, actual });
                }
            }
        }
        FieldValue::Number(actual) => {
            let actual = *actual;
            if let Some(min) = input.min {
                // Negated so NaN fails the bound.
                if !(actual >= min) {
                    return Err(RuleViolation::BelowMin { min, actual });
                }
            }
            if let Some(max) = input.max {
                if !(actual <= max) {
                    return Err(RuleViolation::AboveMax { max, actual });
                }
            }
        }
    }

    Ok(())
}

/// Returns whether every applicable rule holds.
pub fn validate(input: &LabeledValue) -> bool {
    check(input).is_ok()
}

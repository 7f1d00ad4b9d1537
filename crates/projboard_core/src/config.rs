//! Form rule configuration.
//!
//! # Responsibility
//! - Describe the validation rules applied to each form field.
//! - Load rule overrides from JSON, falling back to built-in defaults.
//!
//! # Invariants
//! - Defaults: title required; description required with at least 5
//!   characters; people required within `1..=10`.
//! - Fields missing from a JSON document keep their default rules; a field
//!   that is present replaces that field's rules as a whole.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Rules for one form field. All rules are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Rules for the three project form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormRules {
    pub title: FieldRules,
    pub description: FieldRules,
    pub people: FieldRules,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: FieldRules {
                required: true,
                ..FieldRules::default()
            },
            description: FieldRules {
                required: true,
                min_length: Some(5),
                ..FieldRules::default()
            },
            people: FieldRules {
                required: true,
                min: Some(1.0),
                max: Some(10.0),
                ..FieldRules::default()
            },
        }
    }
}

impl FormRules {
    /// Parses rules from a JSON document.
    ///
    /// # Errors
    /// - Returns `ConfigError::Parse` on malformed JSON or unknown keys.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse { path: None, err })
    }

    /// Reads and parses rules from a JSON file.
    ///
    /// # Errors
    /// - Returns `ConfigError::Read` when the file cannot be read.
    /// - Returns `ConfigError::Parse` when its content is not valid rules JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            err,
        })?;
        serde_json::from_str(&raw).map_err(|err| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            err,
        })
    }
}

/// Failure to load form rules.
#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        err: std::io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        err: serde_json::Error,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, err } => {
                write!(f, "failed to read rules file `{}`: {err}", path.display())
            }
            Self::Parse {
                path: Some(path),
                err,
            } => write!(f, "invalid rules file `{}`: {err}", path.display()),
            Self::Parse { path: None, err } => write!(f, "invalid rules JSON: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { err, .. } => Some(err),
            Self::Parse { err, .. } => Some(err),
        }
    }
}

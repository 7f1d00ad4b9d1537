//! Core domain logic for projboard.
//! This crate is the single source of truth for business invariants.

pub mod app;
pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use app::App;
pub use config::{ConfigError, FieldRules, FormRules};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingConfig};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use store::{Listener, ListenerId, ProjectStore};
pub use validation::{check, validate, FieldValue, LabeledValue, RuleViolation};
pub use view::alert::{AlertSink, RecordingAlerts, StderrAlerts};
pub use view::project_input::{FormField, ProjectInput, SubmitError, INVALID_INPUT_ALERT};
pub use view::project_list::ProjectList;
pub use view::Component;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

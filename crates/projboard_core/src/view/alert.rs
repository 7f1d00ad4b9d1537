//! Blocking user notifications raised by views.

use std::cell::RefCell;

/// Host surface for user-facing alerts.
pub trait AlertSink {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrAlerts;

impl AlertSink for StderrAlerts {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Keeps alerts in memory so callers can inspect them.
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    messages: RefCell<Vec<String>>,
}

impl RecordingAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

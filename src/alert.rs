//! Alert system for displaying success and error messages to users.
//!
//! This module provides a unified way to describe the notifications shown
//! after a user action, and the [Notifier] trait the UI layer implements to
//! display them.

use serde::Serialize;

/// Alert message types for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A notification with a short title and a longer message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Alert {
    /// Create a new success alert.
    pub fn success(title: &str, message: &str) -> Self {
        Self {
            title: title.to_owned(),
            message: message.to_owned(),
            severity: Severity::Success,
        }
    }

    /// Create a new error alert.
    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_owned(),
            message: message.to_owned(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Somewhere to send alerts so the user can see them.
pub trait Notifier {
    /// Display `alert` to the user.
    fn show(&mut self, alert: Alert);
}

/// Collects alerts in order, which is handy for tests and for batch output.
impl Notifier for Vec<Alert> {
    fn show(&mut self, alert: Alert) {
        self.push(alert);
    }
}

/// A notifier that writes alerts to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show(&mut self, alert: Alert) {
        match alert.severity {
            Severity::Success => tracing::info!("{}: {}", alert.title, alert.message),
            Severity::Error => tracing::error!("{}: {}", alert.title, alert.message),
        }
    }
}

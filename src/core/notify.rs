//! Alert delivery.
//!
//! The monitor only ever hands a plain-text label to a sink; delivery,
//! deduplication and presentation are the sink's problem. That keeps the
//! desktop layer swappable for a logger (or anything else) in tests.

use std::process::Command;

/// A single capability: raise one alert with a label.
pub trait AlertSink {
    fn raise(&self, message: &str);
}

/// Desktop notifications via `notify-send`.
///
/// Delivery is fire-and-forget: a failed or missing notifier is logged and
/// otherwise ignored, never retried.
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        if !Self::is_available() {
            log::warn!("notify-send not found, desktop alerts will be dropped");
        }
        Self
    }

    /// Check whether notify-send can be invoked at all.
    pub fn is_available() -> bool {
        Command::new("notify-send")
            .arg("--version")
            .output()
            .is_ok()
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertSink for DesktopNotifier {
    fn raise(&self, message: &str) {
        let result = Command::new("notify-send")
            .arg("--app-name=psimon")
            .arg(message)
            .status();

        match result {
            Ok(status) if !status.success() => {
                log::warn!("notify-send exited with {}", status);
            }
            Err(e) => log::warn!("failed to spawn notify-send: {}", e),
            Ok(_) => {}
        }
    }
}

/// Alert sink that writes to the log instead of the desktop.
pub struct LogSink;

impl AlertSink for LogSink {
    fn raise(&self, message: &str) {
        log::warn!("ALERT: {}", message);
    }
}

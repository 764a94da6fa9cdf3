//! Advisory developer diagnostics.
//!
//! Size migration and chart promotion report through a [`DiagnosticsSink`]
//! instead of failing. Warnings never change the result of an operation.

use std::sync::Mutex;

/// Receiver for developer-facing warnings.
pub trait DiagnosticsSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Emits warnings through `tracing` in debug builds and nothing in release builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevWarnings;

impl DiagnosticsSink for DevWarnings {
    fn warn(&self, message: &str) {
        if cfg!(debug_assertions) {
            tracing::warn!(target: "cardkit::dev", "{message}");
        }
    }
}

/// Discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl DiagnosticsSink for Silent {
    fn warn(&self, _message: &str) {}
}

/// Collects warnings in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().map(|m| m.is_empty()).unwrap_or(true)
    }
}

impl DiagnosticsSink for RecordingSink {
    fn warn(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// Pick the sink matching a `dev_warnings` setting.
pub fn sink_for(dev_warnings: bool) -> Box<dyn DiagnosticsSink> {
    if dev_warnings { Box::new(DevWarnings) } else { Box::new(Silent) }
}

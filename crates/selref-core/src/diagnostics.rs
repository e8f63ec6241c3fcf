//! Injectable diagnostics sink for recoverable parse failures.
//!
//! The parser never writes to a global console. It reports through a
//! [`Diagnostics`] implementation chosen by the caller: [`TracingDiagnostics`]
//! forwards to `tracing`, [`RecordingDiagnostics`] keeps events in memory.

use std::fmt;
use std::sync::Mutex;

/// Receiver for warnings and errors raised while parsing targets.
///
/// `context` is a list of `(key, value)` pairs describing the offending input.
pub trait Diagnostics {
    fn warn(&self, message: &str, context: &[(&str, &str)]);
    fn error(&self, message: &str, context: &[(&str, &str)]);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn warn(&self, message: &str, context: &[(&str, &str)]) {
        (**self).warn(message, context)
    }

    fn error(&self, message: &str, context: &[(&str, &str)]) {
        (**self).error(message, context)
    }
}

/// Renders context pairs as `key="value"` separated by spaces.
struct ContextFields<'a>(&'a [(&'a str, &'a str)]);

impl fmt::Display for ContextFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value:?}")?;
        }
        Ok(())
    }
}

/// Default sink: emits `tracing` events under the `selref` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str, context: &[(&str, &str)]) {
        tracing::warn!(target: "selref", context = %ContextFields(context), "{message}");
    }

    fn error(&self, message: &str, context: &[(&str, &str)]) {
        tracing::error!(target: "selref", context = %ContextFields(context), "{message}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warn,
    Error,
}

/// One reported diagnostic, with owned copies of its context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub level: Level,
    pub message: String,
    pub context: Vec<(String, String)>,
}

impl DiagnosticEvent {
    /// Value recorded under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Sink that keeps every event in memory, in report order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn warnings(&self) -> Vec<DiagnosticEvent> {
        self.of_level(Level::Warn)
    }

    pub fn errors(&self) -> Vec<DiagnosticEvent> {
        self.of_level(Level::Error)
    }

    fn of_level(&self, level: Level) -> Vec<DiagnosticEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }

    fn record(&self, level: Level, message: &str, context: &[(&str, &str)]) {
        let event = DiagnosticEvent {
            level,
            message: message.to_string(),
            context: context
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str, context: &[(&str, &str)]) {
        self.record(Level::Warn, message, context);
    }

    fn error(&self, message: &str, context: &[(&str, &str)]) {
        self.record(Level::Error, message, context);
    }
}

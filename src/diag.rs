//! Advisory log routing.
//!
//! Validation issues are plain data; modules never log through a private
//! rate-limited logger of their own. Instead callers inject a [`LogPort`]
//! and compose deduplication explicitly via [`Deduped`] when repeated
//! advisories (hot-reload re-validating the same broken file every tick)
//! would otherwise spam the log.

use std::collections::HashSet;

use crate::validate::report::ValidationReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Severity for advisory messages.
pub enum LogLevel {
    /// Developer detail.
    Debug,
    /// Normal progress.
    Info,
    /// Something was repaired or degraded.
    Warn,
    /// A whole entity or document was replaced by defaults.
    Error,
}

/// Injected sink for advisory messages.
pub trait LogPort {
    /// Emit one message at `level`.
    fn log(&mut self, level: LogLevel, message: &str);
}

/// A [`LogPort`] forwarding to the `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingPort;

impl LogPort for TracingPort {
    fn log(&mut self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!("{message}"),
            LogLevel::Info => tracing::info!("{message}"),
            LogLevel::Warn => tracing::warn!("{message}"),
            LogLevel::Error => tracing::error!("{message}"),
        }
    }
}

/// Decorator that emits each distinct `(level, message)` pair once.
#[derive(Clone, Debug, Default)]
pub struct Deduped<P> {
    inner: P,
    seen: HashSet<(LogLevel, String)>,
}

impl<P: LogPort> Deduped<P> {
    /// Wrap a port with once-only delivery.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            seen: HashSet::new(),
        }
    }

    /// Forget previously seen messages.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

impl<P: LogPort> LogPort for Deduped<P> {
    fn log(&mut self, level: LogLevel, message: &str) {
        if self.seen.insert((level, message.to_owned())) {
            self.inner.log(level, message);
        }
    }
}

/// Route every issue of a report through a port as warnings.
pub fn report_to_port(report: &ValidationReport, port: &mut dyn LogPort) {
    for issue in report.iter() {
        port.log(LogLevel::Warn, &issue.to_string());
    }
}

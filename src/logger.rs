use std::{backtrace::{Backtrace, BacktraceStatus}, sync::{Arc, atomic::{AtomicBool, Ordering}}};

use crate::{format::Record, level::Severity, sink::Sink};

/// A named logger that fans every record out to its sinks.
///
/// Obtained from [`LoggerFactory::create`](crate::LoggerFactory::create); the
/// factory hands out the same instance for the same name.
pub struct Logger {
    name: String,
    level: Severity,
    sinks: Vec<Arc<dyn Sink>>,
    failed: AtomicBool
}

impl Logger {
    pub(crate) fn new(name: String, level: Severity, sinks: Vec<Arc<dyn Sink>>) -> Logger {
        Logger {
            name,
            level,
            sinks,
            failed: AtomicBool::new(false)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    pub fn log<M: ToString>(&self, severity: Severity, message: M) {
        if self.enabled(severity) {
            let message = message.to_string();

            self.dispatch(&Record::new(severity, &self.name, &message));
        }
    }

    pub fn debug<M: ToString>(&self, message: M) {
        self.log(Severity::Debug, message)
    }

    pub fn info<M: ToString>(&self, message: M) {
        self.log(Severity::Info, message)
    }

    pub fn warning<M: ToString>(&self, message: M) {
        self.log(Severity::Warning, message)
    }

    pub fn error<M: ToString>(&self, message: M) {
        self.log(Severity::Error, message)
    }

    pub fn critical<M: ToString>(&self, message: M) {
        self.log(Severity::Critical, message)
    }

    /// Logs `message` at ERROR with `error`'s cause chain and a stack trace
    /// rendered underneath it.
    ///
    /// The error's own backtrace is used when one was captured; otherwise the
    /// trace is taken here, regardless of `RUST_BACKTRACE`.
    pub fn exception<M: ToString>(&self, message: M, error: &anyhow::Error) {
        if self.enabled(Severity::Error) {
            let message = message.to_string();
            let detail = traceback(error);
            let record = Record::new(Severity::Error, &self.name, &message).with_detail(&detail);

            self.dispatch(&record);
        }
    }

    pub fn flush(&self) {
        for sink in &self.sinks {
            if let Err(err) = sink.flush() {
                self.report(err);
            }
        }
    }

    fn dispatch(&self, record: &Record) {
        for sink in &self.sinks {
            if let Err(err) = sink.emit(record) {
                self.report(err);
            }
        }
    }

    // only the first failure is reported, later ones are dropped silently
    fn report(&self, err: std::io::Error) {
        if !self.failed.swap(true, Ordering::Relaxed) {
            eprintln!("radhe-log: logger {:?} failed to write a record: {}", self.name, err);
        }
    }
}

fn traceback(error: &anyhow::Error) -> String {
    match error.backtrace().status() {
        // anyhow's debug output already ends with the captured trace
        BacktraceStatus::Captured => format!("{:?}", error),
        _ => format!("{:?}\n\nStack backtrace:\n{}", error, Backtrace::force_capture())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

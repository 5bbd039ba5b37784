use crate::domain::ports::LogSink;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Forwards every line to `tracing` at the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

/// Keeps every emitted line in memory so callers can assert on it verbatim.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lines(&self) -> MutexGuard<'_, Vec<(Level, String)>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, level: Level, message: &str) {
        self.lines().push((level, message.to_string()));
    }

    fn at(&self, level: Level) -> Vec<String> {
        self.lines()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn info_logs(&self) -> Vec<String> {
        self.at(Level::Info)
    }

    pub fn warn_logs(&self) -> Vec<String> {
        self.at(Level::Warn)
    }

    pub fn error_logs(&self) -> Vec<String> {
        self.at(Level::Error)
    }

    pub fn clear(&self) {
        self.lines().clear();
    }
}

impl LogSink for MemorySink {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

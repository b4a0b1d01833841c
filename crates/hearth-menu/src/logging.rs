//! Logger seam used by menu handlers.
//!
//! # Design
//! - Handlers log through an injected [`MenuLogger`] so tests can observe warnings.
//! - The default sink forwards to `tracing` with a structured `category` field.

use std::fmt::{self, Display, Formatter};

/// Severity of a menu log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Verbose diagnostics.
    Debug,
    /// Informational message.
    Info,
    /// Recoverable problem.
    Warning,
    /// Failure worth surfacing to operators.
    Fatal,
}

/// Functional area a log line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogCategory {
    /// Homepage surfaces and their menus.
    Homepage,
    /// Store dispatch plumbing.
    Redux,
}

impl LogCategory {
    /// Lowercase category label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Homepage => "homepage",
            Self::Redux => "redux",
        }
    }
}

impl Display for LogCategory {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Sink for menu log lines.
pub trait MenuLogger: Send + Sync {
    /// Record a message.
    fn log(&self, message: &str, level: LogLevel, category: LogCategory);
}

/// Process-wide logger backed by the installed `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl MenuLogger for TracingLogger {
    fn log(&self, message: &str, level: LogLevel, category: LogCategory) {
        let category = category.as_str();
        match level {
            LogLevel::Debug => tracing::debug!(category, "{message}"),
            LogLevel::Info => tracing::info!(category, "{message}"),
            LogLevel::Warning => tracing::warn!(category, "{message}"),
            LogLevel::Fatal => tracing::error!(category, "{message}"),
        }
    }
}

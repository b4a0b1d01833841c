//! Recording stand-ins for the menu's collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use hearth_menu::{
    ContextMenuCoordinator, Dispatcher, LogCategory, LogLevel, MenuLogger,
    NavigationBrowserAction, SupportTopic, SupportTopicResolver,
};
use url::Url;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Dispatcher that keeps every action it receives.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    actions: Mutex<Vec<NavigationBrowserAction>>,
}

impl RecordingDispatcher {
    /// Snapshot of dispatched actions in order.
    #[must_use]
    pub fn actions(&self) -> Vec<NavigationBrowserAction> {
        lock(&self.actions).clone()
    }

    /// Number of dispatched actions.
    #[must_use]
    pub fn count(&self) -> usize {
        lock(&self.actions).len()
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&self, action: NavigationBrowserAction) {
        lock(&self.actions).push(action);
    }
}

/// One captured log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    /// Message text.
    pub message: String,
    /// Severity.
    pub level: LogLevel,
    /// Category.
    pub category: LogCategory,
}

/// Logger that keeps every line it receives.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    /// Snapshot of captured lines in order.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        lock(&self.records).clone()
    }

    /// Captured lines at warning level.
    #[must_use]
    pub fn warnings(&self) -> Vec<LogRecord> {
        lock(&self.records)
            .iter()
            .filter(|record| record.level == LogLevel::Warning)
            .cloned()
            .collect()
    }
}

impl MenuLogger for RecordingLogger {
    fn log(&self, message: &str, level: LogLevel, category: LogCategory) {
        lock(&self.records).push(LogRecord {
            message: message.to_string(),
            level,
            category,
        });
    }
}

/// Resolver returning the same answer for every topic and remembering requests.
#[derive(Debug, Default)]
pub struct FixedResolver {
    url: Option<Url>,
    requests: Mutex<Vec<SupportTopic>>,
}

impl FixedResolver {
    /// Resolver answering `url` for every topic.
    #[must_use]
    pub fn returning(url: Option<Url>) -> Self {
        Self {
            url,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Topics requested so far.
    #[must_use]
    pub fn requests(&self) -> Vec<SupportTopic> {
        lock(&self.requests).clone()
    }
}

impl SupportTopicResolver for FixedResolver {
    fn url_for_topic(&self, topic: SupportTopic) -> Option<Url> {
        lock(&self.requests).push(topic);
        self.url.clone()
    }
}

/// Coordinator counting dismissal requests.
#[derive(Debug, Default)]
pub struct RecordingCoordinator {
    dismissals: AtomicUsize,
}

impl RecordingCoordinator {
    /// Number of `dismiss_flow` calls.
    #[must_use]
    pub fn dismissals(&self) -> usize {
        self.dismissals.load(Ordering::SeqCst)
    }
}

impl ContextMenuCoordinator for RecordingCoordinator {
    fn dismiss_flow(&self) {
        self.dismissals.fetch_add(1, Ordering::SeqCst);
    }
}

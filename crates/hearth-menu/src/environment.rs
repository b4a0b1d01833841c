//! Collaborators shared by every action built for a menu.

use std::fmt;
use std::sync::Arc;

use crate::dispatch::Dispatcher;
use crate::i18n::{LocaleCode, TranslationBundle};
use crate::logging::{MenuLogger, TracingLogger};
use crate::support::SupportTopicResolver;

/// Injected services used by the action factory and tap handlers.
#[derive(Clone)]
pub struct MenuEnvironment {
    pub(crate) dispatcher: Arc<dyn Dispatcher>,
    pub(crate) resolver: Arc<dyn SupportTopicResolver>,
    pub(crate) logger: Arc<dyn MenuLogger>,
    pub(crate) strings: Arc<TranslationBundle>,
}

impl MenuEnvironment {
    /// Environment using the process-wide tracing logger and English strings.
    #[must_use]
    pub fn new(dispatcher: Arc<dyn Dispatcher>, resolver: Arc<dyn SupportTopicResolver>) -> Self {
        Self {
            dispatcher,
            resolver,
            logger: Arc::new(TracingLogger),
            strings: Arc::new(TranslationBundle::default()),
        }
    }

    /// Replace the logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn MenuLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Use strings for `locale`.
    #[must_use]
    pub fn with_locale(mut self, locale: LocaleCode) -> Self {
        self.strings = Arc::new(TranslationBundle::new(locale));
        self
    }
}

impl fmt::Debug for MenuEnvironment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MenuEnvironment")
            .field("locale", &self.strings.locale())
            .finish_non_exhaustive()
    }
}

//! Error types raised while building or running menu actions.
//!
//! None of these escape [`crate::ContextMenuState`]; they are turned into log
//! lines at the component boundary.

use thiserror::Error;

use crate::support::SupportTopic;

/// Failures encountered by the action factory and tap handlers.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Site URL string did not parse as an absolute URL.
    #[error("invalid site url")]
    InvalidSiteUrl {
        /// Offending URL string.
        url: String,
        /// Parser error detail.
        source: url::ParseError,
    },
    /// Help topic could not be resolved to a URL.
    #[error("support topic could not be resolved")]
    UnresolvedSupportTopic {
        /// Topic that failed to resolve.
        topic: SupportTopic,
    },
}

impl MenuError {
    /// Message written to the menu logger for this failure.
    #[must_use]
    pub fn log_message(&self) -> String {
        match self {
            Self::InvalidSiteUrl { url, .. } => format!("Unable to parse site url: {url}"),
            Self::UnresolvedSupportTopic { topic } => {
                format!("Unable to resolve support topic '{}'", topic.key())
            }
        }
    }
}

/// Convenience alias for menu results.
pub type MenuResult<T> = Result<T, MenuError>;

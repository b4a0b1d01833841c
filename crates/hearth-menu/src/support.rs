//! Help topic URL resolution.
//!
//! Support articles live at `<base>/<app_version>/<platform>/<language>/<topic>`.

use std::fmt::{self, Display, Formatter};

use url::Url;

/// Help article identifiers linked from homepage menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SupportTopic {
    /// How sponsored shortcuts relate to user privacy.
    SponsoredContent,
}

impl SupportTopic {
    /// Article key appended to the support base URL.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SponsoredContent => "sponsor-privacy",
        }
    }
}

impl Display for SupportTopic {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.key())
    }
}

/// Lookup from help topic to article URL.
pub trait SupportTopicResolver: Send + Sync {
    /// URL for `topic`, or `None` when no article URL can be built.
    fn url_for_topic(&self, topic: SupportTopic) -> Option<Url>;
}

/// Resolver composing article URLs from app metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportUrlResolver {
    base: Url,
    app_version: String,
    platform: String,
    language: String,
}

impl SupportUrlResolver {
    /// Default support site root.
    pub const DEFAULT_BASE: &'static str = "https://support.mozilla.org/1/mobile";

    /// Build a resolver for the given app metadata.
    #[must_use]
    pub fn new(
        base: Url,
        app_version: impl Into<String>,
        platform: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            base,
            app_version: app_version.into(),
            platform: platform.into(),
            language: language.into(),
        }
    }
}

impl SupportTopicResolver for SupportUrlResolver {
    fn url_for_topic(&self, topic: SupportTopic) -> Option<Url> {
        let parts = [
            self.app_version.as_str(),
            self.platform.as_str(),
            self.language.as_str(),
            topic.key(),
        ];
        if parts.iter().any(|part| part.trim().is_empty()) {
            return None;
        }

        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().ok()?;
            segments.pop_if_empty();
            segments.extend(parts);
        }
        Some(url)
    }
}

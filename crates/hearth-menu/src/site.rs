//! Homepage site model.
//!
//! # Design
//! - Classification is a closed discriminant on the site itself; callers never
//!   inspect runtime types to decide which menu applies.
//! - Sites are owned by the caller and read-only to the menu.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{MenuError, MenuResult};

/// Classification of a homepage site.
///
/// Variants are listed in the order the top sites menu checks them: a pinned
/// site wins over a sponsored one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteKind {
    /// Site fixed in place by the user.
    Pinned,
    /// Slot filled with promotional content.
    Sponsored,
    /// Any other site (history-derived tile, Pocket story, ...).
    #[default]
    Plain,
}

impl SiteKind {
    /// Stable label used in logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pinned => "pinned",
            Self::Sponsored => "sponsored",
            Self::Plain => "plain",
        }
    }
}

/// Content item shown on the homepage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Raw URL string as stored by the caller. Not guaranteed to parse.
    pub url: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Bookmark state when known.
    #[serde(default)]
    pub bookmarked: Option<bool>,
    /// Site classification.
    #[serde(default)]
    pub kind: SiteKind,
}

impl Site {
    /// Plain site with no bookmark information.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            bookmarked: None,
            kind: SiteKind::Plain,
        }
    }

    /// Pinned top site.
    #[must_use]
    pub fn pinned(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(url, title).with_kind(SiteKind::Pinned)
    }

    /// Sponsored tile.
    #[must_use]
    pub fn sponsored(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(url, title).with_kind(SiteKind::Sponsored)
    }

    /// Override the classification.
    #[must_use]
    pub const fn with_kind(mut self, kind: SiteKind) -> Self {
        self.kind = kind;
        self
    }

    /// Record the bookmark state.
    #[must_use]
    pub const fn with_bookmarked(mut self, bookmarked: bool) -> Self {
        self.bookmarked = Some(bookmarked);
        self
    }

    /// Whether the site is known to be bookmarked. Unknown counts as not bookmarked.
    #[must_use]
    pub fn is_bookmarked(&self) -> bool {
        self.bookmarked.unwrap_or(false)
    }

    /// Parse the stored URL string.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidSiteUrl`] when the string is not an absolute URL.
    pub fn parsed_url(&self) -> MenuResult<Url> {
        Url::parse(&self.url).map_err(|source| MenuError::InvalidSiteUrl {
            url: self.url.clone(),
            source,
        })
    }
}

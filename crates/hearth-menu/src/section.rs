//! Homepage surfaces a context menu can be opened from.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Homepage section identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HomepageSection {
    /// Header with the wordmark.
    Header,
    /// Promotional message cards.
    Messages,
    /// Shortcut tiles.
    TopSites,
    /// Recently opened tabs.
    JumpBackIn,
    /// Recently saved bookmarks.
    Bookmarks,
    /// Recommended stories.
    Pocket,
    /// Customize homepage button.
    Customize,
}

impl HomepageSection {
    /// All sections in homepage order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Header,
            Self::Messages,
            Self::TopSites,
            Self::JumpBackIn,
            Self::Bookmarks,
            Self::Pocket,
            Self::Customize,
        ]
    }

    /// Kebab-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Messages => "messages",
            Self::TopSites => "top-sites",
            Self::JumpBackIn => "jump-back-in",
            Self::Bookmarks => "bookmarks",
            Self::Pocket => "pocket",
            Self::Customize => "customize",
        }
    }

    /// Whether items in this section expose a context menu.
    #[must_use]
    pub const fn has_context_menu(self) -> bool {
        matches!(self, Self::TopSites | Self::Pocket)
    }
}

impl Display for HomepageSection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned when a section identifier is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl Display for UnknownSection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown homepage section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for HomepageSection {
    type Err = UnknownSection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|section| section.as_str() == value)
            .ok_or_else(|| UnknownSection(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_top_sites_and_pocket_have_menus() {
        let with_menu: Vec<_> = HomepageSection::all()
            .into_iter()
            .filter(|section| section.has_context_menu())
            .collect();
        assert_eq!(
            with_menu,
            vec![HomepageSection::TopSites, HomepageSection::Pocket]
        );
    }

    #[test]
    fn parses_identifiers() {
        for section in HomepageSection::all() {
            assert_eq!(section.as_str().parse::<HomepageSection>(), Ok(section));
        }
        assert_eq!(
            "nope".parse::<HomepageSection>(),
            Err(UnknownSection("nope".to_string()))
        );
    }
}

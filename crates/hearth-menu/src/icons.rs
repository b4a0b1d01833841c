//! Standard image identifiers used by menu rows.
//!
//! Asset lookup belongs to the renderer; rows only carry the identifier.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Name of an icon in the shared image catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IconId(&'static str);

impl IconId {
    /// Pin outline.
    pub const PIN: Self = Self("pin");
    /// Pin with a slash.
    pub const PIN_SLASH: Self = Self("pin-slash");
    /// Plus sign used for new tabs.
    pub const PLUS: Self = Self("plus");
    /// Private browsing mask.
    pub const PRIVATE_MODE: Self = Self("private-mode");
    /// Cross used for removal.
    pub const CROSS: Self = Self("cross");
    /// Share arrow.
    pub const SHARE: Self = Self("share");
    /// Settings gear.
    pub const SETTINGS: Self = Self("settings");
    /// Help circle.
    pub const HELP_CIRCLE: Self = Self("help-circle");
    /// Bookmark ribbon.
    pub const BOOKMARK: Self = Self("bookmark");
    /// Bookmark ribbon with a slash.
    pub const BOOKMARK_SLASH: Self = Self("bookmark-slash");

    /// Catalogue name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl Display for IconId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

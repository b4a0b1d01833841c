//! Inputs supplied by the menu presentation layer.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::section::HomepageSection;
use crate::site::Site;

/// Identifier of the browser window that owns the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub Uuid);

impl WindowId {
    /// Fresh random window identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for WindowId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

/// Opaque handle to a view owned by the presentation layer.
///
/// The nil handle stands for an empty placeholder view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(pub Uuid);

impl ViewId {
    /// Placeholder used when no anchor view is available.
    pub const EMPTY: Self = Self(Uuid::nil());

    /// Fresh random view handle.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Whether this is the empty placeholder.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0.is_nil()
    }
}

/// Views needed to anchor a share sheet and show toasts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationContext {
    /// View the menu was opened from, if still available.
    pub source_view: Option<ViewId>,
    /// Container used to present confirmation toasts.
    pub toast_container: ViewId,
}

impl PresentationContext {
    /// Anchor for popovers, falling back to the empty view.
    #[must_use]
    pub fn anchor_view(&self) -> ViewId {
        self.source_view.unwrap_or(ViewId::EMPTY)
    }
}

/// Everything the menu needs to know about the item that was long-pressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuConfiguration {
    /// Item the menu is for. Absent for items without a backing site.
    pub site: Option<Site>,
    /// Section the item belongs to.
    pub homepage_section: HomepageSection,
    /// Presentation handles, used by the share action only.
    #[serde(default)]
    pub presentation: PresentationContext,
}

impl ContextMenuConfiguration {
    /// Configuration for a site in the given section with default presentation handles.
    #[must_use]
    pub fn new(site: Option<Site>, homepage_section: HomepageSection) -> Self {
        Self {
            site,
            homepage_section,
            presentation: PresentationContext::default(),
        }
    }

    /// Attach presentation handles.
    #[must_use]
    pub const fn with_presentation(mut self, presentation: PresentationContext) -> Self {
        self.presentation = presentation;
        self
    }
}

//! Row actions rendered by the context menu.
//!
//! # Design
//! - A row is plain data plus a zero-argument tap handler.
//! - Rows whose effect is not built yet still render; tapping them runs a
//!   [`PendingWork`] stub instead of guessing at behaviour.

use std::fmt;
use std::sync::Arc;

use crate::icons::IconId;
use crate::logging::LogCategory;

/// Which row a [`RowAction`] represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuActionKind {
    /// Pin a top site.
    Pin,
    /// Unpin a pinned top site.
    Unpin,
    /// Open the site in a new tab.
    OpenInNewTab,
    /// Open the site in a new private tab.
    OpenInNewPrivateTab,
    /// Remove the tile from top sites.
    Remove,
    /// Share the site.
    Share,
    /// Open top sites settings.
    Settings,
    /// Open the sponsored content help article.
    SponsoredContentInfo,
    /// Add a bookmark for the site.
    AddBookmark,
    /// Remove the bookmark for the site.
    RemoveBookmark,
}

impl MenuActionKind {
    /// Stable label used in logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pin => "pin",
            Self::Unpin => "unpin",
            Self::OpenInNewTab => "open_in_new_tab",
            Self::OpenInNewPrivateTab => "open_in_new_private_tab",
            Self::Remove => "remove",
            Self::Share => "share",
            Self::Settings => "settings",
            Self::SponsoredContentInfo => "sponsored_content_info",
            Self::AddBookmark => "add_bookmark",
            Self::RemoveBookmark => "remove_bookmark",
        }
    }
}

/// Effects that are rendered but not implemented yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PendingWork {
    /// Pinning or unpinning a top site.
    TogglePin,
    /// Removing a tile from top sites.
    RemoveTile,
    /// Persisting a bookmark change.
    ToggleBookmark,
}

impl PendingWork {
    /// Stable label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TogglePin => "toggle_pin",
            Self::RemoveTile => "remove_tile",
            Self::ToggleBookmark => "toggle_bookmark",
        }
    }
}

/// Callback invoked when a row is selected.
pub type TapHandler = Arc<dyn Fn() + Send + Sync>;

/// One selectable entry in a context menu.
#[derive(Clone)]
pub struct RowAction {
    kind: MenuActionKind,
    title: String,
    icon: IconId,
    allow_icon_scale: bool,
    pending: Option<PendingWork>,
    tap_handler: TapHandler,
}

impl RowAction {
    /// Row that runs `tap_handler` when selected.
    #[must_use]
    pub fn new(kind: MenuActionKind, title: String, icon: IconId, tap_handler: TapHandler) -> Self {
        Self {
            kind,
            title,
            icon,
            allow_icon_scale: true,
            pending: None,
            tap_handler,
        }
    }

    /// Row whose effect is `work`, which is not implemented yet.
    #[must_use]
    pub fn pending(kind: MenuActionKind, title: String, icon: IconId, work: PendingWork) -> Self {
        let label = kind.as_str();
        let handler: TapHandler = Arc::new(move || {
            tracing::debug!(
                category = LogCategory::Homepage.as_str(),
                action = label,
                pending = work.as_str(),
                "menu action has no effect yet"
            );
        });
        Self {
            pending: Some(work),
            ..Self::new(kind, title, icon, handler)
        }
    }

    /// Override the icon scaling flag.
    #[must_use]
    pub const fn with_icon_scale(mut self, allow: bool) -> Self {
        self.allow_icon_scale = allow;
        self
    }

    /// Row discriminant.
    #[must_use]
    pub const fn kind(&self) -> MenuActionKind {
        self.kind
    }

    /// Localized title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Icon identifier.
    #[must_use]
    pub const fn icon(&self) -> IconId {
        self.icon
    }

    /// Whether the icon follows dynamic type scaling.
    #[must_use]
    pub const fn allow_icon_scale(&self) -> bool {
        self.allow_icon_scale
    }

    /// Unimplemented effect behind this row, if any.
    #[must_use]
    pub const fn pending_work(&self) -> Option<PendingWork> {
        self.pending
    }

    /// Run the tap handler.
    pub fn tap(&self) {
        (self.tap_handler)();
    }
}

impl fmt::Debug for RowAction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RowAction")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("allow_icon_scale", &self.allow_icon_scale)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn tap_runs_handler() {
        let taps = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&taps);
        let row = RowAction::new(
            MenuActionKind::Share,
            "Share".to_string(),
            IconId::SHARE,
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        row.tap();
        row.tap();
        assert_eq!(taps.load(Ordering::SeqCst), 2);
        assert!(row.allow_icon_scale());
        assert_eq!(row.pending_work(), None);
    }

    #[test]
    fn pending_rows_render_and_do_nothing() {
        let row = RowAction::pending(
            MenuActionKind::Remove,
            "Remove".to_string(),
            IconId::CROSS,
            PendingWork::RemoveTile,
        );
        row.tap();
        assert_eq!(row.kind(), MenuActionKind::Remove);
        assert_eq!(row.title(), "Remove");
        assert_eq!(row.icon(), IconId::CROSS);
        assert_eq!(row.pending_work(), Some(PendingWork::RemoveTile));
    }

    #[test]
    fn debug_omits_handler() {
        let row = RowAction::pending(
            MenuActionKind::Pin,
            "Pin".to_string(),
            IconId::PIN,
            PendingWork::TogglePin,
        )
        .with_icon_scale(false);
        let rendered = format!("{row:?}");
        assert!(rendered.contains("Pin"));
        assert!(rendered.contains("allow_icon_scale: false"));
    }
}

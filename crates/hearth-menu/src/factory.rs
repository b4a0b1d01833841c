//! Builders for individual menu rows and the per-classification row lists.
//!
//! # Design
//! - Every list requires the site URL to parse; otherwise the list is empty.
//! - Tap handlers capture a clone of the factory, so rows outlive the menu
//!   state that produced them.
//! - Handler failures are logged through the injected logger and never raised.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::action::{MenuActionKind, PendingWork, RowAction};
use crate::configuration::{PresentationContext, WindowId};
use crate::environment::MenuEnvironment;
use crate::error::{MenuError, MenuResult};
use crate::icons::IconId;
use crate::logging::{LogCategory, LogLevel};
use crate::navigation::{
    ArrowDirections, NavigationBrowserAction, SettingsSection, ShareSheetConfiguration, ShareType,
};
use crate::site::{Site, SiteKind};
use crate::support::SupportTopic;

/// Produces rows wired to the environment's dispatcher.
#[derive(Clone, Debug)]
pub struct ActionFactory {
    env: MenuEnvironment,
    window: WindowId,
    presentation: PresentationContext,
}

impl ActionFactory {
    /// Factory for menus shown in `window`.
    #[must_use]
    pub const fn new(
        env: MenuEnvironment,
        window: WindowId,
        presentation: PresentationContext,
    ) -> Self {
        Self {
            env,
            window,
            presentation,
        }
    }

    /// Rows for a top site, chosen by its classification.
    #[must_use]
    pub fn top_site_actions(&self, site: &Site) -> Vec<RowAction> {
        match site.kind {
            SiteKind::Pinned => self.pinned_site_actions(site),
            SiteKind::Sponsored => self.sponsored_site_actions(site),
            SiteKind::Plain => self.other_top_site_actions(site),
        }
    }

    /// Unpin, open, open private, remove, share.
    #[must_use]
    pub fn pinned_site_actions(&self, site: &Site) -> Vec<RowAction> {
        self.with_site_url(site, |url| {
            vec![
                self.unpin(),
                self.open_in_new_tab(url),
                self.open_in_new_private_tab(url),
                self.remove(),
                self.share(site),
            ]
        })
    }

    /// Open, open private, settings, sponsored content info, share.
    #[must_use]
    pub fn sponsored_site_actions(&self, site: &Site) -> Vec<RowAction> {
        self.with_site_url(site, |url| {
            vec![
                self.open_in_new_tab(url),
                self.open_in_new_private_tab(url),
                self.settings(),
                self.sponsored_content(),
                self.share(site),
            ]
        })
    }

    /// Pin, open, open private, remove, share.
    #[must_use]
    pub fn other_top_site_actions(&self, site: &Site) -> Vec<RowAction> {
        self.with_site_url(site, |url| {
            vec![
                self.pin(),
                self.open_in_new_tab(url),
                self.open_in_new_private_tab(url),
                self.remove(),
                self.share(site),
            ]
        })
    }

    /// Open, open private, bookmark toggle, share.
    #[must_use]
    pub fn pocket_actions(&self, site: &Site) -> Vec<RowAction> {
        self.with_site_url(site, |url| {
            vec![
                self.open_in_new_tab(url),
                self.open_in_new_private_tab(url),
                self.bookmark(site),
                self.share(site),
            ]
        })
    }

    /// Open `url` in a new, unselected, non-private tab.
    #[must_use]
    pub fn open_in_new_tab(&self, url: &Url) -> RowAction {
        self.open_tab_row(url, false)
    }

    /// Open `url` in a new, unselected, private tab.
    #[must_use]
    pub fn open_in_new_private_tab(&self, url: &Url) -> RowAction {
        self.open_tab_row(url, true)
    }

    /// Pin row. Pinning is not implemented yet.
    #[must_use]
    pub fn pin(&self) -> RowAction {
        RowAction::pending(
            MenuActionKind::Pin,
            self.text("pin", "Pin"),
            IconId::PIN,
            PendingWork::TogglePin,
        )
    }

    /// Unpin row. Unpinning is not implemented yet.
    #[must_use]
    pub fn unpin(&self) -> RowAction {
        RowAction::pending(
            MenuActionKind::Unpin,
            self.text("unpin", "Unpin"),
            IconId::PIN_SLASH,
            PendingWork::TogglePin,
        )
    }

    /// Remove tile row. Removal is not implemented yet.
    #[must_use]
    pub fn remove(&self) -> RowAction {
        RowAction::pending(
            MenuActionKind::Remove,
            self.text("remove", "Remove"),
            IconId::CROSS,
            PendingWork::RemoveTile,
        )
    }

    /// Opens top sites settings.
    #[must_use]
    pub fn settings(&self) -> RowAction {
        let factory = self.clone();
        RowAction::new(
            MenuActionKind::Settings,
            self.text("settings", "Settings"),
            IconId::SETTINGS,
            Arc::new(move || {
                factory.dispatch(NavigationBrowserAction::open_settings(
                    SettingsSection::TopSites,
                    factory.window,
                ));
            }),
        )
    }

    /// Opens the sponsored content help article.
    #[must_use]
    pub fn sponsored_content(&self) -> RowAction {
        let factory = self.clone();
        RowAction::new(
            MenuActionKind::SponsoredContentInfo,
            self.text("sponsored_content", "Our Sponsors & Your Privacy"),
            IconId::HELP_CIRCLE,
            Arc::new(move || factory.open_sponsored_content_info()),
        )
    }

    /// Add or remove bookmark row, chosen by the site's bookmark state.
    ///
    /// Persisting the change is not implemented yet.
    #[must_use]
    pub fn bookmark(&self, site: &Site) -> RowAction {
        if site.is_bookmarked() {
            RowAction::pending(
                MenuActionKind::RemoveBookmark,
                self.text("remove_bookmark", "Remove Bookmark"),
                IconId::BOOKMARK_SLASH,
                PendingWork::ToggleBookmark,
            )
        } else {
            RowAction::pending(
                MenuActionKind::AddBookmark,
                self.text("add_bookmark", "Bookmark"),
                IconId::BOOKMARK,
                PendingWork::ToggleBookmark,
            )
        }
    }

    /// Share row for `site`. The URL is parsed when tapped.
    #[must_use]
    pub fn share(&self, site: &Site) -> RowAction {
        let factory = self.clone();
        let site_url = site.url.clone();
        RowAction::new(
            MenuActionKind::Share,
            self.text("share", "Share"),
            IconId::SHARE,
            Arc::new(move || factory.share_site(&site_url)),
        )
    }

    /// Present the share sheet for `site_url`, logging a warning if it does not parse.
    pub fn share_site(&self, site_url: &str) {
        match self.share_sheet_action(site_url) {
            Ok(action) => self.dispatch(action),
            Err(err) => self.warn(&err),
        }
    }

    /// Open the sponsored content article in a new selected tab, logging a
    /// warning if the article URL cannot be resolved.
    pub fn open_sponsored_content_info(&self) {
        match self.sponsored_content_action() {
            Ok(action) => self.dispatch(action),
            Err(err) => self.warn(&err),
        }
    }

    fn share_sheet_action(&self, site_url: &str) -> MenuResult<NavigationBrowserAction> {
        let url = Url::parse(site_url).map_err(|source| MenuError::InvalidSiteUrl {
            url: site_url.to_string(),
            source,
        })?;
        let configuration = ShareSheetConfiguration {
            share_type: ShareType::Site(url),
            share_message: None,
            source_view: self.presentation.anchor_view(),
            toast_container: self.presentation.toast_container,
            popover_arrow_directions: ArrowDirections::SHARE_SHEET,
        };
        Ok(NavigationBrowserAction::open_share_sheet(
            configuration,
            self.window,
        ))
    }

    fn sponsored_content_action(&self) -> MenuResult<NavigationBrowserAction> {
        let topic = SupportTopic::SponsoredContent;
        let url = self
            .env
            .resolver
            .url_for_topic(topic)
            .ok_or(MenuError::UnresolvedSupportTopic { topic })?;
        Ok(NavigationBrowserAction::open_new_tab(
            url,
            false,
            true,
            self.window,
        ))
    }

    fn open_tab_row(&self, url: &Url, is_private: bool) -> RowAction {
        let (kind, title, icon) = if is_private {
            (
                MenuActionKind::OpenInNewPrivateTab,
                self.text("open_in_new_private_tab", "Open in a Private Tab"),
                IconId::PRIVATE_MODE,
            )
        } else {
            (
                MenuActionKind::OpenInNewTab,
                self.text("open_in_new_tab", "Open in New Tab"),
                IconId::PLUS,
            )
        };
        let factory = self.clone();
        let url = url.clone();
        RowAction::new(
            kind,
            title,
            icon,
            Arc::new(move || {
                factory.dispatch(NavigationBrowserAction::open_new_tab(
                    url.clone(),
                    is_private,
                    false,
                    factory.window,
                ));
            }),
        )
    }

    fn with_site_url(
        &self,
        site: &Site,
        build: impl FnOnce(&Url) -> Vec<RowAction>,
    ) -> Vec<RowAction> {
        match site.parsed_url() {
            Ok(url) => build(&url),
            Err(err) => {
                debug!(
                    category = LogCategory::Homepage.as_str(),
                    window = %self.window,
                    error = %err,
                    url = %site.url,
                    "site url did not parse; menu has no actions"
                );
                Vec::new()
            }
        }
    }

    fn dispatch(&self, action: NavigationBrowserAction) {
        self.env.dispatcher.dispatch(action);
    }

    fn warn(&self, err: &MenuError) {
        self.env
            .logger
            .log(&err.log_message(), LogLevel::Warning, LogCategory::Homepage);
    }

    fn text(&self, key: &str, default: &str) -> String {
        self.env.strings.text(&format!("context_menu.{key}"), default)
    }
}

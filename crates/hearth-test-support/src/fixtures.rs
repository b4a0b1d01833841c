//! Sample sites and a pre-wired menu environment.

use std::sync::Arc;

use hearth_menu::{
    ContextMenuConfiguration, ContextMenuState, HomepageSection, MenuEnvironment,
    PresentationContext, Site, ViewId, WindowId,
};
use url::Url;
use uuid::Uuid;

use crate::mocks::{FixedResolver, RecordingDispatcher, RecordingLogger};

/// URL used by the sample sites.
pub const SAMPLE_URL: &str = "https://www.mozilla.org/";
/// Help article URL returned by [`MenuHarness::with_help_url`].
pub const SAMPLE_HELP_URL: &str =
    "https://support.mozilla.org/1/mobile/131.0/iOS/en-US/sponsor-privacy";
/// String that does not parse as an absolute URL.
pub const INVALID_URL: &str = "not a url";

/// Plain top site.
#[must_use]
pub fn plain_site() -> Site {
    Site::new(SAMPLE_URL, "Mozilla")
}

/// Pinned top site.
#[must_use]
pub fn pinned_site() -> Site {
    Site::pinned(SAMPLE_URL, "Mozilla")
}

/// Sponsored tile.
#[must_use]
pub fn sponsored_site() -> Site {
    Site::sponsored("https://sponsor.example/landing", "Sponsor")
}

/// Pocket story with the given bookmark state.
#[must_use]
pub fn pocket_story(bookmarked: Option<bool>) -> Site {
    Site {
        bookmarked,
        ..Site::new("https://getpocket.com/explore/item/story", "Story")
    }
}

/// Deterministic window identifier.
#[must_use]
pub const fn test_window() -> WindowId {
    WindowId(Uuid::from_u128(0x5eed))
}

/// Presentation handles with both views present.
#[must_use]
pub const fn presentation() -> PresentationContext {
    PresentationContext {
        source_view: Some(ViewId(Uuid::from_u128(1))),
        toast_container: ViewId(Uuid::from_u128(2)),
    }
}

/// Recording collaborators plus a fixed window, ready to build menus.
#[derive(Debug)]
pub struct MenuHarness {
    /// Captured dispatches.
    pub dispatcher: Arc<RecordingDispatcher>,
    /// Captured log lines.
    pub logger: Arc<RecordingLogger>,
    /// Help topic resolver.
    pub resolver: Arc<FixedResolver>,
    /// Window the menus belong to.
    pub window: WindowId,
}

impl Default for MenuHarness {
    fn default() -> Self {
        Self::with_resolver(FixedResolver::returning(None))
    }
}

impl MenuHarness {
    /// Harness whose resolver answers [`SAMPLE_HELP_URL`].
    ///
    /// # Panics
    ///
    /// Panics if the sample help URL constant is malformed.
    #[must_use]
    pub fn with_help_url() -> Self {
        let url = Url::parse(SAMPLE_HELP_URL).expect("sample help url parses");
        Self::with_resolver(FixedResolver::returning(Some(url)))
    }

    /// Harness using `resolver`.
    #[must_use]
    pub fn with_resolver(resolver: FixedResolver) -> Self {
        Self {
            dispatcher: Arc::new(RecordingDispatcher::default()),
            logger: Arc::new(RecordingLogger::default()),
            resolver: Arc::new(resolver),
            window: test_window(),
        }
    }

    /// Environment wired to the recording collaborators.
    #[must_use]
    pub fn env(&self) -> MenuEnvironment {
        MenuEnvironment::new(self.dispatcher.clone(), self.resolver.clone())
            .with_logger(self.logger.clone())
    }

    /// Build a menu for `site` in `section`.
    #[must_use]
    pub fn menu(&self, site: Option<Site>, section: HomepageSection) -> ContextMenuState {
        let configuration =
            ContextMenuConfiguration::new(site, section).with_presentation(presentation());
        self.menu_for(&configuration)
    }

    /// Build a menu for an explicit configuration.
    #[must_use]
    pub fn menu_for(&self, configuration: &ContextMenuConfiguration) -> ContextMenuState {
        ContextMenuState::new(configuration, self.window, self.env())
    }
}

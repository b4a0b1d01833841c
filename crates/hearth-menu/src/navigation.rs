//! Navigation actions emitted to the application store.
//!
//! # Design
//! - Actions are plain data; the store decides how to present them.
//! - Constructors keep `action_type` consistent with the destination.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::configuration::{ViewId, WindowId};

/// Settings screens reachable from the homepage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsSection {
    /// Shortcut tile settings.
    TopSites,
}

bitflags! {
    /// Directions a popover arrow is allowed to point.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ArrowDirections: u8 {
        /// Arrow points up.
        const UP = 1;
        /// Arrow points down.
        const DOWN = 1 << 1;
        /// Arrow points left.
        const LEFT = 1 << 2;
        /// Arrow points right.
        const RIGHT = 1 << 3;
    }
}

impl ArrowDirections {
    /// Directions allowed for the homepage share sheet: every direction except right.
    pub const SHARE_SHEET: Self = Self::all().difference(Self::RIGHT);
}

/// Content handed to the share sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "url", rename_all = "snake_case")]
pub enum ShareType {
    /// A web page.
    Site(Url),
}

/// Share sheet presentation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSheetConfiguration {
    /// What is being shared.
    pub share_type: ShareType,
    /// Optional message attached to the shared content.
    pub share_message: Option<String>,
    /// View the popover is anchored to.
    pub source_view: ViewId,
    /// Container for confirmation toasts.
    pub toast_container: ViewId,
    /// Allowed popover arrow directions.
    pub popover_arrow_directions: ArrowDirections,
}

/// Where the browser should navigate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "destination", rename_all = "snake_case")]
pub enum NavigationDestination {
    /// Open a settings screen.
    Settings {
        /// Screen to open.
        section: SettingsSection,
    },
    /// Open a URL in a new tab.
    NewTab {
        /// Page to load.
        url: Url,
        /// Open in private browsing.
        is_private: bool,
        /// Switch to the new tab immediately.
        select_new_tab: bool,
    },
    /// Present the share sheet.
    ShareSheet {
        /// Share sheet request.
        configuration: ShareSheetConfiguration,
    },
}

/// Tag describing which control produced the action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationActionType {
    /// A settings row was tapped.
    TapOnSettingsSection,
    /// An open-in-new-tab row was tapped.
    TapOnOpenInNewTab,
    /// The share row was tapped.
    TapOnShareSheet,
}

impl NavigationActionType {
    /// Stable label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TapOnSettingsSection => "tap_on_settings_section",
            Self::TapOnOpenInNewTab => "tap_on_open_in_new_tab",
            Self::TapOnShareSheet => "tap_on_share_sheet",
        }
    }
}

/// Navigation request dispatched to the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationBrowserAction {
    /// Requested destination.
    pub destination: NavigationDestination,
    /// Window the request belongs to.
    pub window: WindowId,
    /// Control that produced the request.
    pub action_type: NavigationActionType,
}

impl NavigationBrowserAction {
    /// Request a settings screen.
    #[must_use]
    pub const fn open_settings(section: SettingsSection, window: WindowId) -> Self {
        Self {
            destination: NavigationDestination::Settings { section },
            window,
            action_type: NavigationActionType::TapOnSettingsSection,
        }
    }

    /// Request a new tab.
    #[must_use]
    pub const fn open_new_tab(
        url: Url,
        is_private: bool,
        select_new_tab: bool,
        window: WindowId,
    ) -> Self {
        Self {
            destination: NavigationDestination::NewTab {
                url,
                is_private,
                select_new_tab,
            },
            window,
            action_type: NavigationActionType::TapOnOpenInNewTab,
        }
    }

    /// Request the share sheet.
    #[must_use]
    pub const fn open_share_sheet(configuration: ShareSheetConfiguration, window: WindowId) -> Self {
        Self {
            destination: NavigationDestination::ShareSheet { configuration },
            window,
            action_type: NavigationActionType::TapOnShareSheet,
        }
    }
}

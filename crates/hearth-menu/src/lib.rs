#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Context menus for homepage items (top site tiles and Pocket recommendations).
//!
//! Layout: `site.rs` (site model and classification), `section.rs` (homepage
//! surfaces), `configuration.rs` (menu inputs and presentation handles),
//! `action.rs` (row actions), `factory.rs` (one builder per row),
//! `state.rs` (`ContextMenuState`), `navigation.rs` + `dispatch.rs` (actions
//! sent to the app store), `support.rs` (help topic URLs), `logging.rs`
//! (logger seam), `i18n` (menu strings), `icons.rs` (image identifiers).

pub mod action;
pub mod configuration;
pub mod coordinator;
pub mod dispatch;
pub mod environment;
pub mod error;
pub mod factory;
pub mod i18n;
pub mod icons;
pub mod logging;
pub mod navigation;
pub mod section;
pub mod site;
pub mod state;
pub mod support;

pub use action::{MenuActionKind, PendingWork, RowAction, TapHandler};
pub use configuration::{ContextMenuConfiguration, PresentationContext, ViewId, WindowId};
pub use coordinator::ContextMenuCoordinator;
pub use dispatch::{ChannelDispatcher, Dispatcher};
pub use environment::MenuEnvironment;
pub use error::{MenuError, MenuResult};
pub use factory::ActionFactory;
pub use i18n::{LocaleCode, TranslationBundle};
pub use icons::IconId;
pub use logging::{LogCategory, LogLevel, MenuLogger, TracingLogger};
pub use navigation::{
    ArrowDirections, NavigationActionType, NavigationBrowserAction, NavigationDestination,
    SettingsSection, ShareSheetConfiguration, ShareType,
};
pub use section::HomepageSection;
pub use site::{Site, SiteKind};
pub use state::ContextMenuState;
pub use support::{SupportTopic, SupportTopicResolver, SupportUrlResolver};

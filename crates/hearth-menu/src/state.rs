//! Menu state built once per presentation.
//!
//! # Design
//! - Construction decides the rows; nothing is dispatched until a row is tapped.
//! - Rows are grouped by menu section; homepage menus use a single group.
//! - The coordinator is an observer held weakly and may be gone at dismissal time.

use std::fmt;
use std::sync::{Arc, Weak};

use tracing::debug;

use crate::action::{MenuActionKind, RowAction};
use crate::configuration::{ContextMenuConfiguration, WindowId};
use crate::coordinator::ContextMenuCoordinator;
use crate::environment::MenuEnvironment;
use crate::factory::ActionFactory;
use crate::logging::LogCategory;
use crate::section::HomepageSection;
use crate::site::Site;

/// Rows shown for a long-pressed homepage item.
pub struct ContextMenuState {
    site: Option<Site>,
    actions: Vec<Vec<RowAction>>,
    window: WindowId,
    coordinator: Option<Weak<dyn ContextMenuCoordinator>>,
}

impl ContextMenuState {
    /// Build the rows for `configuration`.
    ///
    /// Items without a site, and sections without a context menu, produce a
    /// single empty group.
    #[must_use]
    pub fn new(
        configuration: &ContextMenuConfiguration,
        window: WindowId,
        env: MenuEnvironment,
    ) -> Self {
        let mut state = Self {
            site: configuration.site.clone(),
            actions: vec![Vec::new()],
            window,
            coordinator: None,
        };
        let Some(site) = &configuration.site else {
            return state;
        };

        let factory = ActionFactory::new(env, window, configuration.presentation);
        let rows = match configuration.homepage_section {
            HomepageSection::TopSites => factory.top_site_actions(site),
            HomepageSection::Pocket => factory.pocket_actions(site),
            section => {
                debug!(
                    category = LogCategory::Homepage.as_str(),
                    %section,
                    %window,
                    "section has no context menu"
                );
                return state;
            }
        };
        state.actions = vec![rows];
        state
    }

    /// Attach the presenter that handles dismissal.
    #[must_use]
    pub fn with_coordinator(mut self, coordinator: &Arc<dyn ContextMenuCoordinator>) -> Self {
        self.coordinator = Some(Arc::downgrade(coordinator));
        self
    }

    /// Site the menu was built for.
    #[must_use]
    pub const fn site(&self) -> Option<&Site> {
        self.site.as_ref()
    }

    /// Row groups in display order.
    #[must_use]
    pub fn actions(&self) -> &[Vec<RowAction>] {
        &self.actions
    }

    /// Window that owns the menu.
    #[must_use]
    pub const fn window(&self) -> WindowId {
        self.window
    }

    /// Row kinds of every group, flattened in display order.
    #[must_use]
    pub fn action_kinds(&self) -> Vec<MenuActionKind> {
        self.actions.iter().flatten().map(RowAction::kind).collect()
    }

    /// Whether no group holds a row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.iter().all(Vec::is_empty)
    }

    /// Ask the coordinator to close the menu. Returns `false` when no live
    /// coordinator is attached.
    pub fn dismiss(&self) -> bool {
        match self.coordinator.as_ref().and_then(Weak::upgrade) {
            Some(coordinator) => {
                coordinator.dismiss_flow();
                true
            }
            None => {
                debug!(
                    category = LogCategory::Homepage.as_str(),
                    window = %self.window,
                    "no coordinator to dismiss menu"
                );
                false
            }
        }
    }
}

impl fmt::Debug for ContextMenuState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ContextMenuState")
            .field("site", &self.site)
            .field("actions", &self.actions)
            .field("window", &self.window)
            .field("has_coordinator", &self.coordinator.is_some())
            .finish()
    }
}

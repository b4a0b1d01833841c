//! Menu construction and simulated taps.
//!
//! # Design
//! - Menus are wired to a channel dispatcher; taps run synchronously and the
//!   channel is drained afterwards to show what the store would receive.

use std::sync::Arc;

use hearth_config::HearthSettings;
use hearth_menu::{
    ChannelDispatcher, ContextMenuConfiguration, ContextMenuState, HomepageSection,
    MenuEnvironment, NavigationBrowserAction, PendingWork, RowAction, Site, SiteKind, WindowId,
};
use serde::Serialize;
use tracing::info;

use crate::error::{CliError, CliResult};

/// Inputs describing the long-pressed item.
#[derive(Debug, Clone)]
pub(crate) struct PreviewRequest {
    pub(crate) url: String,
    pub(crate) title: String,
    pub(crate) kind: SiteKind,
    pub(crate) bookmarked: Option<bool>,
    pub(crate) section: HomepageSection,
    pub(crate) taps: Vec<usize>,
}

/// Rendered row.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RowView {
    pub(crate) index: usize,
    pub(crate) kind: &'static str,
    pub(crate) title: String,
    pub(crate) icon: &'static str,
    pub(crate) allow_icon_scale: bool,
    pub(crate) pending: Option<&'static str>,
}

impl RowView {
    fn from_row(index: usize, row: &RowAction) -> Self {
        Self {
            index,
            kind: row.kind().as_str(),
            title: row.title().to_string(),
            icon: row.icon().name(),
            allow_icon_scale: row.allow_icon_scale(),
            pending: row.pending_work().map(PendingWork::as_str),
        }
    }
}

/// Everything the preview shows.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MenuView {
    pub(crate) site: Option<Site>,
    pub(crate) section: HomepageSection,
    pub(crate) rows: Vec<RowView>,
    pub(crate) dispatched: Vec<NavigationBrowserAction>,
}

/// Build the menu for `request`, tap the requested rows, and collect dispatches.
pub(crate) fn preview(request: &PreviewRequest, settings: &HearthSettings) -> CliResult<MenuView> {
    let locale = settings
        .locale_code()
        .map_err(|err| CliError::validation(err.to_string()))?;
    let resolver = settings
        .support_resolver()
        .map_err(|err| CliError::validation(err.to_string()))?;
    let (dispatcher, mut receiver) = ChannelDispatcher::channel();
    let env = MenuEnvironment::new(Arc::new(dispatcher), Arc::new(resolver)).with_locale(locale);

    let site = Site {
        url: request.url.clone(),
        title: request.title.clone(),
        bookmarked: request.bookmarked,
        kind: request.kind,
    };
    let configuration = ContextMenuConfiguration::new(Some(site), request.section);
    let state = ContextMenuState::new(&configuration, WindowId::new(), env);
    let rows: Vec<&RowAction> = state.actions().iter().flatten().collect();

    for &index in &request.taps {
        let row = rows.get(index).ok_or_else(|| {
            CliError::validation(format!(
                "cannot tap row {index}: menu has {} rows",
                rows.len()
            ))
        })?;
        info!(index, action = row.kind().as_str(), "tapping menu row");
        row.tap();
    }

    let mut dispatched = Vec::new();
    while let Ok(action) = receiver.try_recv() {
        dispatched.push(action);
    }

    Ok(MenuView {
        site: state.site().cloned(),
        section: request.section,
        rows: rows
            .iter()
            .enumerate()
            .map(|(index, row)| RowView::from_row(index, row))
            .collect(),
        dispatched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_menu::{NavigationDestination, ShareType};

    fn request(kind: SiteKind, section: HomepageSection, taps: Vec<usize>) -> PreviewRequest {
        PreviewRequest {
            url: "https://www.mozilla.org/".to_string(),
            title: "Mozilla".to_string(),
            kind,
            bookmarked: None,
            section,
            taps,
        }
    }

    #[test]
    fn preview_lists_rows_without_taps() -> Result<(), CliError> {
        let view = preview(
            &request(SiteKind::Pinned, HomepageSection::TopSites, Vec::new()),
            &HearthSettings::default(),
        )?;
        let kinds: Vec<_> = view.rows.iter().map(|row| row.kind).collect();
        assert_eq!(
            kinds,
            vec![
                "unpin",
                "open_in_new_tab",
                "open_in_new_private_tab",
                "remove",
                "share"
            ]
        );
        assert_eq!(view.rows[0].pending, Some("toggle_pin"));
        assert!(view.dispatched.is_empty());
        Ok(())
    }

    #[test]
    fn taps_are_collected_in_order() -> Result<(), CliError> {
        let view = preview(
            &request(SiteKind::Sponsored, HomepageSection::TopSites, vec![3, 4]),
            &HearthSettings::default(),
        )?;
        assert_eq!(view.dispatched.len(), 2);
        match &view.dispatched[0].destination {
            NavigationDestination::NewTab {
                url,
                is_private,
                select_new_tab,
            } => {
                assert!(url.as_str().ends_with("/sponsor-privacy"));
                assert!(!is_private);
                assert!(select_new_tab);
            }
            other => panic!("unexpected destination {other:?}"),
        }
        assert!(matches!(
            &view.dispatched[1].destination,
            NavigationDestination::ShareSheet { configuration }
                if matches!(configuration.share_type, ShareType::Site(_))
        ));
        Ok(())
    }

    #[test]
    fn out_of_range_tap_is_a_validation_error() {
        let result = preview(
            &request(SiteKind::Plain, HomepageSection::Pocket, vec![9]),
            &HearthSettings::default(),
        );
        assert!(matches!(result, Err(CliError::Validation(message)) if message.contains("row 9")));
    }

    #[test]
    fn localized_titles_follow_settings() -> Result<(), CliError> {
        let settings = HearthSettings {
            locale: "fr".to_string(),
            ..HearthSettings::default()
        };
        let view = preview(
            &request(SiteKind::Plain, HomepageSection::TopSites, Vec::new()),
            &settings,
        )?;
        assert_eq!(view.rows[0].title, "Épingler");
        Ok(())
    }
}

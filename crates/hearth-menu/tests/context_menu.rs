use hearth_menu::{
    ArrowDirections, HomepageSection, IconId, LogCategory, LogLevel, MenuActionKind,
    NavigationActionType, NavigationBrowserAction, NavigationDestination, PendingWork, ShareType,
    Site, SiteKind, SupportTopic,
};
use hearth_test_support::assert::{assert_action_kinds, assert_single_empty_group, row};
use hearth_test_support::fixtures::{
    INVALID_URL, MenuHarness, SAMPLE_HELP_URL, SAMPLE_URL, pinned_site, plain_site, pocket_story,
    presentation, sponsored_site,
};
use url::Url;

#[test]
fn missing_site_yields_single_empty_group_for_every_section() {
    let harness = MenuHarness::default();
    for section in HomepageSection::all() {
        let state = harness.menu(None, section);
        assert_single_empty_group(&state);
        assert!(state.site().is_none());
    }
    assert_eq!(harness.dispatcher.count(), 0);
    assert!(harness.resolver.requests().is_empty());
}

#[test]
fn pinned_top_site_rows() {
    let harness = MenuHarness::default();
    let state = harness.menu(Some(pinned_site()), HomepageSection::TopSites);
    assert_action_kinds(
        &state,
        &[
            MenuActionKind::Unpin,
            MenuActionKind::OpenInNewTab,
            MenuActionKind::OpenInNewPrivateTab,
            MenuActionKind::Remove,
            MenuActionKind::Share,
        ],
    );
    assert_eq!(state.site(), Some(&pinned_site()));
}

#[test]
fn sponsored_top_site_rows() {
    let harness = MenuHarness::default();
    let state = harness.menu(Some(sponsored_site()), HomepageSection::TopSites);
    assert_action_kinds(
        &state,
        &[
            MenuActionKind::OpenInNewTab,
            MenuActionKind::OpenInNewPrivateTab,
            MenuActionKind::Settings,
            MenuActionKind::SponsoredContentInfo,
            MenuActionKind::Share,
        ],
    );
}

#[test]
fn plain_top_site_rows() {
    let harness = MenuHarness::default();
    let state = harness.menu(Some(plain_site()), HomepageSection::TopSites);
    assert_action_kinds(
        &state,
        &[
            MenuActionKind::Pin,
            MenuActionKind::OpenInNewTab,
            MenuActionKind::OpenInNewPrivateTab,
            MenuActionKind::Remove,
            MenuActionKind::Share,
        ],
    );
}

#[test]
fn pocket_bookmark_row_follows_bookmark_state() {
    let harness = MenuHarness::default();
    let cases = [
        (Some(true), MenuActionKind::RemoveBookmark, IconId::BOOKMARK_SLASH),
        (Some(false), MenuActionKind::AddBookmark, IconId::BOOKMARK),
        (None, MenuActionKind::AddBookmark, IconId::BOOKMARK),
    ];

    for (bookmarked, bookmark_kind, icon) in cases {
        let state = harness.menu(Some(pocket_story(bookmarked)), HomepageSection::Pocket);
        assert_action_kinds(
            &state,
            &[
                MenuActionKind::OpenInNewTab,
                MenuActionKind::OpenInNewPrivateTab,
                bookmark_kind,
                MenuActionKind::Share,
            ],
        );
        let bookmark = row(&state, bookmark_kind);
        assert_eq!(bookmark.icon(), icon);
        assert_eq!(bookmark.pending_work(), Some(PendingWork::ToggleBookmark));
    }
}

#[test]
fn pocket_ignores_top_site_classification() {
    let harness = MenuHarness::default();
    let state = harness.menu(Some(pinned_site()), HomepageSection::Pocket);
    assert_eq!(state.action_kinds()[0], MenuActionKind::OpenInNewTab);
    assert_eq!(state.action_kinds().len(), 4);
}

#[test]
fn invalid_url_yields_empty_list_everywhere() {
    let harness = MenuHarness::default();
    for kind in [SiteKind::Pinned, SiteKind::Sponsored, SiteKind::Plain] {
        for section in [HomepageSection::TopSites, HomepageSection::Pocket] {
            let site = Site::new(INVALID_URL, "bad").with_kind(kind);
            let state = harness.menu(Some(site), section);
            assert_single_empty_group(&state);
            assert!(state.site().is_some());
        }
    }
    assert_eq!(harness.dispatcher.count(), 0);
    assert!(harness.logger.records().is_empty());
}

#[test]
fn construction_never_dispatches() {
    let harness = MenuHarness::with_help_url();
    let _ = harness.menu(Some(sponsored_site()), HomepageSection::TopSites);
    let _ = harness.menu(Some(pocket_story(Some(true))), HomepageSection::Pocket);
    assert_eq!(harness.dispatcher.count(), 0);
    assert!(harness.resolver.requests().is_empty());
}

#[test]
fn open_rows_dispatch_unselected_tabs() {
    let harness = MenuHarness::default();
    let state = harness.menu(Some(plain_site()), HomepageSection::TopSites);
    row(&state, MenuActionKind::OpenInNewTab).tap();
    row(&state, MenuActionKind::OpenInNewPrivateTab).tap();

    let url = Url::parse(SAMPLE_URL).expect("sample url parses");
    assert_eq!(
        harness.dispatcher.actions(),
        vec![
            NavigationBrowserAction::open_new_tab(url.clone(), false, false, harness.window),
            NavigationBrowserAction::open_new_tab(url, true, false, harness.window),
        ]
    );
}

#[test]
fn placeholder_rows_render_but_do_nothing() {
    let harness = MenuHarness::default();
    let pinned = harness.menu(Some(pinned_site()), HomepageSection::TopSites);
    let plain = harness.menu(Some(plain_site()), HomepageSection::TopSites);

    for (state, kind, work) in [
        (&pinned, MenuActionKind::Unpin, PendingWork::TogglePin),
        (&pinned, MenuActionKind::Remove, PendingWork::RemoveTile),
        (&plain, MenuActionKind::Pin, PendingWork::TogglePin),
        (&plain, MenuActionKind::Remove, PendingWork::RemoveTile),
    ] {
        let placeholder = row(state, kind);
        assert!(!placeholder.title().is_empty());
        assert_eq!(placeholder.pending_work(), Some(work));
        placeholder.tap();
    }

    assert_eq!(harness.dispatcher.count(), 0);
    assert!(harness.logger.warnings().is_empty());
}

#[test]
fn settings_row_opens_top_sites_settings() {
    let harness = MenuHarness::default();
    let state = harness.menu(Some(sponsored_site()), HomepageSection::TopSites);
    row(&state, MenuActionKind::Settings).tap();

    let actions = harness.dispatcher.actions();
    assert_eq!(actions.len(), 1);
    assert_eq!(
        actions[0].action_type,
        NavigationActionType::TapOnSettingsSection
    );
    assert_eq!(
        actions[0].destination,
        NavigationDestination::Settings {
            section: hearth_menu::SettingsSection::TopSites
        }
    );
}

#[test]
fn sponsored_info_opens_selected_tab_when_resolved() {
    let harness = MenuHarness::with_help_url();
    let state = harness.menu(Some(sponsored_site()), HomepageSection::TopSites);
    row(&state, MenuActionKind::SponsoredContentInfo).tap();

    let help = Url::parse(SAMPLE_HELP_URL).expect("help url parses");
    assert_eq!(
        harness.dispatcher.actions(),
        vec![NavigationBrowserAction::open_new_tab(
            help,
            false,
            true,
            harness.window
        )]
    );
    assert_eq!(
        harness.resolver.requests(),
        vec![SupportTopic::SponsoredContent]
    );
    assert!(harness.logger.warnings().is_empty());
}

#[test]
fn sponsored_info_logs_when_unresolved() {
    let harness = MenuHarness::default();
    let state = harness.menu(Some(sponsored_site()), HomepageSection::TopSites);
    row(&state, MenuActionKind::SponsoredContentInfo).tap();

    assert_eq!(harness.dispatcher.count(), 0);
    let warnings = harness.logger.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].category, LogCategory::Homepage);
    assert!(warnings[0].message.contains("sponsor-privacy"));
}

#[test]
fn share_dispatches_share_sheet() {
    let harness = MenuHarness::default();
    let state = harness.menu(Some(plain_site()), HomepageSection::TopSites);
    row(&state, MenuActionKind::Share).tap();

    let actions = harness.dispatcher.actions();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].action_type, NavigationActionType::TapOnShareSheet);
    assert_eq!(actions[0].window, harness.window);
    let NavigationDestination::ShareSheet { configuration } = &actions[0].destination else {
        panic!("expected share sheet, got {:?}", actions[0].destination);
    };
    let url = Url::parse(SAMPLE_URL).expect("sample url parses");
    assert_eq!(configuration.share_type, ShareType::Site(url));
    assert_eq!(configuration.share_message, None);
    assert_eq!(
        configuration.popover_arrow_directions,
        ArrowDirections::UP | ArrowDirections::DOWN | ArrowDirections::LEFT
    );
    assert_eq!(Some(configuration.source_view), presentation().source_view);
    assert_eq!(configuration.toast_container, presentation().toast_container);
}

#[test]
fn share_with_invalid_url_logs_once_and_skips_dispatch() {
    let harness = MenuHarness::default();
    let factory = hearth_menu::ActionFactory::new(harness.env(), harness.window, presentation());
    factory.share(&Site::new(INVALID_URL, "bad")).tap();

    assert_eq!(harness.dispatcher.count(), 0);
    let records = harness.logger.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, LogLevel::Warning);
    assert_eq!(records[0].category, LogCategory::Homepage);
    assert!(records[0].message.contains(INVALID_URL));
}

#[test]
fn rows_allow_icon_scaling() {
    let harness = MenuHarness::default();
    let state = harness.menu(Some(sponsored_site()), HomepageSection::TopSites);
    assert!(state.actions()[0].iter().all(|row| row.allow_icon_scale()));
}

#[test]
fn coordinator_is_held_weakly() {
    use hearth_menu::ContextMenuCoordinator;
    use hearth_test_support::mocks::RecordingCoordinator;
    use std::sync::Arc;

    let harness = MenuHarness::default();
    let coordinator = Arc::new(RecordingCoordinator::default());
    let handle: Arc<dyn ContextMenuCoordinator> = coordinator.clone();
    let state = harness
        .menu(Some(plain_site()), HomepageSection::TopSites)
        .with_coordinator(&handle);

    assert!(state.dismiss());
    assert_eq!(coordinator.dismissals(), 1);
    assert_eq!(Arc::strong_count(&coordinator), 2);

    drop(handle);
    drop(coordinator);
    assert!(!state.dismiss());
}

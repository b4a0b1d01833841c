//! Assertions over built menus.

use hearth_menu::{ContextMenuState, MenuActionKind, RowAction};

/// Assert the menu holds exactly one group with rows of `expected` kinds, in order.
///
/// # Panics
///
/// Panics when the group count or row kinds differ.
#[track_caller]
pub fn assert_action_kinds(state: &ContextMenuState, expected: &[MenuActionKind]) {
    assert_eq!(
        state.actions().len(),
        1,
        "expected a single action group, got {:?}",
        state.actions()
    );
    assert_eq!(state.action_kinds(), expected);
}

/// Assert the menu holds a single empty group.
///
/// # Panics
///
/// Panics when any row is present or the group count is not one.
#[track_caller]
pub fn assert_single_empty_group(state: &ContextMenuState) {
    assert_eq!(state.actions().len(), 1, "expected a single action group");
    assert!(state.is_empty(), "expected no rows, got {:?}", state.actions());
}

/// Find the row of `kind`.
///
/// # Panics
///
/// Panics when no row of that kind exists.
#[must_use]
#[track_caller]
pub fn row(state: &ContextMenuState, kind: MenuActionKind) -> &RowAction {
    state
        .actions()
        .iter()
        .flatten()
        .find(|row| row.kind() == kind)
        .unwrap_or_else(|| panic!("menu has no {kind:?} row: {:?}", state.action_kinds()))
}

//! Observer seam for whoever presented the menu.

/// Receives dismissal requests from a menu.
///
/// Menus hold this as a `Weak` reference; the presenter owns the coordinator.
pub trait ContextMenuCoordinator: Send + Sync {
    /// Close the menu flow.
    fn dismiss_flow(&self);
}

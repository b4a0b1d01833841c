//! Fire-and-forget command sink for navigation actions.
//!
//! # Design
//! - Menus never read store state; they only send actions through [`Dispatcher`].
//! - The channel-backed sink never blocks and never fails the caller: a closed
//!   receiver is logged and the action dropped.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::logging::LogCategory;
use crate::navigation::NavigationBrowserAction;

/// Receiver of navigation actions produced by menu taps.
pub trait Dispatcher: Send + Sync {
    /// Hand an action to the application store.
    fn dispatch(&self, action: NavigationBrowserAction);
}

/// Dispatcher that forwards actions over an unbounded tokio channel.
#[derive(Clone, Debug)]
pub struct ChannelDispatcher {
    sender: UnboundedSender<NavigationBrowserAction>,
}

impl ChannelDispatcher {
    /// Create a dispatcher and the receiving half the store drains.
    #[must_use]
    pub fn channel() -> (Self, UnboundedReceiver<NavigationBrowserAction>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Dispatcher for ChannelDispatcher {
    fn dispatch(&self, action: NavigationBrowserAction) {
        let action_type = action.action_type.as_str();
        let window = action.window;
        if self.sender.send(action).is_err() {
            warn!(
                category = LogCategory::Redux.as_str(),
                action_type,
                %window,
                "store receiver dropped; navigation action discarded"
            );
        } else {
            debug!(
                category = LogCategory::Redux.as_str(),
                action_type,
                %window,
                "navigation action dispatched"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::WindowId;
    use crate::navigation::SettingsSection;

    #[test]
    fn channel_dispatcher_delivers_actions() {
        let (dispatcher, mut receiver) = ChannelDispatcher::channel();
        let action = NavigationBrowserAction::open_settings(SettingsSection::TopSites, WindowId::new());
        dispatcher.dispatch(action.clone());

        assert_eq!(receiver.try_recv().ok(), Some(action));
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn closed_receiver_is_not_an_error() {
        let (dispatcher, receiver) = ChannelDispatcher::channel();
        drop(receiver);
        dispatcher.dispatch(NavigationBrowserAction::open_settings(
            SettingsSection::TopSites,
            WindowId::new(),
        ));
    }
}

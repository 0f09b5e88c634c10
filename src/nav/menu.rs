//! Open/closed state machine for the collapsible navigation panel.
//!
//! The panel only exists on narrow viewports. Selecting an item in it or
//! logging out from it closes it again; the always-visible logout button
//! on wide viewports leaves the state alone because there is no panel there.

use super::items::NavItem;

/// Capability to request navigation from the router.
pub trait Navigate {
    fn navigate(&mut self, target: &str);
}

impl<F: FnMut(&str)> Navigate for F {
    fn navigate(&mut self, target: &str) {
        self(target)
    }
}

/// Capability to end the current session. Fire-and-forget.
pub trait Logout {
    fn logout(&mut self);
}

impl<F: FnMut()> Logout for F {
    fn logout(&mut self) {
        self()
    }
}

/// Whether the collapsible panel is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Icon shown on the narrow-viewport toggle control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Hamburger, offered while the panel is closed
    Menu,
    /// X, offered while the panel is open
    Close,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn toggle_icon(self) -> ToggleIcon {
        match self {
            MenuState::Closed => ToggleIcon::Menu,
            MenuState::Open => ToggleIcon::Close,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::Closed => "closed",
            MenuState::Open => "open",
        }
    }
}

/// Where a logout request came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutOrigin {
    /// Button inside the collapsible panel
    Panel,
    /// Always-visible button on the wide-viewport bar
    Bar,
}

/// Owner of the panel's [`MenuState`]. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Flip between open and closed. Returns the new state.
    pub fn toggle(&mut self) -> MenuState {
        let next = self.state.toggled();
        tracing::debug!("nav menu {} -> {}", self.state.as_str(), next.as_str());
        self.state = next;
        next
    }

    /// Close the panel. No-op when already closed.
    pub fn close(&mut self) {
        if self.state.is_open() {
            tracing::debug!("nav menu open -> closed");
        }
        self.state = MenuState::Closed;
    }

    /// Handle activation of a panel entry: request navigation, then close.
    pub fn select_item(&mut self, item: &NavItem, router: &mut impl Navigate) {
        tracing::debug!("nav item selected: {}", item.target);
        router.navigate(item.target);
        self.close();
    }

    /// Invoke the logout capability. A panel logout also closes the panel
    /// after the capability has been called.
    pub fn logout(&mut self, origin: LogoutOrigin, auth: &mut impl Logout) {
        tracing::info!("logout requested from {:?}", origin);
        auth.logout();
        if origin == LogoutOrigin::Panel {
            self.close();
        }
    }
}

//! Menu panel state shared via context.
//!
//! Wraps the [`MenuController`] in a signal at the app root so the nav bar
//! and anything else in the layout see the same open/closed state.

use dioxus::prelude::*;

use crate::nav::{MenuController, MenuState};

/// Global menu state shared via context
#[derive(Clone, Copy)]
pub struct MenuContext {
    controller: Signal<MenuController>,
}

impl MenuContext {
    /// Current panel state (subscribes the caller)
    pub fn state(&self) -> MenuState {
        self.controller.read().state()
    }

    /// Run a controller operation. The signal is only written when the
    /// state actually changes, so subscribers don't re-render otherwise.
    pub fn update(&self, op: impl FnOnce(&mut MenuController)) {
        let current = *self.controller.peek();
        if let Some(next) = apply(current, op) {
            let mut controller = self.controller;
            controller.set(next);
        }
    }
}

fn apply(current: MenuController, op: impl FnOnce(&mut MenuController)) -> Option<MenuController> {
    let mut next = current;
    op(&mut next);
    (next != current).then_some(next)
}

/// Initialize menu context provider - call once at app root
pub fn use_menu_provider() -> MenuContext {
    use_menu_provider_with(MenuController::new)
}

/// Initialize menu context provider from a given controller
pub fn use_menu_provider_with(init: impl FnOnce() -> MenuController) -> MenuContext {
    let controller = use_signal(init);

    let ctx = MenuContext { controller };
    use_context_provider(|| ctx);
    ctx
}

/// Get menu context - use in any component
pub fn use_menu() -> MenuContext {
    use_context::<MenuContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{LogoutOrigin, NavItem};

    #[test]
    fn test_toggle_produces_a_write() {
        let next = apply(MenuController::new(), |m| {
            m.toggle();
        });
        assert_eq!(next.map(|m| m.state()), Some(MenuState::Open));
    }

    #[test]
    fn test_bar_logout_skips_write_but_still_logs_out() {
        let mut open = MenuController::new();
        open.toggle();

        let mut logouts = 0;
        let next = apply(open, |m| m.logout(LogoutOrigin::Bar, &mut || logouts += 1));

        assert_eq!(logouts, 1);
        assert_eq!(next, None);
    }

    #[test]
    fn test_select_item_while_open_writes_closed() {
        let mut open = MenuController::new();
        open.toggle();
        let item = NavItem {
            target: "/dashboard",
            label: "الرئيسية",
        };

        let mut visited = Vec::new();
        let next = apply(open, |m| {
            m.select_item(&item, &mut |t: &str| visited.push(t.to_string()))
        });

        assert_eq!(visited, vec!["/dashboard".to_string()]);
        assert_eq!(next.map(|m| m.state()), Some(MenuState::Closed));
    }
}

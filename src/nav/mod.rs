//! Navigation core for the employee-management UI.
//!
//! Two independent pieces:
//! - [`items`] resolves the ordered list of navigation entries for a user
//! - [`menu`] drives the collapsible panel used on narrow viewports
//!
//! Nothing in here depends on the rendering layer; the Dioxus `NavBar`
//! component wires these into the page.

pub mod items;
pub mod menu;

pub use items::{resolve_nav_items, NavItem, ADMIN_ROLE};
pub use menu::{Logout, LogoutOrigin, MenuController, MenuState, Navigate, ToggleIcon};

//! Shared UI components for the Dioxus fullstack web UI.

pub mod layout;
pub mod nav;

pub use layout::AppLayout;
pub use nav::NavBar;

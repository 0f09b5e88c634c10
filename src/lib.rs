//! Employee Management - Navigation Bar
//!
//! Role-aware top navigation for the employee management web UI.
//!
//! This library provides:
//! - Role-based navigation item resolution (admin vs. employee menus)
//! - The open/closed state machine for the narrow-viewport menu panel
//! - Auth context exposing the signed-in user and logout
//! - Dioxus components and routes that render the bar

pub mod app;
pub mod auth;
#[cfg(feature = "server")]
pub mod config;
pub mod nav;

//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component and the route table. Every
//! destination the navigation bar can resolve has a route here.

use dioxus::prelude::*;

pub mod components;
pub mod menu_context;
pub mod pages;

use crate::auth::use_auth_provider;
use components::AppLayout;
use menu_context::use_menu_provider;
use pages::{CreateUser, Dashboard, EditUser, SalaryReport, UploadAttendance};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Auth context at app root (nav bar and login flow share it)
    use_auth_provider();

    // Menu panel state at app root (starts closed)
    use_menu_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[redirect("/", || Route::SalaryReport {})]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/create-user")]
        CreateUser {},
        #[route("/edit-user")]
        EditUser {},
        #[route("/upload-attendance")]
        UploadAttendance {},
        #[route("/salary-report")]
        SalaryReport {},
}

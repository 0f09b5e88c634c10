//! Navigation bar component.
//!
//! Renders the role-dependent items from [`resolve_nav_items`] twice: as an
//! always-visible row on wide viewports and inside a collapsible panel on
//! narrow ones. The panel's open/closed state comes from the menu context.

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::menu_context::use_menu;
use crate::app::Route;
use crate::auth::use_auth;
use crate::nav::{resolve_nav_items, LogoutOrigin, Navigate, ToggleIcon};

const BRAND_TITLE: &str = "إدارة الموظفين";
const LOGOUT_LABEL: &str = "تسجيل الخروج";

/// Router-backed navigation capability for panel items.
struct RouterNavigate(Navigator);

impl Navigate for RouterNavigate {
    fn navigate(&mut self, target: &str) {
        match target.parse::<Route>() {
            Ok(route) => {
                if let Some(failure) = self.0.push(route) {
                    tracing::warn!("Navigation to {} failed: {:?}", target, failure);
                }
            }
            Err(e) => tracing::warn!("No route for nav target {}: {}", target, e),
        }
    }
}

/// Top navigation bar with mobile toggle.
#[component]
pub fn NavBar() -> Element {
    let auth = use_auth();
    let menu = use_menu();

    let items = resolve_nav_items(auth.user().as_ref());
    let state = menu.state();

    rsx! {
        nav { class: "bg-gradient-to-r from-purple-600 to-blue-500 p-4 shadow-xl",
            div { class: "container mx-auto flex justify-between items-center font-cairo",
                div { class: "text-white text-xl font-bold", "{BRAND_TITLE}" }

                // Wide viewports: items and logout always visible
                div { class: "hidden md:flex gap-6 items-center",
                    for item in items.iter().copied() {
                        Link {
                            key: "{item.target}",
                            class: "text-white font-semibold text-sm hover:bg-purple-700 px-3 py-2 rounded-md",
                            to: item.target,
                            "{item.label}"
                        }
                    }
                    button {
                        class: "flex items-center gap-2 bg-white text-purple-600 px-4 py-2 rounded-md hover:bg-purple-100 text-sm font-semibold shadow-md",
                        r#type: "button",
                        onclick: move |_| {
                            let mut auth = auth;
                            menu.update(|m| m.logout(LogoutOrigin::Bar, &mut auth));
                        },
                        LogoutIcon {}
                        "{LOGOUT_LABEL}"
                    }
                }

                // Narrow viewports: panel toggle
                button {
                    class: "md:hidden text-white focus:outline-none",
                    r#type: "button",
                    "aria-expanded": state.is_open(),
                    "aria-controls": "nav-panel",
                    onclick: move |_| {
                        menu.update(|m| {
                            m.toggle();
                        });
                    },
                    span { class: "sr-only", "Toggle menu" }
                    {match state.toggle_icon() {
                        ToggleIcon::Close => rsx! {
                            svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M6 18L18 6M6 6l12 12" }
                            }
                        },
                        ToggleIcon::Menu => rsx! {
                            svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M4 6h16M4 12h16M4 18h16" }
                            }
                        },
                    }}
                }
            }

            if state.is_open() {
                div {
                    id: "nav-panel",
                    class: "md:hidden bg-purple-100 shadow-lg mt-2 rounded-lg overflow-hidden border border-purple-200",
                    for item in items.iter().copied() {
                        div { key: "{item.target}", class: "px-4 py-2",
                            // Real anchor for href semantics; the click itself goes
                            // through select_item so navigation and close stay paired
                            Link {
                                class: "block text-purple-600 font-semibold text-sm hover:bg-purple-200 px-3 py-2 rounded-md",
                                to: item.target,
                                onclick_only: true,
                                onclick: move |_| {
                                    let mut router = RouterNavigate(navigator());
                                    menu.update(|m| m.select_item(&item, &mut router));
                                },
                                "{item.label}"
                            }
                        }
                    }
                    div { class: "px-4 py-2",
                        button {
                            class: "w-full flex items-center gap-2 bg-purple-600 text-white px-4 py-2 rounded-md hover:bg-purple-700 text-sm font-semibold shadow-md",
                            r#type: "button",
                            onclick: move |_| {
                                let mut auth = auth;
                                menu.update(|m| m.logout(LogoutOrigin::Panel, &mut auth));
                            },
                            LogoutIcon {}
                            "{LOGOUT_LABEL}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LogoutIcon() -> Element {
    rsx! {
        svg { class: "h-4 w-4", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
            path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4M16 17l5-5-5-5M21 12H9" }
        }
    }
}

//! Layout component wrapping all pages with the navigation bar.

use dioxus::prelude::*;

use super::nav::NavBar;
use crate::app::Route;

/// Main layout component wrapping all routed pages.
#[component]
pub fn AppLayout() -> Element {
    let version = env!("EMS_VERSION");
    let git_sha = env!("EMS_GIT_SHA");

    rsx! {
        document::Title { "إدارة الموظفين" }

        NavBar {}
        main { class: "container mx-auto px-4 mt-4 font-cairo",
            Outlet::<Route> {}
        }
        footer { class: "container mx-auto px-4 text-center py-3",
            small { class: "text-muted", "v{version} ({git_sha})" }
        }
    }
}

//! Routed pages.
//!
//! Page bodies are provided by the feature teams; these components only
//! give each route a titled frame inside the shared layout.

use dioxus::prelude::*;

#[component]
fn PageFrame(title: String) -> Element {
    rsx! {
        section { class: "py-6",
            h1 { class: "text-2xl font-bold text-purple-700", "{title}" }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { PageFrame { title: "الرئيسية".to_string() } }
}

#[component]
pub fn CreateUser() -> Element {
    rsx! { PageFrame { title: "إنشاء حساب جديد".to_string() } }
}

#[component]
pub fn EditUser() -> Element {
    rsx! { PageFrame { title: "تعديل حساب".to_string() } }
}

#[component]
pub fn UploadAttendance() -> Element {
    rsx! { PageFrame { title: "رفع البصمات".to_string() } }
}

#[component]
pub fn SalaryReport() -> Element {
    rsx! { PageFrame { title: "تقرير الراتب".to_string() } }
}

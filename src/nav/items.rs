//! Role-based navigation items.

use crate::auth::User;

/// The only role that unlocks the full menu. Compared exactly.
pub const ADMIN_ROLE: &str = "admin";

/// A single navigable destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Route path, unique within a resolved list (used as render key)
    pub target: &'static str,
    /// Display text (Arabic)
    pub label: &'static str,
}

impl NavItem {
    const fn new(target: &'static str, label: &'static str) -> Self {
        Self { target, label }
    }
}

const DASHBOARD: NavItem = NavItem::new("/dashboard", "الرئيسية");
const CREATE_USER: NavItem = NavItem::new("/create-user", "إنشاء حساب جديد");
const EDIT_USER: NavItem = NavItem::new("/edit-user", "تعديل حساب");
const UPLOAD_ATTENDANCE: NavItem = NavItem::new("/upload-attendance", "رفع البصمات");
const SALARY_REPORT: NavItem = NavItem::new("/salary-report", "تقرير الراتب");

const ADMIN_ITEMS: [NavItem; 5] = [
    DASHBOARD,
    CREATE_USER,
    EDIT_USER,
    UPLOAD_ATTENDANCE,
    SALARY_REPORT,
];

const EMPLOYEE_ITEMS: [NavItem; 1] = [SALARY_REPORT];

/// Resolve the ordered navigation items for the current user.
///
/// Only a present user whose role is exactly [`ADMIN_ROLE`] gets the admin
/// menu. Everyone else, including signed-out visitors and users with a
/// missing or unrecognised role, gets the salary report alone.
pub fn resolve_nav_items(user: Option<&User>) -> Vec<NavItem> {
    match user {
        Some(user) if user.is_admin() => ADMIN_ITEMS.to_vec(),
        _ => EMPLOYEE_ITEMS.to_vec(),
    }
}

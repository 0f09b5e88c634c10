//! End-to-end navigation bar scenarios, driven through the public API
//! without a rendering engine.

use employee_nav::auth::{decode_session, User};
use employee_nav::nav::{
    resolve_nav_items, LogoutOrigin, MenuController, MenuState, Navigate,
};

/// Router double that records every navigation request.
#[derive(Default)]
struct RecordingRouter {
    visited: Vec<String>,
}

impl Navigate for RecordingRouter {
    fn navigate(&mut self, target: &str) {
        self.visited.push(target.to_string());
    }
}

fn admin() -> User {
    User {
        username: Some("admin1".to_string()),
        role: Some("admin".to_string()),
    }
}

#[test]
fn admin_opens_panel_and_selects_edit_user() {
    let user = admin();
    let mut menu = MenuController::new();
    let mut router = RecordingRouter::default();

    assert_eq!(menu.toggle(), MenuState::Open);

    let items = resolve_nav_items(Some(&user));
    let targets: Vec<_> = items.iter().map(|i| i.target).collect();
    assert_eq!(
        targets,
        [
            "/dashboard",
            "/create-user",
            "/edit-user",
            "/upload-attendance",
            "/salary-report"
        ]
    );

    let edit = items
        .iter()
        .find(|i| i.target == "/edit-user")
        .expect("admin menu has edit-user");
    assert_eq!(edit.label, "تعديل حساب");

    menu.select_item(edit, &mut router);

    assert_eq!(router.visited, vec!["/edit-user".to_string()]);
    assert_eq!(menu.state(), MenuState::Closed);
}

#[test]
fn employee_menu_is_stable_across_calls() {
    let employee = User {
        username: Some("emp".to_string()),
        role: Some("employee".to_string()),
    };
    for _ in 0..5 {
        assert_eq!(resolve_nav_items(Some(&employee)).len(), 1);
        assert_eq!(resolve_nav_items(None).len(), 1);
    }
}

#[test]
fn stored_session_without_role_gets_employee_menu() {
    let user = decode_session(r#"{"username":"noor"}"#).unwrap();
    let items = resolve_nav_items(Some(&user));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].target, "/salary-report");
}

#[test]
fn panel_logout_signs_out_once_and_closes() {
    let mut menu = MenuController::new();
    menu.toggle();

    let mut session = Some(admin());
    let mut logouts = 0;
    menu.logout(LogoutOrigin::Panel, &mut || {
        logouts += 1;
        session = None;
    });

    assert_eq!(logouts, 1);
    assert!(session.is_none());
    assert_eq!(menu.state(), MenuState::Closed);
    // Signed out: back to the least-privileged menu
    assert_eq!(resolve_nav_items(session.as_ref()).len(), 1);
}

#[test]
fn bar_logout_does_not_touch_open_panel() {
    let mut menu = MenuController::new();
    menu.toggle();

    let mut logouts = 0;
    menu.logout(LogoutOrigin::Bar, &mut || logouts += 1);

    assert_eq!(logouts, 1);
    assert_eq!(menu.state(), MenuState::Open);
}

#[test]
fn menu_state_does_not_change_resolved_items() {
    let user = admin();
    let mut menu = MenuController::new();

    let closed = resolve_nav_items(Some(&user));
    menu.toggle();
    let open = resolve_nav_items(Some(&user));

    assert_eq!(closed, open);
}

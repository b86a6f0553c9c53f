use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{AuthState, View, ViewRouter};

#[test]
fn test_guest_starts_on_home() {
    let controller = common::controller();
    assert_eq!(controller.view(), &View::Home);
    assert!(!controller.auth().is_authenticated);
}

#[test]
fn test_guest_can_reach_public_screens() {
    let mut controller = common::controller();
    for label in ["login-selection", "admin-login", "home"] {
        controller.navigate_label(label);
        assert_eq!(controller.view().label(), label);
    }
}

#[test]
fn test_unknown_label_mounts_not_found() {
    let mut controller = common::controller();
    controller.navigate_label("settings");
    assert_eq!(controller.view(), &View::NotFound("settings".to_string()));
    assert_eq!(controller.view().label(), "settings");
}

#[test]
fn test_guest_is_refused_dashboards() {
    let mut controller = common::controller();
    controller.navigate(View::LoginSelection);
    controller.navigate(View::AdminDashboard);
    assert_eq!(controller.view(), &View::LoginSelection);
    controller.navigate(View::UserDashboard);
    assert_eq!(controller.view(), &View::LoginSelection);
}

#[test]
fn test_student_cannot_open_staff_dashboard() {
    let mut controller = common::controller();
    common::sign_in_student(&mut controller, "s@uni.edu");
    controller.navigate(View::AdminDashboard);
    assert_eq!(controller.view(), &View::UserDashboard);
}

#[test]
fn test_staff_cannot_open_student_dashboard() {
    let mut controller = common::controller();
    common::sign_in_staff(&mut controller);
    controller.navigate(View::UserDashboard);
    assert_eq!(controller.view(), &View::AdminDashboard);
}

#[test]
fn test_auth_change_overrides_manual_navigation() {
    let mut router = ViewRouter::new();
    let guest = AuthState::guest();
    router.navigate(View::AdminLogin, &guest).unwrap();
    assert_eq!(router.on_auth_changed(&guest), &View::AdminLogin);

    router.navigate_label("nowhere", &guest).unwrap();
    assert_eq!(router.on_auth_changed(&guest), &View::Home);

    let staff = AuthState::admin(common::ADMIN_EMAIL);
    assert_eq!(router.on_auth_changed(&staff), &View::AdminDashboard);
    router.navigate(View::Home, &staff).unwrap();
    assert_eq!(router.on_auth_changed(&staff), &View::AdminDashboard);
}

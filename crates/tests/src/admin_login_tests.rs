use crate::common;
use pretty_assertions::assert_eq;
use services::INVALID_ADMIN_CREDENTIALS;
use shared_types::{AuthState, UserRole, View};

#[test]
fn test_valid_credentials_open_staff_dashboard() {
    let mut controller = common::controller();
    controller.navigate(View::AdminLogin);
    assert!(controller.submit_admin_login(common::ADMIN_EMAIL, common::ADMIN_PASSWORD));

    assert_eq!(controller.view(), &View::AdminDashboard);
    let auth = controller.auth();
    assert_eq!(auth.role, UserRole::Admin);
    assert_eq!(auth.email.as_deref(), Some(common::ADMIN_EMAIL));
    assert!(auth.is_authenticated);
    assert_eq!(controller.error(), None);
}

#[test]
fn test_email_is_matched_case_insensitively() {
    let mut controller = common::controller();
    assert!(controller.submit_admin_login("  ADMIN@NoteVault.in ", common::ADMIN_PASSWORD));
    assert!(controller.auth().is_admin());
}

#[test]
fn test_wrong_password_keeps_guest_on_form() {
    let mut controller = common::controller();
    controller.navigate(View::AdminLogin);
    assert!(!controller.submit_admin_login(common::ADMIN_EMAIL, "Correct Horse"));
    assert_eq!(controller.view(), &View::AdminLogin);
    assert_eq!(controller.auth(), &AuthState::guest());
    assert_eq!(controller.error(), Some(INVALID_ADMIN_CREDENTIALS));
}

#[test]
fn test_unknown_email_is_rejected() {
    let mut controller = common::controller();
    assert!(!controller.submit_admin_login("someone@else.in", common::ADMIN_PASSWORD));
    assert_eq!(controller.error(), Some(INVALID_ADMIN_CREDENTIALS));
}

#[test]
fn test_staff_session_is_never_paid() {
    let mut controller = common::controller();
    common::sign_in_staff(&mut controller);
    assert!(!controller.auth().is_paid);
    assert!(controller.checkout().is_none());
    assert!(!controller.auth().is_paid);
}

use crate::common;
use pretty_assertions::assert_eq;
use services::store::{SESSION_KEY, USERS_KEY};
use services::SessionStore;
use shared_types::{AuthState, View};

#[test]
fn test_student_logout_returns_home_as_guest() {
    let mut controller = common::controller();
    common::sign_in_student(&mut controller, "s@uni.edu");
    controller.checkout();
    assert!(controller.auth().is_paid);

    controller.logout();
    assert_eq!(controller.auth(), &AuthState::guest());
    assert!(!controller.auth().is_paid);
    assert_eq!(controller.view(), &View::Home);
}

#[test]
fn test_staff_logout_returns_home_as_guest() {
    let mut controller = common::controller();
    common::sign_in_staff(&mut controller);
    controller.logout();
    assert_eq!(controller.auth(), &AuthState::guest());
    assert_eq!(controller.view(), &View::Home);
}

#[test]
fn test_logout_forgets_session_but_not_ledger() {
    let store = common::fresh_store();
    let mut controller = common::controller_on(store.clone());
    common::sign_in_student(&mut controller, "s@uni.edu");
    controller.logout();

    assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    assert!(store.get(USERS_KEY).unwrap().is_some());
    let reloaded = common::controller_on(store);
    assert_eq!(reloaded.auth(), &AuthState::guest());
}

#[test]
fn test_logout_as_guest_is_harmless() {
    let mut controller = common::controller();
    controller.provider_failed("blocked");
    controller.logout();
    assert_eq!(controller.auth(), &AuthState::guest());
    assert_eq!(controller.error(), None);
}

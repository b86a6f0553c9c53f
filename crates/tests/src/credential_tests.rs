use crate::common;
use pretty_assertions::assert_eq;
use serde_json::json;
use services::store::{SESSION_KEY, USERS_KEY};
use services::{SessionStore, GOOGLE_AUTH_FAILED};
use shared_types::{AuthState, UserRole, View};

#[test]
fn test_credential_lands_student_on_dashboard() {
    let mut controller = common::controller();
    controller.navigate(View::LoginSelection);
    controller.begin_sign_in();
    assert!(controller.is_signing_in());

    controller.handle_credential(&common::student_token("s@uni.edu", "Sam Lee"));

    assert!(!controller.is_signing_in());
    assert_eq!(controller.view(), &View::UserDashboard);
    let auth = controller.auth();
    assert_eq!(auth.role, UserRole::User);
    assert_eq!(auth.email.as_deref(), Some("s@uni.edu"));
    assert_eq!(auth.display_name.as_deref(), Some("Sam Lee"));
    assert!(auth.profile_picture.is_some());
    assert!(!auth.is_paid);
}

#[test]
fn test_credential_without_email_changes_nothing() {
    let mut controller = common::controller();
    controller.begin_sign_in();
    controller.handle_credential(&common::token_for(&json!({"name": "No Mail"})));
    assert!(!controller.is_signing_in());
    assert_eq!(controller.auth(), &AuthState::guest());
    assert_eq!(controller.view(), &View::Home);
    assert_eq!(controller.error(), None);
}

#[test]
fn test_garbage_credential_changes_nothing() {
    let mut controller = common::controller();
    controller.begin_sign_in();
    controller.handle_credential("definitely-not-a-token");
    assert!(!controller.is_signing_in());
    assert_eq!(controller.auth(), &AuthState::guest());
    assert_eq!(controller.error(), None);
}

#[test]
fn test_provider_failure_shows_message() {
    let mut controller = common::controller();
    controller.begin_sign_in();
    controller.provider_failed("popup closed");
    assert!(!controller.is_signing_in());
    assert_eq!(controller.error(), Some(GOOGLE_AUTH_FAILED));
    assert_eq!(controller.view(), &View::Home);
}

#[test]
fn test_successful_sign_in_clears_previous_error() {
    let mut controller = common::controller();
    controller.provider_failed("network");
    common::sign_in_student(&mut controller, "s@uni.edu");
    assert_eq!(controller.error(), None);
}

#[test]
fn test_returning_student_is_one_ledger_entry() {
    let store = common::fresh_store();
    let mut controller = common::controller_on(store.clone());
    common::sign_in_student(&mut controller, "s@uni.edu");
    controller.logout();
    common::sign_in_student(&mut controller, "S@UNI.EDU");
    controller.logout();
    common::sign_in_student(&mut controller, "other@uni.edu");
    controller.logout();

    common::sign_in_staff(&mut controller);
    let emails: Vec<String> = controller
        .known_users()
        .into_iter()
        .map(|u| u.email.to_lowercase())
        .collect();
    assert_eq!(emails.len(), 2);
    assert!(emails.contains(&"s@uni.edu".to_string()));
    assert!(emails.contains(&"other@uni.edu".to_string()));
}

#[test]
fn test_session_write_failure_reports_google_error() {
    let store = common::RefusingStore::refusing(SESSION_KEY);
    let mut controller = common::controller_on_refusing(store.clone());
    controller.navigate(View::LoginSelection);
    controller.begin_sign_in();

    controller.handle_credential(&common::student_token("s@uni.edu", "Sam Lee"));

    assert_eq!(controller.error(), Some(GOOGLE_AUTH_FAILED));
    assert_eq!(controller.error(), Some("Google authentication failed."));
    assert!(!controller.is_signing_in());
    assert_eq!(controller.auth(), &AuthState::guest());
    assert_eq!(controller.view(), &View::LoginSelection);
    assert_eq!(store.get(SESSION_KEY).unwrap(), None);

    // The ledger reached the store, so the staff panel lists the student
    // now and after a reload.
    assert!(store.get(USERS_KEY).unwrap().is_some());
    common::sign_in_staff(&mut controller);
    let listed: Vec<String> = controller.known_users().into_iter().map(|u| u.email).collect();
    assert_eq!(listed, vec!["s@uni.edu".to_string()]);

    let mut reloaded = common::controller_on_refusing(store);
    common::sign_in_staff(&mut reloaded);
    assert_eq!(reloaded.known_users().len(), 1);
}

#[test]
fn test_ledger_write_failure_leaves_no_trace() {
    let store = common::RefusingStore::refusing(USERS_KEY);
    let mut controller = common::controller_on_refusing(store.clone());
    controller.begin_sign_in();

    controller.handle_credential(&common::student_token("s@uni.edu", "Sam Lee"));

    assert_eq!(controller.error(), Some(GOOGLE_AUTH_FAILED));
    assert!(!controller.is_signing_in());
    assert_eq!(controller.auth(), &AuthState::guest());
    assert_eq!(controller.view(), &View::Home);
    assert_eq!(store.get(USERS_KEY).unwrap(), None);
    assert_eq!(store.get(SESSION_KEY).unwrap(), None);

    common::sign_in_staff(&mut controller);
    assert!(controller.known_users().is_empty());
}

use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{PaymentStatus, View};

#[test]
fn test_checkout_unlocks_current_student() {
    let mut controller = common::controller();
    common::sign_in_student(&mut controller, "s@uni.edu");
    assert_eq!(controller.checkout_price(), "INR 499.00");

    let record = controller.checkout().unwrap();
    assert_eq!(record.status, PaymentStatus::Success);
    assert_eq!(record.user_id, "s@uni.edu");
    assert_eq!(record.amount, 49_900);
    assert!(controller.auth().is_paid);
    assert_eq!(controller.view(), &View::UserDashboard);
}

#[test]
fn test_checkout_requires_student_session() {
    let mut controller = common::controller();
    assert!(controller.checkout().is_none());
    assert!(!controller.auth().is_paid);
}

#[test]
fn test_paid_flag_survives_sign_out_and_back_in() {
    let store = common::fresh_store();
    let mut controller = common::controller_on(store.clone());
    common::sign_in_student(&mut controller, "s@uni.edu");
    controller.checkout();
    controller.logout();

    let mut fresh = common::controller_on(store);
    common::sign_in_student(&mut fresh, "s@uni.edu");
    assert!(fresh.auth().is_paid);

    fresh.logout();
    common::sign_in_student(&mut fresh, "new@uni.edu");
    assert!(!fresh.auth().is_paid);
}

#[test]
fn test_ledger_shows_paid_students_to_staff() {
    let mut controller = common::controller();
    common::sign_in_student(&mut controller, "paid@uni.edu");
    controller.checkout();
    controller.logout();
    common::sign_in_student(&mut controller, "free@uni.edu");
    controller.logout();

    common::sign_in_staff(&mut controller);
    let users = controller.known_users();
    let paid: Vec<&str> = users
        .iter()
        .filter(|u| u.is_paid)
        .map(|u| u.email.as_str())
        .collect();
    assert_eq!(paid, vec!["paid@uni.edu"]);
}

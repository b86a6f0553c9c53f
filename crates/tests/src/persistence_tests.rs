use crate::common;
use pretty_assertions::assert_eq;
use services::store::SESSION_KEY;
use services::{FileSessionStore, SessionStore, VaultController};
use shared_types::{UserRole, View};
use std::path::{Path, PathBuf};
use std::rc::Rc;

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("notevault-test-{}", uuid::Uuid::new_v4()))
}

fn controller_in(dir: &Path) -> VaultController {
    let store: Rc<dyn SessionStore> = Rc::new(FileSessionStore::open(dir, "notevault").unwrap());
    VaultController::from_config(store, &common::test_config())
}

#[test]
fn test_student_session_restores_from_disk() {
    let dir = scratch_dir();
    let mut first = controller_in(&dir);
    common::sign_in_student(&mut first, "s@uni.edu");
    first.checkout();

    let second = controller_in(&dir);
    assert_eq!(second.view(), &View::UserDashboard);
    assert_eq!(second.auth().role, UserRole::User);
    assert!(second.auth().is_paid);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_staff_session_restores_from_disk() {
    let dir = scratch_dir();
    let mut first = controller_in(&dir);
    common::sign_in_staff(&mut first);
    first.add_subject("Physics").unwrap();

    let second = controller_in(&dir);
    assert_eq!(second.view(), &View::AdminDashboard);
    assert_eq!(second.catalog().subjects()[0].name, "Physics");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_corrupt_session_file_starts_as_guest() {
    let dir = scratch_dir();
    let store = FileSessionStore::open(&dir, "notevault").unwrap();
    store.set(SESSION_KEY, "{not json").unwrap();

    let controller = controller_in(&dir);
    assert!(!controller.auth().is_authenticated);
    assert_eq!(controller.view(), &View::Home);

    std::fs::remove_dir_all(&dir).ok();
}

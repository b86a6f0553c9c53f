use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, NewNote, NoteFileType};

fn lecture(subject_id: &str, title: &str) -> NewNote {
    NewNote {
        subject_id: subject_id.to_string(),
        title: title.to_string(),
        file_name: format!("{}.pdf", title.to_lowercase()),
        content_url: Some(format!("https://cdn.example/{}.pdf", title.to_lowercase())),
        file_data: None,
    }
}

#[test]
fn test_staff_files_notes_students_see_them() {
    let store = common::fresh_store();
    let mut controller = common::controller_on(store.clone());
    common::sign_in_staff(&mut controller);
    let physics = controller.add_subject("Physics").unwrap();
    let note = controller.add_note(lecture(&physics.id, "Optics")).unwrap();
    assert_eq!(note.file_type, NoteFileType::Pdf);
    controller.logout();

    let mut student = common::controller_on(store);
    common::sign_in_student(&mut student, "s@uni.edu");
    let subjects = student.catalog().subjects();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].note_count, 1);
    assert_eq!(student.catalog().notes_for(&physics.id)[0].title, "Optics");
}

#[test]
fn test_downloads_need_payment() {
    let mut controller = common::controller();
    common::sign_in_staff(&mut controller);
    let subject = controller.add_subject("Maths").unwrap();
    let note = controller.add_note(lecture(&subject.id, "Limits")).unwrap();
    assert!(controller.download_href(&note.id).is_some());
    controller.logout();

    assert_eq!(controller.download_href(&note.id), None);
    common::sign_in_student(&mut controller, "s@uni.edu");
    assert_eq!(controller.download_href(&note.id), None);
    controller.checkout();
    assert_eq!(
        controller.download_href(&note.id).as_deref(),
        Some("https://cdn.example/limits.pdf")
    );
}

#[test]
fn test_students_cannot_edit_catalog() {
    let mut controller = common::controller();
    common::sign_in_student(&mut controller, "s@uni.edu");
    controller.checkout();

    let err = controller.add_subject("Sneaky").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(
        controller.remove_subject("anything").unwrap_err().kind,
        AppErrorKind::Unauthorized
    );
    assert_eq!(
        controller.add_note(lecture("x", "Nope")).unwrap_err().kind,
        AppErrorKind::Unauthorized
    );
    assert!(controller.catalog().subjects().is_empty());
}

#[test]
fn test_deleting_subject_drops_its_notes() {
    let mut controller = common::controller();
    common::sign_in_staff(&mut controller);
    let keep = controller.add_subject("Keep").unwrap();
    let drop = controller.add_subject("Drop").unwrap();
    controller.add_note(lecture(&keep.id, "One")).unwrap();
    let doomed = controller.add_note(lecture(&drop.id, "Two")).unwrap();

    controller.remove_subject(&drop.id).unwrap();
    assert_eq!(controller.catalog().total_notes(), 1);
    assert!(controller.catalog().note(&doomed.id).is_none());
    assert_eq!(
        controller.remove_note(&doomed.id).unwrap_err().kind,
        AppErrorKind::NotFound
    );
}

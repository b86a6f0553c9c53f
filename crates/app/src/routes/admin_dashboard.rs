use crate::auth::use_vault;
use crate::format_helpers::{format_date_human, format_datetime_human, pluralize};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{AppError, NewNote, Note, Subject, UserRecord};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, FormField, Input,
};
use std::collections::HashMap;

/// Staff workspace: subjects, the notes filed under them, and the student ledger.
#[component]
pub fn AdminDashboard() -> Element {
    let vault = use_vault();
    let mut selected = use_signal(|| Option::<String>::None);

    let subjects = vault.with(|c| c.catalog().subjects());
    let total_notes = vault.with(|c| c.catalog().total_notes());
    let users = vault.with(|c| c.known_users());
    let paid_users = users.iter().filter(|u| u.is_paid).count();

    let active = selected()
        .and_then(|id| subjects.iter().find(|s| s.id == id).cloned())
        .or_else(|| subjects.first().cloned());
    let active_id = active.as_ref().map(|s| s.id.clone());
    let notes = active
        .as_ref()
        .map(|s| vault.with(|c| c.catalog().notes_for(&s.id)))
        .unwrap_or_default();
    let subject_count = subjects.len().to_string();
    let note_count = total_notes.to_string();
    let user_count = users.len().to_string();
    let paid_count = paid_users.to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            h2 { class: "dashboard-title", "Management Portal" }

            div { class: "dashboard-stats",
                StatCard { label: "Subjects", value: subject_count }
                StatCard { label: "Notes", value: note_count }
                StatCard { label: "Students", value: user_count }
                StatCard { label: "Paid", value: paid_count }
            }

            div { class: "dashboard-grid",
                SubjectsPanel {
                    subjects: subjects,
                    active: active_id,
                    on_select: move |id: String| selected.set(Some(id)),
                }
                match active {
                    Some(subject) => rsx! {
                        NotesPanel { key: "{subject.id}", subject: subject.clone(), notes: notes }
                    },
                    None => rsx! {
                        Card { class: "dashboard-empty",
                            CardContent { p { "Create a subject to start filing notes." } }
                        }
                    },
                }
            }

            UsersPanel { users: users }
        }
    }
}

#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardContent {
                span { class: "stat-value", "{value}" }
                span { class: "stat-label", "{label}" }
            }
        }
    }
}

#[component]
fn SubjectsPanel(
    subjects: Vec<Subject>,
    active: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    let vault = use_vault();
    let mut name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let is_empty = subjects.is_empty();

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        match vault.update(|c| c.add_subject(&name())) {
            Ok(subject) => {
                name.set(String::new());
                error.set(None);
                on_select.call(subject.id);
            }
            Err(e) => error.set(Some(field_message(&e, "name"))),
        }
    };

    rsx! {
        Card { class: "subjects-panel",
            CardHeader {
                CardTitle { "Subjects" }
                CardDescription { "Deleting a subject removes its notes too." }
            }
            CardContent {
                form { class: "inline-form", onsubmit: handle_create,
                    Input {
                        placeholder: "New subject name",
                        value: name(),
                        error: error(),
                        on_input: move |e: FormEvent| name.set(e.value()),
                    }
                    Button { button_type: "submit", "Add" }
                }

                if is_empty {
                    p { class: "dashboard-muted", "No subjects yet." }
                }
                ul { class: "subject-list",
                    for subject in subjects.iter() {
                        SubjectRow {
                            key: "{subject.id}",
                            is_active: active.as_deref() == Some(subject.id.as_str()),
                            subject: subject.clone(),
                            on_select: on_select,
                            on_error: move |message: String| error.set(Some(message)),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SubjectRow(
    subject: Subject,
    is_active: bool,
    on_select: EventHandler<String>,
    on_error: EventHandler<String>,
) -> Element {
    let vault = use_vault();
    let id = subject.id.clone();
    let remove_id = subject.id.clone();
    let count = pluralize(subject.note_count as usize, "note", "notes");

    rsx! {
        li { class: if is_active { "subject-row active" } else { "subject-row" },
            button {
                class: "subject-select",
                r#type: "button",
                onclick: move |_| on_select.call(id.clone()),
                span { class: "subject-name", "{subject.name}" }
                span { class: "subject-count", "{count}" }
            }
            Button {
                variant: ButtonVariant::Ghost,
                title: "Delete subject",
                onclick: move |_| {
                    if let Err(e) = vault.update(|c| c.remove_subject(&remove_id)) {
                        tracing::error!(error = %e, "Failed to delete subject");
                        on_error.call(e.message);
                    }
                },
                Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
            }
        }
    }
}

#[component]
fn NotesPanel(subject: Subject, notes: Vec<Note>) -> Element {
    let vault = use_vault();
    let mut title = use_signal(String::new);
    let mut file_name = use_signal(String::new);
    let mut content_url = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let subject_id = subject.id.clone();

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let note = NewNote {
            subject_id: subject_id.clone(),
            title: title(),
            file_name: file_name(),
            content_url: Some(content_url()),
            file_data: None,
        };
        match vault.update(|c| c.add_note(note)) {
            Ok(_) => {
                title.set(String::new());
                file_name.set(String::new());
                content_url.set(String::new());
                field_errors.set(HashMap::new());
                form_error.set(None);
            }
            Err(e) if e.field_errors.is_empty() => form_error.set(Some(e.message)),
            Err(e) => {
                form_error.set(None);
                field_errors.set(e.field_errors);
            }
        }
    };

    let errors = field_errors();
    let summary = format!(
        "{} · created {}",
        pluralize(notes.len(), "note", "notes"),
        format_date_human(subject.created_at)
    );
    let is_empty = notes.is_empty();

    rsx! {
        Card { class: "notes-panel",
            CardHeader {
                CardTitle { "{subject.name}" }
                CardDescription { "{summary}" }
            }
            CardContent {
                form { class: "note-form", onsubmit: handle_create,
                    FormField { label: "Title", html_for: "note-title",
                        Input {
                            id: "note-title",
                            placeholder: "Week 3: Thermodynamics",
                            value: title(),
                            error: errors.get("title").cloned(),
                            on_input: move |e: FormEvent| title.set(e.value()),
                        }
                    }
                    FormField { label: "File name", html_for: "note-file-name",
                        Input {
                            id: "note-file-name",
                            placeholder: "thermodynamics.pdf",
                            hint: Some("Ends in .pdf, .docx or .doc".to_string()),
                            value: file_name(),
                            error: errors.get("fileName").cloned(),
                            on_input: move |e: FormEvent| file_name.set(e.value()),
                        }
                    }
                    FormField { label: "Document link", html_for: "note-url",
                        Input {
                            id: "note-url",
                            input_type: "url",
                            placeholder: "https://...",
                            hint: Some("Students download from this address".to_string()),
                            value: content_url(),
                            error: errors.get("contentUrl").cloned(),
                            on_input: move |e: FormEvent| content_url.set(e.value()),
                        }
                    }
                    if let Some(message) = form_error() {
                        p { class: "screen-error", "{message}" }
                    }
                    Button { button_type: "submit", "File note" }
                }

                if is_empty {
                    p { class: "dashboard-muted", "No notes filed under this subject yet." }
                }
                ul { class: "note-list",
                    for note in notes.iter() {
                        AdminNoteRow { key: "{note.id}", note: note.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn AdminNoteRow(note: Note) -> Element {
    let vault = use_vault();
    let href = vault.with(|c| c.download_href(&note.id));
    let remove_id = note.id.clone();
    let uploaded = format_date_human(note.upload_date);

    rsx! {
        li { class: "note-row",
            div { class: "note-meta",
                span { class: "note-title", "{note.title}" }
                span { class: "note-detail", "{note.file_name} · {uploaded}" }
            }
            Badge { variant: BadgeVariant::Outline, "{note.file_type.as_str()}" }
            if let Some(href) = href {
                a { class: "note-download", href: "{href}", target: "_blank", download: "{note.file_name}",
                    Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                }
            }
            Button {
                variant: ButtonVariant::Ghost,
                title: "Delete note",
                onclick: move |_| {
                    if let Err(e) = vault.update(|c| c.remove_note(&remove_id)) {
                        tracing::error!(error = %e, "Failed to delete note");
                    }
                },
                Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
            }
        }
    }
}

#[component]
fn UsersPanel(users: Vec<UserRecord>) -> Element {
    rsx! {
        Card { class: "users-panel",
            CardHeader {
                CardTitle { "Students" }
                CardDescription { "Everyone who has signed in with Google, most recent first." }
            }
            CardContent {
                if users.is_empty() {
                    p { class: "dashboard-muted", "No student has signed in yet." }
                } else {
                    table { class: "users-table",
                        thead {
                            tr {
                                th { "Email" }
                                th { "Name" }
                                th { "Status" }
                                th { "Last sign-in" }
                            }
                        }
                        tbody {
                            for user in users.iter() {
                                tr { key: "{user.email}",
                                    td { "{user.email}" }
                                    td { {user.display_name.clone().unwrap_or_default()} }
                                    td {
                                        if user.is_paid {
                                            Badge { variant: BadgeVariant::Success, dot: true, "Paid" }
                                        } else {
                                            Badge { variant: BadgeVariant::Warning, dot: true, "Unpaid" }
                                        }
                                    }
                                    td { {format_datetime_human(user.last_login_at)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Inline message for one form field, falling back to the error summary.
fn field_message(error: &AppError, field: &str) -> String {
    error
        .field_error(field)
        .unwrap_or(error.message.as_str())
        .to_string()
}

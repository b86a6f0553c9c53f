use crate::auth::use_vault;
use crate::format_helpers::{format_date_human, pluralize};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdLock, LdLockOpen};
use dioxus_free_icons::Icon;
use shared_types::{Note, Subject};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, CardTone,
};

/// Student workspace: the subject catalog, with downloads behind the paywall.
#[component]
pub fn UserDashboard() -> Element {
    let vault = use_vault();
    let mut selected = use_signal(|| Option::<String>::None);

    let auth = vault.auth();
    let subjects = vault.with(|c| c.catalog().subjects());
    let active = selected()
        .and_then(|id| subjects.iter().find(|s| s.id == id).cloned())
        .or_else(|| subjects.first().cloned());
    let active_id = active.as_ref().map(|s| s.id.clone());
    let notes = active
        .as_ref()
        .map(|s| vault.with(|c| c.catalog().notes_for(&s.id)))
        .unwrap_or_default();
    let greeting = auth
        .display_name
        .clone()
        .unwrap_or_else(|| "there".to_string());
    let has_subjects = !subjects.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            h2 { class: "dashboard-title", "Welcome back, {greeting}" }

            if !auth.is_paid {
                Paywall {}
            }

            if has_subjects {
                div { class: "dashboard-grid",
                    SubjectPicker {
                        subjects: subjects,
                        active: active_id,
                        on_select: move |id: String| selected.set(Some(id)),
                    }
                    if let Some(subject) = active {
                        SubjectNotes {
                            key: "{subject.id}",
                            subject: subject.clone(),
                            notes: notes,
                            unlocked: auth.is_paid,
                        }
                    }
                }
            } else {
                Card { tone: CardTone::Muted, class: "dashboard-empty",
                    CardContent { p { "No notes have been published yet. Check back soon." } }
                }
            }
        }
    }
}

#[component]
fn Paywall() -> Element {
    let vault = use_vault();
    let price = vault.with(|c| c.checkout_price());

    rsx! {
        Card { tone: CardTone::Accent, class: "paywall",
            CardHeader {
                CardTitle {
                    Icon::<LdLock> { icon: LdLock, width: 18, height: 18 }
                    " Unlock the vault"
                }
                CardDescription {
                    "Browse freely. Downloading notes needs a one-time unlock for your account."
                }
            }
            CardFooter {
                Button {
                    onclick: move |_| {
                        if let Some(record) = vault.update(|c| c.checkout()) {
                            tracing::info!(payment = %record.id, "Vault unlocked");
                        }
                    },
                    Icon::<LdLockOpen> { icon: LdLockOpen, width: 16, height: 16 }
                    span { "Unlock for {price}" }
                }
            }
        }
    }
}

#[component]
fn SubjectPicker(
    subjects: Vec<Subject>,
    active: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        Card { class: "subjects-panel",
            CardHeader { CardTitle { "Subjects" } }
            CardContent {
                ul { class: "subject-list",
                    for subject in subjects.iter() {
                        li {
                            key: "{subject.id}",
                            class: if active.as_deref() == Some(subject.id.as_str()) { "subject-row active" } else { "subject-row" },
                            button {
                                class: "subject-select",
                                r#type: "button",
                                onclick: {
                                    let id = subject.id.clone();
                                    move |_| on_select.call(id.clone())
                                },
                                span { class: "subject-name", "{subject.name}" }
                                span { class: "subject-count",
                                    {pluralize(subject.note_count as usize, "note", "notes")}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SubjectNotes(subject: Subject, notes: Vec<Note>, unlocked: bool) -> Element {
    let is_empty = notes.is_empty();

    rsx! {
        Card { class: "notes-panel",
            CardHeader {
                CardTitle { "{subject.name}" }
            }
            CardContent {
                if is_empty {
                    p { class: "dashboard-muted", "Nothing filed under this subject yet." }
                }
                ul { class: "note-list",
                    for note in notes.iter() {
                        StudentNoteRow { key: "{note.id}", note: note.clone(), unlocked: unlocked }
                    }
                }
            }
        }
    }
}

#[component]
fn StudentNoteRow(note: Note, unlocked: bool) -> Element {
    let vault = use_vault();
    let href = if unlocked {
        vault.with(|c| c.download_href(&note.id))
    } else {
        None
    };
    let uploaded = format_date_human(note.upload_date);

    rsx! {
        li { class: "note-row",
            div { class: "note-meta",
                span { class: "note-title", "{note.title}" }
                span { class: "note-detail", "{note.file_name} · {uploaded}" }
            }
            Badge { variant: BadgeVariant::Outline, "{note.file_type.as_str()}" }
            match href {
                Some(href) => rsx! {
                    a {
                        class: "note-download",
                        href: "{href}",
                        target: "_blank",
                        download: "{note.file_name}",
                        Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                        span { "Download" }
                    }
                },
                None => rsx! {
                    span { class: "note-locked", title: "Unlock the vault to download",
                        Icon::<LdLock> { icon: LdLock, width: 16, height: 16 }
                    }
                },
            }
        }
    }
}

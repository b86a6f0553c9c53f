use crate::now_millis;
use crate::store::{load_or_default, save_json, SessionStore, NOTES_KEY, SUBJECTS_KEY};
use shared_types::{AppError, NewNote, Note, NoteFileType, Subject};
use std::collections::HashMap;
use std::rc::Rc;

/// Subjects and their notes, kept in the session store.
///
/// Stands in for a real content backend: nothing is uploaded, notes point at
/// a hosted URL or carry their body inline.
pub struct Catalog {
    store: Rc<dyn SessionStore>,
    subjects: Vec<Subject>,
    notes: Vec<Note>,
}

impl Catalog {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        let subjects = load_or_default(store.as_ref(), SUBJECTS_KEY);
        let notes = load_or_default(store.as_ref(), NOTES_KEY);
        let mut catalog = Self {
            store,
            subjects,
            notes,
        };
        catalog.recount();
        catalog
    }

    /// Subjects ordered by name.
    pub fn subjects(&self) -> Vec<Subject> {
        let mut subjects = self.subjects.clone();
        subjects.sort_by_key(|s| s.name.to_lowercase());
        subjects
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Notes filed under a subject, newest first.
    pub fn notes_for(&self, subject_id: &str) -> Vec<Note> {
        let mut notes: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| n.subject_id == subject_id)
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
        notes
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn total_notes(&self) -> usize {
        self.notes.len()
    }

    pub fn add_subject(&mut self, name: &str) -> Result<Subject, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::field("name", "Subject name is required"));
        }
        if self
            .subjects
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(name))
        {
            return Err(AppError::field("name", "A subject with this name already exists"));
        }

        let subject = Subject {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            note_count: 0,
            created_at: now_millis(),
        };
        let mut subjects = self.subjects.clone();
        subjects.push(subject.clone());
        save_json(self.store.as_ref(), SUBJECTS_KEY, &subjects)?;
        self.subjects = subjects;

        tracing::info!(subject = %subject.name, "Subject created");
        Ok(subject)
    }

    /// Remove a subject together with every note filed under it.
    pub fn remove_subject(&mut self, id: &str) -> Result<Subject, AppError> {
        let removed = self
            .subject(id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Subject not found"))?;

        let subjects: Vec<Subject> = self.subjects.iter().filter(|s| s.id != id).cloned().collect();
        let notes: Vec<Note> = self.notes.iter().filter(|n| n.subject_id != id).cloned().collect();
        save_json(self.store.as_ref(), NOTES_KEY, &notes)?;
        save_json(self.store.as_ref(), SUBJECTS_KEY, &subjects)?;
        self.subjects = subjects;
        self.notes = notes;

        tracing::info!(subject = %removed.name, notes = removed.note_count, "Subject removed");
        Ok(removed)
    }

    pub fn add_note(&mut self, new_note: NewNote) -> Result<Note, AppError> {
        let mut field_errors = HashMap::new();

        if self.subject(&new_note.subject_id).is_none() {
            field_errors.insert("subjectId".to_string(), "Choose a subject".to_string());
        }
        let title = new_note.title.trim();
        if title.is_empty() {
            field_errors.insert("title".to_string(), "Title is required".to_string());
        }
        let file_name = new_note.file_name.trim();
        let file_type = NoteFileType::from_file_name(file_name);
        if file_type.is_none() {
            field_errors.insert(
                "fileName".to_string(),
                "Only .pdf, .docx and .doc files are supported".to_string(),
            );
        }
        let content_url = non_empty(new_note.content_url);
        let file_data = non_empty(new_note.file_data);
        if content_url.is_none() && file_data.is_none() {
            field_errors.insert(
                "contentUrl".to_string(),
                "Provide a link to the document".to_string(),
            );
        }

        let file_type = match file_type {
            Some(file_type) if field_errors.is_empty() => file_type,
            _ => return Err(AppError::validation("Note is incomplete", field_errors)),
        };

        let note = Note {
            id: uuid::Uuid::new_v4().to_string(),
            subject_id: new_note.subject_id,
            title: title.to_string(),
            file_name: file_name.to_string(),
            file_type,
            upload_date: now_millis(),
            content_url,
            file_data,
        };

        let mut notes = self.notes.clone();
        notes.push(note.clone());
        self.commit_notes(notes)?;

        tracing::info!(note = %note.title, subject = %note.subject_id, "Note filed");
        Ok(note)
    }

    pub fn remove_note(&mut self, id: &str) -> Result<Note, AppError> {
        let removed = self
            .note(id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Note not found"))?;
        let notes = self.notes.iter().filter(|n| n.id != id).cloned().collect();
        self.commit_notes(notes)?;

        tracing::info!(note = %removed.title, "Note removed");
        Ok(removed)
    }

    /// Download target for a note, if it has any body at all.
    pub fn download_href(&self, id: &str) -> Option<String> {
        self.note(id).and_then(Note::download_href)
    }

    /// Persist a new note list and refresh the cached counts.
    fn commit_notes(&mut self, notes: Vec<Note>) -> Result<(), AppError> {
        save_json(self.store.as_ref(), NOTES_KEY, &notes)?;
        self.notes = notes;
        self.recount();
        if let Err(e) = save_json(self.store.as_ref(), SUBJECTS_KEY, &self.subjects) {
            tracing::error!(error = %e, "Failed to persist subject counts");
        }
        Ok(())
    }

    fn recount(&mut self) {
        for subject in &mut self.subjects {
            subject.note_count = self
                .notes
                .iter()
                .filter(|n| n.subject_id == subject.id)
                .count() as u32;
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

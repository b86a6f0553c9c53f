use serde::{Deserialize, Serialize};

/// A grouping of notes, e.g. "Organic Chemistry".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// Cached count of notes filed under this subject.
    #[serde(default)]
    pub note_count: u32,
    pub created_at: i64,
}

/// Document formats a note can be uploaded as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoteFileType {
    Pdf,
    Docx,
    Doc,
}

impl NoteFileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteFileType::Pdf => "pdf",
            NoteFileType::Docx => "docx",
            NoteFileType::Doc => "doc",
        }
    }

    /// Detect the format from a file name's extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_lowercase().as_str() {
            "pdf" => Some(NoteFileType::Pdf),
            "docx" => Some(NoteFileType::Docx),
            "doc" => Some(NoteFileType::Doc),
            _ => None,
        }
    }

    /// MIME type used when building inline download links.
    pub fn mime_type(&self) -> &'static str {
        match self {
            NoteFileType::Pdf => "application/pdf",
            NoteFileType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            NoteFileType::Doc => "application/msword",
        }
    }
}

/// A downloadable study note.
///
/// `subject_id` is a soft reference; nothing outside the catalog enforces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub subject_id: String,
    pub title: String,
    pub file_name: String,
    pub file_type: NoteFileType,
    pub upload_date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    /// Base64 file body, when the note was added inline instead of by URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_data: Option<String>,
}

impl Note {
    /// Link target for the download button: the hosted URL when present,
    /// otherwise a data URL over the inline body.
    pub fn download_href(&self) -> Option<String> {
        if let Some(url) = self.content_url.as_ref().filter(|u| !u.is_empty()) {
            return Some(url.clone());
        }
        self.file_data
            .as_ref()
            .filter(|d| !d.is_empty())
            .map(|data| {
                if data.starts_with("data:") {
                    data.clone()
                } else {
                    format!("data:{};base64,{}", self.file_type.mime_type(), data)
                }
            })
    }
}

/// Admin form payload for filing a new note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub subject_id: String,
    pub title: String,
    pub file_name: String,
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(default)]
    pub file_data: Option<String>,
}

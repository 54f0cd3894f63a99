//! Note entity.
//!
//! # Responsibility
//! - Define the note record shown on the board.
//! - Own name/body normalization helpers shared by create and edit paths.
//!
//! # Invariants
//! - `id` and `created_date` never change after construction.
//! - `elements` is never empty and starts with a text block.
//! - `tag` is a plain label name; it may dangle if the label disappears.

use crate::model::element::{normalize_elements, ContentElement};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable note identifier, never reused within a repository lifetime.
pub type NoteId = Uuid;

/// Name substituted when a note is saved with a blank name.
pub const DEFAULT_NOTE_NAME: &str = "Untitled Note";
/// `file_type` of notes authored on the board.
pub const AUTHORED_FILE_TYPE: &str = "txt";
/// `size_label` of notes authored on the board.
pub const AUTHORED_SIZE_LABEL: &str = "0KB";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub name: String,
    pub elements: Vec<ContentElement>,
    pub tag: String,
    /// Display classification (`txt`, `pdf`, or a raw file extension).
    pub file_type: String,
    /// Human-readable size such as `0KB` or `2.00MB`.
    pub size_label: String,
    pub created_date: NaiveDate,
    /// Optional free-text description, searched alongside `name`.
    pub description: Option<String>,
}

impl Note {
    /// Creates an authored note.
    ///
    /// `name` is stored as given; callers normalize it with
    /// [`normalize_note_name`]. `elements` is normalized here.
    pub fn new(
        id: NoteId,
        name: String,
        elements: Vec<ContentElement>,
        tag: String,
        created_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name,
            elements: normalize_elements(elements),
            tag,
            file_type: AUTHORED_FILE_TYPE.to_string(),
            size_label: AUTHORED_SIZE_LABEL.to_string(),
            created_date,
            description: None,
        }
    }

    /// Returns the content of the leading text block.
    pub fn text_content(&self) -> &str {
        self.elements
            .first()
            .and_then(ContentElement::as_text)
            .unwrap_or_default()
    }
}

/// Trims `name`, substituting `fallback` when nothing is left.
pub fn normalize_note_name(name: &str, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Icon category derived from a note's `file_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Pdf,
    Word,
    Archive,
    Presentation,
    Text,
    Image,
    Checklist,
    Other,
}

impl FileCategory {
    /// Maps a `file_type` value to its icon; unknown types are `Other`.
    pub fn from_file_type(file_type: &str) -> Self {
        match file_type {
            "pdf" => Self::Pdf,
            "docx" => Self::Word,
            "zip" => Self::Archive,
            "pptx" => Self::Presentation,
            "txt" => Self::Text,
            "image" => Self::Image,
            "todo" => Self::Checklist,
            _ => Self::Other,
        }
    }
}

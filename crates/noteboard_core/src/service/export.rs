//! Share and download payloads derived from a note.

use crate::model::element::ContentElement;
use crate::model::note::{Note, AUTHORED_FILE_TYPE};

/// Plain-text file offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDownload {
    pub file_name: String,
    pub content: String,
}

/// Text handed to a share target: one line per block, non-text blocks blank.
pub fn share_text(note: &Note) -> String {
    note.elements
        .iter()
        .map(|element| element.as_text().unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Download payload for text notes; other file types have none.
pub fn download_payload(note: &Note) -> Option<TextDownload> {
    if note.file_type != AUTHORED_FILE_TYPE {
        return None;
    }
    let content = note
        .elements
        .first()
        .and_then(ContentElement::as_text)?
        .to_string();
    Some(TextDownload {
        file_name: note.name.clone(),
        content,
    })
}

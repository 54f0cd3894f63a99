//! File ingestion mapping.
//!
//! # Responsibility
//! - Turn dropped-file metadata into a note with a fixed, content-agnostic
//!   shape.
//! - Encode image bytes read by the host into an opaque data URI.
//!
//! # Invariants
//! - File contents are never parsed; only name and byte size are used.
//! - A name without `.` yields the whole lowercased name as `file_type`.

use crate::model::element::ContentElement;
use crate::model::note::{normalize_note_name, Note, NoteId};
use base64::Engine;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;
const UPLOAD_PREFIX: &str = "Uploaded file: ";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Metadata supplied by the file-drop surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub byte_size: u64,
    /// MIME type reported by the host, if any. Used for data URIs only.
    pub mime_hint: Option<String>,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, byte_size: u64) -> Self {
        Self {
            name: name.into(),
            byte_size,
            mime_hint: None,
        }
    }

    pub fn with_mime_hint(mut self, mime: impl Into<String>) -> Self {
        self.mime_hint = Some(mime.into());
        self
    }

    /// Encodes the file's bytes as a data URI typed by `mime_hint`.
    ///
    /// Without a hint the payload is typed `application/octet-stream`.
    pub fn to_data_uri(&self, bytes: &[u8]) -> String {
        encode_data_uri(self.mime_hint.as_deref().unwrap_or(FALLBACK_MIME), bytes)
    }
}

/// Formats a byte count as MiB with two decimals, e.g. `2.00MB`.
pub fn format_mib(byte_size: u64) -> String {
    format!("{:.2}MB", byte_size as f64 / BYTES_PER_MIB)
}

/// Lowercased text after the final `.`, or the whole name when there is none.
pub fn file_type_from_name(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Builds the note for one ingested file.
///
/// The file name is kept verbatim; only a blank name is replaced by
/// `fallback_name` so the note stays displayable.
pub fn ingested_note(
    id: NoteId,
    meta: &FileMeta,
    tag: String,
    created_date: NaiveDate,
    fallback_name: &str,
) -> Note {
    let description = format!("{UPLOAD_PREFIX}{}", meta.name);
    let name = if meta.name.trim().is_empty() {
        normalize_note_name(&meta.name, fallback_name)
    } else {
        meta.name.clone()
    };

    let mut note = Note::new(
        id,
        name,
        vec![ContentElement::text(description.as_str())],
        tag,
        created_date,
    );
    note.file_type = file_type_from_name(&meta.name);
    note.size_label = format_mib(meta.byte_size);
    note.description = Some(description);
    note
}

/// Encodes raw bytes as a base64 `data:` URI usable as an image blob reference.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}

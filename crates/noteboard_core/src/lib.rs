//! Core domain logic for the note board.
//! This crate is the single source of truth for note, label and
//! visible-list invariants; rendering layers only consume its output.

pub mod clock;
pub mod config;
pub mod identity;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BoardConfig, ConfigError};
pub use identity::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::element::{
    normalize_elements, remove_element_at, ContentElement, ElementError, ElementKind,
    ElementResult, TodoItem,
};
pub use model::label::{Label, LabelColor};
pub use model::note::{FileCategory, Note, NoteId, DEFAULT_NOTE_NAME};
pub use repo::label_registry::LabelRegistry;
pub use repo::note_repo::{
    InMemoryNoteRepository, NotePatch, NoteRepository, RepoError, RepoResult,
};
pub use search::query::{visible_notes, SortKey};
pub use service::board_service::{BoardError, BoardResult, NoteBoard};
pub use service::draft::NoteDraft;
pub use service::export::{download_payload, share_text, TextDownload};
pub use service::ingest::{encode_data_uri, file_type_from_name, format_mib, FileMeta};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

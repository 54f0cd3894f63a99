//! Note repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Hold the session's notes in most-recent-first order.
//! - Apply partial updates and permanent deletes by stable id.
//!
//! # Invariants
//! - Ids are unique for the repository lifetime; a second insert with a
//!   known id is rejected, including ids of already deleted notes.
//! - New notes are inserted at the front.
//! - Every lookup is by id, never by position, so an update that lands
//!   after unrelated edits cannot clobber them.

use crate::model::element::ContentElement;
use crate::model::note::{Note, NoteId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(NoteId),
    DuplicateId(NoteId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::DuplicateId(id) => write!(f, "note id already used: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub name: Option<String>,
    pub elements: Option<Vec<ContentElement>>,
    pub tag: Option<String>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.elements.is_none() && self.tag.is_none()
    }

    fn apply(self, note: &mut Note) {
        if let Some(name) = self.name {
            note.name = name;
        }
        if let Some(elements) = self.elements {
            note.elements = elements;
        }
        if let Some(tag) = self.tag {
            note.tag = tag;
        }
    }
}

/// Repository interface for note operations.
pub trait NoteRepository {
    /// Inserts a fully built note at the front and returns its id.
    fn insert_note(&mut self, note: Note) -> RepoResult<NoteId>;
    /// Applies a partial update and returns the stored note after it.
    fn update_note(&mut self, id: NoteId, patch: NotePatch) -> RepoResult<Note>;
    /// Removes a note permanently and returns it.
    fn delete_note(&mut self, id: NoteId) -> RepoResult<Note>;
    fn get_note(&self, id: NoteId) -> Option<Note>;
    /// Snapshot of all notes, most recent first.
    fn list_notes(&self) -> Vec<Note>;
}

/// Session-scoped note storage.
#[derive(Debug, Default)]
pub struct InMemoryNoteRepository {
    notes: Vec<Note>,
    issued_ids: HashSet<NoteId>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn position(&self, id: NoteId) -> RepoResult<usize> {
        self.notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(RepoError::NotFound(id))
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn insert_note(&mut self, note: Note) -> RepoResult<NoteId> {
        let id = note.id;
        if !self.issued_ids.insert(id) {
            return Err(RepoError::DuplicateId(id));
        }
        self.notes.insert(0, note);
        Ok(id)
    }

    fn update_note(&mut self, id: NoteId, patch: NotePatch) -> RepoResult<Note> {
        let index = self.position(id)?;
        let note = &mut self.notes[index];
        patch.apply(note);
        Ok(note.clone())
    }

    fn delete_note(&mut self, id: NoteId) -> RepoResult<Note> {
        let index = self.position(id)?;
        Ok(self.notes.remove(index))
    }

    fn get_note(&self, id: NoteId) -> Option<Note> {
        self.notes.iter().find(|note| note.id == id).cloned()
    }

    fn list_notes(&self) -> Vec<Note> {
        self.notes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn note(id: u128, name: &str) -> Note {
        Note::new(
            Uuid::from_u128(id),
            name.to_string(),
            Vec::new(),
            "work".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn insert_places_newest_first() {
        let mut repo = InMemoryNoteRepository::new();
        repo.insert_note(note(1, "first")).unwrap();
        repo.insert_note(note(2, "second")).unwrap();

        let names: Vec<String> = repo.list_notes().into_iter().map(|n| n.name).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut repo = InMemoryNoteRepository::new();
        repo.insert_note(note(1, "gone")).unwrap();
        repo.delete_note(Uuid::from_u128(1)).unwrap();

        let err = repo.insert_note(note(1, "again")).unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(Uuid::from_u128(1)));
        assert!(repo.is_empty());
    }

    #[test]
    fn update_applies_only_given_fields() {
        let mut repo = InMemoryNoteRepository::new();
        repo.insert_note(note(1, "keep")).unwrap();

        let updated = repo
            .update_note(
                Uuid::from_u128(1),
                NotePatch {
                    tag: Some("ideas".to_string()),
                    ..NotePatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "keep");
        assert_eq!(updated.tag, "ideas");
        assert_eq!(repo.get_note(Uuid::from_u128(1)), Some(updated));
    }

    #[test]
    fn missing_ids_report_not_found() {
        let mut repo = InMemoryNoteRepository::new();
        let id = Uuid::from_u128(9);
        assert_eq!(repo.delete_note(id).unwrap_err(), RepoError::NotFound(id));
        assert_eq!(
            repo.update_note(id, NotePatch::default()).unwrap_err(),
            RepoError::NotFound(id)
        );
    }
}

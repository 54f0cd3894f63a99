//! Note board use-case service.
//!
//! # Responsibility
//! - Expose every board operation the UI layer calls: create, edit, delete,
//!   label management, ingestion and the visible-notes projection.
//! - Apply name, body and tag normalization before anything is stored.
//!
//! # Invariants
//! - Every stored note has a non-blank name and a body starting with a
//!   text block.
//! - Tags are saved only if they name a registered label; anything else is
//!   replaced by the configured default tag.
//! - All writes address notes by id, so a late image attach or draft save
//!   cannot overwrite a different note.
//! - Log lines carry ids and counts only, never note text.

use crate::clock::{Clock, SystemClock};
use crate::config::{BoardConfig, ConfigError};
use crate::identity::{IdGenerator, UuidGenerator};
use crate::model::element::{normalize_elements, ContentElement, ElementError};
use crate::model::label::{Label, LabelColor};
use crate::model::note::{normalize_note_name, Note, NoteId};
use crate::repo::label_registry::LabelRegistry;
use crate::repo::note_repo::{InMemoryNoteRepository, NotePatch, NoteRepository, RepoError};
use crate::search::query::{visible_notes, SortKey};
use crate::service::draft::NoteDraft;
use crate::service::ingest::{ingested_note, FileMeta};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardError>;

/// Service error for board use-cases. All variants are caller bugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Target note does not exist.
    NotFound(NoteId),
    /// Block mutation hit the wrong variant or index.
    Element(ElementError),
    /// Storage-level failure other than a missing note.
    Repo(RepoError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Element(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Element(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for BoardError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<ElementError> for BoardError {
    fn from(value: ElementError) -> Self {
        Self::Element(value)
    }
}

/// Board facade over a note repository and the label registry.
pub struct NoteBoard<R: NoteRepository = InMemoryNoteRepository> {
    repo: R,
    labels: LabelRegistry,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    config: BoardConfig,
}

impl NoteBoard {
    /// Empty in-memory board with default config, wall clock and UUID ids.
    pub fn new() -> Self {
        Self::assemble(
            InMemoryNoteRepository::new(),
            Box::new(SystemClock),
            Box::new(UuidGenerator),
            BoardConfig::default(),
        )
    }

    /// Empty in-memory board using `config`.
    ///
    /// # Errors
    /// - `ConfigError::Invalid` when the normalized config breaks an invariant.
    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_parts(
            InMemoryNoteRepository::new(),
            Box::new(SystemClock),
            Box::new(UuidGenerator),
            config,
        )
    }
}

impl Default for NoteBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: NoteRepository> NoteBoard<R> {
    /// Assembles a board from explicit collaborators.
    ///
    /// `config` is normalized and validated first, so its default and
    /// ingest tags always name a seeded label.
    ///
    /// # Errors
    /// - `ConfigError::Invalid` when the normalized config breaks an invariant.
    pub fn with_parts(
        repo: R,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
        config: BoardConfig,
    ) -> Result<Self, ConfigError> {
        let config = config.checked()?;
        info!(
            "event=board_init module=board status=ok labels={}",
            config.labels.len()
        );
        Ok(Self::assemble(repo, clock, ids, config))
    }

    /// `config` must already satisfy `BoardConfig::validate`.
    fn assemble(
        repo: R,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
        config: BoardConfig,
    ) -> Self {
        let labels = LabelRegistry::new(config.labels.clone());
        Self {
            repo,
            labels,
            clock,
            ids,
            config,
        }
    }

    /// Normalized config the board was built with.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Creates an authored note at the front of the board.
    ///
    /// A blank `name` becomes the configured default name.
    pub fn create_note(
        &mut self,
        name: &str,
        elements: Vec<ContentElement>,
        tag: &str,
    ) -> BoardResult<Note> {
        let tag = self.resolve_tag(tag);
        let note = Note::new(
            self.ids.next_id(),
            normalize_note_name(name, &self.config.default_note_name),
            elements,
            tag,
            self.clock.today(),
        );
        self.repo.insert_note(note.clone())?;
        info!(
            "event=note_create module=board status=ok note_id={} elements={}",
            note.id,
            note.elements.len()
        );
        Ok(note)
    }

    /// Applies the given fields to a stored note; others stay unchanged.
    pub fn update_note(&mut self, id: NoteId, patch: NotePatch) -> BoardResult<Note> {
        let patch = NotePatch {
            name: patch
                .name
                .map(|name| normalize_note_name(&name, &self.config.default_note_name)),
            elements: patch.elements.map(normalize_elements),
            tag: patch.tag.map(|tag| self.resolve_tag(&tag)),
        };
        let updated = self.repo.update_note(id, patch).map_err(|err| {
            warn!("event=note_update module=board status=error note_id={id} error={err}");
            BoardError::from(err)
        })?;
        info!("event=note_update module=board status=ok note_id={id}");
        Ok(updated)
    }

    /// Permanently removes a note and returns it.
    ///
    /// Confirming intent is the caller's job.
    pub fn delete_note(&mut self, id: NoteId) -> BoardResult<Note> {
        let removed = self.repo.delete_note(id).map_err(|err| {
            warn!("event=note_delete module=board status=error note_id={id} error={err}");
            BoardError::from(err)
        })?;
        info!("event=note_delete module=board status=ok note_id={id}");
        Ok(removed)
    }

    /// Current stored state of one note, if it still exists.
    pub fn get_note(&self, id: NoteId) -> Option<Note> {
        self.repo.get_note(id)
    }

    /// Snapshot of every note, most recent first.
    pub fn get_all(&self) -> Vec<Note> {
        self.repo.list_notes()
    }

    /// Filtered and ordered projection for rendering.
    pub fn visible_notes(&self, search_term: &str, sort_key: SortKey) -> Vec<Note> {
        let notes = self.repo.list_notes();
        let visible = visible_notes(&notes, search_term, sort_key);
        debug!(
            "event=notes_query module=board total={} visible={} sort={:?}",
            notes.len(),
            visible.len(),
            sort_key
        );
        visible
    }

    /// Registered labels in insertion order.
    pub fn list_labels(&self) -> &[Label] {
        self.labels.list_labels()
    }

    /// Registers a label; blank names are ignored and return `None`.
    pub fn add_label(&mut self, name: &str, color: LabelColor) -> Option<Label> {
        let added = self.labels.add_label(name, color).cloned();
        match &added {
            Some(label) => info!(
                "event=label_add module=board status=ok color={} labels={}",
                label.color,
                self.labels.list_labels().len()
            ),
            None => debug!("event=label_add module=board status=skipped reason=blank_name"),
        }
        added
    }

    /// Display color for `tag`; gray when no label matches.
    pub fn resolve_color(&self, tag: &str) -> LabelColor {
        self.labels.resolve_color(tag)
    }

    /// Creates a note describing one dropped file.
    pub fn ingest_file(&mut self, meta: &FileMeta) -> BoardResult<Note> {
        let tag = self.resolve_tag(&self.config.ingest_tag);
        let note = ingested_note(
            self.ids.next_id(),
            meta,
            tag,
            self.clock.today(),
            &self.config.default_note_name,
        );
        self.repo.insert_note(note.clone())?;
        info!(
            "event=file_ingest module=board status=ok note_id={} file_type={} bytes={}",
            note.id, note.file_type, meta.byte_size
        );
        Ok(note)
    }

    /// Ingests files in order; each becomes the newest note in turn.
    pub fn ingest_files<I>(&mut self, files: I) -> BoardResult<Vec<Note>>
    where
        I: IntoIterator<Item = FileMeta>,
    {
        files
            .into_iter()
            .map(|meta| self.ingest_file(&meta))
            .collect()
    }

    /// Draft for the authoring flow, tagged with the default tag.
    pub fn new_draft(&self) -> NoteDraft {
        NoteDraft::blank(self.config.default_tag.clone())
    }

    /// Copies a stored note into an independent draft.
    pub fn begin_edit(&self, id: NoteId) -> BoardResult<NoteDraft> {
        self.repo
            .get_note(id)
            .map(|note| NoteDraft::from_note(&note))
            .ok_or(BoardError::NotFound(id))
    }

    /// Commits a draft: updates its target note by id, or creates a new
    /// note when the draft has no target.
    pub fn save_draft(&mut self, draft: NoteDraft) -> BoardResult<Note> {
        let (target, name, elements, tag) = draft.into_parts();
        match target {
            Some(id) => self.update_note(
                id,
                NotePatch {
                    name: Some(name),
                    elements: Some(elements),
                    tag: Some(tag),
                },
            ),
            None => self.create_note(&name, elements, &tag),
        }
    }

    /// Stores a finished image read into one block of a note.
    ///
    /// Fails with `NotFound` if the note was deleted while the read was in
    /// flight, or `Element` if that block is no longer an image.
    pub fn attach_image(
        &mut self,
        id: NoteId,
        element: usize,
        blob_ref: impl Into<String>,
    ) -> BoardResult<Note> {
        let note = self.repo.get_note(id).ok_or(BoardError::NotFound(id))?;
        let mut elements = note.elements;
        let len = elements.len();
        elements
            .get_mut(element)
            .ok_or(ElementError::IndexOutOfRange {
                index: element,
                len,
            })?
            .set_image_content(blob_ref)?;

        let updated = self.repo.update_note(
            id,
            NotePatch {
                elements: Some(elements),
                ..NotePatch::default()
            },
        )?;
        info!("event=image_attach module=board status=ok note_id={id} element={element}");
        Ok(updated)
    }

    fn resolve_tag(&self, tag: &str) -> String {
        if let Some(label) = self.labels.find(tag) {
            return label.name.clone();
        }
        warn!("event=tag_resolve module=board status=fallback reason=unknown_label");
        self.config.default_tag.clone()
    }
}

//! Editing buffer for the create and edit flows.
//!
//! # Responsibility
//! - Hold a private copy of a note's editable fields while the user edits.
//! - Route every block mutation through the variant-checked element API.
//!
//! # Invariants
//! - A draft never aliases the stored note; edits reach the repository only
//!   through `NoteBoard::save_draft`.
//! - Dropping a draft discards its edits.

use crate::model::element::{
    remove_element_at, ContentElement, ElementError, ElementKind, ElementResult,
};
use crate::model::note::{Note, NoteId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    target: Option<NoteId>,
    name: String,
    elements: Vec<ContentElement>,
    tag: String,
}

impl NoteDraft {
    /// Draft for a new note: empty name and one empty text block.
    pub fn blank(tag: impl Into<String>) -> Self {
        Self {
            target: None,
            name: String::new(),
            elements: vec![ContentElement::text("")],
            tag: tag.into(),
        }
    }

    /// Draft copying the editable fields of a stored note.
    pub fn from_note(note: &Note) -> Self {
        Self {
            target: Some(note.id),
            name: note.name.clone(),
            elements: note.elements.clone(),
            tag: note.tag.clone(),
        }
    }

    /// Id of the note being edited, `None` for a new note.
    pub fn target(&self) -> Option<NoteId> {
        self.target
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &[ContentElement] {
        &self.elements
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Appends an empty block and returns its index.
    pub fn add_element(&mut self, kind: ElementKind) -> usize {
        self.elements.push(ContentElement::new(kind));
        self.elements.len() - 1
    }

    pub fn set_text(&mut self, element: usize, value: impl Into<String>) -> ElementResult<()> {
        self.element_mut(element)?.set_text_content(value)
    }

    pub fn append_todo_item(&mut self, element: usize) -> ElementResult<()> {
        self.element_mut(element)?.append_todo_item()
    }

    pub fn set_todo_item_text(
        &mut self,
        element: usize,
        item: usize,
        value: impl Into<String>,
    ) -> ElementResult<()> {
        self.element_mut(element)?.set_todo_item_text(item, value)
    }

    pub fn set_todo_item_checked(
        &mut self,
        element: usize,
        item: usize,
        checked: bool,
    ) -> ElementResult<()> {
        self.element_mut(element)?.set_todo_item_checked(item, checked)
    }

    pub fn set_image(&mut self, element: usize, blob_ref: impl Into<String>) -> ElementResult<()> {
        self.element_mut(element)?.set_image_content(blob_ref)
    }

    /// Removes one block. Keeping at least one block is up to the caller;
    /// saving re-inserts a leading text block if needed.
    pub fn remove_element(&mut self, element: usize) -> ElementResult<()> {
        self.elements = remove_element_at(&self.elements, element)?;
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (Option<NoteId>, String, Vec<ContentElement>, String) {
        (self.target, self.name, self.elements, self.tag)
    }

    fn element_mut(&mut self, index: usize) -> ElementResult<&mut ContentElement> {
        let len = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(ElementError::IndexOutOfRange { index, len })
    }
}

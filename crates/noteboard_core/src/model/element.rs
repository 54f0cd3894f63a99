//! Content element model.
//!
//! # Responsibility
//! - Define the typed body blocks a note is composed of.
//! - Provide variant-checked mutators for each block kind.
//!
//! # Invariants
//! - A mutator only touches the variant it was written for; any other
//!   variant yields `ElementError::TypeMismatch` and is left unchanged.
//! - Todo items keep insertion order and are only ever appended.
//! - Image content is an opaque blob reference and is never decoded.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Discriminant of a [`ContentElement`], used when adding blocks and in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Text,
    Todo,
    Image,
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Text => "text",
            Self::Todo => "todo",
            Self::Image => "image",
        };
        f.write_str(value)
    }
}

/// One checklist entry of a todo block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    pub checked: bool,
}

/// One typed block of a note body.
///
/// Serialized as `{ "type": "...", "content": ... }`, where todo content is
/// the item array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum ContentElement {
    /// Free text block.
    Text(String),
    /// Ordered checklist.
    Todo(Vec<TodoItem>),
    /// Opaque reference to image data (data URI or URL).
    Image(String),
}

/// Element mutation failure. Both variants indicate a caller bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// Mutator targeted the wrong variant.
    TypeMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
    /// Element or todo-item index is past the end.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for ElementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => {
                write!(f, "element type mismatch: expected {expected}, found {found}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for ElementError {}

pub type ElementResult<T> = Result<T, ElementError>;

impl ContentElement {
    /// Creates an empty element of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => Self::text(""),
            ElementKind::Todo => Self::todo(),
            ElementKind::Image => Self::image(),
        }
    }

    /// Text block holding `content`.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Empty checklist block.
    pub fn todo() -> Self {
        Self::Todo(Vec::new())
    }

    /// Image block with no blob reference yet.
    pub fn image() -> Self {
        Self::Image(String::new())
    }

    /// Variant tag of this block.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Text(_) => ElementKind::Text,
            Self::Todo(_) => ElementKind::Todo,
            Self::Image(_) => ElementKind::Image,
        }
    }

    /// Returns text content for text blocks, `None` otherwise.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content.as_str()),
            _ => None,
        }
    }

    /// Returns the checklist for todo blocks, `None` otherwise.
    pub fn todo_items(&self) -> Option<&[TodoItem]> {
        match self {
            Self::Todo(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Replaces the content of a text block.
    pub fn set_text_content(&mut self, value: impl Into<String>) -> ElementResult<()> {
        match self {
            Self::Text(content) => {
                *content = value.into();
                Ok(())
            }
            other => Err(mismatch(ElementKind::Text, other)),
        }
    }

    /// Appends an empty, unchecked item to a todo block.
    pub fn append_todo_item(&mut self) -> ElementResult<()> {
        match self {
            Self::Todo(items) => {
                items.push(TodoItem::default());
                Ok(())
            }
            other => Err(mismatch(ElementKind::Todo, other)),
        }
    }

    /// Replaces the text of one checklist item.
    ///
    /// Fails on a non-todo block or an out-of-range `index`.
    pub fn set_todo_item_text(&mut self, index: usize, value: impl Into<String>) -> ElementResult<()> {
        let item = self.todo_item_mut(index)?;
        item.text = value.into();
        Ok(())
    }

    /// Sets the checked flag of one checklist item.
    pub fn set_todo_item_checked(&mut self, index: usize, checked: bool) -> ElementResult<()> {
        let item = self.todo_item_mut(index)?;
        item.checked = checked;
        Ok(())
    }

    /// Replaces the blob reference of an image block.
    pub fn set_image_content(&mut self, blob_ref: impl Into<String>) -> ElementResult<()> {
        match self {
            Self::Image(content) => {
                *content = blob_ref.into();
                Ok(())
            }
            other => Err(mismatch(ElementKind::Image, other)),
        }
    }

    fn todo_item_mut(&mut self, index: usize) -> ElementResult<&mut TodoItem> {
        match self {
            Self::Todo(items) => {
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or(ElementError::IndexOutOfRange { index, len })
            }
            other => Err(mismatch(ElementKind::Todo, other)),
        }
    }
}

/// Returns a new sequence without the element at `index`.
///
/// Keeping a note's element list non-empty is the caller's job; this only
/// guards the index itself.
pub fn remove_element_at(
    elements: &[ContentElement],
    index: usize,
) -> ElementResult<Vec<ContentElement>> {
    if index >= elements.len() {
        return Err(ElementError::IndexOutOfRange {
            index,
            len: elements.len(),
        });
    }

    let mut remaining = elements.to_vec();
    remaining.remove(index);
    Ok(remaining)
}

/// Enforces the note body shape: non-empty, with a text block first.
///
/// An empty text block is prepended when the sequence is empty or starts
/// with another variant.
pub fn normalize_elements(mut elements: Vec<ContentElement>) -> Vec<ContentElement> {
    let starts_with_text = matches!(elements.first(), Some(ContentElement::Text(_)));
    if !starts_with_text {
        elements.insert(0, ContentElement::text(""));
    }
    elements
}

fn mismatch(expected: ElementKind, found: &ContentElement) -> ElementError {
    ElementError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

//! Search and sort over a note snapshot.
//!
//! # Responsibility
//! - Filter notes by a case-insensitive substring of name or description.
//! - Order the survivors by name, size or date.
//!
//! # Invariants
//! - Pure: the input slice is never modified; a new sequence is returned.
//! - Sorting is stable, so equal keys keep their filtered order.
//! - An unrecognized sort key keeps the filtered order as-is.

use crate::model::note::Note;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static LEADING_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number regex")
});

/// Ordering applied to visible notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by name, ignoring accents and case first.
    #[default]
    Name,
    /// Ascending by the leading number of `size_label`.
    Size,
    /// Most recent `created_date` first.
    Date,
    /// Keep filtered order.
    Unsorted,
}

impl SortKey {
    /// Maps a UI sort value; anything unknown becomes `Unsorted`.
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => Self::Name,
            "size" => Self::Size,
            "date" => Self::Date,
            _ => Self::Unsorted,
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Returns the notes matching `search_term`, ordered by `sort_key`.
///
/// An empty term keeps every note.
pub fn visible_notes(notes: &[Note], search_term: &str, sort_key: SortKey) -> Vec<Note> {
    let needle = search_term.to_lowercase();
    let mut visible: Vec<Note> = notes
        .iter()
        .filter(|note| matches_search(note, needle.as_str()))
        .cloned()
        .collect();

    match sort_key {
        SortKey::Name => visible.sort_by(|a, b| collate_names(&a.name, &b.name)),
        SortKey::Size => visible.sort_by(|a, b| {
            size_magnitude(&a.size_label).total_cmp(&size_magnitude(&b.size_label))
        }),
        SortKey::Date => visible.sort_by(|a, b| b.created_date.cmp(&a.created_date)),
        SortKey::Unsorted => {}
    }

    visible
}

/// `needle` must already be lowercase.
fn matches_search(note: &Note, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    note.name.to_lowercase().contains(needle)
        || note
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(needle))
}

/// Multi-level name comparison.
///
/// Base letters decide first (`Éclair` sorts with `eclair`), then accents,
/// then case with the lowercase form first.
pub fn collate_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lowercased canonical decomposition with combining marks stripped.
fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>()
        .to_lowercase()
}

/// Leading numeric magnitude of a size label, ignoring the unit suffix.
///
/// Malformed labels count as `0`.
pub fn size_magnitude(size_label: &str) -> f64 {
    LEADING_NUMBER_RE
        .find(size_label)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

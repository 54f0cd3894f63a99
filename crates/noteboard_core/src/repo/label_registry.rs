//! Label registry.
//!
//! # Responsibility
//! - Keep the known labels in insertion order.
//! - Resolve a note tag to its display color.
//!
//! # Invariants
//! - Append-only: no rename, delete or merge.
//! - Duplicate names are accepted; lookups use the first match.

use crate::model::label::{normalize_label_name, Label, LabelColor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRegistry {
    labels: Vec<Label>,
}

impl Default for LabelRegistry {
    fn default() -> Self {
        Self::new(Label::builtin())
    }
}

impl LabelRegistry {
    /// Creates a registry seeded with `labels`, in order.
    ///
    /// Seed names are normalized like added ones; blank seeds are dropped.
    pub fn new(labels: Vec<Label>) -> Self {
        let labels = labels
            .into_iter()
            .filter_map(|label| Label::new(&label.name, label.color))
            .collect();
        Self { labels }
    }

    /// All labels in insertion order, duplicates included.
    pub fn list_labels(&self) -> &[Label] {
        &self.labels
    }

    /// Appends a label with a lowercased name.
    ///
    /// Blank names are ignored and yield `None`.
    pub fn add_label(&mut self, name: &str, color: LabelColor) -> Option<&Label> {
        let label = Label::new(name, color)?;
        self.labels.push(label);
        self.labels.last()
    }

    /// Returns the first label matching `tag`, compared after normalization.
    pub fn find(&self, tag: &str) -> Option<&Label> {
        let normalized = normalize_label_name(tag)?;
        self.labels.iter().find(|label| label.name == normalized)
    }

    /// Whether `tag` names a registered label.
    pub fn contains(&self, tag: &str) -> bool {
        self.find(tag).is_some()
    }

    /// Color of the first matching label, or `LabelColor::Gray` if none.
    pub fn resolve_color(&self, tag: &str) -> LabelColor {
        self.find(tag)
            .map(|label| label.color)
            .unwrap_or(LabelColor::Gray)
    }
}

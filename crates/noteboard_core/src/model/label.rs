//! Label model.
//!
//! # Invariants
//! - Label names are stored trimmed and lowercase.
//! - `LabelColor::Gray` is the neutral fallback for dangling tags and is not
//!   part of the selectable palette.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Display color of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelColor {
    Blue,
    Purple,
    Green,
    Yellow,
    Red,
    Pink,
    /// Neutral fallback for tags with no matching label.
    Gray,
}

impl LabelColor {
    /// Colors offered when creating a new label.
    pub const PALETTE: [LabelColor; 6] = [
        LabelColor::Blue,
        LabelColor::Purple,
        LabelColor::Green,
        LabelColor::Yellow,
        LabelColor::Red,
        LabelColor::Pink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Gray => "gray",
        }
    }
}

impl Display for LabelColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named, colored category assignable to notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: LabelColor,
}

impl Label {
    /// Builds a label with a normalized name.
    ///
    /// Returns `None` when the name is blank after trimming.
    pub fn new(name: &str, color: LabelColor) -> Option<Self> {
        normalize_label_name(name).map(|name| Self { name, color })
    }

    /// Built-in labels every board starts with.
    pub fn builtin() -> Vec<Label> {
        [
            ("work", LabelColor::Blue),
            ("personal", LabelColor::Purple),
            ("ideas", LabelColor::Green),
            ("todo", LabelColor::Yellow),
        ]
        .into_iter()
        .map(|(name, color)| Label {
            name: name.to_string(),
            color,
        })
        .collect()
    }
}

/// Normalizes one label or tag name: trimmed, lowercase, non-empty.
pub fn normalize_label_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

//! Board configuration.
//!
//! # Responsibility
//! - Carry the defaults the board substitutes during normalization.
//! - Parse and validate JSON configuration supplied by the host.
//!
//! # Invariants
//! - A validated config has a non-blank default name, and both the default
//!   and ingest tags name one of its seed labels.

use crate::model::label::{normalize_label_name, Label};
use crate::model::note::DEFAULT_NOTE_NAME;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_TAG: &str = "work";

#[derive(Debug)]
pub enum ConfigError {
    /// Input is not valid JSON for `BoardConfig`.
    Parse(serde_json::Error),
    /// Parsed values break a config invariant.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid board config: {err}"),
            Self::Invalid(message) => write!(f, "invalid board config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Defaults applied by the board facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Name used when a note is saved with a blank name.
    pub default_note_name: String,
    /// Tag of fresh drafts; also replaces unknown tags on save.
    pub default_tag: String,
    /// Tag given to notes created from dropped files.
    pub ingest_tag: String,
    /// Labels the registry is seeded with, in order.
    pub labels: Vec<Label>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_note_name: DEFAULT_NOTE_NAME.to_string(),
            default_tag: DEFAULT_TAG.to_string(),
            ingest_tag: DEFAULT_TAG.to_string(),
            labels: Label::builtin(),
        }
    }
}

impl BoardConfig {
    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(input)?;
        config.checked()
    }

    /// Normalizes label and tag names, then validates the result.
    ///
    /// Every config handed to the board goes through here.
    pub fn checked(mut self) -> Result<Self, ConfigError> {
        self.normalize();
        self.validate()?;
        Ok(self)
    }

    /// Checks the invariants on already-normalized values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_note_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_note_name must not be blank".to_string(),
            ));
        }
        for (field, tag) in [
            ("default_tag", self.default_tag.as_str()),
            ("ingest_tag", self.ingest_tag.as_str()),
        ] {
            if !self.labels.iter().any(|label| label.name == tag) {
                return Err(ConfigError::Invalid(format!(
                    "{field} `{tag}` does not name a configured label"
                )));
            }
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.default_note_name = self.default_note_name.trim().to_string();
        for tag in [&mut self.default_tag, &mut self.ingest_tag] {
            if let Some(normalized) = normalize_label_name(tag.as_str()) {
                *tag = normalized;
            }
        }
        self.labels.retain_mut(|label| match normalize_label_name(&label.name) {
            Some(name) => {
                label.name = name;
                true
            }
            None => false,
        });
    }
}

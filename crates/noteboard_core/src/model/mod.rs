//! Board domain model.
//!
//! # Responsibility
//! - Define notes, their typed content blocks and labels.
//! - Keep variant checks and body-shape rules next to the data they guard.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is permanent; there are no tombstones.

pub mod element;
pub mod label;
pub mod note;

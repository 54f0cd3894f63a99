//! Visible-notes projection.
//!
//! # Responsibility
//! - Derive the filtered, ordered note list the rendering layer consumes.
//! - Keep filtering and sorting free of repository state.

pub mod query;

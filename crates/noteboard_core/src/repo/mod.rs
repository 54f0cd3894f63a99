//! Repository layer: session-scoped note and label storage.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep collection bookkeeping out of the board facade.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`)
//!   instead of panicking on bad ids.
//! - Nothing here performs I/O.

pub mod label_registry;
pub mod note_repo;

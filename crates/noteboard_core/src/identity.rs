//! Note id generation.
//!
//! # Invariants
//! - A generator never hands out the same id twice.

use crate::model::note::NoteId;
use std::cell::Cell;
use uuid::Uuid;

/// Supplies fresh note ids.
pub trait IdGenerator {
    fn next_id(&self) -> NoteId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> NoteId {
        Uuid::new_v4()
    }
}

/// Monotonic ids starting at 1, encoded as UUIDs.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    last: Cell<u128>,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> NoteId {
        let next = self.last.get() + 1;
        self.last.set(next);
        Uuid::from_u128(next)
    }
}

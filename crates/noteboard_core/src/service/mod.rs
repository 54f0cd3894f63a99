//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository, registry and query calls into board-level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod board_service;
pub mod draft;
pub mod export;
pub mod ingest;

//! Shared test fixtures for the Notekeep workspace.
//!
//! Provides an in-process [`NoteService`] implementation
//! ([`InMemoryNoteService`]) with per-operation call counters, one-shot
//! failure injection, and a gate for holding operations in flight, plus
//! plain note fixtures. Consumed by the other crates as a dev-dependency.

mod fixtures;

pub use fixtures::*;

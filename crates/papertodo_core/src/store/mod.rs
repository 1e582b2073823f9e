//! Persistent store adapters for serialized board state.
//!
//! # Responsibility
//! - Define the load/save contract used by the board state manager.
//! - Isolate SQLite and serialization details from board orchestration.
//!
//! # Invariants
//! - An absent slot loads as an empty collection, never as an error.
//! - Read paths reject malformed persisted state instead of masking it;
//!   the fail-closed policy lives in the caller.

pub mod todo_store;

//! Board state management.
//!
//! # Responsibility
//! - Own the authoritative in-session task collection.
//! - Mirror every successful mutation to the persistent store.
//!
//! # Invariants
//! - Mutations are synchronous; there is no background persistence.
//! - Store failures never propagate out of mutation APIs.

pub mod task_board;

//! Task domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the board.
//! - Normalize raw user input into valid task text.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is trimmed and non-empty once a task exists.
//! - `created_at` is immutable after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// A single to-do entry.
///
/// The wire shape keeps `createdAt` in camel case so persisted payloads stay
/// readable next to the rest of the JSON fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID used for toggle/delete intents.
    pub id: TaskId,
    /// Trimmed user text. Immutable after creation.
    pub text: String,
    /// Completion flag, the only mutable field.
    pub completed: bool,
    /// Creation instant, serialized as an RFC 3339 string.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task with a generated stable ID.
    ///
    /// The caller is responsible for passing already-normalized text, see
    /// [`normalize_text`].
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a new open task with a caller-provided stable ID.
    ///
    /// Used by the board so ID generation stays injectable.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Normalizes raw input into task text.
///
/// Returns `None` for empty or whitespace-only input, which callers treat as
/// a silent no-op rather than an error.
pub fn normalize_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

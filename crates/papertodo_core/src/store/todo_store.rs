//! Todo store contracts, SQLite implementation and in-memory test double.
//!
//! # Responsibility
//! - Persist the whole task collection as one JSON array in a fixed
//!   key-value slot, mirroring every in-memory mutation.
//! - Reconstruct the collection on startup, including timestamps.
//!
//! # Invariants
//! - The slot holds the complete board; `save` replaces it wholesale.
//! - Loaded collections never contain duplicate task IDs.

use crate::db::DbError;
use crate::model::task::{Task, TaskId};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot key for the serialized task collection.
pub const STORAGE_KEY: &str = "paper-todos";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for board persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    InvalidData(String),
    WriteRejected(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted board data: {message}"),
            Self::WriteRejected(reason) => write!(f, "store rejected write: {reason}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::WriteRejected(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store interface for the serialized task collection.
pub trait TodoStore {
    /// Loads the full collection; an absent slot yields an empty one.
    fn load(&self) -> StoreResult<Vec<Task>>;
    /// Replaces the slot with the given collection.
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;
}

impl<T: TodoStore + ?Sized> TodoStore for &T {
    fn load(&self) -> StoreResult<Vec<Task>> {
        (**self).load()
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        (**self).save(tasks)
    }
}

/// SQLite-backed todo store over the `kv_store` table.
pub struct SqliteTodoStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoStore for SqliteTodoStore<'_> {
    fn load(&self) -> StoreResult<Vec<Task>> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match blob {
            Some(blob) => decode_tasks(&blob),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let blob = encode_tasks(tasks)?;

        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![STORAGE_KEY, blob],
        )?;

        Ok(())
    }
}

/// In-memory todo store holding the same serialized blob as SQLite.
///
/// Keeps the serialization round-trip honest in tests and supports a
/// poisoned mode where every write fails, for exercising the board's
/// swallow-on-write-failure contract.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    slot: RefCell<Option<String>>,
    reject_writes: Cell<bool>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose slot already holds a raw blob, valid or not.
    pub fn with_raw_value(blob: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(blob.into())),
            reject_writes: Cell::new(false),
        }
    }

    /// Makes every subsequent `save` fail, mimicking a full backing store.
    pub fn reject_writes(&self) {
        self.reject_writes.set(true);
    }

    /// Returns the raw slot contents, if any.
    pub fn raw_value(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TodoStore for MemoryTodoStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        match self.slot.borrow().as_deref() {
            Some(blob) => decode_tasks(blob),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        if self.reject_writes.get() {
            return Err(StoreError::WriteRejected("memory store is read-only"));
        }
        *self.slot.borrow_mut() = Some(encode_tasks(tasks)?);
        Ok(())
    }
}

fn encode_tasks(tasks: &[Task]) -> StoreResult<String> {
    serde_json::to_string(tasks)
        .map_err(|err| StoreError::InvalidData(format!("task collection failed to encode: {err}")))
}

fn decode_tasks(blob: &str) -> StoreResult<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(blob).map_err(|err| {
        StoreError::InvalidData(format!("malformed payload at `{STORAGE_KEY}`: {err}"))
    })?;

    let mut seen: HashSet<TaskId> = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        if !seen.insert(task.id) {
            return Err(StoreError::InvalidData(format!(
                "duplicate task id `{}` at `{STORAGE_KEY}`",
                task.id
            )));
        }
    }

    Ok(tasks)
}

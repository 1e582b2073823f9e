//! Task board state manager.
//!
//! # Responsibility
//! - Apply add/toggle/delete intents to the in-session collection.
//! - Write through to the store after every successful mutation.
//!
//! # Invariants
//! - Insertion order is newest-first; new tasks prepend.
//! - A load failure degrades to an empty board instead of failing startup.
//! - Log lines carry metadata only, never raw task text.

use crate::model::task::{normalize_text, Task, TaskId};
use crate::store::todo_store::TodoStore;
use crate::view::BoardView;
use log::{debug, info, warn};
use uuid::Uuid;

/// Injectable ID source so the board stays deterministic under test.
pub trait IdGenerator {
    fn next_id(&mut self) -> TaskId;
}

/// Production ID source backed by random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TaskId {
        Uuid::new_v4()
    }
}

/// Authoritative in-session task collection with write-through persistence.
///
/// The store holds a serialized mirror; during a session this board is the
/// source of truth.
pub struct TaskBoard<S: TodoStore, G: IdGenerator = UuidIdGenerator> {
    store: S,
    ids: G,
    tasks: Vec<Task>,
}

impl<S: TodoStore> TaskBoard<S> {
    /// Opens a board from the store with the production ID source.
    pub fn open(store: S) -> Self {
        Self::open_with_ids(store, UuidIdGenerator)
    }
}

impl<S: TodoStore, G: IdGenerator> TaskBoard<S, G> {
    /// Opens a board from the store, failing closed to an empty collection
    /// when persisted state is absent or unreadable.
    pub fn open_with_ids(store: S, ids: G) -> Self {
        let tasks = match store.load() {
            Ok(tasks) => {
                info!(
                    "event=board_load module=board status=ok count={}",
                    tasks.len()
                );
                tasks
            }
            Err(err) => {
                warn!("event=board_load module=board status=error fallback=empty error={err}");
                Vec::new()
            }
        };

        Self { store, ids, tasks }
    }

    /// Adds a task from raw input, newest first.
    ///
    /// Empty or whitespace-only input is a silent no-op returning `None`.
    pub fn add(&mut self, input: &str) -> Option<TaskId> {
        let Some(text) = normalize_text(input) else {
            debug!("event=task_add module=board status=rejected reason=empty_text");
            return None;
        };

        let task = Task::with_id(self.ids.next_id(), text);
        let id = task.id;
        self.tasks.insert(0, task);
        info!(
            "event=task_add module=board status=ok id={id} count={}",
            self.tasks.len()
        );
        self.persist();
        Some(id)
    }

    /// Flips the completion flag of the matching task.
    ///
    /// Returns `false` (no-op) when the ID is unknown.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_toggle module=board status=noop id={id}");
            return false;
        };

        task.toggle();
        info!(
            "event=task_toggle module=board status=ok id={id} completed={}",
            task.completed
        );
        self.persist();
        true
    }

    /// Removes the matching task.
    ///
    /// Returns `false` (no-op) when the ID is unknown.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(position) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=task_delete module=board status=noop id={id}");
            return false;
        };

        self.tasks.remove(position);
        info!(
            "event=task_delete module=board status=ok id={id} count={}",
            self.tasks.len()
        );
        self.persist();
        true
    }

    /// Returns the full collection, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Derives the active/completed partitions of the current collection.
    pub fn view(&self) -> BoardView<'_> {
        BoardView::derive(&self.tasks)
    }

    // Write-through mirror. Failures are logged and swallowed so a full or
    // broken backing store never breaks the running session.
    fn persist(&self) {
        if let Err(err) = self.store.save(&self.tasks) {
            warn!(
                "event=board_save module=board status=error count={} error={err}",
                self.tasks.len()
            );
        }
    }
}

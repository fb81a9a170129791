//! The task store: canonical state plus its persistence adapter.
//!
//! `TaskStore` is the single writer. Each mutation applies the pure
//! transition from `StoreState` first, then persists the whole state. When
//! the persistence write fails the error propagates, but the in-memory
//! state keeps the applied mutation, so only durability is lost.

use chrono::Utc;
use tracing::debug;

use crate::error::Result;
use crate::storage::StateFile;
use crate::task::{Filter, NewTask, StoreState, TaskPatch};

#[derive(Debug)]
pub struct TaskStore {
    state: StoreState,
    file: StateFile,
}

impl TaskStore {
    /// Load the store from its state file. A missing file yields an empty
    /// store with the default filter.
    pub fn load(file: StateFile) -> Result<Self> {
        let state = file.load()?;
        debug!(tasks = state.tasks.len(), path = %file.path().display(), "store loaded");
        Ok(Self { state, file })
    }

    /// Point-in-time copy of the current state. Callers own the copy and
    /// cannot affect the store through it.
    pub fn snapshot(&self) -> StoreState {
        self.state.clone()
    }

    pub fn state_file(&self) -> &StateFile {
        &self.file
    }

    /// Create a task and return its id.
    pub fn add(&mut self, input: NewTask) -> Result<String> {
        let id = self.state.add(input, Utc::now())?;
        debug!(%id, "task added");
        self.persist()?;
        Ok(id)
    }

    /// Flip completion on a task. Unknown ids are a no-op and return false.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let changed = self.state.toggle(id);
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Patch a task in place. Unknown ids are a no-op and return false.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Result<bool> {
        let changed = self.state.update(id, patch)?;
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Remove a task. Unknown ids are a no-op and return false.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let changed = self.state.delete(id);
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    pub fn set_filter(&mut self, filter: Filter) -> Result<()> {
        self.state.set_filter(filter);
        self.persist()
    }

    /// Remove every completed task. Returns how many were dropped.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let removed = self.state.clear_completed();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    fn persist(&self) -> Result<()> {
        self.file.save(&self.state)
    }
}

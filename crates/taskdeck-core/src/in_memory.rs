use std::sync::{Arc, RwLock};

use crate::error::{StoreError, StoreResult};
use crate::store::TaskStore;
use crate::task::Task;

/// Task store keeping the collection in process memory.
///
/// Cloning the store clones the handle, not the data: all clones share
/// one collection behind a read-write lock. Useful for tests and for
/// embedding the task operations without touching the filesystem.
#[derive(Clone)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn load_all(&self) -> StoreResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(|e| StoreError::LockPoisoned {
            reason: format!("Lock poisoned: {e}"),
        })?;
        Ok(tasks.clone())
    }

    fn save_all(&mut self, tasks: &[Task]) -> StoreResult<()> {
        let mut guard = self.tasks.write().map_err(|e| StoreError::LockPoisoned {
            reason: format!("Lock poisoned: {e}"),
        })?;
        *guard = tasks.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = InMemoryTaskStore::new();
        assert_eq!(store.load_all().unwrap(), Vec::new());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryTaskStore::new();
        let tasks = vec![Task::new(1, "a", ""), Task::new(2, "b", "desc")];
        store.save_all(&tasks).unwrap();
        assert_eq!(store.load_all().unwrap(), tasks);
    }

    #[test]
    fn clones_share_the_same_collection() {
        let mut store = InMemoryTaskStore::new();
        let viewer = store.clone();

        store.save_all(&[Task::new(1, "shared", "")]).unwrap();

        let seen = viewer.load_all().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].title, "shared");
    }
}

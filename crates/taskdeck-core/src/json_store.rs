use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::store::TaskStore;
use crate::task::Task;

/// File-backed task store persisting the collection as a pretty-printed
/// JSON array.
///
/// The handle holds only the resource location; every operation performs
/// a fresh read-mutate-write cycle, so no state survives between calls.
/// Saves replace the file atomically (write to a sibling temporary file,
/// then rename into place), which keeps a crash from leaving a partially
/// written collection behind.
///
/// # Concurrent Access
///
/// The design assumes exactly one process uses a given file at a time.
/// Two processes racing on the same path can lose updates (last writer
/// wins). Callers needing multi-process safety must add external
/// serialization such as file locking.
///
/// # Corrupt Content
///
/// A file that exists but does not parse is treated as an empty
/// collection rather than an error. The unreadable bytes are first copied
/// aside to `<name>.corrupted.<timestamp>` so the next save cannot
/// silently destroy them.
pub struct JsonTaskStore {
    path: PathBuf,
}

impl JsonTaskStore {
    /// Create a store handle for the given file path. The file is not
    /// touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_corrupt_file(&self) {
        if let Some(parent) = self.path.parent() {
            let backup = parent.join(format!(
                "{}.corrupted.{}",
                self.path.file_name().unwrap_or_default().to_string_lossy(),
                chrono::Utc::now().timestamp()
            ));
            let _ = fs::copy(&self.path, backup);
        }
    }
}

impl TaskStore for JsonTaskStore {
    fn load_all(&self) -> StoreResult<Vec<Task>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = ?self.path, "Task file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::error!(path = ?self.path, error = %e, "Failed to read task file");
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        match serde_json::from_str::<Vec<Task>>(&contents) {
            Ok(tasks) => {
                tracing::debug!(path = ?self.path, count = tasks.len(), "Loaded task collection");
                Ok(tasks)
            }
            Err(e) => {
                tracing::error!(
                    path = ?self.path,
                    error = %e,
                    "Failed to parse task file, treating it as empty"
                );
                self.backup_corrupt_file();
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&mut self, tasks: &[Task]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(tasks)
            .map_err(|e| StoreError::Serialize { source: e })?;

        let tmp_path = self.path.with_extension("tmp");

        fs::write(&tmp_path, json).map_err(|e| {
            tracing::error!(path = ?tmp_path, error = %e, "Failed to write temporary task file");
            StoreError::Io {
                path: tmp_path.clone(),
                source: e,
            }
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            tracing::error!(
                from = ?tmp_path,
                to = ?self.path,
                error = %e,
                "Failed to move task file into place"
            );
            StoreError::Io {
                path: self.path.clone(),
                source: e,
            }
        })?;

        tracing::debug!(path = ?self.path, count = tasks.len(), "Persisted task collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonTaskStore {
        JsonTaskStore::new(dir.path().join("tasks.json"))
    }

    #[test]
    fn missing_file_loads_as_empty_collection() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load_all().unwrap(), Vec::new());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let mut second = Task::new(2, "Second", "with description");
        second.status = TaskStatus::Done;
        let tasks = vec![Task::new(1, "First", ""), second];

        store.save_all(&tasks).unwrap();
        assert_eq!(store.load_all().unwrap(), tasks);
    }

    #[test]
    fn save_writes_pretty_printed_records() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save_all(&[Task::new(1, "Buy milk", "")]).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert!(on_disk.contains('\n'), "expected indented output");
        for field in ["\"id\"", "\"title\"", "\"description\"", "\"status\""] {
            assert!(on_disk.contains(field), "missing {field} in {on_disk}");
        }
    }

    #[test]
    fn save_leaves_no_temporary_file_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save_all(&[Task::new(1, "t", "")]).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "stray temp files: {leftovers:?}");
    }

    #[test]
    fn corrupt_file_loads_as_empty_and_is_backed_up() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "this is not json {{{").unwrap();

        assert_eq!(store.load_all().unwrap(), Vec::new());

        let backups: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("tasks.json.corrupted."))
            .collect();
        assert_eq!(backups.len(), 1, "expected one backup, got {backups:?}");
    }

    #[test]
    fn save_replaces_prior_content_entirely() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store
            .save_all(&[Task::new(1, "old", ""), Task::new(2, "older", "")])
            .unwrap();
        store.save_all(&[Task::new(5, "only", "")]).unwrap();

        let tasks = store.load_all().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 5);
    }
}

use crate::error::StoreResult;
use crate::filter::TaskFilter;
use crate::task::{Task, TaskStatus};

/// Compute the id the next created task will receive.
///
/// Ids are derived from the collection itself, not from an external
/// counter: `1` for an empty collection, otherwise one past the current
/// maximum. Deleting the highest-id task therefore frees that number for
/// the next add, so the sequence is not monotonic across deletions.
/// A collection already holding `u64::MAX` saturates there instead of
/// wrapping to `0`.
///
/// # Example
///
/// ```rust
/// use taskdeck_core::{Task, next_id};
///
/// assert_eq!(next_id(&[]), 1);
/// let tasks = vec![Task::new(5, "a", ""), Task::new(2, "b", "")];
/// assert_eq!(next_id(&tasks), 6);
/// ```
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks
        .iter()
        .map(|task| task.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Operations every task store backend provides.
///
/// The contract is transactional per call: each mutating operation loads
/// the entire collection, applies one change and persists the whole
/// collection back. Nothing is cached across calls, so two handles on the
/// same resource always observe each other's completed writes.
///
/// Backends only implement [`load_all`](TaskStore::load_all) and
/// [`save_all`](TaskStore::save_all); the mutations are provided on top
/// of those two and never write when nothing changed.
pub trait TaskStore: Send + Sync {
    /// Load the full collection in stored order. An absent resource is an
    /// empty collection, not an error.
    fn load_all(&self) -> StoreResult<Vec<Task>>;

    /// Persist the full collection, replacing all prior content.
    fn save_all(&mut self, tasks: &[Task]) -> StoreResult<()>;

    /// Create a task with the next free id and status `todo`, append it
    /// and persist. Returns the created task.
    fn add(&mut self, title: &str, description: &str) -> StoreResult<Task> {
        let mut tasks = self.load_all()?;
        let task = Task::new(next_id(&tasks), title, description);
        tasks.push(task.clone());
        self.save_all(&tasks)?;
        Ok(task)
    }

    /// Replace title and description of the task with the given id,
    /// leaving its status untouched. Returns `false` without writing when
    /// no task matches.
    fn update(&mut self, id: u64, title: &str, description: &str) -> StoreResult<bool> {
        let mut tasks = self.load_all()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.title = title.to_string();
        task.description = description.to_string();
        self.save_all(&tasks)?;
        Ok(true)
    }

    /// Remove every task with the given id (at most one in a well-formed
    /// collection). Returns `false` without writing when nothing matched.
    fn delete(&mut self, id: u64) -> StoreResult<bool> {
        let mut tasks = self.load_all()?;
        let count_before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == count_before {
            return Ok(false);
        }
        self.save_all(&tasks)?;
        Ok(true)
    }

    /// Set the status of the task with the given id. Returns `false`
    /// without writing when no task matches.
    fn set_status(&mut self, id: u64, status: TaskStatus) -> StoreResult<bool> {
        let mut tasks = self.load_all()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.status = status;
        self.save_all(&tasks)?;
        Ok(true)
    }

    /// Load the subsequence of tasks passing the filter, preserving
    /// stored order.
    fn list(&self, filter: TaskFilter) -> StoreResult<Vec<Task>> {
        let mut tasks = self.load_all()?;
        tasks.retain(|task| filter.matches(task.status));
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_of_empty_collection_is_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn next_id_is_one_past_the_maximum() {
        let tasks = vec![Task::new(5, "five", ""), Task::new(2, "two", "")];
        assert_eq!(next_id(&tasks), 6);
    }

    #[test]
    fn next_id_ignores_collection_order() {
        let tasks = vec![
            Task::new(3, "c", ""),
            Task::new(9, "i", ""),
            Task::new(1, "a", ""),
        ];
        assert_eq!(next_id(&tasks), 10);
    }

    #[test]
    fn next_id_saturates_at_the_id_ceiling() {
        let tasks = vec![Task::new(u64::MAX, "ceiling", "")];
        assert_eq!(next_id(&tasks), u64::MAX);
    }
}

use serde::{Deserialize, Serialize};

/// Lifecycle tag of a task.
///
/// The set is closed: a task is either still to do, being worked on, or
/// finished. On the wire the variants are spelled `todo`, `in_progress`
/// and `done`.
///
/// # Example
///
/// ```rust
/// use taskdeck_core::TaskStatus;
///
/// let status: TaskStatus = "in_progress".parse().unwrap();
/// assert_eq!(status, TaskStatus::InProgress);
/// assert!("blocked".parse::<TaskStatus>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Get the wire spelling of the status.
    pub fn name(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// Try to parse a wire spelling into a status.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "todo" => Some(TaskStatus::Todo),
            "in_progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    /// Get all statuses in lifecycle order.
    pub fn all() -> &'static [TaskStatus] {
        &[TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = TaskStatusError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| TaskStatusError::Unknown {
            name: name.to_string(),
        })
    }
}

/// Errors that can occur when parsing a `TaskStatus`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskStatusError {
    /// The spelling is not one of `todo`, `in_progress`, `done`.
    #[error("unknown task status '{name}' (expected todo, in_progress or done)")]
    Unknown { name: String },
}

/// One trackable unit of work.
///
/// A task is identified by a collection-unique integer id that never
/// changes once assigned. The core performs no validation of `title` or
/// `description`; empty strings are accepted.
///
/// Persisted records carry exactly these four fields. Deserialization
/// defaults a missing `status` to [`TaskStatus::Todo`] and missing
/// `title`/`description` to empty strings; a record without an `id` does
/// not parse at all and is handled by the store's corrupt-resource rule.
///
/// # Example
///
/// ```rust
/// use taskdeck_core::{Task, TaskStatus};
///
/// let task = Task::new(1, "Buy milk", "2 litres, lactose free");
/// assert_eq!(task.status, TaskStatus::Todo);
/// assert_eq!(
///     task.to_string(),
///     "ID: 1 | Title: Buy milk | Description: 2 litres, lactose free | Status: todo"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    /// Create a task with the given id; status starts as [`TaskStatus::Todo`].
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Todo,
        }
    }
}

impl std::fmt::Display for Task {
    /// Single-line rendering shared by every surface that prints a task.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Title: {} | Description: {} | Status: {}",
            self.id, self.title, self.description, self.status
        )
    }
}

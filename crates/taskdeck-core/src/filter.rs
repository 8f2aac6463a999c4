use crate::task::TaskStatus;

/// Named predicate selecting a subset of tasks for listing.
///
/// `NotDone` is the complement of `Done`: it admits both `todo` and
/// `in_progress` tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskFilter {
    All,
    Done,
    NotDone,
    InProgress,
}

impl TaskFilter {
    /// Get the wire spelling of the filter.
    pub fn name(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Done => "done",
            TaskFilter::NotDone => "not_done",
            TaskFilter::InProgress => "in_progress",
        }
    }

    /// Try to parse a wire spelling into a filter.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(TaskFilter::All),
            "done" => Some(TaskFilter::Done),
            "not_done" => Some(TaskFilter::NotDone),
            "in_progress" => Some(TaskFilter::InProgress),
            _ => None,
        }
    }

    /// Parse a filter spelling, falling back to [`TaskFilter::All`] for
    /// anything unrecognized. Listing with an unknown filter silently
    /// behaves as `all`; surfaces that should reject instead use the
    /// strict [`FromStr`](std::str::FromStr) implementation.
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or(TaskFilter::All)
    }

    /// Whether a task with the given status passes this filter.
    pub fn matches(&self, status: TaskStatus) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Done => status == TaskStatus::Done,
            TaskFilter::NotDone => status != TaskStatus::Done,
            TaskFilter::InProgress => status == TaskStatus::InProgress,
        }
    }
}

impl Default for TaskFilter {
    fn default() -> Self {
        TaskFilter::All
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for TaskFilter {
    type Err = TaskFilterError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| TaskFilterError::Unknown {
            name: name.to_string(),
        })
    }
}

/// Errors that can occur when strictly parsing a `TaskFilter`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskFilterError {
    /// The spelling is not one of `all`, `done`, `not_done`, `in_progress`.
    #[error("unknown task filter '{name}' (expected all, done, not_done or in_progress)")]
    Unknown { name: String },
}

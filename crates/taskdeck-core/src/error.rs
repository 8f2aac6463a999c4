use std::path::PathBuf;

/// Errors surfaced by task store operations.
///
/// An absent backing file is not an error (the store treats it as an
/// empty collection), and neither is unparsable content; see
/// [`JsonTaskStore`](crate::JsonTaskStore) for the corrupt-resource rule.
/// What remains are genuine I/O and encoding failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading, writing or replacing the backing resource failed.
    #[error("task store I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The task collection could not be encoded for persistence.
    #[error("failed to encode task collection: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// A synchronization primitive guarding an in-memory backend was
    /// poisoned by a panicking writer.
    #[error("task store lock poisoned: {reason}")]
    LockPoisoned { reason: String },
}

/// Result type alias for task store operations.
pub type StoreResult<T> = Result<T, StoreError>;

//! # Taskdeck Core
//!
//! Core task tracking primitives for the Taskdeck tool: the task record,
//! status and filter vocabularies, and the persistent store operations
//! that every frontend builds on.
//!
//! The store is a trait seam. [`JsonTaskStore`] persists the collection
//! as a pretty-printed JSON file and is what the CLI uses;
//! [`InMemoryTaskStore`] keeps everything in process memory for tests
//! and embedding. Both share the same operation semantics because the
//! operations are default trait methods layered over `load_all` and
//! `save_all`.
//!
//! ## Quick Start
//!
//! ```rust
//! use taskdeck_core::{InMemoryTaskStore, TaskFilter, TaskStatus, TaskStore};
//!
//! let mut store = InMemoryTaskStore::new();
//!
//! let task = store.add("Buy milk", "2 liters, whole")?;
//! assert_eq!(task.id, 1);
//!
//! store.set_status(task.id, TaskStatus::Done)?;
//!
//! let done = store.list(TaskFilter::Done)?;
//! assert_eq!(done.len(), 1);
//! # Ok::<(), taskdeck_core::StoreError>(())
//! ```

pub mod error;
pub mod filter;
pub mod in_memory;
pub mod json_store;
pub mod store;
pub mod task;

pub use error::{StoreError, StoreResult};
pub use filter::{TaskFilter, TaskFilterError};
pub use in_memory::InMemoryTaskStore;
pub use json_store::JsonTaskStore;
pub use store::{TaskStore, next_id};
pub use task::{Task, TaskStatus, TaskStatusError};

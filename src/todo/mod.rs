//! Core task-management domain: folders, tasks, and the store that owns
//! them.
//!
//! Split into submodules for better organization:
//! - `folder`: folder entity and its id
//! - `task`: task entity, its id, and the local clock helper
//! - `store`: the mutable store, including the two-step delete flow
//! - `queries`: read-only projections over the store

mod folder;
mod queries;
mod store;
mod task;

// Re-export all public types
pub use folder::{Folder, FolderId};
pub use store::{DRAG_DELETE_THRESHOLD, DeleteFlow, TodoStore};
pub use task::{Task, TaskId, local_now};

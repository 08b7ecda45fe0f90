//! In-memory task and folder store for a single-user todo app.
//!
//! This library is the state-owning core of an on-device todo application:
//! folders group tasks, tasks carry deadlines and a completion flag, and a
//! single [`TodoStore`] owns both collections. A presentation layer (tabs,
//! gestures, sheets) is expected to sit on top, forward user intents as
//! store calls, and re-read projections whenever the store signals a
//! change.
//!
//! # Architecture
//!
//! - **Domain layer**: `todo` module with the folder/task entities and the
//!   store holding all mutations and projections
//! - **Notification layer**: `subscription` module, a listener registry
//!   invoked once after every successful mutation
//! - **Support**: `palette` (folder colors) and `seed` (optional startup
//!   data)
//!
//! All state lives in memory and is lost when the process exits. There is
//! no network surface and no background work; every call completes
//! synchronously on the caller's thread.
//!
//! # Example
//!
//! ```
//! use ddl_todo::{TodoStore, default_palette, local_now};
//!
//! let mut store = TodoStore::new();
//! let palette = default_palette();
//! let health = store.add_folder("Health", palette[0].clone());
//! let task = store.add_task("Drink water", "", local_now(), health);
//!
//! assert_eq!(store.count_tasks_in_folder(health), 1);
//! assert!(store.toggle_task(task).is_some());
//! assert_eq!(store.count_tasks_in_folder(health), 0);
//! ```

mod palette;
mod seed;
mod subscription;
mod todo;

// Re-export commonly used types
pub use palette::{ColorHex, default_palette};
pub use seed::{FolderSeed, SeedData, TaskSeed, sample_seed};
pub use subscription::{ChangeNotifier, SubscriptionId};
pub use todo::{
    DRAG_DELETE_THRESHOLD, DeleteFlow, Folder, FolderId, Task, TaskId, TodoStore, local_now,
};

//! Common test utilities for integration tests

use ddl_todo::{FolderId, TodoStore, sample_seed};

/// Create a store pre-populated with the first-launch dataset.
pub fn seeded_store() -> TodoStore {
    TodoStore::with_seed(sample_seed())
}

/// Look up a folder id by display name.
pub fn folder_named(store: &TodoStore, name: &str) -> FolderId {
    store
        .folders()
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.id)
        .unwrap_or_else(|| panic!("no folder named '{}'", name))
}

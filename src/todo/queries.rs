//! Read-only projections over the store
//!
//! Every query is a snapshot taken at call time. Nothing here mutates the
//! collections or fires notifications; the one piece of writable state is
//! the dangling-lookup diagnostic counter.

use crate::todo::folder::{Folder, FolderId};
use crate::todo::store::TodoStore;
use crate::todo::task::{Task, TaskId};

impl TodoStore {
    /// All folders in creation order.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// All tasks in creation order, across every folder.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a folder by its id.
    pub fn find_folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// Find a task by its id.
    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The folder a task belongs to.
    ///
    /// Returns `None` when the task references a folder that no longer
    /// exists; the caller decides how to render that. The dangling case
    /// is also logged and counted (see
    /// [`dangling_folder_lookups`](Self::dangling_folder_lookups)), since
    /// it is the one place a referential-integrity bug would surface.
    pub fn folder_for(&self, task: &Task) -> Option<&Folder> {
        let found = self.find_folder(task.folder_id);
        if found.is_none() {
            self.dangling_folder_lookups
                .set(self.dangling_folder_lookups.get() + 1);
            tracing::warn!(
                task = %task.id,
                folder = %task.folder_id,
                "task references a folder that no longer exists"
            );
        }
        found
    }

    /// Every task in the given folder, in insertion order.
    ///
    /// A snapshot at call time, not a subscription; re-read after the
    /// next change notification.
    pub fn tasks_for_folder(&self, id: FolderId) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.folder_id == id).collect()
    }

    /// Number of OUTSTANDING tasks in the folder.
    ///
    /// Completed tasks are excluded: this is the badge on the folder
    /// card, which shows how much is left to do, not how much the folder
    /// holds in total.
    pub fn count_tasks_in_folder(&self, id: FolderId) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.folder_id == id && !t.is_completed)
            .count()
    }

    /// Total number of tasks across all folders.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Total number of folders.
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }
}

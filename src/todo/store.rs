use crate::palette::ColorHex;
use crate::seed::SeedData;
use crate::subscription::{ChangeNotifier, SubscriptionId};
use crate::todo::folder::{Folder, FolderId};
use crate::todo::task::{Task, TaskId, local_now};
use chrono::NaiveDateTime;
use std::cell::Cell;

/// Released drag displacement, in points, past which a marked folder
/// advances to the delete-confirmation dialog.
///
/// The gesture handler compares each axis strictly: a drag released at
/// exactly this distance snaps back without confirming.
pub const DRAG_DELETE_THRESHOLD: f64 = 50.0;

/// Progress of the two-step folder delete.
///
/// A long-press drag marks a folder (`Pending`, trash-can overlay shown);
/// releasing the drag past [`DRAG_DELETE_THRESHOLD`] raises the
/// confirmation dialog (`Confirming`); confirming or cancelling returns
/// the flow to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteFlow {
    Idle,
    Pending(FolderId),
    Confirming(FolderId),
}

/// Sole owner of the folder and task collections.
///
/// Every mutation passes through this store and every read is a derived,
/// read-only projection (see the query methods in `queries.rs`). After
/// each successful mutation the store invokes its registered listeners
/// exactly once; a no-op (toggling a missing task, cancelling an idle
/// delete flow) does not notify.
///
/// Nothing here returns an error. Failure modes degrade to `None` or to
/// doing nothing, which keeps a rendering layer alive no matter what it
/// passes in.
pub struct TodoStore {
    /// All folders in creation order.
    ///
    /// Vec keeps insertion order, which is the order the folder grid and
    /// every by-folder projection render in.
    pub(crate) folders: Vec<Folder>,

    /// All tasks in creation order, across every folder.
    pub(crate) tasks: Vec<Task>,

    /// Counter backing [`FolderId`] assignment; never reset or reused.
    folder_counter: u32,

    /// Counter backing [`TaskId`] assignment; never reset or reused.
    task_counter: u32,

    /// Folder highlighted in the folder grid, if any.
    selected_folder: Option<FolderId>,

    /// Where the drag-to-delete gesture currently stands.
    delete_flow: DeleteFlow,

    /// Listener registry; fired once after each successful mutation.
    notifier: ChangeNotifier,

    /// How many times a folder lookup hit a dangling reference.
    ///
    /// Interior mutability because lookups take `&self`; the store is
    /// single-threaded so a plain `Cell` suffices.
    pub(crate) dangling_folder_lookups: Cell<u64>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            tasks: Vec::new(),
            folder_counter: 0,
            task_counter: 0,
            selected_folder: None,
            delete_flow: DeleteFlow::Idle,
            notifier: ChangeNotifier::new(),
            dangling_folder_lookups: Cell::new(0),
        }
    }
}

impl TodoStore {
    /// Create a store with empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated through the normal mutation path.
    ///
    /// Seed tasks get an empty description and a deadline of "now", the
    /// same defaults the quick-add form applies. A task seed pointing at
    /// a folder index that does not exist is skipped.
    pub fn with_seed(seed: SeedData) -> Self {
        let mut store = Self::new();
        let mut folder_ids = Vec::with_capacity(seed.folders.len());
        for folder in seed.folders {
            folder_ids.push(store.add_folder(folder.name, folder.color));
        }
        for task in seed.tasks {
            if let Some(&folder_id) = folder_ids.get(task.folder) {
                store.add_task(task.title, String::new(), local_now(), folder_id);
            }
        }
        store
    }

    /// Generate a new unique task ID
    fn next_task_id(&mut self) -> TaskId {
        self.task_counter += 1;
        TaskId(self.task_counter)
    }

    /// Generate a new unique folder ID
    fn next_folder_id(&mut self) -> FolderId {
        self.folder_counter += 1;
        FolderId(self.folder_counter)
    }

    fn notify(&mut self) {
        self.notifier.notify_all();
    }

    // Listener registration. Registration is not a mutation of domain
    // state and does not itself notify.

    /// Register a change listener; see [`ChangeNotifier::subscribe`].
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    /// Deregister a change listener; see [`ChangeNotifier::unsubscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Create a task and append it to the collection.
    ///
    /// The new task starts incomplete with `created_at` taken from the
    /// local clock. `folder_id` is stored as given; the store does not
    /// check that the folder exists.
    ///
    /// # Returns
    /// The id of the new task.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: NaiveDateTime,
        folder_id: FolderId,
    ) -> TaskId {
        let id = self.next_task_id();
        self.tasks.push(Task {
            id,
            title: title.into(),
            description: description.into(),
            deadline,
            is_completed: false,
            folder_id,
            created_at: local_now(),
        });
        tracing::debug!(task = %id, folder = %folder_id, "task added");
        self.notify();
        id
    }

    /// Create a folder and append it to the collection.
    ///
    /// # Returns
    /// The id of the new folder.
    pub fn add_folder(&mut self, name: impl Into<String>, color: ColorHex) -> FolderId {
        let id = self.next_folder_id();
        self.folders.push(Folder {
            id,
            name: name.into(),
            color,
        });
        tracing::debug!(folder = %id, "folder added");
        self.notify();
        id
    }

    /// Flip the completion flag of the task with the given id.
    ///
    /// # Returns
    /// `Some(())` if a task matched; `None` (and no notification) when no
    /// task with that id exists.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<()> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.is_completed = !task.is_completed;
        let completed = task.is_completed;
        tracing::debug!(task = %id, completed, "task toggled");
        self.notify();
        Some(())
    }

    /// Replace the stored task matching `task.id` with the given fields.
    ///
    /// This is a full replace, not a field-level patch: every field of
    /// `task` wins, except `folder_id`, which is overridden with
    /// `new_folder_id`. The task keeps its position in insertion order.
    ///
    /// # Returns
    /// The displaced task if one matched; `None` (and no notification)
    /// when no task with that id exists.
    pub fn update_task(&mut self, task: Task, new_folder_id: FolderId) -> Option<Task> {
        let slot = self.tasks.iter_mut().find(|t| t.id == task.id)?;
        let mut incoming = task;
        incoming.folder_id = new_folder_id;
        let previous = std::mem::replace(slot, incoming);
        tracing::debug!(task = %previous.id, folder = %new_folder_id, "task updated");
        self.notify();
        Some(previous)
    }

    /// Delete a folder and every task that references it.
    ///
    /// Listeners observe the cascade as a single change. Tasks referencing
    /// the id are swept even when the folder itself is already gone, which
    /// doubles as cleanup for dangling references.
    ///
    /// # Returns
    /// The removed folder, or `None` if no folder with that id exists.
    pub fn delete_folder(&mut self, id: FolderId) -> Option<Folder> {
        let (removed, changed) = self.remove_folder_cascade(id);
        if changed {
            self.notify();
        }
        removed
    }

    /// Cascade removal shared by [`delete_folder`](Self::delete_folder)
    /// and [`confirm_folder_deletion`](Self::confirm_folder_deletion).
    /// Does not notify; callers decide how many changes they batched.
    /// The flag reports whether anything observable changed.
    fn remove_folder_cascade(&mut self, id: FolderId) -> (Option<Folder>, bool) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.folder_id != id);
        let swept = before - self.tasks.len();

        let removed = self
            .folders
            .iter()
            .position(|f| f.id == id)
            .map(|index| self.folders.remove(index));

        let mut changed = removed.is_some() || swept > 0;

        // State referencing the folder must not outlive it
        if self.selected_folder == Some(id) {
            self.selected_folder = None;
            changed = true;
        }
        match self.delete_flow {
            DeleteFlow::Pending(marked) | DeleteFlow::Confirming(marked) if marked == id => {
                self.delete_flow = DeleteFlow::Idle;
                changed = true;
            }
            _ => {}
        }

        if removed.is_some() || swept > 0 {
            tracing::debug!(folder = %id, swept_tasks = swept, "folder deleted");
        }
        (removed, changed)
    }

    /// Change which folder is highlighted in the folder grid.
    ///
    /// Passing the current selection again is a no-op and does not
    /// notify.
    pub fn select_folder(&mut self, selection: Option<FolderId>) {
        if self.selected_folder == selection {
            return;
        }
        self.selected_folder = selection;
        self.notify();
    }

    /// The folder currently highlighted in the folder grid, if any.
    pub fn selected_folder(&self) -> Option<FolderId> {
        self.selected_folder
    }

    // Two-step folder delete. The gesture layer reports drag progress and
    // the dialog outcome; the store owns the state in between.

    /// Mark a folder as the drag-to-delete candidate.
    ///
    /// Called on every drag movement; re-marking the already-pending
    /// folder does not re-notify.
    pub fn mark_folder_for_deletion(&mut self, id: FolderId) {
        if self.delete_flow == DeleteFlow::Pending(id) {
            return;
        }
        self.delete_flow = DeleteFlow::Pending(id);
        self.notify();
    }

    /// Resolve a released drag against [`DRAG_DELETE_THRESHOLD`].
    ///
    /// A displacement strictly beyond the threshold on either axis moves
    /// the pending folder to `Confirming`; anything less resets to
    /// `Idle`. A release with no pending folder is a no-op.
    pub fn finish_folder_drag(&mut self, dx: f64, dy: f64) {
        let DeleteFlow::Pending(id) = self.delete_flow else {
            return;
        };
        self.delete_flow = if dx.abs() > DRAG_DELETE_THRESHOLD || dy.abs() > DRAG_DELETE_THRESHOLD {
            DeleteFlow::Confirming(id)
        } else {
            DeleteFlow::Idle
        };
        self.notify();
    }

    /// Accept the confirmation dialog: cascade-delete the confirming
    /// folder and reset the flow.
    ///
    /// The deletion and the flow reset are one logical change with a
    /// single notification.
    ///
    /// # Returns
    /// The removed folder, or `None` if the flow was not confirming.
    pub fn confirm_folder_deletion(&mut self) -> Option<Folder> {
        let DeleteFlow::Confirming(id) = self.delete_flow else {
            return None;
        };
        self.delete_flow = DeleteFlow::Idle;
        // The flow reset alone is observable, so this notifies even if
        // the folder vanished while the dialog was up
        let (removed, _changed) = self.remove_folder_cascade(id);
        self.notify();
        removed
    }

    /// Dismiss the delete flow from any state.
    ///
    /// A no-op (without notification) when the flow is already idle.
    pub fn cancel_folder_deletion(&mut self) {
        if self.delete_flow == DeleteFlow::Idle {
            return;
        }
        self.delete_flow = DeleteFlow::Idle;
        self.notify();
    }

    /// Where the drag-to-delete gesture currently stands.
    pub fn delete_flow(&self) -> DeleteFlow {
        self.delete_flow
    }

    /// How many folder lookups have hit a dangling reference so far.
    ///
    /// Dangling references never fail a call; this counter (plus a `warn`
    /// event) is the only place they surface.
    pub fn dangling_folder_lookups(&self) -> u64 {
        self.dangling_folder_lookups.get()
    }
}

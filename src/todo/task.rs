use crate::todo::folder::FolderId;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current wall-clock time in the local timezone.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Identifier of a [`Task`], assigned by the store at creation.
///
/// Ids come from a per-store counter and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub(crate) u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single unit of work: titled, described, deadlined, completable.
///
/// Every task belongs to exactly one folder via `folder_id`. The store
/// does not verify the reference on creation; a task whose folder has
/// been deleted simply stops showing up in by-folder queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Free text, may be empty.
    pub description: String,
    /// When the task is due, including time of day.
    pub deadline: NaiveDateTime,
    pub is_completed: bool,
    /// Owning folder. Required but not validated against live folders.
    pub folder_id: FolderId,
    /// Set once when the store creates the task, never mutated afterwards.
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Whether the deadline still lies ahead of `now`.
    ///
    /// The task row only renders a deadline chip while this holds.
    pub fn has_upcoming_deadline(&self, now: NaiveDateTime) -> bool {
        self.deadline > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn probe_task(deadline: NaiveDateTime) -> Task {
        Task {
            id: TaskId(1),
            title: "Edit the PDF".to_string(),
            description: String::new(),
            deadline,
            is_completed: false,
            folder_id: FolderId(1),
            created_at: deadline,
        }
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(3).to_string(), "#3");
    }

    #[test]
    fn test_upcoming_deadline() {
        let now = NaiveDate::from_ymd_opt(2025, 7, 3)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();

        let ahead = probe_task(now + Duration::hours(1));
        assert!(ahead.has_upcoming_deadline(now));

        let behind = probe_task(now - Duration::hours(1));
        assert!(!behind.has_upcoming_deadline(now));

        // A deadline of exactly "now" no longer counts as upcoming
        let exact = probe_task(now);
        assert!(!exact.has_upcoming_deadline(now));
    }

    #[test]
    fn test_task_serializes_through_toml() {
        let deadline = NaiveDate::from_ymd_opt(2025, 7, 3)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let task = probe_task(deadline);

        let toml_str = toml::to_string(&task).unwrap();
        let loaded: Task = toml::from_str(&toml_str).unwrap();

        assert_eq!(loaded.id, task.id);
        assert_eq!(loaded.title, task.title);
        assert_eq!(loaded.deadline, task.deadline);
        assert_eq!(loaded.folder_id, task.folder_id);
        assert!(!loaded.is_completed);
    }
}

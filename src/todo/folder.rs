use crate::palette::ColorHex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a [`Folder`], assigned by the store at creation.
///
/// Ids come from a per-store counter and are never reused, so a deleted
/// folder's id stays dangling rather than pointing at a newer folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FolderId(pub(crate) u32);

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "folder-{}", self.0)
    }
}

/// A named, colored grouping of tasks.
///
/// Folders are created through the store and never edited in place; the
/// only way one goes away is the cascading delete that also sweeps its
/// tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub color: ColorHex,
}

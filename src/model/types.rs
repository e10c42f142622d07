//! Tree Model Types
//!
//! Core types for the in-memory directory tree.

use indexmap::IndexSet;
use thiserror::Error;

/// Tree model errors.
///
/// These only surface when a caller breaks an operation's precondition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("ENOENT: no such file, {operation} '{name}'")]
    NoSuchFile { name: String, operation: String },

    #[error("ENOENT: no such directory entry #{index}, {operation}")]
    NoSuchEntry { index: usize, operation: String },

    #[error("ENOTEMPTY: directory not empty, {operation} '{name}'")]
    NotEmpty { name: String, operation: String },

    #[error("EINVAL: stale directory handle {0:?}")]
    StaleHandle(DirId),
}

/// Handle to a directory node inside a `TreeModel` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirId(pub(crate) usize);

impl DirId {
    pub const ROOT: DirId = DirId(0);
}

/// A single directory.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    /// Back-reference used for upward navigation only. The root points at itself.
    pub(crate) parent: DirId,
    /// Subdirectories in creation order. Names may repeat.
    pub(crate) children: Vec<(String, DirId)>,
    pub(crate) files: IndexSet<String>,
}

impl DirectoryNode {
    pub(crate) fn new(parent: DirId) -> Self {
        Self {
            parent,
            children: Vec::new(),
            files: IndexSet::new(),
        }
    }

    /// No files and no subdirectories besides the parent-reference.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.files.is_empty()
    }

    pub fn parent(&self) -> DirId {
        self.parent
    }

    pub fn files(&self) -> &IndexSet<String> {
        &self.files
    }

    pub fn children(&self) -> &[(String, DirId)] {
        &self.children
    }
}

/// One navigable entry of a directory, as drawn by `choose_child_entry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildEntry {
    /// The `..` entry.
    Parent(DirId),
    /// A real subdirectory at `index` in the parent's child list.
    Child { index: usize, name: String, id: DirId },
}

impl ChildEntry {
    pub fn target(&self) -> DirId {
        match self {
            ChildEntry::Parent(id) => *id,
            ChildEntry::Child { id, .. } => *id,
        }
    }

    /// Name as it appears on a `cd` line.
    pub fn name(&self) -> &str {
        match self {
            ChildEntry::Parent(_) => "..",
            ChildEntry::Child { name, .. } => name,
        }
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, ChildEntry::Parent(_))
    }
}

//! Arena-backed directory tree.
//!
//! Nodes are addressed by `DirId`. Slots of removed directories go on a free
//! list and are reused by later `create_directory` calls.

use rand::Rng;

use super::types::*;

/// Live entry capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 16;

/// In-memory directory tree with a bounded number of live entries.
#[derive(Debug, Clone)]
pub struct TreeModel {
    nodes: Vec<Option<DirectoryNode>>,
    free: Vec<usize>,
    live_entries: usize,
    capacity: usize,
}

impl TreeModel {
    /// Create a tree holding only the root.
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: vec![Some(DirectoryNode::new(DirId::ROOT))],
            free: Vec::new(),
            live_entries: 0,
            capacity,
        }
    }

    pub fn root(&self) -> DirId {
        DirId::ROOT
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Files plus directories currently in the tree, root excluded.
    pub fn entry_count(&self) -> usize {
        self.live_entries
    }

    pub fn is_full(&self) -> bool {
        self.live_entries >= self.capacity
    }

    pub fn node(&self, id: DirId) -> Result<&DirectoryNode, ModelError> {
        self.nodes
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(ModelError::StaleHandle(id))
    }

    fn node_mut(&mut self, id: DirId) -> Result<&mut DirectoryNode, ModelError> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(ModelError::StaleHandle(id))
    }

    pub fn is_empty(&self, id: DirId) -> Result<bool, ModelError> {
        Ok(self.node(id)?.is_empty())
    }

    pub fn parent(&self, id: DirId) -> Result<DirId, ModelError> {
        Ok(self.node(id)?.parent)
    }

    pub fn subdirectories(&self, id: DirId) -> Result<&[(String, DirId)], ModelError> {
        Ok(self.node(id)?.children())
    }

    pub fn files(&self, id: DirId) -> Result<&indexmap::IndexSet<String>, ModelError> {
        Ok(self.node(id)?.files())
    }

    /// Number of live directories, root excluded.
    pub fn directory_count(&self) -> usize {
        self.nodes.iter().flatten().count() - 1
    }

    pub fn file_count(&self) -> usize {
        self.nodes.iter().flatten().map(|n| n.files.len()).sum()
    }

    /// Create a subdirectory of `parent`.
    ///
    /// Returns `None` without touching the tree once capacity is reached.
    /// Duplicate names are accepted.
    pub fn create_directory(&mut self, parent: DirId, name: String) -> Result<Option<DirId>, ModelError> {
        self.node(parent)?;
        if self.is_full() {
            return Ok(None);
        }
        let node = DirectoryNode::new(parent);
        let id = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                DirId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                DirId(self.nodes.len() - 1)
            }
        };
        self.node_mut(parent)?.children.push((name, id));
        self.live_entries += 1;
        Ok(Some(id))
    }

    /// Create a file in `parent`. Returns `false` if the name is taken or
    /// capacity is exhausted.
    pub fn create_file(&mut self, parent: DirId, name: String) -> Result<bool, ModelError> {
        let full = self.is_full();
        let node = self.node_mut(parent)?;
        if full || node.files.contains(&name) {
            return Ok(false);
        }
        node.files.insert(name);
        self.live_entries += 1;
        Ok(true)
    }

    pub fn remove_file(&mut self, parent: DirId, name: &str) -> Result<(), ModelError> {
        let node = self.node_mut(parent)?;
        if !node.files.shift_remove(name) {
            return Err(ModelError::NoSuchFile {
                name: name.to_string(),
                operation: "rm".to_string(),
            });
        }
        self.live_entries -= 1;
        Ok(())
    }

    /// Remove the empty subdirectory at `index` in `parent`'s child list and
    /// return its name.
    pub fn remove_directory(&mut self, parent: DirId, index: usize) -> Result<String, ModelError> {
        let (name, child) = self
            .node(parent)?
            .children
            .get(index)
            .cloned()
            .ok_or_else(|| ModelError::NoSuchEntry {
                index,
                operation: "rm".to_string(),
            })?;
        if !self.is_empty(child)? {
            return Err(ModelError::NotEmpty {
                name,
                operation: "rm".to_string(),
            });
        }
        self.node_mut(parent)?.children.remove(index);
        self.nodes[child.0] = None;
        self.free.push(child.0);
        self.live_entries -= 1;
        Ok(name)
    }

    /// Draw uniformly among the parent-reference and every subdirectory.
    pub fn choose_child_entry<R: Rng + ?Sized>(&self, id: DirId, rng: &mut R) -> Result<ChildEntry, ModelError> {
        let node = self.node(id)?;
        match rng.gen_range(0..=node.children.len()) {
            0 => Ok(ChildEntry::Parent(node.parent)),
            n => {
                let (name, child) = &node.children[n - 1];
                Ok(ChildEntry::Child {
                    index: n - 1,
                    name: name.clone(),
                    id: *child,
                })
            }
        }
    }

    /// Distance from `id` up to the root.
    pub fn depth(&self, id: DirId) -> Result<usize, ModelError> {
        let mut depth = 0;
        let mut current = id;
        while current != DirId::ROOT {
            current = self.parent(current)?;
            depth += 1;
        }
        Ok(depth)
    }

    /// Directory levels below `id`; zero for a directory without subdirectories.
    pub fn height(&self, id: DirId) -> Result<usize, ModelError> {
        let mut height = 0;
        let mut stack = vec![(id, 0usize)];
        while let Some((dir, level)) = stack.pop() {
            height = height.max(level);
            for (_, child) in &self.node(dir)?.children {
                stack.push((*child, level + 1));
            }
        }
        Ok(height)
    }
}

impl Default for TreeModel {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

//! Arena-backed n-ary tree of [`Entry`] nodes.
//!
//! The tree owns every entry top-down through a single `Vec` of slots. Parent links and
//! child lists hold [`NodeId`] indices, so there are no reference cycles and no shared
//! ownership. Slots of detached subtrees are recycled by later insertions.

use crate::core::{Result, VfsError};

use super::{Entry, EntryType};

/// Handle of a node inside a [`Tree`].
///
/// A handle stays valid until its node is detached. After that the slot may be reused,
/// so holding on to handles of removed nodes is a caller error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Tree {
    slots: Vec<Option<Entry>>,
    free: Vec<usize>,
    live: usize,
}

impl Tree {
    /// Creates a tree that holds only a root directory labeled `root_label`.
    pub fn new(root_label: &str) -> Self {
        Self {
            slots: vec![Some(Entry::new(root_label, EntryType::Directory, None))],
            free: Vec::new(),
            live: 1,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> Option<&Entry> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Entry> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn entry(&self, id: NodeId) -> Result<&Entry> {
        self.get(id).ok_or_else(|| VfsError::StaleNode.into())
    }

    /// Creates a node and appends it to the children of `parent`.
    ///
    /// Fails if `parent` is a file or no longer exists.
    pub fn insert(&mut self, parent: NodeId, label: &str, entry_type: EntryType) -> Result<NodeId> {
        if self.entry(parent)?.is_file() {
            return Err(VfsError::ParentIsFile(label.to_string()).into());
        }

        let entry = Entry::new(label, entry_type, Some(parent));
        let id = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(entry);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(entry));
                NodeId(self.slots.len() - 1)
            }
        };

        if let Some(parent_entry) = self.get_mut(parent) {
            parent_entry.push_child(id);
        }
        self.live += 1;

        Ok(id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Entry::parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Entry::children).unwrap_or(&[])
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(Entry::label)
    }

    pub fn is_file(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Entry::is_file)
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Entry::is_dir)
    }

    /// Returns the first child of `dir` labeled `label`.
    /// Sibling labels are not required to be unique, so later duplicates are shadowed.
    pub fn find_child(&self, dir: NodeId, label: &str) -> Option<NodeId> {
        self.children(dir)
            .iter()
            .copied()
            .find(|&child| self.label(child) == Some(label))
    }

    /// Labels of the children of `dir`, in insertion order.
    pub fn list_children(&self, dir: NodeId) -> impl Iterator<Item = &str> {
        self.children(dir)
            .iter()
            .filter_map(move |&child| self.label(child))
    }

    /// Number of parent hops from `id` to the root.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
            depth += 1;
        }
        depth
    }

    /// Walks `levels` parents up from `id`, stopping at the root.
    pub fn ancestor(&self, id: NodeId, levels: usize) -> NodeId {
        let mut current = id;
        for _ in 0..levels {
            match self.parent(current) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current
    }

    /// Labels from the root (excluded) down to `id` (included).
    pub fn path_labels(&self, id: NodeId) -> Vec<&str> {
        let mut labels = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            if let Some(label) = self.label(current) {
                labels.push(label);
            }
            current = parent;
        }
        labels.reverse();
        labels
    }

    /// Detaches `id` from its parent and frees it together with its whole subtree.
    /// Returns the number of removed nodes.
    pub fn detach(&mut self, id: NodeId) -> Result<usize> {
        if id == self.root() {
            return Err(VfsError::RootRemoval.into());
        }
        let parent = self.entry(id)?.parent().ok_or(VfsError::RootRemoval)?;
        if let Some(parent_entry) = self.get_mut(parent) {
            parent_entry.remove_child(id);
        }

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(entry) = self.slots.get_mut(next.0).and_then(Option::take) {
                stack.extend_from_slice(entry.children());
                self.free.push(next.0);
                removed += 1;
            }
        }
        self.live -= removed;

        Ok(removed)
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if the tree holds nothing but its root.
    /// The root itself is never removed, so `len()` is at least 1.
    pub fn is_empty(&self) -> bool {
        self.live == 1
    }
}

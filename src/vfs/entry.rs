use super::tree::NodeId;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// A single node of the tree: a file or a directory.
///
/// `parent` is a plain handle into the owning [`Tree`](super::Tree); the tree owns
/// every entry, so the back-reference never keeps anything alive.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    label: String,
    entry_type: EntryType,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Entry {
    pub(crate) fn new(label: &str, entry_type: EntryType, parent: Option<NodeId>) -> Entry {
        Entry {
            label: label.to_string(),
            entry_type,
            parent,
            children: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Owning directory; `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order. Always empty for files.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn remove_child(&mut self, child: NodeId) -> bool {
        match self.children.iter().position(|&c| c == child) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }
}

//! This module provides a virtual filesystem (VFS) implementation that keeps a tree of
//! named directories and files in memory and navigates it with shell-like commands.

use tracing::{debug, instrument};

use crate::core::{FsBackend, Result, VfsError, utils};

use super::{Entry, EntryType, NodeId, Tree};

/// Label given to the root directory by [`TreeFS::new`]. It never shows up in `pwd()`.
pub const DEFAULT_ROOT_LABEL: &str = "root";

/// A virtual file system (VFS) implementation that stores directories and files as nodes of
/// an in-memory [`Tree`] and tracks a current working directory.
///
/// ### Internal state
///
/// * `tree`: The arena that owns every entry. Its root is created once in the constructor
///   and is never removed.
/// * `cwd`: Handle of the current working directory.
///   - Starts at the root.
///   - Changed by `cd()`, and relocated by `rm()` (see there).
///   - Always points at a directory that is reachable from the root.
/// * `strict_labels`: When `true`, `mkdir()`/`touch()` refuse empty labels, labels that
///   contain `/`, and labels already present in the current directory. Off by default.
///
/// ### Paths
///
/// A path is split on `/` and empty segments are dropped, so `a//b/` means `a` then `b`.
/// Only the literal `/` refers to the root; any other leading `/` is ignored and the path
/// stays relative. A path starting with `../` ascends once per leading `..` segment and then
/// descends through the rest.
///
/// ### Thread Safety
///
/// This struct is **not thread‑safe by default**. If concurrent access is required, wrap it in
/// a synchronization primitive (e.g., `Arc<Mutex<TreeFS>>`) at the application level.
///
/// ### Example
///
/// ```
/// use vfs_tree::{FsBackend, TreeFS};
///
/// let mut fs = TreeFS::new();
/// fs.mkdir("docs").unwrap();
/// fs.cd("docs").unwrap();
/// fs.touch("note.txt").unwrap();
/// assert_eq!(fs.pwd(), "/docs");
/// assert_eq!(fs.ls().collect::<Vec<_>>(), vec!["note.txt"]);
///
/// fs.cd("..").unwrap();
/// fs.rm("docs", true).unwrap();
/// assert_eq!(fs.ls().count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct TreeFS {
    tree: Tree,
    cwd: NodeId,
    strict_labels: bool,
}

impl TreeFS {
    /// Creates new TreeFS instance with a root labeled `root`.
    /// The current working directory is set to the root.
    pub fn new() -> Self {
        Self::with_root_label(DEFAULT_ROOT_LABEL)
    }

    /// Creates new TreeFS instance whose root carries `label`.
    pub fn with_root_label(label: &str) -> Self {
        let tree = Tree::new(label);
        let cwd = tree.root();
        Self {
            tree,
            cwd,
            strict_labels: false,
        }
    }

    /// Changes strict-labels flag.
    /// If the flag is true, `mkdir()` and `touch()` reject invalid and duplicate labels.
    pub fn set_strict_labels(&mut self, strict: bool) {
        self.strict_labels = strict;
    }

    pub fn is_strict_labels(&self) -> bool {
        self.strict_labels
    }

    /// Read-only view of the underlying tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Handle of the current working directory.
    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    pub fn cwd_entry(&self) -> Option<&Entry> {
        self.tree.get(self.cwd)
    }

    pub fn root_label(&self) -> &str {
        self.tree.label(self.tree.root()).unwrap_or_default()
    }

    /// Not implemented: file contents are not stored.
    pub fn cat(&self) {
        debug!("cat is not implemented");
    }

    /// Not implemented.
    pub fn mv(&mut self) {
        debug!("mv is not implemented");
    }

    /// Not implemented.
    pub fn find(&self) {
        debug!("find is not implemented");
    }

    /// Not implemented.
    pub fn ln(&mut self) {
        debug!("ln is not implemented");
    }

    fn create(&mut self, label: &str, entry_type: EntryType) -> Result<NodeId> {
        if self.strict_labels {
            if !utils::is_valid_label(label) {
                return Err(VfsError::InvalidLabel(label.to_string()).into());
            }
            if self.tree.find_child(self.cwd, label).is_some() {
                return Err(VfsError::LabelExists(label.to_string()).into());
            }
        }
        let id = self.tree.insert(self.cwd, label, entry_type)?;
        debug!(label, ?entry_type, "entry created");
        Ok(id)
    }

    /// Goes `levels_up` parents up from the cwd.
    /// `path` is only used for the error message.
    fn ascend(&self, path: &str, levels_up: usize) -> Result<NodeId> {
        if levels_up > self.tree.depth(self.cwd) {
            return Err(VfsError::NavigationTooManyLevelsUp(path.to_string()).into());
        }
        Ok(self.tree.ancestor(self.cwd, levels_up))
    }

    /// Walks down from `from` through `segments`; every segment must name a directory.
    fn descend(&self, from: NodeId, segments: &[&str]) -> Result<NodeId> {
        let mut current = from;
        for &segment in segments {
            let child = self
                .tree
                .find_child(current, segment)
                .ok_or_else(|| VfsError::NavigationTargetMissing(segment.to_string()))?;
            if self.tree.is_file(child) {
                return Err(VfsError::NavigationTargetIsFile(segment.to_string()).into());
            }
            current = child;
        }
        Ok(current)
    }
}

impl Default for TreeFS {
    fn default() -> Self {
        Self::new()
    }
}

impl FsBackend for TreeFS {
    fn pwd(&self) -> String {
        if self.cwd == self.tree.root() {
            return "/".to_string();
        }
        let mut path = String::new();
        for label in self.tree.path_labels(self.cwd) {
            path.push('/');
            path.push_str(label);
        }
        path
    }

    fn ls(&self) -> impl Iterator<Item = &str> {
        self.tree.list_children(self.cwd)
    }

    /// Creates a directory named `label` in the cwd.
    /// Duplicate labels are accepted unless strict labels are enabled.
    fn mkdir(&mut self, label: &str) -> Result<()> {
        self.create(label, EntryType::Directory).map(|_| ())
    }

    /// Creates an empty file named `label` in the cwd.
    fn touch(&mut self, label: &str) -> Result<()> {
        self.create(label, EntryType::File).map(|_| ())
    }

    /// Changes the current working directory.
    ///
    /// * `/` goes to the root.
    /// * `..` goes to the parent; at the root it does nothing.
    /// * `../x/y` goes up once per leading `..`, then down through `x/y`. Going up further
    ///   than the root is an error.
    /// * `x/y` goes down through `x` and `y`.
    ///
    /// The cwd is changed only if the whole path resolves.
    #[instrument(level = "debug", skip(self))]
    fn cd(&mut self, path: &str) -> Result<()> {
        if path == "/" {
            self.cwd = self.tree.root();
            return Ok(());
        }
        if path == utils::PARENT_DIR {
            if let Some(parent) = self.tree.parent(self.cwd) {
                self.cwd = parent;
            }
            return Ok(());
        }

        let segments = utils::segments(path);
        let target = if utils::is_ascend_form(path) {
            let levels_up = utils::leading_parent_dirs(&segments);
            let base = self.ascend(path, levels_up)?;
            self.descend(base, &segments[levels_up..])?
        } else {
            self.descend(self.cwd, &segments)?
        };

        self.cwd = target;
        debug!(cwd = %self.pwd(), "directory changed");
        Ok(())
    }

    /// Removes the entry at `path`.
    ///
    /// * All segments but the last are resolved like in `cd()`; the last one names the entry.
    /// * Files are always removed; directories (with their whole subtree) only if
    ///   `recursive` is true.
    ///
    /// After a successful removal the cwd is set to the directory that held the entry. For
    /// plain relative paths it is then moved up one level per segment but the last, which
    /// lands back where the call started. For `../` paths it stays at that directory.
    ///
    /// On error neither the tree nor the cwd is changed.
    #[instrument(level = "debug", skip(self))]
    fn rm(&mut self, path: &str, recursive: bool) -> Result<()> {
        let segments = utils::segments(path);
        let ascending = utils::is_ascend_form(path);
        let (base, rest) = if ascending {
            let levels_up = utils::leading_parent_dirs(&segments);
            (self.ascend(path, levels_up)?, &segments[levels_up..])
        } else {
            (self.cwd, &segments[..])
        };

        let Some((&label, dirs)) = rest.split_last() else {
            return Err(VfsError::RemovalTargetMissing(path.to_string()).into());
        };
        let parent = self.descend(base, dirs)?;
        let target = self
            .tree
            .find_child(parent, label)
            .ok_or_else(|| VfsError::RemovalTargetMissing(path.to_string()))?;

        if self.tree.is_dir(target) && !recursive {
            return Err(VfsError::RemovalTargetIsDirectoryWithoutRecursive(path.to_string()).into());
        }

        let removed = self.tree.detach(target)?;
        self.cwd = if ascending {
            parent
        } else {
            self.tree.ancestor(parent, dirs.len())
        };
        debug!(removed, cwd = %self.pwd(), "entry removed");

        Ok(())
    }
}

/// Shell-like operations every backend of the crate provides.
///
/// All paths are interpreted against the backend's current working directory.
pub trait FsBackend {
    /// Returns the current working directory, e.g. `/docs/drafts` (or `/` for the root).
    fn pwd(&self) -> String;
    /// Returns the labels of the current directory's children in insertion order.
    fn ls(&self) -> impl Iterator<Item = &str>;
    fn mkdir(&mut self, label: &str) -> Result<()>;
    fn touch(&mut self, label: &str) -> Result<()>;
    fn cd(&mut self, path: &str) -> Result<()>;
    fn rm(&mut self, path: &str, recursive: bool) -> Result<()>;
}

pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Failure kinds raised by the crate.
///
/// They travel inside `anyhow::Error`; use `downcast_ref::<VfsError>()` to match on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VfsError {
    #[error("Cannot change directory to: '{0}'.  It is too many levels up.")]
    NavigationTooManyLevelsUp(String),

    #[error("Cannot change directory to: '{0}' The directory does not exist.")]
    NavigationTargetMissing(String),

    #[error("Cannot change directory to: '{0}'.  It is a file.")]
    NavigationTargetIsFile(String),

    #[error("Cannot remove: '{0}'.  It does not exist.")]
    RemovalTargetMissing(String),

    #[error("rm: '{0}' is a directory.")]
    RemovalTargetIsDirectoryWithoutRecursive(String),

    #[error("Cannot create: '{0}'.  It already exists.")]
    LabelExists(String),

    #[error("Cannot create: '{0}'.  It is not a valid name.")]
    InvalidLabel(String),

    #[error("Cannot create: '{0}'.  Its parent is a file.")]
    ParentIsFile(String),

    #[error("Node handle does not refer to a live entry.")]
    StaleNode,

    #[error("Cannot remove the root directory.")]
    RootRemoval,
}

pub(crate) mod utils {
    pub const PARENT_DIR: &str = "..";
    pub const ASCEND_PREFIX: &str = "../";

    /// Splits `path` on `/`, dropping empty segments (`"a//b/"` gives `["a", "b"]`).
    pub fn segments(path: &str) -> Vec<&str> {
        path.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// Returns `true` if `path` starts with `../`.
    pub fn is_ascend_form(path: &str) -> bool {
        path.starts_with(ASCEND_PREFIX)
    }

    /// Counts the leading `..` segments.
    pub fn leading_parent_dirs(segments: &[&str]) -> usize {
        segments.iter().take_while(|&&s| s == PARENT_DIR).count()
    }

    /// Strict-mode label check: non-empty and free of `/`.
    pub fn is_valid_label(label: &str) -> bool {
        !label.is_empty() && !label.contains('/')
    }

}

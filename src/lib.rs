//! A lightweight in-memory virtual file system (VFS) shaped as a tree of named nodes.
//! Navigate it with shell-like commands (`pwd`, `ls`, `cd`, `mkdir`, `touch`, `rm`) without
//! touching the host file system.
//!
//! ### Overview
//!
//! `vfs-tree` keeps directories and files as nodes of an arena-backed tree and tracks a
//! current working directory. Paths are plain strings split on `/`, resolved against the
//! current directory; `../` prefixes climb towards the root.
//!
//! **Key ideas**:
//! - **Ownership**: The tree owns every node; parent links are indices, never owners.
//! - **Atomicity**: A failing `cd` or `rm` leaves both the tree and the cursor untouched.
//! - **Diagnostics**: Errors carry a typed [`VfsError`] with shell-style messages.
//! - **Testability**: Use in unit tests to simulate directory layouts without side effects.
//!
//! ```
//! use vfs_tree::{DEFAULT_ROOT_LABEL, FsBackend, TreeFS};
//!
//! let mut fs = TreeFS::new();
//! assert_eq!(fs.root_label(), DEFAULT_ROOT_LABEL);
//! fs.mkdir("child_A").unwrap();
//! fs.cd("child_A").unwrap();
//! fs.mkdir("child_A_A").unwrap();
//! fs.cd("child_A_A").unwrap();
//! assert_eq!(fs.pwd(), "/child_A/child_A_A");
//!
//! let err = fs.cd("../../../").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Cannot change directory to: '../../../'.  It is too many levels up."
//! );
//! ```

mod core;
mod vfs;

pub use crate::core::{FsBackend, Result, VfsError};
pub use vfs::{DEFAULT_ROOT_LABEL, Entry, EntryType, NodeId, Tree, TreeFS};

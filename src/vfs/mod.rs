mod entry;
mod tree;
mod tree_fs;

pub use entry::{Entry, EntryType};
pub use tree::{NodeId, Tree};
pub use tree_fs::{DEFAULT_ROOT_LABEL, TreeFS};

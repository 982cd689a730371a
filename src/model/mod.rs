//! Data models for basediff
//!
//! This module contains UI-independent data structures representing
//! changed files, the tree built from them, and branches.

mod branch;
mod change;
mod diff_target;
mod tree;

pub use branch::Branch;
pub use change::{ChangeRecord, ChangeStatus};
pub use diff_target::{DiffTarget, RevisionFile};
pub use tree::{FileNode, FolderNode, TreeNode};

//! Changed-file tree
//!
//! Turns a flat list of [`ChangeRecord`]s into a directory tree in which
//! chains of single-child directories are merged into one node, so that
//! `a/b/c/x.rs` and `a/b/c/y.rs` show up under a single `a/b/c` folder.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::warn;

use super::{ChangeRecord, ChangeStatus};

/// A node of the changed-file tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Folder(FolderNode),
    File(FileNode),
}

impl TreeNode {
    /// Display label; also the node's key in its parent folder
    pub fn label(&self) -> &str {
        match self {
            Self::Folder(folder) => folder.label(),
            Self::File(file) => file.label(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::File(_) => None,
        }
    }
}

/// Leaf wrapping one changed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    name: String,
    record: ChangeRecord,
}

impl FileNode {
    /// File name (last path segment)
    pub fn label(&self) -> &str {
        &self.name
    }

    pub fn record(&self) -> &ChangeRecord {
        &self.record
    }

    pub fn status(&self) -> ChangeStatus {
        self.record.status()
    }

    /// Repository-relative path
    pub fn path(&self) -> &str {
        self.record.path()
    }
}

/// Directory node
///
/// `label` is the key under which the folder sits in its parent; after
/// collapsing it may span several segments (`a/b/c`). `path` is always the
/// full repository-relative path of the deepest merged directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolderNode {
    name: String,
    path: String,
    children: BTreeMap<String, TreeNode>,
}

impl FolderNode {
    /// Empty root folder
    pub fn root() -> Self {
        Self::default()
    }

    fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            children: BTreeMap::new(),
        }
    }

    /// Build the collapsed tree for a set of changes
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ChangeRecord>,
    {
        let mut root = Self::root();
        for record in records {
            root.insert(record);
        }
        root.collapsed()
    }

    pub fn label(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child stored under `key`
    pub fn child(&self, key: &str) -> Option<&TreeNode> {
        self.children.get(key)
    }

    /// Children in display order: folders first, then files, each by label.
    ///
    /// The order is computed on every call and not stored in the tree.
    pub fn children(&self) -> Vec<&TreeNode> {
        let mut nodes: Vec<&TreeNode> = self.children.values().collect();
        nodes.sort_by(|a, b| display_order(a, b));
        nodes
    }

    /// Every file below this folder, depth-first in display order
    pub fn files(&self) -> Vec<&FileNode> {
        let mut files = Vec::new();
        self.collect_files(&mut files);
        files
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a FileNode>) {
        for child in self.children() {
            match child {
                TreeNode::Folder(folder) => folder.collect_files(out),
                TreeNode::File(file) => out.push(file),
            }
        }
    }

    /// Insert one change, creating intermediate folders as needed.
    ///
    /// Empty path segments are skipped. Later inserts win: a file sitting
    /// where a folder is needed is replaced, and a second record for the
    /// same path replaces the first.
    pub fn insert(&mut self, record: ChangeRecord) {
        let segments: Vec<String> = record
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        let Some((file_name, dirs)) = segments.split_last() else {
            warn!(path = record.path(), "skipping change with empty path");
            return;
        };

        let mut folder = self;
        let mut prefix = String::new();
        for dir in dirs {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(dir);

            let slot = folder
                .children
                .entry(dir.clone())
                .or_insert_with(|| TreeNode::Folder(FolderNode::new(dir, &prefix)));
            if !slot.is_folder() {
                warn!(path = %prefix, "file replaced by folder of the same name");
                *slot = TreeNode::Folder(FolderNode::new(dir, &prefix));
            }
            folder = match slot {
                TreeNode::Folder(child) => child,
                TreeNode::File(_) => return,
            };
        }

        folder.children.insert(
            file_name.clone(),
            TreeNode::File(FileNode {
                name: file_name.clone(),
                record,
            }),
        );
    }

    /// Merge every chain of single-folder directories below this one.
    ///
    /// This folder keeps its own label; only descendants are merged, since a
    /// folder's label can only change through its parent's key. Running this
    /// on an already collapsed tree returns it unchanged.
    pub fn collapsed(self) -> Self {
        Self {
            children: collapse_children(self.children),
            ..self
        }
    }

    /// Take over the only child when that child is a folder.
    ///
    /// Expects the child to be collapsed already, so one merge is enough.
    fn absorb_only_child(mut self) -> Self {
        if self.children.len() != 1
            || !matches!(self.children.values().next(), Some(TreeNode::Folder(_)))
        {
            return self;
        }
        if let Some((_, TreeNode::Folder(child))) = self.children.pop_first() {
            self.name = format!("{}/{}", self.name, child.name);
            self.path = child.path;
            self.children = child.children;
        }
        self
    }
}

/// Rebuild a child mapping bottom-up with collapsed folders under their new keys
fn collapse_children(children: BTreeMap<String, TreeNode>) -> BTreeMap<String, TreeNode> {
    children
        .into_values()
        .map(|child| {
            let child = match child {
                TreeNode::Folder(folder) => TreeNode::Folder(folder.collapsed().absorb_only_child()),
                file => file,
            };
            (child.label().to_string(), child)
        })
        .collect()
}

/// Folders before files; labels in string order within each group
fn display_order(a: &TreeNode, b: &TreeNode) -> Ordering {
    b.is_folder()
        .cmp(&a.is_folder())
        .then_with(|| a.label().cmp(b.label()))
}

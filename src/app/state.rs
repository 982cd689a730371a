//! Application state: the base reference and the installed tree

use std::sync::mpsc::Receiver;

use crate::config::Config;
use crate::git::parser::is_valid_reference;
use crate::git::{GitError, GitExecutor, GitQuery};
use crate::model::{DiffTarget, FileNode, FolderNode, TreeNode};

use super::events::{AppEvent, Subscribers};

/// Owner of the comparison state
///
/// Holds the configured base reference, the tree from the last successful
/// refresh, and the subscribers told about changes to either. Readers go
/// through the accessors; the tree is replaced wholesale on refresh.
#[derive(Debug)]
pub struct App<Q: GitQuery = GitExecutor> {
    /// git query interface
    pub(super) git: Q,
    /// Configured base reference
    pub(super) base: String,
    /// Ref the installed tree was computed against
    pub(super) comparison_ref: Option<String>,
    /// Root of the installed tree
    pub(super) root: FolderNode,
    /// Error from the last failed operation
    pub error_message: Option<String>,
    pub(super) subscribers: Subscribers,
}

impl App<GitExecutor> {
    /// Create an app for the repository and base named in `config`
    pub fn from_config(config: &Config) -> Result<Self, GitError> {
        Self::new(config.executor(), &config.base)
    }
}

impl<Q: GitQuery> App<Q> {
    /// Construct a new instance of [`App`] with an empty tree.
    ///
    /// Nothing is queried until [`App::refresh`] is called.
    pub fn new(git: Q, base: &str) -> Result<Self, GitError> {
        let base = base.trim();
        if !is_valid_reference(base) {
            return Err(GitError::InvalidReference(base.to_string()));
        }
        Ok(Self {
            git,
            base: base.to_string(),
            comparison_ref: None,
            root: FolderNode::root(),
            error_message: None,
            subscribers: Subscribers::default(),
        })
    }

    /// The configured base reference
    pub fn base_reference(&self) -> &str {
        &self.base
    }

    /// Ref the installed tree was computed against, once a refresh succeeded
    pub fn comparison_ref(&self) -> Option<&str> {
        self.comparison_ref.as_deref()
    }

    pub fn git(&self) -> &Q {
        &self.git
    }

    /// Root of the installed tree
    pub fn root(&self) -> &FolderNode {
        &self.root
    }

    /// Top-level nodes in display order
    pub fn root_children(&self) -> Vec<&TreeNode> {
        self.root.children()
    }

    /// Children of `folder` in display order
    pub fn children_of<'a>(&self, folder: &'a FolderNode) -> Vec<&'a TreeNode> {
        folder.children()
    }

    /// Diff sides for a file of the installed tree
    pub fn diff_target(&self, file: &FileNode) -> DiffTarget {
        let reference = self.comparison_ref.as_deref().unwrap_or(&self.base);
        DiffTarget::for_record(file.record(), reference)
    }

    /// Receive an [`AppEvent`] for every later base change and refresh
    pub fn subscribe(&mut self) -> Receiver<AppEvent> {
        self.subscribers.subscribe()
    }
}

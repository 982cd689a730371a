//! Data refresh operations (reload from git)

use tracing::info;

use crate::git::parser::{Parser, is_valid_reference, parse_branch_list};
use crate::git::{GitCommands, GitError, GitQuery, resolve_base};
use crate::model::{Branch, FolderNode};

use super::events::AppEvent;
use super::state::App;

impl<Q: GitQuery> App<Q> {
    /// Rebuild the changed-file tree
    ///
    /// Resolves the comparison point for the base reference, lists the
    /// changes against it and installs a freshly built tree. On failure the
    /// previous tree stays installed and the error is returned once.
    pub fn refresh(&mut self) -> Result<(), GitError> {
        let reference = resolve_base(&self.git, &self.base);

        match self.load_tree(&reference) {
            Ok(root) => {
                let files = root.files().len();
                info!(base = %self.base, %reference, files, "refreshed changed files");
                self.root = root;
                self.comparison_ref = Some(reference.clone());
                self.error_message = None;
                self.subscribers
                    .notify(AppEvent::Refreshed { reference, files });
                Ok(())
            }
            Err(e) => {
                self.error_message = Some(format!("git diff error: {}", e));
                self.subscribers.notify(AppEvent::RefreshFailed(e.to_string()));
                Err(e)
            }
        }
    }

    fn load_tree(&self, reference: &str) -> Result<FolderNode, GitError> {
        let output = self.git.name_status(reference)?;
        Ok(FolderNode::build(Parser::parse_name_status(&output)))
    }

    /// Switch the base reference and refresh against it
    ///
    /// Setting the current value again does nothing. Names git could
    /// misread (options, ranges, whitespace) are rejected.
    pub fn set_base_reference(&mut self, name: &str) -> Result<(), GitError> {
        let name = name.trim();
        if !is_valid_reference(name) {
            return Err(GitError::InvalidReference(name.to_string()));
        }
        if name == self.base {
            return Ok(());
        }

        info!(from = %self.base, to = name, "base reference changed");
        self.base = name.to_string();
        self.subscribers
            .notify(AppEvent::BaseChanged(self.base.clone()));
        self.refresh()
    }

    /// Branches that can be picked as the base reference
    pub fn branches(&mut self) -> Result<Vec<Branch>, GitError> {
        match self.git.branch_list() {
            Ok(output) => Ok(parse_branch_list(&output)),
            Err(e) => {
                self.error_message = Some(format!("git branch list error: {}", e));
                Err(e)
            }
        }
    }

    /// Short name of the checked-out branch
    pub fn current_branch(&self) -> Result<String, GitError> {
        self.git.current_branch()
    }
}

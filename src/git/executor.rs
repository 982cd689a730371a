//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::constants::{self, commands, errors, flags};
use super::{GitError, GitQuery};

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command and return its untrimmed standard output
    pub fn run_raw(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::WORK_TREE).arg(path);
        }

        cmd.args(args);
        debug!(?args, repo = ?self.repo_path, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let exit_code = output.status.code().unwrap_or(-1);
            debug!(exit_code, %stderr, "git command failed");

            // `git diff` outside a repository capitalizes the message
            if stderr.to_lowercase().contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Content of `path` as recorded at `reference`
    ///
    /// Left untrimmed so the text can be handed to a diff view as-is.
    pub fn file_at(&self, reference: &str, path: &str) -> Result<String, GitError> {
        let spec = format!("{reference}:{path}");
        self.run_raw(&[commands::SHOW, &spec])
    }
}

impl GitQuery for GitExecutor {
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        Ok(self.run_raw(args)?.trim().to_string())
    }
}

/// Higher-level git queries, available on every [`GitQuery`].
pub trait GitCommands: GitQuery {
    /// Nearest common ancestor of `base` and `HEAD`
    fn merge_base(&self, base: &str) -> Result<String, GitError> {
        self.run(&[commands::MERGE_BASE, base, constants::HEAD])
    }

    /// `git diff --name-status` of the working tree against `reference`
    fn name_status(&self, reference: &str) -> Result<String, GitError> {
        self.run(&[
            flags::CONFIG,
            constants::special::UNQUOTED_PATHS,
            commands::DIFF,
            flags::NO_COLOR,
            flags::NAME_STATUS,
            flags::FIND_RENAMES,
            reference,
            flags::END_OF_OPTIONS,
        ])
    }

    /// Local and remote-tracking branches, one `<marker>\t<refname>` per line
    fn branch_list(&self) -> Result<String, GitError> {
        self.run(&[
            commands::FOR_EACH_REF,
            constants::special::BRANCH_FORMAT,
            constants::special::LOCAL_PREFIX,
            constants::special::REMOTE_PREFIX,
        ])
    }

    /// Short name of the checked-out branch (`HEAD` when detached)
    fn current_branch(&self) -> Result<String, GitError> {
        self.run(&[commands::REV_PARSE, flags::ABBREV_REF, constants::HEAD])
    }
}

impl<T: GitQuery + ?Sized> GitCommands for T {}

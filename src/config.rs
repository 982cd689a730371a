//! Runtime configuration

use std::path::PathBuf;

use crate::git::GitExecutor;
use crate::git::constants::DEFAULT_BASE;

/// Where to look for changes and what to compare them against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Repository to inspect (None = current directory)
    pub repo_path: Option<PathBuf>,
    /// Base reference the working tree is compared against
    pub base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_path: None,
            base: DEFAULT_BASE.to_string(),
        }
    }
}

impl Config {
    /// Executor running git in the configured repository
    pub fn executor(&self) -> GitExecutor {
        match &self.repo_path {
            Some(path) => GitExecutor::with_repo_path(path.clone()),
            None => GitExecutor::new(),
        }
    }
}

//! git command execution layer
//!
//! This module handles executing git commands and parsing their output.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;
mod resolver;

pub use executor::{GitCommands, GitExecutor};
pub use parser::Parser;
pub use resolver::resolve_base;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Invalid reference name: {0:?}")]
    InvalidReference(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

/// The one request/response operation the change pipeline needs from git.
///
/// Implementations run `git <args>` in their working directory and return
/// the trimmed standard output, or an error carrying the standard error text.
pub trait GitQuery {
    fn run(&self, args: &[&str]) -> Result<String, GitError>;
}

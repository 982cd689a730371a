use std::path::PathBuf;

use clap::{Parser, Subcommand};

use basediff::config::Config;
use basediff::git::constants::DEFAULT_BASE;

/// basediff: list the files changed since the working tree branched off a base
#[derive(Parser, Debug)]
#[command(name = "basediff", about, long_about = None)]
pub struct Cli {
    /// repository to inspect (defaults to the current directory)
    #[arg(short = 'C', long = "repo", value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// base reference to compare against
    #[arg(short, long, env = "BASEDIFF_BASE", default_value = DEFAULT_BASE)]
    pub base: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// print changed files as a collapsed directory tree (default)
    Tree,
    /// print one `<status>\t<path>` line per changed file
    Files,
    /// list branches that can be used as the base
    Branches,
    /// print a changed file as it was at the comparison point
    Show {
        /// repository-relative path of the changed file
        path: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            repo_path: self.repo.clone(),
            base: self.base.clone(),
        }
    }
}

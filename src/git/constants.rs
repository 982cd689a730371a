//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and special values.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Base reference used when none is configured
pub const DEFAULT_BASE: &str = "main";

/// git subcommands
pub mod commands {
    pub const MERGE_BASE: &str = "merge-base";
    pub const DIFF: &str = "diff";
    pub const SHOW: &str = "show";
    pub const FOR_EACH_REF: &str = "for-each-ref";
    pub const REV_PARSE: &str = "rev-parse";
}

/// git command flags
pub mod flags {
    /// Run as if git was started in the given directory
    pub const WORK_TREE: &str = "-C";
    /// Set a configuration value for one invocation
    pub const CONFIG: &str = "-c";
    /// One `<status>\t<path>` line per changed file
    pub const NAME_STATUS: &str = "--name-status";
    /// Report renames as `R<score>` lines instead of a delete/add pair
    pub const FIND_RENAMES: &str = "--find-renames";
    /// Disable color output for parsing
    pub const NO_COLOR: &str = "--no-color";
    /// Abbreviate a ref to its short name
    pub const ABBREV_REF: &str = "--abbrev-ref";
    /// Separates revisions from paths
    pub const END_OF_OPTIONS: &str = "--";
}

/// Special git values
pub mod special {
    /// The checked-out commit
    pub const HEAD: &str = "HEAD";

    /// Print non-ASCII paths verbatim instead of C-quoting them
    pub const UNQUOTED_PATHS: &str = "core.quotePath=false";

    /// `for-each-ref` format: current-branch marker, tab, full ref name
    pub const BRANCH_FORMAT: &str = "--format=%(HEAD)\t%(refname)";

    /// Local branch namespace
    pub const LOCAL_PREFIX: &str = "refs/heads/";

    /// Remote-tracking branch namespace
    pub const REMOTE_PREFIX: &str = "refs/remotes/";

    /// Label for the right-hand side of a base-vs-checkout diff
    pub const WORKING_TREE_LABEL: &str = "Working Tree";
}

/// Error detection patterns in git stderr
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}

pub use special::HEAD;

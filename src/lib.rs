//! basediff - changed files against a base branch
//!
//! Lists the files that differ between the working tree and the merge base
//! of a configurable base reference, and arranges them in a directory tree
//! with single-child directory chains collapsed.
//!
//! This library provides:
//! - [`app`]: Comparison state, refresh and change notifications
//! - [`config`]: Runtime configuration
//! - [`git`]: git command execution and parsing
//! - [`model`]: Domain models
//! - [`outline`]: Plain-text rendering of the tree

pub mod app;
pub mod config;
pub mod git;
pub mod model;
pub mod outline;

//! Comparison point resolution

use tracing::debug;

use super::GitQuery;
use super::executor::GitCommands;

/// Resolve the ref that changes should be listed against.
///
/// This is the merge base of `base` and `HEAD`, so that commits landed on
/// `base` after the branch point do not show up as changes. When no merge
/// base can be computed (unknown ref, unrelated histories, detached state
/// without history) `base` itself is returned. Never fails and never retries.
pub fn resolve_base<Q: GitQuery + ?Sized>(git: &Q, base: &str) -> String {
    match git.merge_base(base) {
        Ok(commit) if !commit.is_empty() => {
            debug!(base, %commit, "resolved merge base");
            commit
        }
        Ok(_) => {
            debug!(base, "merge-base returned nothing, comparing against base");
            base.to_string()
        }
        Err(e) => {
            debug!(base, error = %e, "merge-base failed, comparing against base");
            base.to_string()
        }
    }
}

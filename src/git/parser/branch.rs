//! Parser for `git for-each-ref` branch listings

use crate::git::constants::special::{LOCAL_PREFIX, REMOTE_PREFIX};
use crate::model::Branch;

/// Parse `git for-each-ref --format=%(HEAD)\t%(refname)` output
///
/// Output examples:
/// - `*\trefs/heads/main` (checked-out local branch)
/// - ` \trefs/heads/feature-x` (other local branch)
/// - ` \trefs/remotes/origin/main` (remote-tracking branch)
///
/// Symbolic `<remote>/HEAD` entries and refs outside the two branch
/// namespaces are dropped.
pub fn parse_branch_list(output: &str) -> Vec<Branch> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            // the blank marker of the first line may have been trimmed away
            let (marker, refname) = line.split_once('\t').unwrap_or(("", line));
            let refname = refname.trim();
            let is_current = marker.trim() == "*";

            if let Some(name) = refname.strip_prefix(LOCAL_PREFIX) {
                return (!name.is_empty()).then(|| Branch {
                    name: name.to_string(),
                    remote: None,
                    is_current,
                });
            }

            let (remote, name) = refname.strip_prefix(REMOTE_PREFIX)?.split_once('/')?;
            if remote.is_empty() || name.is_empty() || name == "HEAD" {
                return None;
            }
            Some(Branch {
                name: name.to_string(),
                remote: Some(remote.to_string()),
                is_current: false,
            })
        })
        .collect()
}

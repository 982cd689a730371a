//! Branch model for `git for-each-ref` over local and remote-tracking branches

/// A branch that can serve as the base reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Branch name without the remote (e.g., "main", "feature/x")
    pub name: String,
    /// Remote name for remote-tracking branches (e.g., "origin")
    pub remote: Option<String>,
    /// Whether this branch is checked out
    pub is_current: bool,
}

impl Branch {
    /// Name as git accepts it on the command line (e.g., "origin/main")
    pub fn full_name(&self) -> String {
        match &self.remote {
            Some(remote) => format!("{}/{}", remote, self.name),
            None => self.name.clone(),
        }
    }

    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }
}

//! RemoteRepo helper for remote-tracking branch tests.
//!
//! Provides a bare Git repository to simulate a remote server.

use std::process::Command;
use tempfile::TempDir;

use super::TestRepo;

/// A bare Git repository for use as a remote in tests.
///
/// The repository is automatically cleaned up when the RemoteRepo is dropped.
pub struct RemoteRepo {
    dir: TempDir,
}

impl RemoteRepo {
    /// Create a new bare Git repository.
    pub fn new_bare() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let output = Command::new("git")
            .args(["init", "--bare"])
            .current_dir(dir.path())
            .output()
            .expect("Failed to execute git init --bare");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("git init --bare failed: {}", stderr);
        }

        Self { dir }
    }

    /// Get the URL (path) of this remote repository.
    pub fn url(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }
}

impl TestRepo {
    /// Create a new TestRepo whose `main` is pushed to an `origin` remote.
    pub fn with_remote(remote: &RemoteRepo) -> Self {
        let repo = Self::new();
        repo.git(&["remote", "add", "origin", &remote.url()]);
        repo.git(&["push", "--quiet", "origin", "main"]);
        repo.git(&["fetch", "--quiet", "origin"]);
        repo
    }
}

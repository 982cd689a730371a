//! Change record data model

/// How a file differs from the comparison point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeStatus {
    /// File was added
    Added,

    /// File was modified
    Modified,

    /// File was deleted
    Deleted,

    /// File was renamed (carries an old path)
    Renamed,

    /// File was copied (carries an old path)
    Copied,

    /// File type changed (regular file, symlink, submodule)
    TypeChanged,

    /// File has unresolved merge conflicts
    Unmerged,

    /// Status letter this crate does not model, kept verbatim
    Unknown(char),
}

impl ChangeStatus {
    /// Map a status letter from `git diff --name-status`
    pub fn from_code(code: char) -> Self {
        match code {
            'A' => Self::Added,
            'M' => Self::Modified,
            'D' => Self::Deleted,
            'R' => Self::Renamed,
            'C' => Self::Copied,
            'T' => Self::TypeChanged,
            'U' => Self::Unmerged,
            other => Self::Unknown(other),
        }
    }

    /// Get the status indicator character
    pub fn indicator(&self) -> char {
        match self {
            Self::Added => 'A',
            Self::Modified => 'M',
            Self::Deleted => 'D',
            Self::Renamed => 'R',
            Self::Copied => 'C',
            Self::TypeChanged => 'T',
            Self::Unmerged => 'U',
            Self::Unknown(c) => *c,
        }
    }

    /// Human-readable name, used for tooltips and decorations
    pub fn label(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Modified => "Modified",
            Self::Deleted => "Deleted",
            Self::Renamed => "Renamed",
            Self::Copied => "Copied",
            Self::TypeChanged => "Type Changed",
            Self::Unmerged => "Conflict",
            Self::Unknown(_) => "Changed",
        }
    }

    /// Renames and copies are the statuses that carry a source path
    pub fn has_source(&self) -> bool {
        matches!(self, Self::Renamed | Self::Copied)
    }
}

/// One changed file
///
/// `old_path` is present exactly when the status is [`ChangeStatus::Renamed`]
/// or [`ChangeStatus::Copied`]; the constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    status: ChangeStatus,
    path: String,
    old_path: Option<String>,
}

impl ChangeRecord {
    /// A change without a source path.
    ///
    /// Returns `None` for renames and copies, which need [`ChangeRecord::moved`].
    pub fn new(status: ChangeStatus, path: impl Into<String>) -> Option<Self> {
        if status.has_source() {
            return None;
        }
        Some(Self {
            status,
            path: path.into(),
            old_path: None,
        })
    }

    /// A rename or copy from `old_path` to `path`.
    ///
    /// Returns `None` for any other status.
    pub fn moved(
        status: ChangeStatus,
        old_path: impl Into<String>,
        path: impl Into<String>,
    ) -> Option<Self> {
        if !status.has_source() {
            return None;
        }
        Some(Self {
            status,
            path: path.into(),
            old_path: Some(old_path.into()),
        })
    }

    pub fn status(&self) -> ChangeStatus {
        self.status
    }

    /// Current path, relative to the repository root
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Source path of a rename or copy
    pub fn old_path(&self) -> Option<&str> {
        self.old_path.as_deref()
    }

    /// Last path segment
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known_letters() {
        assert_eq!(ChangeStatus::from_code('A'), ChangeStatus::Added);
        assert_eq!(ChangeStatus::from_code('M'), ChangeStatus::Modified);
        assert_eq!(ChangeStatus::from_code('D'), ChangeStatus::Deleted);
        assert_eq!(ChangeStatus::from_code('R'), ChangeStatus::Renamed);
        assert_eq!(ChangeStatus::from_code('C'), ChangeStatus::Copied);
        assert_eq!(ChangeStatus::from_code('T'), ChangeStatus::TypeChanged);
        assert_eq!(ChangeStatus::from_code('U'), ChangeStatus::Unmerged);
    }

    #[test]
    fn test_from_code_unknown_letter_passes_through() {
        assert_eq!(ChangeStatus::from_code('X'), ChangeStatus::Unknown('X'));
        assert_eq!(ChangeStatus::from_code('X').indicator(), 'X');
    }

    #[test]
    fn test_indicator_round_trips_code() {
        for code in ['A', 'M', 'D', 'R', 'C', 'T', 'U', 'B'] {
            assert_eq!(ChangeStatus::from_code(code).indicator(), code);
        }
    }

    #[test]
    fn test_new_rejects_rename() {
        assert!(ChangeRecord::new(ChangeStatus::Renamed, "a.rs").is_none());
        assert!(ChangeRecord::new(ChangeStatus::Copied, "a.rs").is_none());
    }

    #[test]
    fn test_moved_rejects_plain_status() {
        assert!(ChangeRecord::moved(ChangeStatus::Modified, "a.rs", "b.rs").is_none());
    }

    #[test]
    fn test_moved_keeps_both_paths() {
        let record = ChangeRecord::moved(ChangeStatus::Renamed, "old.ts", "new.ts").unwrap();
        assert_eq!(record.path(), "new.ts");
        assert_eq!(record.old_path(), Some("old.ts"));
    }

    #[test]
    fn test_file_name() {
        let nested = ChangeRecord::new(ChangeStatus::Added, "src/ui/view.rs").unwrap();
        assert_eq!(nested.file_name(), "view.rs");

        let top = ChangeRecord::new(ChangeStatus::Added, "README.md").unwrap();
        assert_eq!(top.file_name(), "README.md");
    }
}

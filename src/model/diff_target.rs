//! What to put on each side of a base-vs-checkout diff

use super::{ChangeRecord, ChangeStatus};
use crate::git::constants::special::WORKING_TREE_LABEL;

/// A file as recorded at some ref
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionFile {
    pub reference: String,
    pub path: String,
}

/// Inputs for opening a two-pane diff of one changed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTarget {
    /// Base side; `None` when the file did not exist at the base
    pub left: Option<RevisionFile>,
    /// Working-tree path; `None` when the file was deleted
    pub right: Option<String>,
    /// Editor title, e.g. `lib.rs (main ↔ Working Tree)`
    pub title: String,
}

impl DiffTarget {
    /// Diff sides for `record` when comparing against `reference`
    pub fn for_record(record: &ChangeRecord, reference: &str) -> Self {
        let left = match record.status() {
            ChangeStatus::Added => None,
            _ => Some(RevisionFile {
                reference: reference.to_string(),
                path: record.old_path().unwrap_or(record.path()).to_string(),
            }),
        };
        let right = match record.status() {
            ChangeStatus::Deleted => None,
            _ => Some(record.path().to_string()),
        };

        Self {
            left,
            right,
            title: format!(
                "{} ({} ↔ {})",
                record.file_name(),
                reference,
                WORKING_TREE_LABEL
            ),
        }
    }
}

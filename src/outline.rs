//! Plain-text outline of the changed-file tree
//!
//! One line per node, two spaces of indent per level, folders suffixed with
//! `/` and files prefixed with their status letter.

use std::fmt::Write;

use crate::model::{FolderNode, TreeNode};

/// Indent added per tree level
const INDENT: &str = "  ";

/// Render everything below `root` in display order
pub fn render_outline(root: &FolderNode) -> String {
    let mut out = String::new();
    write_folder(&mut out, root, 0);
    out
}

fn write_folder(out: &mut String, folder: &FolderNode, depth: usize) {
    let indent = INDENT.repeat(depth);
    for child in folder.children() {
        match child {
            TreeNode::Folder(sub) => {
                let _ = writeln!(out, "{indent}{}/", sub.label());
                write_folder(out, sub, depth + 1);
            }
            TreeNode::File(file) => {
                let _ = write!(out, "{indent}{} {}", file.status().indicator(), file.label());
                if let Some(old_path) = file.record().old_path() {
                    let _ = write!(out, " <- {old_path}");
                }
                out.push('\n');
            }
        }
    }
}

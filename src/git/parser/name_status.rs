//! Change list parser (git diff --name-status)

use std::borrow::Cow;

use tracing::warn;

use crate::model::{ChangeRecord, ChangeStatus};

use super::Parser;

impl Parser {
    /// Parse `git diff --name-status` output
    ///
    /// Records come back in output order. Lines that do not have the field
    /// count their status letter calls for are skipped.
    pub fn parse_name_status(output: &str) -> Vec<ChangeRecord> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(Self::parse_name_status_line)
            .collect()
    }

    /// Parse a single tab-separated status line into a ChangeRecord
    ///
    /// Formats:
    /// - "M\tpath" (and A, D, T, U, or any other letter)
    /// - "R100\told\tnew" (renamed, similarity score ignored)
    /// - "C075\tsource\tcopy" (copied)
    ///
    /// Quoted path fields are unquoted, see [`unquote_path`].
    pub(super) fn parse_name_status_line(line: &str) -> Option<ChangeRecord> {
        let fields: Vec<&str> = line.split('\t').collect();
        let code = fields.first()?.chars().next()?;
        let status = ChangeStatus::from_code(code);

        let record = match fields.as_slice() {
            [_, old, new] if status.has_source() && !old.is_empty() && !new.is_empty() => {
                ChangeRecord::moved(status, unquote_path(old), unquote_path(new))
            }
            [_, path] if !path.is_empty() => ChangeRecord::new(status, unquote_path(path)),
            _ => None,
        };

        if record.is_none() {
            warn!(line, "skipping malformed status line");
        }
        record
    }
}

/// Undo git's C-style quoting of a path field
///
/// `core.quotePath=false` only keeps non-ASCII bytes verbatim. Paths holding
/// `"`, `\` or control characters still come back wrapped in double quotes
/// with backslash escapes, including octal `\NNN` bytes.
pub(super) fn unquote_path(field: &str) -> Cow<'_, str> {
    let Some(inner) = field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return Cow::Borrowed(field);
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut rest = inner.bytes().peekable();
    while let Some(byte) = rest.next() {
        if byte != b'\\' {
            bytes.push(byte);
            continue;
        }
        match rest.next() {
            Some(b'a') => bytes.push(0x07),
            Some(b'b') => bytes.push(0x08),
            Some(b't') => bytes.push(b'\t'),
            Some(b'n') => bytes.push(b'\n'),
            Some(b'v') => bytes.push(0x0b),
            Some(b'f') => bytes.push(0x0c),
            Some(b'r') => bytes.push(b'\r'),
            Some(digit @ b'0'..=b'7') => {
                let mut value = u16::from(digit - b'0');
                for _ in 0..2 {
                    match rest.peek() {
                        Some(&next @ b'0'..=b'7') => {
                            value = value * 8 + u16::from(next - b'0');
                            rest.next();
                        }
                        _ => break,
                    }
                }
                bytes.push((value & 0xff) as u8);
            }
            // `\"`, `\\` and anything git does not escape specially
            Some(other) => bytes.push(other),
            None => bytes.push(b'\\'),
        }
    }

    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

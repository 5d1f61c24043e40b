// Check
//
// Compares the committed alias module with a fresh render, ignoring the
// timestamp.

use super::render::normalize_for_comparison;
use crate::diagnostics::GenerateError;
use crate::file_system::read_optional;
use std::path::Path;

/// Differing lines shown in a drift report.
pub const MAX_DIFF_LINES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    /// No committed file exists.
    Missing,
    /// The committed file differs; holds a diff-style excerpt.
    Drift { excerpt: Vec<String> },
}

/// Compare `expected` with the file committed at `output`.
pub fn check_committed(output: &Path, expected: &str) -> Result<CheckOutcome, GenerateError> {
    let committed = read_optional(output).map_err(|source| GenerateError::SourceRead {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(match committed {
        None => CheckOutcome::Missing,
        Some(committed) => compare(&committed, expected),
    })
}

pub fn compare(committed: &str, expected: &str) -> CheckOutcome {
    let committed = normalize_for_comparison(committed);
    let expected = normalize_for_comparison(expected);
    if committed == expected {
        CheckOutcome::UpToDate
    } else {
        CheckOutcome::Drift {
            excerpt: diff_excerpt(&committed, &expected, MAX_DIFF_LINES),
        }
    }
}

/// Line-by-line comparison rendered as `- committed` / `+ expected` pairs,
/// limited to `max_lines` differing lines.
pub fn diff_excerpt(committed: &str, expected: &str, max_lines: usize) -> Vec<String> {
    let committed: Vec<&str> = committed.lines().collect();
    let expected: Vec<&str> = expected.lines().collect();
    let total = committed.len().max(expected.len());

    let mut excerpt = Vec::new();
    let mut differing = 0;
    for i in 0..total {
        let left = committed.get(i).copied();
        let right = expected.get(i).copied();
        if left == right {
            continue;
        }
        differing += 1;
        if differing > max_lines {
            continue;
        }
        excerpt.push(format!("@@ line {} @@", i + 1));
        if let Some(line) = left {
            excerpt.push(format!("- {}", line));
        }
        if let Some(line) = right {
            excerpt.push(format!("+ {}", line));
        }
    }
    if differing > max_lines {
        excerpt.push(format!("... {} more differing lines", differing - max_lines));
    }
    excerpt
}

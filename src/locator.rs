//! Marker block location.
//! Finds well-formed (start, end) marker pairs for one rule inside a file's
//! current line sequence. Only marker lines are inspected, so the enclosed
//! region may hold anything, including text left by an earlier pack.

use log::debug;

use crate::rule::Rule;

/// A located include block. Indices are 0-based positions in the line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerBlock {
    /// Index of the start marker line
    pub start: usize,
    /// Index of the end marker line
    pub end: usize,
    /// Relative path captured from both markers
    pub path: String,
}

/// A start marker with no matching end marker before end-of-file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnclosedMarker {
    pub index: usize,
    pub path: String,
}

/// Result of scanning a line sequence with one rule.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Located {
    /// Blocks in ascending start order; they never overlap
    pub blocks: Vec<MarkerBlock>,
    pub unclosed: Vec<UnclosedMarker>,
}

/// Scans `lines` for blocks of `rule`.
///
/// A start marker at `i` naming `P` is closed by the first later end marker
/// that also names `P` (plain string equality). Scanning resumes right after
/// that end marker, so an end line is never reused. A start marker that is
/// never closed is reported and scanning resumes on the following line.
pub fn locate_blocks<S: AsRef<str>>(lines: &[S], rule: &Rule) -> Located {
    let mut located = Located::default();
    let mut i = 0;

    while i < lines.len() {
        let Some(path) = rule.match_start(lines[i].as_ref()) else {
            i += 1;
            continue;
        };

        let close = (i + 1..lines.len()).find(|&j| rule.match_end(lines[j].as_ref()) == Some(path));

        match close {
            Some(j) => {
                debug!("Found block '{}' at lines {}..{}", path, i + 1, j + 1);
                located.blocks.push(MarkerBlock {
                    start: i,
                    end: j,
                    path: path.to_string(),
                });
                i = j + 1;
            }
            None => {
                located.unclosed.push(UnclosedMarker {
                    index: i,
                    path: path.to_string(),
                });
                i += 1;
            }
        }
    }

    located
}

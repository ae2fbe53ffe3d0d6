//! Line sequence rewriting.
//! Builds a new line sequence from an immutable input and a list of block
//! edits instead of splicing the input in place.

/// Replacement of the lines strictly between a start and an end marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Index of the start marker line, kept as-is
    pub start: usize,
    /// Index of the end marker line, kept as-is
    pub end: usize,
    /// Lines placed between the markers; empty clears the block
    pub replacement: Vec<String>,
}

/// Applies `edits` to `lines` and returns the rewritten sequence.
///
/// Edits are applied from the highest start index to the lowest, so every
/// index still refers to the original input. Each edit keeps its marker lines
/// and yields `lines[..=start] + replacement + lines[end..]`. Edits must not
/// overlap, which holds for blocks produced by the locator.
pub fn rewrite<S: AsRef<str>>(lines: &[S], edits: &[Edit]) -> Vec<String> {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start));

    // Collected back to front, reversed at the end.
    let mut pieces: Vec<&str> = Vec::with_capacity(lines.len());
    let mut tail_end = lines.len();

    for edit in ordered {
        debug_assert!(edit.start < edit.end && edit.end <= tail_end);
        pieces.extend(lines[edit.end..tail_end].iter().rev().map(|line| line.as_ref()));
        pieces.extend(edit.replacement.iter().rev().map(String::as_str));
        tail_end = edit.start + 1;
    }
    pieces.extend(lines[..tail_end].iter().rev().map(|line| line.as_ref()));

    pieces.into_iter().rev().map(str::to_string).collect()
}

/// Splits referenced content into lines for injection.
///
/// A missing final terminator is completed with `terminator` so the end
/// marker stays on a line of its own.
pub fn injected_lines(content: &str, terminator: &str) -> Vec<String> {
    let mut lines: Vec<String> = content.split_inclusive('\n').map(str::to_string).collect();
    if let Some(last) = lines.last_mut() {
        if !last.ends_with('\n') {
            last.push_str(terminator);
        }
    }
    lines
}

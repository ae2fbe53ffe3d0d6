use inlay::locator::{locate_blocks, MarkerBlock, UnclosedMarker};
use inlay::rule::Rule;

fn rule() -> Rule {
    Rule::new("*", "<!--inc:{path}-->", "<!--endinc:{path}-->").unwrap()
}

fn block(start: usize, end: usize, path: &str) -> MarkerBlock {
    MarkerBlock {
        start,
        end,
        path: path.to_string(),
    }
}

#[test]
fn test_locates_blocks_in_order() {
    let lines = [
        "x\n",
        "<!--inc:a.txt-->\n",
        "old\n",
        "<!--endinc:a.txt-->\n",
        "<!--inc:b.txt-->\n",
        "<!--endinc:b.txt-->\n",
    ];
    let located = locate_blocks(&lines, &rule());

    assert_eq!(located.blocks, vec![block(1, 3, "a.txt"), block(4, 5, "b.txt")]);
    assert!(located.unclosed.is_empty());
}

#[test]
fn test_end_path_must_match_exactly() {
    let lines = [
        "<!--inc:a.txt-->\n",
        "<!--endinc:./a.txt-->\n",
        "<!--endinc:b.txt-->\n",
        "<!--endinc:a.txt-->\n",
    ];
    let located = locate_blocks(&lines, &rule());

    assert_eq!(located.blocks, vec![block(0, 3, "a.txt")]);
}

#[test]
fn test_unclosed_marker_is_reported_and_skipped() {
    let lines = [
        "<!--inc:missing-end.txt-->\n",
        "<!--inc:a.txt-->\n",
        "<!--endinc:a.txt-->\n",
    ];
    let located = locate_blocks(&lines, &rule());

    assert_eq!(located.blocks, vec![block(1, 2, "a.txt")]);
    assert_eq!(
        located.unclosed,
        vec![UnclosedMarker {
            index: 0,
            path: "missing-end.txt".to_string(),
        }]
    );
}

#[test]
fn test_nested_starts_pair_with_first_end() {
    let lines = [
        "<!--inc:a-->\n",
        "<!--inc:a-->\n",
        "<!--endinc:a-->\n",
        "<!--endinc:a-->\n",
    ];
    let located = locate_blocks(&lines, &rule());

    // The second start sits inside the first block and is never seen as a start.
    assert_eq!(located.blocks, vec![block(0, 2, "a")]);
    assert!(located.unclosed.is_empty());
}

#[test]
fn test_interleaved_starts_scan_after_previous_end() {
    let lines = [
        "<!--inc:a-->\n",
        "<!--endinc:a-->\n",
        "<!--inc:a-->\n",
        "body\n",
        "<!--endinc:a-->\n",
    ];
    let located = locate_blocks(&lines, &rule());

    assert_eq!(located.blocks, vec![block(0, 1, "a"), block(2, 4, "a")]);
}

#[test]
fn test_enclosed_content_is_ignored() {
    let lines = [
        "<!--inc:a-->\n",
        "<!--inc:b-->\n",
        "<!--endinc:a-->\n",
    ];
    let located = locate_blocks(&lines, &rule());

    assert_eq!(located.blocks, vec![block(0, 2, "a")]);
    assert!(located.unclosed.is_empty());
}

#[test]
fn test_no_markers() {
    let lines: [&str; 0] = [];
    assert!(locate_blocks(&lines, &rule()).blocks.is_empty());
    assert!(locate_blocks(&["plain\n", "text\n"], &rule()).blocks.is_empty());
}

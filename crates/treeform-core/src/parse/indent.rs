//! Parser for whitespace/box-drawing ASCII trees.
//!
//! ```text
//! project/
//! ├── src/           # comments are stripped
//! │   └── main.rs
//! └── Cargo.toml
//! ```
//!
//! Depth is inferred heuristically from the indicator prefix; the exact
//! counting rules are load-bearing for round-trip compatibility with the
//! scanner's output format and must not be "improved" in isolation (mixed
//! tab/space input is a known soft spot, see DESIGN.md).

use tracing::{debug, instrument};

use crate::{
    application::ports::{NullSink, ProgressEvent, ProgressSink},
    domain::{NodeId, NodeKind, Tree, classify},
};

/// Characters that may appear in a line's nesting indicator.
const INDICATOR_CHARS: [char; 8] = [' ', '\t', '│', '├', '└', '─', '|', '-'];

/// Parser for indent-tree text. One tree per invocation.
pub struct IndentTreeParser<'a> {
    sink: &'a dyn ProgressSink,
}

impl IndentTreeParser<'static> {
    pub fn new() -> Self {
        Self { sink: &NullSink }
    }
}

impl Default for IndentTreeParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IndentTreeParser<'a> {
    /// Report skipped lines to the given sink.
    pub fn with_sink(sink: &'a dyn ProgressSink) -> Self {
        Self { sink }
    }

    /// Build a tree from the given text. Never fails; unusable lines are
    /// skipped and reported to the sink.
    #[instrument(skip_all)]
    pub fn parse(&self, input: &str) -> Tree {
        let mut tree = Tree::new();
        let mut stack: Vec<NodeId> = vec![tree.root()];
        let mut last_level: Option<usize> = None;

        for (index, raw) in input.lines().enumerate() {
            let line_no = index + 1;

            let Some(line) = strip_comment(raw) else {
                continue; // blank or comment-only
            };

            let (prefix, label) = split_indicator(line);
            let level = indent_level(prefix);

            let label = label.trim();
            if label.is_empty() {
                self.sink.event(&ProgressEvent::LineSkipped { line: line_no });
                continue;
            }

            let (name, kind) = classify(label);

            // Reconcile the ancestor stack against the new level. The root
            // is never popped, so a dropped line cannot strand the stack.
            match last_level {
                Some(prev) if level == prev => {
                    // close the previous sibling's scope
                    if stack.len() > 1 {
                        stack.pop();
                    }
                }
                Some(prev) if level < prev => {
                    while stack.len() > level + 1 && stack.len() > 1 {
                        stack.pop();
                    }
                }
                // deeper than before, or the very first data line: the new
                // node goes under the current top of stack as-is
                _ => {}
            }

            let parent = attach_parent(&tree, &stack);
            let id = match kind {
                NodeKind::Directory => tree.add_directory(parent, name),
                NodeKind::File => tree.add_file(parent, name),
            };
            match id {
                Ok(id) => {
                    stack.push(id);
                    last_level = Some(level);
                }
                Err(e) => {
                    debug!(line = line_no, error = %e, "line dropped");
                    self.sink.event(&ProgressEvent::LineSkipped { line: line_no });
                }
            }
        }

        tree
    }
}

/// Drop the inline `#` comment and trailing whitespace.
///
/// Returns `None` when nothing remains (blank line, comment-only line).
fn strip_comment(raw: &str) -> Option<&str> {
    let line = raw.trim_end();
    let line = match line.find('#') {
        Some(pos) => line[..pos].trim_end(),
        None => line,
    };
    if line.trim().is_empty() { None } else { Some(line) }
}

/// Split a line into its indicator prefix and the label remainder.
fn split_indicator(line: &str) -> (&str, &str) {
    let end = line
        .char_indices()
        .find(|(_, c)| !INDICATOR_CHARS.contains(c))
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    line.split_at(end)
}

/// Derive the nesting level from an indicator prefix.
///
/// - every run of 2 consecutive space/tab characters adds one level;
/// - `│` / `|` raise the level to at least 1 (repeats do not stack);
/// - `├` / `└` always add one level each;
/// - `-` resets the whitespace run, `─` is inert.
fn indent_level(prefix: &str) -> usize {
    let mut level = 0usize;
    let mut run = 0usize;

    for c in prefix.chars() {
        match c {
            ' ' | '\t' => {
                run += 1;
                if run >= 2 {
                    level += 1;
                    run = 0;
                }
            }
            '│' | '|' => {
                level = level.max(1);
                run = 0;
            }
            '├' | '└' => {
                level += 1;
                run = 0;
            }
            '-' => {
                run = 0;
            }
            _ => {}
        }
    }

    level
}

/// Nearest directory on the stack, from the top down.
///
/// A deeper line after a file line would make the file a parent; the model
/// forbids that, so such nodes reattach to the closest directory scope.
/// The synthetic root guarantees a hit.
fn attach_parent(tree: &Tree, stack: &[NodeId]) -> NodeId {
    stack
        .iter()
        .rev()
        .copied()
        .find(|&id| tree.node(id).kind().is_directory())
        .unwrap_or(tree.root())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Tree {
        IndentTreeParser::new().parse(input)
    }

    /// Names of the root's direct children.
    fn top_names(tree: &Tree) -> Vec<&str> {
        tree.node(tree.root())
            .children()
            .iter()
            .map(|&id| tree.node(id).name())
            .collect()
    }

    // ── depth heuristic ──────────────────────────────────────────────────────

    #[test]
    fn two_space_runs_count_one_level_each() {
        assert_eq!(indent_level(""), 0);
        assert_eq!(indent_level("  "), 1);
        assert_eq!(indent_level("    "), 2);
        assert_eq!(indent_level("   "), 1); // odd leftover does not count
    }

    #[test]
    fn tabs_count_like_spaces() {
        assert_eq!(indent_level("\t\t"), 1);
        assert_eq!(indent_level(" \t"), 1);
    }

    #[test]
    fn vertical_bar_raises_to_one_without_stacking() {
        assert_eq!(indent_level("│"), 1);
        assert_eq!(indent_level("││"), 1);
        assert_eq!(indent_level("|"), 1);
    }

    #[test]
    fn tee_and_corner_always_increment() {
        assert_eq!(indent_level("├"), 1);
        assert_eq!(indent_level("└"), 1);
        assert_eq!(indent_level("├└"), 2);
        assert_eq!(indent_level("├── "), 1);
    }

    #[test]
    fn bar_then_spaces_then_corner() {
        // "│   └── " - the scanner's depth-2 prefix
        assert_eq!(indent_level("│   └── "), 3);
        // "    └── " - same depth, last-child ancestry
        assert_eq!(indent_level("    └── "), 3);
    }

    #[test]
    fn dash_resets_the_whitespace_run() {
        // " - " never accumulates two consecutive spaces
        assert_eq!(indent_level(" - "), 0);
        assert_eq!(indent_level("- "), 0);
    }

    // ── classification ───────────────────────────────────────────────────────

    #[test]
    fn trailing_slash_beats_the_dot_heuristic() {
        let tree = parse("v1.0/\n");
        let id = tree.node(tree.root()).children()[0];
        assert_eq!(tree.node(id).kind(), NodeKind::Directory);
        assert_eq!(tree.node(id).name(), "v1.0");
    }

    // ── comments and blanks ──────────────────────────────────────────────────

    #[test]
    fn comment_lines_and_blanks_are_invisible() {
        let tree = parse("# header comment\n\nsrc/\n\n# trailing\n");
        assert_eq!(top_names(&tree), vec!["src"]);
    }

    #[test]
    fn inline_comments_are_stripped() {
        let tree = parse("src/   # the source tree\n");
        assert_eq!(top_names(&tree), vec!["src"]);
    }

    #[test]
    fn line_reduced_to_nothing_by_its_comment_is_skipped() {
        let tree = parse("├── # nothing left\nsrc/\n");
        assert_eq!(top_names(&tree), vec!["src"]);
    }

    // ── boundary cases ───────────────────────────────────────────────────────

    #[test]
    fn empty_input_yields_root_only() {
        let tree = parse("");
        assert!(tree.is_empty());
    }

    #[test]
    fn all_comment_input_yields_root_only() {
        let tree = parse("# one\n# two\n");
        assert!(tree.is_empty());
    }

    // ── stack assembly ───────────────────────────────────────────────────────

    #[test]
    fn box_drawing_sample_builds_the_expected_shape() {
        let input = "project/\n\
                     ├── assets/\n\
                     │   └── logo.svg\n\
                     ├── src/\n\
                     │   ├── app.css\n\
                     │   └── index.js\n\
                     └── readme.txt\n";
        let tree = parse(input);
        assert_eq!(
            tree.to_string(),
            "project/\n  assets/\n    logo.svg\n  src/\n    app.css\n    index.js\n  readme.txt\n"
        );
    }

    #[test]
    fn trailing_entry_after_a_deeper_subtree_adopts_the_deeper_scope() {
        // Box glyph levels skip numbers (src is 1, components 3, Button 4),
        // so the pop-to-level rule lands "index.js" inside components/, not
        // next to it. Long-standing behavior of the level heuristic; inputs
        // that need exact nesting use plain two-space indentation.
        let input = "project/\n\
                     └── src/\n\
                     \u{20}   ├── components/\n\
                     \u{20}   │   └── Button.js\n\
                     \u{20}   └── index.js\n";
        let tree = parse(input);
        assert_eq!(
            tree.to_string(),
            "project/\n  src/\n    components/\n      Button.js\n      index.js\n"
        );
    }

    #[test]
    fn plain_indentation_builds_the_expected_shape() {
        let input = "app/\n  src/\n    lib.rs\n  Cargo.toml\nREADME.md\n";
        let tree = parse(input);
        assert_eq!(
            tree.to_string(),
            "app/\n  src/\n    lib.rs\n  Cargo.toml\nREADME.md\n"
        );
    }

    #[test]
    fn equal_level_lines_become_siblings() {
        let tree = parse("a/\nb/\nc/\n");
        assert_eq!(top_names(&tree), vec!["a", "b", "c"]);
    }

    #[test]
    fn level_drop_reopens_the_right_ancestor() {
        let input = "a/\n  b/\n    c/\n  d/\n";
        let tree = parse(input);
        assert_eq!(tree.to_string(), "a/\n  b/\n    c/\n  d/\n");
    }

    #[test]
    fn first_line_may_start_indented() {
        // no previous level to compare against: becomes a root child
        let tree = parse("  deep/\n");
        assert_eq!(top_names(&tree), vec!["deep"]);
    }

    #[test]
    fn nodes_under_a_file_reattach_to_the_nearest_directory() {
        let input = "src/\n  notes.txt\n    orphan.txt\n";
        let tree = parse(input);
        // orphan lands next to notes.txt under src, not under the file
        assert_eq!(tree.to_string(), "src/\n  notes.txt\n  orphan.txt\n");
    }

    #[test]
    fn label_with_embedded_separator_is_dropped() {
        let tree = parse("src/\nweird/name.txt\nok.txt\n");
        // interior slash, not format syntax: the name is rejected
        assert_eq!(top_names(&tree), vec!["src", "ok.txt"]);
    }

    // ── sink reporting ───────────────────────────────────────────────────────

    #[test]
    fn skipped_lines_reach_the_sink() {
        use std::sync::Mutex;

        #[derive(Default)]
        struct Recorder(Mutex<Vec<ProgressEvent>>);
        impl ProgressSink for Recorder {
            fn event(&self, event: &ProgressEvent) {
                self.0.lock().unwrap().push(event.clone());
            }
        }

        let recorder = Recorder::default();
        IndentTreeParser::with_sink(&recorder).parse("├──\nsrc/\n");
        let events = recorder.0.into_inner().unwrap();
        assert_eq!(events, vec![ProgressEvent::LineSkipped { line: 1 }]);
    }
}

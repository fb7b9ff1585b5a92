//! Parser for Markdown outlines.
//!
//! Headings nest directories by level (`# [A1] Backend Service` opens the
//! directory `A1_Backend_Service` at depth 1), bullet entries of the shape
//! ``- `name`: description`` declare files, a fenced code block feeds the
//! most recent file entry (its info string becomes the file's language tag),
//! and everything else is prose attached to the innermost open directory.

use tracing::{debug, instrument};

use crate::{
    application::ports::{NullSink, ProgressEvent, ProgressSink},
    domain::{NodeId, Tree},
};

/// Parser for Markdown outline text. One tree per invocation.
pub struct OutlineParser<'a> {
    sink: &'a dyn ProgressSink,
}

impl OutlineParser<'static> {
    pub fn new() -> Self {
        Self { sink: &NullSink }
    }
}

impl Default for OutlineParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> OutlineParser<'a> {
    /// Report dropped entries to the given sink.
    pub fn with_sink(sink: &'a dyn ProgressSink) -> Self {
        Self { sink }
    }

    /// Build a tree from the given Markdown text. Never fails; structural
    /// lines that cannot be honored degrade to prose or are skipped.
    #[instrument(skip_all)]
    pub fn parse(&self, input: &str) -> Tree {
        let mut tree = Tree::new();

        // Innermost open directory per heading level; index 0 is the root.
        let mut stack: Vec<NodeId> = vec![tree.root()];
        let mut active = tree.root();

        // Fence and payload state.
        let mut pending_file: Option<NodeId> = None;
        let mut in_fence = false;
        let mut fence_body = String::new();
        let mut fence_language = String::new();
        let mut prose = String::new();

        for (index, line) in input.lines().enumerate() {
            let line_no = index + 1;

            // Fence delimiters toggle the code-block state.
            if line.trim().starts_with("```") {
                if in_fence {
                    in_fence = false;
                    if let Some(file) = pending_file.take() {
                        // setters cannot fail here: pending files are files
                        let _ = tree.set_content(file, std::mem::take(&mut fence_body));
                        if !fence_language.is_empty() {
                            let _ = tree.set_language(file, std::mem::take(&mut fence_language));
                        }
                    }
                    fence_body.clear();
                    fence_language.clear();
                } else {
                    in_fence = true;
                    fence_body.clear();
                    fence_language = fence_tag(line.trim());
                }
                continue;
            }

            if in_fence {
                fence_body.push_str(line);
                fence_body.push('\n');
                continue;
            }

            // Headings open directory scopes.
            if let Some((level, title)) = heading(line) {
                flush_prose(&mut tree, active, &mut prose);

                // close deeper scopes
                stack.truncate(level);

                // fill skipped levels with placeholders named by their depth
                while stack.len() < level {
                    let parent = *stack.last().expect("stack holds at least the root");
                    let depth = stack.len();
                    match tree.add_directory(parent, format!("_level_{depth}")) {
                        Ok(id) => stack.push(id),
                        Err(e) => {
                            debug!(line = line_no, error = %e, "placeholder rejected");
                            break;
                        }
                    }
                }

                let parent = *stack.last().expect("stack holds at least the root");
                match tree.add_directory(parent, directory_name(title)) {
                    Ok(id) => {
                        stack.push(id);
                        active = id;
                    }
                    Err(e) => {
                        // a title the model cannot name degrades to prose
                        debug!(line = line_no, error = %e, "heading treated as prose");
                        self.sink.event(&ProgressEvent::LineSkipped { line: line_no });
                        prose.push_str(line);
                        prose.push('\n');
                    }
                }
                continue;
            }

            // Bullet entries declare files under the active directory.
            if let Some((name, description)) = file_entry(line) {
                match tree.add_file(active, name) {
                    Ok(id) => {
                        if !description.is_empty() {
                            let _ = tree.set_description(id, description.to_string());
                        }
                        pending_file = Some(id);
                        continue;
                    }
                    Err(e) => {
                        debug!(line = line_no, error = %e, "file entry treated as prose");
                        // fall through: the line still reads as prose
                    }
                }
            }

            // Everything else is prose for the active directory.
            if !line.trim().is_empty() {
                prose.push_str(line);
                prose.push('\n');
            }
        }

        flush_prose(&mut tree, active, &mut prose);
        tree
    }
}

/// Commit the accumulated prose buffer to `active`'s description.
fn flush_prose(tree: &mut Tree, active: NodeId, prose: &mut String) {
    let text = prose.trim();
    if !text.is_empty() {
        let _ = tree.set_description(active, text.to_string());
    }
    prose.clear();
}

/// Match an ATX heading: `#`s, whitespace, non-empty title.
fn heading(line: &str) -> Option<(usize, &str)> {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if hashes == 0 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let title = rest.trim();
    if title.is_empty() { None } else { Some((hashes, title)) }
}

/// Directory name for a heading title.
///
/// `[prefix] Rest of Title` becomes `prefix_Rest_of_Title`; otherwise the
/// whole title with spaces replaced by underscores.
fn directory_name(title: &str) -> String {
    if let Some(rest) = title.strip_prefix('[') {
        if let Some(end) = rest.find(']') {
            let prefix = &rest[..end];
            let remainder = rest[end + 1..].trim_start();
            if !prefix.is_empty() && !remainder.is_empty() && rest[end + 1..].starts_with(|c: char| c.is_whitespace()) {
                return format!("{}_{}", prefix, underscored(remainder));
            }
        }
    }
    underscored(title)
}

fn underscored(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Match a file bullet: `- `name`` with an optional `: description`.
fn file_entry(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_start().strip_prefix('-')?;
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let rest = rest.trim_start().strip_prefix('`')?;
    let (name, rest) = rest.split_once('`')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let description = rest.trim_start().strip_prefix(':').unwrap_or(rest).trim();
    Some((name, description))
}

/// Language tag of an opening fence line (already trimmed).
fn fence_tag(line: &str) -> String {
    line.trim_start_matches('`')
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

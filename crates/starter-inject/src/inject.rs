//! The "smart inject" file mutator.
//!
//! Applies a list of directives to in-memory file content, in order,
//! without a language parser. Injections are anchored on known substrings
//! and inherit the indentation of the anchor line; a directive whose text
//! is already present is a no-op, so repeated application is safe.

use tracing::{debug, warn};

use crate::directive::{Directive, Location};
use crate::imports;
use crate::matcher::{AnchorMatch, AnchorMatcher, SubstringMatcher};

/// Result of applying a directive list to file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectOutcome {
    /// Content after all applicable directives ran.
    pub content: String,
    /// True iff at least one directive mutated the content.
    pub changed: bool,
}

/// Applies directives to file content.
pub struct Injector {
    matcher: Box<dyn AnchorMatcher>,
}

impl Injector {
    /// Injector with the default exact-substring anchor matcher.
    pub fn new() -> Self {
        Self {
            matcher: Box::new(SubstringMatcher),
        }
    }

    /// Injector with a custom anchor matching strategy.
    pub fn with_matcher(matcher: Box<dyn AnchorMatcher>) -> Self {
        Self { matcher }
    }

    /// Apply `directives` to `content`, in list order.
    ///
    /// Each directive sees the content produced by the previous one, so
    /// the caller's list order matters. A directive whose text is already
    /// present is skipped silently; a directive whose anchors all miss is
    /// skipped with a warning. Neither aborts the remaining directives.
    pub fn apply(&self, content: &str, directives: &[Directive]) -> InjectOutcome {
        let mut content = content.to_string();
        let mut changed = false;

        for directive in directives {
            if already_applied(&content, directive.text()) {
                debug!("already present, skipping: {}", directive.text().trim());
                continue;
            }

            match directive {
                Directive::Import { text } => {
                    content = imports::insert_import(&content, text);
                    changed = true;
                }
                Directive::Inject {
                    text,
                    anchors,
                    location,
                } => match self.matcher.find_first(&content, anchors) {
                    Some(anchor) => {
                        let indent = line_indent(&content, anchor.offset).to_string();
                        let block = indent_lines(text, &indent);
                        // What actually lands in the file carries the
                        // inherited indentation, so the guard has to
                        // recognize that form too.
                        if already_applied(&content, &block) {
                            debug!("already present, skipping: {}", text.trim());
                            continue;
                        }
                        content = insert_block(&content, anchor, &block, *location);
                        changed = true;
                    }
                    None => {
                        warn!("no anchor matched for injection: {}", text.trim());
                    }
                },
            }
        }

        InjectOutcome { content, changed }
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}

/// Idempotency guard: `text`, trimmed of surrounding whitespace, already
/// occurs somewhere in the content.
fn already_applied(content: &str, text: &str) -> bool {
    content.contains(text.trim())
}

/// Start offset of the line containing `offset`.
fn line_start(content: &str, offset: usize) -> usize {
    content[..offset].rfind('\n').map_or(0, |nl| nl + 1)
}

/// Leading run of spaces and tabs on the line containing `offset`.
fn line_indent(content: &str, offset: usize) -> &str {
    let start = line_start(content, offset);
    let rest = &content[start..];
    let end = rest.len() - rest.trim_start_matches([' ', '\t']).len();
    &rest[..end]
}

/// Prefix every non-empty line of `text` with `indent`.
fn indent_lines(text: &str, indent: &str) -> String {
    if indent.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + indent.len() * 4);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !line.is_empty() {
            out.push_str(indent);
        }
        out.push_str(line);
    }
    out
}

/// Insert an already-indented block relative to a matched anchor.
///
/// The block is bracketed with line breaks so it occupies its own
/// line(s): after-insertions land at the anchor's end offset, before-
/// insertions land above the anchor's line.
fn insert_block(content: &str, anchor: AnchorMatch, block: &str, location: Location) -> String {
    let mut out = String::with_capacity(content.len() + block.len() + 2);
    match location {
        Location::After => {
            let at = anchor.end();
            out.push_str(&content[..at]);
            if !content[..at].ends_with('\n') {
                out.push('\n');
            }
            out.push_str(block);
            if !block.ends_with('\n') && !content[at..].starts_with('\n') {
                out.push('\n');
            }
            out.push_str(&content[at..]);
        }
        Location::Before => {
            let at = line_start(content, anchor.offset);
            out.push_str(&content[..at]);
            out.push_str(block);
            if !block.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&content[at..]);
        }
    }
    out
}

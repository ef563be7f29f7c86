//! Anchor matching strategies.
//!
//! Anchors are plain substrings by default, deliberately parser-free:
//! exact matching is robust to any target dialect, and candidate lists
//! absorb incidental formatting drift between templates. The first
//! candidate that occurs anywhere in the content wins, by candidate
//! order rather than by position in the file.

use regex::Regex;
use tracing::debug;

/// A resolved anchor: where it starts and how long the matched text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorMatch {
    /// Byte offset of the match start.
    pub offset: usize,
    /// Byte length of the matched text.
    pub len: usize,
}

impl AnchorMatch {
    /// Byte offset one past the end of the matched text.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Strategy for locating an insertion anchor in file content.
pub trait AnchorMatcher {
    /// Return the first candidate (by list order) that matches the content,
    /// or `None` when no candidate matches.
    fn find_first(&self, content: &str, candidates: &[String]) -> Option<AnchorMatch>;
}

/// Exact-substring matcher. This is the default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl AnchorMatcher for SubstringMatcher {
    fn find_first(&self, content: &str, candidates: &[String]) -> Option<AnchorMatch> {
        candidates.iter().find_map(|candidate| {
            content.find(candidate.as_str()).map(|offset| AnchorMatch {
                offset,
                len: candidate.len(),
            })
        })
    }
}

/// Pattern matcher treating each candidate as a regular expression.
///
/// An invalid pattern counts as non-matching so one bad candidate cannot
/// abort the rest of the list.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexMatcher;

impl AnchorMatcher for RegexMatcher {
    fn find_first(&self, content: &str, candidates: &[String]) -> Option<AnchorMatch> {
        candidates.iter().find_map(|candidate| {
            let pattern = match Regex::new(candidate) {
                Ok(pattern) => pattern,
                Err(err) => {
                    debug!("ignoring invalid anchor pattern {candidate:?}: {err}");
                    return None;
                }
            };
            pattern.find(content).map(|m| AnchorMatch {
                offset: m.start(),
                len: m.len(),
            })
        })
    }
}

//! Structural placement for module-reference statements.
//!
//! Import placement is not anchor-driven: a new reference statement goes
//! immediately after the last existing one, preserving file order. Two
//! surface syntaxes are recognized, the ESM `import ... from ...;` form
//! and the CommonJS `const ... = require(...);` binding.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a module-reference statement at the start of a line.
static REFERENCE_STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:import .* from .*;|const .* = require\(.*\);)").unwrap());

/// Find the insertion offset for a new module-reference statement.
///
/// Returns the byte offset immediately after the last recognized statement
/// (scanning top to bottom). `None` means the file has none and the caller
/// should prepend to the very top of the file.
pub fn insertion_point(content: &str) -> Option<usize> {
    REFERENCE_STATEMENT
        .find_iter(content)
        .last()
        .map(|m| m.end())
}

/// Insert a module-reference statement at its structural position.
///
/// Reference statements stay at column zero by convention, so no
/// indentation is applied.
pub fn insert_import(content: &str, statement: &str) -> String {
    match insertion_point(content) {
        Some(at) => {
            let mut out = String::with_capacity(content.len() + statement.len() + 1);
            out.push_str(&content[..at]);
            out.push('\n');
            out.push_str(statement);
            out.push_str(&content[at..]);
            out
        }
        None => format!("{statement}\n{content}"),
    }
}

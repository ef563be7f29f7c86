//! Directive types for source modification.

use serde::{Deserialize, Serialize};

/// Where an injected block goes relative to its matched anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// On its own line(s) above the anchor's line.
    Before,
    /// Immediately after the anchor's end offset.
    After,
}

/// One declarative edit request against a project source file.
///
/// Directives apply in list order; each insertion is visible to the
/// directives that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Directive {
    /// Add a module-reference statement. The insertion point is structural
    /// (after the last existing reference statement), so no anchor is
    /// needed.
    Import { text: String },

    /// Insert an arbitrary block relative to the first matching anchor.
    ///
    /// `anchors` is an ordered candidate list; the first one found in the
    /// content wins.
    Inject {
        text: String,
        anchors: Vec<String>,
        location: Location,
    },
}

impl Directive {
    /// Shorthand for an import directive.
    pub fn import(text: impl Into<String>) -> Self {
        Self::Import { text: text.into() }
    }

    /// Shorthand for an inject directive with a single anchor.
    pub fn inject(
        text: impl Into<String>,
        anchor: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::Inject {
            text: text.into(),
            anchors: vec![anchor.into()],
            location,
        }
    }

    /// The text this directive would insert.
    pub fn text(&self) -> &str {
        match self {
            Self::Import { text } => text,
            Self::Inject { text, .. } => text,
        }
    }
}

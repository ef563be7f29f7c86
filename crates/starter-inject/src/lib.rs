//! Anchor-based source patching for Express Starter
//!
//! Inserts declarative modifications into existing project source files
//! without parsing them. Anchors are recognizable substrings, indentation
//! is carried over from the anchor line, and every insertion is idempotent
//! so plugins can be re-applied safely.

pub mod directive;
pub mod imports;
pub mod inject;
pub mod matcher;

pub use directive::{Directive, Location};
pub use inject::{InjectOutcome, Injector};
pub use matcher::{AnchorMatch, AnchorMatcher, RegexMatcher, SubstringMatcher};

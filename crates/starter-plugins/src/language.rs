//! Language variant of a generated project.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Source dialect of the target project.
///
/// Templates come in near-duplicate TypeScript and JavaScript flavors;
/// plugins pick file extensions and statement syntax from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageVariant {
    TypeScript,
    JavaScript,
}

impl LanguageVariant {
    /// Source file extension for this variant.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::TypeScript => "ts",
            Self::JavaScript => "js",
        }
    }

    /// Detect the variant of an existing project tree.
    ///
    /// A `tsconfig.json` at the project root marks a TypeScript project.
    pub fn detect(project_root: &Path) -> Self {
        if project_root.join("tsconfig.json").is_file() {
            Self::TypeScript
        } else {
            Self::JavaScript
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, Self::TypeScript)
    }
}

impl std::fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeScript => write!(f, "typescript"),
            Self::JavaScript => write!(f, "javascript"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_typescript_project() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();

        assert_eq!(LanguageVariant::detect(temp.path()), LanguageVariant::TypeScript);
    }

    #[test]
    fn test_detect_javascript_project() {
        let temp = TempDir::new().unwrap();

        assert_eq!(LanguageVariant::detect(temp.path()), LanguageVariant::JavaScript);
    }

    #[test]
    fn test_extension() {
        assert_eq!(LanguageVariant::TypeScript.extension(), "ts");
        assert_eq!(LanguageVariant::JavaScript.extension(), "js");
    }
}

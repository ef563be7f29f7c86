//! Template catalog and selection.

use starter_plugins::LanguageVariant;

use crate::error::{CliError, Result};

/// Boilerplate templates, keyed by "<language>-<database>".
pub const TEMPLATE_MAP: [(&str, &str); 4] = [
    (
        "javascript-mongo",
        "https://github.com/logicalHassan/node-express-boilerplate.git",
    ),
    (
        "typescript-mongo",
        "https://github.com/logicalHassan/nodets-express-boilerplate.git",
    ),
    (
        "typescript-prisma",
        "https://github.com/logicalHassan/express-postgres-prisma.git",
    ),
    (
        "typescript-drizzle",
        "https://github.com/logicalHassan/express-postgres-drizzle.git",
    ),
];

/// Database flavor of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Database {
    Mongo,
    Prisma,
    Drizzle,
}

impl Database {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mongo => "mongo",
            Self::Prisma => "prisma",
            Self::Drizzle => "drizzle",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "prisma" => Ok(Self::Prisma),
            "drizzle" => Ok(Self::Drizzle),
            _ => Err(CliError::user(format!(
                "Invalid database '{value}'. Must be 'mongo', 'prisma' or 'drizzle'."
            ))),
        }
    }
}

pub fn parse_language(value: &str) -> Result<LanguageVariant> {
    match value {
        "typescript" | "ts" => Ok(LanguageVariant::TypeScript),
        "javascript" | "js" => Ok(LanguageVariant::JavaScript),
        _ => Err(CliError::user(format!(
            "Invalid language '{value}'. Must be 'typescript' or 'javascript'."
        ))),
    }
}

/// Template key for a language/database pair.
///
/// JavaScript ships a single MongoDB template; TypeScript has one per
/// database flavor.
pub fn template_key(language: LanguageVariant, database: Database) -> String {
    match language {
        LanguageVariant::JavaScript => "javascript-mongo".to_string(),
        LanguageVariant::TypeScript => format!("typescript-{}", database.as_str()),
    }
}

/// Repository URL for a template key.
pub fn template_url(key: &str) -> Option<&'static str> {
    TEMPLATE_MAP
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, url)| *url)
}

/// Directory holding the bundled code generators for a template.
pub fn generator_dir(template_key: &str) -> &'static str {
    if template_key == "typescript-prisma" {
        "templates"
    } else {
        "generators"
    }
}

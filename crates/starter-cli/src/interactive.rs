//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based interactive selection.

use dialoguer::{Confirm, Input, Select};
use starter_plugins::LanguageVariant;

use crate::commands::NewConfig;
use crate::error::Result;
use crate::template::Database;

/// Run the guided scaffold prompts and return a NewConfig.
pub fn prompt_new(default_name: &str) -> Result<NewConfig> {
    println!();

    let name: String = Input::new()
        .with_prompt("Project name")
        .default(default_name.to_string())
        .interact_text()?;

    let languages = &["TypeScript (recommended)", "JavaScript"];
    let language_idx = Select::new()
        .with_prompt("Choose language")
        .items(languages)
        .default(0)
        .interact()?;
    let language = if language_idx == 0 {
        LanguageVariant::TypeScript
    } else {
        LanguageVariant::JavaScript
    };

    // JavaScript ships a single MongoDB template, so only TypeScript
    // gets the database prompt.
    let database = if language.is_typescript() {
        let databases = &["MongoDB", "PostgreSQL (Prisma)", "PostgreSQL (Drizzle)"];
        let database_idx = Select::new()
            .with_prompt("Choose database")
            .items(databases)
            .default(0)
            .interact()?;
        match database_idx {
            1 => Database::Prisma,
            2 => Database::Drizzle,
            _ => Database::Mongo,
        }
    } else {
        Database::Mongo
    };

    let include_generators = Confirm::new()
        .with_prompt("Include code generators?")
        .default(true)
        .interact()?;

    Ok(NewConfig {
        name,
        language,
        database,
        include_generators,
    })
}

//! New command implementation
//!
//! Scaffolds a project by cloning a boilerplate template, then detaches
//! it from the template repository and bootstraps its environment file.

use std::path::Path;
use std::process::Command;

use colored::Colorize;
use starter_plugins::LanguageVariant;

use crate::error::{CliError, Result};
use crate::interactive;
use crate::template::{self, Database};

/// Resolved answers for the scaffold flow.
#[derive(Debug, Clone)]
pub struct NewConfig {
    pub name: String,
    pub language: LanguageVariant,
    pub database: Database,
    pub include_generators: bool,
}

/// Run the new command.
///
/// Flags fully describe a project (`name` plus `language`); anything
/// less falls back to the guided prompts.
pub fn run_new_command(
    base_dir: &Path,
    name: Option<String>,
    language: Option<String>,
    database: Option<String>,
    no_generators: bool,
) -> Result<()> {
    let config = match (name, language) {
        (Some(name), Some(language)) => {
            let language = template::parse_language(&language)?;
            let database = match database {
                Some(database) => {
                    let database = Database::parse(&database)?;
                    if !language.is_typescript() && database != Database::Mongo {
                        return Err(CliError::user(
                            "JavaScript templates only support MongoDB.",
                        ));
                    }
                    database
                }
                None => Database::Mongo,
            };
            NewConfig {
                name,
                language,
                database,
                include_generators: !no_generators,
            }
        }
        (name, _) => interactive::prompt_new(name.as_deref().unwrap_or("my-api-server"))?,
    };

    run_new(base_dir, &config)
}

/// Scaffold a project under `base_dir` from the selected template.
pub fn run_new(base_dir: &Path, config: &NewConfig) -> Result<()> {
    let project_path = base_dir.join(&config.name);
    if project_path.exists() {
        return Err(CliError::user(format!(
            "A directory named '{}' already exists. Please choose another.",
            config.name
        )));
    }

    let key = template::template_key(config.language, config.database);
    let url = template::template_url(&key)
        .ok_or_else(|| CliError::user(format!("No template found for '{key}'")))?;

    println!(
        "{} Cloning template {}...",
        "=>".blue().bold(),
        key.cyan()
    );
    clone_template(url, &project_path)?;
    remove_git_dir(&project_path)?;

    if !config.include_generators {
        cleanup_generators(&project_path, template::generator_dir(&key))?;
    }

    bootstrap_env(&project_path)?;

    println!("{} Project setup complete!", "OK".green().bold());
    println!();
    println!("Next steps:");
    println!("   cd {}", config.name);
    println!("   pnpm install");
    println!("   pnpm run dev");
    println!();
    Ok(())
}

/// Shallow-clone a template repository into `dest`.
fn clone_template(url: &str, dest: &Path) -> Result<()> {
    let output = Command::new("git")
        .args(["clone", "--depth", "1", url])
        .arg(dest)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CliError::user(format!(
            "Failed to clone template: {}",
            stderr.trim()
        )));
    }

    Ok(())
}

/// Detach the scaffold from the template's git history.
fn remove_git_dir(project: &Path) -> Result<()> {
    let git_dir = project.join(".git");
    if git_dir.is_dir() {
        std::fs::remove_dir_all(git_dir)?;
    }
    Ok(())
}

/// Strip the bundled code generators from a freshly cloned scaffold.
///
/// Removes the generator directory and plopfile, and drops the plop
/// devDependency and generate script from package.json.
fn cleanup_generators(project: &Path, generator_dir: &str) -> Result<()> {
    let generators = project.join(generator_dir);
    if generators.is_dir() {
        std::fs::remove_dir_all(&generators)?;
    }

    let plopfile = project.join("plopfile.js");
    if plopfile.is_file() {
        std::fs::remove_file(&plopfile)?;
    }

    let manifest_path = project.join("package.json");
    if manifest_path.is_file() {
        let raw = std::fs::read_to_string(&manifest_path)?;
        let mut manifest: serde_json::Value = serde_json::from_str(&raw)?;
        if let Some(root) = manifest.as_object_mut() {
            if let Some(dev) = root
                .get_mut("devDependencies")
                .and_then(|v| v.as_object_mut())
            {
                dev.remove("plop");
            }
            if let Some(scripts) = root.get_mut("scripts").and_then(|v| v.as_object_mut()) {
                scripts.remove("generate");
            }
        }
        let pretty = format!("{}\n", serde_json::to_string_pretty(&manifest)?);
        starter_fs::io::write_text(&manifest_path, &pretty)?;
    }

    println!("Cleaned up generators.");
    Ok(())
}

/// Copy .env.example to .env so the scaffold runs out of the box.
fn bootstrap_env(project: &Path) -> Result<()> {
    let example = project.join(".env.example");
    let env_file = project.join(".env");
    if example.is_file() && !env_file.exists() {
        std::fs::copy(&example, &env_file)?;
        println!("Created .env from .env.example");
    }
    Ok(())
}

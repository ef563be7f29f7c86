//! Add command implementation
//!
//! Retrofits feature plugins into an existing generated project.

use std::path::Path;

use colored::Colorize;
use starter_plugins::{
    ActionOutcome, ActionReport, FileActions, LanguageVariant, PluginRegistry, manifest,
};

use crate::error::{CliError, Result};

/// Run the add command.
///
/// Applies each plugin in turn and merges its dependency maps into the
/// project manifest. A failing plugin is reported and counted but does
/// not stop the remaining plugins.
pub fn run_add(project_root: &Path, slugs: &[String]) -> Result<()> {
    let registry = PluginRegistry::with_builtins();

    if !project_root.join("package.json").is_file() {
        return Err(CliError::user(format!(
            "{} does not look like a generated project (package.json not found)",
            project_root.display()
        )));
    }

    let language = LanguageVariant::detect(project_root);
    println!(
        "{} Applying plugins to {} ({})",
        "=>".blue().bold(),
        project_root.display().to_string().cyan(),
        language
    );

    let mut actions = FileActions::new(project_root);
    let mut failures = 0;

    for slug in slugs {
        let Some(plugin) = registry.get(slug) else {
            eprintln!(
                "{} Unknown plugin '{}'. Available: {}",
                "!".red().bold(),
                slug,
                registry.list().join(", ")
            );
            failures += 1;
            continue;
        };

        println!();
        println!("{} {}", "=>".blue().bold(), plugin.name().cyan());

        let applied = plugin
            .apply(project_root, language, &mut actions)
            .and_then(|()| {
                manifest::merge_dependencies(
                    project_root,
                    &plugin.dependencies(),
                    &plugin.dev_dependencies(),
                )
            });

        for report in actions.take_reports() {
            print_report(&report);
        }

        match applied {
            Ok(manifest_changed) => {
                if manifest_changed {
                    print_report(&ActionReport {
                        outcome: ActionOutcome::Updated,
                        path: "package.json".to_string(),
                        detail: None,
                    });
                }
            }
            Err(err) => {
                eprintln!("{} Plugin '{}' failed: {}", "!".red().bold(), slug, err);
                failures += 1;
            }
        }
    }

    println!();
    if failures > 0 {
        return Err(CliError::user(format!("{failures} plugin(s) failed")));
    }

    println!("{} Plugins applied!", "OK".green().bold());
    println!();
    println!("Run {} to install new dependencies.", "pnpm install".cyan());
    Ok(())
}

fn print_report(report: &ActionReport) {
    let badge = match report.outcome {
        ActionOutcome::Created => "CREATE".green(),
        ActionOutcome::Updated => "UPDATE".yellow(),
        ActionOutcome::Skipped => "SKIP  ".dimmed(),
        ActionOutcome::Error => "ERROR ".red(),
    };
    match &report.detail {
        Some(detail) => println!(" {badge} {} ({detail})", report.path),
        None => println!(" {badge} {}", report.path),
    }
}

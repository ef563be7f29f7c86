//! List command implementation

use colored::Colorize;
use starter_plugins::PluginRegistry;

use crate::error::Result;

/// Print the available feature plugins.
pub fn run_list() -> Result<()> {
    let registry = PluginRegistry::with_builtins();

    println!("{} Available plugins:", "=>".blue().bold());
    for plugin in registry.iter() {
        println!("  {}  {}", plugin.slug().cyan(), plugin.name());

        let dependencies = plugin.dependencies();
        if !dependencies.is_empty() {
            let list: Vec<String> = dependencies
                .iter()
                .map(|(name, range)| format!("{name}@{range}"))
                .collect();
            println!("      adds: {}", list.join(", ").dimmed());
        }
    }
    println!();
    println!(
        "Apply one with {}.",
        "starter add <plugin>".cyan()
    );
    Ok(())
}

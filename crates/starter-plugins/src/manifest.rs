//! Generic dependency merge into the project manifest.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::plugin::DependencyMap;

/// Merge dependency maps into the project's `package.json`.
///
/// Missing sections are created; an existing pin is overwritten by the
/// incoming range (last wins). Key order of untouched entries is
/// preserved. Returns true when the manifest changed on disk.
pub fn merge_dependencies(
    project_root: &Path,
    dependencies: &DependencyMap,
    dev_dependencies: &DependencyMap,
) -> Result<bool> {
    if dependencies.is_empty() && dev_dependencies.is_empty() {
        return Ok(false);
    }

    let manifest_path = project_root.join("package.json");
    let raw = starter_fs::io::read_text(&manifest_path)?;
    let mut manifest: Value = serde_json::from_str(&raw)?;

    let mut changed = false;
    changed |= merge_section(&mut manifest, "dependencies", dependencies);
    changed |= merge_section(&mut manifest, "devDependencies", dev_dependencies);

    if changed {
        let pretty = format!("{}\n", serde_json::to_string_pretty(&manifest)?);
        starter_fs::io::write_text(&manifest_path, &pretty)?;
    }

    Ok(changed)
}

fn merge_section(manifest: &mut Value, section: &str, incoming: &DependencyMap) -> bool {
    if incoming.is_empty() {
        return false;
    }

    let Some(root) = manifest.as_object_mut() else {
        return false;
    };

    let entry = root
        .entry(section.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(section_map) = entry.as_object_mut() else {
        return false;
    };

    let mut changed = false;
    for (name, range) in incoming {
        let value = Value::String(range.clone());
        if section_map.get(name) != Some(&value) {
            section_map.insert(name.clone(), value);
            changed = true;
        }
    }
    changed
}

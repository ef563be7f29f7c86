//! The contract a feature plugin implements.

use std::collections::BTreeMap;
use std::path::Path;

use crate::actions::FileActions;
use crate::error::Result;
use crate::language::LanguageVariant;

/// Package dependency map (name -> semver range), ordered so manifest
/// merges are deterministic.
pub type DependencyMap = BTreeMap<String, String>;

/// A retrofittable feature.
///
/// Plugins are stateless: `apply` derives everything from the project
/// root and language variant, and touches the project only through the
/// given `FileActions`. Dependency maps are merged into the project
/// manifest by the caller, not by the plugin.
pub trait FeaturePlugin: Send + Sync {
    /// Registry slug (e.g. "redis").
    fn slug(&self) -> &str;

    /// Human-readable name (e.g. "Redis (Caching)").
    fn name(&self) -> &str;

    /// Runtime dependencies to merge into the manifest.
    fn dependencies(&self) -> DependencyMap {
        DependencyMap::new()
    }

    /// Development dependencies to merge into the manifest.
    fn dev_dependencies(&self) -> DependencyMap {
        DependencyMap::new()
    }

    /// Apply the feature to a generated project.
    fn apply(
        &self,
        project_root: &Path,
        language: LanguageVariant,
        actions: &mut FileActions,
    ) -> Result<()>;
}

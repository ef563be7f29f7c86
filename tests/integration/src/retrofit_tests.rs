//! End-to-end integration tests for the retrofit flow
//!
//! Exercises the complete path a plugin batch takes: registry lookup ->
//! file actions -> injection -> manifest merge, including the
//! one-failing-plugin-does-not-stop-the-batch contract.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use starter_inject::Directive;
use starter_plugins::{
    ActionOutcome, Error, FeaturePlugin, FileActions, LanguageVariant, PluginRegistry, Result,
    manifest,
};
use tempfile::TempDir;

/// Set up a minimal generated TypeScript project.
fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("tsconfig.json"), "{}").unwrap();
    fs::write(
        root.join("package.json"),
        "{\n  \"name\": \"api\",\n  \"scripts\": {\n    \"dev\": \"tsx watch src/index.ts\"\n  },\n  \"dependencies\": {\n    \"express\": \"^4.18.0\"\n  }\n}\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("src/config")).unwrap();
    fs::write(
        root.join("src/index.ts"),
        "import { app } from './app';\nimport { env } from './config/env';\n\nconst start = async () => {\n  await mongoose.connect(env.mongoose.url);\n  app.listen(env.port);\n};\n\nstart();\n",
    )
    .unwrap();
    fs::write(
        root.join("src/config/env.ts"),
        "const envSchema = z.object({\n  PORT: z.coerce.number().default(3000),\n});\n\nconst envVars = envSchema.parse(process.env);\n\nexport const env = {\n  port: envVars.PORT,\n};\n",
    )
    .unwrap();
    fs::write(root.join(".env.example"), "PORT=3000\n").unwrap();

    temp
}

/// Apply one plugin the way the CLI layer does: file actions first, then
/// the manifest merge, with the error caught by the caller.
fn apply_plugin(
    plugin: &dyn FeaturePlugin,
    root: &Path,
    language: LanguageVariant,
    actions: &mut FileActions,
) -> Result<bool> {
    plugin.apply(root, language, actions)?;
    manifest::merge_dependencies(root, &plugin.dependencies(), &plugin.dev_dependencies())
}

#[test]
fn test_full_batch_applies_both_builtin_plugins() {
    let temp = setup_project();
    let root = temp.path();
    let registry = PluginRegistry::with_builtins();
    let language = LanguageVariant::detect(root);
    assert_eq!(language, LanguageVariant::TypeScript);

    let mut actions = FileActions::new(root);
    for slug in ["redis", "cron"] {
        let plugin = registry.get(slug).unwrap();
        apply_plugin(plugin, root, language, &mut actions).unwrap();
    }

    // Created files from both plugins.
    assert!(root.join("src/lib/redis.ts").is_file());
    assert!(root.join("docker-compose.redis.yml").is_file());
    assert!(root.join("src/jobs/scheduler.ts").is_file());

    // Both entry-point injections landed, in plugin order.
    let index = fs::read_to_string(root.join("src/index.ts")).unwrap();
    assert!(index.contains("import { connectRedis } from './lib/redis';"));
    assert!(index.contains("import { startJobs } from './jobs/scheduler';"));
    let connect_at = index.find("await connectRedis();").unwrap();
    let jobs_at = index.find("startJobs();").unwrap();
    let mongoose_at = index.find("await mongoose.connect").unwrap();
    assert!(mongoose_at < connect_at);
    assert!(mongoose_at < jobs_at);

    // Dependencies from both plugins merged into one manifest.
    let manifest_raw = fs::read_to_string(root.join("package.json")).unwrap();
    let manifest_json: serde_json::Value = serde_json::from_str(&manifest_raw).unwrap();
    assert_eq!(manifest_json["dependencies"]["redis"], "^4.6.12");
    assert_eq!(manifest_json["dependencies"]["node-cron"], "^3.0.3");
    assert_eq!(manifest_json["dependencies"]["express"], "^4.18.0");

    // No action failed.
    assert!(
        actions
            .reports()
            .iter()
            .all(|r| r.outcome != ActionOutcome::Error)
    );
}

#[test]
fn test_rerunning_the_batch_changes_nothing() {
    let temp = setup_project();
    let root = temp.path();
    let registry = PluginRegistry::with_builtins();

    let mut first = FileActions::new(root);
    for plugin in registry.iter() {
        apply_plugin(plugin, root, LanguageVariant::TypeScript, &mut first).unwrap();
    }
    let index_snapshot = fs::read_to_string(root.join("src/index.ts")).unwrap();
    let manifest_snapshot = fs::read_to_string(root.join("package.json")).unwrap();

    let mut second = FileActions::new(root);
    for plugin in registry.iter() {
        let changed =
            apply_plugin(plugin, root, LanguageVariant::TypeScript, &mut second).unwrap();
        assert!(!changed, "manifest must not change on re-run");
    }

    assert!(
        second
            .reports()
            .iter()
            .all(|r| r.outcome == ActionOutcome::Skipped)
    );
    assert_eq!(
        fs::read_to_string(root.join("src/index.ts")).unwrap(),
        index_snapshot
    );
    assert_eq!(
        fs::read_to_string(root.join("package.json")).unwrap(),
        manifest_snapshot
    );
}

/// A plugin whose apply fails after doing some work.
struct BrokenPlugin;

impl FeaturePlugin for BrokenPlugin {
    fn slug(&self) -> &str {
        "broken"
    }

    fn name(&self) -> &str {
        "Broken (Test)"
    }

    fn apply(
        &self,
        _project_root: &Path,
        _language: LanguageVariant,
        actions: &mut FileActions,
    ) -> Result<()> {
        actions.create_file("src/broken.ts", "export {};\n")?;
        Err(Error::Io(std::io::Error::other("simulated failure")))
    }
}

#[test]
fn test_failing_plugin_does_not_stop_the_batch() {
    let temp = setup_project();
    let root = temp.path();

    let mut registry = PluginRegistry::with_builtins();
    registry.register(Box::new(BrokenPlugin));

    let language = LanguageVariant::detect(root);
    let mut actions = FileActions::new(root);
    let mut failures = 0;

    // "broken" sorts before both builtins, so it fails first and the
    // real plugins must still run.
    for plugin in registry.iter() {
        if apply_plugin(plugin, root, language, &mut actions).is_err() {
            failures += 1;
        }
    }

    assert_eq!(failures, 1);
    assert!(root.join("src/lib/redis.ts").is_file());
    assert!(root.join("src/jobs/scheduler.ts").is_file());
}

#[test]
fn test_directives_from_json_schema_apply_cleanly() {
    // Plugins outside this crate hand directives over as JSON; the whole
    // retrofit path works off the deserialized form.
    let temp = setup_project();
    let root = temp.path();

    let raw = r#"[
        {"kind": "import", "text": "import { cache } from './lib/cache';"},
        {"kind": "inject", "text": "cache.warm();", "anchors": ["app.listen(env.port);"], "location": "before"}
    ]"#;
    let directives: Vec<Directive> = serde_json::from_str(raw).unwrap();

    let mut actions = FileActions::new(root);
    let outcome = actions.update_file("src/index.ts", &directives).unwrap();
    assert_eq!(outcome, ActionOutcome::Updated);

    let index = fs::read_to_string(root.join("src/index.ts")).unwrap();
    assert!(index.contains("import { cache } from './lib/cache';"));
    assert!(index.contains("  cache.warm();\n  app.listen(env.port);"));
}

//! Tool configuration layering across crates
//!
//! Defaults, `modkit.toml`, and explicit config files in TOML, JSON or
//! YAML, all feeding the hashing rules.

use modkit_core::{ConfigResolver, FileHash, HashRules, ToolConfig, compute_manifest_with};
use modkit_fs::NormalizedPath;
use modkit_test_utils::TestMod;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn resolve(module: &TestMod) -> ToolConfig {
    ConfigResolver::new(NormalizedPath::new(module.root()))
        .resolve()
        .unwrap()
}

#[test]
fn test_extra_exclude_extends_defaults() {
    let module = TestMod::new();
    module.write(
        "modkit.toml",
        "[hash]\nextra_exclude = [\"notes\", \"build.log\"]\n",
    );
    module.write("notes/todo.txt", "ship it");
    module.write("build.log", "ok");
    module.write("README.md", "# still excluded");
    module.write("a.txt", "hello");

    let config = resolve(&module);
    let manifest =
        compute_manifest_with(module.root(), &HashRules::from_settings(&config.hash)).unwrap();

    assert_eq!(manifest.keys().collect::<Vec<_>>(), vec!["a.txt"]);
}

#[test]
fn test_install_only_names_are_configurable() {
    let module = TestMod::new();
    module.write(
        "modkit.toml",
        "[hash]\ninstall_only = [\"config.json\", \"user.ini\"]\n",
    );
    module.write_bytes("Settings/user.ini", &[0xFF]);
    module.write("config.json", "{}");

    let config = resolve(&module);
    let manifest =
        compute_manifest_with(module.root(), &HashRules::from_settings(&config.hash)).unwrap();

    assert_eq!(manifest.install_only_count(), 2);
    assert_eq!(
        manifest.get("Settings/user.ini"),
        Some(&FileHash::InstallOnly)
    );
}

#[test]
fn test_replacing_exclude_list_still_skips_descriptor_and_tool_config() {
    let module = TestMod::new().with_descriptor();
    module.write("modkit.toml", "[hash]\nexclude = []\n");
    module.write("README.md", "# now hashed");

    let config = resolve(&module);
    let manifest =
        compute_manifest_with(module.root(), &HashRules::from_settings(&config.hash)).unwrap();

    assert_eq!(manifest.keys().collect::<Vec<_>>(), vec!["README.md"]);
}

#[test]
fn test_explicit_json_config_replaces_modkit_toml() {
    let module = TestMod::new();
    module.write("modkit.toml", "[copy]\nsource_file = \"ignored.cs\"\n");

    module.write(
        "ci/modkit.json",
        r#"{ "copy": { "install_dir": "/srv/hunterpie/modules/SyncPlugin", "source_file": "Plugin.cs" } }"#,
    );

    let config = ConfigResolver::new(NormalizedPath::new(module.root()))
        .with_config_file(NormalizedPath::new(module.path("ci/modkit.json")))
        .resolve()
        .unwrap();

    let mut expected = ToolConfig::default();
    expected.copy.install_dir = PathBuf::from("/srv/hunterpie/modules/SyncPlugin");
    expected.copy.source_file = "Plugin.cs".into();
    assert_eq!(config, expected);
}

#[test]
fn test_yaml_config_is_accepted() {
    let module = TestMod::new();
    module.write(
        "release.yaml",
        "copy:\n  artifact_file: SyncPlugin.Release.dll\n",
    );

    let config = ConfigResolver::new(NormalizedPath::new(module.root()))
        .with_config_file(NormalizedPath::new(module.path("release.yaml")))
        .resolve()
        .unwrap();

    assert_eq!(config.copy.artifact_file, "SyncPlugin.Release.dll");
    assert_eq!(config.copy.source_file, "main.cs");
}

#[test]
fn test_malformed_modkit_toml_is_an_error() {
    let module = TestMod::new();
    module.write("modkit.toml", "[hash\nexclude = ");

    let result = ConfigResolver::new(NormalizedPath::new(module.root())).resolve();

    assert!(matches!(
        result,
        Err(modkit_core::Error::Fs(modkit_fs::Error::ConfigParse { .. }))
    ));
}

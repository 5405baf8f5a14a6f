//! End-to-end release flow
//!
//! Exercises the sequence a mod author runs before packaging a release:
//! pull the freshly built plugin, push the source, hash the tree, and
//! record the result in `module.json`.

use modkit_core::{
    ArtifactCopier, ConfigResolver, FileHash, HashRules, ModuleDescriptor, compute_manifest,
    compute_manifest_with, persist,
};
use modkit_fs::NormalizedPath;
use modkit_fs::checksum::sha256_hex;
use modkit_test_utils::TestMod;
use modkit_test_utils::module::SAMPLE_DESCRIPTOR;
use pretty_assertions::assert_eq;

/// A checkout plus a sibling "game installation" directory.
fn setup_checkout() -> TestMod {
    let module = TestMod::new();
    module.write("checkout/module.json", SAMPLE_DESCRIPTOR);
    module.write("checkout/main.cs", "namespace SyncPlugin { class Plugin {} }");
    module.write("checkout/README.md", "# SyncPlugin");
    module.write("checkout/config.json", "{ \"PollInterval\": 100 }");
    module.write("checkout/Assets/Layout.xaml", "<Grid>\r\n</Grid>\r\n");
    module.write_bytes("game/SyncPlugin.dll", &[0xDE, 0xAD, 0xBE, 0xEF]);
    module
}

#[test]
fn test_pull_then_hash_records_new_artifact() {
    let module = setup_checkout();
    let checkout = module.path("checkout");

    let mut config = ConfigResolver::new(NormalizedPath::new(&checkout))
        .resolve()
        .unwrap();
    config.copy.install_dir = module.path("game");

    let report = ArtifactCopier::new(&checkout, config.copy.clone())
        .pull_artifact()
        .unwrap();
    assert_eq!(report.bytes, 4);

    let manifest =
        compute_manifest_with(&checkout, &HashRules::from_settings(&config.hash)).unwrap();
    persist(&manifest, &checkout.join("module.json")).unwrap();

    let descriptor =
        ModuleDescriptor::load(&NormalizedPath::new(checkout.join("module.json"))).unwrap();
    let recorded = descriptor.file_hashes().unwrap().unwrap();

    assert_eq!(recorded, manifest);
    assert_eq!(
        recorded.keys().collect::<Vec<_>>(),
        vec!["Assets/Layout.xaml", "SyncPlugin.dll", "config.json"]
    );
    assert_eq!(
        recorded.get("SyncPlugin.dll").unwrap().as_str(),
        "5f78c33274e43fa9de5659265c1d917e25c03722dcb0b8d27db8d5feaa813953"
    );
    assert_eq!(
        recorded.get("Assets/Layout.xaml").unwrap().as_str(),
        sha256_hex(b"<Grid>\n</Grid>\n")
    );
    assert_eq!(recorded.get("config.json"), Some(&FileHash::InstallOnly));
    assert_eq!(descriptor.document()["Version"], "1.2.0");
}

#[test]
fn test_push_leaves_manifest_unchanged() {
    let module = setup_checkout();
    let checkout = module.path("checkout");
    let before = compute_manifest(&checkout).unwrap();

    let mut config = ConfigResolver::new(NormalizedPath::new(&checkout))
        .resolve()
        .unwrap();
    config.copy.install_dir = module.path("game");
    ArtifactCopier::new(&checkout, config.copy)
        .push_source()
        .unwrap();

    module.assert_file_exists("game/main.cs");
    assert_eq!(compute_manifest(&checkout).unwrap(), before);
}

#[test]
fn test_failed_hash_leaves_descriptor_untouched() {
    let module = setup_checkout();
    let checkout = module.path("checkout");
    module.write_bytes("checkout/Assets/strings.resx", &[0xFF, 0xFF]);
    let before = std::fs::read_to_string(checkout.join("module.json")).unwrap();

    let result = compute_manifest(&checkout)
        .and_then(|manifest| persist(&manifest, &checkout.join("module.json")));

    assert!(matches!(result, Err(modkit_core::Error::Decode { .. })));
    assert_eq!(
        std::fs::read_to_string(checkout.join("module.json")).unwrap(),
        before
    );
}

#[test]
fn test_line_ending_churn_does_not_change_manifest() {
    let module = setup_checkout();
    let checkout = module.path("checkout");
    let before = compute_manifest(&checkout).unwrap();

    // Same checkout with core.autocrlf off, plus a locally tuned config
    module.write("checkout/Assets/Layout.xaml", "<Grid>\n</Grid>\n");
    module.write("checkout/config.json", "{ \"PollInterval\": 250 }");

    assert_eq!(compute_manifest(&checkout).unwrap(), before);
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_followed() {
    let module = setup_checkout();
    let checkout = module.path("checkout");
    module.write("shared/Icons.map", "icons");
    std::os::unix::fs::symlink(module.path("shared"), checkout.join("Shared")).unwrap();

    let manifest = compute_manifest(&checkout).unwrap();

    assert_eq!(
        manifest.get("Shared/Icons.map").unwrap().as_str(),
        sha256_hex(b"icons")
    );
}

//! [`TestMod`] builder for mod checkout scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A descriptor shaped like the ones shipped with HunterPie plugins.
pub const SAMPLE_DESCRIPTOR: &str = r#"{
    "Name": "SyncPlugin",
    "Description": "Synchronizes monster data between party members",
    "Author": "SyncPlugin contributors",
    "Version": "1.2.0",
    "Update": {
        "UpdateUrl": "https://example.invalid/SyncPlugin/",
        "MinimumVersion": "1.0.3.0",
        "FileHashes": {
            "stale.dll": "0000000000000000000000000000000000000000000000000000000000000000"
        }
    },
    "Dependencies": []
}"#;

/// A temporary mod checkout with helpers for writing files and reading the
/// descriptor back.
///
/// # Example
///
/// ```rust,no_run
/// use modkit_test_utils::TestMod;
///
/// let module = TestMod::new().with_descriptor();
/// module.write("a.txt", "hello");
/// module.write_bytes("b.dll", &[0xDE, 0xAD, 0xBE, 0xEF]);
/// module.assert_file_exists("module.json");
/// ```
pub struct TestMod {
    temp_dir: TempDir,
}

impl Default for TestMod {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMod {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Write [`SAMPLE_DESCRIPTOR`] as `module.json`.
    pub fn with_descriptor(self) -> Self {
        self.write("module.json", SAMPLE_DESCRIPTOR);
        self
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` under the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write text to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        self.write_bytes(relative, content.as_bytes());
    }

    /// Write bytes to `relative`, creating parent directories.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write_bytes(&self, relative: &str, content: &[u8]) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestMod::write_bytes: failed to create {parent:?}: {e}"));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestMod::write_bytes: failed to write {path:?}: {e}"));
    }

    /// Create an (empty) directory at `relative`.
    pub fn mkdir(&self, relative: &str) {
        fs::create_dir_all(self.path(relative)).unwrap();
    }

    /// Parse `module.json` from the root.
    ///
    /// # Panics
    /// Panics if the descriptor is missing or not valid JSON.
    pub fn descriptor(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.path("module.json"))
            .unwrap_or_else(|e| panic!("TestMod::descriptor: failed to read module.json: {e}"));
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("TestMod::descriptor: invalid JSON: {e}"))
    }

    /// Assert that `relative` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `relative` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}

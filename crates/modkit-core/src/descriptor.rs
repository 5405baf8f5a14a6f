//! `module.json` descriptor handling
//!
//! The descriptor is owned by the mod loader; this module only ever touches
//! `Update.FileHashes`. Everything else, including key order, is written
//! back exactly as it was read.

use modkit_fs::config::to_json_pretty;
use modkit_fs::{NormalizedPath, io};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::info;

use crate::manifest::Manifest;
use crate::{Error, Result};

const UPDATE_KEY: &str = "Update";
const FILE_HASHES_KEY: &str = "FileHashes";

/// An in-memory `module.json` document.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    path: NormalizedPath,
    document: Value,
}

impl ModuleDescriptor {
    /// Read and validate the descriptor at `path`.
    ///
    /// # Errors
    ///
    /// [`Error::DescriptorFormat`] if the file is missing, is not UTF-8,
    /// is not valid JSON, or has no `Update` object.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let native = path.to_native();
        let bytes = io::read_bytes(&native).map_err(|e| {
            if e.is_not_found() {
                Error::descriptor(&native, "file not found")
            } else {
                Error::Fs(e)
            }
        })?;
        let content = String::from_utf8(bytes).map_err(|e| {
            Error::descriptor(
                &native,
                format!(
                    "not valid UTF-8 (invalid byte at offset {})",
                    e.utf8_error().valid_up_to()
                ),
            )
        })?;

        let document: Value = serde_json::from_str(&content)
            .map_err(|e| Error::descriptor(&native, format!("invalid JSON: {e}")))?;

        let descriptor = Self {
            path: path.clone(),
            document,
        };
        descriptor.update_section()?;
        Ok(descriptor)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    fn update_section(&self) -> Result<&Map<String, Value>> {
        let root = self
            .document
            .as_object()
            .ok_or_else(|| Error::descriptor(self.path.to_native(), "root is not a JSON object"))?;
        match root.get(UPDATE_KEY) {
            Some(Value::Object(update)) => Ok(update),
            Some(_) => Err(Error::descriptor(
                self.path.to_native(),
                "`Update` is not a JSON object",
            )),
            None => Err(Error::descriptor(
                self.path.to_native(),
                "missing `Update` object",
            )),
        }
    }

    fn update_section_mut(&mut self) -> Result<&mut Map<String, Value>> {
        let native = self.path.to_native();
        self.document
            .get_mut(UPDATE_KEY)
            .and_then(Value::as_object_mut)
            .ok_or_else(|| Error::descriptor(native, "missing `Update` object"))
    }

    /// The manifest currently recorded in `Update.FileHashes`, if any.
    pub fn file_hashes(&self) -> Result<Option<Manifest>> {
        match self.update_section()?.get(FILE_HASHES_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|e| {
                Error::descriptor(
                    self.path.to_native(),
                    format!("`Update.FileHashes` is not a path-to-hash map: {e}"),
                )
            }),
        }
    }

    /// Replace `Update.FileHashes` wholesale with `manifest`.
    pub fn set_file_hashes(&mut self, manifest: &Manifest) -> Result<()> {
        let value = serde_json::to_value(manifest)?;
        self.update_section_mut()?
            .insert(FILE_HASHES_KEY.to_string(), value);
        Ok(())
    }

    /// Render the document as JSON with 4-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut text = to_json_pretty(&self.document)?;
        text.push('\n');
        Ok(text)
    }

    /// Write the document back to its path in a single atomic write.
    pub fn save(&self) -> Result<()> {
        let text = self.to_pretty_json()?;
        io::write_atomic(&self.path, text.as_bytes())?;
        Ok(())
    }
}

/// Replace `Update.FileHashes` in the descriptor at `descriptor_path` with
/// `manifest`, preserving every other field.
///
/// The whole document is read, mutated in memory, and written once. Nothing
/// is written if the descriptor is missing or malformed.
pub fn persist(manifest: &Manifest, descriptor_path: &Path) -> Result<()> {
    let mut descriptor = ModuleDescriptor::load(&NormalizedPath::new(descriptor_path))?;
    descriptor.set_file_hashes(manifest)?;
    descriptor.save()?;

    info!(
        descriptor = %descriptor_path.display(),
        entries = manifest.len(),
        "updated Update.FileHashes"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::FileHash;
    use std::fs;
    use tempfile::TempDir;

    fn sample_manifest() -> Manifest {
        let mut manifest = Manifest::new();
        manifest.insert("a.txt", FileHash::Digest("aa".repeat(32)));
        manifest.insert("config.json", FileHash::InstallOnly);
        manifest
    }

    #[test]
    fn persist_creates_file_hashes_under_existing_update() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("module.json");
        fs::write(&path, r#"{"Update": {"MinimumVersion": "1.0.3.0"}}"#).unwrap();

        persist(&sample_manifest(), &path).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["Update"]["MinimumVersion"], "1.0.3.0");
        assert_eq!(written["Update"]["FileHashes"]["config.json"], "InstallOnly");
    }

    #[test]
    fn persist_replaces_rather_than_merges() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("module.json");
        fs::write(
            &path,
            r#"{"Update": {"FileHashes": {"stale.txt": "00"}}}"#,
        )
        .unwrap();

        persist(&sample_manifest(), &path).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(written["Update"]["FileHashes"].get("stale.txt").is_none());
        assert_eq!(written["Update"]["FileHashes"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn missing_descriptor_is_format_error() {
        let temp = TempDir::new().unwrap();
        let err = persist(&sample_manifest(), &temp.path().join("module.json")).unwrap_err();
        assert!(matches!(err, Error::DescriptorFormat { .. }));
    }

    #[test]
    fn update_must_be_an_object() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("module.json");
        fs::write(&path, r#"{"Update": []}"#).unwrap();

        let err = persist(&sample_manifest(), &path).unwrap_err();
        assert!(matches!(err, Error::DescriptorFormat { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"Update": []}"#);
    }

    #[test]
    fn file_hashes_reads_back_recorded_manifest() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join("module.json"));
        fs::write(path.to_native(), r#"{"Update": {}}"#).unwrap();

        let mut descriptor = ModuleDescriptor::load(&path).unwrap();
        assert_eq!(descriptor.file_hashes().unwrap(), None);

        descriptor.set_file_hashes(&sample_manifest()).unwrap();
        assert_eq!(descriptor.file_hashes().unwrap(), Some(sample_manifest()));
    }
}

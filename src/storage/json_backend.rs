use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::utils::{app_data_dir, ensure_dir};
use crate::errors::Result;

use super::KeyValueStore;

const TMP_SUFFIX: &str = "tmp";
const ENTRY_EXTENSION: &str = "json";

/// File-per-key backend rooted at a data directory, defaulting to
/// `~/.finmind` (overridable via `FINMIND_HOME`).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), ENTRY_EXTENSION))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key);
        write_atomic(&path, value)?;
        tracing::debug!(key, path = %path.display(), "persisted store entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Maps a logical key to a safe file stem (`financial_data:<id>` becomes
/// `financial_data_<id>`).
fn canonical_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Stages the payload to a sibling temp file and renames it into place so a
/// failed write never clobbers the previous entry.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => path.with_extension(format!("{existing}.{TMP_SUFFIX}")),
        None => path.with_extension(TMP_SUFFIX),
    };
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

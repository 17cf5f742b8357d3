use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use super::{ItemStore, STORAGE_KEY, StoreError, decode, encode};
use crate::item::GeneratedItem;

/// A store keeping the list in `<dir>/savedBlogs.json`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`. Nothing is touched on disk until
    /// the first write.
    #[inline]
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Returns the path of the backing file.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemStore for JsonFileStore {
    fn load_all(&self) -> Vec<GeneratedItem> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw),
            Err(err) if err.kind() == IoErrorKind::NotFound => Vec::new(),
            Err(err) => {
                warn!("failed to read {}: {err}", self.path.display());
                Vec::new()
            }
        }
    }

    fn save_all(&self, items: &[GeneratedItem]) -> Result<(), StoreError> {
        let encoded = encode(items)?;
        let io_err = |err: std::io::Error| {
            StoreError::new(format!(
                "failed to write {}: {err}",
                self.path.display()
            ))
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        // Write aside and rename, so readers never see half an array.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, encoded).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;
        debug!("saved {} items to {}", items.len(), self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == IoErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::new(format!(
                "failed to remove {}: {err}",
                self.path.display()
            ))),
        }
    }
}

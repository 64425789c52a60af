//! core::persist
//!
//! Writing a thing back to a file.
//!
//! # Atomicity
//!
//! The document is written to a sibling temporary file, synced, and then
//! renamed over the destination. A failed save leaves whatever was at the
//! destination untouched. Missing parent directories are not created.
//!
//! The temporary name is `<name>.<pid>.<n>.tmp` and is opened with
//! `create_new`, so an existing file with that name is never clobbered.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use super::error::CatalogError;
use super::thing::Thing;

/// How a document is serialized on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Pretty-print with indentation
    pub pretty: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Thing {
    /// Save to `filename`, or to the current path if `None`.
    ///
    /// On success the thing's path becomes the path written, so later saves
    /// without a filename go to the same place.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NoPath`] if no filename is given and the thing has
    ///   no path (it was built in memory or fetched remotely)
    /// - [`CatalogError::Write`] if the file cannot be written
    pub fn save(&mut self, filename: Option<&Path>) -> Result<PathBuf, CatalogError> {
        self.save_with(filename, &SaveOptions::default())
    }

    /// Save with explicit serialization options.
    pub fn save_with(
        &mut self,
        filename: Option<&Path>,
        options: &SaveOptions,
    ) -> Result<PathBuf, CatalogError> {
        let path = match filename {
            Some(f) => f.to_path_buf(),
            None => self
                .path()
                .map(Path::to_path_buf)
                .ok_or_else(|| CatalogError::NoPath(self.to_string()))?,
        };

        let value = self.to_value();
        let serialized = if options.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        }
        .map_err(|e| CatalogError::Write {
            path: path.clone(),
            source: e.into(),
        })?;

        write_atomic(&path, serialized.as_bytes())?;
        self.set_path(path.clone());
        Ok(path)
    }
}

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A sibling of `path` no other save in this process will pick.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(
        ".{}.{}.tmp",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    PathBuf::from(name)
}

/// Write `contents` to `path` through a temporary file and rename.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), CatalogError> {
    let temp_path = temp_sibling(path);

    let file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|e| CatalogError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    let result = write_and_sync(file, &temp_path, contents).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| CatalogError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_sync(mut file: fs::File, path: &Path, contents: &[u8]) -> Result<(), CatalogError> {
    let write_err = |e| CatalogError::Write {
        path: path.to_path_buf(),
        source: e,
    };

    file.write_all(contents).map_err(write_err)?;
    file.write_all(b"\n").map_err(write_err)?;
    file.sync_all().map_err(write_err)?;
    Ok(())
}

//! File-backed template store

use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::builtin;
use crate::error::LibraryError;
use crate::library::Library;

/// The library document on disk
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

/// Exclusive advisory lock on the store, released on drop
#[derive(Debug)]
pub struct StoreLock {
    file: fs::File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            debug!(error = %e, "StoreLock::drop: unlock failed");
        }
    }
}

impl TemplateStore {
    /// Point a store at `path`. Nothing is touched until the first load or save.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!(?path, "Opened template store");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seed the document with the built-in catalog if it does not exist yet
    pub fn ensure(&self) -> Result<(), LibraryError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Seeding library with built-in prompts");
            self.save(&builtin::catalog())?;
        }
        Ok(())
    }

    /// Read the whole library, seeding it first when absent.
    ///
    /// A document that does not parse as a list of templates yields the
    /// built-in catalog in memory and is left untouched on disk.
    pub fn load(&self) -> Result<Library, LibraryError> {
        self.ensure()?;

        let content = fs::read_to_string(&self.path).map_err(|e| LibraryError::io(&self.path, e))?;
        match serde_json::from_str::<Library>(&content) {
            Ok(library) => {
                debug!(count = library.len(), "TemplateStore::load: parsed library");
                Ok(library)
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Library file is malformed, using built-in prompts"
                );
                Ok(builtin::catalog())
            }
        }
    }

    /// Overwrite the document with `library`, creating the directory if needed
    pub fn save(&self, library: &Library) -> Result<(), LibraryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| LibraryError::io(parent, e))?;
        }

        let content = serde_json::to_string_pretty(library).map_err(|e| LibraryError::json(&self.path, e))?;
        fs::write(&self.path, content).map_err(|e| LibraryError::io(&self.path, e))?;

        debug!(count = library.len(), path = %self.path.display(), "TemplateStore::save: wrote library");
        Ok(())
    }

    /// Path of the sibling lock file
    pub fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Block until this process holds the store's exclusive lock
    pub fn lock(&self) -> Result<StoreLock, LibraryError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| LibraryError::io(parent, e))?;
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| LibraryError::io(&lock_path, e))?;
        FileExt::lock_exclusive(&file).map_err(|e| LibraryError::io(&lock_path, e))?;

        debug!(path = %lock_path.display(), "TemplateStore::lock: acquired");
        Ok(StoreLock { file })
    }
}

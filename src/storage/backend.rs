//! Persistence backends
//!
//! A backend holds a single blob: the serialized transaction list. The store
//! reads it once on load and overwrites it wholesale after every mutation.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::{KathaError, KathaResult};

use super::file_io::{read_optional, write_atomic};

/// Get/set access to the persisted blob
pub trait Backend {
    /// Read the blob, `None` if nothing has been persisted yet
    fn read(&self) -> KathaResult<Option<Vec<u8>>>;

    /// Replace the blob
    fn write(&self, bytes: &[u8]) -> KathaResult<()>;
}

/// Blob stored in a single JSON file
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for FileBackend {
    fn read(&self) -> KathaResult<Option<Vec<u8>>> {
        read_optional(&self.path)
    }

    fn write(&self, bytes: &[u8]) -> KathaResult<()> {
        write_atomic(&self.path, bytes)
    }
}

/// Blob held in memory
///
/// Clones share the same blob, so a test can keep a handle and inspect what
/// the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    blob: Arc<RwLock<Option<Vec<u8>>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing blob
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Arc::new(RwLock::new(Some(contents.into()))),
        }
    }

    /// Current blob as text
    pub fn contents(&self) -> KathaResult<Option<String>> {
        let blob = self.blob.read().map_err(|e| {
            KathaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(blob
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned()))
    }
}

impl Backend for MemoryBackend {
    fn read(&self) -> KathaResult<Option<Vec<u8>>> {
        let blob = self.blob.read().map_err(|e| {
            KathaError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(blob.clone())
    }

    fn write(&self, bytes: &[u8]) -> KathaResult<()> {
        let mut blob = self.blob.write().map_err(|e| {
            KathaError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *blob = Some(bytes.to_vec());
        Ok(())
    }
}

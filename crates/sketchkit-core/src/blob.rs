//! Persistence blobs.
//!
//! A blob is an opaque handle to a named persistent store for a
//! document's serialized content. Documents hold blobs behind
//! `Arc<dyn Blob>` and compare them by pointer identity, so re-assigning
//! the same instance is observable as a no-op.

use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::error::BlobError;

/// Capability set a document needs from a persistent store.
pub trait Blob: Send + Sync {
    /// The store's display name (used as the document title).
    fn name(&self) -> &str;

    /// Writes the full serialized content to the store.
    fn store(&self, bytes: &[u8]) -> Result<(), BlobError>;
}

/// In-memory blob, primarily for tests and unsaved scratch content.
///
/// Writes can be made to fail on demand to exercise persistence error
/// paths.
pub struct MemoryBlob {
    name: String,
    contents: Mutex<Option<Vec<u8>>>,
    store_count: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemoryBlob {
    /// Creates an empty in-memory blob.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: Mutex::new(None),
            store_count: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// The last stored content, if any write succeeded yet.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.lock().clone()
    }

    /// Number of successful writes.
    pub fn store_count(&self) -> usize {
        self.store_count.load(Ordering::Relaxed)
    }

    /// When set, subsequent writes are rejected.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }
}

impl Blob for MemoryBlob {
    fn name(&self) -> &str {
        &self.name
    }

    fn store(&self, bytes: &[u8]) -> Result<(), BlobError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(BlobError::StoreRejected(format!(
                "in-memory store \"{}\" is rejecting writes",
                self.name
            )));
        }
        *self.contents.lock() = Some(bytes.to_vec());
        self.store_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Filesystem-backed blob.
pub struct FileBlob {
    path: PathBuf,
    name: String,
}

impl FileBlob {
    /// Creates a blob backed by a file path. The display name is the
    /// file name portion of the path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, name }
    }

    /// The backing path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Blob for FileBlob {
    fn name(&self) -> &str {
        &self.name
    }

    fn store(&self, bytes: &[u8]) -> Result<(), BlobError> {
        std::fs::write(&self.path, bytes)?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "blob written");
        Ok(())
    }
}

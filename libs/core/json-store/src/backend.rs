//! Raw byte storage behind a [`JsonStore`](crate::JsonStore).
//!
//! The backend handles the "how" of storage (filesystem vs memory), while
//! the store handles the "what" (typed records, locking, read-modify-write).

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Read the whole document.
    /// Returns Ok(None) if the document does not exist yet.
    async fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>>;

    /// Replace the whole document.
    /// MUST be atomic: readers observe either the old or the new content.
    async fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()>;

    /// Human-readable location of the document, used in logs and errors
    fn describe(&self, key: &str) -> String;
}

/// Filesystem backend: one file per document under a root directory
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()))
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

/// Flush directory entries so a completed rename survives a crash
#[cfg(unix)]
async fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir).await?.sync_all().await
}

#[cfg(not(unix))]
async fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[async_trait]
impl DocumentBackend for FsBackend {
    async fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.root).await?;

        // Same directory as the target so the rename never crosses filesystems
        let tmp = self.temp_path(key);
        let result = match write_synced(&tmp, bytes).await {
            Ok(()) => fs::rename(&tmp, self.path(key)).await,
            Err(e) => Err(e),
        };

        if result.is_err() {
            let _ = fs::remove_file(&tmp).await;
            return result;
        }
        sync_dir(&self.root).await
    }

    fn describe(&self, key: &str) -> String {
        self.path(key).display().to_string()
    }
}

/// In-memory backend for testing
#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: Mutex<HashMap<String, Vec<u8>>>,
    simulate_write_error: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document with raw content
    pub fn with_document(self, key: &str, content: impl Into<Vec<u8>>) -> Self {
        self.lock().insert(key.to_string(), content.into());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Current raw content of a document
    pub fn document(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned map still holds complete documents; writes replace whole values
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
    async fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.lock().get(key).cloned())
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(io::Error::other("Simulated write error"));
        }
        self.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn describe(&self, key: &str) -> String {
        format!("memory://{}", key)
    }
}

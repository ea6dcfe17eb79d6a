use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::backend::DocumentBackend;
use crate::error::{StoreError, StoreResult};
use crate::record::Record;

/// Outcome of a [`JsonStore::transaction`] closure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit<R> {
    /// Persist the modified collection, then return the value
    Save(R),
    /// Return the value without touching the document
    Discard(R),
}

/// Typed handle on one collection document.
///
/// Every operation runs inside a per-document critical section, so a
/// read-modify-write cycle never interleaves with another one on the same
/// store. Clones share the lock; construct one store per document and hand
/// clones to whoever needs it.
///
/// The lock belongs to the store instance, not to the file. Two stores built
/// separately for the same document do not exclude each other.
pub struct JsonStore<T> {
    backend: Arc<dyn DocumentBackend>,
    key: Arc<str>,
    lock: Arc<Mutex<()>>,
    _records: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonStore<T> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            key: Arc::clone(&self.key),
            lock: Arc::clone(&self.lock),
            _records: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for JsonStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonStore")
            .field("document", &self.document())
            .finish()
    }
}

impl<T> JsonStore<T> {
    /// Create a store for document `key` on the given backend.
    ///
    /// Must be called at most once per document while the store is in use;
    /// share the result through [`Clone`].
    pub fn new(backend: impl DocumentBackend + 'static, key: impl AsRef<str>) -> Self {
        Self::from_shared(Arc::new(backend), key)
    }

    /// Create a store on a backend shared with other stores.
    ///
    /// Same precondition as [`JsonStore::new`]: one store per `key`.
    pub fn from_shared(backend: Arc<dyn DocumentBackend>, key: impl AsRef<str>) -> Self {
        Self {
            backend,
            key: Arc::from(key.as_ref()),
            lock: Arc::new(Mutex::new(())),
            _records: PhantomData,
        }
    }

    /// Location of the backing document
    pub fn document(&self) -> String {
        self.backend.describe(&self.key)
    }
}

impl<T: Record> JsonStore<T> {
    /// Load every record. A missing document is an empty collection.
    pub async fn load(&self) -> StoreResult<Vec<T>> {
        let _guard = self.lock.lock().await;
        self.load_unlocked().await
    }

    /// Replace the document with `records`.
    ///
    /// On failure the previous content stays in place.
    pub async fn save(&self, records: &[T]) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        self.save_unlocked(records).await
    }

    /// Run a read-only closure over the current records
    pub async fn read<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&[T]) -> R,
    {
        let _guard = self.lock.lock().await;
        let records = self.load_unlocked().await?;
        Ok(f(&records))
    }

    /// Load, modify and (optionally) persist the collection as one atomic step.
    ///
    /// The lock is held from the load until the write completes. If the
    /// closure fails, or returns [`Commit::Discard`], nothing is written.
    #[instrument(skip_all, fields(document = %self.key))]
    pub async fn transaction<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<Commit<R>, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut records = self.load_unlocked().await?;

        match f(&mut records)? {
            Commit::Save(value) => {
                self.save_unlocked(&records).await?;
                Ok(value)
            }
            Commit::Discard(value) => {
                debug!("Transaction made no changes, skipping write");
                Ok(value)
            }
        }
    }

    async fn load_unlocked(&self) -> StoreResult<Vec<T>> {
        let bytes = self
            .backend
            .read(&self.key)
            .await
            .map_err(|e| StoreError::io(self.document(), e))?;

        let records = match bytes {
            Some(bytes) if !bytes.iter().all(u8::is_ascii_whitespace) => {
                serde_json::from_slice(&bytes)
                    .map_err(|e| StoreError::serialization(self.document(), e))?
            }
            _ => Vec::new(),
        };

        debug!(document = %self.key, count = records.len(), "Loaded collection");
        Ok(records)
    }

    async fn save_unlocked(&self, records: &[T]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| StoreError::serialization(self.document(), e))?;

        self.backend
            .write(&self.key, &bytes)
            .await
            .map_err(|e| StoreError::io(self.document(), e))?;

        debug!(document = %self.key, count = records.len(), "Saved collection");
        Ok(())
    }
}

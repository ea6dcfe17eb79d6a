//! JSON Store
//!
//! File-backed persistence for small collections of records. Each collection
//! lives in a single JSON document that is read whole and rewritten whole.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  JsonStore   │  ← typed records, per-document critical section
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │   Backend    │  ← raw bytes (filesystem with atomic replace, or memory)
//! └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use json_store::{Commit, FsBackend, JsonStore, Record, StoreError};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Serialize, Deserialize)]
//! struct Note {
//!     id: u64,
//!     text: String,
//! }
//!
//! impl Record for Note {
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! # async fn example() -> Result<(), StoreError> {
//! let store: JsonStore<Note> = JsonStore::new(FsBackend::new("./data"), "notes.json");
//!
//! let document = store.document();
//! let note = store
//!     .transaction(|notes| {
//!         let id = json_store::next_id(notes)
//!             .ok_or_else(|| StoreError::id_space_exhausted(document))?;
//!         let note = Note { id, text: "hello".into() };
//!         notes.push(note.clone());
//!         Ok::<_, StoreError>(Commit::Save(note))
//!     })
//!     .await?;
//! # let _ = note;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod error;
pub mod record;
pub mod store;

pub use backend::{DocumentBackend, FsBackend, MemoryBackend};
pub use error::{StoreError, StoreResult};
pub use record::{next_id, parse_id, Record};
pub use store::{Commit, JsonStore};

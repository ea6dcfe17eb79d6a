use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on document '{document}': {source}")]
    Io {
        document: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed document '{document}': {source}")]
    Serialization {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No ids left in document '{document}'")]
    IdSpaceExhausted { document: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub(crate) fn io(document: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            document: document.into(),
            source,
        }
    }

    pub(crate) fn serialization(document: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Serialization {
            document: document.into(),
            source,
        }
    }

    /// The collection already holds a record with id `u64::MAX`
    pub fn id_space_exhausted(document: impl Into<String>) -> Self {
        StoreError::IdSpaceExhausted {
            document: document.into(),
        }
    }

    /// Name of the document the failure happened on
    pub fn document(&self) -> &str {
        match self {
            StoreError::Io { document, .. }
            | StoreError::Serialization { document, .. }
            | StoreError::IdSpaceExhausted { document } => document,
        }
    }

    /// Whether retrying the same operation may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Io { .. })
    }
}

use thiserror::Error;

/// Failures talking to the counter store.
///
/// The table never surfaces these; it logs them and carries on with its
/// in-memory counters.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing storage could not be read or written.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// Stored data is not a well-formed counters record: bad JSON, wrong
    /// fields, or bytes that are not UTF-8 text.
    #[error("malformed data under key {key:?}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StorageError {
    pub(crate) fn malformed(
        key: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        StorageError::Malformed { key: key.to_string(), source: source.into() }
    }
}

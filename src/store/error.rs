//! Storage error types.

use std::path::PathBuf;

/// Failure of a single backend operation, or of the whole cascade.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The remote object store rejected or failed the request.
    #[error("{backend} backend failed for {key}: {message}")]
    Remote {
        /// Backend tag (e.g. `"s3"`).
        backend: &'static str,
        /// Document key.
        key: String,
        /// Provider error text.
        message: String,
    },

    /// Local filesystem failure.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A backend returned a body that is not the expected JSON shape.
    #[error("document {key} from {backend} is malformed: {source}")]
    Decode {
        /// Backend tag.
        backend: &'static str,
        /// Document key.
        key: String,
        /// Parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The value could not be serialized before writing.
    #[error("could not encode document {key}: {source}")]
    Encode {
        /// Document key.
        key: String,
        /// Serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Document keys are plain file names.
    #[error("invalid document key: {0:?}")]
    InvalidKey(String),

    /// The store was built without any backend.
    #[error("no storage backend configured")]
    NoBackends,
}

//! Backend strategy trait used by [`super::DocumentStore`].

use std::fmt;

use async_trait::async_trait;

use super::StoreError;

/// Outcome of a successful backend read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// Raw document bytes as stored.
    Found(Vec<u8>),
    /// The backend answered authoritatively that the key does not exist.
    Missing,
}

/// One persistence target in the fallback cascade.
///
/// Implementations only move bytes; decoding and fallback policy live in
/// the document store so every backend is treated the same way.
#[async_trait]
pub trait StorageBackend: Send + Sync + fmt::Debug + 'static {
    /// Short tag used in logs (e.g. `"s3"`, `"localfs"`).
    fn backend_tag(&self) -> &'static str;

    /// Reads the document stored under `key`.
    ///
    /// `seed` is the content a backend that creates documents lazily
    /// should write before reading when the key does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend cannot be reached or read.
    async fn fetch(&self, key: &str, seed: &[u8]) -> Result<Fetched, StoreError>;

    /// Replaces the document stored under `key` with `body`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the write is refused.
    async fn store(&self, key: &str, body: &[u8]) -> Result<(), StoreError>;
}

/// Rejects keys that could escape a backend's namespace.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\'])
        || key.contains('\0');
    if bad {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_file_names_are_valid() {
        assert!(validate_key("event-signups.json").is_ok());
        assert!(validate_key("site-content.json").is_ok());
    }

    #[test]
    fn traversal_keys_are_rejected() {
        assert!(validate_key("").is_err());
        assert!(validate_key("..").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("nested/file.json").is_err());
    }
}

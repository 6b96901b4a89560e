//! Typed document access over an ordered backend cascade.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Fetched, LocalFsBackend, S3Backend, StorageBackend, StoreError};
use crate::config::RemoteStoreConfig;

/// Result of walking the cascade for one read.
enum Resolved<T> {
    /// A backend produced a decodable document.
    Value(T),
    /// The key is absent, or the last backend held garbage.
    Fallback,
}

/// Reads and writes named JSON documents through prioritized backends.
///
/// Reads stop at the first backend that answers: a decoded document, or
/// an authoritative "missing" (which yields the caller's fallback without
/// consulting later backends). A backend that errors, or returns a body
/// that does not decode, hands over to the next one; the last backend
/// degrades an undecodable body to the fallback value instead.
///
/// Writes stop at the first backend that accepts the document. Only when
/// every backend refuses is the error surfaced.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    backends: Vec<Arc<dyn StorageBackend>>,
}

impl DocumentStore {
    /// Creates a store over `backends`, highest priority first.
    #[must_use]
    pub fn new(backends: Vec<Arc<dyn StorageBackend>>) -> Self {
        Self { backends }
    }

    /// Remote bucket first (when configured), local directory last.
    #[must_use]
    pub fn from_config(remote: Option<&RemoteStoreConfig>, data_dir: impl Into<PathBuf>) -> Self {
        let mut backends: Vec<Arc<dyn StorageBackend>> = Vec::with_capacity(2);
        match remote {
            Some(config) => {
                tracing::info!(
                    bucket = %config.bucket,
                    prefix = %config.prefix,
                    "remote document store enabled"
                );
                backends.push(Arc::new(S3Backend::new(config)));
            }
            None => tracing::info!("remote document store not configured, using local data only"),
        }
        backends.push(Arc::new(LocalFsBackend::new(data_dir)));
        Self::new(backends)
    }

    /// Tags of the configured backends in priority order.
    #[must_use]
    pub fn backend_tags(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.backend_tag()).collect()
    }

    /// Reads a JSON array document.
    ///
    /// A missing document, or one that is not an array, reads as empty.
    ///
    /// # Errors
    ///
    /// Returns the last backend's error when no backend could be read.
    pub async fn read_collection<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Vec<T>, StoreError> {
        let resolved = self
            .resolve(key, b"[]", |bytes| {
                match serde_json::from_slice::<serde_json::Value>(bytes)? {
                    array @ serde_json::Value::Array(_) => serde_json::from_value::<Vec<T>>(array),
                    _ => Ok(Vec::new()),
                }
            })
            .await?;
        Ok(match resolved {
            Resolved::Value(items) => items,
            Resolved::Fallback => Vec::new(),
        })
    }

    /// Replaces a JSON array document.
    ///
    /// # Errors
    ///
    /// Returns an error when encoding fails or every backend refuses the write.
    pub async fn write_collection<T: Serialize>(
        &self,
        key: &str,
        items: &[T],
    ) -> Result<(), StoreError> {
        self.write_json(key, &items).await
    }

    /// Reads a JSON document, returning `fallback` when it does not exist.
    ///
    /// Backends that create documents lazily are seeded with `fallback`.
    ///
    /// # Errors
    ///
    /// Returns an error when `fallback` cannot be encoded or no backend
    /// could be read.
    pub async fn read_json<T>(&self, key: &str, fallback: T) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        let seed = encode(key, &fallback)?;
        let resolved = self
            .resolve(key, &seed, |bytes| serde_json::from_slice::<T>(bytes))
            .await?;
        Ok(match resolved {
            Resolved::Value(value) => value,
            Resolved::Fallback => fallback,
        })
    }

    /// Replaces a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error when encoding fails or every backend refuses the write.
    pub async fn write_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let body = encode(key, value)?;
        let mut last_error = StoreError::NoBackends;

        for backend in &self.backends {
            match backend.store(key, &body).await {
                Ok(()) => {
                    tracing::debug!(backend = backend.backend_tag(), key, "document written");
                    return Ok(());
                }
                Err(err) => {
                    tracing::warn!(
                        backend = backend.backend_tag(),
                        key,
                        error = %err,
                        "write failed, trying next backend"
                    );
                    last_error = err;
                }
            }
        }

        tracing::error!(key, error = %last_error, "document write failed on every backend");
        Err(last_error)
    }

    async fn resolve<T, F>(
        &self,
        key: &str,
        seed: &[u8],
        decode: F,
    ) -> Result<Resolved<T>, StoreError>
    where
        F: Fn(&[u8]) -> Result<T, serde_json::Error>,
    {
        let mut last_error = StoreError::NoBackends;
        let last_index = self.backends.len().saturating_sub(1);

        for (index, backend) in self.backends.iter().enumerate() {
            let tag = backend.backend_tag();
            match backend.fetch(key, seed).await {
                Ok(Fetched::Missing) => {
                    tracing::debug!(backend = tag, key, "document missing, using fallback");
                    return Ok(Resolved::Fallback);
                }
                Ok(Fetched::Found(bytes)) => match decode(&bytes) {
                    Ok(value) => return Ok(Resolved::Value(value)),
                    Err(source) if index == last_index => {
                        tracing::warn!(backend = tag, key, error = %source, "malformed document, using fallback");
                        return Ok(Resolved::Fallback);
                    }
                    Err(source) => {
                        tracing::warn!(backend = tag, key, error = %source, "malformed document, trying next backend");
                        last_error = StoreError::Decode {
                            backend: tag,
                            key: key.to_string(),
                            source,
                        };
                    }
                },
                Err(err) => {
                    tracing::warn!(backend = tag, key, error = %err, "read failed, trying next backend");
                    last_error = err;
                }
            }
        }

        tracing::error!(key, error = %last_error, "document read failed on every backend");
        Err(last_error)
    }
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })
}

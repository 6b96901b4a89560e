//! In-process backend with failure switches.
//!
//! Behaves like the remote store by default (absent keys are
//! [`Fetched::Missing`]) or like the local directory when built with
//! [`MemoryBackend::seeding`]. Reads and writes can be forced to fail to
//! exercise the fallback cascade.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::backend::validate_key;
use super::{Fetched, StorageBackend, StoreError};

/// Map-backed [`StorageBackend`].
#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: Mutex<HashMap<String, Vec<u8>>>,
    seed_missing: bool,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    reads: AtomicU64,
    writes: AtomicU64,
}

impl MemoryBackend {
    /// Empty backend that reports absent keys as missing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty backend that seeds absent keys on read, like the local directory.
    #[must_use]
    pub fn seeding() -> Self {
        Self {
            seed_missing: true,
            ..Self::default()
        }
    }

    /// Makes every subsequent read fail (or succeed again).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Stores raw bytes under `key`, bypassing the failure switches.
    pub async fn put_raw(&self, key: &str, body: impl Into<Vec<u8>>) {
        self.documents
            .lock()
            .await
            .insert(key.to_string(), body.into());
    }

    /// Returns the raw bytes stored under `key`.
    pub async fn get_raw(&self, key: &str) -> Option<Vec<u8>> {
        self.documents.lock().await.get(key).cloned()
    }

    /// Number of successful reads served.
    #[must_use]
    pub fn read_count(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of successful writes accepted.
    #[must_use]
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    fn failure(key: &str, op: &str) -> StoreError {
        StoreError::Remote {
            backend: "memory",
            key: key.to_string(),
            message: format!("{op} disabled"),
        }
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn fetch(&self, key: &str, seed: &[u8]) -> Result<Fetched, StoreError> {
        validate_key(key)?;
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::failure(key, "reads"));
        }
        let mut documents = self.documents.lock().await;
        let fetched = match documents.get(key) {
            Some(bytes) => Fetched::Found(bytes.clone()),
            None if self.seed_missing => {
                documents.insert(key.to_string(), seed.to_vec());
                Fetched::Found(seed.to_vec())
            }
            None => Fetched::Missing,
        };
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(fetched)
    }

    async fn store(&self, key: &str, body: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::failure(key, "writes"));
        }
        self.documents
            .lock()
            .await
            .insert(key.to_string(), body.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_reports_missing() {
        let backend = MemoryBackend::new();
        let Ok(fetched) = backend.fetch("doc.json", b"[]").await else {
            panic!("fetch failed");
        };
        assert_eq!(fetched, Fetched::Missing);
        assert!(backend.get_raw("doc.json").await.is_none());
    }

    #[tokio::test]
    async fn seeding_mode_writes_seed() {
        let backend = MemoryBackend::seeding();
        let Ok(fetched) = backend.fetch("doc.json", b"[]").await else {
            panic!("fetch failed");
        };
        assert_eq!(fetched, Fetched::Found(b"[]".to_vec()));
        assert_eq!(backend.get_raw("doc.json").await, Some(b"[]".to_vec()));
    }

    #[tokio::test]
    async fn failure_switches_toggle() {
        let backend = MemoryBackend::new();
        backend.set_fail_writes(true);
        assert!(backend.store("doc.json", b"[]").await.is_err());
        backend.set_fail_writes(false);
        assert!(backend.store("doc.json", b"[]").await.is_ok());
        assert_eq!(backend.write_count(), 1);

        backend.set_fail_reads(true);
        assert!(backend.fetch("doc.json", b"[]").await.is_err());
        assert_eq!(backend.read_count(), 0);
    }
}

//! Local filesystem backend rooted at the data directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use super::backend::validate_key;
use super::{Fetched, StorageBackend, StoreError};

/// Stores each document as `{root}/{key}`.
///
/// Missing files are created with the caller's seed before reading, so a
/// read never reports [`Fetched::Missing`]. Writes overwrite the whole
/// file in place; there is no temp-file rename.
#[derive(Debug, Clone)]
pub struct LocalFsBackend {
    root: PathBuf,
}

impl LocalFsBackend {
    /// Creates a backend rooted at `root`. The directory is created lazily.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }

    async fn ensure_root(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StoreError::Io {
                path: self.root.clone(),
                source,
            })
    }
}

#[async_trait]
impl StorageBackend for LocalFsBackend {
    fn backend_tag(&self) -> &'static str {
        "localfs"
    }

    async fn fetch(&self, key: &str, seed: &[u8]) -> Result<Fetched, StoreError> {
        let path = self.path_for(key)?;
        self.ensure_root().await?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Fetched::Found(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "seeding missing document");
                tokio::fs::write(&path, seed)
                    .await
                    .map_err(|source| StoreError::Io {
                        path: path.clone(),
                        source,
                    })?;
                tokio::fs::read(&path)
                    .await
                    .map(Fetched::Found)
                    .map_err(|source| StoreError::Io { path, source })
            }
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    async fn store(&self, key: &str, body: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        self.ensure_root().await?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|source| StoreError::Io { path, source })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_seeded_then_read() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let backend = LocalFsBackend::new(dir.path().join("data"));

        let Ok(fetched) = backend.fetch("event-signups.json", b"[]").await else {
            panic!("fetch failed");
        };
        assert_eq!(fetched, Fetched::Found(b"[]".to_vec()));

        let on_disk = tokio::fs::read(dir.path().join("data/event-signups.json")).await;
        let Ok(on_disk) = on_disk else {
            panic!("seed file was not written");
        };
        assert_eq!(on_disk, b"[]");
    }

    #[tokio::test]
    async fn existing_file_is_not_reseeded() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let backend = LocalFsBackend::new(dir.path());
        let Ok(()) = backend.store("doc.json", b"{\"a\":1}").await else {
            panic!("store failed");
        };

        let Ok(fetched) = backend.fetch("doc.json", b"{}").await else {
            panic!("fetch failed");
        };
        assert_eq!(fetched, Fetched::Found(b"{\"a\":1}".to_vec()));
    }

    #[tokio::test]
    async fn store_overwrites_whole_file() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let backend = LocalFsBackend::new(dir.path());
        let _ = backend.store("doc.json", b"[1,2,3,4,5]").await;
        let _ = backend.store("doc.json", b"[]").await;

        let Ok(Fetched::Found(bytes)) = backend.fetch("doc.json", b"[]").await else {
            panic!("fetch failed");
        };
        assert_eq!(bytes, b"[]");
    }

    #[tokio::test]
    async fn unwritable_root_surfaces_io_error() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let blocker = dir.path().join("not-a-dir");
        let Ok(()) = tokio::fs::write(&blocker, b"file").await else {
            panic!("could not create blocker file");
        };
        let backend = LocalFsBackend::new(&blocker);

        let result = backend.store("doc.json", b"[]").await;
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[tokio::test]
    async fn traversal_key_is_rejected() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let backend = LocalFsBackend::new(dir.path());
        let result = backend.store("../escape.json", b"[]").await;
        assert!(matches!(result, Err(StoreError::InvalidKey(_))));
    }
}

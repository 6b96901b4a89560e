//! Append-only record collections over the document store.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use crate::domain::{CollectionRecord, RecordId, now_timestamp};
use crate::store::{DocumentStore, StoreError};

/// A JSON array document of `R` records.
///
/// `create` reads the whole array, appends, and writes it back in one
/// call. Concurrent creates race: the later write wins and may drop the
/// other append.
///
/// Stored entries are carried as raw JSON on the write path, so an entry
/// that no longer decodes as `R` survives appends untouched. Listings
/// skip such entries.
#[derive(Debug)]
pub struct RecordCollection<R> {
    store: Arc<DocumentStore>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for RecordCollection<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _record: PhantomData,
        }
    }
}

impl<R: CollectionRecord> RecordCollection<R> {
    /// Creates a collection backed by `store`.
    #[must_use]
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Stamps `input` with a fresh id and the current time and appends it.
    ///
    /// Nothing is written when the existing records cannot be read.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the collection cannot be read or written.
    pub async fn create(&self, input: R::Input) -> Result<R, StoreError> {
        let mut records = self.store.read_collection::<Value>(R::DOCUMENT).await?;
        let id = RecordId::new();
        let record = R::assemble(id.clone(), now_timestamp(), input);
        let entry = serde_json::to_value(&record).map_err(|source| StoreError::Encode {
            key: R::DOCUMENT.to_string(),
            source,
        })?;
        records.push(entry);
        self.store.write_collection(R::DOCUMENT, &records).await?;

        tracing::info!(%id, collection = R::DOCUMENT, total = records.len(), "record created");
        Ok(record)
    }

    /// Records matching `keep`, newest first.
    ///
    /// Records sharing a timestamp come out in reverse insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the collection cannot be read.
    pub async fn list<F>(&self, keep: F) -> Result<Vec<R>, StoreError>
    where
        F: Fn(&R) -> bool,
    {
        let entries = self.store.read_collection::<Value>(R::DOCUMENT).await?;
        let mut records: Vec<R> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<R>(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(collection = R::DOCUMENT, index, error = %err, "skipping unreadable record");
                    None
                }
            })
            .collect();
        records.retain(|record| keep(record));
        records.reverse();
        records.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(records)
    }

    /// Every record, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the collection cannot be read.
    pub async fn list_all(&self) -> Result<Vec<R>, StoreError> {
        self.list(|_| true).await
    }
}

//! Durable key-value document store.
//!
//! Named JSON documents (arrays for record collections, one object for
//! the site content) are read and written through an ordered list of
//! [`StorageBackend`]s. The remote object store comes first when it is
//! configured; the local data directory is always last and acts as the
//! escape hatch when the remote side is unreachable.
//!
//! There is no locking: concurrent writers to the same key race and the
//! last full-document write wins.

pub mod backend;
pub mod document_store;
pub mod error;
pub mod local;
pub mod memory;
pub mod s3;

pub use backend::{Fetched, StorageBackend};
pub use document_store::DocumentStore;
pub use error::StoreError;
pub use local::LocalFsBackend;
pub use memory::MemoryBackend;
pub use s3::S3Backend;

//! Remote object store backend (Amazon S3 or an S3-compatible service).

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;

use super::backend::validate_key;
use super::{Fetched, StorageBackend, StoreError};
use crate::config::RemoteStoreConfig;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Stores each document as the object `{prefix}/{key}` in one bucket.
#[derive(Debug, Clone)]
pub struct S3Backend {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3Backend {
    /// Builds a client from explicit static credentials.
    #[must_use]
    pub fn new(config: &RemoteStoreConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "site-config",
        );
        let mut builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            prefix: config.prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Full object key for a document.
    #[must_use]
    pub fn object_key(&self, key: &str) -> String {
        format!("{}/{}", self.prefix, key)
    }

    fn failure(&self, key: &str, message: impl Into<String>) -> StoreError {
        StoreError::Remote {
            backend: self.backend_tag(),
            key: key.to_string(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl StorageBackend for S3Backend {
    fn backend_tag(&self) -> &'static str {
        "s3"
    }

    #[tracing::instrument(name = "s3_fetch", skip(self, _seed), fields(bucket = %self.bucket))]
    async fn fetch(&self, key: &str, _seed: &[u8]) -> Result<Fetched, StoreError> {
        validate_key(key)?;
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(self.object_key(key))
            .send()
            .await;

        let output = match response {
            Ok(output) => output,
            Err(err) => {
                if err.as_service_error().is_some_and(|e| e.is_no_such_key()) {
                    return Ok(Fetched::Missing);
                }
                return Err(self.failure(key, err.to_string()));
            }
        };

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| self.failure(key, format!("read body failed: {e}")))?;
        Ok(Fetched::Found(body.into_bytes().to_vec()))
    }

    #[tracing::instrument(name = "s3_store", skip(self, body), fields(bucket = %self.bucket, bytes = body.len()))]
    async fn store(&self, key: &str, body: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(self.object_key(key))
            .content_type(JSON_CONTENT_TYPE)
            .body(ByteStream::from(body.to_vec()))
            .send()
            .await
            .map_err(|e| self.failure(key, e.to_string()))?;
        Ok(())
    }
}

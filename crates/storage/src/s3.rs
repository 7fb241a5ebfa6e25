//! S3-backed object store.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::{ObjectStore, StorageError};

/// Object store backed by an S3 bucket.
///
/// Credentials and region come from the ambient AWS environment (env vars,
/// profile, or instance metadata).
pub struct S3Store {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: String, public_base_url: String) -> Self {
        Self {
            client,
            bucket,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build an S3 store from environment configuration.
    ///
    /// Environment variables:
    ///
    /// | Variable             | Default                                  |
    /// |----------------------|------------------------------------------|
    /// | `S3_BUCKET`          | (required; `None` disables uploads)      |
    /// | `S3_PUBLIC_BASE_URL` | `https://{bucket}.s3.amazonaws.com`      |
    pub async fn from_env() -> Option<Self> {
        let bucket = std::env::var("S3_BUCKET").ok()?;
        let public_base_url = std::env::var("S3_PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("https://{bucket}.s3.amazonaws.com"));

        let config = aws_config::load_from_env().await;
        let client = Client::new(&config);
        Some(Self::new(client, bucket, public_base_url))
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;

        tracing::debug!(key, bucket = %self.bucket, "Uploaded object to S3");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Delete(e.to_string()))?;

        tracing::debug!(key, bucket = %self.bucket, "Deleted object from S3");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}

//! Amazon S3 (or S3-compatible) object storage, behind the `s3` feature

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use tracing::debug;

use super::{join_url, key_from_url};
use crate::domain::ObjectStorage;
use crate::shared::errors::StorageError;

pub struct S3ObjectStorage {
    client: S3Client,
    bucket: String,
    prefix: String,
    public_base_url: String,
}

impl S3ObjectStorage {
    pub fn new(
        client: S3Client,
        bucket: impl Into<String>,
        prefix: impl Into<String>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            prefix: prefix.into(),
            public_base_url: public_base_url.into(),
        }
    }

    /// Build a client from the default AWS credential chain.
    pub async fn from_env(
        bucket: impl Into<String>,
        region: impl Into<String>,
        prefix: impl Into<String>,
        public_base_url: Option<String>,
    ) -> Self {
        let bucket = bucket.into();
        let region = region.into();
        let shared = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let config = aws_sdk_s3::config::Builder::from(&shared)
            .region(Region::new(region.clone()))
            .force_path_style(true)
            .build();
        let public_base_url = public_base_url
            .unwrap_or_else(|| format!("https://{}.s3.{}.amazonaws.com", bucket, region));
        Self::new(S3Client::from_conf(config), bucket, prefix, public_base_url)
    }

    fn object_key(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            join_url(&self.prefix, key)
        }
    }
}

fn classify<E>(err: SdkError<E, HttpResponse>) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(ctx) => {
            let status = ctx.raw().status().as_u16();
            let message = ctx
                .err()
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| ctx.err().to_string());
            StorageError::Service { status, message }
        }
        other => StorageError::Client(other.to_string()),
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let object_key = self.object_key(key);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&object_key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(classify)?;

        debug!(bucket = %self.bucket, key = %object_key, "Uploaded object to S3");
        Ok(join_url(&self.public_base_url, &object_key))
    }

    async fn delete(&self, url: &str) -> Result<(), StorageError> {
        let object_key = key_from_url(&self.public_base_url, url).ok_or_else(|| {
            StorageError::Object(format!("{} is not in bucket {}", url, self.bucket))
        })?;
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(object_key)
            .send()
            .await
            .map_err(classify)?;

        debug!(bucket = %self.bucket, key = %object_key, "Deleted object from S3");
        Ok(())
    }
}

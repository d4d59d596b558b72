//! S3-compatible object store provider.
//!
//! Works against AWS S3 and S3-compatible services (Cloudflare R2, MinIO,
//! Backblaze B2). Credentials come from configuration; when no access key
//! is configured the default AWS credential chain is used instead.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use tokio_util::io::ReaderStream;

use qcdocs_core::config::storage::S3StorageConfig;
use qcdocs_core::error::AppError;
use qcdocs_core::result::AppResult;
use qcdocs_core::traits::store::{ListPage, ListRequest, ObjectStore, StoredObject};
use qcdocs_core::types::object::ObjectRecord;

/// S3-compatible object store.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Create a new S3 store from configuration.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("S3 bucket name is not configured"));
        }

        let mut builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            // Path-style addressing for compatibility with R2/MinIO-style
            // services.
            .force_path_style(true);

        if !config.access_key.is_empty() {
            builder = builder.credentials_provider(Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "qcdocs-config",
            ));
        } else {
            let shared = aws_config::load_defaults(BehaviorVersion::latest()).await;
            if let Some(provider) = shared.credentials_provider() {
                builder = builder.credentials_provider(provider);
            }
        }

        if !config.endpoint.is_empty() {
            builder = builder.endpoint_url(config.endpoint.clone());
        }

        tracing::info!(
            bucket = %config.bucket,
            region = %config.region,
            "Initializing S3 object store"
        );

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn list(&self, request: ListRequest) -> AppResult<ListPage> {
        let mut req = self.client.list_objects_v2().bucket(&self.bucket);

        if let Some(prefix) = &request.prefix {
            req = req.prefix(prefix);
        }
        if let Some(cursor) = &request.cursor {
            req = req.continuation_token(cursor);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| AppError::storage(format!("S3 list objects failed: {e}")))?;

        let objects = resp
            .contents
            .unwrap_or_default()
            .into_iter()
            .filter_map(|obj| {
                let key = obj.key?;
                Some(ObjectRecord::new(key, obj.size.unwrap_or(0).max(0) as u64))
            })
            .collect();

        let cursor = if resp.is_truncated == Some(true) {
            resp.next_continuation_token
        } else {
            None
        };

        Ok(ListPage { objects, cursor })
    }

    async fn get(&self, key: &str) -> AppResult<Option<StoredObject>> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        let output = match resp {
            Ok(output) => output,
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_no_such_key() {
                    return Ok(None);
                }
                return Err(AppError::storage(format!(
                    "S3 get object failed for '{key}': {service_err}"
                )));
            }
        };

        let size = output.content_length.unwrap_or(0).max(0) as u64;
        let content_type = output.content_type;
        let body = Box::pin(ReaderStream::new(output.body.into_async_read()));

        Ok(Some(StoredObject {
            body,
            size,
            content_type,
        }))
    }
}

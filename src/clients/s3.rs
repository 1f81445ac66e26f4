use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use bytes::Bytes;

use crate::clients::client::ObjectStore;
use crate::config::HarvestConfig;
use crate::error::ClientError;

/// Region used when neither the config nor the AWS environment names one
const FALLBACK_REGION: &str = "us-east-1";

/// Object store backed by the AWS S3 SDK.
///
/// Requests are SigV4-signed with credentials from the standard AWS provider
/// chain (environment, profile, container or instance role).
#[derive(Debug, Clone)]
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: aws_sdk_s3::Client, bucket: &str) -> Self {
        Self {
            client,
            bucket: bucket.to_string(),
        }
    }

    /// Build a store from the ambient AWS environment.
    ///
    /// `storage_region` and `storage_endpoint` override what the SDK would
    /// resolve; a custom endpoint switches to path-style addressing.
    pub async fn from_config(config: &HarvestConfig) -> Self {
        let region = RegionProviderChain::first_try(config.storage_region.clone().map(Region::new))
            .or_default_provider()
            .or_else(Region::new(FALLBACK_REGION));

        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = &config.storage_endpoint {
            ::log::debug!("Using storage endpoint {}", endpoint);
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self::new(aws_sdk_s3::Client::from_conf(builder.build()), &config.bucket)
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_public(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), ClientError> {
        ::log::debug!(
            "PutObject s3://{}/{} ({} bytes, {})",
            self.bucket,
            key,
            body.len(),
            content_type
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| ClientError::Storage {
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }
}

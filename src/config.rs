use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the harvester's outbound collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Base URL of the pages API (`API_URL`)
    #[serde(default)]
    pub api_url: String,

    /// Bucket receiving re-hosted images (`BUCKET`)
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Custom S3-compatible endpoint (`STORAGE_ENDPOINT`); AWS when unset
    #[serde(default)]
    pub storage_endpoint: Option<String>,

    /// Region for the object store (`STORAGE_REGION`); the AWS provider chain when unset
    #[serde(default)]
    pub storage_region: Option<String>,

    /// Largest image body downloaded for re-hosting (`MAX_IMAGE_BYTES`)
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,

    /// Timeout applied to every outbound request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User-Agent sent when fetching pages and images
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default value for bucket
fn default_bucket() -> String {
    "lk2-stage".to_string()
}

/// Default image size cap, 10 MiB
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

fn default_max_image_bytes() -> usize {
    DEFAULT_MAX_IMAGE_BYTES
}

/// Default value for request_timeout_secs
fn default_request_timeout_secs() -> u64 {
    30
}

/// Default value for user_agent
fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl HarvestConfig {
    /// Create a new configuration with default values
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            bucket: default_bucket(),
            storage_endpoint: None,
            storage_region: None,
            max_image_bytes: default_max_image_bytes(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build configuration from defaults and the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides().validated()
    }

    /// Override fields with any non-empty environment variables
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Override fields from a variable lookup; empty values are ignored
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(api_url) = get("API_URL") {
            self.api_url = api_url;
        }
        if let Some(bucket) = get("BUCKET") {
            self.bucket = bucket;
        }
        if let Some(endpoint) = get("STORAGE_ENDPOINT") {
            self.storage_endpoint = Some(endpoint);
        }
        if let Some(region) = get("STORAGE_REGION") {
            self.storage_region = Some(region);
        }
        if let Some(timeout) = get("REQUEST_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => ::log::warn!("Ignoring invalid REQUEST_TIMEOUT_SECS: {}", timeout),
            }
        }
        if let Some(limit) = get("MAX_IMAGE_BYTES") {
            match limit.parse() {
                Ok(bytes) => self.max_image_bytes = bytes,
                Err(_) => ::log::warn!("Ignoring invalid MAX_IMAGE_BYTES: {}", limit),
            }
        }
        self
    }

    /// Check that required settings are present
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Missing("API_URL"));
        }
        Ok(self)
    }

    /// Timeout for outbound requests
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

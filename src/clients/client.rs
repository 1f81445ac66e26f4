use async_trait::async_trait;
use bytes::Bytes;

use crate::error::ClientError;
use crate::results::PageUpdate;

/// Downloads pages and images
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET a page and return its body as text; non-2xx responses are errors
    async fn fetch_text(&self, url: &str) -> Result<String, ClientError>;

    /// GET a resource and return its raw bytes; non-2xx responses are errors
    async fn fetch_bytes(&self, url: &str) -> Result<Bytes, ClientError>;
}

/// The pages API receiving extracted metadata and snippets
#[async_trait]
pub trait PagesApi: Send + Sync {
    /// Upsert a page's title, description and path
    async fn update_page(&self, update: &PageUpdate) -> Result<(), ClientError>;

    /// Store the ordered text snippets of a page
    async fn create_snippets(&self, page_id: &str, snippets: &[String]) -> Result<(), ClientError>;
}

/// Public object storage for re-hosted images
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `body` under `key` as a publicly readable object
    async fn put_public(&self, key: &str, body: Bytes, content_type: &str)
    -> Result<(), ClientError>;
}

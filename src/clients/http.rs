use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use reqwest::{Client, Response};

use crate::clients::client::{Fetcher, PagesApi};
use crate::config::{DEFAULT_MAX_IMAGE_BYTES, HarvestConfig};
use crate::error::ClientError;
use crate::results::PageUpdate;

/// Builds the shared reqwest client from configuration
pub fn build_client(config: &HarvestConfig) -> Result<Client, ClientError> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout())
        .build()
        .map_err(|e| ClientError::Other(format!("failed to build HTTP client: {}", e)))
}

fn request_error(url: &str) -> impl FnOnce(reqwest::Error) -> ClientError + '_ {
    move |source| ClientError::Request {
        url: url.to_string(),
        source,
    }
}

/// Turns non-2xx responses into errors
fn check_status(url: &str, response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        ::log::debug!("{} answered {}", url, status);
        Err(ClientError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

/// Fetches pages and images over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_bytes: usize,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    /// Cap the size of bodies returned by `fetch_bytes`
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    async fn get(&self, url: &str) -> Result<Response, ClientError> {
        ::log::debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(request_error(url))?;
        check_status(url, response)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, ClientError> {
        let response = self.get(url).await?;
        response.text().await.map_err(request_error(url))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Bytes, ClientError> {
        let mut response = self.get(url).await?;
        let too_large = || ClientError::TooLarge {
            url: url.to_string(),
            limit: self.max_bytes,
        };

        if response
            .content_length()
            .is_some_and(|length| length > self.max_bytes as u64)
        {
            return Err(too_large());
        }

        // Also enforced on bodies without a usable Content-Length
        let mut body = BytesMut::new();
        while let Some(chunk) = response.chunk().await.map_err(request_error(url))? {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body.freeze())
    }
}

/// Client for the public pages API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PagesApi for ApiClient {
    async fn update_page(&self, update: &PageUpdate) -> Result<(), ClientError> {
        let url = self.endpoint("/v1/public/pages");
        ::log::debug!("PUT {} for page {}", url, update.id);

        let response = self
            .client
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(request_error(&url))?;
        check_status(&url, response)?;
        Ok(())
    }

    async fn create_snippets(&self, page_id: &str, snippets: &[String]) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("/v1/public/pages/{}/snippets", page_id));
        ::log::debug!("POST {} with {} snippets", url, snippets.len());

        let response = self
            .client
            .post(&url)
            .json(snippets)
            .send()
            .await
            .map_err(request_error(&url))?;
        check_status(&url, response)?;
        Ok(())
    }
}

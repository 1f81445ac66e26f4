use std::sync::Arc;
use uuid::Uuid;

use crate::clients::{self, ApiClient, Fetcher, HttpFetcher, ObjectStore, PagesApi, S3Store};
use crate::config::HarvestConfig;
use crate::context::PageContext;
use crate::error::{ClientError, ExtractError, JobError};
use crate::message::JobRequest;
use crate::parsers::{self, Document};
use crate::resolve;
use crate::results::{JobReport, PageUpdate, SeoMetadata};

/// Outcome line of a job that completed every requested step
pub const SUCCESS_MESSAGE: &str = "Successfully processed messages.";

/// Everything a request asked to be extracted from one page
#[derive(Debug, Default)]
struct Extraction {
    seo: Option<SeoMetadata>,
    snippets: Option<Vec<String>>,
    images: Option<Vec<String>>,
}

/// Parses `content` and runs the extractors enabled on `request`.
///
/// `html` and `body` are required whatever the flags; `head` and `title`
/// only when SEO metadata is requested.
fn extract(
    content: &str,
    request: &JobRequest,
    context: &PageContext,
) -> Result<Extraction, ExtractError> {
    let document = Document::parse(content);
    let html = document.html()?;
    let body = document.body()?;

    let mut extraction = Extraction::default();
    if request.seo {
        extraction.seo = Some(parsers::extract_seo(html, &context.path)?);
    }
    if request.texts {
        extraction.snippets = Some(parsers::extract_texts(body));
    }
    if request.images {
        extraction.images = Some(parsers::extract_images(body));
    }
    Ok(extraction)
}

/// One-shot page harvesting job with injected collaborators
#[derive(Clone)]
pub struct Job {
    fetcher: Arc<dyn Fetcher>,
    api: Arc<dyn PagesApi>,
    store: Arc<dyn ObjectStore>,
}

impl Job {
    /// Create a job from explicit collaborators
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        api: Arc<dyn PagesApi>,
        store: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            fetcher,
            api,
            store,
        }
    }

    /// Create a job backed by the HTTP and S3 collaborators described by `config`
    pub async fn from_config(config: &HarvestConfig) -> Result<Self, ClientError> {
        let client = clients::build_client(config)?;
        Ok(Self::new(
            Arc::new(HttpFetcher::new(client.clone()).with_max_bytes(config.max_image_bytes)),
            Arc::new(ApiClient::new(client, &config.api_url)),
            Arc::new(S3Store::from_config(config).await),
        ))
    }

    /// Replace the object store
    pub fn with_store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.store = store;
        self
    }

    /// Runs the job and returns its outcome line.
    ///
    /// Never fails: job-terminating errors are logged and reported as their
    /// descriptive message so the queue consumer treats them as handled.
    pub async fn handle(&self, request: &JobRequest) -> String {
        match self.run(request).await {
            Ok(report) => {
                ::log::info!(
                    "Page {} done: seo_updated={} snippets={:?} images_stored={} images_skipped={}",
                    request.page_id,
                    report.seo_updated,
                    report.snippets,
                    report.images_stored,
                    report.images_skipped
                );
                ::log::info!("{}", SUCCESS_MESSAGE);
                SUCCESS_MESSAGE.to_string()
            }
            Err(error) => {
                match std::error::Error::source(&error) {
                    Some(source) => ::log::error!("{} ({})", error, source),
                    None => ::log::error!("{}", error),
                }
                error.to_string()
            }
        }
    }

    /// Runs the job, returning the first job-terminating error
    pub async fn run(&self, request: &JobRequest) -> Result<JobReport, JobError> {
        ::log::info!("URL {}", request.url);
        ::log::info!("PAGEID {}", request.page_id);
        ::log::info!("WEBSITEID {}", request.website_id);
        ::log::info!(
            "SEO {} IMAGES {} TEXTS {}",
            request.seo,
            request.images,
            request.texts
        );

        let context = PageContext::new(&request.url)?;

        let content = self
            .fetcher
            .fetch_text(&request.url)
            .await
            .map_err(|source| JobError::FetchFailure {
                url: request.url.clone(),
                source,
            })?;

        let extraction = extract(&content, request, &context)
            .map_err(|error| JobError::from_extract(error, &request.url))?;

        let mut report = JobReport::default();

        if let Some(seo) = extraction.seo {
            ::log::info!("TITLE {}", seo.title);
            ::log::info!("DESCRIPTION {}", seo.description);

            let update = PageUpdate::new(&request.page_id, seo);
            self.api
                .update_page(&update)
                .await
                .map_err(|source| JobError::SeoUpload {
                    page_id: request.page_id.clone(),
                    source,
                })?;
            report.seo_updated = true;
        }

        if let Some(snippets) = extraction.snippets {
            self.api
                .create_snippets(&request.page_id, &snippets)
                .await
                .map_err(|source| JobError::TextUpload {
                    page_id: request.page_id.clone(),
                    source,
                })?;
            report.snippets = Some(snippets.len());
        }

        if let Some(images) = extraction.images {
            let (stored, skipped) = self
                .rehost_images(&request.website_id, &images, &context)
                .await;
            report.images_stored = stored;
            report.images_skipped = skipped;
        }

        Ok(report)
    }

    /// Downloads and stores each image in turn; failures are logged and skipped.
    ///
    /// Returns `(stored, skipped)` counts.
    async fn rehost_images(
        &self,
        website_id: &str,
        references: &[String],
        context: &PageContext,
    ) -> (usize, usize) {
        let mut stored = 0;
        let mut skipped = 0;

        for reference in references {
            match self.rehost_image(website_id, reference, context).await {
                Ok(key) => {
                    ::log::debug!("Stored image {} as {}", reference, key);
                    stored += 1;
                }
                Err(error) => {
                    ::log::warn!("Skipping image {}: {}", reference, error);
                    skipped += 1;
                }
            }
        }

        ::log::info!(
            "Re-hosted {} of {} images ({} skipped)",
            stored,
            references.len(),
            skipped
        );
        (stored, skipped)
    }

    async fn rehost_image(
        &self,
        website_id: &str,
        reference: &str,
        context: &PageContext,
    ) -> Result<String, ClientError> {
        let url = context.resolve(reference);
        let body = self.fetcher.fetch_bytes(&url).await?;

        // Extension comes from the reference as written, not the resolved URL
        let extension = resolve::image_extension(reference);
        let key = resolve::object_key(website_id, &Uuid::new_v4().to_string(), &extension);

        self.store
            .put_public(&key, body, resolve::mime_type(&extension))
            .await?;
        Ok(key)
    }
}

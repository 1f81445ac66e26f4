use serde::{Deserialize, Serialize};

/// Title and description read from a page's `<head>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMetadata {
    /// Raw (untrimmed) text of `<title>`
    pub title: String,

    /// `content` of `<meta name="description">`, empty when absent
    pub description: String,

    /// Path of the page the metadata belongs to
    pub path: String,
}

/// Body of the page upsert sent to the pages API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageUpdate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

impl PageUpdate {
    /// Create the upsert body for a page from its metadata
    pub fn new(page_id: &str, seo: SeoMetadata) -> Self {
        Self {
            id: page_id.to_string(),
            title: seo.title,
            description: seo.description,
            url: seo.path,
        }
    }
}

/// Summary of a successful job run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobReport {
    /// Whether the page metadata was sent to the API
    pub seo_updated: bool,

    /// Number of text snippets sent, if texts were requested
    pub snippets: Option<usize>,

    /// Images downloaded and stored
    pub images_stored: usize,

    /// Images that failed to download or upload
    pub images_skipped: usize,
}

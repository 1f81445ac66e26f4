use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::context::normalize_url;
use crate::error::MessageError;

/// Queue event as delivered to the handler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<QueueRecord>,
}

/// A single queue message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueRecord {
    #[serde(rename = "messageAttributes", default)]
    pub message_attributes: HashMap<String, MessageAttribute>,
}

/// String-typed message attribute
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageAttribute {
    #[serde(rename = "stringValue")]
    pub string_value: Option<String>,
}

/// What a single job should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub page_id: String,
    pub website_id: String,
    pub seo: bool,
    pub images: bool,
    pub texts: bool,
    /// Page URL, always scheme-qualified
    pub url: String,
}

impl JobRequest {
    /// Build a request, normalizing the URL
    pub fn new(page_id: &str, website_id: &str, url: &str) -> Self {
        Self {
            page_id: page_id.to_string(),
            website_id: website_id.to_string(),
            seo: false,
            images: false,
            texts: false,
            url: normalize_url(url),
        }
    }

    /// Decode the first record of a JSON queue event
    pub fn from_json(json: &str) -> Result<Self, MessageError> {
        let event: QueueEvent = serde_json::from_str(json)?;
        Self::from_event(&event)
    }

    /// Decode the first record of a queue event
    pub fn from_event(event: &QueueEvent) -> Result<Self, MessageError> {
        let record = event.records.first().ok_or(MessageError::NoRecords)?;
        if event.records.len() > 1 {
            ::log::warn!(
                "Queue event has {} records, only the first is processed",
                event.records.len()
            );
        }
        Self::from_record(record)
    }

    /// Decode a single queue record
    pub fn from_record(record: &QueueRecord) -> Result<Self, MessageError> {
        let attribute = |name: &'static str| {
            record
                .message_attributes
                .get(name)
                .and_then(|attr| attr.string_value.as_deref())
                .ok_or(MessageError::MissingAttribute(name))
        };

        let mut request = Self::new(attribute("pageId")?, attribute("websiteId")?, attribute("url")?);
        request.seo = is_enabled(attribute("seo")?);
        request.images = is_enabled(attribute("images")?);
        request.texts = is_enabled(attribute("texts")?);
        Ok(request)
    }
}

/// Flags are enabled only by the exact string `"true"`
fn is_enabled(flag: &str) -> bool {
    flag == "true"
}

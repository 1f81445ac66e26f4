use std::fmt;

/// Structural nodes that must exist before extraction can proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredNode {
    Html,
    Body,
    Head,
    Title,
    /// The first text child of `<title>`
    TitleText,
}

impl fmt::Display for RequiredNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequiredNode::Html => "html",
            RequiredNode::Body => "body",
            RequiredNode::Head => "head",
            RequiredNode::Title => "title",
            RequiredNode::TitleText => "title text",
        };
        f.write_str(name)
    }
}

/// Errors raised while reading a parsed document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("missing {0} node")]
    MissingNode(RequiredNode),
}

/// Errors raised by the outbound collaborators (page fetch, pages API, object store)
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("{url} exceeds the {limit} byte limit")]
    TooLarge { url: String, limit: usize },

    #[error("failed to store {key}: {message}")]
    Storage { key: String, message: String },

    #[error("{0}")]
    Other(String),
}

/// Job-terminating failures.
///
/// The `Display` output of each variant is the outcome line handed back to
/// the queue consumer, so the wording is part of the external contract.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("Provided external URL is incorrect: {0}")]
    InvalidUrl(String),

    #[error("{}", missing_node_message(.node, .url))]
    MissingNode { node: RequiredNode, url: String },

    #[error("Unable to fetch the provided URL: {url}")]
    FetchFailure {
        url: String,
        #[source]
        source: ClientError,
    },

    #[error("Unable to update page with ID: {page_id}")]
    SeoUpload {
        page_id: String,
        #[source]
        source: ClientError,
    },

    #[error("Unable to upload texts to DB for page with ID: {page_id}")]
    TextUpload {
        page_id: String,
        #[source]
        source: ClientError,
    },
}

impl JobError {
    /// Attach the page URL to a structural extraction failure
    pub fn from_extract(error: ExtractError, url: &str) -> Self {
        match error {
            ExtractError::MissingNode(node) => JobError::MissingNode {
                node,
                url: url.to_string(),
            },
        }
    }
}

fn missing_node_message(node: &RequiredNode, url: &str) -> String {
    match node {
        RequiredNode::TitleText => format!("Page title missing for: {}", url),
        other => format!(
            "Missing {} node for URL: {}",
            other.to_string().to_uppercase(),
            url
        ),
    }
}

/// Errors decoding a queue event into a job request
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("queue event contains no records")]
    NoRecords,

    #[error("message attribute `{0}` is missing")]
    MissingAttribute(&'static str),

    #[error("invalid queue event JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors loading the harvester configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required setting `{0}` (set it in the config file or environment)")]
    Missing(&'static str),
}

// Re-export modules
pub mod clients;
pub mod config;
pub mod context;
pub mod error;
pub mod job;
pub mod message;
pub mod parsers;
pub mod resolve;
pub mod results;

// Re-export commonly used types for convenience
pub use config::HarvestConfig;
pub use context::PageContext;
pub use error::{ClientError, ExtractError, JobError, RequiredNode};
pub use job::{Job, SUCCESS_MESSAGE};
pub use message::JobRequest;
pub use results::{JobReport, PageUpdate, SeoMetadata};

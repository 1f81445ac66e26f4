pub mod client;
pub mod http;
pub mod s3;

pub use client::{Fetcher, ObjectStore, PagesApi};
pub use http::{ApiClient, HttpFetcher, build_client};
pub use s3::S3Store;

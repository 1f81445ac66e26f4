use clap::Parser;
use page_harvest::JobRequest;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-harvest")]
#[command(about = "Extracts SEO metadata, text snippets and images from a single page")]
#[command(version)]
pub struct Args {
    /// Queue event JSON to process (`-` reads stdin)
    #[arg(short, long, conflicts_with = "url")]
    pub event: Option<PathBuf>,

    /// Page URL (a bare domain gets https://)
    #[arg(short, long, requires = "page_id", requires = "website_id")]
    pub url: Option<String>,

    /// Page identifier used by the pages API
    #[arg(long)]
    pub page_id: Option<String>,

    /// Website identifier used in image storage keys
    #[arg(long)]
    pub website_id: Option<String>,

    /// Extract and upload title/description
    #[arg(long)]
    pub seo: bool,

    /// Extract and re-host images
    #[arg(long)]
    pub images: bool,

    /// Extract and upload text snippets
    #[arg(long)]
    pub texts: bool,

    /// JSON configuration file (environment variables override it)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Job request described by the command-line flags, if a URL was given
    pub fn job_request(&self) -> Option<JobRequest> {
        let url = self.url.as_deref()?;
        let mut request = JobRequest::new(
            self.page_id.as_deref().unwrap_or_default(),
            self.website_id.as_deref().unwrap_or_default(),
            url,
        );
        request.seo = self.seo;
        request.images = self.images;
        request.texts = self.texts;
        Some(request)
    }
}

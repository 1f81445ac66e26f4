use clap::Parser;
use page_harvest::{HarvestConfig, Job, JobRequest};
use std::io::Read;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let request = match read_request(&args) {
        Ok(request) => request,
        Err(e) => {
            ::log::error!("Unable to read job request: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let job = match Job::from_config(&config).await {
        Ok(job) => job,
        Err(e) => {
            ::log::error!("Failed to set up clients: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let start_time = std::time::Instant::now();
    let outcome = job.handle(&request).await;
    ::log::debug!(
        "Job for page {} finished in {:.2} seconds",
        request.page_id,
        start_time.elapsed().as_secs_f64()
    );

    // Job-level failures are handled outcomes, not process failures
    println!("{}", outcome);
    ExitCode::SUCCESS
}

/// Config file (if any) with environment overrides applied
fn load_config(args: &Args) -> Result<HarvestConfig, page_harvest::error::ConfigError> {
    match &args.config {
        Some(path) => HarvestConfig::from_file(path)?
            .with_env_overrides()
            .validated(),
        None => HarvestConfig::from_env(),
    }
}

/// Job request from the queue event or the command-line flags
fn read_request(args: &Args) -> Result<JobRequest, Box<dyn std::error::Error>> {
    if let Some(request) = args.job_request() {
        return Ok(request);
    }

    let Some(path) = &args.event else {
        return Err("either --event or --url is required".into());
    };

    let json = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };

    Ok(JobRequest::from_json(&json)?)
}

use anyhow::Result;
use std::process::ExitCode;
use tracing::{error, info};

use asg_find::autoscaling::AsgFetcher;
use asg_find::config::Config;
use asg_find::find::find;
use asg_find::logging;
use asg_find::report::report;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let config = Config::from_args();
    logging::init(&config.log_format, &config.log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "asg-find starting");
    config.display();

    let outcome = run(&config).await;
    if let Err(e) = &outcome {
        error!(error = %e, "Query failed");
    }

    let code = report(&mut std::io::stdout().lock(), &outcome, config.pretty)?;
    Ok(ExitCode::from(code))
}

/// Validates the tag filter, connects, then queries. Nothing is fetched when
/// the filter is malformed or the connection cannot be established.
async fn run(config: &Config) -> asg_find::error::Result<asg_find::model::MatchResult> {
    let filter = config.tag_filter()?;
    let fetcher = AsgFetcher::connect(&config.connection()).await?;

    info!(
        region = %fetcher.region(),
        tag_count = filter.len(),
        check_mode = config.check,
        "Searching Auto Scaling groups"
    );

    find(&fetcher, &filter).await
}

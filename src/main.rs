use crate::cli::Cli;
use crate::config::FeedConfig;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod domain;
mod errors;
mod feed;
mod fetcher;
mod pipeline;
mod templates;

#[cfg(test)]
mod tests;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "vehicle_feed=debug"
    } else {
        "vehicle_feed=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 1️⃣ Settings: defaults < environment < flags
    let config = match FeedConfig::from_env().and_then(|c| cli.apply(c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Fetch, serialize, write
    match pipeline::run(&config, chrono::Local::now()) {
        Ok(report) => tracing::info!(
            feed = %report.files.feed.display(),
            status_page = %report.files.status_page.display(),
            listings = report.summary.processed,
            "Done"
        ),
        Err(e) => {
            tracing::error!("❌ Error generating feed: {e}");
            std::process::exit(1);
        }
    }
}

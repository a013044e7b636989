// pipeline.rs
use crate::config::FeedConfig;
use crate::errors::FeedError;
use crate::feed::{generate_feed, write_outputs, FeedSummary, WrittenFiles};
use crate::fetcher::{CatalogClient, Inventory};
use crate::templates::{status_page, StatusVm};
use chrono::{DateTime, Datelike, Local};
use tracing::info;

#[derive(Debug)]
pub struct RunReport {
    pub summary: FeedSummary,
    pub files: WrittenFiles,
}

/// fetch → serialize → write, once. `now` fixes both the reference year for
/// NEW/USED and the timestamp on the status page.
pub fn run(config: &FeedConfig, now: DateTime<Local>) -> Result<RunReport, FeedError> {
    info!("🚀 Starting feed generation");

    let client = CatalogClient::new(config)?;
    let inventory = client.fetch_vehicles()?;

    publish(config, &inventory, now)
}

/// Everything after the fetch. Split out so a run can be replayed from
/// records already in hand.
pub fn publish(
    config: &FeedConfig,
    inventory: &Inventory,
    now: DateTime<Local>,
) -> Result<RunReport, FeedError> {
    let feed = generate_feed(&inventory.records, &config.site, now.year());
    let summary = feed.summary.with_unreadable(inventory.unreadable);

    let vm = StatusVm {
        dealer_name: config.site.dealer_name.clone(),
        site_url: config.site.url.to_string(),
        feed_file: config.feed_file.clone(),
        updated_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        total_vehicles: summary.total,
        listed: summary.processed,
        skipped: summary.skipped,
    };
    let html = status_page(&vm).into_string();

    let files = write_outputs(config, &feed.xml, &html)?;

    info!(
        total = summary.total,
        processed = summary.processed,
        skipped = summary.skipped,
        "✅ Feed generation complete"
    );

    Ok(RunReport { summary, files })
}

use crate::config::{parse_url, FeedConfig};
use crate::errors::FeedError;
use clap::Parser;
use std::path::PathBuf;

/// Build the vehicle ads XML feed from the dealer's catalog.
#[derive(Parser, Debug)]
#[command(name = "vehicle-feed", version)]
pub struct Cli {
    /// Catalog endpoint to fetch (overrides FEED_API_URL)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Directory for feed.xml and index.html (overrides FEED_OUTPUT_DIR)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Dealer site used for Origin/Referer and listing links (overrides FEED_SITE_URL)
    #[arg(long)]
    pub site_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags win over the environment, which wins over the defaults.
    pub fn apply(&self, mut config: FeedConfig) -> Result<FeedConfig, FeedError> {
        if let Some(raw) = &self.endpoint {
            config.endpoint = parse_url("--endpoint", raw)?;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(raw) = &self.site_url {
            config.site.url = parse_url("--site-url", raw)?;
        }
        Ok(config)
    }
}

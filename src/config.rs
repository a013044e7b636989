// config.rs

use crate::errors::FeedError;
use std::env;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.wayke.se/vehicles?hits=200";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
pub const DEFAULT_SITE_URL: &str = "https://goingebil.se";
pub const DEFAULT_DEALER_NAME: &str = "Göinge Bil";
pub const DEFAULT_FEED_TITLE: &str = "Göinge Bil - Begagnade Bilar";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// The publishing site. Its origin doubles as the Origin/Referer pair the
/// catalog API expects, and listing URLs hang off it.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub url: Url,
    pub dealer_name: String,
    pub feed_title: String,
}

impl SiteConfig {
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    pub fn referer(&self) -> String {
        self.url.to_string()
    }

    /// Public page for one vehicle, e.g. `https://goingebil.se/sok/id/abc123`.
    pub fn vehicle_url(&self, vehicle_id: &str) -> String {
        format!(
            "{}/sok/id/{}",
            self.url.as_str().trim_end_matches('/'),
            vehicle_id
        )
    }
}

#[derive(Clone, Debug)]
pub struct FeedConfig {
    pub endpoint: Url,
    pub user_agent: String,
    pub output_dir: PathBuf,
    pub feed_file: String,
    pub status_file: String,
    pub site: SiteConfig,
}

impl FeedConfig {
    /// The settings the feed was originally published with.
    pub fn defaults() -> Result<Self, FeedError> {
        Ok(Self {
            endpoint: parse_url("default API URL", DEFAULT_API_URL)?,
            user_agent: USER_AGENT.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            feed_file: "feed.xml".to_string(),
            status_file: "index.html".to_string(),
            site: SiteConfig {
                url: parse_url("default site URL", DEFAULT_SITE_URL)?,
                dealer_name: DEFAULT_DEALER_NAME.to_string(),
                feed_title: DEFAULT_FEED_TITLE.to_string(),
            },
        })
    }

    /// Defaults, overridden by `FEED_*` variables (a `.env` file is honoured).
    pub fn from_env() -> Result<Self, FeedError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each `FEED_*` key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FeedError> {
        let mut config = Self::defaults()?;

        if let Some(raw) = lookup("FEED_API_URL") {
            config.endpoint = parse_url("FEED_API_URL", &raw)?;
        }
        if let Some(dir) = lookup("FEED_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("FEED_SITE_URL") {
            config.site.url = parse_url("FEED_SITE_URL", &raw)?;
        }
        if let Some(name) = lookup("FEED_DEALER_NAME") {
            config.site.dealer_name = name;
        }
        if let Some(title) = lookup("FEED_TITLE") {
            config.site.feed_title = title;
        }

        Ok(config)
    }

    pub fn feed_path(&self) -> PathBuf {
        self.output_dir.join(&self.feed_file)
    }

    pub fn status_path(&self) -> PathBuf {
        self.output_dir.join(&self.status_file)
    }
}

pub fn parse_url(key: &str, raw: &str) -> Result<Url, FeedError> {
    Url::parse(raw).map_err(|e| FeedError::Config(format!("{key} is not a valid URL ({raw}): {e}")))
}

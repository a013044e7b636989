use crate::config::FeedConfig;
use crate::errors::FeedError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub struct WrittenFiles {
    pub feed: PathBuf,
    pub status_page: PathBuf,
}

/// Creates the output directory if needed, then overwrites the feed and the
/// status page in that order.
pub fn write_outputs(
    config: &FeedConfig,
    feed_xml: &str,
    status_html: &str,
) -> Result<WrittenFiles, FeedError> {
    fs::create_dir_all(&config.output_dir).map_err(|source| FeedError::Filesystem {
        path: config.output_dir.clone(),
        source,
    })?;

    let feed = config.feed_path();
    write_file(&feed, feed_xml)?;
    info!(
        path = %feed.display(),
        size_kb = %format!("{:.2}", feed_xml.len() as f64 / 1024.0),
        "💾 Saved feed"
    );

    let status_page = config.status_path();
    write_file(&status_page, status_html)?;
    info!(path = %status_page.display(), "📄 Created status page");

    Ok(WrittenFiles { feed, status_page })
}

fn write_file(path: &Path, contents: &str) -> Result<(), FeedError> {
    fs::write(path, contents).map_err(|source| FeedError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

// errors.rs
use crate::fetcher::FetchError;
use std::path::PathBuf;
use thiserror::Error;

/// Anything that aborts a run. Records missing required fields are not
/// errors; the serializer counts them as skipped.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

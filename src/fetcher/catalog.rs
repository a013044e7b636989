// catalog.rs
use crate::config::FeedConfig;
use crate::fetcher::FetchError;
use crate::fetcher::SourceRecord;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

// Bodies of failed responses can be whole HTML error pages.
const ERROR_BODY_EXCERPT: usize = 200;

/// What one fetch produced. Documents that could not be read at all are
/// counted rather than failing the run.
#[derive(Debug, Default)]
pub struct Inventory {
    pub records: Vec<SourceRecord>,
    pub unreadable: usize,
}

pub struct CatalogClient {
    client: Client,
    endpoint: Url,
}

impl CatalogClient {
    pub fn new(config: &FeedConfig) -> Result<Self, FetchError> {
        // The catalog rejects requests that don't look like they come from
        // the dealer's own site.
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ORIGIN, HeaderValue::from_str(&config.site.origin())?);
        headers.insert(REFERER, HeaderValue::from_str(&config.site.referer())?);

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// One GET, no retries. The upstream caps the result set (`hits`) and
    /// whatever it returns is the inventory for this run.
    pub fn fetch_vehicles(&self) -> Result<Inventory, FetchError> {
        info!(endpoint = %self.endpoint, "📡 Fetching vehicles");

        let resp = self.client.get(self.endpoint.clone()).send()?;
        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: text.chars().take(ERROR_BODY_EXCERPT).collect(),
            });
        }

        debug!(bytes = text.len(), "Catalog response received");

        let inventory = Self::extract_documents(&text)?;
        info!(
            count = inventory.records.len() + inventory.unreadable,
            "✅ Fetched vehicles"
        );
        Ok(inventory)
    }

    /// Only the `documentList.documents` container is required. A document
    /// that does not fit `SourceRecord` is logged and skipped.
    pub(crate) fn extract_documents(body: &str) -> Result<Inventory, FetchError> {
        let data: Value = serde_json::from_str(body).map_err(FetchError::Parse)?;

        let arr = data["documentList"]["documents"].as_array().ok_or_else(|| {
            FetchError::Schema("documentList.documents missing".to_string())
        })?;

        let records: Vec<SourceRecord> = arr
            .iter()
            .enumerate()
            .filter_map(|(index, v)| match serde_json::from_value(v.clone()) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(index, error = %e, "Skipping vehicle due to unreadable document");
                    None
                }
            })
            .collect();

        Ok(Inventory {
            unreadable: arr.len() - records.len(),
            records,
        })
    }
}

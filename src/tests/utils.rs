use crate::config::{FeedConfig, SiteConfig};
use crate::fetcher::models::SourceRecord;
use serde_json::{json, Value};

pub fn test_site() -> SiteConfig {
    FeedConfig::defaults().unwrap().site
}

pub fn record(value: Value) -> SourceRecord {
    serde_json::from_value(value).unwrap_or_else(|e| panic!("bad test record: {e}"))
}

/// The Volvo used throughout the feed examples.
pub fn xc60_json() -> Value {
    json!({
        "id": "abc123",
        "manufacturer": "Volvo",
        "modelSeries": "XC60",
        "price": 299000,
        "mileage": 50,
        "modelYear": 2023,
        "fuelType": "Bensin",
        "gearboxType": "Automat",
        "status": "Published"
    })
}

pub fn xc60() -> SourceRecord {
    record(xc60_json())
}

pub fn image_json(formats: Value) -> Value {
    json!({ "files": [ { "formats": formats } ] })
}

pub fn catalog_body(documents: Value) -> String {
    json!({ "documentList": { "documents": documents } }).to_string()
}

/// Inverse of `escape_xml` for the five predefined entities.
pub fn unescape_xml(escaped: &str) -> String {
    escaped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// The `<listing>` block whose vehicle_id matches, panicking if absent.
pub fn listing_block<'a>(xml: &'a str, vehicle_id: &str) -> &'a str {
    let marker = format!("<vehicle_id>{vehicle_id}</vehicle_id>");
    let at = xml
        .find(&marker)
        .unwrap_or_else(|| panic!("no listing for {vehicle_id}"));
    let start = xml[..at].rfind("<listing>").unwrap();
    let end = at + xml[at..].find("</listing>").unwrap() + "</listing>".len();
    &xml[start..end]
}

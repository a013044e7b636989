// feed/xml.rs
use crate::config::SiteConfig;
use crate::domain::listing::Listing;
use crate::fetcher::models::SourceRecord;
use tracing::{debug, info, warn};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

// Fixed category ids the vehicle ads schema expects on every listing.
pub const GOOGLE_PRODUCT_CATEGORY: &str = "916";
pub const FB_PRODUCT_CATEGORY: &str = "173";

pub const IMAGE_TAG: &str = "Exterior";
pub const MILEAGE_UNIT: &str = "KM";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSummary {
    pub total: usize,
    pub processed: usize,
    pub skipped: usize,
}

impl FeedSummary {
    /// Folds in documents the fetcher could not read, so that
    /// `processed + skipped == total` covers everything the catalog sent.
    pub fn with_unreadable(self, unreadable: usize) -> Self {
        Self {
            total: self.total + unreadable,
            processed: self.processed,
            skipped: self.skipped + unreadable,
        }
    }
}

#[derive(Debug)]
pub struct RenderedFeed {
    pub xml: String,
    pub summary: FeedSummary,
}

/// Escapes the five XML special characters.
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Line-oriented writer with two-space indentation. Text and attribute
/// values are always escaped; tag and attribute names never are.
struct XmlWriter {
    buf: String,
    depth: usize,
}

impl XmlWriter {
    fn new() -> Self {
        let mut buf = String::from(XML_DECLARATION);
        buf.push('\n');
        Self { buf, depth: 0 }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_xml(value));
            self.buf.push('"');
        }
    }

    fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.start_tag(tag, attrs);
        self.buf.push_str(">\n");
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.start_tag(tag, attrs);
        self.buf.push_str("/>\n");
    }

    fn text(&mut self, tag: &str, attrs: &[(&str, &str)], value: &str) {
        self.indent();
        self.start_tag(tag, attrs);
        self.buf.push('>');
        self.buf.push_str(&escape_xml(value));
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    fn element(&mut self, tag: &str, value: &str) {
        self.text(tag, &[], value);
    }

    fn optional(&mut self, tag: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.element(tag, value);
        }
    }

    fn finish(mut self) -> String {
        // The closing root tag carries no trailing newline.
        if self.buf.ends_with('\n') {
            self.buf.pop();
        }
        self.buf
    }
}

/// Serializes every record that has an id, a make and a price, in input
/// order. Everything else is counted as skipped; skips never fail the run.
pub fn generate_feed(
    records: &[SourceRecord],
    site: &SiteConfig,
    reference_year: i32,
) -> RenderedFeed {
    let mut w = XmlWriter::new();
    w.open("listings", &[]);
    w.element("title", &site.feed_title);
    w.empty("link", &[("rel", "self"), ("href", site.url.as_str().trim_end_matches('/'))]);

    let mut processed = 0;
    let mut skipped = 0;

    for (index, record) in records.iter().enumerate() {
        match Listing::from_record(record, site, reference_year) {
            Ok(listing) => {
                debug!(vehicle_id = listing.vehicle_id, "Adding listing");
                write_listing(&mut w, &listing);
                processed += 1;
            }
            Err(missing) => {
                warn!(
                    index,
                    id = record.id.as_deref().unwrap_or("<none>"),
                    missing = ?missing.0,
                    "Skipping vehicle with missing required data"
                );
                skipped += 1;
            }
        }
    }

    w.close("listings");

    info!(processed, "✅ Generated feed");
    if skipped > 0 {
        warn!(skipped, "⚠️ Skipped vehicles (missing required data)");
    }

    RenderedFeed {
        xml: w.finish(),
        summary: FeedSummary {
            total: records.len(),
            processed,
            skipped,
        },
    }
}

fn write_listing(w: &mut XmlWriter, listing: &Listing<'_>) {
    w.open("listing", &[]);

    w.element("google_product_category", GOOGLE_PRODUCT_CATEGORY);
    w.element("fb_product_category", FB_PRODUCT_CATEGORY);
    w.element("vehicle_id", listing.vehicle_id);
    w.optional("vehicle_registration_plate", listing.registration_plate);
    w.element("title", &listing.title);
    w.element("description", &listing.description);
    w.element("url", &listing.url);
    w.element("make", listing.make);

    if let Some(image_url) = listing.image_url {
        w.open("image", &[]);
        w.element("url", image_url);
        w.element("tag", IMAGE_TAG);
        w.close("image");
    }

    w.optional("model", listing.model);

    if let Some(year) = listing.year {
        w.element("year", &year.to_string());
    }

    if let Some(km) = listing.mileage_km {
        w.open("mileage", &[]);
        w.element("value", &km.to_string());
        w.element("unit", MILEAGE_UNIT);
        w.close("mileage");
    }

    w.element("body_style", listing.body_style.as_str());
    w.optional("fuel_type", listing.fuel_type);
    w.optional("transmission", listing.transmission);
    w.element("price", &listing.price);

    if let Some(address) = &listing.address {
        w.open("address", &[("format", "simple")]);
        w.text("component", &[("name", "addr1")], &address.addr1);
        w.text("component", &[("name", "city")], address.city);
        w.text("component", &[("name", "region")], address.region);
        w.text("component", &[("name", "country")], address.country);
        w.close("address");
    }

    w.element("sale_price", &listing.price);
    w.element("availability", listing.availability.as_str());
    w.element("state_of_vehicle", listing.state_of_vehicle.as_str());
    w.optional("dealer_id", listing.dealer_id);

    w.close("listing");
}

use crate::config::SiteConfig;
use crate::domain::mapping::{
    availability, best_image_url, body_style, condition, format_description, map_fuel_type,
    map_transmission, non_empty, Availability, BodyStyle, Condition,
};
use crate::fetcher::models::SourceRecord;

pub const MAX_TITLE_CHARS: usize = 200;

/// Swedish mil to kilometres.
pub const KM_PER_MIL: f64 = 10.0;

pub const COUNTRY_CODE: &str = "SE";
pub const CURRENCY: &str = "SEK";

/// One vehicle projected onto the advertising feed schema. Lives only while
/// the feed is being serialized.
#[derive(Debug)]
pub struct Listing<'a> {
    pub vehicle_id: &'a str,
    pub registration_plate: Option<&'a str>,
    pub title: String,
    pub description: String,
    pub url: String,
    pub make: &'a str,
    pub image_url: Option<&'a str>,
    pub model: Option<&'a str>,
    pub year: Option<i32>,
    pub mileage_km: Option<f64>,
    pub body_style: BodyStyle,
    pub fuel_type: Option<&'a str>,
    pub transmission: Option<&'a str>,
    pub price: String,
    pub address: Option<Address<'a>>,
    pub availability: Availability,
    pub state_of_vehicle: Condition,
    pub dealer_id: Option<&'a str>,
}

#[derive(Debug)]
pub struct Address<'a> {
    pub addr1: String,
    pub city: &'a str,
    pub region: &'a str,
    pub country: &'static str,
}

/// Why a record was left out of the feed.
#[derive(Debug, PartialEq, Eq)]
pub struct MissingFields(pub Vec<&'static str>);

impl<'a> Listing<'a> {
    pub fn from_record(
        record: &'a SourceRecord,
        site: &SiteConfig,
        reference_year: i32,
    ) -> Result<Self, MissingFields> {
        let id = non_empty(&record.id);
        let make = non_empty(&record.manufacturer);
        let price = record.price.filter(|p| *p != 0.0);

        let (vehicle_id, make, price) = match (id, make, price) {
            (Some(id), Some(make), Some(price)) => (id, make, price),
            _ => {
                let mut missing = Vec::new();
                if id.is_none() {
                    missing.push("id");
                }
                if make.is_none() {
                    missing.push("manufacturer");
                }
                if price.is_none() {
                    missing.push("price");
                }
                return Err(MissingFields(missing));
            }
        };

        let model = non_empty(&record.model_series);
        let branch = record.branches.as_ref().and_then(|b| b.first());

        Ok(Listing {
            vehicle_id,
            registration_plate: non_empty(&record.registration_number),
            title: build_title(make, model, non_empty(&record.short_description)),
            description: format_description(record),
            url: site.vehicle_url(vehicle_id),
            make,
            image_url: best_image_url(record),
            model,
            year: record.model_year.filter(|y| *y != 0),
            mileage_km: record
                .mileage
                .filter(|m| *m != 0.0)
                .map(|m| m * KM_PER_MIL),
            body_style: body_style(model.unwrap_or("")),
            fuel_type: non_empty(&record.fuel_type).map(map_fuel_type),
            transmission: non_empty(&record.gearbox_type).map(map_transmission),
            price: format!("{price} {CURRENCY}"),
            address: build_address(record, branch.and_then(|b| non_empty(&b.name)), site),
            availability: availability(record.status.as_deref()),
            state_of_vehicle: condition(record.model_year.unwrap_or(0), reference_year),
            dealer_id: branch.and_then(|b| non_empty(&b.id)),
        })
    }
}

fn build_title(make: &str, model: Option<&str>, short_description: Option<&str>) -> String {
    let mut parts = vec![make];
    parts.extend(model);
    parts.extend(short_description);
    parts.join(" ").chars().take(MAX_TITLE_CHARS).collect()
}

fn build_address<'a>(
    record: &'a SourceRecord,
    branch_name: Option<&str>,
    site: &SiteConfig,
) -> Option<Address<'a>> {
    let city = record.position.as_ref().and_then(|p| non_empty(&p.city))?;

    let addr1 = match branch_name {
        Some(name) => name.to_string(),
        None => format!("{} {}", site.dealer_name, city),
    };

    Some(Address {
        addr1,
        city,
        region: city,
        country: COUNTRY_CODE,
    })
}

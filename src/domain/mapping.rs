// src/domain/mapping.rs

use crate::fetcher::models::SourceRecord;

/// Swedish fuel labels used by the catalog, mapped to the feed's vocabulary.
pub const FUEL_TYPES: &[(&str, &str)] = &[
    ("Laddhybrid", "Plug-in Hybrid"),
    ("El", "Electric"),
    ("Elektrisk", "Electric"),
    ("Bensin", "Gasoline"),
    ("Diesel", "Diesel"),
    ("Elhybrid", "Hybrid"),
    ("Förbränningsmotor", "Gasoline"),
];

pub const TRANSMISSIONS: &[(&str, &str)] = &[("Automat", "Automatic"), ("Manuell", "Manual")];

pub const SUV_MODELS: &[&str] = &[
    "XC40", "XC60", "XC90", "Q3", "Q5", "X3", "X5", "Sportage", "Tucson", "Kona",
];
pub const WAGON_MODELS: &[&str] = &["V60", "V90"];

/// Checked in order; the first tag present in the format list wins.
pub const PREFERRED_IMAGE_FORMATS: &[&str] = &["800x", "770x514"];

pub const CLOSING_SENTENCE: &str = "Kontakta oss för mer information om detta fordon";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStyle {
    Suv,
    Wagon,
    Sedan,
}

impl BodyStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BodyStyle::Suv => "SUV",
            BodyStyle::Wagon => "Wagon",
            BodyStyle::Sedan => "Sedan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::New => "NEW",
            Condition::Used => "USED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    NotAvailable,
}

impl Availability {
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Available => "AVAILABLE",
            Availability::NotAvailable => "NOT_AVAILABLE",
        }
    }
}

/// Unknown keys come back unchanged.
fn lookup<'a>(table: &[(&str, &'static str)], key: &'a str) -> &'a str {
    table
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
        .unwrap_or(key)
}

pub fn map_fuel_type(fuel_type: &str) -> &str {
    lookup(FUEL_TYPES, fuel_type)
}

pub fn map_transmission(gearbox_type: &str) -> &str {
    lookup(TRANSMISSIONS, gearbox_type)
}

pub fn body_style(model_series: &str) -> BodyStyle {
    if SUV_MODELS.contains(&model_series) {
        BodyStyle::Suv
    } else if WAGON_MODELS.contains(&model_series) {
        BodyStyle::Wagon
    } else {
        BodyStyle::Sedan
    }
}

/// `reference_year` is the calendar year of the run, passed in by the caller.
pub fn condition(model_year: i32, reference_year: i32) -> Condition {
    if model_year >= reference_year {
        Condition::New
    } else {
        Condition::Used
    }
}

pub fn availability(status: Option<&str>) -> Availability {
    match status {
        Some("Published") => Availability::Available,
        _ => Availability::NotAvailable,
    }
}

/// Empty strings count as missing, same as an absent field.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Picks the featured image of a record: first file, preferred rendering
/// when available, otherwise the first rendering. `jpeg` beats `url`.
pub fn best_image_url(record: &SourceRecord) -> Option<&str> {
    let formats = record
        .featured_image
        .as_ref()?
        .files
        .as_ref()?
        .first()?
        .formats
        .as_ref()?;

    let chosen = PREFERRED_IMAGE_FORMATS
        .iter()
        .find_map(|tag| {
            formats
                .iter()
                .find(|f| f.format.as_deref() == Some(*tag))
        })
        .or_else(|| formats.first())?;

    non_empty(&chosen.jpeg).or_else(|| non_empty(&chosen.url))
}

/// Builds the Swedish ad text: one sentence per known field, then the
/// closing call to action.
pub fn format_description(record: &SourceRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(short) = non_empty(&record.short_description) {
        parts.push(short.to_string());
    }
    if let Some(level) = non_empty(&record.equipment_level) {
        parts.push(format!("Utrustningsnivå: {level}"));
    }
    if let Some(mileage) = record.mileage {
        parts.push(format!("Miltal: {} mil", format_sv_number(mileage)));
    }
    if let Some(year) = record.model_year {
        parts.push(format!("Årsmodell: {year}"));
    }
    if let Some(gearbox) = non_empty(&record.gearbox_type) {
        parts.push(format!("Växellåda: {gearbox}"));
    }
    if let Some(fuel) = non_empty(&record.fuel_type) {
        parts.push(format!("Bränsle: {fuel}"));
    }
    if let Some(reg) = non_empty(&record.registration_number) {
        parts.push(format!("Registreringsnummer: {reg}"));
    }

    parts.push(CLOSING_SENTENCE.to_string());

    parts.join(". ") + "."
}

/// Formats a number the way sv-SE locales print it: no-break space between
/// thousands, decimal comma, at most three fraction digits.
pub fn format_sv_number(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3 * 2);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(digit);
    }

    if !frac_part.is_empty() {
        grouped.push(',');
        grouped.push_str(frac_part);
    }

    if value < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        // sv-SE uses the typographic minus sign.
        grouped.insert(0, '\u{2212}');
    }

    grouped
}

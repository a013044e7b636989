// src/tests/mapping_tests.rs

use crate::domain::mapping::{
    availability, best_image_url, body_style, condition, format_description, format_sv_number,
    map_fuel_type, map_transmission, Availability, BodyStyle, Condition,
};
use crate::tests::utils::{image_json, record, xc60_json};
use serde_json::json;

#[test]
fn fuel_types_map_to_english_tokens() {
    assert_eq!(map_fuel_type("Laddhybrid"), "Plug-in Hybrid");
    assert_eq!(map_fuel_type("El"), "Electric");
    assert_eq!(map_fuel_type("Elektrisk"), "Electric");
    assert_eq!(map_fuel_type("Bensin"), "Gasoline");
    assert_eq!(map_fuel_type("Diesel"), "Diesel");
    assert_eq!(map_fuel_type("Elhybrid"), "Hybrid");
    assert_eq!(map_fuel_type("Förbränningsmotor"), "Gasoline");
}

#[test]
fn unknown_fuel_type_passes_through() {
    assert_eq!(map_fuel_type("Vätgas"), "Vätgas");
    assert_eq!(map_fuel_type("bensin"), "bensin");
    assert_eq!(map_fuel_type(""), "");
}

#[test]
fn transmissions_map_with_identity_fallback() {
    assert_eq!(map_transmission("Automat"), "Automatic");
    assert_eq!(map_transmission("Manuell"), "Manual");
    assert_eq!(map_transmission("CVT"), "CVT");
}

#[test]
fn body_style_uses_model_lists() {
    assert_eq!(body_style("XC60"), BodyStyle::Suv);
    assert_eq!(body_style("Kona"), BodyStyle::Suv);
    assert_eq!(body_style("V90"), BodyStyle::Wagon);
    assert_eq!(body_style("S60"), BodyStyle::Sedan);
    assert_eq!(body_style(""), BodyStyle::Sedan);
    // Membership is exact.
    assert_eq!(body_style("xc60"), BodyStyle::Sedan);

    assert_eq!(BodyStyle::Suv.as_str(), "SUV");
    assert_eq!(BodyStyle::Wagon.as_str(), "Wagon");
    assert_eq!(BodyStyle::Sedan.as_str(), "Sedan");
}

#[test]
fn condition_boundary_is_the_reference_year() {
    assert_eq!(condition(2024, 2024), Condition::New);
    assert_eq!(condition(2025, 2024), Condition::New);
    assert_eq!(condition(2023, 2024), Condition::Used);
    assert_eq!(condition(0, 2024), Condition::Used);

    assert_eq!(Condition::New.as_str(), "NEW");
    assert_eq!(Condition::Used.as_str(), "USED");
}

#[test]
fn only_published_is_available() {
    assert_eq!(availability(Some("Published")), Availability::Available);
    assert_eq!(availability(Some("published")), Availability::NotAvailable);
    assert_eq!(availability(Some("Sold")), Availability::NotAvailable);
    assert_eq!(availability(None), Availability::NotAvailable);
    assert_eq!(Availability::NotAvailable.as_str(), "NOT_AVAILABLE");
}

#[test]
fn image_prefers_800x_over_770x514() {
    let r = record(json!({
        "featuredImage": image_json(json!([
            { "format": "1920x", "jpeg": "https://img/1920.jpg" },
            { "format": "770x514", "jpeg": "https://img/770.jpg" },
            { "format": "800x", "jpeg": "https://img/800.jpg" }
        ]))
    }));

    assert_eq!(best_image_url(&r), Some("https://img/800.jpg"));
}

#[test]
fn image_falls_back_to_770x514_then_first_format() {
    let with_770 = record(json!({
        "featuredImage": image_json(json!([
            { "format": "1920x", "jpeg": "https://img/1920.jpg" },
            { "format": "770x514", "jpeg": "https://img/770.jpg" }
        ]))
    }));
    assert_eq!(best_image_url(&with_770), Some("https://img/770.jpg"));

    let neither = record(json!({
        "featuredImage": image_json(json!([
            { "format": "1920x", "jpeg": "https://img/1920.jpg" },
            { "format": "300x", "jpeg": "https://img/300.jpg" }
        ]))
    }));
    assert_eq!(best_image_url(&neither), Some("https://img/1920.jpg"));
}

#[test]
fn image_uses_url_when_jpeg_is_missing() {
    let r = record(json!({
        "featuredImage": image_json(json!([
            { "format": "800x", "url": "https://img/800.webp" }
        ]))
    }));

    assert_eq!(best_image_url(&r), Some("https://img/800.webp"));
}

#[test]
fn no_image_data_yields_none() {
    assert_eq!(best_image_url(&record(json!({}))), None);
    assert_eq!(
        best_image_url(&record(json!({ "featuredImage": { "files": [] } }))),
        None
    );
    assert_eq!(
        best_image_url(&record(json!({ "featuredImage": image_json(json!([])) }))),
        None
    );
    assert_eq!(
        best_image_url(&record(json!({ "featuredImage": image_json(json!([{ "format": "800x" }])) }))),
        None
    );
}

#[test]
fn description_lists_present_fields_in_order() {
    let mut value = xc60_json();
    value["shortDescription"] = json!("T6 AWD Recharge");
    value["equipmentLevel"] = json!("Inscription");
    value["mileage"] = json!(12345);
    value["registrationNumber"] = json!("ABC123");

    assert_eq!(
        format_description(&record(value)),
        "T6 AWD Recharge. Utrustningsnivå: Inscription. Miltal: 12\u{a0}345 mil. \
         Årsmodell: 2023. Växellåda: Automat. Bränsle: Bensin. \
         Registreringsnummer: ABC123. Kontakta oss för mer information om detta fordon."
    );
}

#[test]
fn description_of_bare_record_is_the_closing_sentence() {
    assert_eq!(
        format_description(&record(json!({}))),
        "Kontakta oss för mer information om detta fordon."
    );
}

#[test]
fn swedish_number_format() {
    assert_eq!(format_sv_number(0.0), "0");
    assert_eq!(format_sv_number(999.0), "999");
    assert_eq!(format_sv_number(1000.0), "1\u{a0}000");
    assert_eq!(format_sv_number(1234567.0), "1\u{a0}234\u{a0}567");
    assert_eq!(format_sv_number(1.5), "1,5");
    assert_eq!(format_sv_number(2.0004), "2");
    assert_eq!(format_sv_number(-1500.0), "\u{2212}1\u{a0}500");
}

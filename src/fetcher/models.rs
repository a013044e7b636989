use serde::{Deserialize, Deserializer};
use serde_json::Value;

// documentList
//  └── documents[]
//       ├── id, manufacturer, modelSeries, shortDescription, equipmentLevel
//       ├── mileage (mil), modelYear, fuelType, gearboxType
//       ├── price, registrationNumber, status
//       ├── position
//       │    └── city
//       ├── branches[]
//       │    ├── id
//       │    └── name
//       └── featuredImage
//            └── files[]
//                 └── formats[]
//                      ├── format
//                      ├── url
//                      └── jpeg

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecord {
    #[serde(default, deserialize_with = "loose_string")]
    pub id: Option<String>,
    pub manufacturer: Option<String>,
    pub model_series: Option<String>,
    pub short_description: Option<String>,
    pub equipment_level: Option<String>,

    /// Swedish mil (10 km).
    #[serde(default, deserialize_with = "loose_number")]
    pub mileage: Option<f64>,
    #[serde(default, deserialize_with = "loose_year")]
    pub model_year: Option<i32>,
    pub fuel_type: Option<String>,
    pub gearbox_type: Option<String>,

    #[serde(default, deserialize_with = "loose_number")]
    pub price: Option<f64>,
    pub registration_number: Option<String>,
    pub status: Option<String>,

    pub position: Option<Position>,
    pub branches: Option<Vec<Branch>>,
    pub featured_image: Option<FeaturedImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Position {
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Branch {
    #[serde(default, deserialize_with = "loose_string")]
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturedImage {
    pub files: Option<Vec<ImageFile>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageFile {
    pub formats: Option<Vec<ImageFormat>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageFormat {
    pub format: Option<String>,
    pub url: Option<String>,
    pub jpeg: Option<String>,
}

// The catalog is not consistent about quoting ids and numbers, so these
// accept either form. Anything else reads as absent.

fn loose_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn loose_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn loose_year<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    Ok(loose_number(d)?
        .filter(|y| y.fract() == 0.0 && y.abs() <= f64::from(i32::MAX))
        .map(|y| y as i32))
}

use derive_more::Display;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Lowest and highest accepted latitude in decimal degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Lowest and highest accepted longitude in decimal degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Dataset keys holding the facility name, in order of precedence.
const NAME_KEYS: [&str; 2] = ["停車場名稱", "name"];
/// Dataset keys holding the facility address, in order of precedence.
const ADDRESS_KEYS: [&str; 2] = ["停車場地址-地號", "address"];

/// A latitude/longitude pair in decimal degrees, always inside the valid
/// geographic range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, returning `None` when a value is not finite or
    /// falls outside the geographic range.
    pub fn try_new(latitude: f64, longitude: f64) -> Option<Self> {
        let in_range = |value: f64, (min, max): (f64, f64)| {
            value.is_finite() && (min..=max).contains(&value)
        };

        (in_range(latitude, LATITUDE_RANGE) && in_range(longitude, LONGITUDE_RANGE))
            .then_some(Self {
                latitude,
                longitude,
            })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Coordinate value exactly as it appears in the dataset.
///
/// The original text is kept so navigation links reuse it verbatim instead of
/// re-serializing a parsed float.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum RawCoordinate {
    #[display("{_0}")]
    Number(serde_json::Number),
    #[display("{_0}")]
    Text(String),
    /// Booleans, arrays or objects; never a usable coordinate.
    #[display("{_0}")]
    Other(Value),
}

impl RawCoordinate {
    /// Wraps a dataset value, `null` meaning absent.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(number) => Some(RawCoordinate::Number(number)),
            Value::String(text) => Some(RawCoordinate::Text(text)),
            other => Some(RawCoordinate::Other(other)),
        }
    }

    /// Parses the stored value as a finite decimal number.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            RawCoordinate::Number(number) => number.as_f64()?,
            RawCoordinate::Text(text) => text.trim().parse::<f64>().ok()?,
            RawCoordinate::Other(_) => return None,
        };

        value.is_finite().then_some(value)
    }
}

/// A parking lot entry from the dataset.
///
/// Any JSON object is accepted. The dataset uses the Chinese column names of
/// the municipal open data export, which win over plain `name`/`address`
/// keys. Values of an unexpected type are treated as absent, so a malformed
/// record is filtered out by the lookup instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct FacilityRecord {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<RawCoordinate>,
    pub longitude: Option<RawCoordinate>,
    /// Fields not used by the lookup, kept untouched.
    pub extra: Map<String, Value>,
}

/// Removes the first key holding a string or number and returns its text.
fn take_text(fields: &mut Map<String, Value>, keys: &[&str]) -> Option<String> {
    let key = keys
        .iter()
        .find(|key| matches!(fields.get(**key), Some(Value::String(_) | Value::Number(_))))?;

    match fields.remove(*key)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

impl From<Map<String, Value>> for FacilityRecord {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            name: take_text(&mut fields, &NAME_KEYS),
            address: take_text(&mut fields, &ADDRESS_KEYS),
            latitude: fields.remove("latitude").and_then(RawCoordinate::from_value),
            longitude: fields.remove("longitude").and_then(RawCoordinate::from_value),
            extra: fields,
        }
    }
}

impl FacilityRecord {
    /// Parsed coordinate of the record, if both values are present and valid.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let latitude = self.latitude.as_ref()?.as_f64()?;
        let longitude = self.longitude.as_ref()?.as_f64()?;

        Coordinate::try_new(latitude, longitude)
    }
}

/// Shared, read-only snapshot of the loaded dataset.
pub type Catalog = std::sync::Arc<Vec<FacilityRecord>>;

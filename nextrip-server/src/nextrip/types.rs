//! NexTrip API response DTOs.
//!
//! These types map directly to the NexTrip v2 JSON responses. Only the
//! fields we display are decoded; everything else is ignored.

use serde::{Deserialize, Deserializer};

/// An entry from `GET /routes`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    #[serde(deserialize_with = "string_or_number")]
    pub route_id: String,

    #[serde(default)]
    pub route_label: String,
}

/// An entry from `GET /directions/{route}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionDto {
    /// NexTrip sends this as an integer (0 or 1).
    #[serde(deserialize_with = "string_or_number")]
    pub direction_id: String,

    #[serde(default)]
    pub direction_name: String,
}

/// An entry from `GET /stops/{route}/{direction}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDto {
    #[serde(deserialize_with = "string_or_number")]
    pub place_code: String,

    #[serde(default)]
    pub description: String,
}

/// Response from `GET /{route}/{direction}/{stop}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesDto {
    /// Omitted by the API when nothing is scheduled.
    #[serde(default)]
    pub departures: Vec<DepartureDto>,
}

/// A single departure row.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureDto {
    #[serde(default)]
    pub route_short_name: String,

    #[serde(default)]
    pub description: String,

    /// Either a countdown like "5 Min" or a clock time like "10:35".
    #[serde(default)]
    pub departure_text: String,

    /// Unix timestamp in seconds.
    pub departure_time: i64,
}

/// Accept an identifier sent either as a JSON string or a JSON integer.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}

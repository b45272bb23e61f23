//! Transit entities: routes, directions, stops and departures.
//!
//! All of these are transient. A list is fetched for one selection context
//! and replaced wholesale when that context changes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{DirectionId, RouteId, StopCode};

/// A named transit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub id: RouteId,
    pub label: String,
}

/// One of the travel directions offered for a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Direction {
    pub id: DirectionId,
    pub name: String,
}

/// A boarding location for a (route, direction) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub code: StopCode,
    pub description: String,
}

/// One upcoming vehicle departure at a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Departure {
    /// Short route name shown to riders, e.g. `"Blue"` or `"21"`.
    pub route_short_name: String,
    /// Where the vehicle is headed.
    pub description: String,
    /// Display text: either a countdown (`"2 Min"`) or a clock time.
    pub departure_text: String,
    /// Unix timestamp in seconds. Used as the sort and row key.
    pub departure_time: i64,
}

impl Departure {
    /// The departure time as a UTC instant, if the timestamp is in range.
    pub fn departs_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.departure_time, 0)
    }
}

/// Departures for one (route, direction, stop), in server order.
///
/// An empty board is a legitimate answer ("no departures at this time"),
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DepartureBoard {
    pub departures: Vec<Departure>,
}

impl DepartureBoard {
    /// Create a board from departures in server order.
    pub fn new(departures: Vec<Departure>) -> Self {
        Self { departures }
    }

    /// Whether there is nothing departing.
    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }

    /// Number of departures on the board.
    pub fn len(&self) -> usize {
        self.departures.len()
    }
}

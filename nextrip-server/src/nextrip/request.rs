//! NexTrip resource requests.

use std::fmt;

use crate::domain::{DirectionId, RouteId, StopCode};

/// One NexTrip GET request: a resource kind plus its path parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Request {
    /// `GET /routes`
    Routes,
    /// `GET /directions/{route}`
    Directions(RouteId),
    /// `GET /stops/{route}/{direction}`
    Stops(RouteId, DirectionId),
    /// `GET /{route}/{direction}/{stop}`
    Departures(RouteId, DirectionId, StopCode),
}

/// NexTrip resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Routes,
    Directions,
    Stops,
    Departures,
}

impl Request {
    /// The resource kind this request targets.
    pub fn resource(&self) -> Resource {
        match self {
            Request::Routes => Resource::Routes,
            Request::Directions(..) => Resource::Directions,
            Request::Stops(..) => Resource::Stops,
            Request::Departures(..) => Resource::Departures,
        }
    }

    /// Path segments to append to the base URL, unencoded.
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            Request::Routes => vec!["routes"],
            Request::Directions(route) => vec!["directions", route.as_str()],
            Request::Stops(route, direction) => {
                vec!["stops", route.as_str(), direction.as_str()]
            }
            Request::Departures(route, direction, stop) => {
                vec![route.as_str(), direction.as_str(), stop.as_str()]
            }
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path_segments().join("/"))
    }
}

//! Metro Transit NexTrip client.
//!
//! This module provides the HTTP client for the NexTrip v2 API, which
//! reports real-time departures for Twin Cities buses and trains.
//!
//! The API is navigated top-down:
//! - `/routes` lists every route
//! - `/directions/{route}` lists the directions a route runs in
//! - `/stops/{route}/{direction}` lists stops in that direction
//! - `/{route}/{direction}/{stop}` reports upcoming departures

mod api;
mod client;
mod convert;
mod error;
mod mock;
mod request;
mod types;

pub use api::TransitApi;
pub use client::{DEFAULT_BASE_URL, TransitClient, TransitConfig};
pub use convert::ConversionError;
pub use error::NetworkError;
pub use mock::MockTransit;
pub use request::{Request, Resource};
pub use types::{DepartureDto, DeparturesDto, DirectionDto, PlaceDto, RouteDto};

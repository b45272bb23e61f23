//! The data source the selection controller fetches from.

use std::future::Future;

use crate::domain::{DepartureBoard, Direction, DirectionId, Route, RouteId, Stop, StopCode};

use super::error::NetworkError;

/// One method per NexTrip resource kind.
///
/// Each call is an independent round trip: no caching, no retries.
/// Implemented by [`TransitClient`](super::TransitClient) over HTTP and by
/// [`MockTransit`](super::MockTransit) over in-memory fixtures.
pub trait TransitApi: Send + Sync {
    /// All routes, in server order.
    fn fetch_routes(&self) -> impl Future<Output = Result<Vec<Route>, NetworkError>> + Send;

    /// Directions offered for a route, in server order.
    fn fetch_directions(
        &self,
        route: &RouteId,
    ) -> impl Future<Output = Result<Vec<Direction>, NetworkError>> + Send;

    /// Stops for a (route, direction), in server order.
    fn fetch_stops(
        &self,
        route: &RouteId,
        direction: &DirectionId,
    ) -> impl Future<Output = Result<Vec<Stop>, NetworkError>> + Send;

    /// Upcoming departures for a (route, direction, stop). May be empty.
    fn fetch_departures(
        &self,
        route: &RouteId,
        direction: &DirectionId,
        stop: &StopCode,
    ) -> impl Future<Output = Result<DepartureBoard, NetworkError>> + Send;
}

//! In-memory NexTrip stand-in.
//!
//! Serves fixture data through the same [`TransitApi`] interface as the
//! real client, and records every request so tests can count fetches.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::domain::{DepartureBoard, Direction, DirectionId, Route, RouteId, Stop, StopCode};

use super::api::TransitApi;
use super::error::NetworkError;
use super::request::{Request, Resource};

/// Mock NexTrip client backed by fixture data.
///
/// Missing fixtures answer like the API does for unknown ids: a 400.
/// Clones share the request log.
#[derive(Clone, Default)]
pub struct MockTransit {
    routes: Vec<Route>,
    directions: HashMap<RouteId, Vec<Direction>>,
    stops: HashMap<(RouteId, DirectionId), Vec<Stop>>,
    departures: HashMap<(RouteId, DirectionId, StopCode), DepartureBoard>,
    failing: HashSet<Resource>,
    log: Arc<Mutex<Vec<Request>>>,
}

impl MockTransit {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the route list.
    pub fn with_routes(mut self, routes: Vec<Route>) -> Self {
        self.routes = routes;
        self
    }

    /// Set the directions for a route.
    pub fn with_directions(mut self, route: RouteId, directions: Vec<Direction>) -> Self {
        self.directions.insert(route, directions);
        self
    }

    /// Set the stops for a (route, direction).
    pub fn with_stops(mut self, route: RouteId, direction: DirectionId, stops: Vec<Stop>) -> Self {
        self.stops.insert((route, direction), stops);
        self
    }

    /// Set the departure board for a (route, direction, stop).
    pub fn with_departures(
        mut self,
        route: RouteId,
        direction: DirectionId,
        stop: StopCode,
        board: DepartureBoard,
    ) -> Self {
        self.departures.insert((route, direction, stop), board);
        self
    }

    /// Make every request for a resource kind fail with a 503.
    pub fn failing(mut self, resource: Resource) -> Self {
        self.failing.insert(resource);
        self
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Number of requests received for one resource kind.
    pub fn request_count(&self, resource: Resource) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.resource() == resource)
            .count()
    }

    fn record(&self, request: Request) -> Result<(), NetworkError> {
        let failing = self.failing.contains(&request.resource());
        if let Ok(mut log) = self.log.lock() {
            log.push(request.clone());
        }
        if failing {
            return Err(NetworkError::Api {
                status: 503,
                message: format!("mock failure for {request}"),
            });
        }
        Ok(())
    }

    fn missing(request: Request) -> NetworkError {
        NetworkError::Api {
            status: 400,
            message: format!("no mock data for {request}"),
        }
    }
}

impl TransitApi for MockTransit {
    async fn fetch_routes(&self) -> Result<Vec<Route>, NetworkError> {
        self.record(Request::Routes)?;
        Ok(self.routes.clone())
    }

    async fn fetch_directions(&self, route: &RouteId) -> Result<Vec<Direction>, NetworkError> {
        let request = Request::Directions(route.clone());
        self.record(request.clone())?;
        self.directions
            .get(route)
            .cloned()
            .ok_or_else(|| Self::missing(request))
    }

    async fn fetch_stops(
        &self,
        route: &RouteId,
        direction: &DirectionId,
    ) -> Result<Vec<Stop>, NetworkError> {
        let request = Request::Stops(route.clone(), direction.clone());
        self.record(request.clone())?;
        self.stops
            .get(&(route.clone(), direction.clone()))
            .cloned()
            .ok_or_else(|| Self::missing(request))
    }

    async fn fetch_departures(
        &self,
        route: &RouteId,
        direction: &DirectionId,
        stop: &StopCode,
    ) -> Result<DepartureBoard, NetworkError> {
        let request = Request::Departures(route.clone(), direction.clone(), stop.clone());
        self.record(request.clone())?;
        self.departures
            .get(&(route.clone(), direction.clone(), stop.clone()))
            .cloned()
            .ok_or_else(|| Self::missing(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{direction, route};

    #[tokio::test]
    async fn serves_fixtures_and_logs_requests() {
        let mock = MockTransit::new().with_directions(
            route("901"),
            vec![Direction {
                id: direction("0"),
                name: "Northbound".into(),
            }],
        );

        let dirs = mock.fetch_directions(&route("901")).await.unwrap();
        assert_eq!(dirs.len(), 1);
        assert_eq!(mock.requests(), vec![Request::Directions(route("901"))]);
    }

    #[tokio::test]
    async fn missing_fixture_is_error() {
        let mock = MockTransit::new();
        let err = mock.fetch_directions(&route("5")).await.unwrap_err();
        assert!(matches!(err, NetworkError::Api { status: 400, .. }));
        // Still counted as a request
        assert_eq!(mock.request_count(Resource::Directions), 1);
    }

    #[tokio::test]
    async fn forced_failure() {
        let mock = MockTransit::new().failing(Resource::Routes);
        let err = mock.fetch_routes().await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn clones_share_log() {
        let mock = MockTransit::new();
        let clone = mock.clone();
        clone.fetch_routes().await.unwrap();
        assert_eq!(mock.request_count(Resource::Routes), 1);
    }
}

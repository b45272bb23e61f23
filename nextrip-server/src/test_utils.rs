//! Shared test helpers.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::domain::{DirectionId, RouteId, StopCode};

pub fn route(s: &str) -> RouteId {
    RouteId::new(s).unwrap()
}

pub fn direction(s: &str) -> DirectionId {
    DirectionId::new(s).unwrap()
}

pub fn stop(s: &str) -> StopCode {
    StopCode::new(s).unwrap()
}

/// Path prefix the fixture server mounts the fake API under, so clients
/// are exercised with a base URL that has its own path.
const API_PREFIX: &str = "/nextripv2";

#[derive(Default)]
struct Fixtures {
    responses: HashMap<String, (u16, String)>,
    delays: HashMap<String, Duration>,
    hits: Vec<String>,
}

/// A local HTTP server standing in for NexTrip.
///
/// Responses are keyed by the decoded path below the base URL, e.g.
/// `/directions/901`. Unknown paths answer 404.
#[derive(Clone)]
pub struct FixtureServer {
    addr: SocketAddr,
    fixtures: Arc<Mutex<Fixtures>>,
}

impl FixtureServer {
    pub async fn start() -> Self {
        let fixtures = Arc::new(Mutex::new(Fixtures::default()));
        let app = Router::new()
            .route(&format!("{API_PREFIX}/*rest"), get(respond))
            .with_state(fixtures.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, fixtures }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}{API_PREFIX}", self.addr)
    }

    pub fn with_json(self, path: &str, body: &str) -> Self {
        self.with_status(path, 200, body)
    }

    pub fn with_status(self, path: &str, status: u16, body: &str) -> Self {
        self.fixtures
            .lock()
            .unwrap()
            .responses
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Hold responses for `path` back by `delay`.
    pub fn with_delay(self, path: &str, delay: Duration) -> Self {
        self.fixtures
            .lock()
            .unwrap()
            .delays
            .insert(path.to_string(), delay);
        self
    }

    /// Paths requested so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.fixtures.lock().unwrap().hits.clone()
    }
}

async fn respond(
    State(fixtures): State<Arc<Mutex<Fixtures>>>,
    Path(rest): Path<String>,
) -> Response {
    let path = format!("/{}", rest.trim_start_matches('/'));
    let delay = {
        let mut fixtures = fixtures.lock().unwrap();
        fixtures.hits.push(path.clone());
        fixtures.delays.get(&path).copied()
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let fixtures = fixtures.lock().unwrap();
    match fixtures.responses.get(&path) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "no fixture").into_response(),
    }
}

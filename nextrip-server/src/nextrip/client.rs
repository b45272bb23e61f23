//! NexTrip HTTP client.
//!
//! One GET per call, decoded into domain types. Every failure comes back
//! as a [`NetworkError`]; there are no retries, timeouts or caching.

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{DepartureBoard, Direction, DirectionId, Route, RouteId, Stop, StopCode};

use super::api::TransitApi;
use super::convert::{convert_departures, convert_directions, convert_routes, convert_stops};
use super::error::NetworkError;
use super::request::Request;
use super::types::{DeparturesDto, DirectionDto, PlaceDto, RouteDto};

/// Default base URL for the Metro Transit NexTrip v2 API.
pub const DEFAULT_BASE_URL: &str = "https://svc.metrotransit.org/nextripv2";

/// Configuration for the NexTrip client.
#[derive(Debug, Clone)]
pub struct TransitConfig {
    /// Base URL for the API (defaults to production NexTrip)
    pub base_url: String,
}

impl TransitConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing or a proxy).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// NexTrip API client.
///
/// Stateless apart from the connection pool; cheap to clone.
#[derive(Debug, Clone)]
pub struct TransitClient {
    http: reqwest::Client,
    base_url: Url,
}

impl TransitClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TransitConfig) -> Result<Self, NetworkError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| NetworkError::InvalidUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(NetworkError::InvalidUrl {
                url: config.base_url,
                message: "cannot be a base URL".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The base URL requests are built from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full URL for a request.
    ///
    /// Path parameters are appended as percent-encoded segments, so an id
    /// containing `/` or spaces cannot change the shape of the path.
    pub fn url_for(&self, request: &Request) -> Result<Url, NetworkError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| NetworkError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "cannot be a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(request.path_segments());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: &Request) -> Result<T, NetworkError> {
        let url = self.url_for(request)?;
        debug!(%request, %url, "NexTrip request");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| NetworkError::json(e, &body))
    }
}

impl TransitApi for TransitClient {
    async fn fetch_routes(&self) -> Result<Vec<Route>, NetworkError> {
        let dtos: Vec<RouteDto> = self.get_json(&Request::Routes).await?;
        convert_routes(dtos).map_err(|e| NetworkError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    async fn fetch_directions(&self, route: &RouteId) -> Result<Vec<Direction>, NetworkError> {
        let dtos: Vec<DirectionDto> = self
            .get_json(&Request::Directions(route.clone()))
            .await?;
        convert_directions(dtos).map_err(|e| NetworkError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    async fn fetch_stops(
        &self,
        route: &RouteId,
        direction: &DirectionId,
    ) -> Result<Vec<Stop>, NetworkError> {
        let dtos: Vec<PlaceDto> = self
            .get_json(&Request::Stops(route.clone(), direction.clone()))
            .await?;
        convert_stops(dtos).map_err(|e| NetworkError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    async fn fetch_departures(
        &self,
        route: &RouteId,
        direction: &DirectionId,
        stop: &StopCode,
    ) -> Result<DepartureBoard, NetworkError> {
        let dto: DeparturesDto = self
            .get_json(&Request::Departures(
                route.clone(),
                direction.clone(),
                stop.clone(),
            ))
            .await?;
        Ok(convert_departures(dto))
    }
}

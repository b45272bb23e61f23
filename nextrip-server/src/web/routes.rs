//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::domain::{DirectionId, RouteId, StopCode};
use crate::selection::{SelectionEvent, SelectionView};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/state", get(api_state))
        .route("/select/route", post(select_route))
        .route("/select/direction", post(select_direction))
        .route("/select/stop", post(select_stop))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The departure browser page.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate::new(state.selection.view().await);
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// Current selection as JSON.
async fn api_state(State(state): State<AppState>) -> Json<SelectionView> {
    Json(state.selection.view().await)
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Pull the chosen id out of a form post.
fn chosen_id(form: Result<Form<SelectForm>, FormRejection>) -> Result<String, AppError> {
    let Form(form) = form.map_err(|e| AppError::BadRequest {
        message: format!("Invalid form: {e}"),
    })?;
    Ok(form.id)
}

/// Apply a selection and answer with the updated selection.
///
/// The selection runs detached from this request, so a client that gives
/// up mid-fetch doesn't leave the state half-applied. Browsers are sent
/// back to the page; API clients get the JSON view.
async fn apply(
    state: &AppState,
    headers: &HeaderMap,
    event: SelectionEvent,
) -> Result<Response, AppError> {
    debug!(?event, "selection posted");
    state
        .selection
        .handle_detached(event)
        .await
        .map_err(|e| AppError::Internal {
            message: format!("Selection task failed: {e}"),
        })?;

    if accepts_html(headers) {
        Ok(Redirect::to("/").into_response())
    } else {
        Ok(Json(state.selection.view().await).into_response())
    }
}

async fn select_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<SelectForm>, FormRejection>,
) -> Result<Response, AppError> {
    let route = RouteId::parse_optional(&chosen_id(form)?);
    apply(&state, &headers, SelectionEvent::RouteChosen(route)).await
}

async fn select_direction(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<SelectForm>, FormRejection>,
) -> Result<Response, AppError> {
    let direction = DirectionId::parse_optional(&chosen_id(form)?);
    apply(&state, &headers, SelectionEvent::DirectionChosen(direction)).await
}

async fn select_stop(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<SelectForm>, FormRejection>,
) -> Result<Response, AppError> {
    let stop = StopCode::parse_optional(&chosen_id(form)?);
    apply(&state, &headers, SelectionEvent::StopChosen(stop)).await
}

/// Application error type.
///
/// Fetch failures never show up here; they live in the selection state.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

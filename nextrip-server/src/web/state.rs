//! Application state for the web layer.

use std::sync::Arc;

use crate::nextrip::TransitClient;
use crate::selection::SelectionController;

/// Shared application state.
///
/// The process serves a single browsing session, so there is one
/// controller for every request.
#[derive(Clone)]
pub struct AppState {
    /// Selection controller backed by the NexTrip client
    pub selection: Arc<SelectionController<TransitClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(selection: Arc<SelectionController<TransitClient>>) -> Self {
        Self { selection }
    }
}

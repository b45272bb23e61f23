//! Web layer for the departure browser.
//!
//! Renders the current selection as a server-side page and turns form
//! posts into [`SelectionEvent`](crate::selection::SelectionEvent)s.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;

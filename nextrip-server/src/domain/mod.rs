//! Domain types for the NexTrip departure browser.
//!
//! Identifiers are validated at construction time; entities are plain
//! data that the selection controller stores and replaces wholesale.

mod ids;
mod transit;

pub use ids::{DirectionId, InvalidId, RouteId, StopCode};
pub use transit::{Departure, DepartureBoard, Direction, Route, Stop};

//! Selection state and fetch bookkeeping.

use serde::Serialize;

use crate::domain::{DepartureBoard, Direction, DirectionId, Route, RouteId, Stop, StopCode};

/// Everything the presentation layer can see.
///
/// Only [`SelectionController`](super::SelectionController) writes this;
/// everyone else gets a clone via `snapshot()`.
///
/// Invariants, maintained by the controller:
/// - `selected_direction` is set only if `selected_route` is.
/// - `selected_stop` is set only if both of the above are.
/// - `directions` belong to `selected_route` and `stops` to the selected
///   (route, direction).
/// - `departures` belong to the selected triple, except while a new stop's
///   board is loading: the previous board stays until it is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub selected_route: Option<RouteId>,
    pub selected_direction: Option<DirectionId>,
    pub selected_stop: Option<StopCode>,

    pub routes: Vec<Route>,
    pub directions: Vec<Direction>,
    pub stops: Vec<Stop>,
    /// `None` until a stop has been chosen and its departures loaded.
    pub departures: Option<DepartureBoard>,

    /// True while any fetch for the current selection is outstanding.
    pub loading: bool,
    /// Message from the most recent failed fetch, cleared by the next success.
    pub error: Option<String>,
}

impl SelectionState {
    /// Initial state: nothing selected, nothing loaded, route list pending.
    pub fn new() -> Self {
        Self {
            selected_route: None,
            selected_direction: None,
            selected_stop: None,
            routes: Vec::new(),
            directions: Vec::new(),
            stops: Vec::new(),
            departures: None,
            loading: true,
            error: None,
        }
    }

    /// Drop the direction selection and everything below it.
    pub(crate) fn clear_from_direction(&mut self) {
        self.selected_direction = None;
        self.directions.clear();
        self.clear_from_stop();
    }

    /// Drop the stop selection and everything below it.
    pub(crate) fn clear_from_stop(&mut self) {
        self.selected_stop = None;
        self.stops.clear();
        self.departures = None;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// A level of the cascade that has its own fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Routes,
    Directions,
    Stops,
    Departures,
}

impl Level {
    /// Human-readable name used in error messages.
    pub fn noun(self) -> &'static str {
        match self {
            Level::Routes => "routes",
            Level::Directions => "directions",
            Level::Stops => "stops",
            Level::Departures => "departures",
        }
    }
}

/// Generation counters, one per cascading fetch.
///
/// Choosing a value bumps the counter for its own fetch and for every
/// fetch below it. A result is only applied if the counter it was issued
/// under is still current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Generations {
    directions: u64,
    stops: u64,
    departures: u64,
}

impl Generations {
    pub(crate) fn route_chosen(&mut self) {
        self.directions += 1;
        self.direction_chosen();
    }

    pub(crate) fn direction_chosen(&mut self) {
        self.stops += 1;
        self.stop_chosen();
    }

    pub(crate) fn stop_chosen(&mut self) {
        self.departures += 1;
    }

    fn current(&self, level: Level) -> u64 {
        match level {
            // The route list is fetched once and never invalidated.
            Level::Routes => 0,
            Level::Directions => self.directions,
            Level::Stops => self.stops,
            Level::Departures => self.departures,
        }
    }

    /// Tag a fetch about to be issued for `level`.
    pub(crate) fn ticket(&self, level: Level) -> Ticket {
        Ticket {
            level,
            generation: self.current(level),
        }
    }
}

/// Identifies the selection context a fetch was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticket {
    pub(crate) level: Level,
    generation: u64,
}

impl Ticket {
    /// Whether no selection has invalidated this fetch since it was issued.
    pub(crate) fn is_current(&self, generations: &Generations) -> bool {
        generations.current(self.level) == self.generation
    }
}

/// Which levels have a current fetch outstanding.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct InFlight {
    routes: bool,
    directions: bool,
    stops: bool,
    departures: bool,
}

impl InFlight {
    pub(crate) fn set(&mut self, level: Level, pending: bool) {
        match level {
            Level::Routes => self.routes = pending,
            Level::Directions => self.directions = pending,
            Level::Stops => self.stops = pending,
            Level::Departures => self.departures = pending,
        }
    }

    /// Forget fetches that a new route choice makes stale.
    pub(crate) fn route_chosen(&mut self) {
        self.directions = false;
        self.direction_chosen();
    }

    pub(crate) fn direction_chosen(&mut self) {
        self.stops = false;
        self.stop_chosen();
    }

    pub(crate) fn stop_chosen(&mut self) {
        self.departures = false;
    }

    pub(crate) fn any(&self) -> bool {
        self.routes || self.directions || self.stops || self.departures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_loading() {
        let state = SelectionState::new();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.routes.is_empty());
        assert!(state.departures.is_none());
    }

    #[test]
    fn route_choice_invalidates_everything_below() {
        let mut generations = Generations::default();
        let dirs = generations.ticket(Level::Directions);
        let stops = generations.ticket(Level::Stops);
        let deps = generations.ticket(Level::Departures);
        let routes = generations.ticket(Level::Routes);

        generations.route_chosen();

        assert!(!dirs.is_current(&generations));
        assert!(!stops.is_current(&generations));
        assert!(!deps.is_current(&generations));
        assert!(routes.is_current(&generations));
    }

    #[test]
    fn direction_choice_keeps_direction_fetch() {
        let mut generations = Generations::default();
        let dirs = generations.ticket(Level::Directions);
        let stops = generations.ticket(Level::Stops);

        generations.direction_chosen();

        assert!(dirs.is_current(&generations));
        assert!(!stops.is_current(&generations));
    }

    #[test]
    fn stop_choice_only_touches_departures() {
        let mut generations = Generations::default();
        let stops = generations.ticket(Level::Stops);
        let deps = generations.ticket(Level::Departures);

        generations.stop_chosen();

        assert!(stops.is_current(&generations));
        assert!(!deps.is_current(&generations));
    }

    #[test]
    fn in_flight_cascade() {
        let mut in_flight = InFlight::default();
        in_flight.set(Level::Stops, true);
        assert!(in_flight.any());

        in_flight.direction_chosen();
        assert!(!in_flight.any());

        in_flight.set(Level::Routes, true);
        in_flight.route_chosen();
        // The route list is never invalidated
        assert!(in_flight.any());
    }
}

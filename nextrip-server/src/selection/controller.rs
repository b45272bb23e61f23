//! The cascading selection controller.
//!
//! Choosing a route, direction or stop runs the same three steps:
//! 1. Under the write lock, record the choice, clear every level below it
//!    and take a [`Ticket`] for the fetch it triggers.
//! 2. Release the lock and await the fetch.
//! 3. Re-take the lock and apply the result only if the ticket is still
//!    current. If the user has chosen again in the meantime, the result
//!    belongs to an abandoned selection and is dropped.
//!
//! Step 1 completes before the fetch starts, so a reader never sees the
//! new choice alongside data from the old one.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinError;
use tracing::{debug, warn};

use crate::domain::{DirectionId, RouteId, StopCode};
use crate::nextrip::{NetworkError, TransitApi};

use super::state::{Generations, InFlight, Level, SelectionState, Ticket};
use super::view::SelectionView;

/// A selection made in the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A route was picked from the route list (`None` clears it).
    RouteChosen(Option<RouteId>),
    /// A direction was picked from the direction list.
    DirectionChosen(Option<DirectionId>),
    /// A stop was picked from the stop list.
    StopChosen(Option<StopCode>),
}

struct Cascade {
    state: SelectionState,
    generations: Generations,
    in_flight: InFlight,
    initialized: bool,
}

impl Cascade {
    fn begin(&mut self, level: Level) -> Ticket {
        self.in_flight.set(level, true);
        self.sync_loading();
        self.generations.ticket(level)
    }

    /// Store a fetch result if it still belongs to the current selection.
    ///
    /// A failure stores the empty value for that level and records the
    /// message; other levels are left alone.
    fn finish<T: Default>(
        &mut self,
        ticket: Ticket,
        result: Result<T, NetworkError>,
        store: impl FnOnce(&mut SelectionState, T),
    ) {
        let level = ticket.level.noun();
        if !ticket.is_current(&self.generations) {
            debug!(level, "discarding result for abandoned selection");
            return;
        }

        self.in_flight.set(ticket.level, false);
        match result {
            Ok(value) => {
                store(&mut self.state, value);
                self.state.error = None;
            }
            Err(e) => {
                warn!(level, error = %e, "fetch failed");
                store(&mut self.state, T::default());
                self.state.error = Some(format!("Unable to load {level}: {e}"));
            }
        }
        self.sync_loading();
    }

    fn sync_loading(&mut self) {
        self.state.loading = self.in_flight.any();
    }
}

/// Owns the [`SelectionState`] and drives fetches through a [`TransitApi`].
///
/// Operations take `&self`, so one controller can be shared (e.g. behind
/// an `Arc`) between the code that handles user choices and the code that
/// renders. The lock is never held across a network call.
pub struct SelectionController<A> {
    api: A,
    cascade: RwLock<Cascade>,
}

impl<A: TransitApi> SelectionController<A> {
    /// Create a controller with empty state and `loading = true`.
    ///
    /// Nothing is fetched until [`initialize`](Self::initialize) runs.
    pub fn new(api: A) -> Self {
        Self {
            api,
            cascade: RwLock::new(Cascade {
                state: SelectionState::new(),
                generations: Generations::default(),
                in_flight: InFlight::default(),
                initialized: false,
            }),
        }
    }

    /// The data source this controller fetches from.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> SelectionState {
        self.cascade.read().await.state.clone()
    }

    /// The current state, shaped for rendering.
    pub async fn view(&self) -> SelectionView {
        SelectionView::from_state(&self.cascade.read().await.state)
    }

    /// Fetch the route list. Runs once; later calls do nothing.
    pub async fn initialize(&self) {
        let ticket = {
            let mut cascade = self.cascade.write().await;
            if cascade.initialized {
                warn!("selection controller already initialized");
                return;
            }
            cascade.initialized = true;
            cascade.begin(Level::Routes)
        };

        debug!("fetching routes");
        let result = self.api.fetch_routes().await;

        self.cascade
            .write()
            .await
            .finish(ticket, result, |state, routes| state.routes = routes);
    }

    /// Dispatch a presentation event to the matching operation.
    pub async fn handle(&self, event: SelectionEvent) {
        match event {
            SelectionEvent::RouteChosen(route) => self.select_route(route).await,
            SelectionEvent::DirectionChosen(direction) => self.select_direction(direction).await,
            SelectionEvent::StopChosen(stop) => self.select_stop(stop).await,
        }
    }

    /// Choose a route.
    ///
    /// Clears the direction, stop and departures, then loads the route's
    /// directions. A route missing from the loaded list is treated as
    /// choosing nothing, which also drops any error message.
    pub async fn select_route(&self, route: Option<RouteId>) {
        let (ticket, route) = {
            let mut cascade = self.cascade.write().await;
            let route = route.filter(|id| {
                let known = cascade.state.routes.iter().any(|r| &r.id == id);
                if !known {
                    warn!(route = %id, "unknown route chosen, clearing selection");
                }
                known
            });

            cascade.generations.route_chosen();
            cascade.in_flight.route_chosen();
            cascade.state.selected_route = route.clone();
            cascade.state.clear_from_direction();

            let Some(route) = route else {
                cascade.state.error = None;
                cascade.sync_loading();
                return;
            };
            (cascade.begin(Level::Directions), route)
        };

        debug!(%route, "fetching directions");
        let result = self.api.fetch_directions(&route).await;

        self.cascade
            .write()
            .await
            .finish(ticket, result, |state, directions| {
                state.directions = directions
            });
    }

    /// Choose a direction for the selected route.
    ///
    /// Does nothing if no route is selected. Otherwise clears the stop and
    /// departures, then loads the stops for (route, direction).
    pub async fn select_direction(&self, direction: Option<DirectionId>) {
        let (ticket, route, direction) = {
            let mut cascade = self.cascade.write().await;
            let Some(route) = cascade.state.selected_route.clone() else {
                debug!("direction chosen without a route, ignoring");
                return;
            };
            let direction = direction.filter(|id| {
                let known = cascade.state.directions.iter().any(|d| &d.id == id);
                if !known {
                    warn!(%route, direction = %id, "unknown direction chosen, clearing selection");
                }
                known
            });

            cascade.generations.direction_chosen();
            cascade.in_flight.direction_chosen();
            cascade.state.selected_direction = direction.clone();
            cascade.state.clear_from_stop();

            let Some(direction) = direction else {
                cascade.state.error = None;
                cascade.sync_loading();
                return;
            };
            (cascade.begin(Level::Stops), route, direction)
        };

        debug!(%route, %direction, "fetching stops");
        let result = self.api.fetch_stops(&route, &direction).await;

        self.cascade
            .write()
            .await
            .finish(ticket, result, |state, stops| state.stops = stops);
    }

    /// Choose a stop for the selected route and direction.
    ///
    /// Does nothing unless both are selected. Stop is the last level, so
    /// the previous departures stay visible until the new ones arrive.
    pub async fn select_stop(&self, stop: Option<StopCode>) {
        let (ticket, route, direction, stop) = {
            let mut cascade = self.cascade.write().await;
            let (Some(route), Some(direction)) = (
                cascade.state.selected_route.clone(),
                cascade.state.selected_direction.clone(),
            ) else {
                debug!("stop chosen without a route and direction, ignoring");
                return;
            };
            let stop = stop.filter(|code| {
                let known = cascade.state.stops.iter().any(|s| &s.code == code);
                if !known {
                    warn!(%route, %direction, stop = %code, "unknown stop chosen, clearing selection");
                }
                known
            });

            cascade.generations.stop_chosen();
            cascade.in_flight.stop_chosen();
            cascade.state.selected_stop = stop.clone();

            let Some(stop) = stop else {
                cascade.state.departures = None;
                cascade.state.error = None;
                cascade.sync_loading();
                return;
            };
            (cascade.begin(Level::Departures), route, direction, stop)
        };

        debug!(%route, %direction, %stop, "fetching departures");
        let result = self.api.fetch_departures(&route, &direction, &stop).await;

        self.cascade
            .write()
            .await
            .finish(ticket, result, |state, board| state.departures = Some(board));
    }
}

impl<A: TransitApi + 'static> SelectionController<A> {
    /// Like [`handle`](Self::handle), but the work runs on its own task.
    ///
    /// Dropping the returned future (say, because an HTTP client hung up)
    /// does not abandon the fetch: its result is still applied and
    /// `loading` still settles.
    pub async fn handle_detached(
        self: &Arc<Self>,
        event: SelectionEvent,
    ) -> Result<(), JoinError> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.handle(event).await }).await
    }
}

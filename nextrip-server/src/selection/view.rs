//! Read-only view of the selection for the presentation layer.

use serde::Serialize;

use crate::domain::{Departure, DepartureBoard};

use super::state::SelectionState;

/// A dropdown option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// Whether this option is the current selection.
    pub selected: bool,
}

impl SelectOption {
    fn new(value: &str, label: &str, selected: Option<&str>) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            selected: selected == Some(value),
        }
    }
}

/// A row of the departures table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartureRow {
    pub route_short_name: String,
    pub description: String,
    pub departure_text: String,
    /// Unix seconds; unique enough to key rows.
    pub departure_time: i64,
}

impl From<&Departure> for DepartureRow {
    fn from(dep: &Departure) -> Self {
        Self {
            route_short_name: dep.route_short_name.clone(),
            description: dep.description.clone(),
            departure_text: dep.departure_text.clone(),
            departure_time: dep.departure_time,
        }
    }
}

/// What the departures area should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum DepartureTable {
    /// No stop chosen yet (or its departures haven't arrived).
    NotRequested,
    /// The stop has nothing departing: "No departures at this time".
    NoDepartures,
    /// Departures in server order.
    Rows(Vec<DepartureRow>),
}

impl DepartureTable {
    fn from_board(board: Option<&DepartureBoard>) -> Self {
        match board {
            None => DepartureTable::NotRequested,
            Some(board) if board.is_empty() => DepartureTable::NoDepartures,
            Some(board) => {
                DepartureTable::Rows(board.departures.iter().map(DepartureRow::from).collect())
            }
        }
    }
}

/// Selection state mapped to generic `{value, label}` options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub route_options: Vec<SelectOption>,
    pub direction_options: Vec<SelectOption>,
    pub stop_options: Vec<SelectOption>,
    pub loading: bool,
    pub error: Option<String>,
    pub departures: DepartureTable,
}

impl SelectionView {
    /// Build the view from a state snapshot.
    pub fn from_state(state: &SelectionState) -> Self {
        let route = state.selected_route.as_ref().map(|id| id.as_str());
        let direction = state.selected_direction.as_ref().map(|id| id.as_str());
        let stop = state.selected_stop.as_ref().map(|id| id.as_str());

        Self {
            route_options: state
                .routes
                .iter()
                .map(|r| SelectOption::new(r.id.as_str(), &r.label, route))
                .collect(),
            direction_options: state
                .directions
                .iter()
                .map(|d| SelectOption::new(d.id.as_str(), &d.name, direction))
                .collect(),
            stop_options: state
                .stops
                .iter()
                .map(|s| SelectOption::new(s.code.as_str(), &s.description, stop))
                .collect(),
            loading: state.loading,
            error: state.error.clone(),
            departures: DepartureTable::from_board(state.departures.as_ref()),
        }
    }

    /// Whether the direction dropdown should be offered.
    pub fn show_directions(&self) -> bool {
        !self.direction_options.is_empty()
    }

    /// Whether the stop dropdown should be offered.
    pub fn show_stops(&self) -> bool {
        !self.stop_options.is_empty()
    }

    /// Whether the departures table should be drawn at all.
    pub fn show_departures(&self) -> bool {
        self.departures != DepartureTable::NotRequested
    }

    /// Rows to draw; empty unless there are departures.
    pub fn departure_rows(&self) -> &[DepartureRow] {
        match &self.departures {
            DepartureTable::Rows(rows) => rows,
            _ => &[],
        }
    }
}

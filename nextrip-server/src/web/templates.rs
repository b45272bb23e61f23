//! Askama templates for the web frontend.

use askama::Template;

use crate::selection::SelectionView;

/// Where the "View Real-Time Departures" link points.
pub const NEXTRIP_HOME: &str = "https://www.metrotransit.org/nextrip";

/// The departure browser page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub view: SelectionView,
    pub nextrip_home: &'static str,
}

impl IndexTemplate {
    pub fn new(view: SelectionView) -> Self {
        Self {
            view,
            nextrip_home: NEXTRIP_HOME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Departure, DepartureBoard, Route, Stop};
    use crate::selection::SelectionState;
    use crate::test_utils::{route, stop};

    fn render(state: &SelectionState) -> String {
        IndexTemplate::new(SelectionView::from_state(state))
            .render()
            .unwrap()
    }

    #[test]
    fn empty_page_has_route_prompt_only() {
        let html = render(&SelectionState::new());

        assert!(html.contains("NextTrip"));
        assert!(html.contains("View Real-Time Departures"));
        assert!(html.contains(NEXTRIP_HOME));
        assert!(html.contains("Select route, direction, and stop to view departure information."));
        assert!(html.contains("Select Route..."));
        assert!(!html.contains("Select Direction..."));
        assert!(!html.contains("Select Stop..."));
        assert!(!html.contains("<table"));
        assert!(html.contains("Loading"));
    }

    #[test]
    fn selected_route_is_marked() {
        let mut state = SelectionState::new();
        state.loading = false;
        state.routes = vec![Route {
            id: route("901"),
            label: "METRO Blue Line".into(),
        }];
        state.selected_route = Some(route("901"));

        let html = render(&state);
        assert!(html.contains(r#"<option value="901" selected>METRO Blue Line</option>"#));
        assert!(!html.contains("Loading"));
    }

    #[test]
    fn departure_table_rows() {
        let mut state = SelectionState::new();
        state.stops = vec![Stop {
            code: stop("MAAM"),
            description: "Mall of America Station".into(),
        }];
        state.departures = Some(DepartureBoard::new(vec![Departure {
            route_short_name: "Blue".into(),
            description: "to Target Field".into(),
            departure_text: "5 Min".into(),
            departure_time: 1_700_000_000,
        }]));

        let html = render(&state);
        assert!(html.contains("Select Stop..."));
        assert!(html.contains("<th>Route</th>"));
        assert!(html.contains("<th>Destination</th>"));
        assert!(html.contains("<th>Departs</th>"));
        assert!(html.contains("to Target Field"));
        assert!(html.contains("5 Min"));
        assert!(!html.contains("No departures at this time"));
    }

    #[test]
    fn empty_board_shows_marker_row() {
        let mut state = SelectionState::new();
        state.departures = Some(DepartureBoard::default());
        state.error = Some("Unable to load departures: API error 503: down".into());

        let html = render(&state);
        assert!(html.contains("No departures at this time"));
        assert!(html.contains("Unable to load departures"));
    }

    #[test]
    fn labels_are_escaped() {
        let mut state = SelectionState::new();
        state.routes = vec![Route {
            id: route("1"),
            label: "<b>Bold</b>".into(),
        }];

        let html = render(&state);
        assert!(!html.contains("<b>Bold</b>"));
        assert!(html.contains("&lt;b&gt;"));
    }
}

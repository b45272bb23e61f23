//! Conversion from NexTrip DTOs to domain types.
//!
//! Server order is preserved everywhere; nothing here sorts.

use crate::domain::{
    Departure, DepartureBoard, Direction, DirectionId, InvalidId, Route, RouteId, Stop, StopCode,
};

use super::types::{DepartureDto, DeparturesDto, DirectionDto, PlaceDto, RouteDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A record carried an unusable identifier
    #[error("record {index}: {source}")]
    InvalidId {
        index: usize,
        #[source]
        source: InvalidId,
    },
}

fn at(index: usize) -> impl FnOnce(InvalidId) -> ConversionError {
    move |source| ConversionError::InvalidId { index, source }
}

/// Convert the route list.
pub fn convert_routes(dtos: Vec<RouteDto>) -> Result<Vec<Route>, ConversionError> {
    dtos.into_iter()
        .enumerate()
        .map(|(i, dto)| {
            Ok(Route {
                id: RouteId::new(dto.route_id).map_err(at(i))?,
                label: dto.route_label,
            })
        })
        .collect()
}

/// Convert the direction list for one route.
pub fn convert_directions(dtos: Vec<DirectionDto>) -> Result<Vec<Direction>, ConversionError> {
    dtos.into_iter()
        .enumerate()
        .map(|(i, dto)| {
            Ok(Direction {
                id: DirectionId::new(dto.direction_id).map_err(at(i))?,
                name: dto.direction_name,
            })
        })
        .collect()
}

/// Convert the stop list for one (route, direction).
pub fn convert_stops(dtos: Vec<PlaceDto>) -> Result<Vec<Stop>, ConversionError> {
    dtos.into_iter()
        .enumerate()
        .map(|(i, dto)| {
            Ok(Stop {
                code: StopCode::new(dto.place_code).map_err(at(i))?,
                description: dto.description,
            })
        })
        .collect()
}

/// Convert a departures response. Rows carry no identifiers, so this
/// cannot fail.
pub fn convert_departures(dto: DeparturesDto) -> DepartureBoard {
    DepartureBoard::new(dto.departures.into_iter().map(convert_departure).collect())
}

fn convert_departure(dto: DepartureDto) -> Departure {
    Departure {
        route_short_name: dto.route_short_name,
        description: dto.description,
        departure_text: dto.departure_text,
        departure_time: dto.departure_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_keep_server_order() {
        let dtos = vec![
            RouteDto {
                route_id: "921".into(),
                route_label: "METRO A Line".into(),
            },
            RouteDto {
                route_id: "2".into(),
                route_label: "Route 2".into(),
            },
        ];
        let routes = convert_routes(dtos).unwrap();
        assert_eq!(routes[0].id.as_str(), "921");
        assert_eq!(routes[1].label, "Route 2");
    }

    #[test]
    fn empty_id_fails_with_index() {
        let dtos = vec![
            PlaceDto {
                place_code: "MAAM".into(),
                description: "Mall of America".into(),
            },
            PlaceDto {
                place_code: "".into(),
                description: "Nowhere".into(),
            },
        ];
        let err = convert_stops(dtos).unwrap_err();
        assert_eq!(
            err.to_string(),
            "record 1: invalid stop code: cannot be empty"
        );
    }

    #[test]
    fn departures_keep_server_order() {
        let dto = DeparturesDto {
            departures: vec![
                DepartureDto {
                    route_short_name: "Blue".into(),
                    description: "to Target Field".into(),
                    departure_text: "Due".into(),
                    departure_time: 1_700_000_600,
                },
                DepartureDto {
                    route_short_name: "Blue".into(),
                    description: "to Target Field".into(),
                    departure_text: "10:35".into(),
                    departure_time: 1_700_000_000,
                },
            ],
        };
        let board = convert_departures(dto);
        assert_eq!(board.departures[0].departure_text, "Due");
        assert_eq!(board.departures[1].departure_time, 1_700_000_000);
    }
}

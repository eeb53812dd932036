mod sync;
pub use sync::*;

use serde::{Deserialize, Serialize};

use crate::route::{Direction, Route};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripType {
    #[default]
    #[serde(alias = "IDA")]
    Outbound,
    #[serde(alias = "VOLTA")]
    Return,
    #[serde(alias = "IDA_E_VOLTA")]
    RoundTrip,
}

impl TripType {
    /// The direction whose route represents the whole trip.
    pub fn principal_direction(&self) -> Direction {
        match self {
            TripType::Outbound | TripType::RoundTrip => Direction::Outbound,
            TripType::Return => Direction::Return,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StopKind {
    #[serde(alias = "EMBARQUE")]
    Boarding,
    #[serde(alias = "DESEMBARQUE")]
    Alighting,
}

/// Simplified view of an intermediate waypoint as carried by a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStop {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    pub kind: StopKind,
}

/// The slice of a scheduled journey that routes feed into. Booking,
/// vehicle and crew state live elsewhere.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    #[serde(rename = "type")]
    pub trip_type: TripType,
    /// When unset, `origin`, `destination` and `intermediate_stops` are
    /// entered by hand and never projected from the routes.
    #[serde(default)]
    pub uses_route_system: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbound_route: Option<Route>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_route: Option<Route>,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub intermediate_stops: Vec<TripStop>,
}

impl Trip {
    pub fn new(id: impl Into<String>, trip_type: TripType) -> Self {
        Self {
            id: id.into(),
            trip_type,
            uses_route_system: true,
            ..Default::default()
        }
    }

    pub fn with_outbound_route(mut self, route: Route) -> Self {
        self.outbound_route = Some(route);
        self
    }

    pub fn with_return_route(mut self, route: Route) -> Self {
        self.return_route = Some(route);
        self
    }

    pub fn route(&self, direction: Direction) -> Option<&Route> {
        match direction {
            Direction::Outbound => self.outbound_route.as_ref(),
            Direction::Return => self.return_route.as_ref(),
        }
    }

    /// The outbound route for outbound and round trips, the return route for return trips.
    pub fn principal_route(&self) -> Option<&Route> {
        self.route(self.trip_type.principal_direction())
    }

    pub fn synchronized(self) -> Self {
        project_route_onto_trip(self)
    }
}

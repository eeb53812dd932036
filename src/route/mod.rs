mod editor;
mod naming;
mod schedule;
mod validation;
mod waypoint;

pub use editor::*;
pub use naming::*;
pub use schedule::*;
pub use validation::*;
pub use waypoint::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    config::{Config, DurationSource},
    shared,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Waypoint index {index} is out of range for a route with {len} waypoints")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("A stop can only be inserted between the origin and the destination, got position {position} in a route with {len} waypoints")]
    InvalidInsertPosition { position: usize, len: usize },
    #[error("Waypoint {0} is not an intermediate stop")]
    NotAnIntermediateStop(usize),
    #[error("Waypoint {index} cannot move {shift}, it would pass a route terminal")]
    CannotShift { index: usize, shift: Shift },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    #[default]
    #[serde(alias = "IDA")]
    Outbound,
    #[serde(alias = "VOLTA")]
    Return,
}

/// One directional leg of travel through an ordered list of waypoints.
///
/// A consistent route always has an origin first, a destination last and
/// intermediate stops in between, with every `order` matching its index.
/// Only [`Route::refresh`] (and the edits in [`RouteEditor`], which call it)
/// keep the derived fields in sync; callers that push into `waypoints`
/// directly must refresh afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub direction: Direction,
    pub waypoints: Vec<Waypoint>,
    /// Derived display name.
    #[serde(default)]
    pub name: String,
    /// Derived, see [`DurationSource`].
    #[serde(default)]
    pub estimated_duration_minutes: i64,
    /// User-entered. Never derived from the legs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance_km: Option<f64>,
    pub active: bool,
}

/// An active route holding an empty origin and an empty destination.
pub fn create_empty_route(direction: Direction) -> Route {
    Route {
        id: shared::generate_id("route"),
        direction,
        waypoints: vec![
            create_empty_waypoint(WaypointRole::Origin, 0),
            create_empty_waypoint(WaypointRole::Destination, 1),
        ],
        name: String::new(),
        estimated_duration_minutes: 0,
        total_distance_km: None,
        active: true,
    }
}

impl Route {
    pub fn new(direction: Direction) -> Self {
        create_empty_route(direction)
    }

    /// Builds a route around the given waypoints and refreshes it.
    pub fn from_waypoints(direction: Direction, waypoints: Vec<Waypoint>, config: &Config) -> Self {
        let mut route = Self {
            waypoints,
            ..create_empty_route(direction)
        };
        route.refresh(config);
        route
    }

    /// Re-derives `order`, the accumulated minutes, `name` and
    /// `estimated_duration_minutes`, in that order. Running it twice in a row
    /// yields the same route.
    pub fn refresh(&mut self, config: &Config) {
        let waypoints = std::mem::take(&mut self.waypoints);
        self.waypoints = recompute_accumulated_times(reindex(waypoints));
        self.name = generate_route_name(&self.waypoints);
        self.estimated_duration_minutes = match config.duration_source {
            DurationSource::Timestamps => compute_route_duration_minutes(&self.waypoints),
            DurationSource::Accumulated => accumulated_route_duration_minutes(&self.waypoints),
        };
        debug!(
            "Refreshed route {} \"{}\": {} waypoints, {} min",
            self.id,
            self.name,
            self.waypoints.len(),
            self.estimated_duration_minutes
        );
    }

    pub fn refreshed(mut self, config: &Config) -> Self {
        self.refresh(config);
        self
    }

    pub fn validate(&self) -> Validation {
        validate_route(self)
    }

    pub fn origin(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    /// The last waypoint, provided the route has at least two.
    pub fn destination(&self) -> Option<&Waypoint> {
        if self.waypoints.len() < 2 {
            return None;
        }
        self.waypoints.last()
    }

    /// Waypoints strictly between the first and the last.
    pub fn intermediate_stops(&self) -> &[Waypoint] {
        match self.waypoints.len() {
            0..=2 => &[],
            len => &self.waypoints[1..len - 1],
        }
    }

    pub fn waypoint_by_id(&self, id: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|waypoint| waypoint.id == id)
    }

    /// Sum of the per-leg distances. A suggestion for `total_distance_km`,
    /// which is never filled in implicitly.
    pub fn total_leg_distance_km(&self) -> f64 {
        self.waypoints
            .iter()
            .skip(1)
            .map(Waypoint::distance_from_previous)
            .sum()
    }
}

use thiserror::Error;
use tracing::debug;

use crate::route::{Route, Waypoint, WaypointRole};

/// A problem found while validating a route. Positions are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteIssue {
    #[error("route must have at least an origin and a destination")]
    TooFewWaypoints,
    #[error("the first waypoint must be the origin")]
    FirstIsNotOrigin,
    #[error("the last waypoint must be the destination")]
    LastIsNotDestination,
    #[error("waypoint {0} must be an intermediate stop")]
    MisplacedTerminal(usize),
    #[error("waypoint {0} must have a name")]
    MissingName(usize),
    #[error("waypoint times must be in chronological order")]
    OutOfChronologicalOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: Vec<RouteIssue>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The issues as display strings, in detection order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

pub fn validate_route(route: &Route) -> Validation {
    let validation = validate_waypoints(&route.waypoints);
    debug!(
        "Route {} validated with {} issue(s)",
        route.id,
        validation.errors.len()
    );
    validation
}

/// Collects every structural, naming and temporal issue of the sequence.
/// Only a sequence shorter than two stops ends the check early.
pub fn validate_waypoints(waypoints: &[Waypoint]) -> Validation {
    let mut errors = Vec::new();
    let [first, .., last] = waypoints else {
        errors.push(RouteIssue::TooFewWaypoints);
        return Validation { errors };
    };

    if !first.role.is_origin() {
        errors.push(RouteIssue::FirstIsNotOrigin);
    }
    if !last.role.is_destination() {
        errors.push(RouteIssue::LastIsNotDestination);
    }

    let inner = &waypoints[1..waypoints.len() - 1];
    for (i, waypoint) in inner.iter().enumerate() {
        match waypoint.role {
            WaypointRole::IntermediateStop => (),
            WaypointRole::Origin | WaypointRole::Destination => {
                errors.push(RouteIssue::MisplacedTerminal(i + 2))
            }
        }
    }

    waypoints
        .iter()
        .enumerate()
        .filter(|(_, waypoint)| !waypoint.has_name())
        .for_each(|(i, _)| errors.push(RouteIssue::MissingName(i + 1)));

    if !is_chronological(waypoints) {
        errors.push(RouteIssue::OutOfChronologicalOrder);
    }

    Validation { errors }
}

/// Legacy check over the absolute timestamps. A pair is only compared when
/// both sides carry a readable time, so routes timed purely by relative
/// durations always pass.
pub fn is_chronological(waypoints: &[Waypoint]) -> bool {
    waypoints.windows(2).all(|pair| {
        match (pair[0].departure_timestamp(), pair[1].arrival_timestamp()) {
            (Some(leaving), Some(arriving)) => leaving < arriving,
            _ => true,
        }
    })
}

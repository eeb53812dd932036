use tracing::{debug, trace};

use crate::{
    route::Waypoint,
    trip::{StopKind, Trip, TripStop},
};

impl From<&Waypoint> for TripStop {
    fn from(value: &Waypoint) -> Self {
        // A stop open to both boarding and alighting is reported as boarding.
        let kind = if value.allows_boarding {
            StopKind::Boarding
        } else {
            StopKind::Alighting
        };
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            arrival_time: value.arrival_time.clone(),
            departure_time: value.departure_time.clone(),
            kind,
        }
    }
}

/// Copies origin, destination and intermediate stops from the trip's
/// principal route onto the trip.
///
/// Trips that don't use the route system come back unchanged, and so do the
/// summary fields when the principal route is missing or has fewer than two
/// waypoints.
pub fn project_route_onto_trip(mut trip: Trip) -> Trip {
    if !trip.uses_route_system {
        trace!("Trip {} is managed by hand, skipping projection", trip.id);
        return trip;
    }

    let Some(route) = trip.principal_route() else {
        debug!(
            "Trip {} has no {:?} route to project",
            trip.id,
            trip.trip_type.principal_direction()
        );
        return trip;
    };
    let [origin, stops @ .., destination] = route.waypoints.as_slice() else {
        debug!("Route {} is too short to project onto trip {}", route.id, trip.id);
        return trip;
    };

    let origin = origin.name.clone();
    let destination = destination.name.clone();
    let intermediate_stops: Vec<TripStop> = stops.iter().map(TripStop::from).collect();
    debug!(
        "Projected route {} onto trip {} with {} stop(s)",
        route.id,
        trip.id,
        intermediate_stops.len()
    );

    trip.origin = origin;
    trip.destination = destination;
    trip.intermediate_stops = intermediate_stops;
    trip
}

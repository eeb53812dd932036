use tracing::trace;

use crate::{route::Waypoint, shared::Minutes};

/// Resets every `order` to the waypoint's index.
pub fn reindex(mut waypoints: Vec<Waypoint>) -> Vec<Waypoint> {
    waypoints
        .iter_mut()
        .enumerate()
        .for_each(|(i, waypoint)| waypoint.order = i);
    waypoints
}

/// Fills in `accumulated_minutes_from_start` along the sequence.
///
/// The first waypoint starts at zero. Every later waypoint adds its own travel
/// time plus the dwell time of the waypoint before it:
///
/// ```text
/// A[0] = 0
/// A[i] = A[i-1] + travel(i) + dwell(i-1)
/// ```
///
/// Travel on the first waypoint never counts, whatever its role. Missing
/// durations count as zero, and only intermediate stops dwell.
pub fn recompute_accumulated_times(mut waypoints: Vec<Waypoint>) -> Vec<Waypoint> {
    let mut accumulated = Minutes::ZERO;
    let mut previous_dwell = Minutes::ZERO;
    for (i, waypoint) in waypoints.iter_mut().enumerate() {
        if i > 0 {
            accumulated += waypoint.travel_from_previous() + previous_dwell;
        }
        waypoint.accumulated_minutes_from_start = accumulated;
        previous_dwell = waypoint.dwell();
        trace!(
            "Waypoint {i} [{}] reached after {accumulated}",
            waypoint.name
        );
    }
    waypoints
}

/// Origin-to-destination minutes read from the legacy absolute timestamps.
///
/// Uses the origin's departure (or arrival) and the destination's arrival (or
/// departure). Returns 0 for fewer than two waypoints or when either
/// timestamp is absent or unreadable. The result is negative when the
/// destination is timed before the origin.
///
/// Independent from [`recompute_accumulated_times`]; the two are never reconciled.
pub fn compute_route_duration_minutes(waypoints: &[Waypoint]) -> i64 {
    if waypoints.len() < 2 {
        return 0;
    }
    let (Some(origin), Some(destination)) = (waypoints.first(), waypoints.last()) else {
        return 0;
    };
    match (origin.departure_timestamp(), destination.arrival_timestamp()) {
        (Some(departure), Some(arrival)) => departure.minutes_until(&arrival),
        _ => 0,
    }
}

/// Destination's accumulated minutes, 0 for fewer than two waypoints.
pub fn accumulated_route_duration_minutes(waypoints: &[Waypoint]) -> i64 {
    if waypoints.len() < 2 {
        return 0;
    }
    waypoints
        .last()
        .map(|destination| i64::from(destination.accumulated_minutes_from_start.as_minutes()))
        .unwrap_or(0)
}

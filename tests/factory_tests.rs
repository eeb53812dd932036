use rota::prelude::*;

#[test]
fn empty_waypoint_keeps_order() {
    for role in [
        WaypointRole::Origin,
        WaypointRole::IntermediateStop,
        WaypointRole::Destination,
    ] {
        for order in [0, 1, 7] {
            let waypoint = create_empty_waypoint(role, order);
            assert_eq!(waypoint.order, order);
            assert_eq!(waypoint.role, role);
        }
    }
}

#[test]
fn empty_waypoint_is_blank() {
    let waypoint = create_empty_waypoint(WaypointRole::IntermediateStop, 1);
    assert!(waypoint.name.is_empty());
    assert!(waypoint.notes.is_empty());
    assert!(waypoint.travel_duration_from_previous_minutes.is_none());
    assert!(waypoint.stop_duration_minutes.is_none());
    assert!(waypoint.distance_from_previous_km.is_none());
    assert!(waypoint.accumulated_minutes_from_start.is_zero());
    assert!(waypoint.arrival_time.is_none());
    assert!(waypoint.departure_time.is_none());
}

#[test]
fn empty_waypoint_boarding_flags() {
    let origin = create_empty_waypoint(WaypointRole::Origin, 0);
    assert!(origin.allows_boarding);
    assert!(!origin.allows_alighting);

    let stop = create_empty_waypoint(WaypointRole::IntermediateStop, 1);
    assert!(stop.allows_boarding);
    assert!(stop.allows_alighting);

    let destination = create_empty_waypoint(WaypointRole::Destination, 2);
    assert!(!destination.allows_boarding);
    assert!(destination.allows_alighting);
}

#[test]
fn empty_waypoints_get_distinct_ids() {
    let a = create_empty_waypoint(WaypointRole::Origin, 0);
    let b = create_empty_waypoint(WaypointRole::Origin, 0);
    assert_ne!(a.id, b.id);
}

#[test]
fn empty_route_has_two_terminals() {
    for direction in [Direction::Outbound, Direction::Return] {
        let route = create_empty_route(direction);
        assert_eq!(route.direction, direction);
        assert!(route.active);
        assert_eq!(route.waypoints.len(), 2);
        let roles: Vec<_> = route.waypoints.iter().map(|wp| wp.role).collect();
        assert_eq!(roles, [WaypointRole::Origin, WaypointRole::Destination]);
        let orders: Vec<_> = route.waypoints.iter().map(|wp| wp.order).collect();
        assert_eq!(orders, [0, 1]);
    }
}

#[test]
fn waypoint_lookup_by_id() {
    let route = create_empty_route(Direction::Return);
    let destination_id = route.waypoints[1].id.clone();
    let found = route.waypoint_by_id(&destination_id).unwrap();
    assert_eq!(found.role, WaypointRole::Destination);
    assert!(route.waypoint_by_id("wp-missing").is_none());
}

#[test]
fn empty_routes_get_distinct_ids() {
    let a = Route::new(Direction::Outbound);
    let b = Route::new(Direction::Outbound);
    assert_ne!(a.id, b.id);
    assert_ne!(a.waypoints[0].id, b.waypoints[0].id);
}

#[test]
fn empty_route_fails_only_on_names() {
    let route = create_empty_route(Direction::Outbound);
    let validation = validate_route(&route);
    assert_eq!(
        validation.errors,
        [RouteIssue::MissingName(1), RouteIssue::MissingName(2)]
    );
}

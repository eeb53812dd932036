use rota::prelude::*;
use serde_json::json;

fn sample() -> Route {
    let mut origin = Waypoint::new(WaypointRole::Origin, 0).with_name("Centro, Goiânia - GO");
    origin.city_id = Some("city-gyn".into());
    origin.state_id = Some("state-go".into());
    let stop = Waypoint::new(WaypointRole::IntermediateStop, 1)
        .with_name("Anápolis - GO")
        .with_travel(60)
        .with_stop_duration(15)
        .with_distance(55.0);
    let mut destination = Waypoint::new(WaypointRole::Destination, 2)
        .with_name("Plano Piloto, Brasília - DF")
        .with_travel(100)
        .with_distance(150.0);
    destination.city_id = Some("city-bsb".into());
    destination.state_id = Some("state-df".into());

    let config = Config::new().with_duration_source(DurationSource::Accumulated);
    let mut route = Route::from_waypoints(Direction::Outbound, vec![origin, stop, destination], &config);
    route.total_distance_km = Some(205.0);
    route
}

#[test]
fn payload_takes_terminal_locations() {
    let route = sample();
    let payload = RoutePayload::from(&route);
    assert_eq!(payload.id.as_deref(), Some(route.id.as_str()));
    assert_eq!(payload.name, route.name);
    assert_eq!(payload.origin_city.as_deref(), Some("city-gyn"));
    assert_eq!(payload.origin_state.as_deref(), Some("state-go"));
    assert_eq!(payload.destination_city.as_deref(), Some("city-bsb"));
    assert_eq!(payload.destination_state.as_deref(), Some("state-df"));
    assert_eq!(payload.distance_km, Some(205.0));
    assert_eq!(payload.duration_minutes, 175);
    assert_eq!(payload.stops.len(), 3);
    assert!(payload.active);
}

#[test]
fn payload_json_shape() {
    let value = serde_json::to_value(RoutePayload::from(&sample())).unwrap();
    assert_eq!(value["type"], json!("OUTBOUND"));
    assert_eq!(value["durationMinutes"], json!(175));
    assert_eq!(value["distanceKm"], json!(205.0));
    assert_eq!(value["originCity"], json!("city-gyn"));
    assert_eq!(value["stops"][0]["role"], json!("ORIGIN"));
    assert_eq!(value["stops"][1]["role"], json!("INTERMEDIATE_STOP"));
    assert_eq!(value["stops"][1]["stopDurationMinutes"], json!(15));
    assert_eq!(value["stops"][1]["accumulatedMinutesFromStart"], json!(60));
    assert_eq!(value["stops"][2]["accumulatedMinutesFromStart"], json!(175));
    assert_eq!(value["stops"][2]["allowsBoarding"], json!(false));
}

#[test]
fn payload_rebuilds_route() {
    let route = sample();
    let config = Config::new().with_duration_source(DurationSource::Accumulated);
    let rebuilt = RoutePayload::from(&route).into_route(&config);
    assert_eq!(rebuilt, route);
}

#[test]
fn legacy_payload_is_read() {
    let body = json!({
        "name": "stale name",
        "durationMinutes": 1,
        "type": "VOLTA",
        "active": false,
        "stops": [
            {
                "id": "a", "order": 5, "role": "ORIGEM", "name": "Brasília",
                "allowsBoarding": true, "allowsAlighting": false,
                "departureTime": "2024-05-10T07:00"
            },
            {
                "id": "b", "role": "PARADA_INTERMEDIARIA", "name": "Anápolis",
                "allowsBoarding": false, "allowsAlighting": true,
                "travelDurationFromPreviousMinutes": 100
            },
            {
                "id": "c", "role": "DESTINO", "name": "Goiânia",
                "allowsBoarding": false, "allowsAlighting": true,
                "arrivalTime": "2024-05-10T10:05"
            }
        ]
    });
    let payload: RoutePayload = serde_json::from_value(body).unwrap();
    let route = payload.into_route(&Config::default());
    assert_eq!(route.direction, Direction::Return);
    assert!(!route.active);
    assert!(route.id.starts_with("route-"));
    assert_eq!(route.name, "Brasília → Goiânia (via Anápolis)");
    assert_eq!(route.estimated_duration_minutes, 185);
    let orders: Vec<_> = route.waypoints.iter().map(|wp| wp.order).collect();
    assert_eq!(orders, [0, 1, 2]);
    assert!(route.validate().is_valid());
}

fn waypoint_with_durations(travel: serde_json::Value, dwell: serde_json::Value) -> Waypoint {
    serde_json::from_value(json!({
        "id": "wp-1", "role": "INTERMEDIATE_STOP", "name": "Anápolis",
        "allowsBoarding": true, "allowsAlighting": true,
        "travelDurationFromPreviousMinutes": travel,
        "stopDurationMinutes": dwell,
        "accumulatedMinutesFromStart": 30.25
    }))
    .unwrap()
}

#[test]
fn fractional_durations_are_rounded() {
    let waypoint = waypoint_with_durations(json!(12.5), json!(4.2));
    assert_eq!(waypoint.travel_duration_from_previous_minutes, Some(Minutes::from(13)));
    assert_eq!(waypoint.stop_duration_minutes, Some(Minutes::from(4)));
    assert_eq!(waypoint.accumulated_minutes_from_start, Minutes::from(30));
}

#[test]
fn unusable_durations_are_absent() {
    let waypoint = waypoint_with_durations(json!("logo ali"), json!(-5));
    assert_eq!(waypoint.travel_duration_from_previous_minutes, None);
    assert_eq!(waypoint.stop_duration_minutes, None);

    let waypoint = waypoint_with_durations(json!(null), json!({"min": 3}));
    assert_eq!(waypoint.travel_duration_from_previous_minutes, None);
    assert_eq!(waypoint.stop_duration_minutes, None);

    let waypoint = waypoint_with_durations(json!(" 20 "), json!(7));
    assert_eq!(waypoint.travel_duration_from_previous_minutes, Some(Minutes::from(20)));
    assert_eq!(waypoint.stop_duration_minutes, Some(Minutes::from(7)));
}

#[test]
fn payload_with_fractional_stop_is_read() {
    let body = json!({
        "name": "", "type": "OUTBOUND", "active": true,
        "stops": [
            {"id": "a", "role": "ORIGIN", "name": "A", "allowsBoarding": true, "allowsAlighting": false},
            {"id": "b", "role": "DESTINATION", "name": "B", "allowsBoarding": false, "allowsAlighting": true,
             "travelDurationFromPreviousMinutes": 89.6}
        ]
    });
    let payload: RoutePayload = serde_json::from_value(body).unwrap();
    let config = Config::new().with_duration_source(DurationSource::Accumulated);
    let route = payload.into_route(&config);
    assert_eq!(route.estimated_duration_minutes, 90);
}

#[test]
fn trip_json_uses_type_key() {
    let trip = Trip::new("t-1", TripType::RoundTrip);
    let value = serde_json::to_value(&trip).unwrap();
    assert_eq!(value["type"], json!("ROUND_TRIP"));
    assert_eq!(value["usesRouteSystem"], json!(true));

    let legacy: Trip = serde_json::from_value(json!({"id": "t-2", "type": "IDA_E_VOLTA"})).unwrap();
    assert_eq!(legacy.trip_type, TripType::RoundTrip);
    assert!(!legacy.uses_route_system);
}

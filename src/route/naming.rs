use crate::route::Waypoint;

/// `"{origin} → {destination}"`, with `" (via {stop}, {stop}, ...)"` appended
/// when there are intermediate stops. Names are used verbatim.
/// Empty for fewer than two waypoints.
pub fn generate_route_name(waypoints: &[Waypoint]) -> String {
    let [origin, stops @ .., destination] = waypoints else {
        return String::new();
    };
    let mut name = format!("{} → {}", origin.name, destination.name);
    if !stops.is_empty() {
        let via: Vec<&str> = stops.iter().map(|stop| stop.name.as_str()).collect();
        name.push_str(&format!(" (via {})", via.join(", ")));
    }
    name
}

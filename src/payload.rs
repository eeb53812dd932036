use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    route::{Direction, Route, Waypoint, create_empty_route},
};

/// Route body accepted by the create/update endpoints.
///
/// Origin and destination city/state come from the location ids of the first
/// and last waypoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub origin_city: Option<String>,
    #[serde(default)]
    pub origin_state: Option<String>,
    #[serde(default)]
    pub destination_city: Option<String>,
    #[serde(default)]
    pub destination_state: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub duration_minutes: i64,
    pub stops: Vec<Waypoint>,
    pub active: bool,
    #[serde(rename = "type")]
    pub direction: Direction,
}

impl From<&Route> for RoutePayload {
    fn from(value: &Route) -> Self {
        let origin = value.origin();
        let destination = value.destination();
        Self {
            id: Some(value.id.clone()),
            name: value.name.clone(),
            origin_city: origin.and_then(|waypoint| waypoint.city_id.clone()),
            origin_state: origin.and_then(|waypoint| waypoint.state_id.clone()),
            destination_city: destination.and_then(|waypoint| waypoint.city_id.clone()),
            destination_state: destination.and_then(|waypoint| waypoint.state_id.clone()),
            distance_km: value.total_distance_km,
            duration_minutes: value.estimated_duration_minutes,
            stops: value.waypoints.clone(),
            active: value.active,
            direction: value.direction,
        }
    }
}

impl RoutePayload {
    /// Rebuilds an editable route, generating an id when none was stored.
    /// The stored name and duration are discarded and derived again.
    pub fn into_route(self, config: &Config) -> Route {
        let mut route = create_empty_route(self.direction);
        if let Some(id) = self.id {
            route.id = id;
        }
        route.waypoints = self.stops;
        route.total_distance_km = self.distance_km;
        route.active = self.active;
        route.refreshed(config)
    }
}

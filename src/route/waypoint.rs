use serde::{Deserialize, Serialize};

use crate::shared::{self, Minutes, Timestamp, time};

/// Position a waypoint plays in its route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaypointRole {
    #[serde(alias = "ORIGEM")]
    Origin,
    #[serde(alias = "PARADA_INTERMEDIARIA")]
    IntermediateStop,
    #[serde(alias = "DESTINO")]
    Destination,
}

impl WaypointRole {
    pub fn is_origin(&self) -> bool {
        matches!(self, WaypointRole::Origin)
    }

    pub fn is_intermediate(&self) -> bool {
        matches!(self, WaypointRole::IntermediateStop)
    }

    pub fn is_destination(&self) -> bool {
        matches!(self, WaypointRole::Destination)
    }
}

/// A single point along a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub id: String,
    /// Zero-based index in the owning route. Rewritten on every structural edit.
    #[serde(default)]
    pub order: usize,
    pub role: WaypointRole,
    /// Display label, e.g. "Centro, Campinas - SP".
    pub name: String,

    // References into the location directory, stored as supplied by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood_id: Option<String>,

    /// Ignored on the first waypoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_previous_km: Option<f64>,
    /// Ignored on the first waypoint. Decimals are rounded on load.
    #[serde(
        default,
        deserialize_with = "time::deserialize_loose_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub travel_duration_from_previous_minutes: Option<Minutes>,
    /// Dwell time. Only intermediate stops dwell.
    #[serde(
        default,
        deserialize_with = "time::deserialize_loose_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_duration_minutes: Option<Minutes>,
    /// Travel plus prior dwell from the origin up to arrival here.
    /// Derived; see [`recompute_accumulated_times`](crate::route::recompute_accumulated_times).
    #[serde(default, deserialize_with = "time::deserialize_loose_minutes_or_zero")]
    pub accumulated_minutes_from_start: Minutes,

    pub allows_boarding: bool,
    pub allows_alighting: bool,

    /// Legacy absolute times, superseded by the relative durations above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,

    #[serde(default)]
    pub notes: String,
}

/// Builds an unnamed waypoint with a fresh id. Boarding is allowed everywhere
/// except the destination and alighting everywhere except the origin.
pub fn create_empty_waypoint(role: WaypointRole, order: usize) -> Waypoint {
    Waypoint {
        id: shared::generate_id("wp"),
        order,
        role,
        name: String::new(),
        state_id: None,
        city_id: None,
        neighborhood_id: None,
        distance_from_previous_km: None,
        travel_duration_from_previous_minutes: None,
        stop_duration_minutes: None,
        accumulated_minutes_from_start: Minutes::ZERO,
        allows_boarding: !role.is_destination(),
        allows_alighting: !role.is_origin(),
        arrival_time: None,
        departure_time: None,
        notes: String::new(),
    }
}

impl Waypoint {
    pub fn new(role: WaypointRole, order: usize) -> Self {
        create_empty_waypoint(role, order)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_travel(mut self, minutes: u32) -> Self {
        self.travel_duration_from_previous_minutes = Some(minutes.into());
        self
    }

    pub fn with_stop_duration(mut self, minutes: u32) -> Self {
        self.stop_duration_minutes = Some(minutes.into());
        self
    }

    pub fn with_distance(mut self, km: f64) -> Self {
        self.distance_from_previous_km = Some(km);
        self
    }

    pub fn with_times(mut self, arrival: Option<&str>, departure: Option<&str>) -> Self {
        self.arrival_time = arrival.map(str::to_string);
        self.departure_time = departure.map(str::to_string);
        self
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Minutes spent travelling from the previous waypoint, zero when unset.
    /// Callers skip it on the first waypoint, whatever its role.
    pub fn travel_from_previous(&self) -> Minutes {
        self.travel_duration_from_previous_minutes.unwrap_or_default()
    }

    /// Minutes the vehicle waits here before moving on.
    pub fn dwell(&self) -> Minutes {
        match self.role {
            WaypointRole::IntermediateStop => self.stop_duration_minutes.unwrap_or_default(),
            WaypointRole::Origin | WaypointRole::Destination => Minutes::ZERO,
        }
    }

    /// Km from the previous waypoint, zero when unset or negative.
    pub fn distance_from_previous(&self) -> f64 {
        self.distance_from_previous_km.unwrap_or(0.0).max(0.0)
    }

    /// Legacy departure time, falling back to the arrival time.
    pub fn departure_timestamp(&self) -> Option<Timestamp> {
        Timestamp::parse_opt(first_present(&self.departure_time, &self.arrival_time))
    }

    /// Legacy arrival time, falling back to the departure time.
    pub fn arrival_timestamp(&self) -> Option<Timestamp> {
        Timestamp::parse_opt(first_present(&self.arrival_time, &self.departure_time))
    }
}

fn first_present<'a>(preferred: &'a Option<String>, fallback: &'a Option<String>) -> Option<&'a str> {
    preferred
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| fallback.as_deref().filter(|value| !value.trim().is_empty()))
}

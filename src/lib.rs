//! Multi-stop bus route construction: ordered waypoints, structural edits,
//! validation, derived schedule fields, and the projection of a trip's
//! principal route onto the trip itself.

pub mod catalog;
pub mod config;
pub mod payload;
pub mod route;
pub mod shared;
pub mod trip;

pub mod prelude {
    pub use crate::catalog::RouteCatalog;
    pub use crate::config::{Config, DurationSource};
    pub use crate::payload::RoutePayload;
    pub use crate::route::{
        Direction, Route, RouteEditor, RouteIssue, Shift, Validation, Waypoint, WaypointRole,
        create_empty_route, create_empty_waypoint, validate_route,
    };
    pub use crate::shared::{Minutes, Timestamp};
    pub use crate::trip::{StopKind, Trip, TripStop, TripType, project_route_onto_trip};
}

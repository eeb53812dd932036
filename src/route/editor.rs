use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::Config,
    route::{Error, Route, Waypoint, WaypointRole, create_empty_waypoint},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shift {
    /// Towards the origin.
    Up,
    /// Towards the destination.
    Down,
}

impl Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shift::Up => write!(f, "up"),
            Shift::Down => write!(f, "down"),
        }
    }
}

/// Structural edits over a route. Every successful edit ends with
/// [`Route::refresh`], and a failed edit leaves the route untouched.
/// All indexes are 0-based.
#[derive(Debug, Default, Clone, Copy)]
pub struct RouteEditor {
    config: Config,
}

impl RouteEditor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Inserts an empty stop right before the destination.
    pub fn add_stop<'r>(&self, route: &'r mut Route) -> Result<&'r Waypoint, Error> {
        let position = route.waypoints.len().saturating_sub(1);
        self.insert_stop(route, position)
    }

    /// Inserts an empty stop at `position`, shifting everything from there on
    /// one place towards the destination. The origin and destination stay put,
    /// so `position` must lie in `1..=len - 1`.
    pub fn insert_stop<'r>(
        &self,
        route: &'r mut Route,
        position: usize,
    ) -> Result<&'r Waypoint, Error> {
        let len = route.waypoints.len();
        if len < 2 || position == 0 || position >= len {
            return Err(Error::InvalidInsertPosition { position, len });
        }
        route.waypoints.insert(
            position,
            create_empty_waypoint(WaypointRole::IntermediateStop, position),
        );
        debug!("Inserted stop at {position} in route {}", route.id);
        route.refresh(&self.config);
        Ok(&route.waypoints[position])
    }

    /// Removes the intermediate stop at `index` and hands it back.
    pub fn remove_stop(&self, route: &mut Route, index: usize) -> Result<Waypoint, Error> {
        check_intermediate(route, index)?;
        let removed = route.waypoints.remove(index);
        debug!("Removed stop {index} [{}] from route {}", removed.name, route.id);
        route.refresh(&self.config);
        Ok(removed)
    }

    /// Swaps the intermediate stop at `index` with its neighbour. The neighbour
    /// must itself be an intermediate stop.
    pub fn move_stop(
        &self,
        route: &mut Route,
        index: usize,
        shift: Shift,
    ) -> Result<(), Error> {
        check_intermediate(route, index)?;
        let target = match shift {
            Shift::Up => index.checked_sub(1),
            Shift::Down => Some(index + 1),
        }
        .filter(|target| {
            route
                .waypoints
                .get(*target)
                .is_some_and(|waypoint| waypoint.role.is_intermediate())
        })
        .ok_or(Error::CannotShift { index, shift })?;

        route.waypoints.swap(index, target);
        debug!("Moved stop {index} {shift} in route {}", route.id);
        route.refresh(&self.config);
        Ok(())
    }

    /// Applies `edit` to the waypoint at `index`, then refreshes.
    pub fn edit_waypoint<F>(&self, route: &mut Route, index: usize, edit: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Waypoint),
    {
        let len = route.waypoints.len();
        let waypoint = route
            .waypoints
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        edit(waypoint);
        route.refresh(&self.config);
        Ok(())
    }
}

// Intermediate by role and strictly between the first and last waypoint.
fn check_intermediate(route: &Route, index: usize) -> Result<(), Error> {
    let len = route.waypoints.len();
    let waypoint = route
        .waypoints
        .get(index)
        .ok_or(Error::IndexOutOfRange { index, len })?;
    if index == 0 || index + 1 >= len {
        return Err(Error::NotAnIntermediateStop(index));
    }
    match waypoint.role {
        WaypointRole::IntermediateStop => Ok(()),
        WaypointRole::Origin | WaypointRole::Destination => {
            Err(Error::NotAnIntermediateStop(index))
        }
    }
}

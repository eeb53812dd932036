use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::{
    route::{Direction, Route, RouteIssue, validate_route},
    shared::{self, Identifiable, fuzzy},
};

/// Minimum fuzzy score for a route to appear in name searches.
pub const SEARCH_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone)]
struct Entry {
    route: Route,
    normalized_name: String,
}

impl From<Route> for Entry {
    fn from(value: Route) -> Self {
        Self {
            normalized_name: fuzzy::normalize(&value.name),
            route: value,
        }
    }
}

impl Identifiable for Entry {
    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

/// The set of routes a company can attach to trips, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    entries: Vec<Entry>,
    lookup: HashMap<String, usize>,
}

impl RouteCatalog {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        routes.into_iter().for_each(|route| {
            self.insert(route);
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `route`, replacing and returning any route with the same id.
    pub fn insert(&mut self, route: Route) -> Option<Route> {
        let existing = self.lookup.get(&route.id).copied();
        match existing {
            Some(index) => {
                debug!("Replacing route {} in catalog", route.id);
                let previous = std::mem::replace(&mut self.entries[index], route.into());
                Some(previous.route)
            }
            None => {
                self.lookup.insert(route.id.clone(), self.entries.len());
                self.entries.push(route.into());
                None
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Route> {
        let index = self.lookup.remove(id)?;
        let entry = self.entries.remove(index);
        // Everything after the removed entry moved one slot down.
        self.lookup
            .values_mut()
            .filter(|i| **i > index)
            .for_each(|i| *i -= 1);
        Some(entry.route)
    }

    pub fn route_by_id(&self, id: &str) -> Option<&Route> {
        let index = self.lookup.get(id)?;
        Some(&self.entries[*index].route)
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.entries.iter().map(|entry| &entry.route)
    }

    pub fn routes_by_direction(&self, direction: Direction) -> Vec<&Route> {
        self.routes()
            .filter(|route| route.direction == direction)
            .collect()
    }

    /// Routes that can be picked for a trip, optionally restricted to one direction.
    pub fn active_routes(&self, direction: Option<Direction>) -> Vec<&Route> {
        self.routes()
            .filter(|route| route.active)
            .filter(|route| direction.is_none_or(|direction| route.direction == direction))
            .collect()
    }

    /// Accent-insensitive fuzzy search on the derived route names, best match first.
    pub fn search_routes_by_name(&self, needle: &str) -> Vec<&Route> {
        shared::search(needle, &self.entries, SEARCH_THRESHOLD)
            .into_iter()
            .map(|entry| &entry.route)
            .collect()
    }

    /// Validates every route in parallel and returns the invalid ones with
    /// their issues, in catalog order.
    pub fn validate_all(&self) -> Vec<(&str, Vec<RouteIssue>)> {
        let invalid: Vec<_> = self
            .entries
            .par_iter()
            .filter_map(|entry| {
                let validation = validate_route(&entry.route);
                if validation.is_valid() {
                    None
                } else {
                    Some((entry.route.id.as_str(), validation.errors))
                }
            })
            .collect();
        debug!(
            "Validated {} routes, {} invalid",
            self.entries.len(),
            invalid.len()
        );
        invalid
    }
}

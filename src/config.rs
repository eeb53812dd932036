use serde::{Deserialize, Serialize};

/// Where a route's `estimated_duration_minutes` comes from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DurationSource {
    /// Origin departure to destination arrival, read from the legacy absolute
    /// timestamps. Zero when either is missing.
    #[default]
    Timestamps,
    /// The destination's accumulated minutes from start.
    Accumulated,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub duration_source: DurationSource,
}

impl Config {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_duration_source(mut self, source: DurationSource) -> Self {
        self.duration_source = source;
        self
    }
}

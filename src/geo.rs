//! Destination-to-distance estimation.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::models::request::Destination;

/// Maps a destination to an estimated shipping distance in miles.
/// Swappable for a real geocoding/routing service without touching the
/// optimizer or plan assembly.
#[async_trait]
pub trait DistanceEstimator: Send + Sync {
    async fn estimate(&self, destination: &Destination) -> Result<f64>;
}

static STATE_DISTANCES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("CA", 800.0),
        ("NY", 1200.0),
        ("TX", 900.0),
        ("FL", 1100.0),
        ("IL", 700.0),
    ])
});

/// Static per-state lookup standing in for a real routing service. An
/// unknown region is not an error; it falls back to the default distance.
pub struct StaticDistanceTable {
    default_miles: f64,
}

impl StaticDistanceTable {
    pub fn new(default_miles: f64) -> Self {
        Self { default_miles }
    }
}

#[async_trait]
impl DistanceEstimator for StaticDistanceTable {
    async fn estimate(&self, destination: &Destination) -> Result<f64> {
        Ok(STATE_DISTANCES
            .get(destination.state.as_str())
            .copied()
            .unwrap_or(self.default_miles))
    }
}

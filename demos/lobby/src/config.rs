use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use lift_core::{BuildingConfig, Floor};
use lift_policy::PolicyKind;

/// Everything a run needs besides the event script.
///
/// ```json
/// {
///   "building": { "num_floors": 20, "num_cars": 4, "out_of_service": "clear" },
///   "policy": "least-loaded",
///   "ticks": 1000,
///   "seed": 7,
///   "initial_floors": [0, 0, 10, 19]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LobbyConfig {
    pub building:       BuildingConfig,
    pub policy:         PolicyKind,
    pub ticks:          u64,
    pub seed:           u64,
    pub hall_rate:      f64,
    pub car_rate:       f64,
    /// Extra ticks allowed after `ticks` for the fleet to finish.
    pub drain_limit:    u64,
    pub initial_floors: Option<Vec<Floor>>,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            building:       BuildingConfig::default(),
            policy:         PolicyKind::default(),
            ticks:          200,
            seed:           42,
            hall_rate:      0.3,
            car_rate:       0.05,
            drain_limit:    1_000,
            initial_floors: None,
        }
    }
}

impl LobbyConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn apply_overrides(
        &mut self,
        floors: Option<u32>,
        cars:   Option<u32>,
        policy: Option<PolicyKind>,
        ticks:  Option<u64>,
        seed:   Option<u64>,
    ) {
        if let Some(n) = floors {
            self.building.num_floors = n;
        }
        if let Some(n) = cars {
            self.building.num_cars = n;
        }
        if let Some(p) = policy {
            self.policy = p;
        }
        if let Some(t) = ticks {
            self.ticks = t;
        }
        if let Some(s) = seed {
            self.seed = s;
        }
    }
}

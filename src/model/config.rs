use serde::{Deserialize, Serialize};

/// Initial attribute values used when a health component is attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthConfig {
    /// Starting health, clamped into `[min_health, max_health]`.
    pub health: f64,
    /// Lower bound. Unbounded unless set.
    #[serde(with = "super::bound::lower")]
    pub min_health: f64,
    /// Upper bound.
    #[serde(with = "super::bound::upper")]
    pub max_health: f64,
}

impl HealthConfig {
    pub fn new(health: f64, min_health: f64, max_health: f64) -> Self {
        Self {
            health,
            min_health,
            max_health,
        }
    }

    /// Start at `health`, keeping the default bounds.
    pub fn with_health(health: f64) -> Self {
        Self {
            health,
            ..Self::default()
        }
    }

    /// Parse a JSON object. Missing fields keep their defaults:
    /// `{"maxHealth": 50}` gives health 1, no lower bound, max 50.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            health: 1.0,
            min_health: f64::NEG_INFINITY,
            max_health: 100.0,
        }
    }
}

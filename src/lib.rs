pub mod ecs;
pub mod health;
pub mod host;
pub mod model;
#[cfg(test)]
mod testutil;

pub use health::{HealthComponent, HealthSnapshot, Population, attach};
pub use host::{DataManager, EventEmitter, GameObject, Host, ListenerId};
pub use model::{
    BatchError, EventKind, HEALTH, HealthConfig, HealthError, HealthEvent, MAX_HEALTH, MIN_HEALTH,
};

//! Health on `bevy_ecs` entities.
//!
//! [`EntityHost`] adapts an entity of a `World` to the [`Host`](crate::host::Host)
//! surface, so every [`HealthComponent`](crate::health::HealthComponent)
//! operation works on it. Notifications become [`HealthMessage`]s that systems
//! read on the next [`HealthTick`].

pub mod app;
pub mod components;
pub mod events;
pub mod host;
pub mod plugin;
pub mod schedule;
pub mod systems;
#[cfg(test)]
pub mod test_helpers;

pub use app::{build_health_app, build_health_app_with_executor};
pub use components::{Attributes, Label};
pub use events::HealthMessage;
pub use host::{EntityHost, census_entities, dump_entities, for_each_entity, spawn_with_health};
pub use plugin::HealthPlugin;
pub use schedule::{HealthPhase, HealthTick, configure_health_schedule};
pub use systems::track_population;

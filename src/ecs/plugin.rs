use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoScheduleConfigs;

use super::schedule::{HealthPhase, HealthTick};
use super::systems::track_population;
use crate::health::Population;

/// Installs the [`Population`] resource and keeps it current from
/// [`HealthMessage`](super::HealthMessage)s each `HealthTick`.
///
/// The tally starts empty; seed it with
/// [`census_entities`](super::census_entities) after spawning.
pub struct HealthPlugin;

impl Plugin for HealthPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Population>();
        app.add_systems(HealthTick, track_population.in_set(HealthPhase::Reactions));
    }
}

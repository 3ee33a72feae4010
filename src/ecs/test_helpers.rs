use bevy_app::App;

use crate::ecs::schedule::HealthTick;

/// Run `n` passes of the `HealthTick` schedule.
pub fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(HealthTick);
    }
}

use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::events::HealthMessage;
use super::schedule::{HealthPhase, configure_health_schedule};

/// Build a headless Bevy app with the `HealthTick` schedule and the
/// [`HealthMessage`] type registered. Add [`HealthPlugin`](super::HealthPlugin)
/// for population tracking.
///
/// ```no_run
/// # use vitals::ecs::{build_health_app, HealthTick};
/// let mut app = build_health_app();
/// app.world_mut().run_schedule(HealthTick);
/// ```
pub fn build_health_app() -> App {
    build_health_app_with_executor(ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app with a specific executor kind.
pub fn build_health_app_with_executor(executor: ExecutorKind) -> App {
    let mut app = App::empty();

    MessageRegistry::register_message::<HealthMessage>(app.world_mut());

    let mut schedule = configure_health_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(HealthPhase::PreUpdate));
    app.add_schedule(schedule);
    app
}

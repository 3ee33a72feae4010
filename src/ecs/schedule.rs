use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

/// Schedule label for one health update pass.
/// Run manually via `app.world_mut().run_schedule(HealthTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct HealthTick;

/// Ordered phases within each tick: PreUpdate < Update < Reactions.
///
/// Systems that change health go in `Update`; systems that react to
/// [`HealthMessage`](super::HealthMessage)s go in `Reactions`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthPhase {
    PreUpdate,
    Update,
    Reactions,
}

/// Build a configured `HealthTick` schedule with phase ordering.
pub fn configure_health_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(HealthTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            HealthPhase::PreUpdate,
            HealthPhase::Update,
            HealthPhase::Reactions,
        )
            .chain(),
    );
    schedule
}

use bevy_ecs::message::MessageReader;
use bevy_ecs::system::ResMut;

use super::events::HealthMessage;
use crate::health::Population;
use crate::model::HealthEvent;

/// Keep [`Population`] current from `die`/`revive` messages.
pub fn track_population(
    mut messages: MessageReader<HealthMessage>,
    mut population: ResMut<Population>,
) {
    for message in messages.read() {
        if matches!(message.event, HealthEvent::Die | HealthEvent::Revive) {
            population.record(&message.event);
            tracing::debug!(
                entity = %message.entity,
                event = message.event.name(),
                alive = population.alive,
                dead = population.dead,
                "population changed"
            );
        }
    }
}

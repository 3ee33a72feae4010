use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::HealthEvent;

/// A health notification from an ECS entity.
///
/// Written by [`EntityHost`](super::EntityHost) in the same order the component
/// emits, and read by systems on the next schedule run.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct HealthMessage {
    pub entity: Entity,
    pub event: HealthEvent,
}

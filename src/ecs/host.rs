use std::borrow::Cow;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use super::components::{Attributes, Label};
use super::events::HealthMessage;
use crate::health::{HealthSnapshot, Population, attach};
use crate::host::{DataManager, Host};
use crate::model::{
    BatchError, HEALTH, HealthConfig, HealthError, HealthEvent, MAX_HEALTH, MIN_HEALTH,
};

/// A [`Host`] view of one entity in a `World`.
///
/// Attributes are stored in the entity's [`Attributes`] component (inserted on
/// first write). Emitted events are written as [`HealthMessage`]s; register the
/// message type (see [`build_health_app`](super::build_health_app)) or they are
/// dropped with a warning.
pub struct EntityHost<'w> {
    world: &'w mut World,
    entity: Entity,
}

impl<'w> EntityHost<'w> {
    pub fn new(world: &'w mut World, entity: Entity) -> Self {
        Self { world, entity }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    fn exists(&self) -> bool {
        self.world.get_entity(self.entity).is_ok()
    }
}

impl Host for EntityHost<'_> {
    fn name(&self) -> Cow<'_, str> {
        match self.world.get::<Label>(self.entity) {
            Some(label) => Cow::Borrowed(label.0.as_str()),
            None => Cow::Owned(self.entity.to_string()),
        }
    }

    fn get_data(&self, key: &str) -> Option<f64> {
        self.world
            .get::<Attributes>(self.entity)
            .and_then(|attributes| attributes.0.get(key))
    }

    fn set_data(&mut self, key: &str, value: f64) -> Result<(), HealthError> {
        let name = self.name().into_owned();
        let Ok(mut entity) = self.world.get_entity_mut(self.entity) else {
            tracing::warn!(entity = %name, key, "write to despawned entity");
            return Err(HealthError::HostGone { name });
        };

        if let Some(mut attributes) = entity.get_mut::<Attributes>() {
            attributes.0.set(key, value);
            return Ok(());
        }
        let mut data = DataManager::new();
        data.set(key, value);
        entity.insert(Attributes(data));
        Ok(())
    }

    fn emit(&mut self, event: HealthEvent) -> Result<(), HealthError> {
        if !self.exists() {
            return Err(HealthError::HostGone {
                name: self.name().into_owned(),
            });
        }
        let message = HealthMessage {
            entity: self.entity,
            event,
        };
        match self.world.get_resource_mut::<Messages<HealthMessage>>() {
            Some(mut messages) => {
                messages.write(message);
            }
            None => tracing::warn!(
                entity = %self.entity,
                event = event.name(),
                "HealthMessage not registered; event dropped"
            ),
        }
        Ok(())
    }
}

/// Spawn a labelled entity with health attached.
pub fn spawn_with_health(
    world: &mut World,
    label: impl Into<String>,
    config: HealthConfig,
) -> Result<Entity, HealthError> {
    let entity = world
        .spawn((Label(label.into()), Attributes::default()))
        .id();
    attach(&mut EntityHost::new(world, entity), config)?;
    Ok(entity)
}

/// Run `op` against each entity in order. Every entity is visited; failures
/// are collected by index into the returned error.
pub fn for_each_entity<F>(
    world: &mut World,
    entities: &[Entity],
    mut op: F,
) -> Result<(), BatchError>
where
    F: FnMut(&mut EntityHost<'_>) -> Result<(), HealthError>,
{
    let mut failures = Vec::new();
    for (index, &entity) in entities.iter().enumerate() {
        let mut host = EntityHost::new(world, entity);
        if let Err(err) = op(&mut host) {
            failures.push((index, err));
        }
    }
    BatchError::check(entities.len(), failures)
}

/// Snapshot each entity, in order.
pub fn dump_entities(
    world: &mut World,
    entities: &[Entity],
) -> Result<Vec<HealthSnapshot>, HealthError> {
    entities
        .iter()
        .map(|&entity| HealthSnapshot::capture(&EntityHost::new(world, entity)))
        .collect()
}

/// Count every entity in `world` that carries health attributes.
pub fn census_entities(world: &mut World) -> Population {
    let mut population = Population::new();
    let mut query = world.query::<&Attributes>();
    for attributes in query.iter(world) {
        let data = &attributes.0;
        if !(data.has(MIN_HEALTH) && data.has(MAX_HEALTH)) {
            continue;
        }
        match data.get(HEALTH) {
            Some(health) if health > 0.0 => population.alive += 1,
            Some(_) => population.dead += 1,
            None => {}
        }
    }
    population
}

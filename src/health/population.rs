use std::cell::RefCell;
use std::rc::Rc;

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

use crate::host::{GameObject, Host, ListenerId};
use crate::model::{EventKind, HealthEvent};

use super::component::HealthComponent;

/// Running tally of living and dead entities, kept current from `die` and
/// `revive` events.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    pub alive: u32,
    pub dead: u32,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the current state of `objs`. Unattached entities are skipped.
    pub fn census<H: Host>(objs: &[H]) -> Self {
        let mut population = Self::new();
        for obj in objs {
            match obj.is_alive() {
                Ok(true) => population.alive += 1,
                Ok(false) => population.dead += 1,
                Err(_) => {}
            }
        }
        population
    }

    pub fn total(&self) -> u32 {
        self.alive + self.dead
    }

    /// Apply a transition event. Other events are ignored.
    pub fn record(&mut self, event: &HealthEvent) {
        match event {
            HealthEvent::Die => {
                self.alive = self.alive.saturating_sub(1);
                self.dead += 1;
            }
            HealthEvent::Revive => {
                self.dead = self.dead.saturating_sub(1);
                self.alive += 1;
            }
            _ => {}
        }
    }

    /// Subscribe `population` to `obj`'s transitions. The entity itself is
    /// not counted; seed the tally with [`Population::census`].
    pub fn watch(population: &Rc<RefCell<Self>>, obj: &mut GameObject) -> [ListenerId; 2] {
        [EventKind::Die, EventKind::Revive].map(|kind| {
            let population = Rc::clone(population);
            obj.on(kind, move |_, event| population.borrow_mut().record(event))
        })
    }
}

use std::borrow::Cow;

use super::data::DataManager;
use super::emitter::{EventEmitter, ListenerId, dispatch};
use super::Host;
use crate::model::{EventKind, HealthError, HealthEvent};

/// A named in-memory entity with attribute storage and its own event emitter.
#[derive(Debug, Default)]
pub struct GameObject {
    pub name: String,
    data: DataManager,
    events: EventEmitter<GameObject>,
}

impl GameObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: DataManager::new(),
            events: EventEmitter::new(),
        }
    }

    pub fn data(&self) -> &DataManager {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut DataManager {
        &mut self.data
    }

    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: Fn(&mut GameObject, &HealthEvent) + 'static,
    {
        self.events.on(kind, listener)
    }

    pub fn once<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: Fn(&mut GameObject, &HealthEvent) + 'static,
    {
        self.events.once(kind, listener)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.events.listener_count(kind)
    }
}

impl Host for GameObject {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn get_data(&self, key: &str) -> Option<f64> {
        self.data.get(key)
    }

    fn set_data(&mut self, key: &str, value: f64) -> Result<(), HealthError> {
        self.data.set(key, value);
        Ok(())
    }

    fn emit(&mut self, event: HealthEvent) -> Result<(), HealthError> {
        let listeners = self.events.prepare(event.kind());
        dispatch(self, listeners, &event);
        Ok(())
    }
}

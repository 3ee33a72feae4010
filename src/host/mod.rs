//! The capability surface a health component needs from the entity it is
//! attached to, plus an in-memory entity that provides it.

pub mod data;
pub mod emitter;
pub mod game_object;

use std::borrow::Cow;

pub use data::DataManager;
pub use emitter::{EventEmitter, Listener, ListenerId, dispatch};
pub use game_object::GameObject;

use crate::model::{HealthError, HealthEvent};

/// An entity that stores named attributes and emits events synchronously.
///
/// `emit` must call every subscriber before returning.
pub trait Host {
    /// Display name, used by diagnostics and error messages.
    fn name(&self) -> Cow<'_, str>;

    fn get_data(&self, key: &str) -> Option<f64>;

    fn set_data(&mut self, key: &str, value: f64) -> Result<(), HealthError>;

    fn emit(&mut self, event: HealthEvent) -> Result<(), HealthError>;
}

impl<H: Host + ?Sized> Host for &mut H {
    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }

    fn get_data(&self, key: &str) -> Option<f64> {
        (**self).get_data(key)
    }

    fn set_data(&mut self, key: &str, value: f64) -> Result<(), HealthError> {
        (**self).set_data(key, value)
    }

    fn emit(&mut self, event: HealthEvent) -> Result<(), HealthError> {
        (**self).emit(event)
    }
}

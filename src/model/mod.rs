#[macro_use]
mod macros;

pub mod bound;
pub mod config;
pub mod error;
pub mod event;

pub use config::HealthConfig;
pub use error::{BatchError, HealthError};
pub use event::{EventKind, HealthEvent};

/// Attribute key holding current health.
pub const HEALTH: &str = "health";
/// Attribute key holding the lower health bound.
pub const MIN_HEALTH: &str = "minHealth";
/// Attribute key holding the upper health bound.
pub const MAX_HEALTH: &str = "maxHealth";

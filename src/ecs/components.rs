use bevy_ecs::component::Component;

use crate::host::DataManager;

/// Named attribute storage for an ECS entity. Health attributes live here.
#[derive(Component, Debug, Clone, Default)]
pub struct Attributes(pub DataManager);

/// Display name used in diagnostics. Entities without one are shown by id.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Label(pub String);

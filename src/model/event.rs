use serde::{Deserialize, Serialize};

/// Names of the events a health component emits through its host.
///
/// These strings are the public vocabulary listeners subscribe to; renaming one
/// breaks every consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventKind {
    HealthChange,
    Damage,
    Heal,
    Die,
    Revive,
}

string_enum!(EventKind {
    HealthChange => "healthchange",
    Damage => "damage",
    Heal => "heal",
    Die => "die",
    Revive => "revive",
});

/// Payload of a health notification. The emitting entity is not part of the
/// payload; emitters hand it to listeners alongside the event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum HealthEvent {
    /// Stored health moved by `change` (signed) and now equals `health`.
    HealthChange {
        change: f64,
        health: f64,
        #[serde(with = "super::bound::lower")]
        min_health: f64,
        #[serde(with = "super::bound::upper")]
        max_health: f64,
    },
    /// Health decreased by `amount` (always positive).
    Damage { amount: f64 },
    /// Health increased by `amount` (always positive).
    Heal { amount: f64 },
    /// Health crossed from above zero to zero or below.
    Die,
    /// Health crossed from zero or below to above zero.
    Revive,
}

impl HealthEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HealthEvent::HealthChange { .. } => EventKind::HealthChange,
            HealthEvent::Damage { .. } => EventKind::Damage,
            HealthEvent::Heal { .. } => EventKind::Heal,
            HealthEvent::Die => EventKind::Die,
            HealthEvent::Revive => EventKind::Revive,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}

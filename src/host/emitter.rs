use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::model::{EventKind, HealthEvent};

/// A subscriber callback. Receives the emitting entity and the event.
pub type Listener<T> = Rc<dyn Fn(&mut T, &HealthEvent)>;

/// Handle returned by [`EventEmitter::on`] and [`EventEmitter::once`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Registration<T> {
    id: ListenerId,
    once: bool,
    listener: Listener<T>,
}

/// Synchronous, in-process event fan-out for entities of type `T`.
///
/// The emitter lives inside its entity, so it cannot call listeners itself while
/// the entity is borrowed. An entity emits in two steps: [`EventEmitter::prepare`]
/// returns a snapshot of the listeners for an event kind (dropping `once`
/// listeners from the registry), then [`dispatch`] runs that snapshot against
/// the entity. Listeners may freely re-enter the entity; nested emissions take
/// their own snapshot.
pub struct EventEmitter<T> {
    listeners: BTreeMap<EventKind, Vec<Registration<T>>>,
    next_id: u64,
}

impl<T> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            listeners: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Subscribe to every future `kind` event.
    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: Fn(&mut T, &HealthEvent) + 'static,
    {
        self.register(kind, false, Rc::new(listener))
    }

    /// Subscribe to the next `kind` event only.
    pub fn once<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: Fn(&mut T, &HealthEvent) + 'static,
    {
        self.register(kind, true, Rc::new(listener))
    }

    /// Unsubscribe. Returns `false` when `id` was not registered (already
    /// removed, or a `once` listener that already ran).
    pub fn off(&mut self, id: ListenerId) -> bool {
        let mut removed = false;
        for registrations in self.listeners.values_mut() {
            let before = registrations.len();
            registrations.retain(|r| r.id != id);
            removed |= registrations.len() != before;
        }
        self.listeners.retain(|_, registrations| !registrations.is_empty());
        removed
    }

    /// Drop every listener for `kind`.
    pub fn remove_all(&mut self, kind: EventKind) {
        self.listeners.remove(&kind);
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Snapshot the listeners for `kind` in subscription order, unregistering
    /// the `once` listeners among them.
    pub fn prepare(&mut self, kind: EventKind) -> Vec<Listener<T>> {
        let Some(registrations) = self.listeners.get_mut(&kind) else {
            return Vec::new();
        };
        let snapshot = registrations
            .iter()
            .map(|r| Rc::clone(&r.listener))
            .collect();
        registrations.retain(|r| !r.once);
        if registrations.is_empty() {
            self.listeners.remove(&kind);
        }
        snapshot
    }

    fn register(&mut self, kind: EventKind, once: bool, listener: Listener<T>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(kind).or_default().push(Registration {
            id,
            once,
            listener,
        });
        id
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: BTreeMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(kind, registrations)| (kind.as_str(), registrations.len()))
            .collect();
        f.debug_struct("EventEmitter")
            .field("listeners", &counts)
            .finish()
    }
}

/// Run a listener snapshot against `target`, in order, blocking until all return.
pub fn dispatch<T>(target: &mut T, listeners: Vec<Listener<T>>, event: &HealthEvent) {
    for listener in listeners {
        (*listener)(target, event);
    }
}

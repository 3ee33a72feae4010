use std::cell::RefCell;
use std::rc::Rc;

use crate::health::attach;
use crate::host::GameObject;
use crate::model::{EventKind, HealthConfig, HealthEvent};

/// A `GameObject` named "sprite" with default health attached.
pub fn sprite() -> GameObject {
    sprite_with(HealthConfig::default())
}

pub fn sprite_with(config: HealthConfig) -> GameObject {
    named_with("sprite", config)
}

pub fn named_with(name: &str, config: HealthConfig) -> GameObject {
    let mut obj = GameObject::new(name);
    attach(&mut obj, config).unwrap();
    obj
}

/// Subscribe to every event kind and collect events in emission order.
pub fn record_events(obj: &mut GameObject) -> Rc<RefCell<Vec<HealthEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for kind in EventKind::ALL {
        let log = Rc::clone(&log);
        obj.on(*kind, move |_, event| log.borrow_mut().push(*event));
    }
    log
}

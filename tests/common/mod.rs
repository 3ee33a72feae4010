use std::cell::RefCell;
use std::rc::Rc;

use vitals::{EventKind, GameObject, HealthConfig, HealthEvent, attach};

pub fn elf(name: &str, config: HealthConfig) -> GameObject {
    let mut obj = GameObject::new(name);
    attach(&mut obj, config).unwrap();
    obj
}

/// Subscribe to every event kind; events land in emission order.
pub fn record(obj: &mut GameObject) -> Rc<RefCell<Vec<HealthEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for kind in EventKind::ALL {
        let log = Rc::clone(&log);
        obj.on(*kind, move |_, event| log.borrow_mut().push(*event));
    }
    log
}

pub fn names(log: &[HealthEvent]) -> Vec<&'static str> {
    log.iter().map(HealthEvent::name).collect()
}

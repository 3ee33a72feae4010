//! Health operations broadcast over a collection of entities.
//!
//! Each entity is updated in full, in slice order, before the next one. A
//! failure on one entity does not stop the others; failures are collected into
//! a [`BatchError`] once every entity has been visited. On success the input
//! slice is handed back for chaining.

use crate::host::Host;
use crate::model::{BatchError, HealthError};

use super::component::HealthComponent;

/// Apply `op` to every host in order, collecting failures by index.
pub fn each<'a, H, I, F>(hosts: I, mut op: F) -> Result<(), BatchError>
where
    H: Host + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut H>,
    F: FnMut(&mut H) -> Result<(), HealthError>,
{
    let mut total = 0;
    let mut failures = Vec::new();
    for (index, host) in hosts.into_iter().enumerate() {
        total += 1;
        if let Err(err) = op(host) {
            failures.push((index, err));
        }
    }
    BatchError::check(total, failures)
}

pub fn damage<H: Host>(
    objs: &mut [H],
    amount: Option<f64>,
    silent: bool,
) -> Result<&mut [H], BatchError> {
    each(objs.iter_mut(), |obj| obj.damage(amount, silent))?;
    Ok(objs)
}

pub fn heal<H: Host>(
    objs: &mut [H],
    amount: Option<f64>,
    silent: bool,
) -> Result<&mut [H], BatchError> {
    each(objs.iter_mut(), |obj| obj.heal(amount, silent))?;
    Ok(objs)
}

pub fn kill<H: Host>(objs: &mut [H], silent: bool) -> Result<&mut [H], BatchError> {
    each(objs.iter_mut(), |obj| obj.kill(silent))?;
    Ok(objs)
}

pub fn revive<H: Host>(
    objs: &mut [H],
    health: Option<f64>,
    silent: bool,
) -> Result<&mut [H], BatchError> {
    each(objs.iter_mut(), |obj| obj.revive(health, silent))?;
    Ok(objs)
}

pub fn revive_at_max_health<H: Host>(
    objs: &mut [H],
    silent: bool,
) -> Result<&mut [H], BatchError> {
    each(objs.iter_mut(), |obj| obj.revive_at_max_health(silent))?;
    Ok(objs)
}

pub fn set_health<H: Host>(
    objs: &mut [H],
    health: f64,
    min_health: Option<f64>,
    max_health: Option<f64>,
    silent: bool,
) -> Result<&mut [H], BatchError> {
    each(objs.iter_mut(), |obj| {
        obj.set_health(health, min_health, max_health, silent)
    })?;
    Ok(objs)
}

pub fn set_min_health<H: Host>(
    objs: &mut [H],
    amount: f64,
    silent: bool,
) -> Result<&mut [H], BatchError> {
    each(objs.iter_mut(), |obj| obj.set_min_health(amount, silent))?;
    Ok(objs)
}

pub fn set_max_health<H: Host>(
    objs: &mut [H],
    amount: f64,
    silent: bool,
) -> Result<&mut [H], BatchError> {
    each(objs.iter_mut(), |obj| obj.set_max_health(amount, silent))?;
    Ok(objs)
}

/// Entities with health above zero. Unattached entities are not counted.
pub fn count_alive<H: Host>(objs: &[H]) -> usize {
    objs.iter().filter(|obj| obj.is_alive() == Ok(true)).count()
}

/// Entities with health at or below zero. Unattached entities are not counted.
pub fn count_dead<H: Host>(objs: &[H]) -> usize {
    objs.iter().filter(|obj| obj.is_dead() == Ok(true)).count()
}

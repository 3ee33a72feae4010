use crate::host::Host;
use crate::model::{HEALTH, HealthConfig, HealthError, HealthEvent, MAX_HEALTH, MIN_HEALTH};

/// Initialize the health attributes on `host` without emitting events.
///
/// Bounds are written first (a lower bound above the upper one is lowered to
/// it), then the starting health clamped into them. Attaching again resets the
/// attributes, also silently.
pub fn attach<H: Host + ?Sized>(host: &mut H, config: HealthConfig) -> Result<(), HealthError> {
    let defaults = HealthConfig::default();
    let max_health = if config.max_health.is_nan() {
        defaults.max_health
    } else {
        config.max_health
    };
    let min_health = if config.min_health.is_nan() {
        defaults.min_health
    } else {
        config.min_health.min(max_health)
    };
    let health = if config.health.is_nan() {
        defaults.health
    } else {
        config.health
    };
    let health = clamp(health, min_health, max_health);

    host.set_data(MAX_HEALTH, max_health)?;
    host.set_data(MIN_HEALTH, min_health)?;
    host.set_data(HEALTH, health)?;
    tracing::debug!(entity = %host.name(), health, min_health, max_health, "attached health");
    Ok(())
}

/// Whether `host` carries all three health attributes.
pub fn is_attached<H: Host + ?Sized>(host: &H) -> bool {
    [HEALTH, MIN_HEALTH, MAX_HEALTH]
        .iter()
        .all(|key| host.get_data(key).is_some())
}

/// Constrain `value` to `[min, max]`. Callers keep `min <= max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

fn read<H: Host + ?Sized>(host: &H, key: &str) -> Result<f64, HealthError> {
    host.get_data(key)
        .ok_or_else(|| HealthError::MissingAttribute {
            name: host.name().into_owned(),
            key: key.to_string(),
        })
}

/// Health operations available on every [`Host`].
///
/// All mutators funnel through [`HealthComponent::set_health`], which clamps,
/// stores and then (unless `silent`) emits, in order: `healthchange`; `heal`
/// or `damage`; then `die` or `revive` when the value crossed zero.
pub trait HealthComponent: Host {
    fn health(&self) -> Result<f64, HealthError> {
        read(self, HEALTH)
    }

    fn min_health(&self) -> Result<f64, HealthError> {
        read(self, MIN_HEALTH)
    }

    fn max_health(&self) -> Result<f64, HealthError> {
        read(self, MAX_HEALTH)
    }

    /// `health / max_health`, unclamped. Zero when `max_health` is zero.
    fn health_frac(&self) -> Result<f64, HealthError> {
        let max_health = self.max_health()?;
        if max_health == 0.0 {
            return Ok(0.0);
        }
        Ok(self.health()? / max_health)
    }

    fn is_alive(&self) -> Result<bool, HealthError> {
        Ok(self.health()? > 0.0)
    }

    fn is_dead(&self) -> Result<bool, HealthError> {
        Ok(self.health()? <= 0.0)
    }

    /// Set health to `health` clamped into the bounds, optionally replacing
    /// the bounds first (silently). A request that leaves the stored value
    /// unchanged, or a NaN request, does nothing.
    fn set_health(
        &mut self,
        health: f64,
        min_health: Option<f64>,
        max_health: Option<f64>,
        silent: bool,
    ) -> Result<(), HealthError> {
        let current_max = self.max_health()?;
        match (min_health, max_health) {
            (Some(min), Some(max)) if min > current_max => {
                self.set_max_health(max, true)?;
                self.set_min_health(min, true)?;
            }
            _ => {
                if let Some(min) = min_health {
                    self.set_min_health(min, true)?;
                }
                if let Some(max) = max_health {
                    self.set_max_health(max, true)?;
                }
            }
        }

        let min_health = self.min_health()?;
        let max_health = self.max_health()?;
        let prev_health = self.health()?;

        if health.is_nan() {
            return Ok(());
        }
        let new_health = clamp(health, min_health, max_health);
        if new_health == prev_health {
            return Ok(());
        }

        self.set_data(HEALTH, new_health)?;
        tracing::trace!(entity = %self.name(), prev_health, new_health, silent, "health changed");

        if silent {
            return Ok(());
        }

        let change = new_health - prev_health;
        self.emit(HealthEvent::HealthChange {
            change,
            health: new_health,
            min_health,
            max_health,
        })?;

        if change > 0.0 {
            self.emit(HealthEvent::Heal { amount: change })?;
        } else {
            self.emit(HealthEvent::Damage { amount: -change })?;
        }

        if prev_health > 0.0 && new_health <= 0.0 {
            tracing::debug!(entity = %self.name(), "died");
            self.emit(HealthEvent::Die)?;
        } else if prev_health <= 0.0 && new_health > 0.0 {
            tracing::debug!(entity = %self.name(), "revived");
            self.emit(HealthEvent::Revive)?;
        }

        Ok(())
    }

    /// Replace the lower bound (capped at the current upper bound) and pull
    /// health up to it if needed.
    fn set_min_health(&mut self, amount: f64, silent: bool) -> Result<(), HealthError> {
        if amount.is_nan() {
            return Ok(());
        }
        let min_health = amount.min(self.max_health()?);
        self.set_data(MIN_HEALTH, min_health)?;

        let health = self.health()?;
        if health < min_health {
            self.set_health(health, None, None, silent)?;
        }
        Ok(())
    }

    /// Replace the upper bound (raised to at least the current lower bound)
    /// and pull health down to it if needed.
    fn set_max_health(&mut self, amount: f64, silent: bool) -> Result<(), HealthError> {
        if amount.is_nan() {
            return Ok(());
        }
        let max_health = amount.max(self.min_health()?);
        self.set_data(MAX_HEALTH, max_health)?;

        let health = self.health()?;
        if health > max_health {
            self.set_health(health, None, None, silent)?;
        }
        Ok(())
    }

    /// Lower health by `amount` (1 when `None` or NaN). `Some(0.0)` does nothing.
    fn damage(&mut self, amount: Option<f64>, silent: bool) -> Result<(), HealthError> {
        let Some(amount) = effective_amount(amount) else {
            return Ok(());
        };
        let health = self.health()?;
        self.set_health(health - amount, None, None, silent)
    }

    /// Raise health by `amount` (1 when `None` or NaN). `Some(0.0)` does nothing.
    fn heal(&mut self, amount: Option<f64>, silent: bool) -> Result<(), HealthError> {
        let Some(amount) = effective_amount(amount) else {
            return Ok(());
        };
        let health = self.health()?;
        self.set_health(health + amount, None, None, silent)
    }

    /// Drop a living entity to zero health (or its lower bound, if that is
    /// above zero). Dead entities are left alone.
    fn kill(&mut self, silent: bool) -> Result<(), HealthError> {
        if self.is_alive()? {
            self.set_health(0.0, None, None, silent)?;
        }
        Ok(())
    }

    /// Bring a dead entity back at `health` (1 when `None`, zero or NaN).
    /// Living entities are left alone.
    fn revive(&mut self, health: Option<f64>, silent: bool) -> Result<(), HealthError> {
        if self.is_dead()? {
            let health = match health {
                Some(h) if h != 0.0 && !h.is_nan() => h,
                _ => 1.0,
            };
            self.set_health(health, None, None, silent)?;
        }
        Ok(())
    }

    fn revive_at_max_health(&mut self, silent: bool) -> Result<(), HealthError> {
        let max_health = self.max_health()?;
        self.revive(Some(max_health), silent)
    }
}

impl<T: Host + ?Sized> HealthComponent for T {}

/// `None` for an explicit zero, the amount otherwise, 1 when absent or NaN.
fn effective_amount(amount: Option<f64>) -> Option<f64> {
    match amount {
        Some(a) if a == 0.0 => None,
        Some(a) if !a.is_nan() => Some(a),
        _ => Some(1.0),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::host::GameObject;
    use crate::model::EventKind;
    use crate::testutil::{record_events, sprite, sprite_with};

    #[test]
    fn attach_uses_defaults() {
        let obj = sprite();
        assert_eq!(obj.health().unwrap(), 1.0);
        assert_eq!(obj.min_health().unwrap(), f64::NEG_INFINITY);
        assert_eq!(obj.max_health().unwrap(), 100.0);
        assert!(is_attached(&obj));
    }

    #[test]
    fn attach_clamps_initial_health_and_bounds() {
        let obj = sprite_with(HealthConfig::new(500.0, 10.0, 50.0));
        assert_eq!(obj.health().unwrap(), 50.0);

        let obj = sprite_with(HealthConfig::new(5.0, 80.0, 50.0));
        assert_eq!(obj.min_health().unwrap(), 50.0);
        assert_eq!(obj.health().unwrap(), 50.0);
    }

    #[test]
    fn attach_is_silent() {
        let mut obj = GameObject::new("quiet");
        let log = record_events(&mut obj);
        attach(&mut obj, HealthConfig::with_health(40.0)).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn reading_unattached_host_fails() {
        let obj = GameObject::new("bare");
        assert!(!is_attached(&obj));
        assert_eq!(
            obj.health(),
            Err(HealthError::MissingAttribute {
                name: "bare".to_string(),
                key: "health".to_string(),
            })
        );
    }

    #[test]
    fn mutating_unattached_host_fails() {
        let mut obj = GameObject::new("bare");
        assert!(obj.damage(None, false).is_err());
        assert!(obj.kill(false).is_err());
    }

    #[test]
    fn health_frac_is_ratio_to_max() {
        let obj = sprite_with(HealthConfig::new(25.0, 0.0, 50.0));
        assert_eq!(obj.health_frac().unwrap(), 0.5);
    }

    #[test]
    fn health_frac_with_zero_max_is_zero() {
        let obj = sprite_with(HealthConfig::new(0.0, f64::NEG_INFINITY, 0.0));
        assert_eq!(obj.health_frac().unwrap(), 0.0);
    }

    #[test]
    fn health_frac_is_not_clamped() {
        let obj = sprite_with(HealthConfig::new(-50.0, f64::NEG_INFINITY, 100.0));
        assert_eq!(obj.health_frac().unwrap(), -0.5);
    }

    #[test]
    fn alive_and_dead_are_exclusive() {
        let mut obj = sprite();
        for health in [5.0, 0.0, -3.0] {
            obj.set_health(health, None, None, true).unwrap();
            assert_ne!(obj.is_alive().unwrap(), obj.is_dead().unwrap());
        }
        obj.set_health(0.0, None, None, true).unwrap();
        assert!(obj.is_dead().unwrap());
    }

    #[test]
    fn set_health_emits_change_then_direction() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.set_health(10.0, None, None, false).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                HealthEvent::HealthChange {
                    change: 9.0,
                    health: 10.0,
                    min_health: f64::NEG_INFINITY,
                    max_health: 100.0,
                },
                HealthEvent::Heal { amount: 9.0 },
            ]
        );
    }

    #[test]
    fn set_health_above_max_reports_actual_change() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.set_health(1000.0, None, None, false).unwrap();
        assert_eq!(obj.health().unwrap(), 100.0);
        assert_eq!(log.borrow()[1], HealthEvent::Heal { amount: 99.0 });
    }

    #[test]
    fn set_health_to_current_value_is_a_no_op() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.set_health(1.0, None, None, false).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn clamped_request_equal_to_current_is_a_no_op() {
        let mut obj = sprite_with(HealthConfig::new(100.0, 0.0, 100.0));
        let log = record_events(&mut obj);
        obj.set_health(150.0, None, None, false).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn nan_request_is_ignored() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.set_health(f64::NAN, None, None, false).unwrap();
        assert_eq!(obj.health().unwrap(), 1.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn silent_set_health_stores_without_events() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.set_health(-5.0, None, None, true).unwrap();
        assert_eq!(obj.health().unwrap(), -5.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn set_health_applies_new_bounds_first() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.set_health(50.0, Some(0.0), Some(50.0), false).unwrap();
        assert_eq!(obj.min_health().unwrap(), 0.0);
        assert_eq!(obj.max_health().unwrap(), 50.0);
        assert_eq!(obj.health().unwrap(), 50.0);
        assert_eq!(
            log.borrow()[0],
            HealthEvent::HealthChange {
                change: 49.0,
                health: 50.0,
                min_health: 0.0,
                max_health: 50.0,
            }
        );
    }

    #[test]
    fn set_health_accepts_bounds_above_current_max() {
        let mut obj = sprite();
        obj.set_health(250.0, Some(200.0), Some(300.0), true).unwrap();
        assert_eq!(obj.min_health().unwrap(), 200.0);
        assert_eq!(obj.max_health().unwrap(), 300.0);
        assert_eq!(obj.health().unwrap(), 250.0);
    }

    #[test]
    fn die_fires_when_health_reaches_zero() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.set_health(0.0, None, None, false).unwrap();
        assert_eq!(log.borrow().last(), Some(&HealthEvent::Die));
    }

    #[test]
    fn die_fires_when_health_drops_below_zero() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.set_health(-1.0, None, None, false).unwrap();
        assert_eq!(log.borrow().last(), Some(&HealthEvent::Die));
    }

    #[test]
    fn die_is_edge_triggered() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.damage(Some(1.0), false).unwrap();
        obj.damage(Some(1.0), false).unwrap();
        obj.damage(Some(1.0), false).unwrap();
        let deaths = log.borrow().iter().filter(|e| **e == HealthEvent::Die).count();
        assert_eq!(deaths, 1);
        assert_eq!(obj.health().unwrap(), -2.0);
    }

    #[test]
    fn revive_fires_when_health_rises_above_zero() {
        let mut obj = sprite_with(HealthConfig::with_health(-1.0));
        let log = record_events(&mut obj);
        obj.set_health(0.0, None, None, false).unwrap();
        assert!(!log.borrow().contains(&HealthEvent::Revive));
        obj.set_health(1.0, None, None, false).unwrap();
        assert_eq!(log.borrow().last(), Some(&HealthEvent::Revive));
    }

    #[test]
    fn set_max_health_below_health_pulls_health_down() {
        let mut obj = sprite_with(HealthConfig::with_health(80.0));
        let log = record_events(&mut obj);
        obj.set_max_health(50.0, false).unwrap();
        assert_eq!(obj.max_health().unwrap(), 50.0);
        assert_eq!(obj.health().unwrap(), 50.0);
        assert_eq!(log.borrow()[1], HealthEvent::Damage { amount: 30.0 });
    }

    #[test]
    fn set_max_health_above_health_leaves_health() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.set_max_health(200.0, false).unwrap();
        assert_eq!(obj.max_health().unwrap(), 200.0);
        assert_eq!(obj.health().unwrap(), 1.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn set_min_health_can_revive() {
        let mut obj = sprite_with(HealthConfig::with_health(-10.0));
        let log = record_events(&mut obj);
        obj.set_min_health(5.0, false).unwrap();
        assert_eq!(obj.health().unwrap(), 5.0);
        assert_eq!(log.borrow().last(), Some(&HealthEvent::Revive));
    }

    #[test]
    fn set_max_health_can_kill() {
        let mut obj = sprite_with(HealthConfig::with_health(10.0));
        let log = record_events(&mut obj);
        obj.set_max_health(-1.0, false).unwrap();
        assert_eq!(obj.health().unwrap(), -1.0);
        assert_eq!(log.borrow().last(), Some(&HealthEvent::Die));
    }

    #[test]
    fn bounds_stay_ordered() {
        let mut obj = sprite_with(HealthConfig::new(5.0, 0.0, 10.0));
        obj.set_min_health(20.0, true).unwrap();
        assert_eq!(obj.min_health().unwrap(), 10.0);
        obj.set_max_health(-20.0, true).unwrap();
        assert_eq!(obj.max_health().unwrap(), 10.0);
        assert_eq!(obj.health().unwrap(), 10.0);
    }

    #[test]
    fn damage_defaults_to_one() {
        let mut obj = sprite_with(HealthConfig::with_health(10.0));
        obj.damage(None, false).unwrap();
        assert_eq!(obj.health().unwrap(), 9.0);
        obj.damage(Some(f64::NAN), false).unwrap();
        assert_eq!(obj.health().unwrap(), 8.0);
    }

    #[test]
    fn damage_by_zero_is_a_no_op() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.damage(Some(0.0), false).unwrap();
        obj.heal(Some(0.0), false).unwrap();
        assert_eq!(obj.health().unwrap(), 1.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn damage_reports_clamped_magnitude() {
        let mut obj = sprite_with(HealthConfig::new(10.0, 0.0, 100.0));
        let log = record_events(&mut obj);
        obj.damage(Some(25.0), false).unwrap();
        assert_eq!(obj.health().unwrap(), 0.0);
        assert_eq!(
            *log.borrow(),
            [
                HealthEvent::HealthChange {
                    change: -10.0,
                    health: 0.0,
                    min_health: 0.0,
                    max_health: 100.0,
                },
                HealthEvent::Damage { amount: 10.0 },
                HealthEvent::Die,
            ]
        );
    }

    #[test]
    fn silent_damage_and_heal_emit_nothing() {
        let mut obj = sprite_with(HealthConfig::with_health(10.0));
        let log = record_events(&mut obj);
        obj.damage(Some(4.0), true).unwrap();
        obj.heal(Some(2.0), true).unwrap();
        obj.kill(true).unwrap();
        obj.revive(None, true).unwrap();
        assert_eq!(obj.health().unwrap(), 1.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn heal_defaults_to_one() {
        let mut obj = sprite();
        obj.heal(None, false).unwrap();
        assert_eq!(obj.health().unwrap(), 2.0);
    }

    #[test]
    fn negative_damage_heals() {
        let mut obj = sprite();
        let log = record_events(&mut obj);
        obj.damage(Some(-3.0), false).unwrap();
        assert_eq!(obj.health().unwrap(), 4.0);
        assert_eq!(log.borrow()[1], HealthEvent::Heal { amount: 3.0 });
    }

    #[test]
    fn kill_floors_at_zero() {
        let mut obj = sprite_with(HealthConfig::with_health(30.0));
        obj.kill(false).unwrap();
        assert_eq!(obj.health().unwrap(), 0.0);
    }

    #[test]
    fn kill_respects_positive_min_health() {
        let mut obj = sprite_with(HealthConfig::new(30.0, 5.0, 100.0));
        let log = record_events(&mut obj);
        obj.kill(false).unwrap();
        assert_eq!(obj.health().unwrap(), 5.0);
        assert!(!log.borrow().contains(&HealthEvent::Die));
    }

    #[test]
    fn revive_while_alive_is_a_no_op() {
        let mut obj = sprite_with(HealthConfig::with_health(30.0));
        let log = record_events(&mut obj);
        obj.revive(Some(80.0), false).unwrap();
        assert_eq!(obj.health().unwrap(), 30.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn revive_defaults_to_one() {
        for amount in [None, Some(0.0), Some(f64::NAN)] {
            let mut obj = sprite_with(HealthConfig::with_health(0.0));
            obj.revive(amount, false).unwrap();
            assert_eq!(obj.health().unwrap(), 1.0);
        }
    }

    #[test]
    fn revive_with_amount() {
        let mut obj = sprite_with(HealthConfig::with_health(-4.0));
        obj.revive(Some(12.0), false).unwrap();
        assert_eq!(obj.health().unwrap(), 12.0);
    }

    #[test]
    fn heal_listener_sees_updated_health() {
        let seen = Rc::new(RefCell::new(None));
        let mut obj = sprite();
        let probe = Rc::clone(&seen);
        obj.on(EventKind::Heal, move |target, _| {
            *probe.borrow_mut() = target.health().ok();
        });
        obj.heal(Some(5.0), false).unwrap();
        assert_eq!(*seen.borrow(), Some(6.0));
    }
}

//! Nitro reserve
//!
//! Drains fast while engaged, refills slowly otherwise. The level is clamped to
//! `[0, capacity]` after every update.
//!
//! Running dry is reported once per press: holding the key on an empty tank
//! burns each trickle of regen as it arrives, but the depletion flag only
//! rearms after the key is released.

use serde::{Deserialize, Serialize};

use crate::tuning::BoostTuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostResource {
    level: f32,
    capacity: f32,
    drain_per_tick: f32,
    regen_per_tick: f32,
    /// Set on the tick the level hit zero
    depleted: bool,
    armed: bool,
}

impl BoostResource {
    /// A full tank
    pub fn new(tuning: &BoostTuning) -> Self {
        Self {
            level: tuning.capacity,
            capacity: tuning.capacity,
            drain_per_tick: tuning.drain_per_tick,
            regen_per_tick: tuning.regen_per_tick,
            depleted: false,
            armed: true,
        }
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    /// Level as a 0-1 fraction of capacity
    pub fn fraction(&self) -> f32 {
        if self.capacity > 0.0 {
            self.level / self.capacity
        } else {
            0.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.level <= 0.0
    }

    /// Run one tick of the reserve. Returns true iff boost is engaged this tick,
    /// which requires the key held and some nitro left.
    pub fn activate(&mut self, held: bool) -> bool {
        let active = held && self.level > 0.0;
        self.depleted = false;
        if active {
            self.level = (self.level - self.drain_per_tick).max(0.0);
            if self.level <= 0.0 && self.armed {
                self.depleted = true;
                self.armed = false;
            }
        } else if self.level < self.capacity {
            self.level = (self.level + self.regen_per_tick).min(self.capacity);
        }
        if !held {
            self.armed = true;
        }
        active
    }

    /// True only on the tick the last `activate` emptied the tank
    pub fn just_depleted(&self) -> bool {
        self.depleted
    }
}

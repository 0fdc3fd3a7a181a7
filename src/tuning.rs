//! Data-driven game balance
//!
//! Every hand-tuned constant of the motion model lives here so sessions can be
//! built with alternate balance (tests, difficulty experiments) without globals.
//! Missing JSON fields fall back to the shipped defaults.

use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Bike rotational model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicsTuning {
    /// Tilt-proportional torque per unit of profile gravity factor
    pub gravity_coefficient: f32,
    /// Velocity retained every tick
    pub drag: f32,
    /// Extra velocity retained while boosting
    pub boost_damping: f32,
    /// |angle| beyond which the bike has fallen (radians)
    pub crash_angle: f32,
    /// Suspension bob period divisor (ms)
    pub bob_period_ms: f32,
    /// Suspension bob amplitude at zero intensity
    pub bob_amplitude: f32,
    /// Difficulty intensity per unit of |angular velocity|
    pub intensity_scale: f32,
}

impl Default for DynamicsTuning {
    fn default() -> Self {
        Self {
            gravity_coefficient: 0.0055,
            drag: 0.95,
            boost_damping: 0.85,
            crash_angle: 1.55,
            bob_period_ms: 150.0,
            bob_amplitude: 3.0,
            intensity_scale: 20.0,
        }
    }
}

/// Ambient wind force and decorative streaks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindTuning {
    /// Disabled wind keeps both forces at zero (streaks still drift)
    pub enabled: bool,
    /// Fraction of the gap to target closed per tick
    pub smoothing: f32,
    /// Per-tick gust probability at zero intensity
    pub gust_chance: f32,
    /// Added gust probability per unit of intensity
    pub gust_chance_per_intensity: f32,
    /// Full width of the gust range at zero intensity
    pub gust_span: f32,
    /// Added gust range width per unit of intensity
    pub gust_span_per_intensity: f32,
    /// Size of the streak pool
    pub streak_count: usize,
    /// Streak drift per unit of wind force
    pub streak_wind_scale: f32,
    /// Base leftward scroll speed of streaks
    pub streak_scroll: f32,
    /// Added scroll speed per unit of intensity
    pub streak_scroll_per_intensity: f32,
    /// How far past the right edge a streak may travel
    pub right_margin: f32,
    /// How far past the left edge a streak may travel
    pub left_margin: f32,
    /// Offscreen distance at which replacements spawn
    pub spawn_margin: f32,
}

impl Default for WindTuning {
    fn default() -> Self {
        Self {
            enabled: true,
            smoothing: 0.02,
            gust_chance: 0.005,
            gust_chance_per_intensity: 1.0 / 100.0,
            gust_span: 0.035,
            gust_span_per_intensity: 1.0 / 50.0,
            streak_count: 15,
            streak_wind_scale: 500.0,
            streak_scroll: 6.0,
            streak_scroll_per_intensity: 2.0,
            right_margin: 200.0,
            left_margin: 300.0,
            spawn_margin: 200.0,
        }
    }
}

/// Nitro reserve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostTuning {
    pub capacity: f32,
    pub drain_per_tick: f32,
    pub regen_per_tick: f32,
}

impl Default for BoostTuning {
    fn default() -> Self {
        Self {
            capacity: 100.0,
            drain_per_tick: 0.6,
            regen_per_tick: 0.15,
        }
    }
}

/// Exhaust particles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    /// Life lost per tick (life starts at 1)
    pub decay_per_tick: f32,
    /// Spawn point relative to the bike's rest position
    pub exhaust_offset: (f32, f32),
    /// Backward speed at zero intensity (negative is backward)
    pub exhaust_speed: f32,
    /// Half-range of vertical spread
    pub exhaust_spread: f32,
    pub max_particles: usize,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            decay_per_tick: 0.02,
            exhaust_offset: (-140.0, 40.0),
            exhaust_speed: -8.0,
            exhaust_spread: 2.0,
            max_particles: 256,
        }
    }
}

/// Camera shake feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeTuning {
    /// Minimum shake while boosting (intensity is added)
    pub boost_base: f32,
    /// Intensity above which instability shakes the camera
    pub intensity_threshold: f32,
    /// Shake per unit of intensity once above threshold
    pub intensity_gain: f32,
    /// Shake retained per tick
    pub decay: f32,
}

impl Default for ShakeTuning {
    fn default() -> Self {
        Self {
            boost_base: 4.0,
            intensity_threshold: 0.5,
            intensity_gain: 6.0,
            decay: 0.9,
        }
    }
}

/// Logical drawing surface the simulation lays itself out in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Bike rest height below the vertical center
    pub bike_drop: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            bike_drop: 80.0,
        }
    }
}

impl Viewport {
    /// Bike pivot in surface coordinates (before suspension bob)
    pub fn bike_rest(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0 + self.bike_drop)
    }
}

/// Complete balance table injected into a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub dynamics: DynamicsTuning,
    pub wind: WindTuning,
    pub boost: BoostTuning,
    pub particles: ParticleTuning,
    pub shake: ShakeTuning,
    pub viewport: Viewport,
}

impl Tuning {
    /// Parse a (possibly partial) tuning table and range-check it
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        log::debug!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Reject values that would break the wind easing, the nitro range or
    /// the damping model
    pub fn validate(&self) -> Result<(), GameError> {
        // (field, value, lower bound inclusive?, lower, upper)
        let checks = [
            ("dynamics.drag", self.dynamics.drag, false, 0.0, 1.0),
            ("dynamics.boost_damping", self.dynamics.boost_damping, false, 0.0, 1.0),
            ("dynamics.crash_angle", self.dynamics.crash_angle, false, 0.0, f32::MAX),
            ("dynamics.bob_period_ms", self.dynamics.bob_period_ms, false, 0.0, f32::MAX),
            ("wind.smoothing", self.wind.smoothing, false, 0.0, 1.0),
            ("boost.capacity", self.boost.capacity, false, 0.0, 100.0),
            ("boost.drain_per_tick", self.boost.drain_per_tick, true, 0.0, f32::MAX),
            ("boost.regen_per_tick", self.boost.regen_per_tick, true, 0.0, f32::MAX),
            ("particles.decay_per_tick", self.particles.decay_per_tick, false, 0.0, 1.0),
            ("shake.decay", self.shake.decay, true, 0.0, 1.0),
            ("viewport.width", self.viewport.width, false, 0.0, f32::MAX),
            ("viewport.height", self.viewport.height, false, 0.0, f32::MAX),
        ];
        for (field, value, inclusive, lo, hi) in checks {
            let above = if inclusive { value >= lo } else { value > lo };
            if !value.is_finite() || !above || value > hi {
                let open = if inclusive { '[' } else { '(' };
                return Err(GameError::InvalidTuning {
                    field,
                    reason: format!("{value} outside {open}{lo}, {hi}]"),
                });
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Defaults with the wind model switched off (deterministic scenarios)
    pub fn calm() -> Self {
        let mut tuning = Self::default();
        tuning.wind.enabled = false;
        tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "boost": { "drain_per_tick": 1.0 } }"#).unwrap();
        assert_eq!(tuning.boost.drain_per_tick, 1.0);
        assert_eq!(tuning.boost.regen_per_tick, 0.15);
        assert_eq!(tuning.dynamics, DynamicsTuning::default());
        assert_eq!(tuning.wind.streak_count, 15);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn json_round_trip() {
        let tuning = Tuning::calm();
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn out_of_range_values_rejected() {
        let err = Tuning::from_json(r#"{ "wind": { "smoothing": 1.5 } }"#).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidTuning {
                field: "wind.smoothing",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "boost": { "capacity": 150.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidTuning {
                field: "boost.capacity",
                ..
            }
        ));

        assert!(Tuning::from_json(r#"{ "boost": { "regen_per_tick": -0.1 } }"#).is_err());
        assert!(Tuning::from_json(r#"{ "dynamics": { "drag": 0.0 } }"#).is_err());
        assert!(Tuning::default().validate().is_ok());
        assert!(Tuning::calm().validate().is_ok());
    }

    #[test]
    fn bike_rest_sits_below_center() {
        let vp = Viewport::default();
        assert_eq!(vp.bike_rest(), (640.0, 440.0));
    }
}

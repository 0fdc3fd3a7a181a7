//! Bike rotational dynamics
//!
//! A scalar, hand-tuned model rather than rigid-body physics. Upright is an
//! unstable equilibrium: the tilt term grows with the angle, so the rider has to
//! keep correcting.

use serde::{Deserialize, Serialize};

use crate::tuning::DynamicsTuning;

/// Everything that pushes on the bike during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BikeForces {
    /// Signed lean input (`-lean_strength`, 0 or `+lean_strength`)
    pub control: f32,
    /// Smoothed wind force
    pub wind: f32,
    /// Boost engaged this tick
    pub boosting: bool,
}

/// Resolve the two lean buttons into a signed control value.
/// Holding both (or neither) cancels out.
pub fn control_input(lean_negative: bool, lean_positive: bool, lean_strength: f32) -> f32 {
    match (lean_negative, lean_positive) {
        (true, false) => -lean_strength,
        (false, true) => lean_strength,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BikeState {
    /// Tilt in radians, 0 is upright
    pub angle: f32,
    /// Radians per tick
    pub angular_velocity: f32,
    /// Cosmetic suspension offset (surface units)
    pub vertical_bob: f32,
}

impl BikeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Integrate one tick of rotation
    pub fn apply_forces(&mut self, forces: BikeForces, gravity_factor: f32, tuning: &DynamicsTuning) {
        self.angular_velocity += forces.control
            + self.angle * (tuning.gravity_coefficient * gravity_factor)
            + forces.wind;

        if forces.boosting {
            self.angular_velocity *= tuning.boost_damping;
        }

        self.angular_velocity *= tuning.drag;
        self.angle += self.angular_velocity;
    }

    /// Suspension bob, amplitude grows with difficulty
    pub fn update_bob(&mut self, elapsed_ms: f64, intensity: f32, tuning: &DynamicsTuning) {
        let phase = (elapsed_ms / f64::from(tuning.bob_period_ms)).sin() as f32;
        self.vertical_bob = phase * (tuning.bob_amplitude + intensity);
    }

    pub fn has_fallen(&self, crash_angle: f32) -> bool {
        self.angle.abs() > crash_angle
    }

    /// Difficulty derived from how fast the bike is rotating
    pub fn intensity(&self, tuning: &DynamicsTuning) -> f32 {
        self.angular_velocity.abs() * tuning.intensity_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> DynamicsTuning {
        DynamicsTuning::default()
    }

    #[test]
    fn lean_buttons_cancel() {
        assert_eq!(control_input(true, false, 0.5), -0.5);
        assert_eq!(control_input(false, true, 0.5), 0.5);
        assert_eq!(control_input(true, true, 0.5), 0.0);
        assert_eq!(control_input(false, false, 0.5), 0.0);
    }

    #[test]
    fn upright_and_still_stays_upright() {
        let mut bike = BikeState::new();
        for _ in 0..10_000 {
            bike.apply_forces(BikeForces::default(), 1.5, &tuning());
        }
        assert_eq!(bike.angle, 0.0);
        assert_eq!(bike.angular_velocity, 0.0);
    }

    #[test]
    fn damping_fixed_point() {
        let c = 0.01;
        let mut bike = BikeState::new();
        let forces = BikeForces {
            control: c,
            ..Default::default()
        };
        for _ in 0..2000 {
            bike.apply_forces(forces, 0.0, &tuning());
        }
        // v <- (v + c) * 0.95 settles where v = 0.95 c / 0.05
        assert!((bike.angular_velocity - 19.0 * c).abs() < 1e-5);
        assert!((bike.angular_velocity + c - c / 0.05).abs() < 1e-5);
    }

    #[test]
    fn tilt_accelerates_the_fall() {
        let mut bike = BikeState {
            angle: 0.3,
            ..Default::default()
        };
        let mut last = bike.angle;
        for _ in 0..50 {
            bike.apply_forces(BikeForces::default(), 1.2, &tuning());
            assert!(bike.angle > last);
            last = bike.angle;
        }
    }

    #[test]
    fn boost_damps_velocity() {
        let forces = BikeForces {
            control: 0.1,
            boosting: true,
            ..Default::default()
        };
        let mut bike = BikeState::new();
        bike.apply_forces(forces, 1.0, &tuning());
        assert!((bike.angular_velocity - 0.1 * 0.85 * 0.95).abs() < 1e-7);
        assert!((bike.angle - bike.angular_velocity).abs() < 1e-7);
    }

    #[test]
    fn bob_amplitude_tracks_intensity() {
        let mut bike = BikeState::new();
        let quarter_period = 150.0 * std::f64::consts::FRAC_PI_2;
        bike.update_bob(quarter_period, 2.0, &tuning());
        assert!((bike.vertical_bob - 5.0).abs() < 1e-4);
    }

    #[test]
    fn crash_threshold_is_strict() {
        let bike = BikeState {
            angle: -1.55,
            ..Default::default()
        };
        assert!(!bike.has_fallen(1.55));
        let bike = BikeState {
            angle: -1.5501,
            ..Default::default()
        };
        assert!(bike.has_fallen(1.55));
    }
}

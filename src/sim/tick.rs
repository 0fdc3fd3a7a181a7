//! Fixed timestep simulation tick
//!
//! One tick runs to completion in a fixed order: wind, boost, dynamics,
//! particles, score, feedback, crash check. Presentation reads the session only
//! after `tick` returns.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bike::{BikeForces, control_input};
use super::particles::Particle;
use super::session::{GamePhase, Session};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::vehicle::VehicleId;

/// Button state latched for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Lean back (W)
    pub lean_negative: bool,
    /// Lean forward (S)
    pub lean_positive: bool,
    /// Nitro (space)
    pub boost: bool,
}

/// Notifications for the host layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted { vehicle: VehicleId },
    /// The nitro tank just ran dry
    BoostDepleted,
    /// Emitted exactly once per session
    GameOver { distance: u64 },
}

/// Advance the session by one tick
pub fn tick(session: &mut Session, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if session.phase != GamePhase::Playing {
        return events;
    }

    session.time_ticks += 1;

    // Decay shake from the previous tick before new kicks land
    session.shake *= session.tuning.shake.decay;
    if session.shake < 0.01 {
        session.shake = 0.0;
    }

    let dynamics = &session.tuning.dynamics;
    session.intensity = session.bike.intensity(dynamics);
    let intensity = session.intensity;

    // Wind
    session.wind.update_force(intensity, &mut session.rng);

    // Boost
    let boosting = session.boost.activate(input.boost);
    session.is_boosting = boosting;
    if session.boost.just_depleted() {
        log::debug!("Nitro depleted after {} ticks", session.time_ticks);
        events.push(GameEvent::BoostDepleted);
    }

    // Dynamics
    let forces = BikeForces {
        control: control_input(
            input.lean_negative,
            input.lean_positive,
            session.profile.lean_strength,
        ),
        wind: session.wind.current_force,
        boosting,
    };
    session
        .bike
        .apply_forces(forces, session.profile.gravity_factor, &session.tuning.dynamics);
    let elapsed_ms = session.elapsed_ms();
    session
        .bike
        .update_bob(elapsed_ms, intensity, &session.tuning.dynamics);

    // Exhaust
    if boosting {
        session.shake = session.shake.max(session.tuning.shake.boost_base + intensity);

        let spread = session.tuning.particles.exhaust_spread;
        let vel = Vec2::new(
            session.tuning.particles.exhaust_speed - intensity,
            (session.rng.random::<f32>() * 2.0 - 1.0) * spread,
        );
        let origin = session.exhaust_origin();
        session
            .particles
            .spawn(Particle::new(origin, vel, session.profile.accent_color));
    }
    session.particles.tick();
    session.particles.remove_expired();

    // Score
    session.score += f64::from(session.profile.speed_factor + intensity);

    // Feedback
    let shake = &session.tuning.shake;
    if intensity > shake.intensity_threshold {
        session.shake = session.shake.max(intensity * shake.intensity_gain);
    }
    session.wind.update_streaks(intensity, &mut session.rng);
    session.shake_offset = if session.shake > 0.0 {
        let jx = session.fx_rng.random::<f32>() - 0.5;
        let jy = session.fx_rng.random::<f32>() - 0.5;
        Vec2::new(jx, jy) * session.shake
    } else {
        Vec2::ZERO
    };

    // Crash check
    if session.bike.has_fallen(session.tuning.dynamics.crash_angle) {
        session.phase = GamePhase::GameOver;
        session.is_boosting = false;
        let distance = session.distance();
        log::info!(
            "Wipeout after {} ticks at angle {:.3}: {}m",
            session.time_ticks,
            session.bike.angle,
            distance
        );
        events.push(GameEvent::GameOver { distance });
    }

    events
}

/// Turns variable host frame times into whole simulation ticks
#[derive(Debug, Clone)]
pub struct FixedStepper {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStepper {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Run as many ticks as `frame_dt` pays for. Stops as soon as the session
    /// leaves `Playing` and discards any leftover time.
    pub fn advance(&mut self, frame_dt: f32, session: &mut Session, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !session.is_playing() {
            self.accumulator = 0.0;
            return events;
        }

        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            events.extend(tick(session, input));
            self.accumulator -= self.step;
            substeps += 1;

            if !session.is_playing() {
                self.accumulator = 0.0;
                break;
            }
        }

        if substeps == self.max_substeps && self.accumulator >= self.step {
            log::warn!("Dropping {:.3}s of simulation time", self.accumulator);
            self.accumulator = 0.0;
        }

        events
    }

    /// Fraction of a tick banked, for render interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

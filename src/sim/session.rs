//! Per-run game state
//!
//! A `Session` exists only once a vehicle has been selected, so the simulation
//! can never be ticked without a bound profile. Configuration is injected at
//! construction; nothing here is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bike::BikeState;
use super::boost::BoostResource;
use super::particles::{Particle, ParticleSystem};
use super::wind::{Streak, WindField};
use crate::tuning::{Tuning, Viewport};
use crate::vehicle::VehicleProfile;

/// Where the player is in the menu / play / wipeout cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Vehicle selection, no session
    Menu,
    /// Active run
    Playing,
    /// Bike fell over; terminal until a new vehicle is selected
    GameOver,
}

/// Stream offset for the presentation RNG so it never shares a sequence with
/// the simulation RNG
const FX_STREAM: u64 = 0x5eed_f00d;

#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Bound vehicle (exactly one per session)
    pub profile: VehicleProfile,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub bike: BikeState,
    pub wind: WindField,
    pub boost: BoostResource,
    /// Exhaust particles (not gameplay-affecting)
    pub particles: ParticleSystem,
    /// Raw score, monotonically non-decreasing
    pub score: f64,
    /// Difficulty derived from the bike's angular speed
    pub intensity: f32,
    /// Camera shake magnitude for this tick
    pub shake: f32,
    /// Camera jitter drawn from `shake` this tick
    pub shake_offset: Vec2,
    /// Boost was engaged on the last tick
    pub is_boosting: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    pub(crate) fx_rng: Pcg32,
}

impl Session {
    /// Start a run: upright bike, full nitro, zero score
    pub fn new(profile: VehicleProfile, tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let fx_rng = Pcg32::seed_from_u64(seed ^ FX_STREAM);
        let wind = WindField::new(&tuning.wind, tuning.viewport, &mut rng);
        let boost = BoostResource::new(&tuning.boost);
        let particles =
            ParticleSystem::new(tuning.particles.decay_per_tick, tuning.particles.max_particles);

        log::info!(
            "Session started: {} (seed {}, grav {}, lean {}, speed {})",
            profile.display_name,
            seed,
            profile.gravity_factor,
            profile.lean_strength,
            profile.speed_factor
        );

        Self {
            seed,
            profile,
            tuning,
            phase: GamePhase::Playing,
            bike: BikeState::new(),
            wind,
            boost,
            particles,
            score: 0.0,
            intensity: 0.0,
            shake: 0.0,
            shake_offset: Vec2::ZERO,
            is_boosting: false,
            time_ticks: 0,
            rng,
            fx_rng,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Distance shown on the HUD, frozen once the run ends
    pub fn distance(&self) -> u64 {
        crate::distance_meters(self.score)
    }

    /// Simulated time since the run started
    pub fn elapsed_ms(&self) -> f64 {
        self.time_ticks as f64 * f64::from(crate::consts::SIM_DT) * 1000.0
    }

    /// Spawn point for exhaust, behind the bike's rest position
    pub(crate) fn exhaust_origin(&self) -> Vec2 {
        let (x, y) = self.tuning.viewport.bike_rest();
        let (dx, dy) = self.tuning.particles.exhaust_offset;
        Vec2::new(x + dx, y + dy)
    }

    /// Read-only view for the render, HUD and audio collaborators
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            bike_angle: self.bike.angle,
            bike_vertical_offset: self.bike.vertical_bob,
            shake_magnitude: self.shake,
            shake_offset: self.shake_offset,
            wind_force: self.wind.current_force,
            wind_streaks: self.wind.streaks(),
            particles: self.particles.as_slice(),
            nitro_level: self.boost.level(),
            nitro_fraction: self.boost.fraction(),
            distance_meters: self.distance(),
            score: self.score,
            difficulty_intensity: self.intensity,
            is_boosting: self.is_boosting,
            vehicle: &self.profile,
            viewport: self.tuning.viewport,
        }
    }
}

/// State exposed to presentation each tick, taken after all mutation
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub bike_angle: f32,
    pub bike_vertical_offset: f32,
    pub shake_magnitude: f32,
    pub shake_offset: Vec2,
    pub wind_force: f32,
    pub wind_streaks: &'a [Streak],
    pub particles: &'a [Particle],
    /// 0-100
    pub nitro_level: f32,
    /// 0-1 share of tank capacity
    pub nitro_fraction: f32,
    pub distance_meters: u64,
    pub score: f64,
    pub difficulty_intensity: f32,
    pub is_boosting: bool,
    pub vehicle: &'a VehicleProfile,
    pub viewport: Viewport,
}

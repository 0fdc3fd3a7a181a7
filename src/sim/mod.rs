//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (tick count drives time, never the wall clock)
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod bike;
pub mod boost;
pub mod particles;
pub mod session;
pub mod tick;
pub mod wind;

pub use bike::{BikeForces, BikeState, control_input};
pub use boost::BoostResource;
pub use particles::{Particle, ParticleSystem};
pub use session::{GamePhase, Session, Snapshot};
pub use tick::{FixedStepper, GameEvent, TickInput, tick};
pub use wind::{Streak, WindField};

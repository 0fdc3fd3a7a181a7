//! Nitro Balance - a single-screen motorcycle balancing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bike dynamics, wind, boost, particles, session)
//! - `game`: Host-facing state machine (menu, playing, game over)
//! - `renderer`: Frame composition into vertex data
//! - `audio`: Engine tone parameters for an external audio backend
//! - `tuning`: Data-driven game balance
//! - `vehicle`: Selectable vehicle catalog

pub mod audio;
pub mod error;
pub mod game;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod vehicle;

pub use error::GameError;
pub use game::Game;
pub use highscores::HighScores;
pub use settings::{QualityPreset, Settings};
pub use sim::GamePhase;
pub use tuning::Tuning;
pub use vehicle::{VehicleId, VehicleProfile, VehicleRegistry};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame the stepper will account for
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default drawing surface
    pub const VIEWPORT_WIDTH: f32 = 1280.0;
    pub const VIEWPORT_HEIGHT: f32 = 720.0;

    /// Score units per displayed meter
    pub const SCORE_PER_METER: f64 = 10.0;
}

/// Distance shown to the player for a raw score
#[inline]
pub fn distance_meters(score: f64) -> u64 {
    (score / consts::SCORE_PER_METER).floor().max(0.0) as u64
}

/// Unpack a 0xRRGGBB color into linear-ish float RGBA
#[inline]
pub fn color_rgba(rgb: u32, alpha: f32) -> [f32; 4] {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    [r, g, b, alpha.clamp(0.0, 1.0)]
}

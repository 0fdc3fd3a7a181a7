//! Engine sound parameters
//!
//! The core performs no audio I/O. Each tick the host asks for an
//! [`EngineTone`] and feeds it to its own oscillator (a sawtooth in the web
//! build), gliding toward the new values.

use crate::settings::Settings;
use crate::sim::{GamePhase, Snapshot};

/// Idle engine pitch (Hz)
pub const BASE_FREQUENCY: f32 = 50.0;
/// Score units per extra Hz
pub const SCORE_PER_HZ: f32 = 500.0;
/// Hz per unit of difficulty intensity
pub const INTENSITY_HZ: f32 = 10.0;
/// Pitch multiplier while boosting
pub const BOOST_PITCH: f32 = 1.4;
/// Engine gain at full volume
pub const ENGINE_GAIN: f32 = 0.05;
/// Parameter glide time constant (seconds)
pub const GLIDE_SECONDS: f32 = 0.1;

/// Target oscillator state for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineTone {
    pub frequency: f32,
    pub gain: f32,
    /// Time constant to glide toward `frequency` and `gain`
    pub glide_seconds: f32,
}

/// Pitch rises with distance and instability, and jumps while boosting
pub fn engine_frequency(score: f64, intensity: f32, boosting: bool) -> f32 {
    let score_hz = (score / f64::from(SCORE_PER_HZ)) as f32;
    let freq = BASE_FREQUENCY + score_hz + intensity * INTENSITY_HZ;
    if boosting { freq * BOOST_PITCH } else { freq }
}

impl EngineTone {
    /// Tone for the current snapshot. The engine is silenced once the run ends.
    pub fn from_snapshot(snapshot: &Snapshot<'_>, settings: &Settings) -> Self {
        let frequency = engine_frequency(
            snapshot.score,
            snapshot.difficulty_intensity,
            snapshot.is_boosting,
        );
        let gain = match snapshot.phase {
            GamePhase::Playing => ENGINE_GAIN * settings.effective_music_volume(),
            GamePhase::Menu | GamePhase::GameOver => 0.0,
        };
        Self {
            frequency,
            gain,
            glide_seconds: GLIDE_SECONDS,
        }
    }

    /// Idle pitch with the engine off
    pub fn silent() -> Self {
        Self {
            frequency: BASE_FREQUENCY,
            gain: 0.0,
            glide_seconds: GLIDE_SECONDS,
        }
    }

    pub fn is_audible(&self) -> bool {
        self.gain > 0.0
    }
}

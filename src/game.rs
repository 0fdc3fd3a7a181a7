//! Host-facing game state machine
//!
//! `Menu` has no session. Selecting a vehicle builds a fresh [`Session`] and
//! enters `Playing`; a crash moves it to `GameOver`, where it stays until the
//! host returns to the menu or selects again.

use crate::GameError;
use crate::audio::EngineTone;
use crate::highscores::HighScores;
use crate::renderer::Frame;
use crate::settings::Settings;
use crate::sim::{FixedStepper, GameEvent, GamePhase, Session, Snapshot, TickInput};
use crate::tuning::Tuning;
use crate::vehicle::{VehicleId, VehicleRegistry};

/// Seed increment between consecutive sessions
const SEED_STEP: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct Game {
    registry: VehicleRegistry,
    tuning: Tuning,
    pub settings: Settings,
    session: Option<Session>,
    stepper: FixedStepper,
    high_scores: HighScores,
    /// Button state latched by the host between frames
    input: TickInput,
    next_seed: u64,
}

impl Game {
    pub fn new(registry: VehicleRegistry, tuning: Tuning, settings: Settings, seed: u64) -> Self {
        Self {
            registry,
            tuning,
            settings,
            session: None,
            stepper: FixedStepper::default(),
            high_scores: HighScores::new(),
            input: TickInput::default(),
            next_seed: seed,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.session
            .as_ref()
            .map(|s| s.phase)
            .unwrap_or(GamePhase::Menu)
    }

    pub fn registry(&self) -> &VehicleRegistry {
        &self.registry
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Bind a vehicle and start a new run, replacing any previous session.
    /// Unknown ids leave the current state untouched.
    pub fn select_vehicle(&mut self, id: VehicleId) -> Result<GameEvent, GameError> {
        let profile = match self.registry.get_profile(id) {
            Ok(profile) => profile.clone(),
            Err(err) => {
                log::warn!("Rejected vehicle selection: {err}");
                return Err(err);
            }
        };

        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(SEED_STEP);

        self.session = Some(Session::new(profile, self.tuning.clone(), seed));
        self.stepper.reset();
        self.input = TickInput::default();
        Ok(GameEvent::SessionStarted { vehicle: id })
    }

    /// Drop the finished (or running) session and show the garage again
    pub fn return_to_menu(&mut self) {
        if self.session.take().is_some() {
            log::info!("Back to vehicle selection");
        }
        self.stepper.reset();
    }

    /// Latch the current button state; read at the start of each tick
    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    /// Advance by one host frame. Only runs while `Playing`.
    pub fn update(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        let events = self.stepper.advance(frame_dt, session, &self.input);
        for event in &events {
            if let GameEvent::GameOver { distance } = *event {
                self.high_scores
                    .add_score(distance, session.profile.id, session.time_ticks);
            }
        }
        events
    }

    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.session.as_ref().map(Session::snapshot)
    }

    /// Draw data for the current session (nothing to draw in the menu)
    pub fn frame(&self) -> Option<Frame> {
        self.snapshot()
            .map(|snapshot| Frame::compose(&snapshot, &self.settings))
    }

    pub fn engine_tone(&self) -> EngineTone {
        match self.snapshot() {
            Some(snapshot) => EngineTone::from_snapshot(&snapshot, &self.settings),
            None => EngineTone::silent(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(
            VehicleRegistry::builtin(),
            Tuning::default(),
            Settings::default(),
            0,
        )
    }
}

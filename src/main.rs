//! Nitro Balance entry point
//!
//! The native binary is a headless driver: it runs an autopilot rider through
//! the fixed-step loop and reports how far it got. Rendering and audio belong
//! to the embedding host.
//!
//! Usage: `nitro-balance [vehicle-id] [seed] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
use nitro_balance::consts::SIM_DT;
#[cfg(not(target_arch = "wasm32"))]
use nitro_balance::sim::{GameEvent, Snapshot, TickInput};
#[cfg(not(target_arch = "wasm32"))]
use nitro_balance::{Game, GamePhase, Settings, Tuning, VehicleRegistry};

/// Give up after ten simulated minutes
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u32 = 60 * 60 * 10;

/// Lean against the predicted tilt; burn nitro when the wobble gets wild
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(snapshot: &Snapshot<'_>, angular_velocity: f32) -> TickInput {
    let predicted = snapshot.bike_angle + angular_velocity * 8.0;
    TickInput {
        lean_negative: predicted > 0.02,
        lean_positive: predicted < -0.02,
        boost: angular_velocity.abs() > 0.03 && snapshot.nitro_level > 20.0,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let vehicle = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0xb1ce);
    let tuning = match args.next() {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("Could not load tuning from {path}: {err}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    log::info!("Nitro Balance (native) starting...");
    let mut game = Game::new(VehicleRegistry::builtin(), tuning, Settings::default(), seed);

    if let Err(err) = game.select_vehicle(vehicle) {
        log::error!("{err}");
        for profile in game.registry().iter() {
            log::error!("  {}: {}", profile.id, profile.display_name);
        }
        std::process::exit(1);
    }

    let mut frames = 0;
    while game.phase() == GamePhase::Playing && frames < MAX_FRAMES {
        let input = match (game.snapshot(), game.session()) {
            (Some(snapshot), Some(session)) => autopilot(&snapshot, session.bike.angular_velocity),
            _ => TickInput::default(),
        };
        game.set_input(input);

        for event in game.update(SIM_DT) {
            if let GameEvent::GameOver { distance } = event {
                println!("WIPEOUT! DISTANCE: {distance}m");
            }
        }

        frames += 1;
        if frames % 600 == 0 {
            if let Some(snapshot) = game.snapshot() {
                let tone = game.engine_tone();
                log::info!(
                    "{}s: {}m, angle {:.3}, nitro {:.0}, wind {:.4}, engine {:.1}Hz",
                    frames / 60,
                    snapshot.distance_meters,
                    snapshot.bike_angle,
                    snapshot.nitro_level,
                    snapshot.wind_force,
                    tone.frequency
                );
            }
        }
    }

    if game.phase() == GamePhase::Playing {
        let distance = game.snapshot().map(|s| s.distance_meters).unwrap_or(0);
        println!("Survived {} s, {distance}m", MAX_FRAMES / 60);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `Game` directly
}

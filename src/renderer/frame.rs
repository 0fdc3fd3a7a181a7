//! Frame composition
//!
//! Turns a simulation snapshot into draw data: one triangle list for world and
//! HUD geometry plus a sprite placement for the bike image, which the host
//! owns. Camera shake is applied to world geometry only.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use crate::settings::Settings;
use crate::sim::{GamePhase, Snapshot};
use crate::{color_rgba, distance_meters};

/// Drawn bike size in surface units
pub const BIKE_SIZE: Vec2 = Vec2::new(320.0, 180.0);
/// Glow radius at zero intensity
pub const GLOW_BASE: f32 = 40.0;
/// Glow growth per unit of intensity
pub const GLOW_PER_INTENSITY: f32 = 10.0;
const PARTICLE_RADIUS: f32 = 4.0;
const STREAK_WIDTH: f32 = 1.0;
const NITRO_BAR_ORIGIN: Vec2 = Vec2::new(20.0, 60.0);
const NITRO_BAR_SIZE: Vec2 = Vec2::new(200.0, 10.0);
const NITRO_COLOR: [f32; 4] = [0.0, 0.78, 1.0, 1.0];
const BAR_BACK: [f32; 4] = [0.4, 0.4, 0.4, 1.0];

/// Where and how the host should blit the bike image
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub image_ref: String,
    pub center: Vec2,
    pub size: Vec2,
    /// Radians, positive is clockwise on a y-down surface
    pub rotation: f32,
}

/// Text and gauges for the overlay
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    /// e.g. `"123m"`
    pub distance_text: String,
    /// 0-1
    pub nitro_fraction: f32,
    /// Set once the run has ended, e.g. `"DISTANCE: 123m"`
    pub final_stats: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub camera_offset: Vec2,
    pub vertices: Vec<Vertex>,
    pub bike: SpriteDraw,
    pub glow_radius: f32,
    pub hud: Hud,
}

impl Frame {
    pub fn compose(snapshot: &Snapshot<'_>, settings: &Settings) -> Self {
        let camera_offset = if settings.effective_screen_shake() {
            snapshot.shake_offset
        } else {
            Vec2::ZERO
        };

        let mut world = Vec::new();

        if settings.wind_streaks {
            for s in snapshot.wind_streaks {
                let a = Vec2::new(s.x, s.y);
                let b = Vec2::new(s.x + s.length, s.y);
                world.extend(shapes::line(a, b, STREAK_WIDTH, [1.0, 1.0, 1.0, s.opacity]));
            }
        }

        let (rest_x, rest_y) = snapshot.viewport.bike_rest();
        let bike_center = Vec2::new(rest_x, rest_y + snapshot.bike_vertical_offset);
        let glow_radius = GLOW_BASE + snapshot.difficulty_intensity * GLOW_PER_INTENSITY;
        world.extend(shapes::glow(
            bike_center,
            glow_radius + BIKE_SIZE.y / 2.0,
            color_rgba(snapshot.vehicle.accent_color, 0.35),
            settings.quality.glow_layers(),
        ));

        let cap = settings.max_particles();
        let skip = snapshot.particles.len().saturating_sub(cap);
        for p in snapshot.particles.iter().skip(skip) {
            world.extend(shapes::circle(
                p.pos,
                PARTICLE_RADIUS,
                color_rgba(p.color, p.life),
                8,
            ));
        }

        for v in &mut world {
            v.position[0] += camera_offset.x;
            v.position[1] += camera_offset.y;
        }

        let nitro_fraction = snapshot.nitro_fraction.clamp(0.0, 1.0);
        let mut vertices = world;
        vertices.extend(shapes::rect(NITRO_BAR_ORIGIN, NITRO_BAR_SIZE, BAR_BACK));
        if nitro_fraction > 0.0 {
            vertices.extend(shapes::rect(
                NITRO_BAR_ORIGIN,
                Vec2::new(NITRO_BAR_SIZE.x * nitro_fraction, NITRO_BAR_SIZE.y),
                NITRO_COLOR,
            ));
        }

        let distance = distance_meters(snapshot.score);
        let hud = Hud {
            distance_text: format!("{distance}m"),
            nitro_fraction,
            final_stats: (snapshot.phase == GamePhase::GameOver)
                .then(|| format!("DISTANCE: {distance}m")),
        };

        Self {
            camera_offset,
            vertices,
            bike: SpriteDraw {
                image_ref: snapshot.vehicle.image_ref.clone(),
                center: bike_center + camera_offset,
                size: BIKE_SIZE,
                rotation: snapshot.bike_angle,
            },
            glow_radius,
            hud,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Session, TickInput, tick};
    use crate::tuning::Tuning;
    use crate::vehicle::VehicleRegistry;

    fn boosted_session() -> Session {
        let profile = VehicleRegistry::builtin().get_profile(2).unwrap().clone();
        let mut session = Session::new(profile, Tuning::calm(), 17);
        let boost = TickInput {
            boost: true,
            ..Default::default()
        };
        for _ in 0..5 {
            tick(&mut session, &boost);
        }
        session
    }

    #[test]
    fn compose_places_bike_and_hud() {
        let mut session = boosted_session();
        session.score = 505.0;
        let frame = Frame::compose(&session.snapshot(), &Settings::default());

        assert_eq!(frame.bike.image_ref, "./assets/bike2.png");
        assert_eq!(frame.bike.size, BIKE_SIZE);
        assert_eq!(frame.hud.distance_text, "50m");
        assert!(frame.hud.final_stats.is_none());
        assert!((frame.hud.nitro_fraction - 0.97).abs() < 1e-4);
        assert!(!frame.vertices.is_empty());
        assert_eq!(frame.camera_offset, session.shake_offset);
    }

    #[test]
    fn reduced_motion_pins_camera() {
        let session = boosted_session();
        assert!(session.shake > 0.0);
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let frame = Frame::compose(&session.snapshot(), &settings);
        assert_eq!(frame.camera_offset, Vec2::ZERO);
        let (x, _) = session.tuning.viewport.bike_rest();
        assert_eq!(frame.bike.center.x, x);
    }

    #[test]
    fn particle_toggle_drops_geometry() {
        let session = boosted_session();
        let with = Frame::compose(&session.snapshot(), &Settings::default());
        let without = Frame::compose(
            &session.snapshot(),
            &Settings {
                particles: false,
                ..Default::default()
            },
        );
        // five exhaust dots of eight triangles each
        assert_eq!(with.vertices.len() - without.vertices.len(), 5 * 24);
    }

    #[test]
    fn game_over_shows_final_distance() {
        let profile = VehicleRegistry::builtin().get_profile(1).unwrap().clone();
        let mut session = Session::new(profile, Tuning::calm(), 2);
        let lean = TickInput {
            lean_positive: true,
            ..Default::default()
        };
        while session.is_playing() {
            tick(&mut session, &lean);
        }
        let frame = Frame::compose(&session.snapshot(), &Settings::default());
        let expected = format!("DISTANCE: {}m", session.distance());
        assert_eq!(frame.hud.final_stats, Some(expected));
    }
}

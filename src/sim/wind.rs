//! Ambient wind
//!
//! A mean-zero gust target is re-rolled at random and the applied force eases
//! toward it through a first-order low-pass, so the bike never feels a step
//! change. Streaks are decoration: a fixed pool whose members are recycled to
//! the far edge once they scroll out of view.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::{Viewport, WindTuning};

/// A decorative wind line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Streak {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindField {
    pub current_force: f32,
    pub target_force: f32,
    streaks: Vec<Streak>,
    tuning: WindTuning,
    viewport: Viewport,
}

impl WindField {
    /// Calm air with the streak pool scattered across the screen
    pub fn new<R: Rng>(tuning: &WindTuning, viewport: Viewport, rng: &mut R) -> Self {
        let mut field = Self {
            current_force: 0.0,
            target_force: 0.0,
            streaks: Vec::with_capacity(tuning.streak_count),
            tuning: tuning.clone(),
            viewport,
        };
        for _ in 0..tuning.streak_count {
            let x = rng.random::<f32>() * viewport.width;
            let streak = field.new_streak(x, rng);
            field.streaks.push(streak);
        }
        field
    }

    pub fn streaks(&self) -> &[Streak] {
        &self.streaks
    }

    /// Re-roll the gust target (maybe) and ease the applied force toward it
    pub fn update_force<R: Rng>(&mut self, intensity: f32, rng: &mut R) {
        if !self.tuning.enabled {
            return;
        }

        let chance = self.tuning.gust_chance + intensity * self.tuning.gust_chance_per_intensity;
        if rng.random::<f32>() < chance {
            let span = self.tuning.gust_span + intensity * self.tuning.gust_span_per_intensity;
            self.target_force = (rng.random::<f32>() - 0.5) * span;
            log::debug!("Wind gust target {:.4} (span {:.4})", self.target_force, span);
        }

        self.current_force += (self.target_force - self.current_force) * self.tuning.smoothing;
    }

    /// Scroll streaks and recycle the ones that left the screen.
    ///
    /// Two passes: move everything and note who left by which edge, then
    /// respawn those slots in place at the opposite edge so the pool size
    /// never changes.
    pub fn update_streaks<R: Rng>(&mut self, intensity: f32, rng: &mut R) {
        let drift = self.current_force * self.tuning.streak_wind_scale
            - (self.tuning.streak_scroll + intensity * self.tuning.streak_scroll_per_intensity);
        let right = self.viewport.width + self.tuning.right_margin;
        let left = -self.tuning.left_margin;

        let mut expired = Vec::new();
        for (i, streak) in self.streaks.iter_mut().enumerate() {
            streak.x += drift;
            if streak.x > right {
                expired.push((i, Edge::Right));
            } else if streak.x < left {
                expired.push((i, Edge::Left));
            }
        }

        for (i, exited) in expired {
            let x = match exited {
                Edge::Left => self.viewport.width + self.tuning.spawn_margin,
                Edge::Right => -self.tuning.spawn_margin,
            };
            self.streaks[i] = self.new_streak(x, rng);
        }
    }

    fn new_streak<R: Rng>(&self, x: f32, rng: &mut R) -> Streak {
        Streak {
            x,
            y: rng.random::<f32>() * self.viewport.height,
            length: 50.0 + rng.random::<f32>() * 100.0,
            opacity: 0.1 + rng.random::<f32>() * 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field(rng: &mut Pcg32) -> WindField {
        WindField::new(&WindTuning::default(), Viewport::default(), rng)
    }

    #[test]
    fn starts_calm_with_full_pool() {
        let mut rng = Pcg32::seed_from_u64(1);
        let wind = field(&mut rng);
        assert_eq!(wind.current_force, 0.0);
        assert_eq!(wind.streaks().len(), 15);
        for s in wind.streaks() {
            assert!((0.0..=1280.0).contains(&s.x));
            assert!((50.0..=150.0).contains(&s.length));
            assert!((0.1..=0.3).contains(&s.opacity));
        }
    }

    #[test]
    fn force_eases_without_overshoot() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut wind = field(&mut rng);
        wind.tuning.gust_chance = 0.0;
        wind.target_force = 0.01;

        let mut last_gap = wind.target_force - wind.current_force;
        for _ in 0..500 {
            wind.update_force(0.0, &mut rng);
            let gap = wind.target_force - wind.current_force;
            assert!(gap >= 0.0 && gap <= last_gap);
            last_gap = gap;
        }
        assert!((wind.current_force - 0.01).abs() < 1e-5);
    }

    #[test]
    fn gusts_stay_in_span() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut wind = field(&mut rng);
        wind.tuning.gust_chance = 1.0;
        for _ in 0..200 {
            wind.update_force(0.5, &mut rng);
            let half = (0.035 + 0.5 / 50.0) / 2.0;
            assert!(wind.target_force.abs() <= half);
        }
    }

    #[test]
    fn disabled_wind_stays_zero() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut wind = WindField::new(&Tuning::calm().wind, Viewport::default(), &mut rng);
        for _ in 0..1000 {
            wind.update_force(3.0, &mut rng);
        }
        assert_eq!(wind.current_force, 0.0);
        assert_eq!(wind.target_force, 0.0);
    }

    #[test]
    fn streak_pool_is_conserved() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut wind = field(&mut rng);
        for _ in 0..2000 {
            wind.update_streaks(1.0, &mut rng);
            assert_eq!(wind.streaks().len(), 15);
        }
    }

    #[test]
    fn leftward_exit_respawns_right() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut wind = field(&mut rng);
        wind.streaks[0].x = -295.0;
        wind.update_streaks(0.0, &mut rng);
        assert_eq!(wind.streaks[0].x, 1280.0 + 200.0);
    }

    #[test]
    fn leftward_exit_under_tailwind_target_respawns_right() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut wind = field(&mut rng);
        // Gust points right but is too weak to beat the scroll
        wind.target_force = 0.005;
        wind.current_force = 0.005;
        wind.streaks[0].x = -299.0;
        wind.update_streaks(0.0, &mut rng);
        assert_eq!(wind.streaks[0].x, 1280.0 + 200.0);

        for _ in 0..2000 {
            wind.update_streaks(0.0, &mut rng);
        }
        let visible = wind
            .streaks()
            .iter()
            .filter(|s| (0.0..=1280.0).contains(&s.x))
            .count();
        assert!(visible > 0, "all streaks stuck off screen");
    }

    #[test]
    fn rightward_exit_respawns_left() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut wind = field(&mut rng);
        wind.current_force = 0.05;
        wind.target_force = -0.01;
        wind.streaks[0].x = 1280.0 + 199.0;
        wind.update_streaks(0.0, &mut rng);
        assert_eq!(wind.streaks[0].x, -200.0);
    }
}

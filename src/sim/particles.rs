//! Decaying point particles (boost exhaust)
//!
//! Purely visual. Particles never interact, so storage order carries no meaning.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1 at spawn, removed once it reaches 0
    pub life: f32,
    /// Packed 0xRRGGBB
    pub color: u32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: u32) -> Self {
        Self {
            pos,
            vel,
            life: 1.0,
            color,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    decay_per_tick: f32,
    max_particles: usize,
}

impl ParticleSystem {
    pub fn new(decay_per_tick: f32, max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles.min(256)),
            decay_per_tick,
            max_particles,
        }
    }

    /// Add a particle, dropping the oldest when at capacity
    pub fn spawn(&mut self, particle: Particle) {
        if self.max_particles == 0 {
            return;
        }
        if self.particles.len() >= self.max_particles {
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }

    /// Integrate positions and age every particle by one tick
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.life -= self.decay_per_tick;
        }
    }

    pub fn remove_expired(&mut self) {
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

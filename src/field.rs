// The particle set and its per-frame update.

use crate::config::FieldConfig;
use crate::particle::Particle;
use rand::Rng;

#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        ParticleField {
            particles: Vec::new(),
        }
    }

    // Throws away every particle and samples a fresh batch sized for `width`.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        width: u32,
        height: u32,
        config: &FieldConfig,
    ) {
        let count = config.particle_count(width);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::sample(rng, width as f64, height as f64, config));
        }
    }

    pub fn advance(&mut self, width: u32, height: u32) {
        let (width, height) = (width as f64, height as f64);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

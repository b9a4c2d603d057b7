// Tunables for the backdrop. Defaults reproduce the portfolio page look.

use crate::color::Color;

pub const MAX_PARTICLES: usize = 80;
pub const DENSITY_DIVISOR: u32 = 15;
pub const LINK_DISTANCE: f64 = 120.0;
pub const LINK_ALPHA: f64 = 0.08;
pub const LINK_WIDTH: f64 = 0.5;
pub const POINTER_LINK_DISTANCE: f64 = 150.0;
pub const POINTER_LINK_ALPHA: f64 = 0.15;
pub const POINTER_LINK_WIDTH: f64 = 0.8;
pub const POINTER_SENTINEL: [f64; 2] = [-1000.0, -1000.0];

pub const PARTICLE_COLOR: Color = Color::rgb(124, 58, 237);
pub const POINTER_LINK_COLOR: Color = Color::rgb(6, 182, 212);

// Closed interval a value is sampled from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        SampleRange { min, max }
    }

    pub fn lerp(&self, t: f64) -> f64 {
        t * (self.max - self.min) + self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    // Surface pixels of width per particle.
    pub density_divisor: u32,
    pub velocity: SampleRange,
    pub size: SampleRange,
    pub opacity: SampleRange,

    pub particle_color: Color,

    pub link_distance: f64,
    pub link_alpha: f64,
    pub link_width: f64,

    pub pointer_link_distance: f64,
    pub pointer_link_alpha: f64,
    pub pointer_link_width: f64,
    pub pointer_link_color: Color,
    pub pointer_sentinel: [f64; 2],
}

impl FieldConfig {
    // Number of particles seeded for a surface of the given width.
    pub fn particle_count(&self, width: u32) -> usize {
        if self.density_divisor == 0 {
            return self.max_particles;
        }
        self.max_particles
            .min((width / self.density_divisor) as usize)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            max_particles: MAX_PARTICLES,
            density_divisor: DENSITY_DIVISOR,
            velocity: SampleRange::new(-0.25, 0.25),
            size: SampleRange::new(0.5, 2.5),
            opacity: SampleRange::new(0.1, 0.6),
            particle_color: PARTICLE_COLOR,
            link_distance: LINK_DISTANCE,
            link_alpha: LINK_ALPHA,
            link_width: LINK_WIDTH,
            pointer_link_distance: POINTER_LINK_DISTANCE,
            pointer_link_alpha: POINTER_LINK_ALPHA,
            pointer_link_width: POINTER_LINK_WIDTH,
            pointer_link_color: POINTER_LINK_COLOR,
            pointer_sentinel: POINTER_SENTINEL,
        }
    }
}

// One backdrop instance: surface, particles, pointer and the rng that seeds
// them, plus the per-frame draw.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::links;
use crate::pointer::PointerTracker;
use crate::surface::{Surface, SurfaceManager};
use log::debug;
use rand::Rng;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub particle_links: usize,
    pub pointer_links: usize,
}

pub struct Backdrop<S, R> {
    config: FieldConfig,
    surface: SurfaceManager<S>,
    field: ParticleField,
    pointer: PointerTracker,
    rng: R,
}

impl<S: Surface, R: Rng> Backdrop<S, R> {
    // Sizes the surface to the viewport and seeds the first batch.
    pub fn new(
        surface: S,
        rng: R,
        config: FieldConfig,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Self {
        let mut backdrop = Backdrop {
            pointer: PointerTracker::new(config.pointer_sentinel),
            config,
            surface: SurfaceManager::new(surface),
            field: ParticleField::new(),
            rng,
        };
        backdrop.resize(viewport_width, viewport_height);
        backdrop
    }

    // Resizes the surface and regenerates every particle for the new size.
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) {
        let (width, height) = self.surface.resize(viewport_width, viewport_height);
        self.field
            .regenerate(&mut self.rng, width, height, &self.config);
        debug!("surface {}x{}, {} particles", width, height, self.field.len());
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.on_pointer_move(x, y);
    }

    pub fn render_frame(&mut self) -> Result<FrameStats, S::Error> {
        let (width, height) = self.surface.dimensions();
        let config = &self.config;
        let surface = self.surface.surface_mut();

        surface.clear(width, height)?;
        self.field.advance(width, height);

        let particles = self.field.particles();
        for p in particles {
            surface.fill_circle(p.pos, p.size, config.particle_color.with_alpha(p.opacity))?;
        }

        let particle_links =
            links::particle_links(particles, config.link_distance, config.link_alpha);
        for link in &particle_links {
            surface.stroke_line(
                link.from,
                link.to,
                config.link_width,
                config.particle_color.with_alpha(link.alpha),
            )?;
        }

        let pointer_links = links::pointer_links(
            particles,
            self.pointer.position(),
            config.pointer_link_distance,
            config.pointer_link_alpha,
        );
        for link in &pointer_links {
            surface.stroke_line(
                link.from,
                link.to,
                config.pointer_link_width,
                config.pointer_link_color.with_alpha(link.alpha),
            )?;
        }

        Ok(FrameStats {
            particles: particles.len(),
            particle_links: particle_links.len(),
            pointer_links: pointer_links.len(),
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.surface.dimensions()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn pointer(&self) -> [f64; 2] {
        self.pointer.position()
    }

    pub fn surface(&self) -> &S {
        self.surface.surface()
    }
}

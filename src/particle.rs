// Simple particle struct to keep track of individual position, velocity,
// size and opacity. Size and opacity never change after sampling.

use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(
        pos_x: f64,
        pos_y: f64,
        vel_x: f64,
        vel_y: f64,
        size: f64,
        opacity: f64,
    ) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
            opacity,
        }
    }

    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = config.velocity.lerp(rng.gen::<f64>());
        let vel_y = config.velocity.lerp(rng.gen::<f64>());
        let size = config.size.lerp(rng.gen::<f64>());
        let opacity = config.opacity.lerp(rng.gen::<f64>());
        Particle::new(pos_x, pos_y, vel_x, vel_y, size, opacity)
    }

    // Moves by one frame of velocity, then reflects each axis whose new
    // coordinate left [0, extent]. Position is not clamped, so a particle may
    // sit up to one step past the edge until the next frame.
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn step_reflects_past_right_edge() {
        let mut p = Particle::new(99.9, 50.0, 1.0, 0.0, 1.0, 0.5);
        p.step(100.0, 100.0);
        assert!(p.pos[0] > 100.0);
        assert_eq!(p.vel[0], -1.0);
        assert_eq!(p.vel[1], 0.0);
    }

    #[test]
    fn step_reflects_past_top_edge() {
        let mut p = Particle::new(10.0, 0.1, 0.0, -0.25, 1.0, 0.5);
        p.step(100.0, 100.0);
        assert_eq!(p.vel[1], 0.25);
    }

    #[test]
    fn landing_exactly_on_edge_keeps_direction() {
        let mut p = Particle::new(99.75, 0.25, 0.25, -0.25, 1.0, 0.5);
        p.step(100.0, 100.0);
        assert_eq!(p.pos, [100.0, 0.0]);
        assert_eq!(p.vel, [0.25, -0.25]);
    }

    #[test]
    fn sample_stays_in_configured_ranges() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let p = Particle::sample(&mut rng, 640.0, 480.0, &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 640.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 480.0);
            assert!(config.velocity.contains(p.vel[0]));
            assert!(config.velocity.contains(p.vel[1]));
            assert!(config.size.contains(p.size));
            assert!(p.opacity > 0.0 && p.opacity <= 1.0);
            assert!(config.opacity.contains(p.opacity));
        }
    }
}
